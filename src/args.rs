use std::env;
use std::path::PathBuf;
use std::process::exit;

use getopts::{Matches, Options};

pub enum Query {
    Exact(String),
    Prefix(String),
    Longest(String),
}

pub struct Args {
    pub config: PathBuf,
    pub write_config: bool,
    pub word_lists: Vec<PathBuf>,
    pub removals: Vec<String>,
    pub queries: Vec<Query>,
    pub list: bool,
    program: String,
    opts: Options,
}

impl Args {
    pub fn print_usage_and_exit(&self, code: i32) -> ! {
        let brief = format!("Usage: {} [-c cdict.yaml] [-w FILE]... [options]", self.program);
        print!("{}", self.opts.usage(&brief));
        exit(code)
    }
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("c", "config", "configuration file (default cdict.yaml)", "FILE");
    opts.optflag("g", "gen-config", "write the default configuration and exit");
    opts.optmulti("w", "words", "load a word list, one word per line", "FILE");
    opts.optmulti("r", "remove", "remove a word", "WORD");
    opts.optmulti("s", "search", "look up a word", "WORD");
    opts.optmulti("p", "prefix", "list the words starting with a prefix", "PREFIX");
    opts.optmulti("a", "ancestor", "find the longest stored prefix of a word", "WORD");
    opts.optflag("l", "list", "list every word");
    opts.optflag("h", "help", "print this help menu");
    opts
}

/// Queries in the order they were given on the command line.
fn queries(matches: &Matches) -> Vec<Query> {
    let mut queries: Vec<(usize, Query)> = Vec::new();
    queries.extend(matches.opt_strs_pos("s").into_iter().map(|(i, s)| (i, Query::Exact(s))));
    queries.extend(matches.opt_strs_pos("p").into_iter().map(|(i, s)| (i, Query::Prefix(s))));
    queries.extend(matches.opt_strs_pos("a").into_iter().map(|(i, s)| (i, Query::Longest(s))));
    queries.sort_by_key(|(i, _)| *i);
    queries.into_iter().map(|(_, q)| q).collect()
}

pub fn args() -> Args {
    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "cdict".to_owned());
    let opts = options();
    let matches = match opts.parse(args.iter().skip(1)) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("{}", err);
            Args::empty(program, opts).print_usage_and_exit(2)
        }
    };
    let mut args = Args::empty(program, opts);
    if matches.opt_present("h") { args.print_usage_and_exit(0) }
    if let Some(s) = matches.opt_str("c") {
        args.config = PathBuf::from(s)
    }
    args.write_config = matches.opt_present("g");
    args.word_lists = matches.opt_strs("w").into_iter().map(PathBuf::from).collect();
    args.removals = matches.opt_strs("r");
    args.queries = queries(&matches);
    args.list = matches.opt_present("l");
    args
}

impl Args {
    fn empty(program: String, opts: Options) -> Args {
        Args {
            config: PathBuf::from("cdict.yaml"),
            write_config: false,
            word_lists: Vec::new(),
            removals: Vec::new(),
            queries: Vec::new(),
            list: false,
            program,
            opts,
        }
    }
}
