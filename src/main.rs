mod args;
mod config;
mod loader;

use std::str::FromStr;

use anyhow::{bail, Context};
use compressed_dict::CompressedDictionary;
use tracing::{debug, Level};

use self::args::*;
use self::config::DictConfig;

fn main() -> anyhow::Result<()> {
    let args = args();
    if args.write_config {
        DictConfig::write_config(&args.config, &DictConfig::default())
            .with_context(|| format!("writing {}", args.config.display()))?;
        println!("wrote {}", args.config.display());
        return Ok(());
    }

    let cfg = DictConfig::read_config(&args.config)
        .with_context(|| format!("reading {}", args.config.display()))?;
    let level = Level::from_str(&cfg.log_level)
        .with_context(|| format!("bad log_level {:?}", cfg.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    debug!(?cfg, "configuration");

    let mut dict = CompressedDictionary::new();
    for path in cfg.word_lists.iter().chain(&args.word_lists) {
        loader::load_file(&mut dict, path, cfg.skip_invalid)?;
    }
    if cfg.check_integrity && !dict.check_integrity() {
        bail!("dictionary failed its integrity check");
    }

    for word in &args.removals {
        let removed = dict.remove(word)?;
        println!("remove {}: {}", word, removed);
    }

    for query in &args.queries {
        match query {
            Query::Exact(word) => println!("{}: {}", word, dict.search(word, false)?),
            Query::Prefix(prefix) => {
                for word in dict.words_with_prefix(prefix)? {
                    println!("{}", word);
                }
            }
            Query::Longest(word) => match dict.longest_prefix_of(word)? {
                Some(found) => println!("{}: {}", word, found),
                None => println!("{}: -", word),
            },
        }
    }

    if args.list {
        for word in &dict {
            println!("{}", word);
        }
    }

    if args.removals.is_empty() && args.queries.is_empty() && !args.list {
        println!("{} words", dict.len());
    }
    Ok(())
}
