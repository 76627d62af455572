use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use compressed_dict::CompressedDictionary;
use tracing::{info, warn};

/// Outcome of loading one word list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub added: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

pub fn load_file(dict: &mut CompressedDictionary, path: &Path, skip_invalid: bool) -> io::Result<LoadStats> {
    let stats = load_words(dict, BufReader::new(File::open(path)?), skip_invalid)
        .map_err(|err| io::Error::new(err.kind(), format!("{}: {}", path.display(), err)))?;
    info!(path = %path.display(), ?stats, "loaded word list");
    Ok(stats)
}

/// Insert one word per line; blank lines and lines starting with `#` are ignored.
pub fn load_words<R: BufRead>(dict: &mut CompressedDictionary, input: R, skip_invalid: bool) -> io::Result<LoadStats> {
    let mut stats = LoadStats::default();
    for (n, l) in input.lines().enumerate() {
        let l = l?;
        let word = l.trim();
        if word.is_empty() || word.starts_with('#') { continue }
        match dict.insert(word) {
            Ok(true) => stats.added += 1,
            Ok(false) => stats.duplicates += 1,
            Err(err) if skip_invalid => {
                warn!(line = n + 1, %err, "skipping word");
                stats.skipped += 1
            }
            Err(err) => {
                return Err(io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", n + 1, err)))
            }
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "# greetings\nhello\n\n  World \nhello\nhi there\n";

    #[test]
    fn skips_comments_and_counts() {
        let mut dict = CompressedDictionary::new();
        let stats = load_words(&mut dict, io::Cursor::new(LIST), true).unwrap();
        assert_eq!(stats, LoadStats { added: 2, duplicates: 1, skipped: 1 });
        assert!(dict.contains("world").unwrap());
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn invalid_line_fails_strict_load() {
        let mut dict = CompressedDictionary::new();
        let err = load_words(&mut dict, io::Cursor::new(LIST), false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 6:"));
    }
}
