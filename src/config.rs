use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictConfig {
    /// Word lists loaded before any given on the command line.
    pub word_lists: Vec<PathBuf>,
    /// Skip (and log) malformed lines in word lists instead of failing.
    pub skip_invalid: bool,
    /// Maximum level written to stderr: error, warn, info, debug or trace.
    pub log_level: String,
    /// Verify the dictionary structure after loading.
    pub check_integrity: bool,
}

impl Default for DictConfig {
    fn default() -> Self {
        DictConfig {
            word_lists: Vec::new(),
            skip_invalid: false,
            log_level: "warn".to_owned(),
            check_integrity: false,
        }
    }
}

fn invalid_data(err: serde_yaml::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("parsing error: {}", err))
}

impl DictConfig {
    pub fn write_config(path: &Path, cfg: &DictConfig) -> io::Result<()> {
        let fp = File::create(path)?;
        serde_yaml::to_writer(fp, cfg).map_err(invalid_data)
    }

    /// Read the configuration at `path`, falling back to the defaults if there is none.
    pub fn read_config(path: &Path) -> io::Result<DictConfig> {
        match File::open(path) {
            Ok(fp) => serde_yaml::from_reader(fp).map_err(invalid_data),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DictConfig::default()),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: DictConfig = serde_yaml::from_str("skip_invalid: true\n").unwrap();
        assert_eq!(
            cfg,
            DictConfig {
                skip_invalid: true,
                ..DictConfig::default()
            }
        );
    }

    #[test]
    fn full_config() {
        let yaml = "word_lists:\n  - words.txt\n  - /usr/share/dict/extra\nskip_invalid: false\nlog_level: debug\ncheck_integrity: true\n";
        let cfg: DictConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            cfg.word_lists,
            [PathBuf::from("words.txt"), PathBuf::from("/usr/share/dict/extra")]
        );
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.check_integrity);
    }

    #[test]
    fn missing_file_is_default() {
        let cfg = DictConfig::read_config(Path::new("/nonexistent/cdict.yaml")).unwrap();
        assert_eq!(cfg, DictConfig::default());
    }
}
