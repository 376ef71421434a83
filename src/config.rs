use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOAD_PARALLELISM: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one `<season>.json` file per season.
    pub data_dir: PathBuf,
    pub load_parallelism: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            load_parallelism: DEFAULT_LOAD_PARALLELISM,
        }
    }
}

impl AppConfig {
    /// Read `STREAKS_DATA_DIR` and `STREAKS_LOAD_PARALLELISM`, falling back to
    /// defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_dir = lookup("STREAKS_DATA_DIR")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let load_parallelism = lookup("STREAKS_LOAD_PARALLELISM")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(defaults.load_parallelism)
            .clamp(1, 32);
        Self {
            data_dir,
            load_parallelism,
        }
    }
}
