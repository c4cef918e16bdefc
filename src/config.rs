use crate::app_dirs::AppDirs;
use crate::log_streams::eligibility::{DEFAULT_MAX_AGE_MS, MS_PER_DAY};
use crate::practice::{
    COMMON_LETTERS, DEFAULT_LETTERS_PER_RUN, DEFAULT_PRACTICE_LENGTH, DEFAULT_SAMPLE_COUNT,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Defaults for both subcommands; command line flags win over these
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub debug_file: PathBuf,
    pub max_age_days: u32,
    pub word_list: PathBuf,
    pub practice_length: usize,
    pub sample_count: usize,
    pub letters_per_run: usize,
    pub ranking: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_file: PathBuf::from("/tmp/debug"),
            max_age_days: (DEFAULT_MAX_AGE_MS / MS_PER_DAY) as u32,
            word_list: PathBuf::from("common-words.txt"),
            practice_length: DEFAULT_PRACTICE_LENGTH,
            sample_count: DEFAULT_SAMPLE_COUNT,
            letters_per_run: DEFAULT_LETTERS_PER_RUN,
            ranking: COMMON_LETTERS.to_string(),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("oddjobs_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file, using defaults");
                return Config::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read config file, using defaults");
                return Config::default();
            }
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable config file");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
