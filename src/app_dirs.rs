use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "oddjobs";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
            Some(proj_dirs.config_dir().join("config.json"))
        } else {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join(APP_NAME)
                    .join("config.json")
            })
        }
    }
}
