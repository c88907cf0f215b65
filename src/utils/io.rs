// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory
pub fn get_app_config_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "passgen", "passgen") {
        Some(proj_dirs.config_dir().to_path_buf())
    } else {
        log::debug!("Could not determine config directory");
        None
    }
}
