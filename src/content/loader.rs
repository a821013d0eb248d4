//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::MovementConfigDef;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse movement tuning from RON text. `file` is only used for error context.
pub fn parse_movement_config(
    contents: &str,
    file: &str,
) -> Result<MovementConfigDef, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load `movement.ron` from the given data directory.
pub fn load_movement_config(base_path: &Path) -> Result<MovementConfigDef, ConfigLoadError> {
    let path = base_path.join("movement.ron");
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_config(&contents, &file_name)
}
