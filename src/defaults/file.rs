//! TOML file source for field defaults.

use std::path::{Path, PathBuf};

use toml::Table;

use super::source::DefaultsSource;
use super::DefaultsError;

/// Loads defaults from a TOML file.
///
/// A missing required file is an error; a missing optional file contributes nothing.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }

    fn parse(&self, contents: &str) -> Result<Table, DefaultsError> {
        toml::from_str(contents).map_err(|e| DefaultsError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl DefaultsSource for FileSource {
    fn values(&self) -> Result<Table, DefaultsError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !self.required => {
                tracing::debug!(path = %self.path.display(), "optional field defaults file missing, skipping");
                return Ok(Table::new());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DefaultsError::FileNotFound(self.path.clone()));
            }
            Err(e) => {
                return Err(DefaultsError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let table = self.parse(&contents)?;
        tracing::debug!(path = %self.path.display(), keys = table.len(), "loaded field defaults file");
        Ok(table)
    }
}
