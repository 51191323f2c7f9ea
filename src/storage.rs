//! High-score persistence in a one-line text file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{GameError, GameResult};

/// File-backed store for the best score ever reached.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored high score. A missing file counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the file exists but cannot be read, or
    /// [`GameError::InvalidState`] if it does not hold a number.
    pub fn load(&self) -> GameResult<u32> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No high score file yet");
                return Ok(0);
            }
            Err(error) => return Err(error.into()),
        };

        let score = contents.trim().parse::<u32>().map_err(|error| {
            GameError::InvalidState(format!("High score file {} is corrupt: {error}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), score, "Loaded high score");
        Ok(score)
    }

    /// Overwrites the stored high score, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the file cannot be written.
    pub fn save(&self, score: u32) -> GameResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{score}\n"))?;
        info!(path = %self.path.display(), score, "Saved high score");
        Ok(())
    }
}
