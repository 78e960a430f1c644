//! Round results persisted to disk between runs.

use derive_more::{Display, Error};
use morpion_core::{RoundResult, ScoreSink, Tally};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

/// A [`Tally`] backed by a JSON file.
///
/// As a [`ScoreSink`] it rewrites the file after every round, so an
/// interrupted session loses nothing.
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
    tally: Tally,
}

impl ScoreFile {
    /// Opens the score file at `path`. A missing file starts from zero.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreFileError`] if the file exists but cannot be read or
    /// parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScoreFileError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            info!("No score file yet, starting from zero");
            return Ok(Self {
                path,
                tally: Tally::new(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            ScoreFileError::new(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let tally: Tally = serde_json::from_str(&content).map_err(|e| {
            ScoreFileError::new(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        debug!(total = tally.total(), "Score file loaded");
        Ok(Self { path, tally })
    }

    /// Writes the tally to disk, creating parent directories as needed.
    ///
    /// The data goes to a temporary file next to the target, which is then
    /// renamed over it: the file on disk is always either the old tally or
    /// the new one.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self) -> Result<(), ScoreFileError> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| {
            ScoreFileError::new(format!("Failed to create '{}': {}", parent.display(), e))
        })?;
        let data = serde_json::to_string_pretty(&self.tally)
            .map_err(|e| ScoreFileError::new(format!("Failed to serialize scores: {}", e)))?;

        let mut staged = NamedTempFile::new_in(parent).map_err(|e| {
            ScoreFileError::new(format!("Failed to stage in '{}': {}", parent.display(), e))
        })?;
        staged
            .write_all(data.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| {
                ScoreFileError::new(format!("Failed to write '{}': {}", self.path.display(), e))
            })?;
        staged.persist(&self.path).map_err(|e| {
            ScoreFileError::new(format!("Failed to replace '{}': {}", self.path.display(), e.error))
        })?;
        debug!("Score file saved");
        Ok(())
    }

    /// Current tally.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Tally> for ScoreFile {
    fn as_ref(&self) -> &Tally {
        &self.tally
    }
}

impl ScoreSink for ScoreFile {
    fn record_result(&mut self, result: RoundResult) {
        self.tally.record_result(result);
        if let Err(e) = self.save() {
            warn!(error = %e, "Could not persist scores");
        }
    }
}

/// Failure reading or writing the score file.
#[derive(Debug, Clone, Display, Error)]
#[display("Score file error: {} at {}:{}", message, file, line)]
pub struct ScoreFileError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScoreFileError {
    /// Creates a new score file error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
