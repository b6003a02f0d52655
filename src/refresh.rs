//! Post-publish index refresh.
//!
//! After a page is written the site index may need rebuilding. That job
//! belongs to an external collaborator; the publisher only calls it and
//! ignores the outcome.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::PublishError;

/// Called once after every successful write.
pub trait IndexRefresher {
    /// # Errors
    /// Implementations report their own failure; callers treat it as
    /// non-fatal.
    fn refresh(&self) -> Result<(), PublishError>;
}

/// Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRefresh;

impl IndexRefresher for NoRefresh {
    fn refresh(&self) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Runs an executable script with no arguments, if it exists.
#[derive(Debug, Clone)]
pub struct ScriptRefresher {
    script: PathBuf,
}

impl ScriptRefresher {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl IndexRefresher for ScriptRefresher {
    fn refresh(&self) -> Result<(), PublishError> {
        if !self.script.exists() {
            debug!(script = %self.script.display(), "no refresh script, skipping");
            return Ok(());
        }

        let status = Command::new(&self.script)
            .status()
            .map_err(|err| PublishError::Refresh {
                script: self.script.clone(),
                reason: err.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PublishError::Refresh {
                script: self.script.clone(),
                reason: status.to_string(),
            })
        }
    }
}
