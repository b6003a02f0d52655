//! Publisher configuration.
//!
//! Output lands next to the program, not under the caller's working
//! directory. That location is resolved once here and passed in, so
//! everything downstream only ever sees an explicit directory.

use std::path::{Path, PathBuf};

use crate::error::PublishError;
use crate::template::PageMeta;

const ESSAYS_DIR_NAME: &str = "essays";
const REFRESH_SCRIPT_NAME: &str = "update-essays.sh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Directory rendered pages are written into.
    pub essays_dir: PathBuf,
    /// Script run after a successful write, if it exists.
    pub refresh_script: Option<PathBuf>,
    pub page: PageMeta,
}

impl PublishConfig {
    /// Layout rooted at `dir`: `dir/essays/` and `dir/update-essays.sh`.
    pub fn for_program_dir(dir: &Path) -> Self {
        Self {
            essays_dir: dir.join(ESSAYS_DIR_NAME),
            refresh_script: Some(dir.join(REFRESH_SCRIPT_NAME)),
            page: PageMeta::default(),
        }
    }

    /// Layout rooted at the directory holding the running executable.
    ///
    /// # Errors
    /// Returns [`PublishError::ProgramLocation`] when the executable path
    /// cannot be resolved.
    pub fn from_program_location() -> Result<Self, PublishError> {
        let exe = std::env::current_exe().map_err(PublishError::ProgramLocation)?;
        let dir = exe.parent().ok_or_else(|| {
            PublishError::ProgramLocation(std::io::Error::other(format!(
                "executable '{}' has no parent directory",
                exe.display()
            )))
        })?;
        Ok(Self::for_program_dir(dir))
    }

    #[must_use]
    pub fn with_essays_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.essays_dir = dir.into();
        self
    }

    #[must_use]
    pub fn without_refresh(mut self) -> Self {
        self.refresh_script = None;
        self
    }
}
