//! End-to-end publishing: read a draft, convert it, write the page.

use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::config::PublishConfig;
use crate::error::PublishError;
use crate::markdown::{render_fragment, strip_front_matter};
use crate::refresh::{IndexRefresher, NoRefresh, ScriptRefresher};
use crate::template::render_page;
use crate::title::{output_file_name, resolve_title, TitleSource};

/// A converted document, before it is put into the page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Essay {
    pub title: String,
    pub title_source: TitleSource,
    pub fragment: String,
}

pub struct Publisher {
    config: PublishConfig,
    refresher: Box<dyn IndexRefresher>,
}

impl Publisher {
    /// Builds a publisher whose refresher follows `config.refresh_script`.
    pub fn new(config: PublishConfig) -> Self {
        let refresher: Box<dyn IndexRefresher> = match &config.refresh_script {
            Some(script) => Box::new(ScriptRefresher::new(script)),
            None => Box::new(NoRefresh),
        };
        Self { config, refresher }
    }

    #[must_use]
    pub fn with_refresher(mut self, refresher: impl IndexRefresher + 'static) -> Self {
        self.refresher = Box::new(refresher);
        self
    }

    /// Converts Markdown source into an [`Essay`]. `path` is only used to
    /// derive a title when neither `explicit_title` nor a `# ` heading is
    /// available.
    pub fn convert(source: &str, explicit_title: Option<&str>, path: &Path) -> Essay {
        let body = strip_front_matter(source);
        let (title, title_source, body) = resolve_title(body, explicit_title, path);
        Essay {
            title,
            title_source,
            fragment: render_fragment(&body),
        }
    }

    /// Publishes `input` and returns the path of the written page.
    ///
    /// # Errors
    /// - [`PublishError::FileNotFound`] if `input` does not exist; nothing
    ///   is written.
    /// - [`PublishError::Read`], [`PublishError::CreateDir`] or
    ///   [`PublishError::Write`] on I/O failure.
    ///
    /// A failing refresher never produces an error.
    pub fn publish(
        &self,
        input: &Path,
        explicit_title: Option<&str>,
    ) -> Result<PathBuf, PublishError> {
        if !input.exists() {
            return Err(PublishError::FileNotFound {
                path: input.to_path_buf(),
            });
        }

        let source = std::fs::read_to_string(input).map_err(|source| PublishError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let essay = Self::convert(&source, explicit_title, input);
        debug!(title = %essay.title, source = ?essay.title_source, "resolved title");
        trace!(bytes = essay.fragment.len(), "rendered fragment");

        let page = render_page(&essay.title, &essay.fragment, &self.config.page);
        let output = self.write_page(&essay.title, &page)?;
        info!(path = %output.display(), "wrote essay");

        match self.refresher.refresh() {
            Ok(()) => debug!("index refreshed"),
            Err(err) => debug!(error = %err, "index refresh failed, ignoring"),
        }

        Ok(output)
    }

    fn write_page(&self, title: &str, page: &str) -> Result<PathBuf, PublishError> {
        let dir = &self.config.essays_dir;
        std::fs::create_dir_all(dir).map_err(|source| PublishError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let output = dir.join(output_file_name(title));
        std::fs::write(&output, page).map_err(|source| PublishError::Write {
            path: output.clone(),
            source,
        })?;
        Ok(output)
    }
}
