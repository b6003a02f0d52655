//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::PublishConfig;
use crate::error::PublishError;
use crate::publish::Publisher;

/// Shown when no Markdown file is given.
pub const USAGE: &str = "\
Usage: publish <markdown-file> [title]
Example: publish drafts/my-essay.md
         publish drafts/my-essay.md \"My Custom Title\"";

/// Convert a Markdown draft into a styled HTML essay page.
#[derive(Parser, Debug)]
#[command(name = "publish", version, about)]
pub struct Cli {
    /// Markdown file to publish.
    pub input: Option<PathBuf>,

    /// Page title. Defaults to the first `# ` heading, then the file name.
    pub title: Option<String>,

    /// Write pages here instead of `essays/` next to the program.
    #[arg(long, value_name = "DIR")]
    pub essays_dir: Option<PathBuf>,

    /// Do not run `update-essays.sh` after writing.
    #[arg(long)]
    pub no_refresh: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Builds the configuration this invocation asks for.
    ///
    /// # Errors
    /// Propagates [`PublishError::ProgramLocation`].
    pub fn config(&self) -> Result<PublishConfig, PublishError> {
        let mut config = PublishConfig::from_program_location()?;
        if let Some(dir) = &self.essays_dir {
            config = config.with_essays_dir(dir);
        }
        if self.no_refresh {
            config = config.without_refresh();
        }
        Ok(config)
    }
}

/// Runs one invocation and returns the written page path.
///
/// # Errors
/// [`PublishError::MissingArgument`] without an input file, otherwise
/// whatever [`Publisher::publish`] returns.
pub fn dispatch(cli: &Cli) -> Result<PathBuf, PublishError> {
    let input = cli.input.as_deref().ok_or(PublishError::MissingArgument)?;
    let publisher = Publisher::new(cli.config()?);
    publisher.publish(input, cli.title.as_deref())
}
