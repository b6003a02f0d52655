//! Turns a Markdown draft into a self-contained, styled HTML essay page.
//!
//! The conversion is deliberately small: a fixed, ordered set of regex
//! substitutions (see [`markdown::RULES`]), paragraph wrapping, and a static
//! page template. [`publish::Publisher`] ties it together and writes the page
//! to a directory chosen by [`config::PublishConfig`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod publish;
pub mod refresh;
pub mod template;
pub mod title;
