//! Title resolution and output file naming.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^# (.+)$").expect("valid heading title regex"));
static SLUG_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid slug strip regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Where a resolved title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    Explicit,
    Heading,
    Filename,
}

/// Capitalizes the first letter of every word and lowercases the rest.
/// A word starts at any cased letter that does not follow another cased
/// letter; uncased characters (digits, punctuation, CJK) end a word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_cased = false;
    for ch in text.chars() {
        let is_cased = ch.is_lowercase() || ch.is_uppercase();
        if !is_cased {
            out.push(ch);
        } else if prev_is_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_is_cased = is_cased;
    }
    out
}

/// `drafts/my-first_essay.md` → `My First Essay`.
pub fn title_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    title_case(&stem.replace(['-', '_'], " "))
}

/// Finds the first `# ` heading line. Returns its text and the body with
/// that single line removed.
pub fn extract_heading_title(body: &str) -> Option<(String, String)> {
    let caps = HEADING_TITLE_RE.captures(body)?;
    let line = caps.get(0)?;
    let title = caps.get(1)?.as_str().to_owned();

    let mut end = line.end();
    if body[end..].starts_with('\n') {
        end += 1;
    }
    let mut rest = String::with_capacity(body.len() - (end - line.start()));
    rest.push_str(&body[..line.start()]);
    rest.push_str(&body[end..]);
    Some((title, rest))
}

/// Picks the page title: explicit argument, then embedded heading, then the
/// file name. Returns the title, where it came from, and the remaining body.
pub fn resolve_title(
    body: &str,
    explicit: Option<&str>,
    path: &Path,
) -> (String, TitleSource, String) {
    if let Some(title) = explicit {
        return (title.to_owned(), TitleSource::Explicit, body.to_owned());
    }
    if let Some((title, rest)) = extract_heading_title(body) {
        return (title, TitleSource::Heading, rest);
    }
    (
        title_from_filename(path),
        TitleSource::Filename,
        body.to_owned(),
    )
}

/// `Hello, World!` → `hello-world.html`.
pub fn output_file_name(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = SLUG_STRIP_RE.replace_all(&lowered, "");
    let slug = WHITESPACE_RE.replace_all(&stripped, "-");
    format!("{slug}.html")
}
