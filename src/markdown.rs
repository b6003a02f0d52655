//! Markdown → HTML fragment conversion.
//!
//! The conversion is a fixed, ordered list of regex substitutions followed by
//! paragraph segmentation. It is not a Markdown parser: lists, blockquotes,
//! tables, images and fenced code pass through untouched except where they
//! happen to match one of the inline patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator placed between rendered blocks. The indentation lines the
/// blocks up inside the page template's `<div class="content">`.
pub const BLOCK_SEPARATOR: &str = "\n            \n            ";

static FRONT_MATTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\n.*?---\n").expect("valid front-matter regex"));
static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph break regex"));

/// One substitution step: every non-overlapping match of `pattern` is
/// replaced with `replacement` (which may reference capture groups).
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid substitution rule regex"),
            replacement,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

/// Substitution rules in application order.
///
/// Order matters:
/// - heading markers run longest first, so `## ` is never taken for `# `;
/// - triple emphasis runs before double, double before single, so
///   `***x***` becomes nested strong+em instead of a bold with stray stars;
/// - links and inline code run last and see already-emphasized text.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("h4", r"(?m)^#### (.+)$", "<h4>${1}</h4>"),
        Rule::new("h3", r"(?m)^### (.+)$", "<h3>${1}</h3>"),
        Rule::new("h2", r"(?m)^## (.+)$", "<h2>${1}</h2>"),
        Rule::new("h1", r"(?m)^# (.+)$", "<h1>${1}</h1>"),
        Rule::new(
            "strong-em-star",
            r"\*\*\*(.+?)\*\*\*",
            "<strong><em>${1}</em></strong>",
        ),
        Rule::new(
            "strong-em-underscore",
            r"___(.+?)___",
            "<strong><em>${1}</em></strong>",
        ),
        Rule::new("strong-star", r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        Rule::new("strong-underscore", r"__(.+?)__", "<strong>${1}</strong>"),
        Rule::new("em-star", r"\*(.+?)\*", "<em>${1}</em>"),
        Rule::new("em-underscore", r"_(.+?)_", "<em>${1}</em>"),
        Rule::new("link", r"\[([^\]]+)\]\(([^)]+)\)", r#"<a href="${2}">${1}</a>"#),
        Rule::new("code", r"`([^`]+)`", "<code>${1}</code>"),
    ]
});

/// Removes a leading `---` … `---` metadata block, if present.
pub fn strip_front_matter(text: &str) -> &str {
    match FRONT_MATTER_RE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Runs every rule in [`RULES`] over `text`, in order.
pub fn apply_rules(text: &str) -> String {
    RULES
        .iter()
        .fold(text.to_owned(), |acc, rule| rule.apply(&acc))
}

/// Splits on blank lines after trimming the whole text.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK_RE.split(text.trim()).collect()
}

/// Renders one block. Headings and list containers are kept as they are;
/// anything else is joined onto one line and wrapped in `<p>`.
pub fn render_block(block: &str) -> Option<String> {
    let block = block.trim();
    if block.is_empty() {
        return None;
    }
    if block.starts_with("<h") || block.starts_with("<ul") || block.starts_with("<ol") {
        return Some(block.to_owned());
    }
    Some(format!("<p>{}</p>", block.replace('\n', " ")))
}

/// Converts a whole Markdown document, front-matter included, into an HTML
/// fragment.
pub fn to_fragment(markdown: &str) -> String {
    render_fragment(strip_front_matter(markdown))
}

/// Converts a body that has already had its front-matter removed.
pub fn render_fragment(body: &str) -> String {
    let html = apply_rules(body);
    split_paragraphs(&html)
        .into_iter()
        .filter_map(render_block)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_leading_front_matter() {
        let text = "---\ntitle: x\ndate: 2026\n---\nBody text\n";
        assert_eq!(strip_front_matter(text), "Body text\n");
    }

    #[test]
    fn front_matter_must_be_leading() {
        let text = "Intro\n---\nnot: meta\n---\nrest";
        assert_eq!(strip_front_matter(text), text);
    }

    #[test]
    fn front_matter_match_is_non_greedy() {
        let text = "---\na: 1\n---\nkeep\n---\nthis too\n";
        assert_eq!(strip_front_matter(text), "keep\n---\nthis too\n");
    }

    #[test]
    fn strip_front_matter_is_idempotent() {
        let once = strip_front_matter("---\nk: v\n---\n# Title\n\nBody\n");
        assert_eq!(strip_front_matter(once), once);
    }

    #[test]
    fn rule_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "h4",
                "h3",
                "h2",
                "h1",
                "strong-em-star",
                "strong-em-underscore",
                "strong-star",
                "strong-underscore",
                "em-star",
                "em-underscore",
                "link",
                "code",
            ]
        );
    }

    #[test]
    fn headings_use_longest_marker() {
        let html = apply_rules("#### four\n### three\n## two\n# one");
        assert_eq!(html, "<h4>four</h4>\n<h3>three</h3>\n<h2>two</h2>\n<h1>one</h1>");
    }

    #[test]
    fn heading_marker_needs_line_start_and_space() {
        assert_eq!(apply_rules("see #1 and a # b"), "see #1 and a # b");
        assert_eq!(apply_rules("#nospace"), "#nospace");
    }

    #[test]
    fn triple_emphasis_nests_strong_and_em() {
        assert_eq!(
            apply_rules("***bold-italic***"),
            "<strong><em>bold-italic</em></strong>"
        );
        assert_eq!(
            apply_rules("___bold-italic___"),
            "<strong><em>bold-italic</em></strong>"
        );
    }

    #[test]
    fn bold_and_italic_forms() {
        assert_eq!(apply_rules("**b** and __b__"), "<strong>b</strong> and <strong>b</strong>");
        assert_eq!(apply_rules("*i* and _i_"), "<em>i</em> and <em>i</em>");
    }

    #[test]
    fn emphasis_is_lazy() {
        assert_eq!(apply_rules("*a* b *c*"), "<em>a</em> b <em>c</em>");
        assert_eq!(
            apply_rules("**a** **b**"),
            "<strong>a</strong> <strong>b</strong>"
        );
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        assert_eq!(apply_rules("*open\nclose*"), "*open\nclose*");
    }

    #[test]
    fn links_are_not_escaped() {
        assert_eq!(
            apply_rules("[a & b](https://x.io/?q=1&r=2)"),
            r#"<a href="https://x.io/?q=1&r=2">a & b</a>"#
        );
    }

    #[test]
    fn inline_code() {
        assert_eq!(apply_rules("run `ls -la` now"), "run <code>ls -la</code> now");
        assert_eq!(apply_rules("empty `` ticks"), "empty `` ticks");
    }

    #[test]
    fn underscores_inside_words_are_italicised() {
        // No word-boundary handling: snake_case_name matches the single form.
        assert_eq!(apply_rules("snake_case_name"), "snake<em>case</em>name");
    }

    #[test]
    fn split_tolerates_whitespace_only_lines() {
        let parts = split_paragraphs("\n\none\n  \t\ntwo\n\n\n\nthree\n\n");
        assert_eq!(parts, vec!["one", "two", "three"]);
    }

    #[test]
    fn render_block_wraps_and_joins_lines() {
        assert_eq!(
            render_block("line one\nline two").as_deref(),
            Some("<p>line one line two</p>")
        );
    }

    #[test]
    fn render_block_keeps_headings_and_lists() {
        assert_eq!(render_block("<h2>x</h2>").as_deref(), Some("<h2>x</h2>"));
        assert_eq!(render_block("<ul><li>x</li></ul>").as_deref(), Some("<ul><li>x</li></ul>"));
        assert_eq!(render_block("<ol>\n<li>x</li></ol>").as_deref(), Some("<ol>\n<li>x</li></ol>"));
        assert_eq!(render_block("   \n "), None);
    }

    #[test]
    fn heading_followed_by_text_stays_one_block() {
        // Without a blank line the heading and text form a single block that
        // starts with `<h`, so it is kept verbatim.
        assert_eq!(to_fragment("## Part\nsome text"), "<h2>Part</h2>\nsome text");
    }

    #[test]
    fn fragment_joins_blocks_with_separator() {
        let md = "---\nk: v\n---\n## Intro\n\nFirst *para*\ncontinues.\n\n\nSecond with `code`.";
        let expected = [
            "<h2>Intro</h2>",
            "<p>First <em>para</em> continues.</p>",
            "<p>Second with <code>code</code>.</p>",
        ]
        .join(BLOCK_SEPARATOR);
        assert_eq!(to_fragment(md), expected);
    }

    #[test]
    fn render_fragment_leaves_dashed_blocks_alone() {
        assert_eq!(
            render_fragment("---\nkept: yes\n---\nBody"),
            "<p>--- kept: yes --- Body</p>"
        );
    }

    #[test]
    fn empty_document_gives_empty_fragment() {
        assert_eq!(to_fragment(""), "");
        assert_eq!(to_fragment("---\nk: v\n---\n\n\n"), "");
    }

    #[test]
    fn unsupported_markdown_passes_through() {
        assert_eq!(to_fragment("> quoted\n- item"), "<p>> quoted - item</p>");
    }

    proptest! {
        #[test]
        fn stripping_single_block_is_idempotent(
            meta in "[a-z: 0-9\n]{0,40}",
            body in "[A-Za-z0-9 .,\n]{0,80}",
        ) {
            let doc = format!("---\n{meta}---\n{body}");
            let once = strip_front_matter(&doc);
            prop_assert_eq!(once, body.as_str());
            prop_assert_eq!(strip_front_matter(once), once);
        }
    }
}
