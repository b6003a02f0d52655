//! The essay page template.

/// Fixed literals stamped into every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub author: String,
    pub date: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            author: "Daksh Mehta".to_owned(),
            date: "2026".to_owned(),
        }
    }
}

/// Wraps a content fragment in the full essay page. Title and content are
/// inserted as-is.
pub fn render_page(title: &str, content: &str, meta: &PageMeta) -> String {
    let author = &meta.author;
    let date = &meta.date;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {author}</title>
    <style>
        body {{
            font-family: Verdana, Geneva, sans-serif;
            font-size: 14px;
            line-height: 1.8;
            color: #000;
            background-color: #f6f6ef;
            margin: 0;
            padding: 20px;
        }}

        .container {{
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
        }}

        h1 {{
            font-size: 18px;
            font-weight: bold;
            margin-bottom: 10px;
        }}

        h2 {{
            font-size: 16px;
            font-weight: bold;
            margin-top: 30px;
            margin-bottom: 15px;
        }}

        h3 {{
            font-size: 15px;
            font-weight: bold;
            margin-top: 25px;
            margin-bottom: 12px;
        }}

        a {{
            color: #000;
            text-decoration: underline;
        }}

        a:hover {{
            color: #666;
        }}

        .nav {{
            margin-bottom: 30px;
        }}

        .nav a {{
            margin-right: 15px;
        }}

        .date {{
            color: #666;
            font-size: 12px;
            margin-bottom: 30px;
        }}

        .content p {{
            margin-bottom: 20px;
            text-align: justify;
        }}

        .content code {{
            background-color: #e8e8e0;
            padding: 2px 5px;
            font-family: monospace;
        }}

        .footer {{
            margin-top: 50px;
            font-size: 12px;
            color: #666;
        }}

        hr {{
            border: none;
            border-top: 1px solid #ccc;
            margin: 20px 0;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <div class="date">{date}</div>

        <div class="nav">
            <a href="../index.html">Home</a>
            <a href="../articles.html">Essays</a>
            <a href="../about.html">About</a>
        </div>

        <hr>

        <div class="content">
            {content}
        </div>

        <hr>

        <div class="footer">
            &copy; {date} {author}
        </div>
    </div>
</body>
</html>
"#
    )
}
