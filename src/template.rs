//! Document shell – wraps a rendered HTML fragment in a complete styled
//! page, and promotes ASCII-art diagrams out of ordinary code blocks.
//!
//! The stylesheet targets technical documents: bordered tables, monospace
//! code blocks, and `@media print` rules that keep headings attached to
//! their content and diagrams unsplit across page breaks.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Stylesheet embedded in every generated document.
const STYLESHEET: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }

        h1 {
            color: #2c3e50;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
            page-break-before: always;
        }

        h1:first-of-type {
            page-break-before: avoid;
        }

        h2 {
            color: #34495e;
            border-bottom: 2px solid #ecf0f1;
            padding-bottom: 5px;
            margin-top: 30px;
            page-break-after: avoid;
        }

        h3 {
            color: #7f8c8d;
            margin-top: 25px;
            page-break-after: avoid;
        }

        pre {
            background-color: #f8f9fa;
            border: 1px solid #e9ecef;
            border-radius: 4px;
            padding: 15px;
            overflow-x: auto;
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
            font-size: 12px;
            line-height: 1.4;
            page-break-inside: avoid;
        }

        code {
            background-color: #f1f3f4;
            padding: 2px 4px;
            border-radius: 3px;
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
            font-size: 13px;
        }

        pre code {
            background-color: transparent;
            padding: 0;
        }

        table {
            border-collapse: collapse;
            width: 100%;
            margin: 15px 0;
            page-break-inside: avoid;
        }

        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }

        th {
            background-color: #f2f2f2;
            font-weight: bold;
        }

        ul, ol {
            padding-left: 20px;
        }

        li {
            margin-bottom: 5px;
        }

        blockquote {
            border-left: 4px solid #3498db;
            margin: 15px 0;
            padding-left: 15px;
            color: #7f8c8d;
        }

        .ascii-art {
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
            font-size: 11px;
            line-height: 1.2;
            white-space: pre;
            background-color: #f8f9fa;
            border: 1px solid #e9ecef;
            padding: 15px;
            overflow-x: auto;
            page-break-inside: avoid;
        }

        strong {
            color: #2c3e50;
        }

        @media print {
            body {
                margin: 0;
                padding: 15px;
            }

            h1, h2, h3 {
                page-break-after: avoid;
            }

            pre, .ascii-art {
                page-break-inside: avoid;
                font-size: 10px;
            }

            table {
                page-break-inside: avoid;
            }
        }
"#;

/// Wrap an HTML fragment in a complete standalone document.
pub fn wrap_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLESHEET}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<pre[^>]*><code[^>]*>(.*?)</code></pre>").expect("static pattern")
});

/// Promote code blocks containing box-drawing diagrams to `.ascii-art` divs.
///
/// Highlighters render diagrams drawn with `┌`/`└` corners as ordinary code,
/// which breaks their alignment under the code-block font sizing. Each block
/// is inspected individually, so a diagram-free block is never merged with a
/// neighboring one.
pub fn promote_ascii_art(html: &str) -> String {
    CODE_BLOCK
        .replace_all(html, |caps: &Captures| {
            let content = &caps[1];
            if content.contains('┌') && content.contains('└') {
                format!(r#"<div class="ascii-art">{content}</div>"#)
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
