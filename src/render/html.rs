//! HTML renderer with the fixed presentational class vocabulary.

use crate::model::{BlockItem, FormattedText, HeadingKind, Row};

/// Render a block sequence as an HTML fragment.
///
/// Deterministic, pure function of its input: one
/// `<div class="document-content">` wrapper enclosing one element per block
/// in sequence order. Run text is HTML-escaped before the formatting
/// wrappers are applied, so special characters in document text can never
/// produce malformed markup.
pub fn render(blocks: &[BlockItem]) -> String {
    let mut out = String::from("<div class=\"document-content\">");

    for block in blocks {
        match block {
            BlockItem::Heading { kind, text } => {
                let (tag, class) = match kind {
                    HeadingKind::Title => ("h1", "document-title"),
                    HeadingKind::Section => ("h2", "document-heading"),
                    HeadingKind::Sub => ("h3", "document-subheading"),
                };
                out.push_str(&format!(
                    "<{} class=\"{}\">{}</{}>",
                    tag,
                    class,
                    render_text(text),
                    tag
                ));
            }
            BlockItem::Paragraph { text } => {
                out.push_str(&format!(
                    "<p class=\"document-paragraph\">{}</p>",
                    render_text(text)
                ));
            }
            BlockItem::Table { rows } => {
                out.push_str("<table class=\"document-table\">");
                for row in rows {
                    out.push_str(&render_row(row));
                }
                out.push_str("</table>");
            }
        }
    }

    out.push_str("</div>");
    out
}

/// Render runs in order: escaped text, wrapped `<strong>` outside and
/// `<em>` inside when both flags are set.
fn render_text(text: &FormattedText) -> String {
    let mut out = String::new();
    for run in &text.runs {
        let mut piece = escape_html(&run.text);
        if run.italic {
            piece = format!("<em>{}</em>", piece);
        }
        if run.bold {
            piece = format!("<strong>{}</strong>", piece);
        }
        out.push_str(&piece);
    }
    out
}

fn render_row(row: &Row) -> String {
    let (tag, class) = if row.is_header {
        ("th", "table-header")
    } else {
        ("td", "table-cell")
    };

    let mut out = String::from("<tr class=\"table-row\">");
    for cell in &row.cells {
        out.push_str(&format!(
            "<{} class=\"{}\">{}</{}>",
            tag,
            class,
            escape_html(&cell.text),
            tag
        ));
    }
    out.push_str("</tr>");
    out
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Run;

    #[test]
    fn test_empty_sequence_renders_wrapper() {
        assert_eq!(render(&[]), "<div class=\"document-content\"></div>");
    }

    #[test]
    fn test_heading_kinds_map_to_tags_and_classes() {
        let blocks = vec![
            BlockItem::Heading {
                kind: HeadingKind::Title,
                text: FormattedText::plain("T"),
            },
            BlockItem::Heading {
                kind: HeadingKind::Section,
                text: FormattedText::plain("S"),
            },
            BlockItem::Heading {
                kind: HeadingKind::Sub,
                text: FormattedText::plain("U"),
            },
        ];
        let html = render(&blocks);
        assert!(html.contains("<h1 class=\"document-title\">T</h1>"));
        assert!(html.contains("<h2 class=\"document-heading\">S</h2>"));
        assert!(html.contains("<h3 class=\"document-subheading\">U</h3>"));
    }

    #[test]
    fn test_bold_italic_nesting_strong_then_em() {
        let blocks = vec![BlockItem::paragraph(FormattedText::from(vec![Run {
            text: "x".into(),
            bold: true,
            italic: true,
        }]))];
        assert!(render(&blocks).contains("<strong><em>x</em></strong>"));
    }

    #[test]
    fn test_run_text_is_escaped() {
        let blocks = vec![BlockItem::paragraph(FormattedText::from(vec![Run {
            text: "<X>".into(),
            bold: true,
            italic: true,
        }]))];
        let html = render(&blocks);
        assert!(html.contains("&lt;X&gt;"));
        assert!(!html.contains("<X>"));
    }

    #[test]
    fn test_table_rendering() {
        let blocks = vec![BlockItem::table(vec![
            Row::new(["Name", "Value"]),
            Row::new(["a & b", "2"]),
        ])];
        let html = render(&blocks);
        assert!(html.contains("<table class=\"document-table\">"));
        assert!(html.contains("<th class=\"table-header\">Name</th>"));
        assert!(html.contains("<td class=\"table-cell\">a &amp; b</td>"));
        assert_eq!(html.matches("<tr class=\"table-row\">").count(), 2);
    }

    #[test]
    fn test_render_is_deterministic() {
        let blocks = vec![
            BlockItem::heading(FormattedText::plain("h")),
            BlockItem::paragraph(FormattedText::plain("p")),
        ];
        assert_eq!(render(&blocks), render(&blocks));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&#39;");
    }
}
