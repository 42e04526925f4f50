//! Placeholder tokens and the fixed fill-information trailer.
//!
//! The trailer is a fixed-function templating feature, not derived from
//! document content: both parsing paths append it unconditionally, even when
//! the source document contains no placeholders of its own.

use crate::model::{BlockItem, FormattedText, HeadingKind, Run};

/// Literal token replaced by the user's name.
pub const NAME_PLACEHOLDER: &str = "[NAME_PLACEHOLDER]";

/// Literal token replaced by the formatted date.
pub const DATE_PLACEHOLDER: &str = "[DATE_PLACEHOLDER]";

/// The synthetic trailing block group appended after every parse: a
/// "Fill Information" subheading followed by the name and date placeholder
/// paragraphs. Always exactly three blocks.
pub fn fill_information_trailer() -> Vec<BlockItem> {
    vec![
        BlockItem::Heading {
            kind: HeadingKind::Sub,
            text: FormattedText::plain("Fill Information"),
        },
        placeholder_paragraph("Name:", NAME_PLACEHOLDER),
        placeholder_paragraph("Date:", DATE_PLACEHOLDER),
    ]
}

fn placeholder_paragraph(label: &str, token: &str) -> BlockItem {
    BlockItem::paragraph(FormattedText::from(vec![
        Run::bold(label),
        Run::plain(format!(" {}", token)),
    ]))
}
