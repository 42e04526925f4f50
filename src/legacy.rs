//! Heuristic text extraction for legacy binary Word documents (.doc).
//!
//! This is a best-effort fallback, not a format parser: it has no awareness
//! of the legacy container structure and only approximates prose boundaries.
//! It is isolated behind the same block-sequence contract as the structured
//! parser so a real legacy-format parser could replace it later without
//! touching the renderer or substitution.

use log::debug;

use crate::model::{BlockItem, FormattedText, HeadingKind};
use crate::template::fill_information_trailer;

/// Sentences at most this long, among the first few, are promoted to
/// headings.
const HEADING_MAX_LEN: usize = 50;

/// How many leading sentences are considered for heading promotion.
const HEADING_CANDIDATES: usize = 3;

/// Candidate sentences this short (trimmed) are discarded as noise.
const MIN_SENTENCE_LEN: usize = 5;

/// Extract a block sequence from raw legacy-document bytes.
///
/// Total: malformed byte sequences are tolerated via lossy decoding and
/// never fail. The suggested title (normally the file name without its
/// extension) becomes the leading title heading.
pub fn extract(bytes: &[u8], suggested_title: &str) -> Vec<BlockItem> {
    let text = String::from_utf8_lossy(bytes);
    let clean = sanitize(&text);

    let sentences: Vec<&str> = clean
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.len() > MIN_SENTENCE_LEN)
        .collect();

    debug!(
        "legacy extraction: {} bytes -> {} candidate sentences",
        bytes.len(),
        sentences.len()
    );

    let mut blocks = vec![BlockItem::Heading {
        kind: HeadingKind::Title,
        text: FormattedText::plain(suggested_title),
    }];

    for (index, sentence) in sentences.iter().enumerate() {
        if index < HEADING_CANDIDATES && sentence.len() < HEADING_MAX_LEN {
            blocks.push(BlockItem::heading(FormattedText::plain(*sentence)));
        } else {
            blocks.push(BlockItem::paragraph(FormattedText::plain(format!(
                "{}.",
                sentence
            ))));
        }
    }

    blocks.extend(fill_information_trailer());
    blocks
}

/// Strip characters outside the allow-list to spaces, then collapse runs of
/// whitespace and trim.
fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        let keep = c.is_alphanumeric() || c == '_' || is_allowed_punctuation(c);
        if keep && !c.is_whitespace() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            // Whitespace and stripped characters both collapse to one space.
            pending_space = true;
        }
    }

    out
}

fn is_allowed_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '!' | '?' | ':' | ';' | '-' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\''
    )
}
