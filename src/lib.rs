//! # docfill
//!
//! Word document parsing, placeholder substitution, and re-export.
//!
//! This library parses Word documents into a structured block model, renders
//! the blocks as HTML, fills `[NAME_PLACEHOLDER]` / `[DATE_PLACEHOLDER]`
//! tokens with user values, and packages the result as a Word-compatible
//! download.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docfill::Session;
//!
//! let bytes = std::fs::read("contract.docx")?;
//! let mut session = docfill::load(&bytes, "contract.docx")?;
//!
//! session.generate("Ada Lovelace", "2026-03-09")?;
//!
//! let (data, file_name) = session.export();
//! std::fs::write(file_name, data)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Lower-Level APIs
//!
//! ```no_run
//! use docfill::docx::DocxParser;
//!
//! let bytes = std::fs::read("report.docx")?;
//! let blocks = DocxParser::from_bytes(bytes)?.parse()?;
//! let html = docfill::render(&blocks);
//! # Ok::<(), docfill::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: Async file loading with Tokio

pub mod container;
pub mod detect;
pub mod docx;
pub mod error;
pub mod export;
pub mod legacy;
pub mod model;
pub mod render;
pub mod session;
pub mod substitute;
pub mod template;

// Re-exports
pub use container::DocxContainer;
pub use detect::{detect_input_kind, InputKind};
pub use error::{Error, Result};
pub use export::{package, DOCX_MIME_TYPE};
pub use model::{to_json, BlockItem, Cell, FormattedText, HeadingKind, Row, Run};
pub use render::render;
pub use session::Session;
pub use substitute::substitute;
pub use template::{DATE_PLACEHOLDER, NAME_PLACEHOLDER};

/// Load a document into an editing session.
///
/// The file name selects the parsing path: `.docx` goes through the
/// structured parser, `.doc` through heuristic extraction; any other
/// extension is refused.
///
/// # Example
///
/// ```no_run
/// use docfill::load;
///
/// let bytes = std::fs::read("contract.docx")?;
/// let session = load(&bytes, "contract.docx")?;
/// println!("{}", session.current_rendering());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load(bytes: &[u8], file_name: &str) -> Result<Session> {
    match detect_input_kind(file_name)? {
        InputKind::Docx => Session::load_docx(bytes, file_name),
        InputKind::Doc => Ok(Session::load_doc(bytes, file_name)),
    }
}

/// Parse a `.docx` byte buffer into its block sequence.
///
/// # Example
///
/// ```no_run
/// use docfill::parse_docx_bytes;
///
/// let bytes = std::fs::read("document.docx")?;
/// let blocks = parse_docx_bytes(&bytes)?;
/// println!("{} blocks", blocks.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_docx_bytes(bytes: &[u8]) -> Result<Vec<BlockItem>> {
    docx::DocxParser::from_bytes(bytes.to_vec())?.parse()
}

/// Extract a block sequence from legacy `.doc` bytes.
///
/// Total by construction; the suggested title becomes the leading heading.
pub fn extract_doc_bytes(bytes: &[u8], suggested_title: &str) -> Vec<BlockItem> {
    legacy::extract(bytes, suggested_title)
}

/// Load a document from a file path into an editing session.
#[cfg(feature = "async")]
pub async fn load_file(path: impl AsRef<std::path::Path>) -> Result<Session> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?
        .to_string();
    let bytes = tokio::fs::read(path).await?;
    load(&bytes, &file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_refuses_unknown_extension() {
        assert!(matches!(
            load(b"data", "notes.txt"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_doc_path_is_total() {
        let session = load(b"Legacy body text goes here.", "memo.doc").unwrap();
        assert!(session.current_rendering().contains("document-title"));
    }
}
