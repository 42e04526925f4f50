//! Input path selection for uploaded documents.
//!
//! The structured path and the legacy path are chosen by file extension
//! alone; no magic-byte sniffing is performed. An unrecognized extension is
//! refused before any parsing is attempted.

use crate::error::{Error, Result};

/// Which parsing path an uploaded file takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Modern ZIP-packaged XML document (.docx), structured path.
    Docx,
    /// Legacy binary document (.doc), heuristic text-extraction path.
    Doc,
}

impl InputKind {
    /// Returns the file extension for this input kind.
    pub fn extension(&self) -> &'static str {
        match self {
            InputKind::Docx => "docx",
            InputKind::Doc => "doc",
        }
    }

    /// Returns a human-readable name for this input kind.
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Docx => "Word Document",
            InputKind::Doc => "Legacy Word Document",
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Select the parsing path for a file name.
///
/// # Example
///
/// ```
/// use docfill::detect::{detect_input_kind, InputKind};
///
/// assert_eq!(detect_input_kind("report.docx")?, InputKind::Docx);
/// assert_eq!(detect_input_kind("old-memo.DOC")?, InputKind::Doc);
/// assert!(detect_input_kind("notes.pdf").is_err());
/// # Ok::<(), docfill::Error>(())
/// ```
pub fn detect_input_kind(file_name: &str) -> Result<InputKind> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "docx" => Ok(InputKind::Docx),
        "doc" => Ok(InputKind::Doc),
        _ => Err(Error::UnsupportedFormat(file_name.to_string())),
    }
}
