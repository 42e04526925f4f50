//! ZIP container access for packaged Word documents.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::io::{Cursor, Read};

/// Package path of the main document content part.
pub const MAIN_PART: &str = "word/document.xml";

/// In-memory ZIP archive wrapper for a .docx package.
///
/// Holds the full byte buffer of the upload; reads are by entry name. The
/// absence of the main content part is fatal for that upload.
pub struct DocxContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl DocxContainer {
    /// Create a container from a byte buffer.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read an XML entry from the archive as a string.
    ///
    /// Handles UTF-8 (with or without BOM) and UTF-16 LE/BE encodings.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingPart(path.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(&bytes)
    }

    /// Read the main document content part (`word/document.xml`).
    pub fn read_main_part(&self) -> Result<String> {
        self.read_xml(MAIN_PART)
    }

    /// Check if an entry exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        self.archive.borrow().file_names().any(|n| n == path)
    }

    /// List all entries in the archive.
    pub fn list_files(&self) -> Vec<String> {
        self.archive.borrow().file_names().map(String::from).collect()
    }
}

impl std::fmt::Debug for DocxContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocxContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}

/// Decode XML bytes handling UTF-8 and UTF-16 LE/BE encodings.
///
/// Word packages are normally UTF-8, but non-standard producers emit UTF-16
/// parts. Undecodable UTF-8 without a BOM falls back to lossy conversion.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8(bytes[3..].to_vec())
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)));
    }

    if bytes.starts_with(&[0xFF, 0xFE]) {
        let content = decode_utf16(&bytes[2..], u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if bytes.starts_with(&[0xFE, 0xFF]) {
        let content = decode_utf16(&bytes[2..], u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn decode_utf16(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> Result<String> {
    let len = bytes.len() & !1;
    let units = (0..len)
        .step_by(2)
        .map(|i| from_bytes([bytes[i], bytes[i + 1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Rewrite a UTF-16 encoding declaration after the text has been converted
/// to a Rust String, so the XML reader does not re-interpret it as UTF-16.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if let Some(end_decl) = content.starts_with("<?xml").then(|| content.find("?>")).flatten() {
        let decl = &content[..end_decl + 2];
        let rest = &content[end_decl + 2..];
        let fixed = decl
            .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
            .replace("encoding='UTF-16'", "encoding='UTF-8'")
            .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
            .replace("encoding='utf-16'", "encoding='UTF-8'");
        return format!("{}{}", fixed, rest);
    }
    content.to_string()
}
