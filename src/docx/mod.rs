//! Structured parser for ZIP-packaged XML Word documents (.docx).

mod parser;

pub use parser::{parse_document_xml, DocxParser};
