//! DOCX main-part parser.
//!
//! Walks the paragraph/run/table vocabulary of `word/document.xml` and
//! produces the block sequence. Two behaviors are intentional, not bugs:
//!
//! * paragraph iteration and table iteration are independent, so all
//!   paragraphs and headings precede all tables in the output regardless of
//!   their interleaving in the document (paragraphs nested in table cells
//!   are picked up by both passes);
//! * every run's bold/italic flags are recomputed from that run's own
//!   properties, defaulting to plain; formatting never carries over from a
//!   preceding run.

use log::warn;
use quick_xml::events::Event;

use crate::container::DocxContainer;
use crate::error::Result;
use crate::model::{BlockItem, Cell, FormattedText, Row, Run};
use crate::template::fill_information_trailer;

/// Sentinel paragraph text emitted when traversal fails.
const PARSE_ERROR_TEXT: &str = "Error parsing document content";

/// Parser for packaged Word documents.
pub struct DocxParser {
    container: DocxContainer,
}

impl DocxParser {
    /// Create a parser from the raw bytes of a .docx upload.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = DocxContainer::from_bytes(data)?;
        Ok(Self { container })
    }

    /// Parse the main content part into a block sequence.
    ///
    /// A missing `word/document.xml` is fatal for the upload and returned as
    /// [`Error::MissingPart`](crate::Error::MissingPart); failures inside
    /// the XML walk itself degrade to a sentinel error block instead.
    pub fn parse(&self) -> Result<Vec<BlockItem>> {
        let xml = self.container.read_main_part()?;
        Ok(parse_document_xml(&xml))
    }

    /// Access the underlying container.
    pub fn container(&self) -> &DocxContainer {
        &self.container
    }
}

/// Parse main-part XML into a block sequence. Total: any traversal failure
/// yields a single sentinel error paragraph rather than propagating.
pub fn parse_document_xml(xml: &str) -> Vec<BlockItem> {
    match walk_body(xml) {
        Ok(mut blocks) => {
            blocks.extend(fill_information_trailer());
            blocks
        }
        Err(e) => {
            warn!("document content walk failed, degrading to sentinel: {}", e);
            vec![BlockItem::paragraph(FormattedText::plain(PARSE_ERROR_TEXT))]
        }
    }
}

/// Single event pass collecting paragraphs and tables independently.
fn walk_body(xml: &str) -> Result<Vec<BlockItem>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    // Preserve whitespace from xml:space="preserve" text nodes.
    reader.config_mut().trim_text(false);

    let mut paragraphs: Vec<BlockItem> = Vec::new();
    let mut tables: Vec<BlockItem> = Vec::new();

    // Paragraph pass state.
    let mut in_paragraph = false;
    let mut in_ppr = false;
    let mut in_run = false;
    let mut in_rpr = false;
    let mut in_text = false;
    let mut is_heading = false;
    let mut current_text = FormattedText::new();
    let mut run_text = String::new();
    let mut run_bold = false;
    let mut run_italic = false;

    // Table pass state.
    let mut table_depth: u32 = 0;
    let mut in_cell = false;
    let mut rows: Vec<Row> = Vec::new();
    let mut cells: Vec<Cell> = Vec::new();
    let mut cell_text = String::new();

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    is_heading = false;
                    current_text = FormattedText::new();
                }
                b"w:pPr" if in_paragraph => in_ppr = true,
                b"w:r" if in_paragraph => {
                    in_run = true;
                    run_text.clear();
                    run_bold = false;
                    run_italic = false;
                }
                b"w:rPr" if in_run => in_rpr = true,
                b"w:t" if in_run => in_text = true,
                b"w:pStyle" if in_ppr => {
                    if style_is_heading(e) {
                        is_heading = true;
                    }
                }
                b"w:b" if in_rpr => run_bold = true,
                b"w:i" if in_rpr => run_italic = true,
                b"w:tbl" => table_depth += 1,
                b"w:tr" if table_depth == 1 => cells = Vec::new(),
                b"w:tc" if table_depth == 1 => {
                    in_cell = true;
                    cell_text.clear();
                }
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                b"w:pStyle" if in_ppr => {
                    if style_is_heading(e) {
                        is_heading = true;
                    }
                }
                b"w:b" if in_rpr => run_bold = true,
                b"w:i" if in_rpr => run_italic = true,
                _ => {}
            },
            Event::Text(ref e) => {
                if in_text {
                    let text = e.unescape().unwrap_or_default();
                    if in_run {
                        run_text.push_str(&text);
                    }
                    if in_cell {
                        cell_text.push_str(&text);
                    }
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"w:p" if in_paragraph => {
                    in_paragraph = false;
                    // Empty paragraphs produce no block.
                    if !current_text.is_blank() {
                        let text = std::mem::take(&mut current_text);
                        paragraphs.push(if is_heading {
                            BlockItem::heading(text)
                        } else {
                            BlockItem::paragraph(text)
                        });
                    }
                }
                b"w:pPr" => in_ppr = false,
                b"w:r" => {
                    if in_run && !run_text.is_empty() {
                        current_text.push(Run {
                            text: std::mem::take(&mut run_text),
                            bold: run_bold,
                            italic: run_italic,
                        });
                    }
                    in_run = false;
                }
                b"w:rPr" => in_rpr = false,
                b"w:t" => in_text = false,
                b"w:tbl" if table_depth > 0 => {
                    table_depth -= 1;
                    if table_depth == 0 {
                        tables.push(BlockItem::table(std::mem::take(&mut rows)));
                    }
                }
                b"w:tr" if table_depth == 1 => {
                    rows.push(Row {
                        cells: std::mem::take(&mut cells),
                        is_header: false,
                    });
                }
                b"w:tc" if table_depth == 1 => {
                    in_cell = false;
                    cells.push(Cell::new(std::mem::take(&mut cell_text)));
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    // All paragraphs and headings first, then all tables.
    paragraphs.extend(tables);
    Ok(paragraphs)
}

/// A paragraph style marks a heading when its value contains the literal
/// substring "Heading" or "Title". Case-sensitive, substring match.
fn style_is_heading(e: &quick_xml::events::BytesStart) -> bool {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"w:val" {
            let val = String::from_utf8_lossy(&attr.value);
            return val.contains("Heading") || val.contains("Title");
        }
    }
    false
}
