//! Block-level content structures.

use serde::{Deserialize, Serialize};

/// Visual class of a heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingKind {
    /// Document title (legacy path only).
    Title,
    /// Regular section heading.
    #[default]
    Section,
    /// Subheading (the fill-information trailer).
    Sub,
}

/// A run of text with consistent inline formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The text content.
    pub text: String,

    /// Bold formatting.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Italic formatting.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
}

impl Run {
    /// Create a plain text run with no formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// An ordered sequence of runs forming the text of one block.
///
/// Runs are concatenated in order; adjacent runs are never merged, so the
/// exact run boundaries of the source markup are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedText {
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl FormattedText {
    /// Create an empty text sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence holding a single plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::plain(text)],
        }
    }

    /// Append a run.
    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs, formatting discarded.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the concatenated text is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }
}

impl From<Vec<Run>> for FormattedText {
    fn from(runs: Vec<Run>) -> Self {
        Self { runs }
    }
}

/// A cell in a table row. Cell text carries no inline formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
}

impl Cell {
    /// Create a cell with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A row of cells.
///
/// `is_header` is positional: true iff the row is the first row of its
/// table. The source markup is not consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_header: bool,
}

impl Row {
    /// Create a row from cell texts.
    pub fn new<T: Into<String>>(cells: impl IntoIterator<Item = T>) -> Self {
        Self {
            cells: cells.into_iter().map(Cell::new).collect(),
            is_header: false,
        }
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A structural unit of document content.
///
/// Order within a block sequence mirrors document reading order and is
/// significant end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockItem {
    /// A heading.
    Heading {
        #[serde(default, skip_serializing_if = "is_section")]
        kind: HeadingKind,
        text: FormattedText,
    },
    /// A paragraph of formatted text.
    Paragraph { text: FormattedText },
    /// A table of rows.
    Table { rows: Vec<Row> },
}

fn is_section(kind: &HeadingKind) -> bool {
    *kind == HeadingKind::Section
}

impl BlockItem {
    /// Create a section heading from formatted text.
    pub fn heading(text: FormattedText) -> Self {
        BlockItem::Heading {
            kind: HeadingKind::Section,
            text,
        }
    }

    /// Create a paragraph from formatted text.
    pub fn paragraph(text: FormattedText) -> Self {
        BlockItem::Paragraph { text }
    }

    /// Create a table, marking row 0 as the header row.
    pub fn table(mut rows: Vec<Row>) -> Self {
        for (i, row) in rows.iter_mut().enumerate() {
            row.is_header = i == 0;
        }
        BlockItem::Table { rows }
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, BlockItem::Table { .. })
    }

    /// Plain text of the block, formatting and table structure discarded.
    pub fn plain_text(&self) -> String {
        match self {
            BlockItem::Heading { text, .. } | BlockItem::Paragraph { text } => text.plain_text(),
            BlockItem::Table { rows } => rows
                .iter()
                .map(|row| {
                    row.cells
                        .iter()
                        .map(|c| c.text.as_str())
                        .collect::<Vec<_>>()
                        .join("\t")
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Convert a block sequence to pretty-printed JSON, for inspection.
pub fn to_json(blocks: &[BlockItem]) -> crate::error::Result<String> {
    serde_json::to_string_pretty(blocks)
        .map_err(|e| crate::error::Error::Render(format!("JSON serialization error: {}", e)))
}
