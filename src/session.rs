//! In-memory editing session over one loaded document.
//!
//! A session keeps two renderings: the original produced at load time, and
//! the current one shown to the user. Placeholder generation always starts
//! from the original rendering, so regenerating with different values never
//! compounds earlier substitutions. Loading a new document replaces the
//! session state wholesale.

use log::info;

use crate::docx::DocxParser;
use crate::error::Result;
use crate::render::render;
use crate::substitute::substitute;
use crate::{export, legacy};

/// One loaded document and its edit state.
#[derive(Debug, Clone)]
pub struct Session {
    original_rendering: String,
    current_rendering: String,
    source_file_name: String,
}

impl Session {
    /// Load a ZIP-packaged XML Word document.
    pub fn load_docx(bytes: &[u8], file_name: &str) -> Result<Self> {
        let parser = DocxParser::from_bytes(bytes.to_vec())?;
        let blocks = parser.parse()?;
        info!("loaded {}: {} blocks", file_name, blocks.len());
        Ok(Self::from_rendering(render(&blocks), file_name.to_string()))
    }

    /// Load a legacy binary Word document via heuristic extraction.
    pub fn load_doc(bytes: &[u8], file_name: &str) -> Self {
        let title = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(file_name);
        let blocks = legacy::extract(bytes, title);
        info!("loaded {} (legacy): {} blocks", file_name, blocks.len());
        Self::from_rendering(render(&blocks), file_name.to_string())
    }

    fn from_rendering(rendering: String, file_name: String) -> Self {
        Self {
            original_rendering: rendering.clone(),
            current_rendering: rendering,
            source_file_name: file_name,
        }
    }

    /// The rendering currently shown, including any edits or substitutions.
    pub fn current_rendering(&self) -> &str {
        &self.current_rendering
    }

    /// The rendering as produced at load time.
    pub fn original_rendering(&self) -> &str {
        &self.original_rendering
    }

    /// The file name the document was loaded from.
    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    /// Replace the current rendering with user-edited markup.
    ///
    /// The original rendering is untouched, so a later [`generate`] still
    /// substitutes against pristine placeholders.
    ///
    /// [`generate`]: Session::generate
    pub fn edit(&mut self, markup: impl Into<String>) {
        self.current_rendering = markup.into();
    }

    /// Substitute placeholder values into the original rendering.
    ///
    /// On success the result becomes the current rendering. On failure the
    /// session is unchanged.
    pub fn generate(&mut self, name: &str, date: &str) -> Result<()> {
        self.current_rendering = substitute(&self.original_rendering, name, date)?;
        Ok(())
    }

    /// Package the current rendering for download.
    pub fn export(&self) -> (Vec<u8>, String) {
        export::package(&self.current_rendering, Some(&self.source_file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::NAME_PLACEHOLDER;

    fn session_with(rendering: &str) -> Session {
        Session::from_rendering(rendering.to_string(), "contract.docx".to_string())
    }

    #[test]
    fn test_generate_starts_from_original() {
        let mut session = session_with(&format!("<p>{}</p>", NAME_PLACEHOLDER));
        session.generate("First", "2026-01-01").unwrap();
        assert!(session.current_rendering().contains("First"));

        // Regenerating replaces, never compounds.
        session.generate("Second", "2026-01-01").unwrap();
        assert!(session.current_rendering().contains("Second"));
        assert!(!session.current_rendering().contains("First"));
    }

    #[test]
    fn test_failed_generate_leaves_session_unchanged() {
        let mut session = session_with(&format!("<p>{}</p>", NAME_PLACEHOLDER));
        session.edit("<p>edited</p>");
        assert!(session.generate("  ", "2026-01-01").is_err());
        assert_eq!(session.current_rendering(), "<p>edited</p>");
    }

    #[test]
    fn test_edit_preserves_original() {
        let mut session = session_with("<p>orig</p>");
        session.edit("<p>changed</p>");
        assert_eq!(session.original_rendering(), "<p>orig</p>");
        assert_eq!(session.current_rendering(), "<p>changed</p>");
    }

    #[test]
    fn test_export_uses_source_file_name() {
        let session = session_with("<p>x</p>");
        let (bytes, name) = session.export();
        assert_eq!(name, "contract_modified.docx");
        assert!(String::from_utf8(bytes).unwrap().contains("<p>x</p>"));
    }

    #[test]
    fn test_load_doc_uses_stem_as_title() {
        let session = Session::load_doc(b"Some legacy content here.", "memo.doc");
        assert!(session
            .original_rendering()
            .contains("<h1 class=\"document-title\">memo</h1>"));
    }
}
