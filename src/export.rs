//! Word-compatible export packaging.
//!
//! The export target is an HTML document carrying the Microsoft Office
//! conditional-comment preamble and a fixed print stylesheet, served under
//! the OOXML wordprocessing MIME type and a `.docx` file name. Word opens
//! such files directly; this is not a ZIP-packaged OOXML archive.

use log::debug;

/// MIME type the exported bytes should be served as.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const DEFAULT_EXPORT_NAME: &str = "document_modified.docx";

/// Package rendered markup into an export payload.
///
/// Returns the file bytes and the file name to save them under. The name is
/// derived from the suggested source file name by replacing its last
/// extension with `_modified.docx`; without a suggestion the default
/// `document_modified.docx` is used.
pub fn package(rendered: &str, suggested_name: Option<&str>) -> (Vec<u8>, String) {
    let name = export_file_name(suggested_name);
    let html = wrap_in_word_shell(rendered);
    debug!("packaged export: {} bytes as {}", html.len(), name);
    (html.into_bytes(), name)
}

fn export_file_name(suggested_name: Option<&str>) -> String {
    match suggested_name {
        Some(name) if !name.is_empty() => match name.rsplit_once('.') {
            Some((stem, _ext)) => format!("{}_modified.docx", stem),
            None => format!("{}_modified.docx", name),
        },
        _ => DEFAULT_EXPORT_NAME.to_string(),
    }
}

/// Wrap a rendered fragment in the full Word-compatible HTML document.
fn wrap_in_word_shell(rendered: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:w="urn:schemas-microsoft-com:office:word">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Document</title>
<!--[if gte mso 9]>
<xml>
<w:WordDocument>
<w:View>Print</w:View>
<w:Zoom>90</w:Zoom>
<w:DoNotPromptForConvert/>
<w:DoNotShowInsertionsAndDeletions/>
</w:WordDocument>
</xml>
<![endif]-->
<style>
body {{
  font-family: 'Times New Roman', serif;
  font-size: 12pt;
  line-height: 1.5;
  margin: 1in;
}}
.document-content {{ margin: 0; }}
.document-title {{
  font-size: 18pt;
  font-weight: bold;
  text-align: center;
  margin-bottom: 20pt;
}}
.document-heading {{
  font-size: 14pt;
  font-weight: bold;
  margin: 12pt 0 6pt 0;
}}
.document-subheading {{
  font-size: 12pt;
  font-weight: bold;
  margin: 10pt 0 5pt 0;
}}
.document-paragraph {{
  margin: 6pt 0;
  text-align: justify;
}}
.document-table {{
  border-collapse: collapse;
  width: 100%;
  margin: 12pt 0;
}}
.table-header, .table-cell {{
  border: 1pt solid black;
  padding: 6pt;
  vertical-align: top;
}}
.table-header {{
  background-color: #f0f0f0;
  font-weight: bold;
}}
</style>
</head>
<body>
{}
</body>
</html>
"#,
        rendered
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_replaces_last_extension() {
        let (_, name) = package("<p>x</p>", Some("contract.docx"));
        assert_eq!(name, "contract_modified.docx");

        let (_, name) = package("<p>x</p>", Some("archive.v2.doc"));
        assert_eq!(name, "archive.v2_modified.docx");
    }

    #[test]
    fn test_name_without_extension() {
        let (_, name) = package("<p>x</p>", Some("contract"));
        assert_eq!(name, "contract_modified.docx");
    }

    #[test]
    fn test_default_name() {
        let (_, name) = package("<p>x</p>", None);
        assert_eq!(name, DEFAULT_EXPORT_NAME);

        let (_, name) = package("<p>x</p>", Some(""));
        assert_eq!(name, DEFAULT_EXPORT_NAME);
    }

    #[test]
    fn test_shell_contains_preamble_and_content() {
        let (bytes, _) = package("<div class=\"document-content\"><p>hello</p></div>", None);
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("xmlns:w=\"urn:schemas-microsoft-com:office:word\""));
        assert!(html.contains("<!--[if gte mso 9]>"));
        assert!(html.contains("<w:View>Print</w:View>"));
        assert!(html.contains("<w:Zoom>90</w:Zoom>"));
        assert!(html.contains("border-collapse: collapse;"));
        assert!(html.contains("<p>hello</p>"));
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(
            DOCX_MIME_TYPE,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }
}
