pub mod pdftotext;

use crate::error::ArremateError;

/// Pages of front matter before the itemized section typically starts in a
/// Caixa edital. Tunable via `PipelineOptions::skip_pages`.
pub const DEFAULT_SKIP_PAGES: usize = 22;

/// A fetched auction notice: a stable name plus ordered page texts.
///
/// How the document got here (browser automation, HTTP download, manual
/// upload) is the fetcher's business; the pipeline only reads it.
#[derive(Debug, Clone)]
pub struct NoticeDocument {
    pub name: String,
    pub pages: Vec<String>,
}

impl NoticeDocument {
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        NoticeDocument {
            name: name.into(),
            pages,
        }
    }

    /// Concatenate page texts from `skip_pages` onward, joined by newlines.
    ///
    /// Pages with no extractable text contribute nothing. Returns `None`
    /// when the document has no pages at all (corrupt or empty source);
    /// skipping past the end of a non-empty document yields an empty
    /// string, which is a valid (anchor-less) text.
    pub fn concatenated_text(&self, skip_pages: usize) -> Option<String> {
        if self.pages.is_empty() {
            return None;
        }
        let text = self
            .pages
            .iter()
            .skip(skip_pages)
            .filter(|p| !p.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        Some(text)
    }
}

/// Trait for backends that turn raw document bytes into per-page text.
pub trait TextExtractor: Send + Sync {
    /// Extract text from document bytes, one string per page, preserving
    /// page order (empty pages stay as empty strings so indices hold).
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ArremateError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
