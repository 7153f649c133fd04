pub mod pdftotext;
pub mod table;

use crate::error::BriefError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// Page text with every whitespace run collapsed to one space.
    pub fn normalized_text(&self) -> String {
        self.lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, BriefError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
