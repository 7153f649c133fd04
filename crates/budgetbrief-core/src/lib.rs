pub mod batch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extraction;
pub mod locate;
pub mod model;
pub mod normalize;

use config::ScrapeConfig;
use error::BriefError;
use extraction::{PageContent, PdfExtractor};
use model::NormalizedTable;
use std::path::Path;

/// Main API entry point: pull the program-area table out of one report.
///
/// `source` is only used for its file name, which carries the report year.
pub fn scrape_pdf(
    source: &Path,
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    config: &ScrapeConfig,
) -> Result<NormalizedTable, BriefError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    scrape_pages(source, &pages, config)
}

/// Run locate -> extract -> normalize over already extracted pages.
pub fn scrape_pages(
    source: &Path,
    pages: &[PageContent],
    config: &ScrapeConfig,
) -> Result<NormalizedTable, BriefError> {
    let range = locate::locate_range(pages, config)?;
    tracing::debug!(source = %source.display(), %range, "located table");

    let raw = extraction::table::extract_range(pages, range)?;
    normalize::normalize(&raw, source)
}

/// Read a report from disk and scrape it.
pub fn scrape_path(
    path: &Path,
    extractor: &dyn PdfExtractor,
    config: &ScrapeConfig,
) -> Result<NormalizedTable, BriefError> {
    let pdf_bytes = std::fs::read(path)?;
    scrape_pdf(path, &pdf_bytes, extractor, config)
}
