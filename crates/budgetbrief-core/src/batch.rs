use crate::config::ScrapeConfig;
use crate::dataset::Dataset;
use crate::error::BriefError;
use crate::extraction::PdfExtractor;
use crate::model::{NormalizedTable, Schema};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedDocument {
    pub path: PathBuf,
    pub year: String,
    pub schema: Schema,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a batch: the merged rows plus what happened to each report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub dataset: Dataset,
    pub processed: Vec<ProcessedDocument>,
    pub skipped: Vec<SkippedDocument>,
}

impl BatchReport {
    /// Fold one report's outcome into the batch.
    ///
    /// A failed report contributes nothing to the dataset.
    pub fn record(mut self, path: &Path, result: Result<NormalizedTable, BriefError>) -> Self {
        match result {
            Ok(table) => {
                tracing::info!(
                    path = %path.display(),
                    year = %table.year,
                    schema = %table.schema,
                    rows = table.rows.len(),
                    "extracted"
                );
                self.dataset.append(&table);
                self.processed.push(ProcessedDocument {
                    path: path.to_path_buf(),
                    year: table.year,
                    schema: table.schema,
                    rows: table.rows.len(),
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipped");
                self.skipped.push(SkippedDocument {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
        self
    }
}

/// Find report files in `dir`, newest file name first.
pub fn discover_documents(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>, BriefError> {
    // The directory is literal; only `file_pattern` carries wildcards.
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join(file_pattern);
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry.map_err(std::io::Error::from)?;
        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| b.file_name().cmp(&a.file_name()).then_with(|| b.cmp(a)));
    Ok(paths)
}

/// Scrape every document in order, isolating failures per document.
pub fn run_batch(
    documents: &[PathBuf],
    extractor: &dyn PdfExtractor,
    config: &ScrapeConfig,
) -> BatchReport {
    tracing::info!(
        backend = extractor.backend_name(),
        documents = documents.len(),
        "starting batch"
    );
    run_batch_with(documents, |path| crate::scrape_path(path, extractor, config))
}

/// Like `run_batch`, with the per-document step supplied by the caller.
pub fn run_batch_with<F>(documents: &[PathBuf], mut scrape: F) -> BatchReport
where
    F: FnMut(&Path) -> Result<NormalizedTable, BriefError>,
{
    documents.iter().fold(BatchReport::default(), |report, path| {
        let result = scrape(path);
        report.record(path, result)
    })
}
