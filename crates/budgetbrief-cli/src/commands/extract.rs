use budgetbrief_core::batch;
use budgetbrief_core::config::ScrapeConfig;
use budgetbrief_core::error::BriefError;
use budgetbrief_core::extraction::pdftotext::PdftotextExtractor;
use budgetbrief_core::extraction::PdfExtractor;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_dir: &Path,
    output_file: &Path,
    report_file: Option<PathBuf>,
    config: &ScrapeConfig,
) -> Result<(), BriefError> {
    if !PdftotextExtractor::is_available() {
        return Err(BriefError::PdftotextNotFound);
    }

    let documents = batch::discover_documents(input_dir, &config.file_pattern)?;
    tracing::info!(
        dir = %input_dir.display(),
        documents = documents.len(),
        "discovered reports"
    );

    let extractor = PdftotextExtractor::new();
    tracing::info!(backend = extractor.backend_name(), "extracting");

    let pb = progress_bar(documents.len());
    let report = batch::run_batch_with(&documents, |path| {
        let result = budgetbrief_core::scrape_path(path, &extractor, config);
        pb.inc(1);
        result
    });
    pb.finish_and_clear();

    let writer = BufWriter::new(File::create(output_file)?);
    report.dataset.write_csv(writer)?;

    if let Some(path) = report_file {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json)?;
    }

    output::table::print_batch_summary(&report, output_file);
    Ok(())
}

fn progress_bar(documents: usize) -> ProgressBar {
    let pb = ProgressBar::new(documents as u64);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("Extracting");
    pb
}
