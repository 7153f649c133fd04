use budgetbrief_core::config::ScrapeConfig;
use budgetbrief_core::error::BriefError;
use budgetbrief_core::extraction::pdftotext::PdftotextExtractor;
use std::path::Path;

use crate::output;

pub fn run(pdf_file: &Path, output_format: &str, config: &ScrapeConfig) -> Result<(), BriefError> {
    let extractor = PdftotextExtractor::new();
    let table = budgetbrief_core::scrape_path(pdf_file, &extractor, config)?;

    match output_format {
        "json" => output::json::print(&table)?,
        _ => println!("{}", output::table::format_table(&table)),
    }

    Ok(())
}
