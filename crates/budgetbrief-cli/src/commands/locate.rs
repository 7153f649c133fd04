use budgetbrief_core::config::ScrapeConfig;
use budgetbrief_core::error::BriefError;
use budgetbrief_core::extraction::pdftotext::PdftotextExtractor;
use budgetbrief_core::extraction::PdfExtractor;
use budgetbrief_core::locate;
use std::path::Path;

pub fn run(pdf_file: &Path, config: &ScrapeConfig) -> Result<(), BriefError> {
    let pdf_bytes = std::fs::read(pdf_file)?;
    let pages = PdftotextExtractor::new().extract_pages(&pdf_bytes)?;

    println!("{} ({} pages)\n", pdf_file.display(), pages.len());

    let patterns = config
        .begin_patterns
        .iter()
        .map(|p| ("begin", p))
        .chain(std::iter::once(("end", &config.end_pattern)));

    for (role, pattern) in patterns {
        let matches = locate::matching_pages(&pages, pattern);
        let selected = locate::select_page(&matches, config.early_page_limit);
        let listed: Vec<String> = matches.iter().map(|m| m.to_string()).collect();
        println!(
            "  {:<5} {:<40} matches [{}] -> {}",
            role,
            format!("\"{}\"", pattern),
            listed.join(", "),
            selected
                .map(|p| format!("page {p}"))
                .unwrap_or_else(|| "not found".into())
        );
    }
    println!();

    let range = locate::locate_range(&pages, config)?;
    println!("  Table pages: {range}");
    Ok(())
}
