pub mod extract;
pub mod inspect;
pub mod locate;

use budgetbrief_core::config::{self, ScrapeConfig};
use budgetbrief_core::error::BriefError;

use crate::PatternArgs;

/// Build the effective config: defaults, then the config file, then flags.
pub fn resolve_config(args: PatternArgs) -> Result<ScrapeConfig, BriefError> {
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ScrapeConfig::default(),
    };

    if !args.begin.is_empty() {
        config.begin_patterns = args.begin;
    }
    if let Some(end) = args.end {
        config.end_pattern = end;
    }

    config::validate_config(&config)?;
    Ok(config)
}
