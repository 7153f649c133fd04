use crate::error::BriefError;
use std::path::Path;

/// Year tag for a report, taken from the digits in its file name.
///
/// All digits are concatenated, not just the first run, and the result must
/// be exactly four digits long. Directory components are ignored.
pub fn extract_year(path: &Path) -> Result<String, BriefError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let digits: String = file_name.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 4 {
        return Err(BriefError::InvalidYear { file_name, digits });
    }
    Ok(digits)
}
