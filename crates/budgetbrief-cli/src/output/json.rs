use budgetbrief_core::error::BriefError;
use budgetbrief_core::model::NormalizedTable;

pub fn print(table: &NormalizedTable) -> Result<(), BriefError> {
    let json = serde_json::to_string_pretty(table)?;
    println!("{json}");
    Ok(())
}
