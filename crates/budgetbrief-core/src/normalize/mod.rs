pub mod values;
pub mod year;

use crate::error::BriefError;
use crate::model::{BudgetRow, NormalizedTable, RawTable, Schema};
use std::path::Path;
use values::clean_value;
use year::extract_year;

const ANNUALIZED_CR: &str = "Annualized CR";
const ENACTED: &str = "Enacted";

impl Schema {
    /// Pick the labelling for a table from its width and header sentinels.
    ///
    /// When a 5-column table carries both sentinels, "Enacted" wins.
    pub fn detect(
        width: usize,
        has_annualized_cr: bool,
        has_enacted: bool,
    ) -> Result<Schema, BriefError> {
        match (width, has_enacted, has_annualized_cr) {
            (5, true, _) => Ok(Schema::Enacted),
            (5, false, true) => Ok(Schema::AnnualizedCr),
            (5, false, false) => Err(BriefError::UnknownSchema {
                columns: 5,
                detail: format!("neither '{ANNUALIZED_CR}' nor '{ENACTED}' found in any cell"),
            }),
            (6, _, _) => Ok(Schema::SixColumn),
            (columns, _, _) => Err(BriefError::UnknownSchema {
                columns,
                detail: "expected 5 or 6 columns".into(),
            }),
        }
    }
}

/// Determine the schema of a raw table.
pub fn detect_schema(raw: &RawTable) -> Result<Schema, BriefError> {
    Schema::detect(
        raw.width(),
        raw.contains_cell(ANNUALIZED_CR),
        raw.contains_cell(ENACTED),
    )
}

/// Label, clean and year-tag a raw table extracted from `source`.
///
/// Value cells are coerced to numbers (unparsable cells become missing) and
/// rows without a Category label are dropped.
pub fn normalize(raw: &RawTable, source: &Path) -> Result<NormalizedTable, BriefError> {
    let schema = detect_schema(raw)?;
    let year = extract_year(source)?;
    let value_count = schema.value_columns().len();

    let rows: Vec<BudgetRow> = raw
        .rows
        .iter()
        .filter_map(|cells| {
            let category = cells.first()?.trim();
            if category.is_empty() {
                return None;
            }
            let values = (1..=value_count)
                .map(|i| cells.get(i).and_then(|c| clean_value(c)))
                .collect();
            Some(BudgetRow {
                category: category.to_string(),
                values,
            })
        })
        .collect();

    tracing::debug!(
        %schema,
        year = %year,
        raw_rows = raw.len(),
        rows = rows.len(),
        "normalized table"
    );

    Ok(NormalizedTable { year, schema, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|c| c.to_string()).collect()
    }

    fn raw(rows: &[&[&str]]) -> RawTable {
        RawTable::new(rows.iter().map(|r| cells(r)).collect())
    }

    #[test]
    fn test_five_column_enacted() {
        let table = raw(&[
            &["", "Actuals", "Enacted", "Pres Bud", "v. Enacted"],
            &["Clean Air", "$1,000.0", "$1,100.0", "$900.0", "($200.0)"],
        ]);
        assert_eq!(detect_schema(&table).unwrap(), Schema::Enacted);
        assert_eq!(
            Schema::Enacted.columns(),
            &[
                "Category",
                "Actuals",
                "Enacted",
                "PresBud",
                "PresBud_vs_Enacted",
            ]
        );
    }

    #[test]
    fn test_five_column_annualized_cr() {
        let table = raw(&[
            &["", "Actuals", "Annualized CR", "Pres Bud", "v. CR"],
            &["Clean Air", "1", "2", "3", "4"],
        ]);
        assert_eq!(detect_schema(&table).unwrap(), Schema::AnnualizedCr);
    }

    #[test]
    fn test_five_column_both_sentinels_prefers_enacted() {
        let table = raw(&[&["", "Enacted", "Annualized CR", "", ""]]);
        assert_eq!(detect_schema(&table).unwrap(), Schema::Enacted);
    }

    #[test]
    fn test_six_column_needs_no_sentinel() {
        let table = raw(&[&["Air", "1", "2", "3", "4", "5"]]);
        assert_eq!(detect_schema(&table).unwrap(), Schema::SixColumn);
    }

    #[test]
    fn test_five_column_without_sentinel_fails() {
        let table = raw(&[&["Air", "1", "2", "3", "4"]]);
        let err = detect_schema(&table).unwrap_err();
        assert!(matches!(err, BriefError::UnknownSchema { columns: 5, .. }));
    }

    #[test]
    fn test_other_width_fails() {
        let table = raw(&[&["Air", "1", "2", "3"]]);
        let err = detect_schema(&table).unwrap_err();
        assert!(matches!(err, BriefError::UnknownSchema { columns: 4, .. }));
    }

    #[test]
    fn test_sentinel_must_match_whole_cell() {
        let table = raw(&[&["", "FY 2017 Enacted", "", "", ""]]);
        assert!(detect_schema(&table).is_err());
    }

    #[test]
    fn test_normalize_cleans_values_and_tags_year() {
        let table = raw(&[
            &["", "Actuals", "Enacted", "Pres Bud", "v. Enacted"],
            &["Clean Air", "$1,234", "N/A", "(500)", ""],
        ]);
        let out = normalize(&table, Path::new("dir/FY2018 Budget in Brief.pdf")).unwrap();

        assert_eq!(out.year, "2018");
        assert_eq!(out.schema, Schema::Enacted);
        assert_eq!(out.rows.len(), 1);
        let row = &out.rows[0];
        assert_eq!(row.category, "Clean Air");
        assert_eq!(
            row.values,
            vec![Some(dec!(1234)), None, Some(dec!(500)), None]
        );
        assert_eq!(out.value(0, "PresBud"), Some(dec!(500)));
    }

    #[test]
    fn test_normalize_drops_rows_without_category() {
        let mut rows = vec![cells(&["", "Actuals", "Enacted", "Pres Bud", "Diff"])];
        for i in 0..7 {
            let label = format!("Program {i}");
            let actuals = format!("${i}00.0");
            rows.push(cells(&[label.as_str(), actuals.as_str(), "1", "2", "3"]));
        }
        rows.push(cells(&["   ", "9", "9", "9", "9"]));
        rows.push(cells(&["Total", "9", "9", "9", "9"]));
        let table = RawTable::new(rows);
        assert_eq!(table.len(), 10);

        let out = normalize(&table, Path::new("2019.pdf")).unwrap();
        assert_eq!(out.rows.len(), 8);
        assert!(out.rows.iter().all(|r| !r.category.is_empty()));
        assert_eq!(out.rows[0].category, "Program 0");
        assert_eq!(out.rows[7].category, "Total");
    }

    #[test]
    fn test_normalize_keeps_label_rows_with_missing_values() {
        let table = raw(&[
            &["", "Enacted", "Actuals", "Annualized CR", "Pres Bud", ""],
            &["Science & Technology", "", "", "", "", ""],
        ]);
        let out = normalize(&table, Path::new("2014.pdf")).unwrap();
        assert_eq!(out.schema, Schema::SixColumn);
        assert_eq!(out.rows.len(), 1);
        assert!(out.rows[0].values.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_normalize_bad_year_fails() {
        let table = raw(&[&["Air", "1", "2", "3", "4", "5"]]);
        assert!(normalize(&table, Path::new("budget.pdf")).is_err());
    }
}
