use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive, 1-based page range holding the target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub begin: usize,
    pub end: usize,
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

/// Table cells as detected on the page, before any labelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        RawTable { rows }
    }

    /// Number of columns (the widest row).
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if any cell, trimmed, equals `text` exactly.
    pub fn contains_cell(&self, text: &str) -> bool {
        self.rows
            .iter()
            .flat_map(|r| r.iter())
            .any(|cell| cell.trim() == text)
    }

    /// Append another table's rows, keeping their order.
    pub fn extend(&mut self, other: RawTable) {
        self.rows.extend(other.rows);
    }

    /// Pad every row with empty cells up to the table width.
    pub fn pad_rows(&mut self) {
        let width = self.width();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }
}

/// The closed set of column labellings seen across report years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// 5 columns, prior year under a continuing resolution.
    AnnualizedCr,
    /// 5 columns, prior year enacted.
    Enacted,
    /// 6 columns, enacted and annualized CR side by side.
    SixColumn,
}

impl Schema {
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Schema::AnnualizedCr => &[
                "Category",
                "Actuals",
                "Annualized_CR",
                "PresBud",
                "PresBud_vs_Annualized_CR",
            ],
            Schema::Enacted => &[
                "Category",
                "Actuals",
                "Enacted",
                "PresBud",
                "PresBud_vs_Enacted",
            ],
            Schema::SixColumn => &[
                "Category",
                "Enacted",
                "Actuals",
                "Annualized_CR",
                "PresBud",
                "PresBud_vs_Enacted",
            ],
        }
    }

    /// Labels of the numeric columns (everything after Category).
    pub fn value_columns(&self) -> &'static [&'static str] {
        &self.columns()[1..]
    }

    pub fn width(&self) -> usize {
        self.columns().len()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::AnnualizedCr => write!(f, "5-column (Annualized CR)"),
            Schema::Enacted => write!(f, "5-column (Enacted)"),
            Schema::SixColumn => write!(f, "6-column"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRow {
    pub category: String,
    /// One entry per `Schema::value_columns`; `None` is a missing value.
    pub values: Vec<Option<Decimal>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTable {
    pub year: String,
    pub schema: Schema,
    pub rows: Vec<BudgetRow>,
}

impl NormalizedTable {
    /// All output columns, Year first.
    pub fn columns(&self) -> Vec<&'static str> {
        std::iter::once("Year")
            .chain(self.schema.columns().iter().copied())
            .collect()
    }

    /// Look up a value cell by row index and column label.
    pub fn value(&self, row: usize, column: &str) -> Option<Decimal> {
        let idx = self
            .schema
            .value_columns()
            .iter()
            .position(|c| *c == column)?;
        self.rows.get(row)?.values.get(idx).copied().flatten()
    }
}
