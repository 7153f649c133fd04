use crate::error::BriefError;
use crate::model::NormalizedTable;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Rows from many reports, aligned on column name.
///
/// Reports use different schemas, so the value columns are the union of all
/// appended schemas in first-seen order. A column a report does not have is
/// missing for that report's rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    value_columns: Vec<String>,
    rows: Vec<DatasetRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetRow {
    pub year: String,
    pub category: String,
    pub values: BTreeMap<String, Decimal>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report's rows after the existing ones.
    pub fn append(&mut self, table: &NormalizedTable) {
        let labels = table.schema.value_columns();
        for label in labels {
            if !self.value_columns.iter().any(|c| c == label) {
                self.value_columns.push(label.to_string());
            }
        }

        self.rows.extend(table.rows.iter().map(|row| DatasetRow {
            year: table.year.clone(),
            category: row.category.clone(),
            values: labels
                .iter()
                .zip(&row.values)
                .filter_map(|(label, v)| v.map(|v| (label.to_string(), v)))
                .collect(),
        }));
    }

    /// Output header: Year, Category, then the value columns.
    pub fn columns(&self) -> Vec<&str> {
        ["Year", "Category"]
            .into_iter()
            .chain(self.value_columns.iter().map(|c| c.as_str()))
            .collect()
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rendered cell; missing values render as an empty string.
    pub fn cell(&self, row: usize, column: &str) -> Option<String> {
        let row = self.rows.get(row)?;
        Some(match column {
            "Year" => row.year.clone(),
            "Category" => row.category.clone(),
            other => row
                .values
                .get(other)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        })
    }

    /// Write the dataset as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), BriefError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.columns())?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(self.value_columns.len() + 2);
            record.push(row.year.clone());
            record.push(row.category.clone());
            for column in &self.value_columns {
                record.push(
                    row.values
                        .get(column)
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                );
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Convenience wrapper around `write_csv` returning a String.
    pub fn to_csv_string(&self) -> Result<String, BriefError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
