// ********* Input data structures ***********

use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::Display;

/// A numeric response code, as stored in the values table.
pub type Code = i32;

/// The code substituted for a missing cell in the values table.
///
/// It is far above any index produced by the one-hot encoding, so that
/// the two can never be confused.
pub const EMPTY_CODE: Code = 6101;

/// The label substituted for a missing cell in the labels table.
pub const EMPTY_LABEL: &str = "(Not available)";

/// The name of the column holding the weight of each respondent.
pub const WEIGHTS_COLUMN: &str = "Weights";

/// A table as read from disk, before any cleaning.
///
/// All the cells are kept as text. Blank cells are either the empty string
/// or a single space (this is how PSPP writes them).
#[derive(PartialEq, Debug, Clone)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table, checking that every row has one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<RawTable, DataError> {
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns.len() {
                return Err(DataError::RaggedRow {
                    row,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }
        }
        Ok(RawTable { columns, rows })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

/// A cleaned table, stored column by column.
///
/// Invariant: all the columns have the same length.
#[derive(PartialEq, Debug, Clone)]
pub struct Table<T> {
    pub names: Vec<String>,
    pub columns: Vec<Vec<T>>,
}

impl<T: Clone> Table<T> {
    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.names.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn column(&self, name: &str) -> Option<&[T]> {
        self.column_index(name).map(|idx| self.columns[idx].as_slice())
    }

    /// Keeps the rows for which `keep` is true. Rows are indexed densely afterwards.
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        for column in self.columns.iter_mut() {
            let mut flags = keep.iter();
            column.retain(|_| *flags.next().unwrap_or(&true));
        }
    }

    /// A new table with only the rows for which `keep` is true.
    pub(crate) fn select_rows(&self, keep: &[bool]) -> Table<T> {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .zip(keep.iter())
                    .filter(|(_, k)| **k)
                    .map(|(cell, _)| cell.clone())
                    .collect()
            })
            .collect();
        Table {
            names: self.names.clone(),
            columns,
        }
    }
}

/// Rows to remove: for each column, the codes that disqualify a respondent.
pub type Exclusions = BTreeMap<String, BTreeSet<Code>>;

/// Reweighting instructions: for a column, the raw weight of each code.
///
/// At most one column may be listed.
pub type Reweighting = BTreeMap<String, BTreeMap<Code, f64>>;

/// Equality constraints selecting a subset of the respondents.
/// All the constraints must hold for a row to be kept.
pub type RowFilter = BTreeMap<String, Code>;

// ******** Output data structures *********

/// One answer to a question, as shown in the report.
#[derive(PartialEq, Debug, Clone)]
pub struct AnswerTally {
    pub code: Code,
    /// The position of the answer among all the values of the column, including
    /// the ones nobody gave. It stays the same across subsets and exclusions.
    pub rank: usize,
    pub label: String,
    /// The weighted count, rounded to the nearest integer.
    pub count: u64,
    /// The count divided by the total weight of the dataset.
    pub proportion: f64,
}

/// All the answers given to one question.
#[derive(PartialEq, Debug, Clone)]
pub struct QuestionTally {
    pub column: String,
    pub question: String,
    pub answers: Vec<AnswerTally>,
}

/// Errors that prevent a survey from being loaded or transformed.
#[derive(PartialEq, Debug, Clone)]
pub enum DataError {
    /// A description line was found before any variable code.
    OrphanContinuation { lineno: usize, line: String },
    /// A raw row does not have one cell per column.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    RowCountMismatch { values: usize, labels: usize },
    ColumnMismatch {
        values: Vec<String>,
        labels: Vec<String>,
    },
    /// A text column has too many distinct answers to be encoded.
    UnencodableColumn { column: String, distinct: usize },
    /// The numeric codes and the labels of a column do not pair up.
    LabelCardinalityMismatch {
        column: String,
        values: usize,
        labels: usize,
    },
    UnknownColumn { column: String },
    MultipleWeightColumns { columns: Vec<String> },
    MissingWeight { column: String, code: Code },
    InvalidWeight {
        column: String,
        code: Code,
        weight: f64,
    },
}

impl Error for DataError {}

impl Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::OrphanContinuation { lineno, line } => write!(
                f,
                "line {}: description {:?} does not follow any variable",
                lineno, line
            ),
            DataError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {}: expected {} cells, found {}",
                row, expected, found
            ),
            DataError::RowCountMismatch { values, labels } => write!(
                f,
                "values and labels do not have the same number of rows ({} vs {})",
                values, labels
            ),
            DataError::ColumnMismatch { values, labels } => write!(
                f,
                "values and labels do not have the same columns ({:?} vs {:?})",
                values, labels
            ),
            DataError::UnencodableColumn { column, distinct } => write!(
                f,
                "column {}: {} distinct answers cannot be encoded below the empty code {}",
                column, distinct, EMPTY_CODE
            ),
            DataError::LabelCardinalityMismatch {
                column,
                values,
                labels,
            } => write!(
                f,
                "column {}: {} distinct values but {} distinct labels",
                column, values, labels
            ),
            DataError::UnknownColumn { column } => write!(f, "unknown column {}", column),
            DataError::MultipleWeightColumns { columns } => write!(
                f,
                "weights can only be set on one column, got {:?}",
                columns
            ),
            DataError::MissingWeight { column, code } => {
                write!(f, "column {}: no weight given for value {}", column, code)
            }
            DataError::InvalidWeight {
                column,
                code,
                weight,
            } => write!(
                f,
                "column {}: invalid weight {} for value {}",
                column, weight, code
            ),
        }
    }
}
