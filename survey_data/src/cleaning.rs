use log::{debug, info};
use std::collections::HashMap;

use crate::config::*;

// PSPP writes blank cells either as empty fields or as a single space.
fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell == " "
}

/// Removes the rows in which every cell is blank.
///
/// PSPP sometimes writes such rows at the end of its CSV exports.
fn non_blank_rows(raw: &RawTable) -> Vec<&Vec<String>> {
    raw.rows
        .iter()
        .filter(|row| !row.iter().all(|cell| is_missing(cell)))
        .collect()
}

fn transpose<T: Clone>(rows: &[Vec<T>], num_columns: usize) -> Vec<Vec<T>> {
    let mut columns: Vec<Vec<T>> = (0..num_columns)
        .map(|_| Vec::with_capacity(rows.len()))
        .collect();
    for row in rows {
        for (column, cell) in columns.iter_mut().zip(row.iter()) {
            column.push(cell.clone());
        }
    }
    columns
}

/// Cleans the table of numerical responses.
///
/// Blank cells become `EMPTY_CODE`. Columns that do not hold integers (for
/// instance multi-answer questions such as `"Answer1; Answer2"`) are replaced
/// by the index of each distinct answer.
pub fn clean_values(raw: &RawTable) -> Result<Table<Code>, DataError> {
    let rows: Vec<Vec<Option<String>>> = non_blank_rows(raw)
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if is_missing(cell) {
                        None
                    } else {
                        Some(cell.clone())
                    }
                })
                .collect()
        })
        .collect();
    info!(
        "clean_values: kept {} of {} rows",
        rows.len(),
        raw.num_rows()
    );
    let mut columns: Vec<Vec<Code>> = Vec::with_capacity(raw.columns.len());
    for (name, cells) in raw
        .columns
        .iter()
        .zip(transpose(&rows, raw.columns.len()))
    {
        let column = match convert_to_numbers(&cells) {
            Some(column) => column,
            None => {
                debug!("clean_values: column {} is not numeric, encoding it", name);
                build_one_hot_column(name, &cells)?
            }
        };
        columns.push(column);
    }
    Ok(Table {
        names: raw.columns.clone(),
        columns,
    })
}

/// Cleans the table of text responses: blank cells become `EMPTY_LABEL`.
pub fn clean_labels(raw: &RawTable) -> Table<String> {
    let rows: Vec<Vec<String>> = non_blank_rows(raw)
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if is_missing(cell) {
                        EMPTY_LABEL.to_string()
                    } else {
                        cell.clone()
                    }
                })
                .collect()
        })
        .collect();
    info!(
        "clean_labels: kept {} of {} rows",
        rows.len(),
        raw.num_rows()
    );
    Table {
        names: raw.columns.clone(),
        columns: transpose(&rows, raw.columns.len()),
    }
}

fn parse_code(cell: &str) -> Option<Code> {
    let cell = cell.trim();
    if let Ok(x) = cell.parse::<Code>() {
        return Some(x);
    }
    // Numeric columns with blanks may be written as floats (`3.0`).
    match cell.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= Code::MIN as f64 && f <= Code::MAX as f64 => {
            Some(f as Code)
        }
        _ => None,
    }
}

/// Converts a column to integers, if every present cell is an integer.
fn convert_to_numbers(cells: &[Option<String>]) -> Option<Vec<Code>> {
    cells
        .iter()
        .map(|cell| match cell {
            None => Some(EMPTY_CODE),
            Some(s) => parse_code(s),
        })
        .collect()
}

/// Replaces each distinct answer of a text column by its index, in order of
/// first appearance. Blank cells keep the empty code.
pub fn build_one_hot_column(
    column: &str,
    cells: &[Option<String>],
) -> Result<Vec<Code>, DataError> {
    let mut indices: HashMap<&str, Code> = HashMap::new();
    let mut res: Vec<Code> = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell {
            None => res.push(EMPTY_CODE),
            Some(s) => {
                let next = indices.len() as Code;
                let idx = *indices.entry(s.as_str()).or_insert(next);
                if idx >= EMPTY_CODE {
                    return Err(DataError::UnencodableColumn {
                        column: column.to_string(),
                        distinct: indices.len(),
                    });
                }
                res.push(idx);
            }
        }
    }
    debug!(
        "build_one_hot_column: column {}: {} distinct answers",
        column,
        indices.len()
    );
    Ok(res)
}
