// src/transform/mod.rs
//! Column and row stages of the score pipeline.
//!
//! The functions here never fail: out-of-range indices and unparsable cells
//! leave their mark in the data (empty cells, NaN) and only show up in the
//! logs. [`curried`] wraps them for composition, [`monadic`] is the checked
//! counterpart.
use std::num::ParseFloatError;
use tracing::warn;

use crate::csv::{CsvCell, CsvColumn, CsvTable};

pub mod curried;
pub mod monadic;

/// The cell at `index` from every row, in row order.
///
/// Rows too short to have that cell contribute an empty string, so an index
/// past the header width produces a column of empty cells.
pub fn extract_column(index: usize, table: &CsvTable) -> CsvColumn<CsvCell> {
    let width = table.first().map_or(0, Vec::len);
    if index >= width {
        warn!(index, width, "column index past header width");
    }
    table
        .iter()
        .map(|row| row.get(index).cloned().unwrap_or_default())
        .collect()
}

/// Everything except the element at `index`. Nothing is removed when `index`
/// is out of range.
pub fn remove_row<T>(index: usize, column: CsvColumn<T>) -> CsvColumn<T> {
    if index >= column.len() {
        warn!(index, len = column.len(), "row index out of range");
    }
    column
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, value)| value)
        .collect()
}

pub fn convert_to<T, F>(converter: F, column: &[CsvCell]) -> CsvColumn<T>
where
    F: Fn(&str) -> T,
{
    column.iter().map(|cell| converter(cell.as_str())).collect()
}

/// Lenient float parse: leading whitespace is skipped and the longest numeric
/// prefix is used (`" 12.5kg"` is `12.5`). Anything without one is NaN.
pub fn parse_float(cell: &str) -> f64 {
    let s = cell.trim_start();
    s[..numeric_prefix_len(s)].parse().unwrap_or(f64::NAN)
}

/// Strict float parse for the checked pipeline.
pub fn try_parse_float(cell: &str) -> Result<f64, ParseFloatError> {
    cell.trim().parse()
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}
