// src/transform/monadic.rs
//! Checked stages. Each one takes the previous stage's value and returns a
//! [`Maybe`], so a pipeline is a chain of `bind` calls.
use std::fmt::Display;
use tracing::warn;

use crate::{
    aggregate,
    csv::{CsvCell, CsvColumn, CsvTable},
    error::PipelineError,
    maybe::Maybe,
};

/// Absent with [`PipelineError::ColumnOutOfRange`] when the table is empty or
/// `index` is not below the header width.
pub fn extract_column(index: usize) -> impl Fn(CsvTable) -> Maybe<CsvColumn<CsvCell>> {
    move |table: CsvTable| {
        let width = table.first().map_or(0, Vec::len);
        if index >= width {
            return Maybe::none(PipelineError::ColumnOutOfRange { index, width });
        }
        Maybe::some(super::extract_column(index, &table))
    }
}

pub fn remove_row<T>(index: usize) -> impl Fn(CsvColumn<T>) -> Maybe<CsvColumn<T>> {
    move |column: CsvColumn<T>| {
        let len = column.len();
        if index >= len {
            return Maybe::none(PipelineError::RowOutOfRange { index, len });
        }
        let remaining = super::remove_row(index, column);
        if remaining.is_empty() {
            return Maybe::none(PipelineError::NoValues);
        }
        Maybe::some(remaining)
    }
}

/// Converts every cell, stopping at the first `Err` from `converter`. An
/// empty column is [`PipelineError::NoValues`].
///
/// Only errors are caught. A converter that signals failure in-band, like
/// [`super::parse_float`] returning NaN, passes straight through.
pub fn convert_to<T, E, F>(converter: F) -> impl Fn(CsvColumn<CsvCell>) -> Maybe<CsvColumn<T>>
where
    F: Fn(&str) -> Result<T, E>,
    E: Display,
{
    move |column: CsvColumn<CsvCell>| {
        let converted: Result<CsvColumn<T>, PipelineError> = column
            .iter()
            .map(|cell| {
                converter(cell.as_str()).map_err(|err| PipelineError::Conversion {
                    cell: cell.clone(),
                    message: err.to_string(),
                })
            })
            .collect();
        match converted {
            Ok(values) if values.is_empty() => Maybe::none(PipelineError::NoValues),
            Ok(values) => Maybe::some(values),
            Err(err) => {
                warn!(%err, "conversion failed");
                Maybe::none(err)
            }
        }
    }
}

/// Mean of `values`. Empty input is [`PipelineError::NoValues`]; a NaN mean
/// cannot be held as present and is [`PipelineError::NotANumber`].
pub fn calculate_average_score(values: CsvColumn<f64>) -> Maybe<f64> {
    if values.is_empty() {
        return Maybe::none(PipelineError::NoValues);
    }
    let average = aggregate::calculate_average_score(&values);
    if average.is_nan() {
        return Maybe::none(PipelineError::NotANumber);
    }
    Maybe::some(average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        csv::parse_csv,
        transform::{parse_float, try_parse_float},
    };
    use std::convert::Infallible;

    #[test]
    fn column_out_of_range_mentions_index() {
        let table = parse_csv("name,score\na,10");
        let out = extract_column(5)(table);
        let reason = out.reason().map(ToString::to_string).unwrap_or_default();
        assert!(reason.contains("Column index 5"), "{reason}");
    }

    #[test]
    fn short_rows_pass_through_as_empty_cells() {
        let table = parse_csv("name,score\na");
        let out = extract_column(1)(table);
        assert_eq!(out.value(), Some(vec!["score".to_string(), String::new()]));
    }

    #[test]
    fn empty_table_has_no_columns() {
        let out = extract_column(0)(Vec::new());
        assert!(matches!(
            out.reason(),
            Some(PipelineError::ColumnOutOfRange { index: 0, width: 0 })
        ));
    }

    #[test]
    fn row_checks() {
        let out = remove_row::<CsvCell>(2)(vec!["score".into(), "10".into()]);
        assert!(matches!(
            out.reason(),
            Some(PipelineError::RowOutOfRange { index: 2, len: 2 })
        ));

        let header_only = remove_row::<CsvCell>(0)(vec!["score".into()]);
        assert!(matches!(header_only.reason(), Some(PipelineError::NoValues)));

        let out = remove_row::<i32>(0)(vec![1, 2]);
        assert_eq!(out.value(), Some(vec![2]));
    }

    #[test]
    fn conversion_error_names_the_cell() {
        let cells = vec!["10".to_string(), "ten".to_string()];
        let out = convert_to(try_parse_float)(cells);
        match out.reason() {
            Some(PipelineError::Conversion { cell, .. }) => assert_eq!(cell, "ten"),
            other => panic!("unexpected reason: {:?}", other),
        }
    }

    #[test]
    fn converting_nothing_names_the_failure() {
        let out = convert_to(try_parse_float)(Vec::new());
        assert!(out.is_none());
        assert!(matches!(out.reason(), Some(PipelineError::NoValues)));
    }

    #[test]
    fn nan_sentinel_slips_through_conversion() {
        let cells = vec!["10".to_string(), "ten".to_string()];
        let converted = convert_to(|cell: &str| Ok::<_, Infallible>(parse_float(cell)))(cells);
        let values = converted.get().cloned().unwrap_or_default();
        assert_eq!(values.len(), 2);
        assert!(values[1].is_nan());

        let average = converted.bind(calculate_average_score);
        assert!(matches!(average.reason(), Some(PipelineError::NotANumber)));
    }

    #[test]
    fn average_of_nothing_is_absent() {
        let out = calculate_average_score(Vec::new());
        assert!(matches!(out.reason(), Some(PipelineError::NoValues)));
    }

    #[test]
    fn average_of_zeroes_is_present() {
        assert_eq!(calculate_average_score(vec![0.0, 0.0]).value(), Some(0.0));
    }

    #[test]
    fn bound_stages_average_the_scores() {
        let table = parse_csv("name,score\na,10\nb,20\nc,30");
        let average = Maybe::some(table)
            .bind(extract_column(1))
            .bind(remove_row::<CsvCell>(0))
            .bind(convert_to(try_parse_float))
            .bind(calculate_average_score);
        assert_eq!(average.value(), Some(20.0));
    }
}
