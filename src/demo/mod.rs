// src/demo/mod.rs
//! The same score average computed four ways.
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{
    aggregate::calculate_average_score,
    compose::{
        curry::{add, multiply, subtract},
        pipe,
    },
    csv::{read_csv_file, read_csv_file_maybe, CsvCell, CsvTable},
    maybe::Maybe,
    transform::{self, curried, monadic, parse_float, try_parse_float},
};

/// Scores live in the second column, under a single header row.
pub const SCORE_COLUMN: usize = 1;
pub const HEADER_ROW: usize = 0;

pub fn chained_average(data: &CsvTable) -> f64 {
    let column_values = transform::extract_column(SCORE_COLUMN, data);
    let removed_header = transform::remove_row(HEADER_ROW, column_values);
    let scores = transform::convert_to(parse_float, &removed_header);
    calculate_average_score(&scores)
}

pub fn composed_average(data: &CsvTable) -> f64 {
    crate::pipe!(
        data,
        curried::extract_column(SCORE_COLUMN),
        curried::remove_row::<CsvCell>(HEADER_ROW),
        curried::convert_to(parse_float),
        calculate_average_score
    )
}

pub fn monadic_average(data: Maybe<CsvTable>) -> Maybe<f64> {
    data.bind(monadic::extract_column(SCORE_COLUMN))
        .bind(monadic::remove_row::<CsvCell>(HEADER_ROW))
        .bind(monadic::convert_to(try_parse_float))
        .bind(monadic::calculate_average_score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurryingCalls {
    pub basic_call: i32,
    pub chain_call: i32,
}

/// Nested calls and `pipe` over the same partially applied stages.
pub fn currying_calls(num: i32) -> CurryingCalls {
    let add_by_two = add(2);
    let multiply_by_three = multiply(3);
    let subtract_by_five = subtract(5);

    let basic_call = subtract_by_five(multiply_by_three(add_by_two(num)));
    let stages: [&dyn Fn(i32) -> i32; 3] = [&add_by_two, &multiply_by_three, &subtract_by_five];
    let chain_call = pipe(num, &stages);

    CurryingCalls {
        basic_call,
        chain_call,
    }
}

#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub async fn run_chain<P: AsRef<Path>>(path: P) -> Result<f64> {
    let data = read_csv_file(path).await?;
    let average = chained_average(&data);
    info!(average, "chain done");
    Ok(average)
}

#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub async fn run_composition<P: AsRef<Path>>(path: P) -> Result<f64> {
    let data = read_csv_file(path).await?;
    let average = composed_average(&data);
    info!(average, "composition done");
    Ok(average)
}

#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub async fn run_monad<P: AsRef<Path>>(path: P) -> Maybe<f64> {
    let average = monadic_average(read_csv_file_maybe(path).await);
    match (average.get(), average.reason()) {
        (Some(value), _) => info!(average = value, "monad done"),
        (None, Some(err)) => warn!(%err, "monad came back empty"),
        (None, None) => warn!("monad came back empty without a reason"),
    }
    average
}

/// `{"<label>": value}` as one JSON line. Non-finite numbers become `null`.
pub fn report_line<T: Serialize>(label: &str, value: T) -> Result<String> {
    let mut line = serde_json::Map::new();
    line.insert(label.to_string(), serde_json::to_value(value)?);
    Ok(serde_json::Value::Object(line).to_string())
}

/// Report for the monadic variant: the average, or the reason it is missing.
pub fn monad_report_line(average: &Maybe<f64>) -> Result<String> {
    match (average.get(), average.reason()) {
        (Some(value), _) => report_line("averageScore", value),
        (None, reason) => report_line("err", reason.map(ToString::to_string)),
    }
}
