use crate::csv::{CsvCell, CsvColumn, CsvTable};

/// Curried forms of the plain stages, ready for `pipe!`.
pub fn extract_column(index: usize) -> impl Fn(&CsvTable) -> CsvColumn<CsvCell> {
    move |table: &CsvTable| super::extract_column(index, table)
}

pub fn remove_row<T>(index: usize) -> impl Fn(CsvColumn<T>) -> CsvColumn<T> {
    move |column: CsvColumn<T>| super::remove_row(index, column)
}

pub fn convert_to<T, F>(converter: F) -> impl Fn(CsvColumn<CsvCell>) -> CsvColumn<T>
where
    F: Fn(&str) -> T,
{
    move |column: CsvColumn<CsvCell>| super::convert_to(&converter, &column)
}
