// src/csv/mod.rs
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

use crate::{error::PipelineError, maybe::Maybe};

pub type CsvCell = String;
pub type CsvRow = Vec<CsvCell>;
pub type CsvTable = Vec<CsvRow>;
pub type CsvColumn<T> = Vec<T>;

/// Split `text` into rows on line terminators (`\r\n` or `\n`), then into
/// cells on every comma.
///
/// There is no quoting or escaping: `"a,b"` becomes two cells, `"a` and `b"`.
/// A single trailing line terminator does not add an empty row.
pub fn parse_csv(text: &str) -> CsvTable {
    text.lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

/// Read and split the file at `path`. I/O failures propagate to the caller.
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub async fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<CsvTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading csv file {:?}", path))?;
    let table = parse_csv(&text);
    debug!(rows = table.len(), "parsed csv");
    Ok(table)
}

/// Like [`read_csv_file`], but I/O failures and empty files come back as an
/// absent [`Maybe`] carrying the reason.
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub async fn read_csv_file_maybe<P: AsRef<Path>>(path: P) -> Maybe<CsvTable> {
    let path = path.as_ref();
    match fs::read_to_string(path).await {
        Ok(text) => {
            let table = parse_csv(&text);
            debug!(rows = table.len(), "parsed csv");
            if table.is_empty() {
                Maybe::none(PipelineError::EmptyFile {
                    path: path.to_path_buf(),
                })
            } else {
                Maybe::some(table)
            }
        }
        Err(source) => Maybe::none(PipelineError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::{ErrorKind, Write};
    use tempfile::NamedTempFile;

    fn csv_fixture(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        Ok(tmp)
    }

    #[test]
    fn parses_crlf_and_lf_lines() {
        let table = parse_csv("name,score\r\na,10\nb,20\r\n");
        assert_eq!(
            table,
            vec![
                vec!["name".to_string(), "score".to_string()],
                vec!["a".to_string(), "10".to_string()],
                vec!["b".to_string(), "20".to_string()],
            ]
        );
    }

    #[test]
    fn quoted_commas_are_still_separators() {
        let table = parse_csv("\"Smith, J\",42");
        assert_eq!(table, vec![vec!["\"Smith", " J\"", "42"]]);
    }

    #[test]
    fn blank_input_has_no_rows() {
        assert!(parse_csv("").is_empty());
        assert_eq!(parse_csv("x,\n"), vec![vec!["x".to_string(), String::new()]]);
    }

    #[tokio::test]
    async fn reads_table_from_disk() -> Result<()> {
        let tmp = csv_fixture("name,score\na,10\n")?;
        let table = read_csv_file(tmp.path()).await?;
        assert_eq!(table.len(), 2);
        assert_eq!(table[1][1], "10");
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = read_csv_file("does/not/exist.csv").await.unwrap_err();
        assert!(err.to_string().contains("exist.csv"));
    }

    #[tokio::test]
    async fn missing_file_is_absent_with_io_reason() {
        let table = read_csv_file_maybe("does/not/exist.csv").await;
        match table.reason() {
            Some(PipelineError::Io { path, source }) => {
                assert_eq!(source.kind(), ErrorKind::NotFound);
                assert!(path.ends_with("exist.csv"));
            }
            other => panic!("unexpected reason: {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_file_is_absent() -> Result<()> {
        let tmp = csv_fixture("")?;
        let table = read_csv_file_maybe(tmp.path()).await;
        assert!(matches!(
            table.reason(),
            Some(PipelineError::EmptyFile { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn present_table_from_disk() -> Result<()> {
        let tmp = csv_fixture("name,score\r\na,10\r\n")?;
        let table = read_csv_file_maybe(tmp.path()).await;
        assert_eq!(table.get().map(Vec::len), Some(2));
        Ok(())
    }
}
