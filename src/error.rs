use std::{io, path::PathBuf};
use thiserror::Error;

/// Why a stage of the pipeline came back absent.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path:?} contains no rows")]
    EmptyFile { path: PathBuf },

    #[error("Column index {index} out of range (width {width})")]
    ColumnOutOfRange { index: usize, width: usize },

    #[error("Row index {index} out of range (length {len})")]
    RowOutOfRange { index: usize, len: usize },

    #[error("cannot convert {cell:?}: {message}")]
    Conversion { cell: String, message: String },

    #[error("No data to calculate average score")]
    NoValues,

    #[error("average is not a number")]
    NotANumber,
}
