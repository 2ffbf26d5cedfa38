use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Fatal failures only. Conditions the pipeline tolerates by skipping
/// (undated filenames, store names missing from the roster) are expressed
/// as `Option`s at the call sites, never as error variants.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("non-numeric cell '{value}' at row {row}, column {col}")]
    Numeric {
        value: String,
        row: usize,
        col: usize,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
