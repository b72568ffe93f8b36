use std::path::PathBuf;

/// Failures while reading the movie data source
///
/// All of these are fatal at startup: without a dataset there is nothing to
/// recommend from.
#[derive(thiserror::Error, Debug)]
pub enum DataSourceError {
    #[error("Data source not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Data source is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to read data source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Data source {origin} contains no usable movies")]
    Empty { origin: String },
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error("Movie '{0}' not found in the database.")]
    TitleNotFound(String),

    #[error("Invalid menu choice: {0}")]
    InvalidMenuChoice(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the interactive shell can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::TitleNotFound(_) | AppError::InvalidMenuChoice(_) | AppError::InvalidInput(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
