use thiserror::Error;
use till_printer::PrintError;

#[derive(Error, Debug)]
pub enum TillError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Printer error: {0}")]
    Printer(#[from] PrintError),

    #[error("Print worker stopped")]
    WorkerStopped,

    #[error("{0}")]
    Command(String),
}

pub type TillResult<T> = Result<T, TillError>;
