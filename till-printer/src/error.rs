//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Channel could not be opened
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The process may not open the device node
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// IO error during printing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Print requested without an open connection
    #[error("Printer not connected")]
    NotConnected,

    /// Timeout waiting for the printer
    #[error("Timeout: {0}")]
    Timeout(String),

    /// No paired device matched
    #[error("No paired printer: {0}")]
    NoDevice(String),

    /// Invalid printer configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
