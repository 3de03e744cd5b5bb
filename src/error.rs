use miette::Diagnostic;
use thiserror::Error;

/// Main error type for huedeck operations
#[derive(Error, Diagnostic, Debug)]
pub enum HuedeckError {
    #[error("IO error: {0}")]
    #[diagnostic(code(huedeck::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(huedeck::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(huedeck::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(huedeck::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, HuedeckError>;
