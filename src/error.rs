use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icongen operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(icongen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(icongen::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(icongen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{format} encoding is not available in this build")]
    #[diagnostic(code(icongen::missing_codec))]
    MissingCodec {
        format: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export failed for {failed} of {total} target(s)")]
    #[diagnostic(code(icongen::export))]
    Export { failed: usize, total: usize },

    #[error("Output check found {problems} problem(s)")]
    #[diagnostic(code(icongen::check))]
    Check { problems: usize },
}

pub type Result<T> = std::result::Result<T, IconError>;
