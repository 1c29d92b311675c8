use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse manifest. Original error: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    #[error("No manifest found at '{path}'.")]
    ManifestNotFound { path: PathBuf },

    /// Invalid configuration, raised before anything touches the filesystem.
    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    #[error("Cannot create folder '{path}'. Original error: {source}")]
    Folder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render template '{name}'. Original error: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Template '{0}' is not registered.")]
    TemplateNotFound(String),

    #[error("Cannot write '{path}'. Original error: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external command ran but exited unsuccessfully.
    #[error("Command '{command}' failed with status: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Prints the error to stderr and exits with a failure status.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
