//! Error types shared by the client and the CLI

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GptsError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot derive a file name from {}; pass --new-name", .0.display())]
    InvalidPath(PathBuf),

    #[error("{0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type GptsResult<T> = Result<T, GptsError>;
