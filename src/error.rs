use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("unable to read log file {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no /p-<word>-<word> sort key in {0}")]
    MissingSortKey(String),
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("destination directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    #[error("unable to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid image URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("failed to fetch {url}: {source}")]
    Transfer {
        url: String,
        source: reqwest::Error,
    },

    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
