use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("unexpected content type `{0}`")]
    NotHtml(String),
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },
    #[error("disk full while writing {path}")]
    DiskFull { path: PathBuf },
    #[error("invalid path: {path}")]
    PathInvalid { path: PathBuf },
    #[error("failed to write {path}: {source}")]
    Io { path: PathBuf, #[source] source: io::Error },
}

#[cfg(unix)]
const DISK_FULL_CODES: &[i32] = &[28]; // ENOSPC
#[cfg(windows)]
const DISK_FULL_CODES: &[i32] = &[39, 112]; // ERROR_HANDLE_DISK_FULL, ERROR_DISK_FULL
#[cfg(not(any(unix, windows)))]
const DISK_FULL_CODES: &[i32] = &[];

impl StorageError {
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        if err.raw_os_error().map_or(false, |c| DISK_FULL_CODES.contains(&c)) {
            return Self::DiskFull { path };
        }
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotFound | io::ErrorKind::InvalidInput => Self::PathInvalid { path },
            _ => Self::Io { path, source: err },
        }
    }
}

/// Conditions that stop a crawl before it starts.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid seed `{seed}`: {reason}")]
    Seed { seed: String, reason: String },
    #[error("no writable output destination: {0}")]
    Output(#[source] StorageError),
}
