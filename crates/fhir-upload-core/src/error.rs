use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = UploadError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("cannot scan {}", dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot locate the running executable")]
    ExecutableDir(#[source] std::io::Error),
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} contains invalid JSON", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("request to FHIR server failed")]
    Http(#[from] reqwest::Error),
    #[error("cannot write server response")]
    Output(#[source] std::io::Error),
    #[error("FHIR server returned {status}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
