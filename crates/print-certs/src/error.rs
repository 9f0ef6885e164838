use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertError {
    #[error("The certificate directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Unable to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Fail to execute {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Inspecting {} failed ({status}): {stderr}", path.display())]
    Inspect {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("No subject common name for {}, got: {output:?}", path.display())]
    MissingCommonName { path: PathBuf, output: String },

    #[error("Unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid PEM in {}: {reason}", path.display())]
    Pem { path: PathBuf, reason: String },

    #[error("Invalid X.509 certificate in {}: {reason}", path.display())]
    X509 { path: PathBuf, reason: String },

    #[error("Unable to write report: {0}")]
    Output(#[from] std::io::Error),
}
