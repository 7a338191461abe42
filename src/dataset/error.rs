use std::path::PathBuf;
use thiserror::Error;

/// Failure while converting one input. All variants abort that input
/// only; the runner keeps going with the rest.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("companion metadata file not found: {}", .0.display())]
    MissingMeta(PathBuf),
    #[error("dataset {0}: transform not implemented")]
    NotImplemented(&'static str),
}
