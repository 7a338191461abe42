mod error;
pub mod highd;
mod ind;

pub use error::ConvertError;
pub use highd::HighD;
pub use ind::InD;

use std::fs;
use std::path::{Path, PathBuf};

use crate::record::NormalizedRecord;

/// One source dataset format: knows which files in a data folder are
/// conversion inputs and how to turn one of them into unified records.
///
/// Implementations are stateless; `convert` reads only from its input
/// files and produces one record per raw (frame, id) row.
pub trait Dataset {
    fn name(&self) -> &'static str;

    /// Every regular file in the folder, sorted. Formats whose folders
    /// mix inputs with companion files override this to select the
    /// primary inputs only.
    fn inputs(&self, data_folder: &Path) -> Result<Vec<PathBuf>, ConvertError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(data_folder)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Convert one input into unified records. Datasets registered ahead
    /// of their transform keep this default and fail loudly instead of
    /// returning an empty table.
    fn convert(&self, input: &Path) -> Result<Vec<NormalizedRecord>, ConvertError> {
        let _ = input;
        Err(ConvertError::NotImplemented(self.name()))
    }
}

/// Strategy for a dataset name from the run configuration; `None` means
/// the name itself is unknown, as opposed to known but not implemented.
pub fn for_name(name: &str) -> Option<Box<dyn Dataset>> {
    match name {
        "highD" => Some(Box::new(HighD)),
        "inD" => Some(Box::new(InD)),
        _ => None,
    }
}
