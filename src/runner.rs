use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use thiserror::Error;

use crate::config::Config;
use crate::dataset::{self, ConvertError, Dataset};
use crate::record::NormalizedRecord;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
    #[error("input discovery failed: {0}")]
    Discover(#[source] ConvertError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Drives one conversion run: resolve the strategy, discover inputs,
/// convert each one and persist it. A failing input is logged and
/// skipped; the remaining inputs still convert.
pub struct Runner {
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Runner { config }
    }

    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        let dataset = dataset::for_name(&self.config.dataset)
            .ok_or_else(|| RunnerError::UnknownDataset(self.config.dataset.clone()))?;

        fs::create_dir_all(&self.config.save_folder)?;

        let inputs = dataset
            .inputs(&self.config.data_folder)
            .map_err(RunnerError::Discover)?;
        if inputs.is_empty() {
            warn!(
                "no {} inputs found in {}",
                dataset.name(),
                self.config.data_folder.display()
            );
        }

        let mut summary = RunSummary::default();
        for input in &inputs {
            match self.process(dataset.as_ref(), input) {
                Ok(rows) => {
                    info!("{}: {} rows", input.display(), rows);
                    summary.converted += 1;
                }
                Err(e) => {
                    error!("{}: {}", input.display(), e);
                    summary.failed += 1;
                }
            }
        }

        info!("converted {} of {} inputs", summary.converted, inputs.len());
        Ok(summary)
    }

    fn process(&self, dataset: &dyn Dataset, input: &Path) -> Result<usize, ConvertError> {
        let records = dataset.convert(input)?;
        write_records(&self.output_path(input), &records)?;
        Ok(records.len())
    }

    /// Output file keeps the input's name up to the first dot.
    fn output_path(&self, input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let stem = name.split('.').next().unwrap_or("output");
        self.config.save_folder.join(format!("{stem}.csv"))
    }
}

fn write_records(path: &Path, records: &[NormalizedRecord]) -> Result<(), ConvertError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
