use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use trajform::config::Config;
use trajform::dataset;
use trajform::runner::Runner;

#[derive(Parser)]
#[command(name = "trajform")]
#[command(about = "Convert traffic trajectory datasets to the unified format")]
struct Cli {
    /// Run configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the configuration and list the inputs it selects
    Validate,
    /// Convert every discovered input
    Run {
        /// Override the configured dataset name
        #[arg(long)]
        dataset: Option<String>,
        /// Override the configured input folder
        #[arg(long)]
        data_folder: Option<PathBuf>,
        /// Override the configured output folder
        #[arg(long)]
        save_folder: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match Config::from_file(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading {}: {}", cli.config, e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Validate => validate(config),
        Commands::Run {
            dataset,
            data_folder,
            save_folder,
        } => {
            if let Some(dataset) = dataset {
                config.dataset = dataset;
            }
            if let Some(folder) = data_folder {
                config.data_folder = folder;
            }
            if let Some(folder) = save_folder {
                config.save_folder = folder;
            }
            run(config)
        }
    }
}

fn validate(config: Config) -> ExitCode {
    let dataset = match dataset::for_name(&config.dataset) {
        Some(d) => d,
        None => {
            eprintln!("Unknown dataset: {}", config.dataset);
            return ExitCode::FAILURE;
        }
    };

    match dataset.inputs(&config.data_folder) {
        Ok(inputs) => {
            println!(
                "{}: {} inputs in {}",
                dataset.name(),
                inputs.len(),
                config.data_folder.display()
            );
            for input in inputs {
                println!("  {}", input.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Discovery error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> ExitCode {
    match Runner::new(config).run() {
        Ok(summary) if summary.failed == 0 => {
            println!("Converted {} inputs", summary.converted);
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            eprintln!(
                "Converted {} inputs, {} failed",
                summary.converted, summary.failed
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Run error: {}", e);
            ExitCode::FAILURE
        }
    }
}
