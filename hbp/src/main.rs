use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use hbp::batch;
use hbp::config::HBPConfig;
use hbp::io;
use hbp::io::cli::Cli;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            HBPConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed HBPConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    match args.input.is_dir() {
        true => {
            let entries = batch::solve_folder(&args.input, &config, &args.solution_folder)?;
            let n_failed = entries.iter().filter(|e| e.error.is_some()).count();
            info!(
                "[MAIN] batch finished: {} instances solved, {} failed",
                entries.len() - n_failed,
                n_failed
            );
        }
        false => {
            let entry = batch::solve_file(&args.input, &config, &args.solution_folder)?;
            info!(
                "[MAIN] {}: cost {}, {} bins used",
                entry.file_name,
                entry.cost.unwrap_or_default(),
                entry.bins_used.unwrap_or_default()
            );
        }
    }

    Ok(())
}
