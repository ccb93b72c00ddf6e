use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use rectpack::io::ext_repr::ExtInstance;
use rectpack::io::parser;
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::config::HBPConfig;

pub mod cli;
pub mod output;

/// Reads an instance, either in JSON (`.json`) or in the plain-text format (any other extension).
pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("instance")
        .to_string();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let file = File::open(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .with_context(|| format!("not a valid instance file: {}", path.display()))
        }
        _ => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read instance file: {}", path.display()))?;
            parser::parse_instance(&text, &name)
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
    }
}

pub fn read_config(path: &Path) -> Result<HBPConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "Solution JSON written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "Solution SVG written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_text(text: &str, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("could not open listing file: {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("could not write listing file: {}", path.display()))?;
    info!(
        "Placement listing written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("Epoch: {}", jiff::Timestamp::now());
    Ok(())
}
