use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{error, info};
use rectpack::io;
use rectpack::io::svg::layout_to_svg;

use crate::config::HBPConfig;
use crate::io::output::{BatchEntry, HBPOutput};
use crate::opt::selector;

/// Solves a single instance file and writes its outputs into `solution_folder`:
/// `sol_<stem>.json`, plus `sol_<stem>.txt` and one `sol_<stem>_<i>.svg` per used bin if enabled in the config.
pub fn solve_file(path: &Path, config: &HBPConfig, solution_folder: &Path) -> Result<BatchEntry> {
    let start = Instant::now();
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid instance file name: {}", path.display()))?;

    let ext_instance = crate::io::read_instance(path)?;
    let instance = io::import(&ext_instance)
        .with_context(|| format!("invalid instance: {}", path.display()))?;
    info!(
        "[BATCH] solving {} ({} items, {} bins)",
        path.display(),
        instance.items.len(),
        instance.bins.len()
    );

    let selection = selector::solve(&instance, config);
    let solution = &selection.chosen;
    let ext_solution = io::export(&instance, solution, start);

    if config.text_output {
        let listing_path = solution_folder.join(format!("sol_{stem}.txt"));
        crate::io::write_text(&io::placement_lines(solution), &listing_path)?;
    }

    if config.svg_export {
        for (i, layout) in solution.layouts.iter().enumerate() {
            let svg_path = solution_folder.join(format!("sol_{stem}_{i}.svg"));
            let title = format!("{} | {}", ext_instance.name, solution.strategy);
            let svg = layout_to_svg(layout, config.svg_draw_options, &title);
            crate::io::write_svg(&svg, &svg_path)?;
        }
    }

    let entry = BatchEntry {
        file_name: file_name(path),
        n: Some(instance.items.len()),
        k: Some(instance.bins.len()),
        cost: Some(ext_solution.cost),
        bins_used: Some(ext_solution.bins_used),
        strategy: Some(ext_solution.strategy),
        run_time_ms: Some(ext_solution.run_time_ms),
        error: None,
    };

    let output = HBPOutput {
        instance: ext_instance,
        solution: ext_solution,
        guillotine_cost: selection.guillotine.cost,
        maxrects_cost: selection.maxrects.cost,
        config: *config,
    };
    crate::io::write_json(&output, &solution_folder.join(format!("sol_{stem}.json")))?;

    Ok(entry)
}

/// Solves every `.txt` and `.json` instance in `folder` (in file name order).
/// A file which fails is logged and recorded in the summary, the remaining files are still solved.
/// The summary is written to `summary.json` in `solution_folder`.
pub fn solve_folder(
    folder: &Path,
    config: &HBPConfig,
    solution_folder: &Path,
) -> Result<Vec<BatchEntry>> {
    let instance_paths = fs::read_dir(folder)
        .with_context(|| format!("could not read instance folder: {}", folder.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()?
        .into_iter()
        .filter(|p| p.is_file() && is_instance_file(p))
        .sorted()
        .collect_vec();

    info!(
        "[BATCH] {} instance files found in {}",
        instance_paths.len(),
        folder.display()
    );

    let entries = instance_paths
        .iter()
        .map(|path| match solve_file(path, config, solution_folder) {
            Ok(entry) => entry,
            Err(err) => {
                error!("[BATCH] failed to solve {}: {err:#}", path.display());
                BatchEntry::failed(file_name(path), &err)
            }
        })
        .collect_vec();

    crate::io::write_json(&entries, &solution_folder.join("summary.json"))?;

    Ok(entries)
}

fn is_instance_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("txt") | Some("json")
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default()
}
