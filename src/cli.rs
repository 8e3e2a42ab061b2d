//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_display::ConsoleDisplay;
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::svg_report::SvgReport;
use crate::domain::aggregate::children_by_value;
use crate::domain::chart_config::{validate_chart_config, ChartConfig};
use crate::domain::error::SeqburstError;
use crate::domain::format::to_precision;
use crate::domain::hierarchy::{Hierarchy, TreeNode};
use crate::domain::palette::Palette;
use crate::domain::record::{parse_records, Metric};
use crate::domain::selection::Selection;
use crate::ports::config_port::ConfigPort;
use crate::ports::record_port::RecordPort;

#[derive(Parser, Debug)]
#[command(name = "seqburst", about = "Sequence sunburst aggregator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sequence tree with size totals
    Tree {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Show statistics for one node, e.g. --path "Male~Automotive"
    Select {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        path: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Render the sunburst chart as SVG
    Render {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long)]
        path: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check a config file without loading data
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Tree {
            data,
            config,
            max_depth,
        } => run_tree(&data, config.as_ref(), max_depth),
        Command::Select { data, path, config } => run_select(&data, &path, config.as_ref()),
        Command::Render {
            data,
            output,
            path,
            config,
        } => run_render(&data, output.as_ref(), path.as_deref(), config.as_ref()),
        Command::Validate { config } => run_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Load the INI file at `path`, or an empty config when none is given.
pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, SeqburstError> {
    match path {
        None => Ok(FileConfigAdapter::empty()),
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            FileConfigAdapter::from_file(path).map_err(|e| SeqburstError::ConfigParse {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
        }
    }
}

/// Read every record from `port`, drop malformed rows, and build the tree.
pub fn load_hierarchy(port: &dyn RecordPort, delimiter: char) -> Result<Hierarchy, SeqburstError> {
    let raw = port.load_records()?;
    let records = parse_records(&raw);
    let skipped = raw.len() - records.len();
    if skipped > 0 {
        eprintln!("Skipped {skipped} row(s) with a non-numeric count");
    }
    if records.is_empty() {
        return Err(SeqburstError::EmptyDataset {
            source_name: port.describe(),
        });
    }
    Ok(Hierarchy::from_records(&records, delimiter))
}

/// Indented outline of the tree, children ordered by descending size.
pub fn format_tree(hierarchy: &Hierarchy, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    let total = hierarchy.grand_total_size();
    let _ = writeln!(out, "{} ({})", hierarchy.root().name(), total);
    write_children(&mut out, hierarchy.root(), total, 1, max_depth);
    out
}

fn write_children(
    out: &mut String,
    node: &TreeNode,
    total: f64,
    depth: usize,
    max_depth: Option<usize>,
) {
    if max_depth.is_some_and(|max| depth > max) {
        return;
    }
    for (_, child, size) in children_by_value(node, Metric::Size) {
        let _ = writeln!(
            out,
            "{}{} ({}, {}%)",
            "  ".repeat(depth),
            child.name(),
            size,
            to_precision(100.0 * size / total, 3),
        );
        write_children(out, child, total, depth + 1, max_depth);
    }
}

/// Read the custom SVG template named by `[report] template_path`, if any.
pub fn load_template(config: &dyn ConfigPort) -> Result<Option<String>, SeqburstError> {
    match config.get_string("report", "template_path") {
        Some(path) => fs::read_to_string(&path).map(Some).map_err(|e| {
            SeqburstError::config_invalid(
                "report",
                "template_path",
                format!("failed to read {path}: {e}"),
            )
        }),
        None => Ok(None),
    }
}

fn run_tree(
    data: &PathBuf,
    config_path: Option<&PathBuf>,
    max_depth: Option<usize>,
) -> Result<(), SeqburstError> {
    let config = load_config(config_path)?;
    let chart = ChartConfig::from_config(&config)?;
    let hierarchy = load_hierarchy(&CsvAdapter::new(data.clone()), chart.delimiter)?;
    print!("{}", format_tree(&hierarchy, max_depth));
    Ok(())
}

fn run_select(
    data: &PathBuf,
    names: &str,
    config_path: Option<&PathBuf>,
) -> Result<(), SeqburstError> {
    let config = load_config(config_path)?;
    let chart = ChartConfig::from_config(&config)?;
    let hierarchy = load_hierarchy(&CsvAdapter::new(data.clone()), chart.delimiter)?;

    let path = hierarchy
        .find(names)
        .ok_or_else(|| SeqburstError::UnknownPath {
            path: names.to_string(),
        })?;
    let mut selection = Selection::new(&hierarchy, ConsoleDisplay::new(io::stdout()));
    selection.enter(&path)?;
    selection.leave()
}

fn run_render(
    data: &PathBuf,
    output_path: Option<&PathBuf>,
    names: Option<&str>,
    config_path: Option<&PathBuf>,
) -> Result<(), SeqburstError> {
    let config = load_config(config_path)?;
    let chart = ChartConfig::from_config(&config)?;
    let palette = Palette::from_config(&config)?;
    let template = load_template(&config)?;

    let hierarchy = load_hierarchy(&CsvAdapter::new(data.clone()), chart.delimiter)?;
    let output = output_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from("sunburst.svg"));
    let report = SvgReport::new(&hierarchy, chart, palette, template, output.clone());

    let mut selection = Selection::new(&hierarchy, report);
    match names {
        Some(names) => {
            let path = hierarchy
                .find(names)
                .ok_or_else(|| SeqburstError::UnknownPath {
                    path: names.to_string(),
                })?;
            let summary = selection.enter(&path)?;
            eprintln!("Selected {} ({})", names, summary.end_label());
        }
        None => selection.leave()?,
    }

    eprintln!("Chart written to: {}", output.display());
    Ok(())
}

fn run_validate(config_path: &PathBuf) -> Result<(), SeqburstError> {
    let config = load_config(Some(config_path))?;
    validate_chart_config(&config)?;
    Palette::from_config(&config)?;
    load_template(&config)?;
    eprintln!("Config valid.");
    Ok(())
}
