mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cookbook_core::service::{self, Request, Response};
use cookbook_core::{Cookbook, DEFAULT_MAX_DEPTH, DEFAULT_MAX_VISITS, Error, ExpandLimits};
use output::{
    EntryInfo, LoadOutput, LsOutput, OutputWriter, ParseOutput, Rejection, SummaryOutput,
};
use serde_json::Value;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Cookbook - expand recipes into base ingredients
#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "In-memory recipe book with recipe expansion", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with an array of entries (defaults to COOKBOOK_FILE env var)
    #[arg(short, long, global = true)]
    cookbook: Option<PathBuf>,

    /// Maximum recipe nesting depth (defaults to COOKBOOK_MAX_DEPTH env var or 64)
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Maximum entries visited per expansion (defaults to COOKBOOK_MAX_VISITS env var or 100000)
    #[arg(long, global = true)]
    max_visits: Option<usize>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a handwritten entry name
    Parse {
        /// Raw name
        input: String,
    },

    /// Load the cookbook file and report rejected entries
    Load,

    /// List loaded entries
    Ls {
        /// Show entry kinds
        #[arg(short, long)]
        long: bool,
    },

    /// Show total cook time and base ingredients of a recipe
    Summary {
        /// Recipe name
        name: String,
    },

    /// Read one JSON request per line from stdin and answer each on stdout
    Session,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = OutputWriter::new(cli.json);
    match run(cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.write_error(&err, 1);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, output: &OutputWriter) -> Result<()> {
    // CLI arg > env var > default
    let cookbook_path = cli
        .cookbook
        .or_else(|| std::env::var("COOKBOOK_FILE").ok().map(PathBuf::from));
    let limits = ExpandLimits {
        max_depth: setting(cli.max_depth, "COOKBOOK_MAX_DEPTH", DEFAULT_MAX_DEPTH)?,
        max_visits: setting(cli.max_visits, "COOKBOOK_MAX_VISITS", DEFAULT_MAX_VISITS)?,
    };
    debug!(?limits, cookbook = ?cookbook_path, "resolved configuration");

    match cli.command {
        Commands::Parse { input } => cmd_parse(output, &input),
        Commands::Load => {
            let path = require_path(cookbook_path.as_deref())?;
            cmd_load(output, path, limits)
        }
        Commands::Ls { long } => {
            let path = require_path(cookbook_path.as_deref())?;
            cmd_ls(output, path, limits, long)
        }
        Commands::Summary { name } => {
            let path = require_path(cookbook_path.as_deref())?;
            cmd_summary(output, path, limits, &name)
        }
        Commands::Session => cmd_session(cookbook_path.as_deref(), limits),
    }
}

/// Resolve a numeric setting from the CLI, then the environment, then a default.
fn setting(cli_value: Option<usize>, var: &str, default: usize) -> Result<usize> {
    if let Some(value) = cli_value {
        return Ok(value);
    }
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", var, raw)),
        Err(_) => Ok(default),
    }
}

fn require_path(path: Option<&Path>) -> Result<&Path> {
    path.context("No cookbook file given (use --cookbook or COOKBOOK_FILE)")
}

/// Load entries from a JSON array file into a fresh cookbook.
///
/// Rejected entries are logged and returned; they do not abort the load.
fn load_cookbook(path: &Path, limits: ExpandLimits) -> Result<(Cookbook, LoadOutput)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cookbook file: {}", path.display()))?;
    let payloads: Vec<Value> = serde_json::from_str(&content)
        .with_context(|| format!("Cookbook file is not a JSON array: {}", path.display()))?;

    let cookbook = Cookbook::with_limits(limits);
    let mut report = LoadOutput {
        success: true,
        result_code: 0,
        accepted: 0,
        rejected: Vec::new(),
    };

    for (index, payload) in payloads.iter().enumerate() {
        match service::create_entry(&cookbook, payload) {
            Ok(()) => report.accepted += 1,
            Err(err) => {
                warn!(index, error = %err, "rejected cookbook entry");
                report.rejected.push(Rejection {
                    index,
                    kind: err.kind(),
                    error: err.to_string(),
                });
            }
        }
    }

    info!(
        path = %path.display(),
        accepted = report.accepted,
        rejected = report.rejected.len(),
        "loaded cookbook"
    );
    Ok((cookbook, report))
}

fn cmd_parse(output: &OutputWriter, input: &str) -> Result<()> {
    let name = cookbook_core::normalize(input)
        .with_context(|| format!("Failed to parse name: {:?}", input))?;

    let data = ParseOutput {
        success: true,
        result_code: 0,
        name: name.clone(),
    };
    output.write(&data, || format!("{}\n", name))
}

fn cmd_load(output: &OutputWriter, path: &Path, limits: ExpandLimits) -> Result<()> {
    let (_, report) = load_cookbook(path, limits)?;

    output.write(&report, || {
        let mut text = format!("Loaded {} entries\n", report.accepted);
        for rejection in &report.rejected {
            let _ = writeln!(text, "Rejected entry {}: {}", rejection.index, rejection.error);
        }
        text
    })
}

fn cmd_ls(output: &OutputWriter, path: &Path, limits: ExpandLimits, long: bool) -> Result<()> {
    let (cookbook, _) = load_cookbook(path, limits)?;
    let entries: Vec<EntryInfo> = cookbook
        .names()?
        .into_iter()
        .map(|(name, entry_type)| EntryInfo { name, entry_type })
        .collect();

    let data = LsOutput {
        success: true,
        result_code: 0,
        entries,
    };
    output.write(&data, || {
        if data.entries.is_empty() {
            return "No entries\n".to_string();
        }
        let mut text = String::new();
        for entry in &data.entries {
            if long {
                let _ = writeln!(text, "{:<10} {}", entry.entry_type, entry.name);
            } else {
                let _ = writeln!(text, "{}", entry.name);
            }
        }
        text
    })
}

fn cmd_summary(output: &OutputWriter, path: &Path, limits: ExpandLimits, name: &str) -> Result<()> {
    let (cookbook, _) = load_cookbook(path, limits)?;
    let summary = service::summary(&cookbook, name)
        .with_context(|| format!("Failed to summarize recipe: {}", name))?;

    let data = SummaryOutput {
        success: true,
        result_code: 0,
        summary,
    };
    output.write(&data, || {
        let mut text = format!(
            "Recipe: {}\nCook time: {}\nIngredients:\n",
            data.summary.name, data.summary.cook_time
        );
        for ingredient in &data.summary.ingredients {
            let _ = writeln!(text, "  {} x {}", ingredient.quantity, ingredient.name);
        }
        text
    })
}

fn cmd_session(path: Option<&Path>, limits: ExpandLimits) -> Result<()> {
    let cookbook = match path {
        Some(path) => load_cookbook(path, limits)?.0,
        None => Cookbook::with_limits(limits),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}", serde_json::to_string(&answer(&cookbook, &line))?)?;
        out.flush()?;
    }

    Ok(())
}

/// Answer one session request line.
fn answer(cookbook: &Cookbook, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            let response = service::handle(cookbook, &request);
            if let Response::Error { error, .. } = &response {
                debug!(%error, "request rejected");
            }
            response
        }
        Err(err) => Error::invalid_input(format!("Malformed request: {}", err)).into(),
    }
}
