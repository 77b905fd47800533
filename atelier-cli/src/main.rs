//! Atelier - design-system component catalog and project scaffolder
//!
//! Thin developer-facing surface over `atelier-core`: loads a catalog
//! snapshot from disk, then exposes search, component detail, listing,
//! and project scaffolding as subcommands.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use atelier_core::analytics::LogSink;
use atelier_core::catalog::CatalogSnapshot;
use atelier_core::scaffold::{OutputMode, ScaffoldPlan, StaticBaseUrl, DEFAULT_REGISTRY_URL};
use atelier_core::{AtelierError, ComponentService};

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Delivery mode for scaffolded file contents
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Inline,
    Urls,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Inline => OutputMode::Inline,
            Mode::Urls => OutputMode::Urls,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "atelier",
    about = "Component catalog search and project scaffolding for the Atelier design system",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Path to the catalog snapshot JSON
    #[clap(long, default_value = "catalog.json", global = true)]
    catalog: PathBuf,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Parser, Debug)]
enum Command {
    /// Search the catalog by free-text relevance
    Search {
        /// Query terms
        query: Vec<String>,
    },

    /// Show one component with its full dependency closure
    Get {
        /// Component name (case-insensitive)
        name: String,
    },

    /// List catalog entries, optionally restricted to one layer
    List {
        /// Restrict to a single layer
        #[clap(long)]
        layer: Option<u8>,
    },

    /// Generate a ready-to-build project for a component subset
    Scaffold {
        /// Project display name
        project: String,

        /// Components to include
        components: Vec<String>,

        /// How file contents are delivered
        #[clap(long, value_enum, default_value = "inline")]
        mode: Mode,

        /// Registry root for urls-mode references
        #[clap(long, default_value = DEFAULT_REGISTRY_URL)]
        base_url: String,

        /// Write the generated tree to this directory instead of printing
        /// the manifest (inline mode only)
        #[clap(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "LAYER")]
    layer: u8,
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "SCORE")]
    score: u32,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "LAYER")]
    layer: u8,
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "DEPENDENCIES")]
    dependencies: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let service = load_service(&cli.catalog, base_url_for(&cli.command))?;

    match cli.command {
        Command::Search { query } => run_search(&service, &query.join(" ")),
        Command::Get { name } => run_get(&service, &name),
        Command::List { layer } => run_list(&service, layer),
        Command::Scaffold {
            project,
            components,
            mode,
            out,
            ..
        } => run_scaffold(&service, &project, &components, mode.into(), out.as_deref()),
    }
}

fn base_url_for(command: &Command) -> StaticBaseUrl {
    match command {
        Command::Scaffold { base_url, .. } => StaticBaseUrl::new(base_url.clone()),
        _ => StaticBaseUrl::default(),
    }
}

fn load_service(catalog_path: &Path, base_url: StaticBaseUrl) -> Result<ComponentService> {
    let content = fs::read_to_string(catalog_path)
        .with_context(|| format!("Failed to read catalog snapshot: {catalog_path:?}"))?;
    let snapshot = CatalogSnapshot::from_json(&content)
        .with_context(|| format!("Failed to parse catalog snapshot: {catalog_path:?}"))?;

    let service =
        ComponentService::with_collaborators(snapshot, Box::new(base_url), Arc::new(LogSink))
            .context("Failed to build component service from catalog")?;
    Ok(service)
}

fn run_search(service: &ComponentService, query: &str) -> Result<()> {
    let hits = service.search(query);
    if hits.is_empty() {
        println!("No components matched {query:?}.");
        return Ok(());
    }

    let rows: Vec<SearchRow> = hits
        .into_iter()
        .map(|hit| SearchRow {
            name: hit.name,
            layer: hit.layer,
            kind: hit.kind,
            score: hit.score,
            description: truncate(&hit.description, 56),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::blank())
        .with(Modify::new(Rows::first()).with(Alignment::left()));
    println!("{table}");
    Ok(())
}

fn run_get(service: &ComponentService, name: &str) -> Result<()> {
    match service.get_component(name) {
        Ok(detail) => {
            println!("{}", serde_json::to_string_pretty(&detail)?);
            Ok(())
        }
        Err(AtelierError::ComponentNotFound { name, suggestions }) => {
            eprintln!("Component not found: {name}");
            if !suggestions.is_empty() {
                eprintln!("Did you mean: {}?", suggestions.join(", "));
            }
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

fn run_list(service: &ComponentService, layer: Option<u8>) -> Result<()> {
    let rows: Vec<ListRow> = service
        .store()
        .list(layer)
        .into_iter()
        .map(|record| ListRow {
            name: record.name.clone(),
            layer: record.layer,
            kind: record.kind.clone(),
            dependencies: record.dependencies.join(", "),
        })
        .collect();

    if rows.is_empty() {
        println!("No catalog entries.");
        return Ok(());
    }

    let mut table = Table::new(rows);
    table.with(Style::blank());
    println!("{table}");
    Ok(())
}

fn run_scaffold(
    service: &ComponentService,
    project: &str,
    components: &[String],
    mode: OutputMode,
    out: Option<&Path>,
) -> Result<()> {
    if components.is_empty() {
        bail!("Provide at least one component to scaffold");
    }

    let plan = match service.scaffold_project(project, components, mode) {
        Ok(plan) => plan,
        Err(AtelierError::EmptyResolution { suggestions }) => {
            eprintln!("None of the requested components exist in the catalog.");
            for (name, close) in suggestions {
                if close.is_empty() {
                    eprintln!("  {name}: no close matches");
                } else {
                    eprintln!("  {name}: did you mean {}?", close.join(", "));
                }
            }
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    match out {
        None => println!("{}", serde_json::to_string_pretty(&plan)?),
        Some(dir) => {
            let written = materialize(&plan, dir)?;
            info!("Materialized scaffold for '{}'", plan.project_name);
            println!("Wrote {written} files to {dir:?}.");
            if !plan.not_found.is_empty() {
                println!("Skipped unknown components: {}", plan.not_found.join(", "));
            }
        }
    }
    Ok(())
}

/// Write an inline-mode plan to disk as a real file tree.
fn materialize(plan: &ScaffoldPlan, dir: &Path) -> Result<usize> {
    let mut written = 0;
    for file in &plan.files {
        let Some(content) = &file.content else {
            bail!("Plan contains remote references; re-run with --mode inline to materialize");
        };
        let dest = dir.join(&file.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {parent:?}"))?;
        }
        fs::write(&dest, content).with_context(|| format!("Failed to write {dest:?}"))?;
        written += 1;
    }
    Ok(written)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}\u{2026}")
}
