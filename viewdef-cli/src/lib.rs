//! Document loading and rendering for the `viewdef` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use viewdef_core::{Diagnostic, RecordSchema, ViewConfig, ViewOptions, parse_with_diagnostics};

#[derive(Parser, Debug)]
#[command(name = "viewdef")]
#[command(about = "Resolve a UI view configuration from a record schema")]
pub struct Args {
    /// Path to the schema JSON document
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Path to the options JSON document
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Path to a saved view configuration to start from
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the resolved configuration
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output of a single resolution run.
#[derive(Debug)]
pub struct Resolution {
    pub config: ViewConfig,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.config)?
        } else {
            serde_json::to_string(&self.config)?
        };
        Ok(json)
    }
}

pub fn load_schema(path: &Path) -> Result<RecordSchema> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema {}", path.display()))?;
    RecordSchema::from_json(&raw)
        .with_context(|| format!("Invalid schema document {}", path.display()))
}

pub fn load_options(path: Option<&Path>) -> Result<ViewOptions> {
    let Some(path) = path else {
        return Ok(ViewOptions::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options {}", path.display()))?;
    ViewOptions::from_json(&raw)
        .with_context(|| format!("Invalid options document {}", path.display()))
}

/// Loads the starting configuration, or an empty one when no path is given.
///
/// Its `actions`, `sub_title` and `template` carry into the resolved view.
pub fn load_config(path: Option<&Path>) -> Result<ViewConfig> {
    let Some(path) = path else {
        return Ok(ViewConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    ViewConfig::from_json(&raw)
        .with_context(|| format!("Invalid config document {}", path.display()))
}

/// Loads the documents and resolves the view.
pub fn run(args: &Args) -> Result<Resolution> {
    let schema = load_schema(&args.schema)?;
    let options = load_options(args.options.as_deref())?;
    let start = load_config(args.config.as_deref())?;
    info!(type_name = %schema.type_name, source = %schema.source, "Resolving view");

    let (config, diagnostics) = parse_with_diagnostics(start, &schema, &options);
    info!(
        fields = config.fields.len(),
        actions = config.actions.len(),
        diagnostics = diagnostics.len(),
        "View resolved"
    );
    Ok(Resolution {
        config,
        diagnostics,
    })
}
