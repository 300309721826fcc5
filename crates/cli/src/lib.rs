//! # Sitemap CLI
//!
//! Command-line driver for the sitemap modal form.
//!
//! The form has no UI of its own here: entity lists, saved settings and
//! operator interactions are read from JSON files, replayed against the
//! controller, and the resulting modal state is printed.
//!
//! ## Commands
//!
//! - `replay` - Replay an interaction script and print each outcome
//! - `inspect` - Open the modal (create or edit) and print its view
//!

pub mod output;
pub mod script;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use script::Script;
use sitemap_core::{JsonDocument, SettingsType, SitemapError, is_valid_path};
use sitemap_form::{FormHost, Location, ModalForm, SettingsHost};
use sitemap_schema::{EntityList, SettingsDocument};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

// Re-export dependencies for use in main.rs
pub use sitemap_core;
pub use sitemap_form;
pub use sitemap_schema;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Arguments
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "sitemap-modal",
    version,
    about = "Drive the sitemap entry modal from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay an interaction script against the modal
    Replay {
        #[command(flatten)]
        inputs: Inputs,

        /// Interaction script (JSON)
        #[arg(long)]
        script: PathBuf,
    },

    /// Open the modal and print what it shows
    Inspect {
        #[command(flatten)]
        inputs: Inputs,

        /// Which settings the modal edits
        #[arg(long, value_enum, default_value_t = SettingsTypeArg::Collection)]
        settings_type: SettingsTypeArg,

        /// Open on an existing entry instead of creating one
        #[arg(long)]
        edit: Option<String>,
    },
}

/// Host-side inputs shared by every command
#[derive(Debug, clap::Args)]
pub struct Inputs {
    /// Selectable entities (JSON array)
    #[arg(long, env = "SITEMAP_ENTITIES")]
    pub entities: PathBuf,

    /// Saved settings (JSON object); empty when omitted
    #[arg(long, env = "SITEMAP_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingsTypeArg {
    Collection,
    Custom,
}

impl From<SettingsTypeArg> for SettingsType {
    fn from(arg: SettingsTypeArg) -> Self {
        match arg {
            SettingsTypeArg::Collection => SettingsType::Collection,
            SettingsTypeArg::Custom => SettingsType::Custom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

// ============================================================================
// Execution
// ============================================================================

/// Run a parsed command, writing results to stdout
pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

/// Run a parsed command, writing results to `out`
pub fn execute(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Replay { inputs, script } => {
            let (entities, settings) = load_inputs(&inputs)?;
            let script = Script::load_validated(&script)
                .with_context(|| format!("loading script {}", script.display()))?;
            info!(
                steps = script.steps.len(),
                settings_type = %script.settings_type,
                "Replaying script"
            );

            let mut form = ModalForm::new(script.settings_type, entities);
            let mut host = SettingsHost::new(settings);
            let report = script::replay(&mut form, &mut host, &script);

            match inputs.format {
                Format::Text => write!(out, "{}", output::render_report(&report))?,
                Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
            }
        }
        Command::Inspect {
            inputs,
            settings_type,
            edit,
        } => {
            let (entities, settings) = load_inputs(&inputs)?;
            let settings_type = SettingsType::from(settings_type);
            if let Some(target) = &edit {
                check_edit_target(settings_type, target, &entities)?;
            }

            let mut form = ModalForm::new(settings_type, entities);
            let mut host = SettingsHost::new(settings);
            host.navigate(match edit {
                Some(target) => Location::editing(target),
                None => Location::creating("?create"),
            });
            form.sync(&mut host);

            let view = form.view(&host);
            match inputs.format {
                Format::Text => write!(out, "{}", output::render_view(&view))?,
                Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
            }
        }
    }
    Ok(())
}

fn load_inputs(inputs: &Inputs) -> Result<(EntityList, SettingsDocument)> {
    let entities = EntityList::load_validated(&inputs.entities)
        .with_context(|| format!("loading entities {}", inputs.entities.display()))?;
    let settings = match &inputs.settings {
        Some(path) => load_settings(path)?,
        None => SettingsDocument::new(),
    };
    Ok((entities, settings))
}

fn check_edit_target(
    settings_type: SettingsType,
    target: &str,
    entities: &EntityList,
) -> Result<(), SitemapError> {
    match settings_type {
        SettingsType::Collection if entities.find(target).is_none() => {
            Err(SitemapError::entity_not_found(target))
        }
        SettingsType::Custom if !is_valid_path(target) => Err(SitemapError::invalid_path(target)),
        _ => Ok(()),
    }
}

fn load_settings(path: &Path) -> Result<SettingsDocument> {
    SettingsDocument::load_validated(path)
        .with_context(|| format!("loading settings {}", path.display()))
}
