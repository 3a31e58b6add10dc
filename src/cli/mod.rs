// ABOUTME: CLI argument parsing and command routing for avatar-wizard
//
// Provides command-line interface for:
// - Running the selection wizard (tui, default)
// - Inspecting progress (status)
// - Managing selections without the TUI (select, clear, reset)

pub mod select;
pub mod status;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use avatar_wizard::catalog::Category;

/// Guide a congregation through choosing its narrative avatars
#[derive(Parser)]
#[command(name = "avatar-wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Use this config file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the wizard (default if no command given)
    Tui,

    /// Show selections, wizard step and progress
    Status,

    /// Select an avatar or companion from the catalog
    Select(SelectArgs),

    /// Remove selections
    Clear(ClearArgs),

    /// Remove all selections and forget that the wizard was completed
    Reset,
}

/// Selection category as typed on the command line
#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Church,
    Community,
    Companion,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Church => Category::Church,
            CategoryArg::Community => Category::Community,
            CategoryArg::Companion => Category::Companion,
        }
    }
}

/// Arguments for the select command
#[derive(clap::Args)]
pub struct SelectArgs {
    /// What to select
    pub category: CategoryArg,

    /// Catalog id or name
    pub key: String,
}

/// What the clear command removes
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum ClearTarget {
    Church,
    Community,
    Companion,
    #[default]
    All,
}

/// Arguments for the clear command
#[derive(clap::Args)]
pub struct ClearArgs {
    /// Selection to remove
    #[arg(default_value = "all")]
    pub target: ClearTarget,
}
