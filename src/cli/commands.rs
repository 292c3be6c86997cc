//! CLI command definitions using clap
//!
//! Defines all CLI subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};

/// Gulp build provider for editor build runners and MCP hosts.
///
/// Detects gulpfiles and lists gulp tasks as ready-to-run build targets.
/// Can be used as a standalone CLI or as an MCP server.
#[derive(Parser, Debug)]
#[command(name = "gulp-targets")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long, global = true, env = "GULP_TARGETS_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP server over stdio
    Mcp,

    /// Check whether a project has a gulpfile (exit code 1 if not)
    Check(CheckArgs),

    /// List gulp tasks as build targets
    Targets(TargetsArgs),

    /// Report gulpfile, local gulp and global gulp for a project
    Detect(DetectArgs),

    /// Show the resolved configuration
    Config,
}

/// Arguments for the `check` subcommand
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project path (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `targets` subcommand
#[derive(Parser, Debug)]
pub struct TargetsArgs {
    /// Project path (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the `detect` subcommand
#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// Project path (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON output
    Json,
    /// One item per line
    Plain,
}
