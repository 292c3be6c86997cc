//! CLI module for gulp-targets
//!
//! Provides command-line interface with the following subcommands:
//! - `mcp` - Start MCP server over stdio
//! - `check` - Check whether a project has a gulpfile
//! - `targets` - List gulp tasks as build targets
//! - `detect` - Report how gulp would be found
//! - `config` - Show configuration

pub mod commands;
pub mod mcp;

pub use commands::{Cli, Commands};
pub use mcp::run_mcp_server;
