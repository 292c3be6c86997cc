//! gulp-targets - Gulp build provider
//!
//! Detects gulp projects and enumerates their tasks as build targets that a
//! host build runner (an editor, or an MCP client) can execute directly.
//!
//! ## Features
//!
//! - Eligibility check based solely on the presence of a gulpfile
//! - Local `node_modules/.bin/gulp` preferred over the global `gulp` command
//! - Task discovery through `gulp --tasks-simple`
//! - XDG-compliant layered configuration
//! - MCP tools for agent hosts
//!
//! ## Example
//!
//! ```no_run
//! use gulp_targets::{BuildProvider, GulpBuilder};
//!
//! # async fn example() -> Result<(), gulp_targets::ProviderError> {
//! let builder = GulpBuilder::new();
//! let dir = std::path::Path::new("/projects/site");
//! if builder.is_eligible(dir) {
//!     for target in builder.settings(dir).await? {
//!         println!("{} -> {}", target.name, target.command_line());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## MCP Tools
//!
//! - `is_eligible` - Check whether a project has a gulpfile
//! - `list_targets` - List gulp tasks as build targets
//! - `detect_gulp` - Report gulpfile, local gulp and global gulp

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod mcp;
pub mod project;
pub mod provider;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{ErrorInfo, ProviderError};
pub use executor::{exec_command, ExecOptions, ExecResult};
pub use mcp::GulpTargetsServer;
pub use provider::{
    detect_gulp, BuildProvider, BuildTarget, Detection, GulpBinary, GulpBuilder, ProviderResult,
};
