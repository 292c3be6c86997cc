//! MCP Server module
//!
//! Provides MCP tools for gulp projects:
//! - `is_eligible` - Check whether a project has a gulpfile
//! - `list_targets` - List gulp tasks as build targets
//! - `detect_gulp` - Report gulpfile, local gulp and global gulp

pub mod server;

pub use server::GulpTargetsServer;
