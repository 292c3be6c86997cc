//! Provider module for gulp target discovery
//!
//! Pipeline: locate gulp, ask it for its tasks, parse the listing and map
//! each task to a build target.

pub mod binary;
pub mod detect;
pub mod gulp;
pub mod parse;
pub mod traits;

pub use binary::GulpBinary;
pub use detect::{detect_gulp, find_gulpfile, is_gulp_project, Detection};
pub use gulp::GulpBuilder;
pub use parse::parse_tasks;
pub use traits::*;
