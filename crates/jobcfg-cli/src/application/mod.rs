//! Application layer for the CLI.
//!
//! - [`plan`] turns command-line input into an ordered modifier list.
//! - [`report`] runs the build and renders the outcome as text or JSON.

pub mod plan;
pub mod report;

pub use plan::{assemble_modifiers, DEMO_SEQUENCE};
pub use report::{run_build, BuildReport};
