//! jobcfg-cli library crate.
//!
//! Everything the `jobcfg` binary does besides argument parsing lives here so
//! it can be tested without spawning a process.
//!
//! ```text
//! [jobcfg-cli]
//!   ├── application/     Assemble the modifier list, run the build, render a report
//!   └── infrastructure/  Load TOML profiles from disk
//! ```
//!
//! The builder itself is in `jobcfg-core`.

/// Application layer: modifier assembly and report rendering.
pub mod application;

/// Infrastructure layer: profile files.
pub mod infrastructure;
