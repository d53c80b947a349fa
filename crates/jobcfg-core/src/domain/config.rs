//! The configuration aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The configuration produced by a build.
///
/// A fresh build always starts from `Config::default()`, the zero value.  The
/// struct is `Copy`: it has no identity beyond its value and is returned to
/// the caller by value once the build finishes.
///
/// # Example
///
/// ```rust
/// use jobcfg_core::Config;
///
/// let cfg = Config::default();
/// assert_eq!(cfg.jobs, 0);
/// assert_eq!(cfg.to_string(), "{jobs: 0}");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Config {
    /// Number of jobs.
    pub jobs: i64,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{jobs: {}}}", self.jobs)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
