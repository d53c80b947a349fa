//! Turns command-line input into an ordered list of modifiers.
//!
//! Order matters because later modifiers override earlier ones, so the rule
//! is fixed: profile modifiers first, then every `--jobs` value in the order
//! given, then the `--max-jobs` check last so it validates the final count.

use jobcfg_core::{jobs_at_most, number_of_jobs, ModifierSpec, Profile};

/// The sequence run when no modifiers are supplied: set 1 job, then 2.
pub const DEMO_SEQUENCE: [ModifierSpec; 2] = [
    ModifierSpec::NumberOfJobs { jobs: 1 },
    ModifierSpec::NumberOfJobs { jobs: 2 },
];

/// Assembles the modifier list for one build.
///
/// Returns [`DEMO_SEQUENCE`] when there is no profile, no job values and no
/// limit.  A profile that is present but empty counts as input.
pub fn assemble_modifiers(
    profile: Option<Profile>,
    jobs: &[i64],
    max_jobs: Option<i64>,
) -> Vec<ModifierSpec> {
    if profile.is_none() && jobs.is_empty() && max_jobs.is_none() {
        return DEMO_SEQUENCE.to_vec();
    }

    let mut modifiers = profile.map(|p| p.modifiers).unwrap_or_default();
    modifiers.extend(jobs.iter().map(|&n| ModifierSpec::from(number_of_jobs(n))));
    if let Some(max) = max_jobs {
        modifiers.push(jobs_at_most(max).into());
    }
    modifiers
}

// ── Tests ─────────────────────────────────────────────────────────────────────
