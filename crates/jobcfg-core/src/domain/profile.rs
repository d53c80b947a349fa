//! Serde-tagged modifiers and ordered modifier lists.
//!
//! [`ModifierSpec`] is the data form of the built-in modifiers: a tagged enum
//! that can be read from a TOML or JSON document and then applied like any
//! other [`Modifier`].  A [`Profile`] is an ordered list of them.
//!
//! ```toml
//! [[modifiers]]
//! kind = "number_of_jobs"
//! jobs = 4
//!
//! [[modifiers]]
//! kind = "jobs_at_most"
//! max = 8
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::config::Config;
use crate::domain::modifier::{JobsAtMost, Modifier, ModifyError, NumberOfJobs};

/// A built-in modifier in serializable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ModifierSpec {
    /// See [`NumberOfJobs`].
    NumberOfJobs { jobs: i64 },
    /// See [`JobsAtMost`].
    JobsAtMost { max: i64 },
}

impl Modifier for ModifierSpec {
    fn modify(&self, config: &mut Config) -> Result<(), ModifyError> {
        match *self {
            ModifierSpec::NumberOfJobs { jobs } => NumberOfJobs(jobs).modify(config),
            ModifierSpec::JobsAtMost { max } => JobsAtMost(max).modify(config),
        }
    }
}

impl From<NumberOfJobs> for ModifierSpec {
    fn from(m: NumberOfJobs) -> Self {
        ModifierSpec::NumberOfJobs { jobs: m.0 }
    }
}

impl From<JobsAtMost> for ModifierSpec {
    fn from(m: JobsAtMost) -> Self {
        ModifierSpec::JobsAtMost { max: m.0 }
    }
}

/// An ordered list of modifiers, typically loaded from a file.
///
/// Unknown keys are rejected so a misspelled `[[modifiers]]` header fails to
/// parse instead of producing an empty profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub modifiers: Vec<ModifierSpec>,
}

impl Profile {
    /// Parses a profile from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML deserialization error when the text is malformed or
    /// names an unknown modifier `kind`.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_number_of_jobs_sets_field() {
        let mut cfg = Config::default();
        ModifierSpec::NumberOfJobs { jobs: 3 }.modify(&mut cfg).unwrap();
        assert_eq!(cfg.jobs, 3);
    }

    #[test]
    fn test_spec_jobs_at_most_reports_limit_error() {
        let mut cfg = Config { jobs: 9 };
        let result = ModifierSpec::JobsAtMost { max: 2 }.modify(&mut cfg);
        assert_eq!(result, Err(ModifyError::JobsExceedLimit { jobs: 9, max: 2 }));
    }

    #[test]
    fn test_spec_from_built_in_modifiers() {
        assert_eq!(
            ModifierSpec::from(NumberOfJobs(4)),
            ModifierSpec::NumberOfJobs { jobs: 4 }
        );
        assert_eq!(
            ModifierSpec::from(JobsAtMost(8)),
            ModifierSpec::JobsAtMost { max: 8 }
        );
    }

    // ── Profile parsing ───────────────────────────────────────────────────────

    #[test]
    fn test_profile_parses_modifiers_in_order() {
        // Arrange
        let text = r#"
            [[modifiers]]
            kind = "number_of_jobs"
            jobs = 4

            [[modifiers]]
            kind = "jobs_at_most"
            max = 8
        "#;

        // Act
        let profile = Profile::from_toml_str(text).unwrap();

        // Assert
        assert_eq!(
            profile.modifiers,
            vec![
                ModifierSpec::NumberOfJobs { jobs: 4 },
                ModifierSpec::JobsAtMost { max: 8 },
            ]
        );
    }

    #[test]
    fn test_profile_empty_document_has_no_modifiers() {
        let profile = Profile::from_toml_str("").unwrap();
        assert!(profile.modifiers.is_empty());
    }

    #[test]
    fn test_profile_unknown_kind_is_error() {
        let text = r#"
            [[modifiers]]
            kind = "number_of_threads"
            jobs = 4
        "#;
        assert!(Profile::from_toml_str(text).is_err());
    }

    #[test]
    fn test_profile_missing_field_is_error() {
        let text = r#"
            [[modifiers]]
            kind = "number_of_jobs"
        "#;
        assert!(Profile::from_toml_str(text).is_err());
    }

    #[test]
    fn test_profile_misspelled_table_is_error() {
        // `[[modifier]]` instead of `[[modifiers]]` must not yield an empty profile.
        let text = r#"
            [[modifier]]
            kind = "number_of_jobs"
            jobs = 4
        "#;
        assert!(Profile::from_toml_str(text).is_err());
    }

    #[test]
    fn test_profile_stray_field_on_modifier_is_error() {
        let text = r#"
            [[modifiers]]
            kind = "number_of_jobs"
            jobs = 4
            max = 2
        "#;
        assert!(Profile::from_toml_str(text).is_err());
    }

    #[test]
    fn test_profile_tag_field_is_not_treated_as_unknown() {
        let text = r#"
            [[modifiers]]
            kind = "jobs_at_most"
            max = 2
        "#;
        let profile = Profile::from_toml_str(text).unwrap();
        assert_eq!(profile.modifiers, vec![ModifierSpec::JobsAtMost { max: 2 }]);
    }
}
