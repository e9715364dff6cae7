//! Evaluation-mode selection.

use semver::Version;

/// Membership engine version that introduced the capability query.
pub(crate) const CAPABILITY_API_INTRODUCED: Version = Version::new(2, 7, 0);

/// How restricted downloads are evaluated.
///
/// Selected once at startup from the membership engine's declared version
/// and never re-checked per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Coarse status-flag policy for engines without the capability query:
    /// `active` and `free` members pass, everyone else is denied.
    StatusFlags,
    /// Delegate the whole evaluation to the engine's capability query,
    /// which covers tiers, grace periods, and per-content overrides.
    Capability,
}

impl EvaluationMode {
    /// Select the evaluation mode for the given engine version.
    #[must_use]
    pub fn for_engine_version(version: &Version) -> Self {
        if *version >= CAPABILITY_API_INTRODUCED {
            Self::Capability
        } else {
            Self::StatusFlags
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn mode(version: &str) -> EvaluationMode {
        EvaluationMode::for_engine_version(&Version::parse(version).unwrap())
    }

    #[test]
    fn pre_capability_engines_use_status_flags() {
        assert_eq!(mode("2.6.9"), EvaluationMode::StatusFlags);
        assert_eq!(mode("1.0.0"), EvaluationMode::StatusFlags);
    }

    #[test]
    fn capability_introduction_is_the_boundary() {
        assert_eq!(mode("2.7.0"), EvaluationMode::Capability);
        assert_eq!(mode("2.7.1"), EvaluationMode::Capability);
        assert_eq!(mode("3.0.0"), EvaluationMode::Capability);
    }

    #[test]
    fn prereleases_of_the_boundary_stay_on_status_flags() {
        assert_eq!(mode("2.7.0-beta.1"), EvaluationMode::StatusFlags);
    }
}
