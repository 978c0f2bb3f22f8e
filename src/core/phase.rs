//! Session lifecycle.

use serde::{Deserialize, Serialize};

/// Lifecycle shared by both games.
///
/// `Setup` collects names and configuration, `InProgress` is the round
/// entry loop, and `Finished` is the read-only ranking display. Reset
/// returns to `Setup` from any phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Setup,
    InProgress,
    Finished,
}

impl SessionPhase {
    /// Rounds can only be entered or edited while in progress.
    #[must_use]
    pub fn accepts_rounds(self) -> bool {
        self == SessionPhase::InProgress
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SessionPhase::Setup => "in setup",
            SessionPhase::InProgress => "in progress",
            SessionPhase::Finished => "finished",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_setup() {
        assert_eq!(SessionPhase::default(), SessionPhase::Setup);
        assert!(!SessionPhase::Setup.accepts_rounds());
        assert!(SessionPhase::InProgress.accepts_rounds());
        assert!(!SessionPhase::Finished.accepts_rounds());
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&SessionPhase::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
