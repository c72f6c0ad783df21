/// Configuration for the history system.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How redo walks forward through recorded snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RedoPolicy {
    /// Conventional redo: each step advances one snapshot, the post-edit
    /// state is reachable again, and a new edit after undo prunes the
    /// forward branch.
    #[default]
    Linear,
    /// Peek-and-step redo of the first release: the cursor advances one
    /// step and shows the snapshot found there. The post-edit state is never
    /// reachable and forward entries are never pruned.
    Legacy,
}

impl RedoPolicy {
    /// All policies, in display order.
    pub const ALL: [RedoPolicy; 2] = [RedoPolicy::Linear, RedoPolicy::Legacy];

    /// Short label for menus and the status bar.
    pub fn label(self) -> &'static str {
        match self {
            RedoPolicy::Linear => "Linear",
            RedoPolicy::Legacy => "Legacy",
        }
    }
}

impl fmt::Display for RedoPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RedoPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(RedoPolicy::Linear),
            "legacy" => Ok(RedoPolicy::Legacy),
            other => Err(format!("unknown redo policy: {other}")),
        }
    }
}

/// Configuration for a `HistoryCursor`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    pub redo_policy: RedoPolicy,
}

impl HistoryConfig {
    pub fn with_policy(redo_policy: RedoPolicy) -> Self {
        Self { redo_policy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.redo_policy, RedoPolicy::Linear);
    }

    #[test]
    fn test_policy_from_str_is_case_insensitive() {
        assert_eq!("Linear".parse::<RedoPolicy>(), Ok(RedoPolicy::Linear));
        assert_eq!(" LEGACY ".parse::<RedoPolicy>(), Ok(RedoPolicy::Legacy));
        assert!("sideways".parse::<RedoPolicy>().is_err());
    }

    #[test]
    fn test_policy_serde_uses_variant_names() {
        let json = serde_json::to_string(&RedoPolicy::Legacy).unwrap();
        assert_eq!(json, "\"Legacy\"");
        let parsed: RedoPolicy = serde_json::from_str("\"Linear\"").unwrap();
        assert_eq!(parsed, RedoPolicy::Linear);
    }

    #[test]
    fn test_policy_labels_match_display() {
        for policy in RedoPolicy::ALL {
            assert_eq!(policy.to_string(), policy.label());
        }
    }
}
