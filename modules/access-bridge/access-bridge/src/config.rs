//! Configuration for the access bridge gateway.

use serde::{Deserialize, Serialize};

/// Access bridge gateway configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessBridgeConfig {
    /// How to treat a download whose identifier cannot be resolved while
    /// the capability query is in use.
    pub unresolvable_downloads: UnresolvableDownloads,
}

/// Policy for downloads with no resolvable identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvableDownloads {
    /// Pass the download engine's prior decision through unchanged.
    ///
    /// The membership engine cannot evaluate content it cannot identify, so
    /// the bridge abstains. A warning is logged per occurrence.
    #[default]
    Allow,
    /// Deny the download outright.
    Deny,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_to_allowing_unresolvable_downloads() {
        let cfg: AccessBridgeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.unresolvable_downloads, UnresolvableDownloads::Allow);
    }

    #[test]
    fn deny_policy_deserializes() {
        let cfg: AccessBridgeConfig =
            serde_json::from_str(r#"{"unresolvable_downloads": "deny"}"#).unwrap();
        assert_eq!(cfg.unresolvable_downloads, UnresolvableDownloads::Deny);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res = serde_json::from_str::<AccessBridgeConfig>(r#"{"vendor": "x"}"#);
        assert!(res.is_err());
    }
}
