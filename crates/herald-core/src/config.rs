//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::domain::HeraldError;

/// Options for an `EventRegistry`.
///
/// Missing fields fall back to `Default`, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Report repeated definitions to the diagnostic sink.
    /// Duplicates are counted either way.
    pub warn_on_duplicate: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            warn_on_duplicate: true,
        }
    }
}

impl RegistryConfig {
    pub fn from_json(s: &str) -> Result<Self, HeraldError> {
        serde_json::from_str(s).map_err(HeraldError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_warns_on_duplicate() {
        assert!(RegistryConfig::default().warn_on_duplicate);
    }

    #[test]
    fn empty_json_gets_default_config() {
        let cfg = RegistryConfig::from_json("{}").expect("deserialize");
        assert_eq!(cfg, RegistryConfig::default());
    }

    #[test]
    fn warn_on_duplicate_can_be_disabled() {
        let cfg = RegistryConfig::from_json(r#"{ "warn_on_duplicate": false }"#)
            .expect("deserialize");
        assert!(!cfg.warn_on_duplicate);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = RegistryConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, HeraldError::Config(_)));
        assert!(err.to_string().contains("invalid config"));
    }
}
