//! Environment-driven settings.

use tracing::warn;
use uuid::Uuid;

use mosaic_core::OrderId;

use crate::error::{ServiceError, ServiceResult};

pub const DEFAULT_TEMPLATE_ID_ENV: &str = "MOSAIC_DEFAULT_TEMPLATE_ID";
pub const ORGANIZATION_CODE_ENV: &str = "MOSAIC_ORGANIZATION_CODE";

/// Id of the packaged default order template.
pub const DEFAULT_TEMPLATE_ID: &str = "2e1bbcf9-dbef-45d6-b496-cff85a0a6d80";
const DEFAULT_TEMPLATE_UUID: Uuid = match Uuid::try_parse(DEFAULT_TEMPLATE_ID) {
    Ok(id) => id,
    Err(_) => panic!("DEFAULT_TEMPLATE_ID is not a UUID"),
};
/// Code of the vendor organization the default template points at.
pub const DEFAULT_ORGANIZATION_CODE: &str = "MOSAIC";

/// Process-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicSettings {
    pub default_template_id: OrderId,
    pub organization_code: String,
}

impl Default for MosaicSettings {
    fn default() -> Self {
        Self {
            default_template_id: OrderId::from_uuid(DEFAULT_TEMPLATE_UUID),
            organization_code: DEFAULT_ORGANIZATION_CODE.to_string(),
        }
    }
}

impl MosaicSettings {
    /// Load from the process environment.
    pub fn from_env() -> ServiceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup. Unset or blank variables fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ServiceResult<Self> {
        let read = |key: &str, default: &str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                warn!(variable = key, default_value = default, "environment variable not set; using default");
                default.to_string()
            }
        };

        let raw_template_id = read(DEFAULT_TEMPLATE_ID_ENV, DEFAULT_TEMPLATE_ID);
        let default_template_id = raw_template_id.parse::<OrderId>().map_err(|e| {
            ServiceError::Configuration(format!("{DEFAULT_TEMPLATE_ID_ENV}: {e}"))
        })?;

        Ok(Self {
            default_template_id,
            organization_code: read(ORGANIZATION_CODE_ENV, DEFAULT_ORGANIZATION_CODE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = MosaicSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, MosaicSettings::default());
        assert_eq!(settings.default_template_id.to_string(), DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn default_settings_use_packaged_template_id() {
        assert_eq!(
            MosaicSettings::default().default_template_id.to_string(),
            DEFAULT_TEMPLATE_ID
        );
    }

    #[test]
    fn variables_override_defaults() {
        let settings = MosaicSettings::from_lookup(lookup(&[
            (DEFAULT_TEMPLATE_ID_ENV, "0196b1d2-0000-7000-8000-000000000001"),
            (ORGANIZATION_CODE_ENV, "ACME"),
        ]))
        .unwrap();

        assert_eq!(
            settings.default_template_id.to_string(),
            "0196b1d2-0000-7000-8000-000000000001"
        );
        assert_eq!(settings.organization_code, "ACME");
    }

    #[test]
    fn malformed_template_id_is_a_configuration_error() {
        let err = MosaicSettings::from_lookup(lookup(&[(DEFAULT_TEMPLATE_ID_ENV, "nope")]))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(msg) if msg.contains(DEFAULT_TEMPLATE_ID_ENV)));
    }
}
