//! Module for [`WorldStateView`](crate::wsv::WorldStateView)-related
//! configuration and structs.

use grove_data_model::{account::AccountId, LengthLimits};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URI: &str = "https://tokens.grove.dev";
const DEFAULT_TREASURY_ACCOUNT: &str = "treasury";
const DEFAULT_IDENT_LENGTH_LIMITS: LengthLimits = LengthLimits::new(1, 2_u32.pow(7));

/// `WorldStateView` configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE", default)]
pub struct Configuration {
    /// Base URI from which token metadata URIs are derived.
    pub base_uri: String,
    /// Account recorded as the registry treasury at bootstrap; consumable
    /// payments land here.
    pub treasury_account: AccountId,
    /// [`LengthLimits`] for the number of chars in identifiers that can be
    /// stored in the world.
    pub ident_length_limits: LengthLimits,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_owned(),
            treasury_account: DEFAULT_TREASURY_ACCOUNT
                .parse()
                .expect("Hardcoded treasury account name is valid"),
            ident_length_limits: DEFAULT_IDENT_LENGTH_LIMITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_round_trips() {
        let config = Configuration::default();
        let json = serde_json::to_string(&config).expect("config serializes");
        let parsed: Configuration = serde_json::from_str(&json).expect("config deserializes");
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_configuration_fills_defaults() {
        let parsed: Configuration =
            serde_json::from_str(r#"{"BASE_URI": "https://example.test"}"#).expect("Valid");
        assert_eq!(parsed.base_uri, "https://example.test");
        assert_eq!(
            parsed.treasury_account,
            DEFAULT_TREASURY_ACCOUNT.parse().expect("Valid")
        );
    }
}
