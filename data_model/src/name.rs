//! This module contains [`Name`](`crate::name::Name`) structure
//! and related implementations and trait implementations.

use core::{borrow::Borrow, ops::RangeInclusive, str::FromStr};

use derive_more::{DebugCustom, Display};
use serde::{Deserialize, Serialize};

use crate::{LengthLimits, ParseError, ValidationError};

/// `Name` struct represents the type of grove entities names, such as an
/// asset's display name, a collection name or a consumable id.
///
/// Display names may contain inner spaces and an issue-index suffix
/// (`"acacia #1"`); what they may not do is be empty, carry control
/// characters or hide leading/trailing whitespace.
#[derive(
    DebugCustom, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[debug(fmt = "{_0}")]
#[display(fmt = "{_0}")]
#[serde(transparent)]
#[repr(transparent)]
pub struct Name(String);

impl Name {
    /// Check if `candidate` string would be valid [`Name`].
    ///
    /// # Errors
    /// Fails if not valid [`Name`].
    fn validate_str(candidate: &str) -> Result<(), ParseError> {
        if candidate.is_empty() {
            return Err(ParseError {
                reason: "Empty `Name`",
            });
        }
        if candidate.starts_with(char::is_whitespace) || candidate.ends_with(char::is_whitespace) {
            return Err(ParseError {
                reason: "Leading or trailing whitespace not allowed in `Name` constructs",
            });
        }
        if candidate.chars().any(char::is_control) {
            return Err(ParseError {
                reason: "Control characters not allowed in `Name` constructs",
            });
        }
        Ok(())
    }

    /// Check if the name length is in the given `limits`.
    ///
    /// # Errors
    /// Fails if the number of chars in the name is out of the limits.
    pub fn validate_len(&self, limits: LengthLimits) -> Result<(), ValidationError> {
        let range = RangeInclusive::from(limits);
        if range.contains(&self.0.chars().count()) {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "name `{}` length violates limits {}..={}",
                self.0,
                range.start(),
                range.end(),
            )))
        }
    }

    /// Display name carrying an issue-index suffix, e.g. `"acacia #1"`.
    #[must_use]
    pub fn numbered(&self, index: u32) -> Self {
        Self(format!("{} #{index}", self.0))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

impl FromStr for Name {
    type Err = ParseError;

    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        Self::validate_str(candidate)?;
        Ok(Self(candidate.to_owned()))
    }
}

impl TryFrom<String> for Name {
    type Error = ParseError;

    fn try_from(candidate: String) -> Result<Self, Self::Error> {
        Self::validate_str(&candidate)?;
        Ok(Self(candidate))
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let candidate = String::deserialize(deserializer)?;
        Self::validate_str(&candidate).map_err(D::Error::custom)?;

        Ok(Self(candidate))
    }
}

/// The prelude re-exports most commonly used traits, structs and macros from this crate.
pub mod prelude {
    pub use super::Name;
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID_NAMES: [&str; 5] = ["", " ", " acacia", "acacia ", "aca\ncia"];

    #[test]
    fn parse_name() {
        for invalid_name in INVALID_NAMES {
            assert!(invalid_name.parse::<Name>().is_err(), "{invalid_name:?}");
        }
        for valid_name in ["acacia", "acacia #1", "seed nursery"] {
            assert!(valid_name.parse::<Name>().is_ok(), "{valid_name:?}");
        }
    }

    #[test]
    fn deserialize_name() {
        for invalid_name in INVALID_NAMES {
            let serialized = serde_json::to_string(invalid_name).expect("Valid");
            let name = serde_json::from_str::<Name>(serialized.as_str());

            assert!(name.is_err());
        }
    }

    #[test]
    fn numbered_name_keeps_base() {
        let name: Name = "acacia".parse().expect("Valid");
        assert_eq!(name.numbered(1).as_ref(), "acacia #1");
    }

    #[test]
    fn validate_len_limits() {
        let name: Name = "acacia #1".parse().expect("Valid");
        assert!(name.validate_len(LengthLimits::new(1, 128)).is_ok());
        assert!(name.validate_len(LengthLimits::new(1, 4)).is_err());
    }
}
