//! Service type — the closed set of billing categories for a service event.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedVariantError;

/// Billing category of a service event, chosen when the record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Regular,
    AfterHours,
    Emergency,
    Discount,
}

impl ServiceType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Regular,
        Self::AfterHours,
        Self::Emergency,
        Self::Discount,
    ];

    /// Stable textual tag, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::AfterHours => "after_hours",
            Self::Emergency => "emergency",
            Self::Discount => "discount",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = UnsupportedVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnsupportedVariantError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_known_tag() {
        for variant in ServiceType::ALL {
            assert_eq!(variant.as_str().parse::<ServiceType>(), Ok(variant));
        }
    }

    #[test]
    fn should_reject_unknown_tag() {
        let result = "snowplow".parse::<ServiceType>();
        assert_eq!(result, Err(UnsupportedVariantError::new("snowplow")));
    }

    #[test]
    fn should_reject_tag_with_wrong_case() {
        assert!("EMERGENCY".parse::<ServiceType>().is_err());
    }

    #[test]
    fn should_display_snake_case_tag() {
        assert_eq!(ServiceType::AfterHours.to_string(), "after_hours");
        assert_eq!(ServiceType::Regular.to_string(), "regular");
    }

    #[test]
    fn should_match_serde_representation() {
        for variant in ServiceType::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
    }
}
