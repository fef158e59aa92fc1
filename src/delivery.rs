//! Delivery Options
//!
//! The closed set of shipping methods the storefront offers. Each option
//! carries a fixed price and an estimated transit time; neither is
//! user-defined, so both live on the enum rather than in stored data.

use std::{ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named shipping method with a fixed price and an estimated duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    /// Door delivery within 5 to 7 days.
    #[default]
    Standard,

    /// Courier delivery within 2 to 3 days.
    Express,

    /// Collection from a relay point within 4 to 6 days.
    Pickup,
}

impl DeliveryOption {
    /// Every selectable delivery option, in display order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::Pickup];

    /// Fixed delivery charge in minor units.
    #[must_use]
    pub fn price(self) -> u64 {
        match self {
            Self::Standard => 500,
            Self::Express => 1200,
            Self::Pickup => 300,
        }
    }

    /// Estimated transit time as an inclusive range of days.
    #[must_use]
    pub fn estimated_days(self) -> RangeInclusive<u8> {
        match self {
            Self::Standard => 5..=7,
            Self::Express => 2..=3,
            Self::Pickup => 4..=6,
        }
    }

    /// Human-readable name for option pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard delivery",
            Self::Express => "Express delivery",
            Self::Pickup => "Pickup point",
        }
    }
}

/// Error returned when parsing an unknown delivery option name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown delivery option {0:?}")]
pub struct UnknownDeliveryOption(String);

impl FromStr for DeliveryOption {
    type Err = UnknownDeliveryOption;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            "pickup" => Ok(Self::Pickup),
            other => Err(UnknownDeliveryOption(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_is_standard() {
        assert_eq!(DeliveryOption::default(), DeliveryOption::Standard);
    }

    #[test]
    fn prices_match_the_published_rates() {
        assert_eq!(DeliveryOption::Standard.price(), 500);
        assert_eq!(DeliveryOption::Express.price(), 1200);
        assert_eq!(DeliveryOption::Pickup.price(), 300);
    }

    #[test]
    fn estimated_days_are_inclusive_ranges() {
        assert_eq!(DeliveryOption::Standard.estimated_days(), 5..=7);
        assert_eq!(DeliveryOption::Express.estimated_days(), 2..=3);
        assert_eq!(DeliveryOption::Pickup.estimated_days(), 4..=6);
    }

    #[test]
    fn serializes_to_lowercase_literals() -> TestResult {
        assert_eq!(
            serde_json::to_string(&DeliveryOption::Standard)?,
            "\"standard\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryOption::Express)?,
            "\"express\""
        );
        assert_eq!(serde_json::to_string(&DeliveryOption::Pickup)?, "\"pickup\"");

        Ok(())
    }

    #[test]
    fn parses_each_published_name() -> TestResult {
        for option in DeliveryOption::ALL {
            let parsed: DeliveryOption = serde_json::from_str::<String>(
                &serde_json::to_string(&option)?,
            )?
            .parse()?;

            assert_eq!(parsed, option);
        }

        Ok(())
    }

    #[test]
    fn parsing_unknown_name_errors() {
        let result = "drone".parse::<DeliveryOption>();

        assert_eq!(result, Err(UnknownDeliveryOption("drone".to_owned())));
    }
}
