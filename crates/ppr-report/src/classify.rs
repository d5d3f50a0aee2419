//! Postcode country classification
//!
//! Every audit record is routed to exactly one of the two regional reports
//! based on its site postcode. Northern Ireland (`BT`) postcodes are UK-format
//! but belong to the IE report, and anything unrecognized falls back to IE.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Irish Eircode: one letter, two digits, optional space, four alphanumerics
static EIRCODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]\d{2}\s?[A-Z0-9]{4}$").unwrap());

/// UK postcode: one or two letters, one or two digits, optional letter,
/// optional space, one digit, two letters. The BT prefix is excluded by the
/// check order in [`Country::from_postcode`], not by the pattern.
static UK_POSTCODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{1,2}\d{1,2}[A-Z]?\s?\d[A-Z]{2}$").unwrap());

/// Country tag assigned to each audit record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Gb,
    Ie,
}

impl Country {
    /// Classify a raw postcode string.
    ///
    /// Checks run in order, first match wins:
    /// 1. empty or whitespace-only -> IE
    /// 2. `BT` prefix (Northern Ireland) -> IE
    /// 3. Eircode shape -> IE
    /// 4. UK postcode shape -> GB
    /// 5. anything else -> IE
    ///
    /// Never fails; any input yields a tag.
    pub fn from_postcode(postcode: &str) -> Country {
        if postcode.trim().is_empty() {
            return Country::Ie;
        }

        let pc = postcode.trim().to_uppercase().replace("  ", " ");

        if pc.starts_with("BT") {
            return Country::Ie;
        }
        if EIRCODE_PATTERN.is_match(&pc) {
            return Country::Ie;
        }
        if UK_POSTCODE_PATTERN.is_match(&pc) {
            return Country::Gb;
        }

        Country::Ie
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Gb => "GB",
            Country::Ie => "IE",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Country {
    type Err = ppr_common::PprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GB" => Ok(Country::Gb),
            "IE" => Ok(Country::Ie),
            _ => Err(ppr_common::PprError::Parse(format!(
                "unknown country tag: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_default_to_ie() {
        assert_eq!(Country::from_postcode(""), Country::Ie);
        assert_eq!(Country::from_postcode("   "), Country::Ie);
        assert_eq!(Country::from_postcode("\t"), Country::Ie);
    }

    #[test]
    fn test_bt_prefix_routes_to_ie() {
        assert_eq!(Country::from_postcode("BT1 1AA"), Country::Ie);
        assert_eq!(Country::from_postcode("bt9 6ar"), Country::Ie);
        assert_eq!(Country::from_postcode("  BT48 7PY "), Country::Ie);
    }

    #[test]
    fn test_eircodes_route_to_ie() {
        assert_eq!(Country::from_postcode("D02 AF30"), Country::Ie);
        assert_eq!(Country::from_postcode("D02AF30"), Country::Ie);
        assert_eq!(Country::from_postcode("t12 x5y2"), Country::Ie);
        assert_eq!(Country::from_postcode("A65 F4E2"), Country::Ie);
    }

    #[test]
    fn test_uk_postcodes_route_to_gb() {
        assert_eq!(Country::from_postcode("SW1A 1AA"), Country::Gb);
        assert_eq!(Country::from_postcode("SW1A1AA"), Country::Gb);
        assert_eq!(Country::from_postcode("m1 1ae"), Country::Gb);
        assert_eq!(Country::from_postcode("B33 8TH"), Country::Gb);
        assert_eq!(Country::from_postcode("CR2 6XH"), Country::Gb);
        assert_eq!(Country::from_postcode("DN55 1PT"), Country::Gb);
    }

    #[test]
    fn test_double_spaces_collapse_before_matching() {
        assert_eq!(Country::from_postcode("SW1A  1AA"), Country::Gb);
        assert_eq!(Country::from_postcode("D02  AF30"), Country::Ie);
    }

    #[test]
    fn test_unrecognized_defaults_to_ie() {
        assert_eq!(Country::from_postcode("not a postcode"), Country::Ie);
        assert_eq!(Country::from_postcode("12345"), Country::Ie);
        assert_eq!(Country::from_postcode("ZZZZZZZZ"), Country::Ie);
    }

    #[test]
    fn test_country_round_trips_through_str() {
        assert_eq!("GB".parse::<Country>().unwrap(), Country::Gb);
        assert_eq!("ie".parse::<Country>().unwrap(), Country::Ie);
        assert!("XX".parse::<Country>().is_err());
        assert_eq!(Country::Gb.to_string(), "GB");
    }
}
