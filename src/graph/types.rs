//! Core type definitions for the city graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a city node (e.g., "Monterrey", "CDMX")
///
/// Names are case-sensitive and compared by exact value. A `CityName` is
/// always non-empty; construct one through [`CityName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// Validate and wrap a city name. Returns `None` for the empty string.
    pub fn parse(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(CityName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for CityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CityName {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CityName::parse(s).ok_or_else(|| "city name must not be empty".to_string())
    }
}

impl From<CityName> for String {
    fn from(name: CityName) -> Self {
        name.0
    }
}

/// Road distance between two cities
///
/// Always strictly greater than zero. Positive infinity is a valid distance;
/// NaN is not.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Distance(f64);

impl Distance {
    /// Validate a raw distance. Zero, negative and NaN values are rejected.
    pub fn new(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Distance(value))
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Distance {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Distance::new(value).ok_or_else(|| format!("distance must be positive, got {}", value))
    }
}

impl From<Distance> for f64 {
    fn from(d: Distance) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_name() {
        let name = CityName::parse("Monterrey").unwrap();
        assert_eq!(name.as_str(), "Monterrey");
        assert_eq!(format!("{}", name), "Monterrey");
        assert!(CityName::parse("").is_none());
    }

    #[test]
    fn test_city_name_is_case_sensitive() {
        let a = CityName::parse("cdmx").unwrap();
        let b = CityName::parse("CDMX").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_distance_validation() {
        assert_eq!(Distance::new(900.0).unwrap().as_f64(), 900.0);
        assert_eq!(Distance::new(0.5).unwrap().as_f64(), 0.5);
        assert!(Distance::new(0.0).is_none());
        assert!(Distance::new(-100.0).is_none());
        assert!(Distance::new(f64::NAN).is_none());
        assert!(Distance::new(f64::NEG_INFINITY).is_none());
        assert_eq!(Distance::new(f64::INFINITY).unwrap().as_f64(), f64::INFINITY);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<CityName>("\"\"").is_err());
        assert!(serde_json::from_str::<Distance>("-3").is_err());
        let d: Distance = serde_json::from_str("213").unwrap();
        assert_eq!(d.as_f64(), 213.0);
    }
}
