//! Value objects shared by the catalog and the order model.

use serde::{Deserialize, Serialize};

/// Amount of money in kopecks, displayed as hryvnias with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    minor: i64,
}

impl Money {
    pub fn from_minor(minor: i64) -> Self {
        Self { minor }
    }

    /// Creates an amount from whole hryvnias, saturating at the `i64` bounds.
    pub fn from_major(major: i64) -> Self {
        Self {
            minor: major.saturating_mul(100),
        }
    }

    pub fn minor(&self) -> i64 {
        self.minor
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_scales_to_minor() {
        assert_eq!(Money::from_major(350).minor(), 35000);
        assert_eq!(Money::from_major(350), Money::from_minor(35000));
    }

    #[test]
    fn test_from_major_saturates() {
        assert_eq!(Money::from_major(i64::MAX).minor(), i64::MAX);
        assert_eq!(Money::from_major(i64::MIN).minor(), i64::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(700).to_string(), "700.00");
        assert_eq!(Money::from_minor(1250).to_string(), "12.50");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-1234).to_string(), "-12.34");
        assert_eq!(Money::from_minor(i64::MIN).to_string(), "-92233720368547758.08");
    }

    #[test]
    fn test_serialization_is_minor_units() {
        let json = serde_json::to_string(&Money::from_major(12)).unwrap();
        assert_eq!(json, "1200");
        assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), Money::from_major(12));
    }
}
