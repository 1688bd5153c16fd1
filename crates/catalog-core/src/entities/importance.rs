//! Importance level of a catalog entry

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Names that are always considered essential regardless of popularity
const ESSENTIAL_TOOLS: [&str; 6] = [
    "kubernetes",
    "docker",
    "jenkins",
    "terraform",
    "prometheus",
    "git",
];

/// Star count above which a tool is considered essential
const ESSENTIAL_STARS: u64 = 10_000;

/// Star count above which a tool is recommended
const RECOMMENDED_STARS: u64 = 5_000;

/// How strongly a tool is recommended for a DevOps toolbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Importance {
    Essential,
    Recommended,
    #[default]
    Optional,
}

impl Importance {
    /// All levels, most important first
    pub const ALL: [Importance; 3] = [Self::Essential, Self::Recommended, Self::Optional];

    /// Canonical string form as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Essential => "Essential",
            Self::Recommended => "Recommended",
            Self::Optional => "Optional",
        }
    }

    /// Derive an importance level from a tool name and its repository star count
    pub fn from_stars(name: &str, stars: u64) -> Self {
        let name = name.trim().to_lowercase();
        if ESSENTIAL_TOOLS.contains(&name.as_str()) || stars > ESSENTIAL_STARS {
            Self::Essential
        } else if stars > RECOMMENDED_STARS {
            Self::Recommended
        } else {
            Self::Optional
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known importance level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown importance level: {0}")]
pub struct ParseImportanceError(pub String);

impl FromStr for Importance {
    type Err = ParseImportanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "essential" => Ok(Self::Essential),
            "recommended" => Ok(Self::Recommended),
            "optional" => Ok(Self::Optional),
            _ => Err(ParseImportanceError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("essential".parse::<Importance>(), Ok(Importance::Essential));
        assert_eq!(" Recommended ".parse::<Importance>(), Ok(Importance::Recommended));
        assert_eq!("OPTIONAL".parse::<Importance>(), Ok(Importance::Optional));
        assert!("critical".parse::<Importance>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_as_str() {
        for level in Importance::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn test_from_stars() {
        assert_eq!(Importance::from_stars("Docker", 0), Importance::Essential);
        assert_eq!(Importance::from_stars("lazydocker", 25_000), Importance::Essential);
        assert_eq!(Importance::from_stars("k9s", 10_000), Importance::Recommended);
        assert_eq!(Importance::from_stars("k9s", 5_001), Importance::Recommended);
        assert_eq!(Importance::from_stars("tiny-tool", 5_000), Importance::Optional);
    }

    #[test]
    fn test_default_is_optional() {
        assert_eq!(Importance::default(), Importance::Optional);
    }
}
