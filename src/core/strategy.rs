//! The fixed move heuristics a player can follow.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChopsticksError;

/// How a player picks its attacking hand and its target every turn.
///
/// | Strategy | Attacks with | Targets |
/// |---|---|---|
/// | `Random` | a random in-hand | a random in-hand of a random opponent |
/// | `Slow` | its lowest hand | the lowest opponent hand |
/// | `Fast` | its highest hand | the highest opponent hand still in |
/// | `Aggressive` | its highest hand | the lowest opponent hand |
/// | `Passive` | its lowest hand | the highest opponent hand still in |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Random,
    Slow,
    Fast,
    Aggressive,
    Passive,
}

impl Strategy {
    /// Enumeration order used to build batch pairings.
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::Fast,
        Strategy::Slow,
        Strategy::Aggressive,
        Strategy::Passive,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Random => "RANDOM",
            Strategy::Slow => "SLOW",
            Strategy::Fast => "FAST",
            Strategy::Aggressive => "AGGRESSIVE",
            Strategy::Passive => "PASSIVE",
        }
    }

    /// Parse a comma separated lineup such as `"fast,slow"`.
    pub fn parse_list(input: &str) -> Result<Vec<Strategy>, ChopsticksError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ChopsticksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "slow" => Ok(Strategy::Slow),
            "fast" => Ok(Strategy::Fast),
            "aggressive" => Ok(Strategy::Aggressive),
            "passive" => Ok(Strategy::Passive),
            _ => Err(ChopsticksError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("FAST".parse::<Strategy>().unwrap(), Strategy::Fast);
        assert_eq!("Aggressive".parse::<Strategy>().unwrap(), Strategy::Aggressive);
        assert!(matches!(
            "lazy".parse::<Strategy>(),
            Err(ChopsticksError::UnknownStrategy(s)) if s == "lazy"
        ));
    }

    #[test]
    fn test_parse_list() {
        let lineup = Strategy::parse_list("fast, slow,random").unwrap();
        assert_eq!(lineup, vec![Strategy::Fast, Strategy::Slow, Strategy::Random]);

        assert!(Strategy::parse_list("fast,bogus").is_err());
        assert!(Strategy::parse_list("").unwrap().is_empty());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Strategy::Passive).unwrap();
        assert_eq!(json, "\"passive\"");
    }
}
