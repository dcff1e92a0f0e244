// Exchange Strategy Domain Model

use crate::error::ExchangeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How an exchange moves data between the two bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExchangeStrategy {
    /// Every step performs a full, independent copy of the value
    Duplicating,
    /// Every step hands over ownership of the value's resources
    Transferring,
}

impl ExchangeStrategy {
    /// Both strategies, copy first and move second
    pub const ALL: [ExchangeStrategy; 2] =
        [ExchangeStrategy::Duplicating, ExchangeStrategy::Transferring];

    /// Short name used on the command line
    pub fn short_name(&self) -> &'static str {
        match self {
            ExchangeStrategy::Duplicating => "copy",
            ExchangeStrategy::Transferring => "move",
        }
    }
}

impl std::fmt::Display for ExchangeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExchangeStrategy::Duplicating => write!(f, "DUPLICATING"),
            ExchangeStrategy::Transferring => write!(f, "TRANSFERRING"),
        }
    }
}

impl FromStr for ExchangeStrategy {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copy" | "clone" | "duplicating" => Ok(ExchangeStrategy::Duplicating),
            "move" | "transfer" | "transferring" => Ok(ExchangeStrategy::Transferring),
            _ => Err(ExchangeError::UnknownStrategy(s.to_string())),
        }
    }
}
