use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::de::opt_string_or_number;

/// Inbound alert exactly as the signal source sent it. Nothing is assumed
/// present; the validator decides what is usable.
#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub side: Option<String>,

    // "0.001" or 0.001, both arrive here as text
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub quantity: Option<String>,

    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("BUY") {
            Ok(Side::Buy)
        } else if s.eq_ignore_ascii_case("SELL") {
            Ok(Side::Sell)
        } else {
            Err(())
        }
    }
}
