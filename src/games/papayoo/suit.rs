//! The four Papayoo suits.
//!
//! Before each deal a die picks the suit whose 7 is the Papayoo (40
//! points). Suits serialize as their symbol, which is also how the score
//! pages stored them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "♠", alias = "spades")]
    Spades,
    #[serde(rename = "♥", alias = "hearts")]
    Hearts,
    #[serde(rename = "♦", alias = "diamonds")]
    Diamonds,
    #[serde(rename = "♣", alias = "clubs")]
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = String;

    /// Accepts the symbol, the English or French name, or its initial.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let suit = match lowered.as_str() {
            "♠" | "♤" | "spades" | "spade" | "s" | "pique" | "piques" | "p" => Suit::Spades,
            "♥" | "♡" | "hearts" | "heart" | "h" | "coeur" | "cœur" | "coeurs" => Suit::Hearts,
            "♦" | "♢" | "diamonds" | "diamond" | "d" | "carreau" | "carreaux" => Suit::Diamonds,
            "♣" | "♧" | "clubs" | "club" | "c" | "trèfle" | "trefle" | "t" => Suit::Clubs,
            _ => return Err(format!("unknown suit '{}'", s.trim())),
        };
        Ok(suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_symbols() {
        assert_eq!("♥".parse::<Suit>().unwrap(), Suit::Hearts);
        assert_eq!("Clubs".parse::<Suit>().unwrap(), Suit::Clubs);
        assert_eq!("carreau".parse::<Suit>().unwrap(), Suit::Diamonds);
        assert_eq!("s".parse::<Suit>().unwrap(), Suit::Spades);
        assert!("stars".parse::<Suit>().is_err());
    }

    #[test]
    fn test_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Suit::Diamonds).unwrap(), "\"♦\"");
        let suit: Suit = serde_json::from_str("\"hearts\"").unwrap();
        assert_eq!(suit, Suit::Hearts);
    }

    #[test]
    fn test_symbols_roundtrip_through_from_str() {
        for suit in Suit::ALL {
            assert_eq!(suit.symbol().parse::<Suit>().unwrap(), suit);
        }
    }
}
