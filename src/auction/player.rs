//! Seats, teams and suits of a four-player bazar table.

use crate::auction::error::AuctionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two partnerships at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Players seated on this team, in turn order.
    pub fn players(self) -> Vec<Player> {
        Player::ALL.into_iter().filter(|p| p.team() == self).collect()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "Team A"),
            Self::B => write!(f, "Team B"),
        }
    }
}

/// A seat at the table. Partners sit opposite each other: A with C, B with D.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
    C,
    D,
}

/// Number of seats; a round of bidding ends after this many consecutive passes.
pub const PLAYER_COUNT: u8 = 4;

impl Player {
    /// All seats in turn order.
    pub const ALL: [Player; PLAYER_COUNT as usize] = [Player::A, Player::B, Player::C, Player::D];

    pub fn team(self) -> Team {
        match self {
            Self::A | Self::C => Team::A,
            Self::B | Self::D => Team::B,
        }
    }

    /// The seat that acts after this one.
    pub fn next(self) -> Player {
        match self {
            Self::A => Self::B,
            Self::B => Self::C,
            Self::C => Self::D,
            Self::D => Self::A,
        }
    }

    /// Short seat letter.
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.letter())
    }
}

impl FromStr for Player {
    type Err = AuctionError;

    /// Accepts the seat letter (`"b"`, `"B"`) or the display form (`"Player B"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let letter = trimmed.strip_prefix("Player ").unwrap_or(trimmed);
        match letter.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(AuctionError::IllegalValue {
                kind: "player",
                value: s.to_string(),
            }),
        }
    }
}

/// Trump suit named with a bid. `NoTrump` is the "all trumps" contract,
/// shown as `A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    NoTrump,
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 5] = [
        Suit::NoTrump,
        Suit::Spades,
        Suit::Hearts,
        Suit::Clubs,
        Suit::Diamonds,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::NoTrump => "A",
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = AuctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(suit) = Suit::ALL.into_iter().find(|suit| suit.symbol() == trimmed) {
            return Ok(suit);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "notrump" | "no_trump" | "none" => Ok(Self::NoTrump),
            "spades" => Ok(Self::Spades),
            "hearts" => Ok(Self::Hearts),
            "clubs" => Ok(Self::Clubs),
            "diamonds" => Ok(Self::Diamonds),
            _ => Err(AuctionError::IllegalValue {
                kind: "suit",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_order_cycles_through_all_seats() {
        let mut seat = Player::A;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(seat);
            seat = seat.next();
        }
        assert_eq!(
            seen,
            vec![Player::A, Player::B, Player::C, Player::D, Player::A]
        );
    }

    #[test]
    fn partners_share_a_team() {
        assert_eq!(Team::A.players(), vec![Player::A, Player::C]);
        assert_eq!(Team::B.players(), vec![Player::B, Player::D]);
        assert_ne!(Player::A.team(), Player::B.team());
    }

    #[test]
    fn player_parses_letter_and_display_form() {
        assert_eq!("c".parse::<Player>().unwrap(), Player::C);
        assert_eq!("Player D".parse::<Player>().unwrap(), Player::D);
        assert_eq!(Player::B.to_string(), "Player B");
    }

    #[test]
    fn unknown_player_is_illegal_value() {
        let err = "E".parse::<Player>().unwrap_err();
        assert!(matches!(
            err,
            AuctionError::IllegalValue { kind: "player", .. }
        ));
    }

    #[test]
    fn suit_parses_names_and_symbols() {
        assert_eq!("hearts".parse::<Suit>().unwrap(), Suit::Hearts);
        assert_eq!("♣".parse::<Suit>().unwrap(), Suit::Clubs);
        assert_eq!("A".parse::<Suit>().unwrap(), Suit::NoTrump);
        assert!(matches!(
            "stars".parse::<Suit>(),
            Err(AuctionError::IllegalValue { kind: "suit", .. })
        ));
    }
}
