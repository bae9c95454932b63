//! States, events and memory of the bidding protocol.

use crate::auction::player::{Player, Suit};
use serde::{Deserialize, Serialize};

crate::state_enum! {
    /// Phase of the current bidding round.
    pub enum AuctionState {
        /// Nobody has bid yet.
        NoBet,
        /// At least one ordinary bid stands.
        Bet,
        /// A capo bid stands.
        CapoBet,
        /// The highest bid was doubled; the bidding team may redouble.
        Contra,
        /// Everyone passed without bidding; the hand is redealt.
        Redial,
        /// Bidding is over and card play begins.
        Play,
    }
    final: [Redial, Play]
}

crate::event_enum! {
    /// Intent submitted by a player, or the expiry of the contra window.
    pub enum AuctionEvent {
        Pass,
        Bet,
        CapoBet,
        Contra,
        Recontra,
        Timeout,
    }
}

/// Payload accompanying an event. Each event reads only the fields it needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    pub player: Option<Player>,
    pub suit: Option<Suit>,
    pub amount: Option<u32>,
}

impl EventData {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn by(player: Player) -> Self {
        Self {
            player: Some(player),
            ..Self::default()
        }
    }

    pub fn bid(player: Player, suit: Suit, amount: u32) -> Self {
        Self {
            player: Some(player),
            suit: Some(suit),
            amount: Some(amount),
        }
    }
}

/// The record every transition of one auction reads and writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    /// Seat whose turn it is to bid or pass
    pub current_player: Player,
    /// Consecutive passes since the last accepted bid
    pub pass_count: u8,
    pub last_bet_player: Option<Player>,
    pub last_bet_suit: Option<Suit>,
    pub last_bet_amount: Option<u32>,
    /// Set once any player declares capo; never cleared within an auction
    pub capo: bool,
    pub contra: bool,
    pub recontra: bool,
}

impl Memory {
    /// Fresh memory for a round opened by `first`.
    pub fn new(first: Player) -> Self {
        Self {
            current_player: first,
            pass_count: 0,
            last_bet_player: None,
            last_bet_suit: None,
            last_bet_amount: None,
            capo: false,
            contra: false,
            recontra: false,
        }
    }

    /// The standing highest bid, if any.
    pub fn last_bet(&self) -> Option<LastBet> {
        Some(LastBet {
            player: self.last_bet_player?,
            suit: self.last_bet_suit?,
            amount: self.last_bet_amount?,
        })
    }
}

/// Snapshot of the standing highest bid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastBet {
    pub player: Player,
    pub suit: Suit,
    pub amount: u32,
}
