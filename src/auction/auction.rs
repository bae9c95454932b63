//! Player-facing bidding API.

use crate::auction::chart::bidding_chart;
use crate::auction::error::AuctionError;
use crate::auction::model::{AuctionEvent, AuctionState, EventData, Memory};
use crate::auction::player::{Player, Suit};
use crate::auction::rules::AuctionRules;
use crate::builder::FsmBuilder;
use crate::core::{State, StateHistory};
use crate::engine::Fsm;
use std::time::Duration;
use tracing::info;

/// One bidding round at one table.
///
/// Every intent comes as a `can_*` / `do_*` pair. `can_*` never changes
/// anything and may be called freely to decide what a player is offered;
/// `do_*` applies the intent and returns whether the round continues.
/// A `do_*` whose `can_*` would have returned `false` fails with
/// [`AuctionError::Transition`] and leaves the auction untouched.
///
/// The auction is not synchronized. When several sessions share one
/// instance, each `can_*`/`do_*` pair must run under a single lock; see
/// [`crate::tables::AuctionTables::with_auction`].
pub struct Auction {
    fsm: Fsm<AuctionState, AuctionEvent, Memory, EventData>,
    rules: AuctionRules,
}

impl Auction {
    /// Open a round where player A acts first.
    pub fn new(rules: AuctionRules) -> Result<Self, AuctionError> {
        Self::starting_with(rules, Player::A)
    }

    /// Open a round where `first` acts first.
    pub fn starting_with(rules: AuctionRules, first: Player) -> Result<Self, AuctionError> {
        rules.validate()?;

        let fsm = FsmBuilder::new()
            .initial(AuctionState::NoBet)
            .memory(Memory::new(first))
            .transitions(bidding_chart(&rules))
            .build()?;

        Ok(Self { fsm, rules })
    }

    pub fn can_pass(&self, player: Player) -> bool {
        self.fsm.can_fire(&AuctionEvent::Pass, &EventData::by(player))
    }

    pub fn do_pass(&mut self, player: Player) -> Result<bool, AuctionError> {
        self.fire(AuctionEvent::Pass, EventData::by(player))
    }

    /// Whether `player` may bid `amount` in `suit`.
    ///
    /// Once capo has been declared every later bid is a capo bid, whatever
    /// `capo` says.
    pub fn can_bet(&self, player: Player, suit: Suit, amount: u32, capo: bool) -> bool {
        self.fsm
            .can_fire(&self.bet_event(capo), &EventData::bid(player, suit, amount))
    }

    pub fn do_bet(
        &mut self,
        player: Player,
        suit: Suit,
        amount: u32,
        capo: bool,
    ) -> Result<bool, AuctionError> {
        let event = self.bet_event(capo);
        self.fire(event, EventData::bid(player, suit, amount))
    }

    pub fn can_contra(&self, player: Player) -> bool {
        self.fsm.can_fire(&AuctionEvent::Contra, &EventData::by(player))
    }

    /// Double the standing bid. The turn does not advance; the host should
    /// arm a timer for [`Auction::contra_window`] and deliver
    /// [`Auction::do_timeout`] when it expires.
    pub fn do_contra(&mut self, player: Player) -> Result<bool, AuctionError> {
        self.fire(AuctionEvent::Contra, EventData::by(player))
    }

    pub fn can_recontra(&self, player: Player) -> bool {
        self.fsm.can_fire(&AuctionEvent::Recontra, &EventData::by(player))
    }

    pub fn do_recontra(&mut self, player: Player) -> Result<bool, AuctionError> {
        self.fire(AuctionEvent::Recontra, EventData::by(player))
    }

    pub fn can_timeout(&self) -> bool {
        self.fsm.can_fire(&AuctionEvent::Timeout, &EventData::empty())
    }

    pub fn do_timeout(&mut self) -> Result<bool, AuctionError> {
        self.fire(AuctionEvent::Timeout, EventData::empty())
    }

    pub fn state(&self) -> AuctionState {
        *self.fsm.current_state()
    }

    pub fn memory(&self) -> &Memory {
        self.fsm.memory()
    }

    pub fn current_player(&self) -> Player {
        self.memory().current_player
    }

    pub fn pass_count(&self) -> u8 {
        self.memory().pass_count
    }

    /// Smallest amount the next bid may name.
    ///
    /// Saturates at `u32::MAX`; after a bid of `u32::MAX` no bid can raise it.
    pub fn min_next_bet(&self) -> u32 {
        match self.memory().last_bet_amount {
            Some(last) => last.saturating_add(1),
            None => self.rules.min_bet,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.fsm.is_terminal()
    }

    /// `Redial` or `Play` once the round is over.
    pub fn outcome(&self) -> Option<AuctionState> {
        self.is_finished().then(|| self.state())
    }

    /// Accepted intents in order, each with the player, suit and amount it carried.
    pub fn history(&self) -> &StateHistory<AuctionState, EventData> {
        self.fsm.history()
    }

    pub fn rules(&self) -> &AuctionRules {
        &self.rules
    }

    pub fn contra_window(&self) -> Duration {
        self.rules.contra_window()
    }

    fn bet_event(&self, capo: bool) -> AuctionEvent {
        if capo || self.memory().capo {
            AuctionEvent::CapoBet
        } else {
            AuctionEvent::Bet
        }
    }

    fn fire(&mut self, event: AuctionEvent, data: EventData) -> Result<bool, AuctionError> {
        let continues = self.fsm.fire(&event, &data)?;
        if !continues {
            let memory = self.fsm.memory();
            info!(
                outcome = self.fsm.current_state().name(),
                last_bet = ?memory.last_bet(),
                capo = memory.capo,
                contra = memory.contra,
                recontra = memory.recontra,
                "bidding round finished"
            );
        }
        Ok(continues)
    }
}

impl std::fmt::Debug for Auction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auction")
            .field("state", self.fsm.current_state())
            .field("memory", self.fsm.memory())
            .field("rules", &self.rules)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FsmError;

    fn auction() -> Auction {
        Auction::new(AuctionRules::default()).unwrap()
    }

    #[test]
    fn fresh_auction_waits_for_player_a() {
        let auction = auction();
        assert_eq!(auction.state(), AuctionState::NoBet);
        assert_eq!(auction.current_player(), Player::A);
        assert_eq!(auction.min_next_bet(), 8);
        assert!(auction.outcome().is_none());
    }

    #[test]
    fn only_the_current_player_may_act() {
        let auction = auction();
        assert!(auction.can_pass(Player::A));
        assert!(!auction.can_pass(Player::B));
        assert!(auction.can_bet(Player::A, Suit::Hearts, 8, false));
        assert!(!auction.can_bet(Player::C, Suit::Hearts, 8, false));
    }

    #[test]
    fn opening_bid_must_reach_minimum() {
        let mut auction = auction();
        assert!(!auction.can_bet(Player::A, Suit::Hearts, 7, false));
        assert!(matches!(
            auction.do_bet(Player::A, Suit::Hearts, 7, false),
            Err(AuctionError::Transition(FsmError::NoApplicableTransition { .. }))
        ));
        assert_eq!(auction.state(), AuctionState::NoBet);
    }

    #[test]
    fn min_next_bet_follows_last_bid() {
        let mut auction = auction();
        auction.do_bet(Player::A, Suit::Spades, 11, false).unwrap();
        assert_eq!(auction.min_next_bet(), 12);
    }

    #[test]
    fn min_next_bet_saturates_at_the_largest_bid() {
        let mut auction = auction();
        auction.do_bet(Player::A, Suit::Hearts, u32::MAX, false).unwrap();

        assert_eq!(auction.min_next_bet(), u32::MAX);
        assert!(!auction.can_bet(Player::B, Suit::Hearts, u32::MAX, false));
        assert!(auction.can_pass(Player::B));
    }

    #[test]
    fn capo_makes_later_bids_capo() {
        let mut auction = auction();
        auction.do_bet(Player::A, Suit::Clubs, 25, true).unwrap();
        assert_eq!(auction.state(), AuctionState::CapoBet);

        assert!(auction.can_bet(Player::B, Suit::Hearts, 26, false));
        auction.do_bet(Player::B, Suit::Hearts, 26, false).unwrap();
        assert_eq!(auction.state(), AuctionState::CapoBet);
        assert!(auction.memory().capo);
        assert_eq!(auction.memory().last_bet_amount, Some(26));
    }

    #[test]
    fn custom_rules_shift_the_minimums() {
        let rules = AuctionRules {
            min_bet: 10,
            min_capo_bet: 30,
            ..AuctionRules::default()
        };
        let auction = Auction::new(rules).unwrap();

        assert!(!auction.can_bet(Player::A, Suit::Hearts, 9, false));
        assert!(auction.can_bet(Player::A, Suit::Hearts, 10, false));
        assert!(!auction.can_bet(Player::A, Suit::Hearts, 29, true));
        assert!(auction.can_bet(Player::A, Suit::Hearts, 30, true));
    }

    #[test]
    fn invalid_rules_are_rejected() {
        let rules = AuctionRules {
            min_bet: 0,
            ..AuctionRules::default()
        };
        assert!(matches!(
            Auction::new(rules),
            Err(AuctionError::InvalidRules(_))
        ));
    }

    #[test]
    fn starting_seat_is_configurable() {
        let auction = Auction::starting_with(AuctionRules::default(), Player::C).unwrap();
        assert_eq!(auction.current_player(), Player::C);
        assert!(auction.can_pass(Player::C));
        assert!(!auction.can_pass(Player::A));
    }
}
