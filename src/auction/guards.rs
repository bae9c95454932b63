//! Guard predicates of the bidding chart.
//!
//! All guards take the memory by shared reference; none can change it.
//! Guards whose data field is missing reject the event.

use crate::auction::model::{AuctionEvent, AuctionState, EventData, Memory};
use crate::auction::player::PLAYER_COUNT;

pub fn is_current_player(
    _: &AuctionState,
    memory: &Memory,
    _: &AuctionEvent,
    data: &EventData,
) -> bool {
    data.player == Some(memory.current_player)
}

/// Bid amount reaches `minimum`.
pub fn is_bet_at_least(data: &EventData, minimum: u32) -> bool {
    data.amount.is_some_and(|amount| amount >= minimum)
}

/// Bid amount strictly exceeds the standing bid.
pub fn is_bet_increased(
    _: &AuctionState,
    memory: &Memory,
    _: &AuctionEvent,
    data: &EventData,
) -> bool {
    match (data.amount, memory.last_bet_amount) {
        (Some(amount), Some(last)) => amount > last,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// The incoming pass keeps the round open.
pub fn is_not_last_pass(
    _: &AuctionState,
    memory: &Memory,
    _: &AuctionEvent,
    _: &EventData,
) -> bool {
    memory.pass_count + 1 < PLAYER_COUNT
}

/// The incoming pass is the one that closes the round.
pub fn is_last_pass(_: &AuctionState, memory: &Memory, _: &AuctionEvent, _: &EventData) -> bool {
    memory.pass_count + 1 == PLAYER_COUNT
}

pub fn is_last_bet_from_other_team(
    _: &AuctionState,
    memory: &Memory,
    _: &AuctionEvent,
    data: &EventData,
) -> bool {
    match (memory.last_bet_player, data.player) {
        (Some(bidder), Some(player)) => bidder.team() != player.team(),
        _ => false,
    }
}

pub fn is_last_bet_from_same_team(
    _: &AuctionState,
    memory: &Memory,
    _: &AuctionEvent,
    data: &EventData,
) -> bool {
    match (memory.last_bet_player, data.player) {
        (Some(bidder), Some(player)) => bidder.team() == player.team(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::player::{Player, Suit};

    fn memory_with_bid(bidder: Player, amount: u32) -> Memory {
        let mut memory = Memory::new(bidder.next());
        memory.last_bet_player = Some(bidder);
        memory.last_bet_suit = Some(Suit::Spades);
        memory.last_bet_amount = Some(amount);
        memory
    }

    #[test]
    fn current_player_must_match_acting_player() {
        let memory = Memory::new(Player::A);
        let state = AuctionState::NoBet;
        let event = AuctionEvent::Pass;

        assert!(is_current_player(&state, &memory, &event, &EventData::by(Player::A)));
        assert!(!is_current_player(&state, &memory, &event, &EventData::by(Player::B)));
        assert!(!is_current_player(&state, &memory, &event, &EventData::empty()));
    }

    #[test]
    fn minimum_is_inclusive() {
        assert!(is_bet_at_least(&EventData::bid(Player::A, Suit::Hearts, 8), 8));
        assert!(!is_bet_at_least(&EventData::bid(Player::A, Suit::Hearts, 7), 8));
        assert!(!is_bet_at_least(&EventData::by(Player::A), 8));
    }

    #[test]
    fn increase_must_be_strict() {
        let memory = memory_with_bid(Player::A, 10);
        let state = AuctionState::Bet;
        let event = AuctionEvent::Bet;

        assert!(is_bet_increased(&state, &memory, &event, &EventData::bid(Player::B, Suit::Clubs, 11)));
        assert!(!is_bet_increased(&state, &memory, &event, &EventData::bid(Player::B, Suit::Clubs, 10)));
        assert!(!is_bet_increased(&state, &memory, &event, &EventData::bid(Player::B, Suit::Clubs, 9)));
    }

    #[test]
    fn fourth_pass_is_the_last() {
        let mut memory = Memory::new(Player::A);
        let state = AuctionState::Bet;
        let event = AuctionEvent::Pass;
        let data = EventData::by(Player::A);

        memory.pass_count = 2;
        assert!(is_not_last_pass(&state, &memory, &event, &data));
        assert!(!is_last_pass(&state, &memory, &event, &data));

        memory.pass_count = 3;
        assert!(!is_not_last_pass(&state, &memory, &event, &data));
        assert!(is_last_pass(&state, &memory, &event, &data));
    }

    #[test]
    fn team_checks_compare_against_last_bidder() {
        let memory = memory_with_bid(Player::A, 10);
        let state = AuctionState::Bet;
        let event = AuctionEvent::Contra;

        assert!(is_last_bet_from_other_team(&state, &memory, &event, &EventData::by(Player::B)));
        assert!(is_last_bet_from_other_team(&state, &memory, &event, &EventData::by(Player::D)));
        assert!(!is_last_bet_from_other_team(&state, &memory, &event, &EventData::by(Player::C)));

        assert!(is_last_bet_from_same_team(&state, &memory, &event, &EventData::by(Player::C)));
        assert!(is_last_bet_from_same_team(&state, &memory, &event, &EventData::by(Player::A)));
        assert!(!is_last_bet_from_same_team(&state, &memory, &event, &EventData::by(Player::B)));
    }

    #[test]
    fn team_checks_need_a_standing_bid() {
        let memory = Memory::new(Player::A);
        let state = AuctionState::NoBet;
        let event = AuctionEvent::Contra;

        assert!(!is_last_bet_from_other_team(&state, &memory, &event, &EventData::by(Player::B)));
        assert!(!is_last_bet_from_same_team(&state, &memory, &event, &EventData::by(Player::A)));
    }
}
