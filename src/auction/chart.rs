//! The bazar bidding chart as a declarative transition table.

use crate::auction::actions::{
    advance_turn, increment_pass_count, mark_capo, mark_contra, mark_recontra, reset_pass_count,
    save_bet,
};
use crate::auction::guards::{
    is_bet_at_least, is_bet_increased, is_current_player, is_last_bet_from_other_team,
    is_last_bet_from_same_team, is_last_pass, is_not_last_pass,
};
use crate::auction::model::{AuctionEvent, AuctionState, EventData, Memory};
use crate::auction::rules::AuctionRules;
use crate::engine::Transition;

pub type AuctionTransition = Transition<AuctionState, AuctionEvent, Memory, EventData>;

/// Every transition of the protocol, in registration order.
///
/// Rows sharing a (state, event) key are mutually exclusive through their
/// guards, but the order still decides which fires if they ever overlap.
pub fn bidding_chart(rules: &AuctionRules) -> Vec<AuctionTransition> {
    use AuctionEvent as E;
    use AuctionState as S;

    let min_bet = rules.min_bet;
    let min_capo_bet = rules.min_capo_bet;

    let mut chart = vec![
        AuctionTransition::new(E::Bet, S::NoBet, S::Bet)
            .when(is_current_player)
            .when(move |_, _, _, data| is_bet_at_least(data, min_bet))
            .then(save_bet)
            .then(reset_pass_count)
            .then(advance_turn),
        AuctionTransition::new(E::Bet, S::Bet, S::Bet)
            .when(is_current_player)
            .when(is_bet_increased)
            .then(save_bet)
            .then(reset_pass_count)
            .then(advance_turn),
        AuctionTransition::new(E::CapoBet, S::NoBet, S::CapoBet)
            .when(is_current_player)
            .when(move |_, _, _, data| is_bet_at_least(data, min_capo_bet))
            .then(save_bet)
            .then(mark_capo)
            .then(reset_pass_count)
            .then(advance_turn),
        AuctionTransition::new(E::CapoBet, S::Bet, S::CapoBet)
            .when(is_current_player)
            .when(move |_, _, _, data| is_bet_at_least(data, min_capo_bet))
            .when(is_bet_increased)
            .then(save_bet)
            .then(mark_capo)
            .then(reset_pass_count)
            .then(advance_turn),
        AuctionTransition::new(E::CapoBet, S::CapoBet, S::CapoBet)
            .when(is_current_player)
            .when(is_bet_increased)
            .then(save_bet)
            .then(reset_pass_count)
            .then(advance_turn),
    ];

    for bidding in [S::NoBet, S::Bet, S::CapoBet] {
        chart.push(
            AuctionTransition::new(E::Pass, bidding, bidding)
                .when(is_current_player)
                .when(is_not_last_pass)
                .then(increment_pass_count)
                .then(advance_turn),
        );
    }

    for (bidding, closed) in [
        (S::NoBet, S::Redial),
        (S::Bet, S::Play),
        (S::CapoBet, S::Play),
    ] {
        chart.push(
            AuctionTransition::new(E::Pass, bidding, closed)
                .when(is_current_player)
                .when(is_last_pass)
                .then(increment_pass_count),
        );
    }

    for doubled in [S::Bet, S::CapoBet] {
        chart.push(
            AuctionTransition::new(E::Contra, doubled, S::Contra)
                .when(is_last_bet_from_other_team)
                .then(mark_contra),
        );
    }

    chart.push(
        AuctionTransition::new(E::Recontra, S::Contra, S::Play)
            .when(is_last_bet_from_same_team)
            .then(mark_recontra),
    );
    chart.push(AuctionTransition::new(E::Timeout, S::Contra, S::Play));

    chart
}
