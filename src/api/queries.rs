use crate::domain::{Deck, Hand};
use crate::engine::{format_score, GameEngine, RandomSource};
use crate::eval::{hand_total, is_bust, is_soft};
use crate::time_ctrl::StepState;

use super::dto::{CardDto, GameViewDto, HandViewDto};

/// Сформировать DTO руки.
pub fn build_hand_view(hand: &Hand) -> HandViewDto {
    let cards = hand
        .indices()
        .iter()
        .filter_map(|&index| {
            Deck::value_of(index).ok().map(|card| CardDto {
                index,
                label: card.to_string(),
            })
        })
        .collect();
    let total = hand_total(hand);

    HandViewDto {
        cards,
        total,
        soft: is_soft(hand.cards()),
        bust: is_bust(total),
    }
}

/// Сформировать DTO всей игры. `now_ms` нужен только для таймера дилера.
pub fn build_game_view<R: RandomSource>(engine: &GameEngine<R>, now_ms: u32) -> GameViewDto {
    let player = build_hand_view(engine.player_hand());
    let dealer = build_hand_view(engine.dealer_hand());

    let dealer_next_step_in_ms = engine.dealer_timer().map(|t| match t.poll(now_ms) {
        StepState::Waiting { remaining_ms } => remaining_ms,
        StepState::Due => 0,
    });

    GameViewDto {
        state: engine.state(),
        score_line: format_score(player.total, dealer.total),
        player,
        dealer,
        outcome: engine.outcome(),
        dealer_next_step_in_ms,
        rounds_completed: engine.rounds_completed(),
    }
}
