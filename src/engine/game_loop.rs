use log::{debug, info, warn};

use crate::domain::{Card, CardIndex, Hand, Outcome, RoundState, Seat};
use crate::engine::display::{Banner, StatusText, TableDisplay};
use crate::engine::draw::{draw_unique, DrawScope};
use crate::engine::errors::EngineError;
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::RandomSource;
use crate::eval::{dealer_decision, hand_total, is_bust, resolve, DealerDecision};
use crate::time_ctrl::{DealerTimer, StepState, TimingRules};

/// Что произошло за один тик.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    /// Дилер не ходит - делать нечего.
    Idle,
    /// Дилер ходит, но интервал ещё не прошёл.
    Waiting { remaining_ms: u32 },
    /// Дилер взял карту.
    DealerDrew(CardIndex),
    /// Ход дилера закончен, раунд закрыт.
    RoundOver(Outcome),
}

/// Настройки движка.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub dealer_step_ms: u32,
    pub draw_scope: DrawScope,
}

impl EngineConfig {
    pub fn new(timing: &TimingRules, draw_scope: DrawScope) -> Self {
        Self {
            dealer_step_ms: timing.dealer_step_ms,
            draw_scope,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(&TimingRules::standard(), DrawScope::default())
    }
}

/// Игровой движок: две руки, фаза раунда, таймер дилера.
///
/// Один экземпляр на всё время работы консоли. Все изменения - только через
/// `hit` / `stand` / `reset` / `tick`, которые вызывает главный цикл.
pub struct GameEngine<R: RandomSource> {
    rng: R,
    config: EngineConfig,
    player: Hand,
    dealer: Hand,
    state: RoundState,
    outcome: Option<Outcome>,
    /// Есть только пока `state == DealerActing`.
    dealer_timer: Option<DealerTimer>,
    history: RoundHistory,
    rounds_completed: u32,
}

impl<R: RandomSource> GameEngine<R> {
    pub fn new(rng: R, config: EngineConfig) -> Self {
        Self {
            rng,
            config,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::AwaitingPlayerAction,
            outcome: None,
            dealer_timer: None,
            history: RoundHistory::new(),
            rounds_completed: 0,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Исход последнего раунда (только в `RoundOver`).
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn dealer_timer(&self) -> Option<&DealerTimer> {
        self.dealer_timer.as_ref()
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Текущие очки (игрок, дилер). Всегда пересчитываются из карт.
    pub fn totals(&self) -> (u32, u32) {
        (hand_total(&self.player), hand_total(&self.dealer))
    }

    /// Игрок берёт карту.
    ///
    /// Первая карта игрока раздаёт и первую карту дилеру. Перебор только
    /// показывается: раунд закроется на следующем `stand`.
    pub fn hit<D: TableDisplay>(
        &mut self,
        now_ms: u32,
        display: &mut D,
    ) -> Result<CardIndex, EngineError> {
        self.ensure_awaiting_player()?;
        if self.player.is_full() {
            return Err(EngineError::HandFull(Seat::Player));
        }

        let card = self.draw_into(Seat::Player, now_ms)?;
        if self.player.len() == 1 && self.dealer.is_empty() {
            self.draw_into(Seat::Dealer, now_ms)?;
        }

        let (player_total, dealer_total) = self.totals();
        display.clear();
        display.show_score(player_total, dealer_total);
        display.show_hand(Seat::Player, &cards_of(&self.player));

        if is_bust(player_total) {
            info!("У игрока перебор: {player_total}");
            self.history.push(RoundEventKind::PlayerBusted {
                total: player_total,
            });
            display.show_banner(Banner::Bust);
        }

        info!("Hit: карта {card}, у игрока {player_total}, у дилера {dealer_total}");
        Ok(card)
    }

    /// Игрок останавливается: запускаем анимацию дилера.
    ///
    /// Карту дилеру здесь не тянем - первое решение будет на тике после
    /// интервала.
    pub fn stand<D: TableDisplay>(&mut self, now_ms: u32, display: &mut D) -> Result<(), EngineError> {
        self.ensure_awaiting_player()?;

        let (player_total, _) = self.totals();
        self.state = RoundState::DealerActing;
        self.dealer_timer = Some(DealerTimer::start(now_ms, self.config.dealer_step_ms));
        self.history.push(RoundEventKind::PlayerStood {
            total: player_total,
            at_ms: now_ms,
        });

        info!("Stand: у игрока {player_total}, дилер начинает добор");
        display.show_status(StatusText::Stand);
        display.show_hand(Seat::Dealer, &cards_of(&self.dealer));
        Ok(())
    }

    /// Сброс в начальное состояние. Допустим в любой фазе и прерывает ход дилера.
    pub fn reset<D: TableDisplay>(&mut self, display: &mut D) {
        self.player.clear();
        self.dealer.clear();
        self.state = RoundState::AwaitingPlayerAction;
        self.outcome = None;
        self.dealer_timer = None;
        self.history.clear();

        info!("Reset: новая раздача");
        display.clear();
    }

    /// Один тик главного цикла. Делает не больше одного шага дилера.
    pub fn tick<D: TableDisplay>(&mut self, now_ms: u32, display: &mut D) -> TickResult {
        if self.state != RoundState::DealerActing {
            return TickResult::Idle;
        }
        let timer = match self.dealer_timer.as_ref() {
            Some(t) => t,
            None => {
                warn!("Дилер ходит без таймера, запускаем таймер заново");
                self.dealer_timer = Some(DealerTimer::start(now_ms, self.config.dealer_step_ms));
                return TickResult::Waiting {
                    remaining_ms: self.config.dealer_step_ms,
                };
            }
        };
        if let StepState::Waiting { remaining_ms } = timer.poll(now_ms) {
            return TickResult::Waiting { remaining_ms };
        }

        let dealer_total = hand_total(&self.dealer);
        match dealer_decision(dealer_total) {
            DealerDecision::Stand => self.finish_dealer_turn(StatusText::DealerStands, now_ms, display),
            DealerDecision::Bust => self.finish_dealer_turn(StatusText::DealerBust, now_ms, display),
            DealerDecision::Draw => self.dealer_step(now_ms, display),
        }
    }

    fn dealer_step<D: TableDisplay>(&mut self, now_ms: u32, display: &mut D) -> TickResult {
        if self.dealer.is_full() {
            warn!("Рука дилера заполнена на {}, дилер стоит", hand_total(&self.dealer));
            return self.finish_dealer_turn(StatusText::DealerStands, now_ms, display);
        }

        let card = match self.draw_into(Seat::Dealer, now_ms) {
            Ok(card) => card,
            Err(err) => {
                warn!("Дилер не смог взять карту: {err}");
                return self.finish_dealer_turn(StatusText::DealerStands, now_ms, display);
            }
        };
        if let Some(timer) = self.dealer_timer.as_mut() {
            timer.mark_step(now_ms);
        }

        let (player_total, dealer_total) = self.totals();
        display.show_score(player_total, dealer_total);
        display.show_hand(Seat::Dealer, &cards_of(&self.dealer));

        debug!("Дилер взял карту {card}, у дилера {dealer_total}");
        TickResult::DealerDrew(card)
    }

    fn finish_dealer_turn<D: TableDisplay>(
        &mut self,
        status: StatusText,
        now_ms: u32,
        display: &mut D,
    ) -> TickResult {
        let (player_total, dealer_total) = self.totals();
        self.dealer_timer = None;
        self.state = RoundState::RoundOver;

        self.history.push(if status == StatusText::DealerBust {
            RoundEventKind::DealerBusted {
                total: dealer_total,
                at_ms: now_ms,
            }
        } else {
            RoundEventKind::DealerStood {
                total: dealer_total,
                at_ms: now_ms,
            }
        });
        display.show_status(status);

        let outcome = resolve(player_total, dealer_total);
        self.outcome = Some(outcome);
        self.rounds_completed = self.rounds_completed.wrapping_add(1);
        self.history.push(RoundEventKind::RoundResolved {
            player_total,
            dealer_total,
            outcome,
        });

        info!("Игрок: {player_total} | Дилер: {dealer_total} => {outcome}");
        display.show_outcome(outcome);
        TickResult::RoundOver(outcome)
    }

    fn ensure_awaiting_player(&self) -> Result<(), EngineError> {
        if self.state == RoundState::AwaitingPlayerAction {
            Ok(())
        } else {
            Err(EngineError::NotAwaitingPlayer(self.state))
        }
    }

    /// Вытянуть карту в руку `seat` с учётом `DrawScope`.
    fn draw_into(&mut self, seat: Seat, now_ms: u32) -> Result<CardIndex, EngineError> {
        let (own, other) = match seat {
            Seat::Player => (&self.player, &self.dealer),
            Seat::Dealer => (&self.dealer, &self.player),
        };
        if own.is_full() {
            return Err(EngineError::HandFull(seat));
        }

        let card = draw_unique(&mut self.rng, seat, own, other, self.config.draw_scope)?;
        match seat {
            Seat::Player => self.player.push(card)?,
            Seat::Dealer => self.dealer.push(card)?,
        }

        self.history.push(RoundEventKind::CardDrawn {
            seat,
            card,
            at_ms: now_ms,
        });
        debug!("{seat:?} получил карту {card}");
        Ok(card)
    }
}

fn cards_of(hand: &Hand) -> Vec<Card> {
    hand.cards().collect()
}
