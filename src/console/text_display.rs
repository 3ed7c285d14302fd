//! Текстовый рендерер основного экрана (симулятор, тесты).

use serde::{Deserialize, Serialize};

use crate::console::layout::{self, Point};
use crate::domain::{Card, Seat};
use crate::engine::{format_score, Banner, StatusText, TableDisplay};

/// Команда, которую движок отправил на дисплей.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisplayCommand {
    Clear,
    Score { player: u32, dealer: u32 },
    Hand { seat: Seat, cards: Vec<Card> },
    Status(StatusText),
    Banner(Banner),
}

/// Карта, нарисованная в конкретной позиции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedCard {
    pub at: Point,
    pub card: Card,
}

/// Текущее содержимое экрана + журнал всех команд.
#[derive(Clone, Debug, Default)]
pub struct TextTableDisplay {
    score: Option<String>,
    player_cards: Vec<PlacedCard>,
    dealer_cards: Vec<PlacedCard>,
    status: Option<(Point, StatusText)>,
    banner: Option<Banner>,
    commands: Vec<DisplayCommand>,
}

impl TextTableDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    pub fn status(&self) -> Option<StatusText> {
        self.status.map(|(_, s)| s)
    }

    pub fn score_line(&self) -> Option<&str> {
        self.score.as_deref()
    }

    pub fn placed_cards(&self, seat: Seat) -> &[PlacedCard] {
        match seat {
            Seat::Player => &self.player_cards,
            Seat::Dealer => &self.dealer_cards,
        }
    }

    /// Кадр в виде строк.
    pub fn render(&self) -> Vec<String> {
        if let Some(banner) = self.banner {
            let text = match banner {
                Banner::Win => "*** YOU WIN ***",
                Banner::Lose => "*** YOU LOST ***",
                Banner::Bust => "*** BUST ***",
            };
            return vec![text.to_string()];
        }

        let mut lines = Vec::new();
        if let Some(score) = &self.score {
            lines.push(score.clone());
        }
        for (label, cards) in [("P", &self.player_cards), ("D", &self.dealer_cards)] {
            if cards.is_empty() {
                continue;
            }
            let glyphs: Vec<String> = cards.iter().map(|c| c.card.to_string()).collect();
            lines.push(format!("{label}: {}", glyphs.join(" ")));
        }
        if let Some((_, status)) = self.status {
            lines.push(status.text().to_string());
        }
        lines
    }
}

impl TableDisplay for TextTableDisplay {
    fn clear(&mut self) {
        self.commands.push(DisplayCommand::Clear);
        self.score = None;
        self.player_cards.clear();
        self.dealer_cards.clear();
        self.status = None;
        self.banner = None;
    }

    fn show_score(&mut self, player_total: u32, dealer_total: u32) {
        self.commands.push(DisplayCommand::Score {
            player: player_total,
            dealer: dealer_total,
        });
        self.banner = None;
        self.score = Some(format_score(player_total, dealer_total));
    }

    fn show_hand(&mut self, seat: Seat, cards: &[Card]) {
        self.commands.push(DisplayCommand::Hand {
            seat,
            cards: cards.to_vec(),
        });
        self.banner = None;
        let placed = layout::card_slots(cards.len(), layout::HAND_START_Y)
            .into_iter()
            .zip(cards.iter().copied())
            .map(|(at, card)| PlacedCard { at, card })
            .collect();
        match seat {
            Seat::Player => self.player_cards = placed,
            Seat::Dealer => self.dealer_cards = placed,
        }
    }

    fn show_status(&mut self, status: StatusText) {
        self.commands.push(DisplayCommand::Status(status));
        self.banner = None;
        let at = match status {
            StatusText::Stand => layout::STAND_POS,
            _ => layout::DEALER_STATUS_POS,
        };
        self.status = Some((at, status));
    }

    fn show_banner(&mut self, banner: Banner) {
        self.commands.push(DisplayCommand::Banner(banner));
        // Картинка рисуется на весь экран поверх всего остального.
        self.score = None;
        self.player_cards.clear();
        self.dealer_cards.clear();
        self.status = None;
        self.banner = Some(banner);
    }
}
