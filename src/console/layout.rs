//! Разметка основного экрана 128×64.

use serde::{Deserialize, Serialize};

pub const SCREEN_WIDTH: i32 = 128;

/// Верх блока карт.
pub const HAND_START_Y: i32 = 20;

pub const CARD_START_X: i32 = 5;
pub const CARD_SPACING: i32 = 35;
/// 16 px глиф масти + ~18 px под подпись ранга.
pub const CARD_WIDTH: i32 = SUIT_GLYPH_SIZE + LABEL_OFFSET_X;
pub const CARD_ROW_HEIGHT: i32 = 16;
pub const SUIT_GLYPH_SIZE: i32 = 16;
pub const LABEL_OFFSET_X: i32 = 18;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

pub const SCORE_POS: Point = Point::new(5, 5);
pub const STAND_POS: Point = Point::new(0, 0);
pub const DEALER_STATUS_POS: Point = Point::new(5, 55);

/// Позиции карт руки: слева направо, перенос на новую строку, если
/// карта не влезает по ширине экрана.
pub fn card_slots(count: usize, start_y: i32) -> Vec<Point> {
    let mut slots = Vec::with_capacity(count);
    let mut x = CARD_START_X;
    let mut y = start_y;

    for _ in 0..count {
        if x + CARD_WIDTH > SCREEN_WIDTH {
            x = CARD_START_X;
            y += CARD_ROW_HEIGHT;
        }
        slots.push(Point::new(x, y));
        x += CARD_SPACING;
    }
    slots
}

/// Где рисуется подпись ранга относительно угла карты.
pub fn label_position(slot: Point) -> Point {
    Point::new(slot.x + LABEL_OFFSET_X, slot.y)
}
