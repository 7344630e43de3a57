/// Screen regions shared by the renderer and the pointer hit-tests, so what is
/// drawn is exactly what can be tapped.

use crate::config::{GameConfig, OFFER_SIZE};
use crate::entities::Rect;

const CHOICE_HEIGHT: f32 = 80.0;
const CHOICE_GAP: f32 = 20.0;
const RESTART_WIDTH: f32 = 160.0;
const RESTART_HEIGHT: f32 = 50.0;

/// One panel per offered equipment, stacked around the vertical centre.
pub fn choice_rects(config: &GameConfig) -> [Rect; OFFER_SIZE] {
    let w = config.width * 0.7;
    let x = (config.width - w) / 2.0;
    let total = OFFER_SIZE as f32 * CHOICE_HEIGHT + (OFFER_SIZE as f32 - 1.0) * CHOICE_GAP;
    let top = (config.height - total) / 2.0;
    std::array::from_fn(|i| Rect::new(x, top + i as f32 * (CHOICE_HEIGHT + CHOICE_GAP), w, CHOICE_HEIGHT))
}

/// Index of the choice panel under `(x, y)`, if any.
pub fn choice_at(config: &GameConfig, x: f32, y: f32) -> Option<usize> {
    choice_rects(config).iter().position(|r| r.contains(x, y))
}

/// The restart button on the game-over panel.
pub fn restart_rect(config: &GameConfig) -> Rect {
    Rect::new(
        (config.width - RESTART_WIDTH) / 2.0,
        config.height / 2.0 + 60.0,
        RESTART_WIDTH,
        RESTART_HEIGHT,
    )
}
