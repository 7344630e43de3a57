/// Scene drawing.  The session is translated into a handful of world-space
/// primitives on a `RenderSurface`; how those reach the screen is up to the
/// surface implementation.

use crossterm::style::Color;

use crate::entities::{Effects, GameStatus, Hostile, Outcome, Projectile, Rect, Shape, Side, Wingman};
use crate::layout;
use crate::session::GameSession;

/// Draw target in world coordinates (`config.width` × `config.height`).
pub trait RenderSurface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color);
    /// Text anchored at its top-left corner.
    fn text(&mut self, x: f32, y: f32, text: &str, color: Color);
    /// Flush the finished frame.
    fn present(&mut self) -> std::io::Result<()>;
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_HOSTILE_NORMAL: Color = Color::Red;
const C_HOSTILE_FAST: Color = Color::Green;
const C_HOSTILE_STRONG: Color = Color::Magenta;
const C_WINGMAN_LEFT: Color = Color::Green;
const C_WINGMAN_RIGHT: Color = Color::DarkYellow;
const C_SHOT: Color = Color::Yellow;
const C_SHOT_ELECTRIC: Color = Color::Cyan;
const C_SHOT_AOE: Color = Color::DarkGreen;
const C_SHOT_HOMING: Color = Color::DarkYellow;
const C_SHOT_PIERCING: Color = Color::Blue;
const C_HUD: Color = Color::Yellow;
const C_HUD_EQUIPMENT: Color = Color::DarkGrey;
const C_PANEL: Color = Color::DarkBlue;
const C_PANEL_TEXT: Color = Color::White;

const LINE_HEIGHT: f32 = 20.0;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<S: RenderSurface>(surface: &mut S, session: &GameSession) -> std::io::Result<()> {
    surface.clear();

    for hostile in &session.spawner.hostiles {
        draw_hostile(surface, hostile);
    }
    for projectile in &session.projectiles {
        draw_projectile(surface, projectile);
    }
    for wingman in &session.wingmen {
        draw_wingman(surface, wingman);
    }
    surface.fill_rect(session.player.rect(), C_PLAYER);

    draw_hud(surface, session);

    match session.status {
        GameStatus::ChoosingEquipment => draw_equipment_choice(surface, session),
        GameStatus::GameOver(outcome) => draw_game_over(surface, session, outcome),
        GameStatus::Playing => {}
    }

    surface.present()
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_hostile<S: RenderSurface>(surface: &mut S, hostile: &Hostile) {
    let r = hostile.rect();
    match hostile.kind.shape() {
        Shape::Square => surface.fill_rect(r, C_HOSTILE_NORMAL),
        Shape::Circle => {
            surface.fill_circle(r.x + r.w / 2.0, r.y + r.h / 2.0, r.w / 2.0, C_HOSTILE_FAST)
        }
        // Point-down wedge: the apex leads the descent.
        Shape::Triangle => surface.fill_polygon(
            &[(r.x + r.w / 2.0, r.y), (r.x + r.w, r.y + r.h), (r.x, r.y + r.h)],
            C_HOSTILE_STRONG,
        ),
    }
}

fn shot_color(effects: &Effects) -> Color {
    if effects.electric {
        C_SHOT_ELECTRIC
    } else if effects.piercing {
        C_SHOT_PIERCING
    } else if effects.aoe {
        C_SHOT_AOE
    } else if effects.homing {
        C_SHOT_HOMING
    } else {
        C_SHOT
    }
}

fn draw_projectile<S: RenderSurface>(surface: &mut S, projectile: &Projectile) {
    surface.fill_rect(projectile.rect(), shot_color(&projectile.effects));
}

fn draw_wingman<S: RenderSurface>(surface: &mut S, wingman: &Wingman) {
    let color = match wingman.side {
        Side::Left => C_WINGMAN_LEFT,
        Side::Right => C_WINGMAN_RIGHT,
    };
    surface.fill_rect(wingman.rect(), color);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<S: RenderSurface>(surface: &mut S, session: &GameSession) {
    surface.text(10.0, 10.0, &format!("Score: {}", session.score), C_HUD);
    for (i, equipment) in session.equipments.iter().enumerate() {
        let y = 10.0 + (i + 1) as f32 * LINE_HEIGHT;
        surface.text(10.0, y, equipment.name, C_HUD_EQUIPMENT);
    }
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_equipment_choice<S: RenderSurface>(surface: &mut S, session: &GameSession) {
    let panels = layout::choice_rects(&session.config);
    surface.text(
        panels[0].x,
        panels[0].y - 2.0 * LINE_HEIGHT,
        "Choose equipment",
        C_HUD,
    );
    for (i, (panel, equipment)) in panels.iter().zip(&session.offered).enumerate() {
        surface.fill_rect(*panel, C_PANEL);
        surface.text(
            panel.x + 10.0,
            panel.y + panel.h / 2.0 - LINE_HEIGHT / 2.0,
            &format!("[{}] {}", i + 1, equipment.name),
            C_PANEL_TEXT,
        );
    }
}

fn draw_game_over<S: RenderSurface>(surface: &mut S, session: &GameSession, outcome: Outcome) {
    let (title, color) = match outcome {
        Outcome::Defeat => ("GAME OVER", Color::Red),
        Outcome::Victory => ("VICTORY", Color::Yellow),
    };
    let cx = session.config.width / 2.0;
    let cy = session.config.height / 2.0;
    surface.text(cx - 60.0, cy - 2.0 * LINE_HEIGHT, title, color);
    surface.text(cx - 60.0, cy, &format!("Final Score: {}", session.score), C_HUD);

    let button = layout::restart_rect(&session.config);
    surface.fill_rect(button, C_PANEL);
    surface.text(button.x + 10.0, button.y + button.h / 2.0 - LINE_HEIGHT / 2.0, "Restart", C_PANEL_TEXT);
}
