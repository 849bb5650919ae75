pub mod surface;
pub mod theme;

use std::time::Instant;

use ratatui::{
    Frame,
    style::{Modifier, Style},
};

use crate::{
    app::state::AppState,
    sim::{
        lightning::{self, LightningBolt},
        pool::BoltPool,
        rain::{DIM_SPEED_THRESHOLD, RainField},
    },
    ui::{surface::Canvas, theme::Theme},
};

/// Anything the loop composites onto the canvas once per frame.
pub trait Draw {
    fn draw(&self, now: Instant, canvas: &mut Canvas, theme: &Theme);
}

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, now: Instant) {
    let area = frame.area();
    let mut canvas = Canvas::new(frame.buffer_mut(), area);

    state.rain.draw(now, &mut canvas, theme);
    if state.thunder {
        state.bolts.draw(now, &mut canvas, theme);
    }
}

impl Draw for RainField {
    fn draw(&self, _now: Instant, canvas: &mut Canvas, theme: &Theme) {
        for drop in &self.drops {
            let mut style = Style::new().fg(theme.rain);
            if drop.speed < DIM_SPEED_THRESHOLD {
                // Slow drops read as distant.
                style = style.add_modifier(Modifier::DIM);
            }
            canvas.plot(drop.row as u16, drop.col, drop.glyph, style);
        }
    }
}

impl Draw for LightningBolt {
    fn draw(&self, now: Instant, canvas: &mut Canvas, theme: &Theme) {
        let style = Style::new().fg(theme.lightning).add_modifier(Modifier::BOLD);
        for seg in self.segments() {
            let age = now.duration_since(seg.created_at);
            if let Some(glyph) = lightning::fade_glyph(age) {
                canvas.plot(seg.row, seg.col, glyph, style);
            }
        }
    }
}

impl Draw for BoltPool {
    fn draw(&self, now: Instant, canvas: &mut Canvas, theme: &Theme) {
        for bolt in &self.bolts {
            bolt.draw(now, canvas, theme);
        }
    }
}
