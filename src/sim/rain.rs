use rand::Rng;

use crate::sim::GridSize;

pub const RAIN_GLYPHS: [char; 3] = ['|', '.', '`'];

pub const MIN_SPEED: f32 = 0.3;
pub const CALM_MAX_SPEED: f32 = 0.6;
pub const THUNDER_MAX_SPEED: f32 = 1.0;
pub const DIM_SPEED_THRESHOLD: f32 = 0.8;

const CALM_GENERATION_RATE: f64 = 0.3;
const THUNDER_GENERATION_RATE: f64 = 0.5;
const CALM_SPAWN_DIVISOR: u16 = 15;
const THUNDER_SPAWN_DIVISOR: u16 = 8;

#[derive(Debug, Clone)]
pub struct Raindrop {
    pub row: f32,
    pub col: u16,
    pub speed: f32,
    pub glyph: char,
}

impl Raindrop {
    fn spawn(cols: u16, max_speed: f32, rng: &mut impl Rng) -> Self {
        Self {
            row: 0.0,
            col: rng.random_range(0..cols),
            speed: rng.random_range(MIN_SPEED..=max_speed),
            glyph: RAIN_GLYPHS[rng.random_range(0..RAIN_GLYPHS.len())],
        }
    }
}

#[derive(Debug, Default)]
pub struct RainField {
    pub drops: Vec<Raindrop>,
}

impl RainField {
    pub fn advance(&mut self, grid: GridSize, thunder: bool, rng: &mut impl Rng) {
        let (rate, divisor, max_speed) = if thunder {
            (
                THUNDER_GENERATION_RATE,
                THUNDER_SPAWN_DIVISOR,
                THUNDER_MAX_SPEED,
            )
        } else {
            (CALM_GENERATION_RATE, CALM_SPAWN_DIVISOR, CALM_MAX_SPEED)
        };

        let mut next = Vec::with_capacity(self.drops.len() + 8);
        if grid.cols > 0 && rng.random_bool(rate) {
            let batch = rng.random_range(1..=(grid.cols / divisor).max(1));
            for _ in 0..batch {
                next.push(Raindrop::spawn(grid.cols, max_speed, rng));
            }
        }

        // Fresh spawns sit on the top row until the next tick; survivors fall
        // by their fixed per-tick speed.
        let floor = f32::from(grid.rows);
        for mut drop in self.drops.drain(..) {
            if drop.row + drop.speed >= floor {
                continue;
            }
            drop.row += drop.speed;
            next.push(drop);
        }
        self.drops = next;
    }
}
