use std::time::Instant;

use rand::Rng;

use crate::sim::{GridSize, lightning::LightningBolt};

pub const MAX_ACTIVE_BOLTS: usize = 3;
pub const SPAWN_CHANCE: f64 = 0.007;

#[derive(Debug, Default)]
pub struct BoltPool {
    pub bolts: Vec<LightningBolt>,
}

impl BoltPool {
    pub fn advance(&mut self, grid: GridSize, now: Instant, rng: &mut impl Rng) {
        if grid.cols > 0
            && self.bolts.len() < MAX_ACTIVE_BOLTS
            && rng.random_bool(SPAWN_CHANCE)
        {
            self.bolts.push(Self::spawn(grid, now, rng));
        }
        for bolt in &mut self.bolts {
            bolt.advance(now, rng);
        }
        self.bolts.retain(|bolt| bolt.is_alive(now));
    }

    // Bolts strike the top third of the grid, inside the middle 60% band so
    // they never hug the side edges.
    fn spawn(grid: GridSize, now: Instant, rng: &mut impl Rng) -> LightningBolt {
        let row = rng.random_range(0..=grid.rows / 3);
        let band = u32::from(grid.cols);
        let col = rng.random_range((band / 5) as u16..=(band * 4 / 5) as u16);
        LightningBolt::new(row, col, grid, now, rng)
    }
}
