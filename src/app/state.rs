use std::time::Instant;

use rand::Rng;

use crate::{
    app::events::AppEvent,
    cli::Cli,
    sim::{GridSize, pool::BoltPool, rain::RainField},
};

#[derive(Debug)]
pub struct AppState {
    pub grid: GridSize,
    pub rain: RainField,
    pub bolts: BoltPool,
    pub thunder: bool,
    pub running: bool,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli, grid: GridSize) -> Self {
        Self {
            grid,
            rain: RainField::default(),
            bolts: BoltPool::default(),
            thunder: cli.thunder,
            running: true,
        }
    }

    /// One simulation step: bolts first, then rain, matching the draw order
    /// composited below them.
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) {
        self.bolts.advance(self.grid, now, rng);
        self.rain.advance(self.grid, self.thunder, rng);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.running = false,
        }
    }
}
