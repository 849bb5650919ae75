use std::time::{Duration, Instant};

use rand::Rng;

use crate::sim::GridSize;

pub const GROWTH_DELAY: Duration = Duration::from_millis(2);
pub const FADE_LIFESPAN: Duration = Duration::from_millis(700);
pub const MAX_BRANCHES: u32 = 3;
pub const BRANCH_CHANCE: f64 = 0.3;

const BRANCH_SPAN: (i32, i32) = (-3, 3);
const FALLBACK_SPAN: (i32, i32) = (-1, 1);

#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub row: u16,
    pub col: u16,
    pub created_at: Instant,
}

/// Picks the fade glyph for a segment of the given age, heaviest first.
/// Returns `None` once the segment has outlived the fade lifespan.
#[must_use]
pub fn fade_glyph(age: Duration) -> Option<char> {
    if age >= FADE_LIFESPAN {
        return None;
    }
    let norm = age.as_secs_f32() / FADE_LIFESPAN.as_secs_f32();
    Some(if norm <= 0.6 {
        '#'
    } else if norm <= 0.9 {
        '*'
    } else {
        '+'
    })
}

#[derive(Debug)]
pub struct LightningBolt {
    grid: GridSize,
    segments: Vec<Segment>,
    is_growing: bool,
    last_growth_at: Instant,
    target_length: u16,
}

impl LightningBolt {
    #[must_use]
    pub fn new(
        origin_row: u16,
        origin_col: u16,
        grid: GridSize,
        now: Instant,
        rng: &mut impl Rng,
    ) -> Self {
        let target_length = rng.random_range(grid.cols / 3..=grid.cols / 2) + 5;
        Self {
            grid,
            segments: vec![Segment {
                row: origin_row,
                col: origin_col,
                created_at: now,
            }],
            is_growing: true,
            last_growth_at: now,
            target_length,
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.is_growing
    }

    #[must_use]
    pub fn target_length(&self) -> u16 {
        self.target_length
    }

    /// Rows spanned from the origin down to the deepest segment.
    #[must_use]
    pub fn height(&self) -> u16 {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => last.row - first.row + 1,
            _ => 0,
        }
    }

    /// One growth wave: every tip on the frontier row may fork downward.
    /// Rate-limited so bolts extend slower than the tick cadence.
    pub fn advance(&mut self, now: Instant, rng: &mut impl Rng) {
        if !self.is_growing || now.duration_since(self.last_growth_at) < GROWTH_DELAY {
            return;
        }
        self.last_growth_at = now;

        let Some(frontier) = self.segments.last().map(|seg| seg.row) else {
            return;
        };

        let mut wave: Vec<(u16, u16)> = Vec::new();
        for seg in self.segments.iter().filter(|seg| seg.row == frontier) {
            let branches = rng.random_range(1..=MAX_BRANCHES);
            for _ in 0..branches {
                if rng.random_bool(BRANCH_CHANCE) {
                    self.try_fork(frontier, seg.col, BRANCH_SPAN, &mut wave, rng);
                }
            }
        }

        // Branching stalled short of the target: force one narrow step so the
        // bolt never dies stunted. Only tips that existed before this wave are
        // eligible; this wave's segments join the frontier next wave.
        if wave.is_empty() && self.height() < self.target_length {
            for seg in self.segments.iter().filter(|seg| seg.row == frontier) {
                self.try_fork(frontier, seg.col, FALLBACK_SPAN, &mut wave, rng);
            }
        }

        let stalled = wave.is_empty();
        for (row, col) in wave {
            self.segments.push(Segment {
                row,
                col,
                created_at: now,
            });
        }
        if stalled || frontier + 1 >= self.grid.rows {
            self.is_growing = false;
        }
    }

    /// The whole bolt stays visible until its last-created segment ages out.
    #[must_use]
    pub fn is_alive(&self, now: Instant) -> bool {
        self.segments
            .last()
            .is_some_and(|seg| now.duration_since(seg.created_at) <= FADE_LIFESPAN)
    }

    fn try_fork(
        &self,
        frontier: u16,
        tip_col: u16,
        (lo, hi): (i32, i32),
        wave: &mut Vec<(u16, u16)>,
        rng: &mut impl Rng,
    ) {
        let offset = rng.random_range(lo..=hi);
        let row = i32::from(frontier) + 1;
        let col = i32::from(tip_col) + offset;
        if row >= i32::from(self.grid.rows) || col < 0 || col >= i32::from(self.grid.cols) {
            return;
        }
        let cell = (row as u16, col as u16);
        if wave.contains(&cell) {
            return;
        }
        wave.push(cell);
    }
}
