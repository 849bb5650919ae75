#![allow(dead_code)]

use clap::Parser;
use rand::RngCore;
use terminal_rain::{cli::Cli, sim::GridSize};

/// Constant-output rng: all-zero passes every probability roll, all-ones
/// fails every one. Keeps stochastic paths out of deterministic tests.
pub struct ConstRng(pub u64);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for chunk in dest.chunks_mut(bytes.len()) {
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

pub fn grid(rows: u16, cols: u16) -> GridSize {
    GridSize { rows, cols }
}

pub fn storm_cli(thunder: bool) -> Cli {
    if thunder {
        Cli::parse_from(["terminal-rain", "--thunder"])
    } else {
        Cli::parse_from(["terminal-rain"])
    }
}
