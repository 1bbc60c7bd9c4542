// config.rs - Run configuration passed explicitly to the driver and collaborators

use std::time::Duration;

use crossterm::style::Color;
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Largest accepted board dimension.
pub const MAX_DIMENSION: usize = 40;

/// Time each frame stays on screen.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Side length of the board, in `1..=MAX_DIMENSION`.
    pub dimension: usize,
    pub frame_interval: Duration,
    pub live_color: Color,
    pub quit_key: char,
    /// Fixed seed for reproducible boards; entropy when `None`.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            live_color: Color::Green,
            quit_key: 'q',
            seed: None,
            log_level: LevelFilter::Warn,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
