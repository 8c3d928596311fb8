//! Random draw sources.
//!
//! The fetch service decides success or failure from a single uniform draw.
//! The source is injected so tests can pin or seed it.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
pub trait DrawSource: Send + Sync {
    /// Take one draw.
    fn draw(&self) -> f64;
}

/// Unseeded thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl DrawSource for ThreadRngSource {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded generator for reproducible runs.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl DrawSource for SeededSource {
    fn draw(&self) -> f64 {
        self.rng.lock().gen::<f64>()
    }
}

/// Always returns the same draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDraw(pub f64);

impl DrawSource for FixedDraw {
    fn draw(&self) -> f64 {
        self.0
    }
}
