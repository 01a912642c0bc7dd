//! RNG module - random piece generation
//!
//! Implements the piece source for the game: every generated piece gets a
//! kind drawn uniformly from the four-letter alphabet and a fresh id from a
//! monotonically increasing counter that never resets during a run.
//!
//! Also provides a simple LCG so runs are reproducible for a given seed.

use log::debug;

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of new pieces: random kind, unique increasing id.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
    /// Id handed to the next generated piece.
    next_id: u32,
}

impl PieceFactory {
    /// Create a factory with the given RNG seed. Ids start at 0.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Generate a new piece with a uniformly drawn kind and the next id.
    ///
    /// Ids increment exactly once per generated piece, so the sequence of ids
    /// is deterministic even though kinds are random.
    pub fn generate(&mut self) -> Piece {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        let piece = Piece::new(PieceKind::ALL[index], self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        debug!("generated piece {}", piece);
        piece
    }

    /// Id the next generated piece will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
