//! RNG module - 7-bag random piece selection
//!
//! Each bag contains every catalog shape once, shuffled. Draws come from the
//! bag until it is empty, then a new bag is shuffled. Every shape therefore
//! shows up at least once in any 7 draws that start on a bag boundary.
//!
//! Shuffles run on a seeded splitmix64 stream so games are reproducible.

use crate::pieces::{shape_of, PieceShape};
use crate::types::PieceKind;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// splitmix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seeded splitmix64 generator.
///
/// Every seed, zero included, gives a full-period stream, and neighbouring
/// seeds give unrelated ones.
#[derive(Debug, Clone)]
pub struct BagRng {
    counter: u64,
}

impl BagRng {
    pub fn new(seed: u32) -> Self {
        Self {
            counter: mix(u64::from(seed)),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(GOLDEN_GAMMA);
        mix(self.counter)
    }

    /// Uniform in `[0, bound)`. Zero yields zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Reject the low values that would make `% bound` uneven.
        let bound = u64::from(bound);
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return (r % bound) as u32;
            }
        }
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// A seed derived from the current position, without advancing it.
    pub fn fork_seed(&self) -> u32 {
        let z = mix(self.counter ^ GOLDEN_GAMMA);
        (z >> 32) as u32 ^ z as u32
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: BagRng,
}

impl PieceQueue {
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: BagRng::new(seed),
        };
        queue.refill_bag();
        queue
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Shape the next `draw` will return, without consuming it.
    pub fn peek(&self) -> &'static PieceShape {
        if self.bag_index < self.bag.len() {
            return shape_of(self.bag[self.bag_index]);
        }

        // Preview the next bag on a copy of the RNG so the queue is untouched
        // and the preview agrees with the next draw.
        let mut preview_rng = self.rng.clone();
        let mut next_bag = PieceKind::ALL;
        preview_rng.shuffle(&mut next_bag);
        shape_of(next_bag[0])
    }

    pub fn draw(&mut self) -> &'static PieceShape {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        shape_of(kind)
    }

    /// Seed for the next game after a restart.
    pub fn seed(&self) -> u32 {
        self.rng.fork_seed()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
