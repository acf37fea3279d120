//! Randomness helpers shared by dealing and the CPU tie-breaks.
//!
//! Nothing here touches game state; every function takes the draw source
//! explicitly so callers can substitute a seeded or stepped generator.

use rand::Rng;
use rand::seq::SliceRandom;

/// Upper bound (exclusive) of the perturbation added to CPU scores.
pub const TIE_BREAK_JITTER: f64 = 0.01;

pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Small random offset used only to break exact ties between scores.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..TIE_BREAK_JITTER)
}
