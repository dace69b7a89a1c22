//! Randomness helpers for round building.

use rand::seq::SliceRandom;

/// Return a new vector with the same elements in uniformly random order.
/// The input is left untouched.
pub fn shuffle<T: Clone>(source: &[T]) -> Vec<T> {
    let mut shuffled = source.to_vec();
    shuffled.shuffle(&mut rand::rng());
    shuffled
}

/// Draw up to `count` elements without replacement, in shuffled order.
/// When `count` exceeds the source length, every element is returned.
pub fn sample_unique<T: Clone>(source: &[T], count: usize) -> Vec<T> {
    let mut sampled = shuffle(source);
    sampled.truncate(count);
    sampled
}
