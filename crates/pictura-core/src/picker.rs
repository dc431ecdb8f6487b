//! Injectable random source for descriptor selection and shuffling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice among `len` alternatives.
pub trait Picker {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Default picker backed by [`StdRng`].
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible results.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Pick one element, or `None` for an empty slice.
pub fn pick<'a, T>(picker: &mut dyn Picker, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(picker.pick_index(items.len()))
}

/// Fisher-Yates shuffle driven by `picker`.
pub fn shuffle<T>(picker: &mut dyn Picker, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = picker.pick_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_empty() {
        let mut picker = RandomPicker::with_seed(1);
        let empty: [&str; 0] = [];
        assert!(pick(&mut picker, &empty).is_none());
    }

    #[test]
    fn test_reproducible_with_seed() {
        let items: Vec<u32> = (0..50).collect();
        let mut a = RandomPicker::with_seed(12345);
        let mut b = RandomPicker::with_seed(12345);
        for _ in 0..20 {
            assert_eq!(pick(&mut a, &items), pick(&mut b, &items));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut items: Vec<u32> = (0..10).collect();
        shuffle(&mut RandomPicker::with_seed(7), &mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }
}
