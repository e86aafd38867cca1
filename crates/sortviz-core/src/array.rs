#![forbid(unsafe_code)]

//! The shared array under visualization.
//!
//! [`ArrayState`] is the single mutable resource of the engine: a
//! fixed-length sequence of integers that algorithms permute in place.
//! Two invariants hold for its whole lifetime:
//!
//! 1. The length never changes — there is no insert or delete, only
//!    reinitialization via a new `ArrayState`.
//! 2. Every mutation preserves the multiset of values. `swap` guarantees
//!    this structurally; `write_range` relies on its caller writing back a
//!    permutation of what it read (the merge write-back does exactly that).
//!
//! Out-of-range indices are programmer errors, not recoverable conditions:
//! every accessor panics on a bad index rather than returning a `Result`.
//!
//! The renderer never touches the mutable array. It consumes [`Snapshot`]s,
//! immutable copies taken after each mutation, so a frame can never observe
//! a half-applied step.

use std::ops::Range;
use std::sync::Arc;

use rand::Rng;

/// Immutable copy of the array published to the renderer at each step.
pub type Snapshot = Arc<[i32]>;

/// Fixed-length, in-place mutable sequence of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayState {
    values: Vec<i32>,
}

impl ArrayState {
    /// Create an array of `len` values drawn uniformly from `value_range`.
    ///
    /// # Panics
    ///
    /// Panics if `value_range` is empty.
    pub fn random<R: Rng + ?Sized>(len: usize, value_range: Range<i32>, rng: &mut R) -> Self {
        assert!(
            !value_range.is_empty(),
            "value range {value_range:?} is empty"
        );
        let values = (0..len).map(|_| rng.gen_range(value_range.clone())).collect();
        Self { values }
    }

    /// Create an array from explicit values. Intended for tests and demos.
    pub fn from_values(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Number of elements. Constant for the lifetime of the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read the value at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[inline]
    pub fn get(&self, i: usize) -> i32 {
        self.values[i]
    }

    /// Exchange the values at `i` and `j`. Preserves the multiset.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    /// Overwrite the contiguous span starting at `offset` with `values`.
    ///
    /// Used by the merge write-back, one element per call, so a step event
    /// can fire after every individual write.
    ///
    /// # Panics
    ///
    /// Panics if `offset + values.len()` exceeds the array length.
    pub fn write_range(&mut self, offset: usize, values: &[i32]) {
        self.values[offset..offset + values.len()].copy_from_slice(values);
    }

    /// Borrow the full contents.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Take an immutable copy for the renderer.
    pub fn snapshot(&self) -> Snapshot {
        Arc::from(self.values.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn swap_exchanges_positions() {
        let mut a = ArrayState::from_values(vec![1, 2, 3]);
        a.swap(0, 2);
        assert_eq!(a.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn swap_same_index_is_identity() {
        let mut a = ArrayState::from_values(vec![4, 5]);
        a.swap(1, 1);
        assert_eq!(a.as_slice(), &[4, 5]);
    }

    #[test]
    fn write_range_overwrites_span() {
        let mut a = ArrayState::from_values(vec![9, 9, 9, 9]);
        a.write_range(1, &[1, 2]);
        assert_eq!(a.as_slice(), &[9, 1, 2, 9]);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let a = ArrayState::from_values(vec![1]);
        let _ = a.get(1);
    }

    #[test]
    #[should_panic]
    fn swap_out_of_range_panics() {
        let mut a = ArrayState::from_values(vec![1, 2]);
        a.swap(0, 2);
    }

    #[test]
    #[should_panic]
    fn write_range_past_end_panics() {
        let mut a = ArrayState::from_values(vec![1, 2]);
        a.write_range(1, &[7, 8]);
    }

    #[test]
    fn snapshot_is_independent_of_later_mutations() {
        let mut a = ArrayState::from_values(vec![1, 2, 3]);
        let snap = a.snapshot();
        a.swap(0, 2);
        assert_eq!(&*snap, &[1, 2, 3]);
        assert_eq!(a.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn random_respects_length_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = ArrayState::random(100, 20..570, &mut rng);
        assert_eq!(a.len(), 100);
        assert!(a.as_slice().iter().all(|&v| (20..570).contains(&v)));
    }

    #[test]
    fn random_zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = ArrayState::random(0, 20..570, &mut rng);
        assert!(a.is_empty());
    }

    #[test]
    #[should_panic]
    fn random_empty_range_panics() {
        let mut rng = StdRng::seed_from_u64(7);
        let _ = ArrayState::random(3, 5..5, &mut rng);
    }
}
