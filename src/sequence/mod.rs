//! Sequence state shared by the engine and the presentation layer
//!
//! [`Sequence`] owns the values being sorted together with the bounds used for
//! layout. It exposes only three mutation primitives ([`Sequence::get`],
//! [`Sequence::set`], [`Sequence::swap`]); every step producer goes through
//! them.
//!
//! # Bounds
//!
//! The min/max bounds are recomputed when a new list is installed and are
//! left alone while an algorithm runs. Sorting never changes the multiset of
//! values, so the bounds stay valid for the whole run.

use rand::Rng;

/// Smallest list the size controls will produce
pub const MIN_SIZE: usize = 10;

/// Largest list the size controls will produce
pub const MAX_SIZE: usize = 100;

/// Amount added or removed by one resize command
pub const SIZE_STEP: usize = 10;

/// An in-memory list of values plus its layout bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i32>,
    min: i32,
    max: i32,
}

impl Sequence {
    pub fn new(values: Vec<i32>) -> Self {
        let mut sequence = Sequence {
            values: Vec::new(),
            min: 0,
            max: 0,
        };
        sequence.set_sequence(values);
        sequence
    }

    /// Generate `len` values drawn uniformly from `min..=max`
    pub fn random<R: Rng + ?Sized>(len: usize, min: i32, max: i32, rng: &mut R) -> Self {
        let values = (0..len).map(|_| rng.gen_range(min..=max)).collect();
        Sequence::new(values)
    }

    /// Install a new list and recompute the bounds
    pub fn set_sequence(&mut self, values: Vec<i32>) {
        self.min = values.iter().copied().min().unwrap_or(0);
        self.max = values.iter().copied().max().unwrap_or(0);
        self.values = values;
    }

    /// Read the value at `index`. Panics when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.values[index]
    }

    /// Overwrite the value at `index`. Panics when out of range.
    #[inline]
    pub fn set(&mut self, index: usize, value: i32) {
        self.values[index] = value;
    }

    /// Exchange two positions. Panics when either is out of range.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Distance between the bounds, at least 1 so it can be divided by
    pub fn span(&self) -> i64 {
        (self.max as i64 - self.min as i64).max(1)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence::new(Vec::new())
    }
}

/// Apply a resize delta to `size`, clamped to [`MIN_SIZE`]..=[`MAX_SIZE`]
pub fn resized(size: usize, delta: isize) -> usize {
    let size = isize::try_from(size).unwrap_or(isize::MAX);
    size.saturating_add(delta)
        .clamp(MIN_SIZE as isize, MAX_SIZE as isize) as usize
}
