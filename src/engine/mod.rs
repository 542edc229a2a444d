//! Step-driven sorting engine
//!
//! Every algorithm is a resumable [`StepProducer`]: each call performs exactly
//! one atomic mutation on the [`Sequence`] and describes it in a
//! [`StepRecord`]. Between calls the producer keeps all of its progress
//! (loop indices, pending ranges, partition cursors) so the caller decides
//! when the next mutation happens.
//!
//! - [`step`]: [`StepRecord`], [`StepKind`], [`Role`] and [`Direction`]
//! - [`algorithms`]: the seven producers
//!
//! [`Algorithm`] is the closed set of supported algorithms and
//! [`Sorter`] the matching producer enum, so dispatch never goes through a
//! name lookup.

pub mod algorithms;
pub mod step;

use crate::error::ConfigError;
use crate::sequence::Sequence;
use algorithms::{
    BubbleSort, CocktailShakerSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
};
use std::fmt;
use std::str::FromStr;

pub use step::{Direction, Role, StepKind, StepRecord};

/// A lazy, finite, non-restartable sequence of steps over one [`Sequence`].
///
/// The sequence passed to every call must be the one the producer was created
/// for; its length never changes during a run.
pub trait StepProducer {
    /// Perform the next mutation, or return `None` once the sequence is sorted
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord>;
}

/// The supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    CocktailShaker,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::CocktailShaker,
        Algorithm::Heap,
    ];

    /// Display name, e.g. "Cocktail Shaker Sort"
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::CocktailShaker => "Cocktail Shaker Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Short label used on buttons
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Insertion => "Insertion",
            Algorithm::Selection => "Selection",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
            Algorithm::CocktailShaker => "Shaker",
            Algorithm::Heap => "Heap",
        }
    }

    /// Create a fresh producer for a sequence of `len` values
    pub fn producer(self, direction: Direction, len: usize) -> Sorter {
        match self {
            Algorithm::Bubble => Sorter::Bubble(BubbleSort::new(direction, len)),
            Algorithm::Insertion => Sorter::Insertion(InsertionSort::new(direction, len)),
            Algorithm::Selection => Sorter::Selection(SelectionSort::new(direction, len)),
            Algorithm::Merge => Sorter::Merge(MergeSort::new(direction, len)),
            Algorithm::Quick => Sorter::Quick(QuickSort::new(direction, len)),
            Algorithm::CocktailShaker => {
                Sorter::CocktailShaker(CocktailShakerSort::new(direction, len))
            }
            Algorithm::Heap => Sorter::Heap(HeapSort::new(direction, len)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    /// Accepts the short name in any case, with or without a `-sort` suffix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key
            .strip_suffix("-sort")
            .or_else(|| key.strip_suffix("_sort"))
            .unwrap_or(key.as_str());
        match key {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "selection" => Ok(Algorithm::Selection),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "shaker" | "cocktail" | "cocktail-shaker" => Ok(Algorithm::CocktailShaker),
            "heap" => Ok(Algorithm::Heap),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A step producer for any [`Algorithm`]
#[derive(Debug, Clone)]
pub enum Sorter {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Selection(SelectionSort),
    Merge(MergeSort),
    Quick(QuickSort),
    CocktailShaker(CocktailShakerSort),
    Heap(HeapSort),
}

impl StepProducer for Sorter {
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord> {
        match self {
            Sorter::Bubble(p) => p.next_step(seq),
            Sorter::Insertion(p) => p.next_step(seq),
            Sorter::Selection(p) => p.next_step(seq),
            Sorter::Merge(p) => p.next_step(seq),
            Sorter::Quick(p) => p.next_step(seq),
            Sorter::CocktailShaker(p) => p.next_step(seq),
            Sorter::Heap(p) => p.next_step(seq),
        }
    }
}

/// Drain a fresh producer over `seq`, collecting every step in order
pub fn run_to_completion(
    algorithm: Algorithm,
    direction: Direction,
    seq: &mut Sequence,
) -> Vec<StepRecord> {
    let mut producer = algorithm.producer(direction, seq.len());
    let mut steps = Vec::new();
    while let Some(step) = producer.next_step(seq) {
        steps.push(step);
    }
    steps
}

/// Apply `steps` to a copy of `initial`
pub fn replay(initial: &[i32], steps: &[StepRecord]) -> Vec<i32> {
    let mut values = initial.to_vec();
    for step in steps {
        step.apply(&mut values);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!("Quick-Sort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!(
            "cocktail_sort".parse::<Algorithm>().unwrap(),
            Algorithm::CocktailShaker
        );
        assert!(matches!(
            "bogo".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm(ref s)) if s == "bogo"
        ));
    }

    #[test]
    fn test_every_algorithm_sorts_a_small_list() {
        for algorithm in Algorithm::ALL {
            for direction in [Direction::Ascending, Direction::Descending] {
                let initial = vec![7, 2, 9, 2, 5, 0, 11, 3];
                let mut seq = Sequence::new(initial.clone());
                let steps = run_to_completion(algorithm, direction, &mut seq);
                assert!(
                    direction.is_sorted(seq.values()),
                    "{} {} left {:?}",
                    algorithm,
                    direction,
                    seq.values()
                );
                assert_eq!(replay(&initial, &steps), seq.values());
            }
        }
    }

    #[test]
    fn test_exhausted_producer_stays_exhausted() {
        let mut seq = Sequence::new(vec![2, 1]);
        let mut producer = Algorithm::Quick.producer(Direction::Ascending, 2);
        while producer.next_step(&mut seq).is_some() {}
        assert!(producer.next_step(&mut seq).is_none());
        assert!(producer.next_step(&mut seq).is_none());
    }
}
