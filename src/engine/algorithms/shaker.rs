use crate::engine::step::{Direction, StepRecord};
use crate::engine::StepProducer;
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    Forward,
    Backward,
}

/// Cocktail shaker sort: bubble passes alternating in both directions.
///
/// The forward pass compares `start..end` and then retires `end`; the
/// backward pass walks `end - 1` down to `start` and then retires `start`.
/// A forward pass without swaps, or a backward pass without swaps, ends the
/// run.
#[derive(Debug, Clone)]
pub struct CocktailShakerSort {
    direction: Direction,
    len: usize,
    start: usize,
    end: usize,
    sweep: Sweep,
    /// Forward: next left index to compare. Backward: one past it.
    cursor: usize,
    swapped: bool,
    done: bool,
}

impl CocktailShakerSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        CocktailShakerSort {
            direction,
            len,
            start: 0,
            end: len.saturating_sub(1),
            sweep: Sweep::Forward,
            cursor: 0,
            swapped: false,
            done: len < 2,
        }
    }

    fn try_swap(&mut self, seq: &mut Sequence, i: usize) -> Option<StepRecord> {
        if self.direction.precedes(seq.get(i + 1), seq.get(i)) {
            seq.swap(i, i + 1);
            self.swapped = true;
            return Some(StepRecord::swap(i, i + 1));
        }
        None
    }
}

impl StepProducer for CocktailShakerSort {
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord> {
        debug_assert_eq!(seq.len(), self.len);

        while !self.done {
            match self.sweep {
                Sweep::Forward => {
                    while self.cursor < self.end {
                        let i = self.cursor;
                        self.cursor += 1;
                        if let Some(step) = self.try_swap(seq, i) {
                            return Some(step);
                        }
                    }
                    if !self.swapped {
                        self.done = true;
                        continue;
                    }
                    self.swapped = false;
                    self.end -= 1;
                    self.sweep = Sweep::Backward;
                    self.cursor = self.end;
                }
                Sweep::Backward => {
                    while self.cursor > self.start {
                        let i = self.cursor - 1;
                        self.cursor = i;
                        if let Some(step) = self.try_swap(seq, i) {
                            return Some(step);
                        }
                    }
                    self.start += 1;
                    if !self.swapped {
                        self.done = true;
                        continue;
                    }
                    self.swapped = false;
                    self.sweep = Sweep::Forward;
                    self.cursor = self.start;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::step::StepKind;

    fn kinds(values: Vec<i32>, direction: Direction) -> (Vec<StepKind>, Vec<i32>) {
        let mut seq = Sequence::new(values);
        let mut sorter = CocktailShakerSort::new(direction, seq.len());
        let mut kinds = Vec::new();
        while let Some(step) = sorter.next_step(&mut seq) {
            kinds.push(step.kind);
        }
        (kinds, seq.values().to_vec())
    }

    #[test]
    fn test_sorted_input_exits_after_one_pass() {
        let (steps, values) = kinds(vec![1, 2, 3, 4, 5], Direction::Ascending);
        assert!(steps.is_empty());
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sweeps_alternate() {
        // Forward carries 3 to the back, backward carries 0 to the front
        let (steps, values) = kinds(vec![3, 1, 2, 0], Direction::Ascending);
        assert_eq!(
            steps,
            vec![
                StepKind::Swap { a: 0, b: 1 },
                StepKind::Swap { a: 1, b: 2 },
                StepKind::Swap { a: 2, b: 3 },
                StepKind::Swap { a: 1, b: 2 },
                StepKind::Swap { a: 0, b: 1 },
            ]
        );
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_descending() {
        let (_, values) = kinds(vec![2, 9, 4, 4, 1, 7], Direction::Descending);
        assert_eq!(values, vec![9, 7, 4, 4, 2, 1]);
    }
}
