//! Heap sort with a resumable sift-down
//!
//! Sift-down is tail recursive, so a suspended sift is just the node it will
//! examine next plus the heap size. The outer loop is split into a build
//! phase (every non-leaf from `n / 2 - 1` down to `0`) and an extraction
//! phase (root swapped with the last unsorted slot, then sifted again).

use crate::engine::step::{Direction, StepRecord};
use crate::engine::StepProducer;
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeapPhase {
    /// Non-leaf nodes still to heapify; the next one is `remaining - 1`
    Build { remaining: usize },
    /// Next slot to receive the root
    Extract { end: usize },
    Done,
}

#[derive(Debug, Clone, Copy)]
struct SiftDown {
    node: usize,
    size: usize,
}

impl SiftDown {
    /// Swap the node with its dominant child, or `None` if it already dominates
    fn advance(&mut self, seq: &mut Sequence, direction: Direction) -> Option<StepRecord> {
        let node = self.node;
        let left = 2 * node + 1;
        let right = left + 1;

        let mut top = node;
        if left < self.size && direction.precedes(seq.get(node), seq.get(left)) {
            top = left;
        }
        if right < self.size && direction.precedes(seq.get(top), seq.get(right)) {
            top = right;
        }
        if top == node {
            return None;
        }

        seq.swap(node, top);
        self.node = top;
        Some(StepRecord::swap(node, top))
    }
}

#[derive(Debug, Clone)]
pub struct HeapSort {
    direction: Direction,
    len: usize,
    phase: HeapPhase,
    sift: Option<SiftDown>,
}

impl HeapSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        let phase = if len < 2 {
            HeapPhase::Done
        } else {
            HeapPhase::Build { remaining: len / 2 }
        };
        HeapSort {
            direction,
            len,
            phase,
            sift: None,
        }
    }
}

impl StepProducer for HeapSort {
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord> {
        debug_assert_eq!(seq.len(), self.len);

        loop {
            if let Some(sift) = self.sift.as_mut() {
                if let Some(step) = sift.advance(seq, self.direction) {
                    return Some(step);
                }
                self.sift = None;
            }

            match self.phase {
                HeapPhase::Build { remaining: 0 } => {
                    self.phase = HeapPhase::Extract { end: self.len - 1 };
                }
                HeapPhase::Build { remaining } => {
                    let node = remaining - 1;
                    self.phase = HeapPhase::Build { remaining: node };
                    self.sift = Some(SiftDown {
                        node,
                        size: self.len,
                    });
                }
                HeapPhase::Extract { end: 0 } | HeapPhase::Done => {
                    self.phase = HeapPhase::Done;
                    return None;
                }
                HeapPhase::Extract { end } => {
                    seq.swap(end, 0);
                    self.phase = HeapPhase::Extract { end: end - 1 };
                    self.sift = Some(SiftDown { node: 0, size: end });
                    return Some(StepRecord::swap(end, 0));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::step::{Role, StepKind};

    #[test]
    fn test_build_then_extract() {
        let mut seq = Sequence::new(vec![1, 3, 2]);
        let mut sorter = HeapSort::new(Direction::Ascending, 3);

        let mut kinds = Vec::new();
        while let Some(step) = sorter.next_step(&mut seq) {
            kinds.push(step.kind);
        }

        // Build: root 1 sinks below 3 -> [3, 1, 2]
        // Extract 3 -> [2, 1, 3], root already dominates
        // Extract 2 -> [1, 2, 3]
        assert_eq!(
            kinds,
            vec![
                StepKind::Swap { a: 0, b: 1 },
                StepKind::Swap { a: 2, b: 0 },
                StepKind::Swap { a: 1, b: 0 },
            ]
        );
        assert_eq!(seq.values(), &[1, 2, 3]);
    }

    #[test]
    fn test_extraction_highlights_slot_then_root() {
        let mut seq = Sequence::new(vec![5, 1]);
        let mut sorter = HeapSort::new(Direction::Ascending, 2);
        let step = sorter.next_step(&mut seq).unwrap();
        assert_eq!(step.role_of(1), Some(Role::Primary));
        assert_eq!(step.role_of(0), Some(Role::Secondary));
        assert_eq!(seq.values(), &[1, 5]);
        assert!(sorter.next_step(&mut seq).is_none());
    }

    #[test]
    fn test_descending_uses_min_heap() {
        let mut seq = Sequence::new(vec![4, 8, 1, 6, 6, 2]);
        let mut sorter = HeapSort::new(Direction::Descending, 6);
        while sorter.next_step(&mut seq).is_some() {}
        assert_eq!(seq.values(), &[8, 6, 6, 4, 2, 1]);
    }
}
