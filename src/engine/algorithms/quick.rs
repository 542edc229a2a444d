//! Quick sort with the Lomuto partition scheme
//!
//! Pending ranges sit on an explicit stack. After a partition places its
//! pivot, the right range is pushed before the left one so the left side is
//! partitioned first, matching `partition; recurse(left); recurse(right)`.

use crate::engine::step::{Direction, StepRecord};
use crate::engine::StepProducer;
use crate::sequence::Sequence;

/// A partition scan in progress over `low..=high`, pivot at `high`
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    pivot: i32,
    /// Next slot for a value that belongs before the pivot
    store: usize,
    scan: usize,
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    direction: Direction,
    len: usize,
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
}

impl QuickSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        let mut ranges = Vec::new();
        if len >= 2 {
            ranges.push((0, len - 1));
        }
        QuickSort {
            direction,
            len,
            ranges,
            active: None,
        }
    }
}

impl StepProducer for QuickSort {
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord> {
        debug_assert_eq!(seq.len(), self.len);

        loop {
            if let Some(part) = self.active.as_mut() {
                while part.scan < part.high {
                    let j = part.scan;
                    part.scan += 1;
                    if self.direction.precedes(seq.get(j), part.pivot) {
                        let i = part.store;
                        part.store += 1;
                        // Emitted even when i == j
                        seq.swap(i, j);
                        return Some(StepRecord::swap(i, j));
                    }
                }

                let Partition {
                    low, high, store, ..
                } = *part;
                self.active = None;

                seq.swap(store, high);
                if store + 1 < high {
                    self.ranges.push((store + 1, high));
                }
                if store > low + 1 {
                    self.ranges.push((low, store - 1));
                }
                return Some(StepRecord::swap(store, high));
            }

            let (low, high) = self.ranges.pop()?;
            self.active = Some(Partition {
                low,
                high,
                pivot: seq.get(high),
                store: low,
                scan: low,
            });
        }
    }
}
