use crate::engine::step::{Direction, StepRecord};
use crate::engine::StepProducer;
use crate::sequence::Sequence;

/// Insertion sort that reports every backward shift.
///
/// The element being inserted walks toward the front one position per step:
/// its neighbour shifts up and the element is placed in the freed slot.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    direction: Direction,
    len: usize,
    next: usize,
    /// Current position of the element being inserted
    cursor: Option<usize>,
}

impl InsertionSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        InsertionSort {
            direction,
            len,
            next: 1,
            cursor: None,
        }
    }
}

impl StepProducer for InsertionSort {
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord> {
        debug_assert_eq!(seq.len(), self.len);

        loop {
            let pos = match self.cursor {
                Some(pos) => pos,
                None => {
                    if self.next >= self.len {
                        return None;
                    }
                    let pos = self.next;
                    self.next += 1;
                    pos
                }
            };

            let current = seq.get(pos);
            if pos > 0 && self.direction.precedes(current, seq.get(pos - 1)) {
                let shifted = seq.get(pos - 1);
                seq.set(pos, shifted);
                seq.set(pos - 1, current);
                self.cursor = Some(pos - 1);
                // Landing slot first, shifted neighbour second
                return Some(StepRecord::swap(pos - 1, pos));
            }
            self.cursor = None;
        }
    }
}
