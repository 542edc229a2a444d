use crate::engine::step::{Direction, StepRecord};
use crate::engine::StepProducer;
use crate::sequence::Sequence;

/// Classic bubble sort, one step per adjacent swap.
///
/// Every pass runs to its end; there is no early exit on a clean pass.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    direction: Direction,
    len: usize,
    pass: usize,
    j: usize,
}

impl BubbleSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        BubbleSort {
            direction,
            len,
            pass: 0,
            j: 0,
        }
    }
}

impl StepProducer for BubbleSort {
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord> {
        debug_assert_eq!(seq.len(), self.len);

        while self.pass + 1 < self.len {
            let limit = self.len - 1 - self.pass;
            while self.j < limit {
                let j = self.j;
                self.j += 1;
                if self.direction.precedes(seq.get(j + 1), seq.get(j)) {
                    seq.swap(j, j + 1);
                    return Some(StepRecord::swap(j, j + 1));
                }
            }
            self.pass += 1;
            self.j = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::step::StepKind;

    #[test]
    fn test_walkthrough() {
        let mut seq = Sequence::new(vec![5, 3, 8, 1]);
        let mut sorter = BubbleSort::new(Direction::Ascending, seq.len());

        let mut trace = Vec::new();
        while let Some(step) = sorter.next_step(&mut seq) {
            trace.push((step.kind, seq.values().to_vec()));
        }

        assert_eq!(
            trace,
            vec![
                (StepKind::Swap { a: 0, b: 1 }, vec![3, 5, 8, 1]),
                (StepKind::Swap { a: 2, b: 3 }, vec![3, 5, 1, 8]),
                (StepKind::Swap { a: 1, b: 2 }, vec![3, 1, 5, 8]),
                (StepKind::Swap { a: 0, b: 1 }, vec![1, 3, 5, 8]),
            ]
        );
    }

    #[test]
    fn test_descending_already_ordered_pair() {
        let mut seq = Sequence::new(vec![2, 1]);
        let mut sorter = BubbleSort::new(Direction::Descending, 2);
        assert!(sorter.next_step(&mut seq).is_none());
        assert_eq!(seq.values(), &[2, 1]);
    }
}
