use crate::engine::step::{Direction, StepRecord};
use crate::engine::StepProducer;
use crate::sequence::Sequence;

/// Selection sort, one step per outer iteration.
///
/// When the extremum is already in place the step is a
/// [`ProbeComplete`](crate::engine::step::StepKind::ProbeComplete), so a run
/// over `n >= 2` values always yields exactly `n` steps.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    direction: Direction,
    len: usize,
    i: usize,
}

impl SelectionSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        SelectionSort {
            direction,
            len,
            i: 0,
        }
    }
}

impl StepProducer for SelectionSort {
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord> {
        debug_assert_eq!(seq.len(), self.len);

        if self.len < 2 || self.i >= self.len {
            return None;
        }

        let i = self.i;
        self.i += 1;

        let mut extremum = i;
        for j in i + 1..self.len {
            if self.direction.precedes(seq.get(j), seq.get(extremum)) {
                extremum = j;
            }
        }

        if extremum == i {
            return Some(StepRecord::probe(i));
        }
        seq.swap(i, extremum);
        Some(StepRecord::swap(i, extremum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::step::StepKind;

    #[test]
    fn test_sorted_input_still_emits_n_steps() {
        let mut seq = Sequence::new(vec![1, 2, 3, 4]);
        let mut sorter = SelectionSort::new(Direction::Ascending, 4);

        let mut steps = Vec::new();
        while let Some(step) = sorter.next_step(&mut seq) {
            steps.push(step);
        }

        assert_eq!(steps.len(), 4);
        assert!(steps
            .iter()
            .all(|s| matches!(s.kind, StepKind::ProbeComplete { .. })));
    }

    #[test]
    fn test_swaps_with_extremum() {
        let mut seq = Sequence::new(vec![3, 9, 1]);
        let mut sorter = SelectionSort::new(Direction::Descending, 3);
        let step = sorter.next_step(&mut seq).unwrap();
        assert_eq!(step.kind, StepKind::Swap { a: 0, b: 1 });
        assert_eq!(seq.values(), &[9, 3, 1]);
    }
}
