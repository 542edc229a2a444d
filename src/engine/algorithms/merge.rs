//! Top-down merge sort driven by an explicit work stack
//!
//! The recursive shape `sort(l, m); sort(m + 1, r); merge(l, m, r)` is kept by
//! pushing the three pieces in reverse order, so ranges are split and merged
//! in exactly the order the recursive version would visit them. A merge in
//! progress lives in [`ActiveMerge`] and emits one overwrite per call.

use crate::engine::step::{Direction, Role, StepRecord};
use crate::engine::StepProducer;
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeTask {
    Sort { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

/// Scratch copies of both halves plus the write cursor
#[derive(Debug, Clone)]
struct ActiveMerge {
    left_run: Vec<i32>,
    right_run: Vec<i32>,
    li: usize,
    ri: usize,
    out: usize,
}

impl ActiveMerge {
    fn new(seq: &Sequence, left: usize, mid: usize, right: usize) -> Self {
        let values = seq.values();
        ActiveMerge {
            left_run: values[left..=mid].to_vec(),
            right_run: values[mid + 1..=right].to_vec(),
            li: 0,
            ri: 0,
            out: left,
        }
    }

    /// Place the next value, or `None` once both runs are drained
    fn place(&mut self, seq: &mut Sequence, direction: Direction) -> Option<StepRecord> {
        let left = self.left_run.get(self.li).copied();
        let right = self.right_run.get(self.ri).copied();

        let take_left = match (left, right) {
            (Some(l), Some(r)) => direction.precedes(l, r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };

        let (value, role) = if take_left {
            self.li += 1;
            (self.left_run[self.li - 1], Role::Primary)
        } else {
            self.ri += 1;
            (self.right_run[self.ri - 1], Role::Secondary)
        };

        let index = self.out;
        self.out += 1;
        seq.set(index, value);
        Some(StepRecord::overwrite(index, value, role))
    }
}

/// Merge sort, one step per placement into the output region.
///
/// Values taken from the left half are highlighted Primary, values from the
/// right half Secondary. On ties the right half wins, in both directions.
#[derive(Debug, Clone)]
pub struct MergeSort {
    direction: Direction,
    len: usize,
    tasks: Vec<MergeTask>,
    active: Option<ActiveMerge>,
}

impl MergeSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        let mut tasks = Vec::new();
        if len >= 2 {
            tasks.push(MergeTask::Sort {
                left: 0,
                right: len - 1,
            });
        }
        MergeSort {
            direction,
            len,
            tasks,
            active: None,
        }
    }
}

impl StepProducer for MergeSort {
    fn next_step(&mut self, seq: &mut Sequence) -> Option<StepRecord> {
        debug_assert_eq!(seq.len(), self.len);

        loop {
            if let Some(merge) = self.active.as_mut() {
                if let Some(step) = merge.place(seq, self.direction) {
                    return Some(step);
                }
                self.active = None;
            }

            match self.tasks.pop()? {
                MergeTask::Sort { left, right } => {
                    if left < right {
                        let mid = (left + right) / 2;
                        self.tasks.push(MergeTask::Merge { left, mid, right });
                        self.tasks.push(MergeTask::Sort {
                            left: mid + 1,
                            right,
                        });
                        self.tasks.push(MergeTask::Sort { left, right: mid });
                    }
                }
                MergeTask::Merge { left, mid, right } => {
                    self.active = Some(ActiveMerge::new(seq, left, mid, right));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::step::StepKind;

    fn drain(values: Vec<i32>, direction: Direction) -> (Vec<StepRecord>, Vec<i32>) {
        let mut seq = Sequence::new(values);
        let mut sorter = MergeSort::new(direction, seq.len());
        let mut steps = Vec::new();
        while let Some(step) = sorter.next_step(&mut seq) {
            steps.push(step);
        }
        (steps, seq.values().to_vec())
    }

    #[test]
    fn test_one_overwrite_per_placement() {
        // Splits: [0,1] merged (2 placements), [2,3] merged (2), then [0,3] (4)
        let (steps, sorted) = drain(vec![5, 3, 8, 1], Direction::Ascending);
        assert_eq!(sorted, vec![1, 3, 5, 8]);
        assert_eq!(steps.len(), 8);
        assert!(steps
            .iter()
            .all(|s| matches!(s.kind, StepKind::Overwrite { .. })));
    }

    #[test]
    fn test_merge_order_matches_recursion() {
        let (steps, _) = drain(vec![2, 1, 4, 3], Direction::Ascending);
        let indices: Vec<usize> = steps
            .iter()
            .map(|s| match s.kind {
                StepKind::Overwrite { index, .. } => index,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn test_roles_track_source_half() {
        let (steps, _) = drain(vec![9, 1], Direction::Ascending);
        // 1 comes from the right half, then 9 drains from the left
        assert_eq!(steps[0].role_of(0), Some(Role::Secondary));
        assert_eq!(steps[1].role_of(1), Some(Role::Primary));
    }

    #[test]
    fn test_descending() {
        let (_, sorted) = drain(vec![4, 7, 1, 7, 3], Direction::Descending);
        assert_eq!(sorted, vec![7, 7, 4, 3, 1]);
    }
}
