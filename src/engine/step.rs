//! Step records and sort direction

use rustc_hash::FxHashMap;
use std::fmt;

/// Sort polarity, applied to every comparison an algorithm makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Whether `a` strictly belongs before `b` in this direction.
    ///
    /// Equal values never precede each other, in either direction.
    #[inline]
    pub fn precedes(self, a: i32, b: i32) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }

    /// Whether `values` is ordered for this direction
    pub fn is_sorted(self, values: &[i32]) -> bool {
        values.windows(2).all(|w| !self.precedes(w[1], w[0]))
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation role of a highlighted position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Secondary,
}

/// The atomic change a step made to the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Two positions exchanged values
    Swap { a: usize, b: usize },
    /// One position received a value from a scratch copy
    Overwrite { index: usize, value: i32 },
    /// A scan finished and found nothing to move
    ProbeComplete { index: usize },
}

/// One unit of observable progress.
///
/// The sequence has already been mutated when a record is handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub kind: StepKind,
    pub highlights: FxHashMap<usize, Role>,
}

impl StepRecord {
    /// A swap of `a` and `b`, highlighted as (Primary, Secondary)
    pub fn swap(a: usize, b: usize) -> Self {
        let mut highlights = FxHashMap::default();
        // With a == b the Primary highlight wins
        highlights.insert(b, Role::Secondary);
        highlights.insert(a, Role::Primary);
        StepRecord {
            kind: StepKind::Swap { a, b },
            highlights,
        }
    }

    pub fn overwrite(index: usize, value: i32, role: Role) -> Self {
        let mut highlights = FxHashMap::default();
        highlights.insert(index, role);
        StepRecord {
            kind: StepKind::Overwrite { index, value },
            highlights,
        }
    }

    /// A no-op step at `index`, still highlighted as if swapped with itself
    pub fn probe(index: usize) -> Self {
        let mut highlights = FxHashMap::default();
        highlights.insert(index, Role::Primary);
        StepRecord {
            kind: StepKind::ProbeComplete { index },
            highlights,
        }
    }

    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.highlights.get(&index).copied()
    }

    pub fn is_swap(&self) -> bool {
        matches!(self.kind, StepKind::Swap { .. })
    }

    /// Replay this step against a plain copy of the sequence
    pub fn apply(&self, values: &mut [i32]) {
        match self.kind {
            StepKind::Swap { a, b } => values.swap(a, b),
            StepKind::Overwrite { index, value } => values[index] = value,
            StepKind::ProbeComplete { .. } => {}
        }
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StepKind::Swap { a, b } => write!(f, "swap({}, {})", a, b),
            StepKind::Overwrite { index, value } => write!(f, "set({}) = {}", index, value),
            StepKind::ProbeComplete { index } => write!(f, "probe({})", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedes_polarity() {
        assert!(Direction::Ascending.precedes(1, 2));
        assert!(!Direction::Ascending.precedes(2, 2));
        assert!(Direction::Descending.precedes(2, 1));
        assert!(!Direction::Descending.precedes(2, 2));
    }

    #[test]
    fn test_is_sorted_allows_ties() {
        assert!(Direction::Ascending.is_sorted(&[1, 1, 2, 3]));
        assert!(Direction::Descending.is_sorted(&[3, 3, 2, 1]));
        assert!(!Direction::Descending.is_sorted(&[1, 2]));
        assert!(Direction::Ascending.is_sorted(&[]));
    }

    #[test]
    fn test_swap_highlights() {
        let step = StepRecord::swap(2, 3);
        assert_eq!(step.role_of(2), Some(Role::Primary));
        assert_eq!(step.role_of(3), Some(Role::Secondary));
        assert_eq!(step.role_of(0), None);

        let self_swap = StepRecord::swap(4, 4);
        assert_eq!(self_swap.highlights.len(), 1);
        assert_eq!(self_swap.role_of(4), Some(Role::Primary));
    }

    #[test]
    fn test_apply() {
        let mut values = vec![5, 3, 8];
        StepRecord::swap(0, 1).apply(&mut values);
        assert_eq!(values, vec![3, 5, 8]);
        StepRecord::overwrite(2, 1, Role::Primary).apply(&mut values);
        assert_eq!(values, vec![3, 5, 1]);
        StepRecord::probe(0).apply(&mut values);
        assert_eq!(values, vec![3, 5, 1]);
    }
}
