//! Paint instructions for the bar view
//!
//! Turns the sequence plus the latest step into one [`BarPaint`] per value.
//! Nothing here touches the terminal, so the bars pane only has to map
//! shades to colors.

use crate::engine::{Role, StepRecord};
use crate::sequence::Sequence;

/// Number of background shades bars cycle through
pub const GRADIENT_BANDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Un-highlighted bar, band `index % GRADIENT_BANDS`
    Band(usize),
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarPaint {
    pub index: usize,
    pub value: i32,
    /// Height above the sequence minimum
    pub height: u64,
    pub shade: Shade,
}

/// Build paint instructions for every position.
///
/// Without a step (idle or finished) every bar gets its band shade.
pub fn paint(sequence: &Sequence, step: Option<&StepRecord>) -> Vec<BarPaint> {
    let min = sequence.min() as i64;
    sequence
        .values()
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let shade = match step.and_then(|s| s.role_of(index)) {
                Some(Role::Primary) => Shade::Primary,
                Some(Role::Secondary) => Shade::Secondary,
                None => Shade::Band(index % GRADIENT_BANDS),
            };
            BarPaint {
                index,
                value,
                height: (value as i64 - min).max(0) as u64,
                shade,
            }
        })
        .collect()
}

impl Shade {
    fn strength(self) -> u8 {
        match self {
            Shade::Primary => 2,
            Shade::Secondary => 1,
            Shade::Band(_) => 0,
        }
    }
}

/// Squeeze `paints` into at most `columns` bars.
///
/// Each column covers a contiguous run of positions, takes the tallest bar
/// of the run and the strongest highlight in it, so no highlight is lost
/// when the list is wider than the pane. Lists that already fit are
/// returned unchanged.
pub fn fit_to_width(paints: &[BarPaint], columns: usize) -> Vec<BarPaint> {
    let len = paints.len();
    if columns == 0 || len <= columns {
        return paints.to_vec();
    }

    (0..columns)
        .map(|column| {
            let start = column * len / columns;
            let end = ((column + 1) * len / columns).max(start + 1);
            let run = &paints[start..end];

            let tallest = run
                .iter()
                .max_by_key(|p| p.height)
                .copied()
                .unwrap_or(paints[start]);
            let shade = run
                .iter()
                .map(|p| p.shade)
                .max_by_key(|shade| shade.strength())
                .filter(|shade| shade.strength() > 0)
                .unwrap_or(Shade::Band(column % GRADIENT_BANDS));

            BarPaint {
                index: start,
                value: tallest.value,
                height: tallest.height,
                shade,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_frame_uses_bands() {
        let seq = Sequence::new(vec![10, 30, 20, 40]);
        let bars = paint(&seq, None);
        let shades: Vec<Shade> = bars.iter().map(|b| b.shade).collect();
        assert_eq!(
            shades,
            vec![Shade::Band(0), Shade::Band(1), Shade::Band(2), Shade::Band(0)]
        );
        let heights: Vec<u64> = bars.iter().map(|b| b.height).collect();
        assert_eq!(heights, vec![0, 20, 10, 30]);
    }

    #[test]
    fn test_step_highlights_override_bands() {
        let seq = Sequence::new(vec![1, 2, 3]);
        let step = StepRecord::swap(2, 0);
        let bars = paint(&seq, Some(&step));
        assert_eq!(bars[2].shade, Shade::Primary);
        assert_eq!(bars[0].shade, Shade::Secondary);
        assert_eq!(bars[1].shade, Shade::Band(1));
    }

    #[test]
    fn test_fit_keeps_short_lists() {
        let seq = Sequence::new(vec![3, 1, 2]);
        let bars = paint(&seq, None);
        assert_eq!(fit_to_width(&bars, 10), bars);
    }

    #[test]
    fn test_fit_merges_columns_and_keeps_highlights() {
        let values: Vec<i32> = (0..100).collect();
        let seq = Sequence::new(values);
        let step = StepRecord::swap(99, 3);
        let bars = fit_to_width(&paint(&seq, Some(&step)), 78);

        assert_eq!(bars.len(), 78);
        assert_eq!(bars[77].shade, Shade::Primary);
        assert_eq!(bars[77].height, 99);
        assert_eq!(bars[3].shade, Shade::Secondary);
        assert!(bars
            .iter()
            .filter(|b| !matches!(b.shade, Shade::Band(_)))
            .all(|b| b.index <= 3 || b.index >= 98));
    }

    #[test]
    fn test_fit_prefers_primary_over_secondary() {
        let seq = Sequence::new(vec![5, 4, 3, 2]);
        let step = StepRecord::swap(1, 0);
        let bars = fit_to_width(&paint(&seq, Some(&step)), 2);
        assert_eq!(bars[0].shade, Shade::Primary);
        assert_eq!(bars[0].height, 3);
        assert_eq!(bars[1].shade, Shade::Band(1));
    }
}
