// Integration tests for the step engine

use proptest::prelude::*;
use sortty::engine::{
    replay, run_to_completion, Algorithm, Direction, StepKind, StepProducer, StepRecord,
};
use sortty::sequence::Sequence;

fn run(algorithm: Algorithm, direction: Direction, values: &[i32]) -> (Vec<StepRecord>, Vec<i32>) {
    let mut seq = Sequence::new(values.to_vec());
    let steps = run_to_completion(algorithm, direction, &mut seq);
    (steps, seq.values().to_vec())
}

fn inversions(values: &[i32]) -> usize {
    let mut count = 0;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] > values[j] {
                count += 1;
            }
        }
    }
    count
}

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)]
}

#[test]
fn test_bubble_walkthrough() {
    let mut seq = Sequence::new(vec![5, 3, 8, 1]);
    let mut states = Vec::new();
    let mut producer = Algorithm::Bubble.producer(Direction::Ascending, seq.len());
    while let Some(step) = producer.next_step(&mut seq) {
        states.push((step.kind, seq.values().to_vec()));
    }

    assert_eq!(
        states,
        vec![
            (StepKind::Swap { a: 0, b: 1 }, vec![3, 5, 8, 1]),
            (StepKind::Swap { a: 2, b: 3 }, vec![3, 5, 1, 8]),
            (StepKind::Swap { a: 1, b: 2 }, vec![3, 1, 5, 8]),
            (StepKind::Swap { a: 0, b: 1 }, vec![1, 3, 5, 8]),
        ]
    );
}

#[test]
fn test_short_lists_yield_no_steps() {
    for algorithm in Algorithm::ALL {
        for direction in [Direction::Ascending, Direction::Descending] {
            assert!(run(algorithm, direction, &[]).0.is_empty());
            assert!(run(algorithm, direction, &[7]).0.is_empty());
        }
    }
}

#[test]
fn test_pair_already_in_descending_order() {
    for algorithm in Algorithm::ALL {
        let (_, sorted) = run(algorithm, Direction::Descending, &[2, 1]);
        assert_eq!(sorted, vec![2, 1], "{}", algorithm);
    }
    for algorithm in [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::CocktailShaker,
    ] {
        let (steps, _) = run(algorithm, Direction::Descending, &[2, 1]);
        assert!(steps.is_empty(), "{}", algorithm);
    }
}

#[test]
fn test_sorted_input_structural_minimum() {
    let sorted = [1, 2, 3, 4, 5, 6];

    assert!(run(Algorithm::CocktailShaker, Direction::Ascending, &sorted)
        .0
        .is_empty());
    assert!(run(Algorithm::Bubble, Direction::Ascending, &sorted).0.is_empty());
    assert!(run(Algorithm::Insertion, Direction::Ascending, &sorted)
        .0
        .is_empty());

    let (steps, _) = run(Algorithm::Selection, Direction::Ascending, &sorted);
    assert_eq!(steps.len(), sorted.len());
    assert!(steps.iter().all(|s| !s.is_swap()));

    // Merge writes back every value of every merged range: 5 + 5 + 6
    let (steps, _) = run(Algorithm::Merge, Direction::Ascending, &sorted);
    assert_eq!(steps.len(), 16);
}

#[test]
fn test_reverse_sorted_worst_case_counts() {
    let values: Vec<i32> = (0..10).rev().collect();
    let (steps, _) = run(Algorithm::Bubble, Direction::Ascending, &values);
    assert_eq!(steps.len(), 45);
    let (steps, _) = run(Algorithm::Insertion, Direction::Ascending, &values);
    assert_eq!(steps.len(), 45);
}

proptest! {
    #[test]
    fn prop_every_algorithm_sorts(
        values in prop::collection::vec(-50i32..50, 0..40),
        algorithm in algorithm_strategy(),
        direction in direction_strategy(),
    ) {
        let (steps, result) = run(algorithm, direction, &values);
        prop_assert!(direction.is_sorted(&result));
        prop_assert_eq!(replay(&values, &steps), result.clone());

        let mut expected = values.clone();
        expected.sort();
        let mut actual = result;
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_runs_are_deterministic(
        values in prop::collection::vec(0i32..20, 0..30),
        algorithm in algorithm_strategy(),
        direction in direction_strategy(),
    ) {
        let (first, _) = run(algorithm, direction, &values);
        let (second, _) = run(algorithm, direction, &values);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_direction_reversal_without_ties(
        set in prop::collection::hash_set(-1000i32..1000, 0..30),
        algorithm in algorithm_strategy(),
    ) {
        let values: Vec<i32> = set.into_iter().collect();
        let (_, mut ascending) = run(algorithm, Direction::Ascending, &values);
        let (_, descending) = run(algorithm, Direction::Descending, &values);
        ascending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn prop_adjacent_swap_sorts_step_per_inversion(
        values in prop::collection::vec(0i32..30, 0..30),
    ) {
        let expected = inversions(&values);
        prop_assert_eq!(run(Algorithm::Bubble, Direction::Ascending, &values).0.len(), expected);
        prop_assert_eq!(run(Algorithm::Insertion, Direction::Ascending, &values).0.len(), expected);
    }

    #[test]
    fn prop_highlights_stay_in_range(
        values in prop::collection::vec(0i32..100, 0..40),
        algorithm in algorithm_strategy(),
        direction in direction_strategy(),
    ) {
        let (steps, _) = run(algorithm, direction, &values);
        for step in &steps {
            prop_assert!(!step.highlights.is_empty());
            prop_assert!(step.highlights.keys().all(|&i| i < values.len()));
        }
    }
}
