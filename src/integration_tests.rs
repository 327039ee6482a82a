//! Integration tests for the land simulator
//! Runs full simulations with known seeds and checks them against the closed form

use crate::simulation::deck::{Deck, SimParams, SimulationError};
use crate::simulation::exact::hypergeometric;
use crate::simulation::report::{format_table, rows};
use crate::simulation::sampler::{simulate, Sampler};

#[test]
fn test_small_deck_with_seed_1() {
    let table = simulate(10, 4, 5, 1000, Some(1)).expect("parameters are valid");

    // Only 4 lands exist, so 5 lands in hand is impossible
    assert!(table.observed().all(|(lands, _)| lands <= 4));
    assert_eq!(table.count(5), 0);
    assert_eq!(table.total(), 1000);
}

#[test]
fn test_same_seed_produces_same_result() {
    let first = simulate(10, 4, 5, 1000, Some(1)).unwrap();
    let second = simulate(10, 4, 5, 1000, Some(1)).unwrap();

    assert_eq!(first, second, "Same seed should produce the same table");
    assert_eq!(
        format_table(&first, 1000, 5),
        format_table(&second, 1000, 5),
        "Same seed should produce the same text"
    );
}

#[test]
fn test_different_seeds_produce_different_results() {
    let first = simulate(100, 35, 7, 10_000, Some(111)).unwrap();
    let second = simulate(100, 35, 7, 10_000, Some(222)).unwrap();

    assert_ne!(first, second, "Different seeds should almost surely differ");
}

#[test]
fn test_estimate_close_to_exact() {
    let deck = Deck { size: 100, lands: 35 };
    let table = simulate(100, 35, 7, 200_000, Some(42)).unwrap();
    let exact = hypergeometric(deck, 7);

    for (lands, count) in table.iter() {
        let estimate = count as f64 / 200_000.0;
        assert!(
            (estimate - exact[lands]).abs() < 0.01,
            "lands={} estimate={} exact={}",
            lands,
            estimate,
            exact[lands]
        );
    }
}

#[test]
fn test_sweep_over_land_counts() {
    for land_count in 32..=38 {
        let table = simulate(100, land_count, 7, 20_000, Some(42)).unwrap();
        let rows = rows(&table, 20_000, 7);

        assert_eq!(table.total(), 20_000);
        assert!((rows[7].cumulative - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_parallel_run_with_larger_bound() {
    let params = SimParams {
        deck_size: 40,
        land_count: 17,
        hand_size: 10,
        trials: 150_000,
        seed: Some(5),
        max_hand_size: 10,
    }
    .validate()
    .unwrap();

    let table = Sampler::new(params).parallel(true).run();
    assert_eq!(table.hand_size(), 10);
    assert_eq!(table.total(), 150_000);
    assert_eq!(table, Sampler::new(params).run());
}

#[test]
fn test_errors_before_sampling() {
    let err = simulate(100, 101, 7, 10, Some(1)).unwrap_err();
    assert_eq!(
        err,
        SimulationError::InvalidParameter(
            "land_count must be between 0 and deck_size (100), got 101".to_string()
        )
    );
    assert_eq!(
        err.to_string(),
        "Invalid parameter: land_count must be between 0 and deck_size (100), got 101"
    );
}
