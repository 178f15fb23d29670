//! Helpers shared by the integration tests

#![allow(dead_code)]

use dfs_lineup::{PlayerRecord, Position, RosterRules};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn player(name: &str, positions: &[Position], points: f64, salary: f64) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        positions: positions.to_vec(),
        team: String::new(),
        projected_points: points,
        salary,
    }
}

/// Best achievable total by trying every subset.
pub fn brute_force_best(pool: &[PlayerRecord], rules: &RosterRules, cap: f64) -> Option<f64> {
    let mut best: Option<f64> = None;
    for mask in 0u32..(1 << pool.len()) {
        let chosen: Vec<&PlayerRecord> = pool
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << *i) != 0)
            .map(|(_, r)| r)
            .collect();
        let salary: f64 = chosen.iter().map(|r| r.salary).sum();
        if salary > cap || !rules.is_satisfied_by(&chosen) {
            continue;
        }
        let points: f64 = chosen.iter().map(|r| r.projected_points).sum();
        if best.map_or(true, |b| points > b) {
            best = Some(points);
        }
    }
    best
}

/// Seeded random pool whose players take one of `shapes` as their positions.
pub fn synthetic_pool(seed: u64, size: usize, shapes: &[&[Position]]) -> Vec<PlayerRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let positions = shapes[rng.random_range(0..shapes.len())];
            let points = rng.random_range(0..400u32) as f64 / 10.0;
            let salary = 3000.0 + 100.0 * rng.random_range(0..=60u32) as f64;
            player(&format!("P{}", i), positions, points, salary)
        })
        .collect()
}
