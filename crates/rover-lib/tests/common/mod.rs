//! Shared fixture helpers for rover-lib integration tests.

use std::path::PathBuf;

use rover_lib::{read_grid, Grid, GridReadOptions};

/// Path to the fixtures directory shared by library and CLI tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load a fixture grid by file name with default read options.
#[allow(dead_code)]
pub fn fixture_grid(name: &str) -> rover_lib::Result<Grid> {
    read_grid(&fixtures_dir().join(name), &GridReadOptions::default())
}

/// Deterministic pseudo-random grid for property-style checks.
///
/// Roughly one cell in `blocked_one_in` is impassable (none when zero); the
/// corners are always open.
#[allow(dead_code)]
pub fn generated_grid(width: usize, height: usize, seed: u64, blocked_one_in: u64) -> Grid {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };

    let mut cells = Vec::with_capacity(width * height);
    for index in 0..width * height {
        let roll = next();
        let corner = index == 0 || index == width * height - 1;
        if !corner && blocked_one_in != 0 && roll % blocked_one_in == 0 {
            cells.push(None);
        } else {
            cells.push(Some((roll % 10) as u32));
        }
    }
    Grid::from_elevations(width, height, cells).expect("generated grid is valid")
}
