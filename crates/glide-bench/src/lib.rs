//! Benchmark profiles and utilities for the Glide solver.
//!
//! - [`warmed_state`]: search state after a fixed number of rounds
//! - [`spread_masks`]: deterministic present masks for dominance queries

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use glide_board::Puzzle;
use glide_core::PresentMask;
use glide_search::{Search, SearchConfig, SearchState, SearchStatus};

/// Search state of `puzzle` after at most `rounds` rounds.
///
/// Stops early if the search finishes.
pub fn warmed_state(puzzle: &Puzzle, rounds: u64) -> SearchState {
    let mut search = Search::new(&puzzle.board, &puzzle.catalog, SearchConfig::default())
        .expect("presets fit the search");
    for _ in 0..rounds {
        if search.step(&mut ()) != SearchStatus::Running {
            break;
        }
    }
    search.into_state()
}

/// `count` masks of `width` bits derived from `seed` with a simple
/// multiplicative hash.
pub fn spread_masks(width: u32, count: usize, seed: u64) -> Vec<PresentMask> {
    let full = PresentMask::full(width).bits() as u64;
    (0..count as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            PresentMask(((h >> 17) & full) as u32)
        })
        .collect()
}
