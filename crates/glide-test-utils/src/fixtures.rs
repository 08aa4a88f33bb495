//! Board fixtures.
//!
//! - [`corridor`]: a one-row absorbing board with presents between start
//!   and target.
//! - [`RandomBoard`]: seeded random layouts, parsed through the real
//!   layout parser so every generated board is valid.
//! - [`unique_temp_dir`]: a fresh scratch directory for checkpoint files.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use glide_board::{parse_layout, EdgeBehavior, Puzzle};
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `P`, then `presents` presents, then the target, walled on both ends.
pub fn corridor(presents: usize) -> Puzzle {
    let row = format!("#P{}X#", "$".repeat(presents));
    parse_layout(&[row.as_str()], &[], EdgeBehavior::Absorb)
        .expect("corridor layout is valid")
}

/// Create an empty directory under the system temp dir that no other test
/// uses.
pub fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("glide_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!("failed to create a unique temp dir under {}", base.display());
}

/// Parameters for a seeded random board.
#[derive(Clone, Debug)]
pub struct RandomBoard {
    pub rows: u32,
    pub cols: u32,
    pub presents: usize,
    /// Pairs of holes, each pair teleporting into each other.
    pub hole_pairs: usize,
    /// Probability that a remaining cell becomes a wall or tree.
    pub solid_ratio: f64,
    pub edge: EdgeBehavior,
}

impl RandomBoard {
    /// A small torus board with a handful of presents.
    pub fn small_torus(presents: usize) -> Self {
        Self {
            rows: 5,
            cols: 6,
            presents,
            hole_pairs: 1,
            solid_ratio: 0.2,
            edge: EdgeBehavior::Wrap,
        }
    }

    /// A small absorbing board.
    pub fn small_walled(presents: usize) -> Self {
        Self {
            edge: EdgeBehavior::Absorb,
            ..Self::small_torus(presents)
        }
    }

    /// Layout rows and hole connections for `seed`.
    pub fn layout(&self, seed: u64) -> (Vec<String>, Vec<(u32, u32)>) {
        let cell_count = (self.rows * self.cols) as usize;
        let special = 2 + self.presents + 2 * self.hole_pairs;
        assert!(
            special <= cell_count,
            "{special} special cells do not fit {cell_count} cells"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pool: Vec<usize> = (0..cell_count).collect();
        let mut take = |rng: &mut ChaCha8Rng| {
            let i = rng.random_range(0..pool.len());
            pool.swap_remove(i)
        };

        let mut grid = vec![' '; cell_count];
        grid[take(&mut rng)] = 'P';
        grid[take(&mut rng)] = 'X';
        for _ in 0..self.presents {
            grid[take(&mut rng)] = '$';
        }
        let mut connections = Vec::with_capacity(2 * self.hole_pairs);
        for _ in 0..self.hole_pairs {
            let a = take(&mut rng);
            let b = take(&mut rng);
            grid[a] = 'O';
            grid[b] = 'O';
            connections.push((a as u32, b as u32));
            connections.push((b as u32, a as u32));
        }
        for cell in grid.iter_mut().filter(|c| **c == ' ') {
            if rng.random_bool(self.solid_ratio) {
                *cell = if rng.random_bool(0.5) { '#' } else { 'T' };
            }
        }

        let rows = grid
            .chunks(self.cols as usize)
            .map(|row| row.iter().collect())
            .collect();
        (rows, connections)
    }

    /// Parse the layout for `seed`.
    pub fn generate(&self, seed: u64) -> Puzzle {
        let (rows, connections) = self.layout(seed);
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        parse_layout(&rows, &connections, self.edge).expect("generated layout is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_has_requested_presents() {
        let p = corridor(3);
        assert_eq!(p.catalog.len(), 3);
        assert_eq!(p.board.cols(), 7);
    }

    #[test]
    fn same_seed_same_board() {
        let params = RandomBoard::small_torus(3);
        assert_eq!(params.generate(7), params.generate(7));
        assert_eq!(params.generate(7).catalog.len(), 3);
    }

    #[test]
    fn seeds_produce_valid_boards() {
        let params = RandomBoard::small_walled(2);
        for seed in 0..50 {
            let p = params.generate(seed);
            assert_eq!(p.board.connections().count(), 2);
        }
    }
}
