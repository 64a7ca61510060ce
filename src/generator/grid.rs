use rand::Rng;
use thiserror::Error;

use crate::{
    models::{Grid, Placement, Position},
    utils::letters::get_cumulative_distribution,
};

/// Grid edge length; grids are always square
pub const GRID_SIZE: usize = 6;

/// Placement attempts before giving up on a word
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 200;

/// The 8 straight-line directions a word can be laid out in
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),   // Right
    (0, -1),  // Left
    (1, 0),   // Down
    (-1, 0),  // Up
    (1, 1),   // Down-Right
    (1, -1),  // Down-Left
    (-1, 1),  // Up-Right
    (-1, -1), // Up-Left
];

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("cannot place an empty word")]
    EmptyWord,
    #[error("word '{word}' has {len} letters, grid fits at most {max}")]
    WordTooLong { word: String, len: usize, max: usize },
    #[error("no placement found for '{word}' after {attempts} attempts")]
    AttemptsExhausted { word: String, attempts: usize },
}

/// A fully filled grid together with the path of the hidden word
#[derive(Debug, Clone)]
pub struct PlacedGrid {
    pub grid: Grid,
    pub placement: Placement,
}

/// Generates one playable grid per answer word: the word is written along a
/// straight 8-way path and every remaining cell gets a weighted random letter.
pub struct GridGenerator {
    max_attempts: usize,
    cumulative_dist: Vec<(char, f32)>,
    dist_total: f32,
}

impl GridGenerator {
    pub fn new(max_attempts: usize) -> Self {
        let cumulative_dist = get_cumulative_distribution();
        let dist_total = cumulative_dist.last().map(|(_, total)| *total).unwrap_or(0.0);

        Self {
            max_attempts,
            cumulative_dist,
            dist_total,
        }
    }

    /// Generate a 6x6 grid hiding `word` along one of the 8 directions.
    ///
    /// `word` must already be trimmed and lowercased. The returned placement
    /// lists the path coordinates in word order; a word that cannot be placed
    /// is an error, never a grid with an empty path.
    pub fn generate(&self, word: &str, rng: &mut impl Rng) -> Result<PlacedGrid, PlacementError> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Err(PlacementError::EmptyWord);
        }
        if letters.len() > GRID_SIZE {
            return Err(PlacementError::WordTooLong {
                word: word.to_string(),
                len: letters.len(),
                max: GRID_SIZE,
            });
        }

        let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; GRID_SIZE]; GRID_SIZE];

        let placement = self.place_word(&letters, &mut cells, rng).ok_or_else(|| {
            PlacementError::AttemptsExhausted {
                word: word.to_string(),
                attempts: self.max_attempts,
            }
        })?;

        // Fill every cell the path did not claim
        let mut grid = Vec::with_capacity(GRID_SIZE);
        for row in cells {
            let mut filled = Vec::with_capacity(GRID_SIZE);
            for cell in row {
                match cell {
                    Some(letter) => filled.push(letter),
                    None => filled.push(self.random_letter(rng)),
                }
            }
            grid.push(filled);
        }

        Ok(PlacedGrid { grid, placement })
    }

    /// Try up to `max_attempts` random direction + start combinations and
    /// write the word into the first one that fits.
    fn place_word(
        &self,
        letters: &[char],
        cells: &mut [Vec<Option<char>>],
        rng: &mut impl Rng,
    ) -> Option<Placement> {
        for _ in 0..self.max_attempts {
            let (dr, dc) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];

            let starts = valid_starts(letters.len(), dr, dc);
            if starts.is_empty() {
                // Direction cannot host the word at any offset, spend the attempt
                continue;
            }

            let (row, col) = starts[rng.random_range(0..starts.len())];
            let mut path = Vec::with_capacity(letters.len());
            for (k, letter) in letters.iter().enumerate() {
                let r = (row + k as isize * dr) as usize;
                let c = (col + k as isize * dc) as usize;
                cells[r][c] = Some(*letter);
                path.push(Position { row: r, col: c });
            }

            return Some(Placement { path });
        }

        None
    }

    fn random_letter(&self, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * self.dist_total;

        for (letter, cumulative) in &self.cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'e' // Fallback
    }
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEMENT_ATTEMPTS)
    }
}

/// Starting cells from which a word of `len` letters stays in bounds when
/// walking in direction `(dr, dc)`. Closed-form check of the final cell only.
fn valid_starts(len: usize, dr: isize, dc: isize) -> Vec<(isize, isize)> {
    let size = GRID_SIZE as isize;
    let steps = len as isize - 1;

    let mut starts = Vec::new();
    for r in 0..size {
        for c in 0..size {
            let last_r = r + steps * dr;
            let last_c = c + steps * dc;
            if (0..size).contains(&last_r) && (0..size).contains(&last_c) {
                starts.push((r, c));
            }
        }
    }

    starts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_path_spells_word_on_grid() {
        let generator = GridGenerator::default();

        for seed in 0..50 {
            let placed = generator.generate("cat", &mut rng(seed)).unwrap();
            assert_eq!(placed.placement.path.len(), 3);

            let spelled: String = placed
                .placement
                .path
                .iter()
                .map(|pos| placed.grid[pos.row][pos.col])
                .collect();
            assert_eq!(spelled, "cat");
        }
    }

    #[test]
    fn test_path_is_straight_canonical_line() {
        let generator = GridGenerator::default();

        for seed in 0..50 {
            let placed = generator.generate("stream", &mut rng(seed)).unwrap();
            let path = &placed.placement.path;

            let dr = path[1].row as isize - path[0].row as isize;
            let dc = path[1].col as isize - path[0].col as isize;
            assert!(
                DIRECTIONS.contains(&(dr, dc)),
                "step ({}, {}) is not a unit direction",
                dr,
                dc
            );

            // Every consecutive step uses the same offset
            for window in path.windows(2) {
                assert_eq!(window[1].row as isize - window[0].row as isize, dr);
                assert_eq!(window[1].col as isize - window[0].col as isize, dc);
            }
        }
    }

    #[test]
    fn test_path_in_bounds_and_distinct() {
        let generator = GridGenerator::default();

        for seed in 0..50 {
            let placed = generator.generate("puzzle", &mut rng(seed)).unwrap();

            for pos in &placed.placement.path {
                assert!(pos.row < GRID_SIZE);
                assert!(pos.col < GRID_SIZE);
            }

            let mut seen = std::collections::HashSet::new();
            for pos in &placed.placement.path {
                assert!(seen.insert((pos.row, pos.col)), "path revisits a cell");
            }
        }
    }

    #[test]
    fn test_every_cell_is_a_lowercase_letter() {
        let generator = GridGenerator::default();
        let placed = generator.generate("dog", &mut rng(3)).unwrap();

        assert_eq!(placed.grid.len(), GRID_SIZE);
        for row in &placed.grid {
            assert_eq!(row.len(), GRID_SIZE);
            for &cell in row {
                assert!(cell.is_ascii_lowercase(), "cell '{}' is not a letter", cell);
            }
        }
    }

    #[test]
    fn test_full_length_word_always_places() {
        // A 6-letter word fits every direction at some offset, so placement
        // must never run out of attempts
        let generator = GridGenerator::default();

        for seed in 0..200 {
            assert!(generator.generate("planet", &mut rng(seed)).is_ok());
        }
    }

    #[test]
    fn test_single_letter_word() {
        let generator = GridGenerator::default();
        let placed = generator.generate("a", &mut rng(9)).unwrap();

        assert_eq!(placed.placement.path.len(), 1);
        let pos = &placed.placement.path[0];
        assert_eq!(placed.grid[pos.row][pos.col], 'a');
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let generator = GridGenerator::default();
        let result = generator.generate("", &mut rng(0));
        assert!(matches!(result, Err(PlacementError::EmptyWord)));
    }

    #[test]
    fn test_oversized_word_is_rejected() {
        let generator = GridGenerator::default();
        let result = generator.generate("elephant", &mut rng(0));
        assert!(matches!(
            result,
            Err(PlacementError::WordTooLong { len: 8, .. })
        ));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let generator = GridGenerator::default();

        let first = generator.generate("tiger", &mut rng(42)).unwrap();
        let second = generator.generate("tiger", &mut rng(42)).unwrap();

        assert_eq!(first.grid, second.grid);
        assert_eq!(first.placement.path, second.placement.path);
    }

    #[test]
    fn test_valid_starts_full_length_diagonal() {
        // A 6-letter word on the down-right diagonal has exactly one start
        let starts = valid_starts(6, 1, 1);
        assert_eq!(starts, vec![(0, 0)]);
    }

    #[test]
    fn test_valid_starts_every_direction_nonempty() {
        for len in 1..=GRID_SIZE {
            for (dr, dc) in DIRECTIONS {
                assert!(
                    !valid_starts(len, dr, dc).is_empty(),
                    "length {} has no start in direction ({}, {})",
                    len,
                    dr,
                    dc
                );
            }
        }
    }
}
