use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::board::{Board, TileSpec};
use crate::glue::{Glue, BLANK_GLUES};
use crate::types::{Direction, Pos};

/// Deterministic RNG for a given seed (PCG 64-bit).
#[inline]
pub fn rng_for_seed(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Parameters for [`populate_random`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomFill {
    pub tiles: usize,
    pub fixed: usize,
    /// Probability that any one edge of a mobile tile carries a glue.
    pub glue_density: f64,
    /// Number of distinct glue symbols drawn from (1..=11).
    pub alphabet: usize,
}

impl Default for RandomFill {
    fn default() -> Self {
        Self {
            tiles: 12,
            fixed: 4,
            glue_density: 0.3,
            alphabet: 2,
        }
    }
}

const PALETTE: [&str; 6] = ["#3498db", "#e74c3c", "#2ecc71", "#f1c40f", "#9b59b6", "#1abc9c"];

/// Scatter fixed and mobile tiles over free cells. Deterministic for a given
/// RNG state. Returns how many tiles were placed (fewer if the board fills up).
pub fn populate_random<R: Rng>(board: &mut Board, rng: &mut R, fill: RandomFill) -> usize {
    let mut free: Vec<Pos> = (0..board.height() as i32)
        .flat_map(|y| (0..board.width() as i32).map(move |x| Pos::new(x, y)))
        .filter(|&p| board.occupant(p).is_none())
        .collect();
    free.shuffle(rng);

    let alphabet = &Glue::SYMBOLS[..fill.alphabet.clamp(1, Glue::SYMBOLS.len())];
    let density = fill.glue_density.clamp(0.0, 1.0);
    let mut cells = free.into_iter();
    let mut placed = 0;

    for pos in cells.by_ref().take(fill.fixed) {
        if board.place_fixed(pos, None, None).is_ok() {
            placed += 1;
        }
    }
    for pos in cells.take(fill.tiles) {
        let mut glues = BLANK_GLUES;
        for dir in Direction::all() {
            if rng.gen_bool(density) {
                if let Some(&g) = alphabet.choose(rng) {
                    glues[dir.index()] = g;
                }
            }
        }
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        if board.place_tile(TileSpec::new(pos.x, pos.y).with_glues(glues).with_color(color)).is_ok() {
            placed += 1;
        }
    }
    placed
}
