use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::{Cell, Grid};

// Random probes before falling back to scanning the free cells.
const RANDOM_PROBES: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Apple {
    pos: Cell,
}

impl Apple {
    pub const fn at(pos: Cell) -> Self {
        Self { pos }
    }

    /// Places an apple on a uniformly random cell not in `obstacles`.
    /// Returns `None` only when every cell of the grid is taken.
    pub fn spawn<R, I>(grid: Grid, obstacles: I, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = Cell>,
    {
        let banned: HashSet<Cell> = obstacles.into_iter().filter(|c| grid.contains(*c)).collect();
        if banned.len() >= grid.area() {
            return None;
        }

        for _ in 0..RANDOM_PROBES {
            let pos = grid.random_cell(rng);
            if !banned.contains(&pos) {
                return Some(Self { pos });
            }
        }

        let free: Vec<Cell> = grid.cells().filter(|c| !banned.contains(c)).collect();
        free.choose(rng).map(|&pos| Self { pos })
    }

    pub fn position(&self) -> Cell {
        self.pos
    }
}
