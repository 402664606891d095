//! Pure chain-reaction grid simulation.
//!
//! No I/O and no knowledge of rooms or connections: `apply_move` takes a
//! board value and returns a new settled board plus an outcome summary.
//! Propagation is breadth-first over a FIFO work queue so the explosion
//! order is deterministic regardless of how deep a reaction cascades, and
//! the stack stays flat no matter how long the chain runs.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::error::GridError;
use super::value_object::PlayerId;

/// Board side length used by live games.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Maximum atoms a corner cell holds before exploding.
const CORNER_CAPACITY: u32 = 1;
/// Maximum atoms an edge cell holds before exploding.
const EDGE_CAPACITY: u32 = 2;
/// Maximum atoms an interior cell holds before exploding.
const INTERIOR_CAPACITY: u32 = 3;

/// A single grid cell: an atom count and its owning player, if any.
///
/// Invariant on settled boards: `owner` is `None` iff `atoms == 0`, and
/// `atoms` never exceeds the cell's positional capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub atoms: u32,
    pub owner: Option<PlayerId>,
}

/// Summary of a settled move: the distinct owners left on the board,
/// in row-major scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub owners: Vec<PlayerId>,
}

/// Maximum atoms a cell at the given position holds before exploding.
///
/// Corner cells (both coordinates on a boundary) hold 1, edge cells hold 2,
/// interior cells hold 3. Derived purely from position and board size.
pub fn capacity(row: usize, col: usize, size: usize) -> u32 {
    let row_edge = row == 0 || row == size - 1;
    let col_edge = col == 0 || col == size - 1;
    if row_edge && col_edge {
        CORNER_CAPACITY
    } else if row_edge || col_edge {
        EDGE_CAPACITY
    } else {
        INTERIOR_CAPACITY
    }
}

/// Fixed-size square grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Look up a cell by coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            Some(&self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Total atoms currently on the board.
    pub fn total_atoms(&self) -> u32 {
        self.cells.iter().map(|c| c.atoms).sum()
    }

    /// Distinct cell owners in row-major scan order.
    pub fn owners(&self) -> Vec<PlayerId> {
        let mut owners = Vec::new();
        for cell in &self.cells {
            if let Some(owner) = cell.owner
                && !owners.contains(&owner)
            {
                owners.push(owner);
            }
        }
        owners
    }

    /// Apply one move and resolve the full chain reaction.
    ///
    /// Copy-on-write: returns the settled board and the outcome, leaving
    /// `self` untouched. A work queue is seeded with the target cell and
    /// processed strictly FIFO. Each dequeued cell gains one atom and, if it
    /// was empty, becomes the acting player's. A cell pushed past its
    /// capacity resets to zero, loses its owner and enqueues every in-bounds
    /// orthogonal neighbour in up, down, left, right order.
    ///
    /// Termination: every explosion empties its cell and each enqueued
    /// increment consumes headroom bounded by the board's finite total
    /// capacity, so the queue always drains.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` - target coordinates outside the board
    /// * `GridError::CellOwnedByOther` - target cell owned by another player
    pub fn apply_move(
        &self,
        row: usize,
        col: usize,
        player: PlayerId,
    ) -> Result<(Board, MoveOutcome), GridError> {
        let size = self.size;
        if row >= size || col >= size {
            return Err(GridError::OutOfBounds { row, col, size });
        }
        let target = &self.cells[row * size + col];
        if let Some(owner) = target.owner
            && owner != player
        {
            return Err(GridError::CellOwnedByOther { row, col });
        }

        let mut next = self.clone();
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        queue.push_back((row, col));

        while let Some((r, c)) = queue.pop_front() {
            let cell = &mut next.cells[r * size + c];
            if cell.atoms == 0 {
                cell.owner = Some(player);
            }
            cell.atoms += 1;

            if cell.atoms > capacity(r, c, size) {
                cell.atoms = 0;
                cell.owner = None;

                // Neighbour order is the tie-break for propagation within
                // a reaction wave: up, down, left, right.
                if r > 0 {
                    queue.push_back((r - 1, c));
                }
                if r < size - 1 {
                    queue.push_back((r + 1, c));
                }
                if c > 0 {
                    queue.push_back((r, c - 1));
                }
                if c < size - 1 {
                    queue.push_back((r, c + 1));
                }
            }
        }

        let outcome = MoveOutcome {
            owners: next.owners(),
        };
        Ok((next, outcome))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
