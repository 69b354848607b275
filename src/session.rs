//! Command-style entry points for a host application: editing cells the way a pointer would,
//! clearing the board and running the algorithms back to back.
use log::debug;

use crate::cell::{CellState, Coord};
use crate::error::Result;
use crate::pathing_grid::PathingGrid;
use crate::solver::{run_search, Algorithm, SearchResult, Step};

/// Side length of the square board a host starts with.
pub const DEFAULT_ROWS: usize = 30;

/// Results of running both algorithms on the same board.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub astar: SearchResult,
    /// [None] when the A* run was cancelled, which ends the whole comparison.
    pub bfs: Option<SearchResult>,
}

/// Owns the grid a host edits and searches. Holding the grid behind `&mut self` for the length of
/// a run rules out overlapping runs on the same board.
#[derive(Clone, Debug)]
pub struct Session {
    grid: PathingGrid,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(DEFAULT_ROWS, DEFAULT_ROWS)
    }
}

impl Session {
    pub fn new(rows: usize, cols: usize) -> Session {
        Session {
            grid: PathingGrid::new(rows, cols),
        }
    }
    pub fn from_grid(grid: PathingGrid) -> Session {
        Session { grid }
    }
    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn edit_cell(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        self.grid.set_state(row, col, state)
    }

    /// Primary-button edit: the first free click places the source, the next one the target, and
    /// later clicks place barriers. Clicking the source or target again leaves it alone. Returns
    /// the state the cell ends up in.
    pub fn paint(&mut self, row: usize, col: usize) -> Result<CellState> {
        let current = self.grid.get(row, col)?.state();
        let coord = Coord::new(row, col);
        let (source, target) = (self.grid.source(), self.grid.target());
        let state = if source.is_none() && target != Some(coord) {
            CellState::Source
        } else if target.is_none() && source != Some(coord) {
            CellState::Target
        } else if source != Some(coord) && target != Some(coord) {
            CellState::Barrier
        } else {
            return Ok(current);
        };
        debug!("Painting {} as {:?}", coord, state);
        self.grid.set_state(row, col, state)?;
        Ok(state)
    }

    /// Secondary-button edit: reverts a cell to Free, forgetting it as source or target.
    pub fn erase(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid.set_state(row, col, CellState::Free)
    }

    /// Full reset of the board.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
    }

    pub fn run_search<F>(&mut self, algorithm: Algorithm, on_step: F) -> Result<SearchResult>
    where
        F: FnMut(&PathingGrid) -> Step,
    {
        run_search(&mut self.grid, algorithm, on_step)
    }

    /// Runs A* and then BFS between the current endpoints, clearing the search tags in between.
    /// The board is left showing the BFS run. Cancelling the A* run skips BFS.
    pub fn compare<F>(&mut self, mut on_step: F) -> Result<Comparison>
    where
        F: FnMut(Algorithm, &PathingGrid) -> Step,
    {
        let astar = run_search(&mut self.grid, Algorithm::AStar, |grid| {
            on_step(Algorithm::AStar, grid)
        })?;
        if astar.cancelled() {
            debug!("Comparison stopped after the A* run was cancelled");
            return Ok(Comparison { astar, bfs: None });
        }
        self.grid.reset_transient();
        let bfs = run_search(&mut self.grid, Algorithm::Bfs, |grid| {
            on_step(Algorithm::Bfs, grid)
        })?;
        Ok(Comparison {
            astar,
            bfs: Some(bfs),
        })
    }

    /// Whether the target can be reached from the source, answered from the connected
    /// components. [None] while either endpoint is missing.
    pub fn reachable(&mut self) -> Option<bool> {
        self.grid.update();
        let (source, target) = (self.grid.source()?, self.grid.target()?);
        Some(self.grid.reachable(&source, &target))
    }
}
