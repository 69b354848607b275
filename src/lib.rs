//! # grid_search
//!
//! Shortest path search on a rectangular grid of free and blocked cells with unit edge costs
//! and a 4-connected ([von Neumann](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood))
//! neighbourhood. Two algorithms are provided so their behaviour can be compared side by side:
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) and plain
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search).
//!
//! Both algorithms tag the cells they touch as open, closed or path on the [PathingGrid] and call
//! back into the host after every expansion, so a front-end can animate the search or cancel it
//! without the engine knowing anything about rendering.
//!
//! ```
//! use grid_search::{run_search, Algorithm, CellState, Coord, PathingGrid, Step};
//!
//! let mut grid = PathingGrid::new(5, 5);
//! grid.set_state(0, 0, CellState::Source).unwrap();
//! grid.set_state(4, 4, CellState::Target).unwrap();
//! let result = run_search(&mut grid, Algorithm::AStar, |_| Step::Continue).unwrap();
//! assert!(result.found());
//! assert_eq!(result.path.len(), 9);
//! assert_eq!(result.path[0], Coord::new(0, 0));
//! ```
pub mod cell;
pub mod error;
pub mod heuristic;
pub mod path;
pub mod pathing_grid;
pub mod session;
pub mod solver;

pub use cell::{Cell, CellState, Coord};
pub use error::{Error, MissingEndpoint, Result};
pub use pathing_grid::PathingGrid;
pub use solver::{run_search, Algorithm, GridSolver, Outcome, SearchResult, Step};

/// Cost of moving between two orthogonally adjacent cells.
pub const UNIT_COST: usize = 1;

/// Inline capacity of neighbour buffers, the size of the von Neumann neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Row and column offsets in the order neighbours are generated: down, up, right, left.
/// Ties between equally good cells are broken by this order, which keeps every run
/// reproducible.
pub const NEIGHBOUR_ORDER: [(isize, isize); N_SMALLVEC_SIZE] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
