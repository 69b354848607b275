use crate::cell::Coord;
use crate::error::{Error, MissingEndpoint, Result};
use crate::path::Predecessors;
use crate::pathing_grid::PathingGrid;
use core::fmt;
use core::str::FromStr;
use log::{info, warn};
use std::time::{Duration, Instant};

pub mod astar;
pub mod bfs;

use astar::AstarSolver;
use bfs::BfsSolver;

/// Returned by the observer after every expansion step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The target was expanded and the path was reconstructed.
    Found,
    /// The frontier ran dry without reaching the target.
    NoPath,
    /// The observer asked to stop before the search finished.
    Cancelled,
}

/// Everything a single run produces. The path runs from source to target, both included, and is
/// empty unless the outcome is [Outcome::Found].
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub path: Vec<Coord>,
    pub predecessors: Predecessors,
    /// Number of cells taken off the frontier, the target included.
    pub expansions: usize,
    pub elapsed: Duration,
}

impl SearchResult {
    pub(crate) fn new(
        outcome: Outcome,
        path: Vec<Coord>,
        predecessors: Predecessors,
        expansions: usize,
    ) -> SearchResult {
        SearchResult {
            outcome,
            path,
            predecessors,
            expansions,
            elapsed: Duration::ZERO,
        }
    }
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }
    pub fn cancelled(&self) -> bool {
        self.outcome == Outcome::Cancelled
    }
    /// Number of moves along the path, [None] unless a path was found.
    pub fn cost(&self) -> Option<usize> {
        if self.found() {
            Some(self.path.len() - 1)
        } else {
            None
        }
    }
}

/// A search algorithm over a [PathingGrid]. Implementors provide the expansion loop in
/// [explore](GridSolver::explore); validation, timing and logging are shared.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Runs the search from `start` to `goal`, tagging cells as it goes and calling `on_step`
    /// once per expanded cell. Both endpoints must be in bounds.
    fn explore<F>(
        &self,
        grid: &mut PathingGrid,
        start: Coord,
        goal: Coord,
        on_step: &mut F,
    ) -> SearchResult
    where
        F: FnMut(&PathingGrid) -> Step;

    /// Clears the tags of any previous run and times a single exploration. A barrier endpoint
    /// yields [Outcome::NoPath] without expanding anything.
    fn search<F>(
        &self,
        grid: &mut PathingGrid,
        start: Coord,
        goal: Coord,
        mut on_step: F,
    ) -> Result<SearchResult>
    where
        F: FnMut(&PathingGrid) -> Step,
    {
        grid.cell(start)?;
        grid.cell(goal)?;
        grid.reset_transient();
        info!("{} search from {} to {}", self.name(), start, goal);
        if !grid.can_move_to(&start) || !grid.can_move_to(&goal) {
            info!("{} search skipped: an endpoint is a barrier", self.name());
            return Ok(SearchResult::new(
                Outcome::NoPath,
                Vec::new(),
                Predecessors::default(),
                0,
            ));
        }
        let started = Instant::now();
        let mut result = self.explore(grid, start, goal, &mut on_step);
        result.elapsed = started.elapsed();
        info!(
            "{} search finished: {:?} after {} expansions in {:?}",
            self.name(),
            result.outcome,
            result.expansions,
            result.elapsed
        );
        Ok(result)
    }

    /// Searches between the grid's tagged Source and Target cells.
    fn search_tagged<F>(&self, grid: &mut PathingGrid, on_step: F) -> Result<SearchResult>
    where
        F: FnMut(&PathingGrid) -> Step,
    {
        let (start, goal) = match (grid.source(), grid.target()) {
            (Some(start), Some(goal)) => (start, goal),
            (None, _) => {
                warn!("{} search requested without a source", self.name());
                return Err(Error::InvalidRunState(MissingEndpoint::Source));
            }
            (_, None) => {
                warn!("{} search requested without a target", self.name());
                return Err(Error::InvalidRunState(MissingEndpoint::Target));
            }
        };
        self.search(grid, start, goal, on_step)
    }

    /// Headless path query: runs to completion without observation and returns the path if one
    /// exists.
    fn get_path_single_goal(
        &self,
        grid: &mut PathingGrid,
        start: Coord,
        goal: Coord,
    ) -> Option<Vec<Coord>> {
        self.search(grid, start, goal, |_| Step::Continue)
            .ok()
            .filter(SearchResult::found)
            .map(|result| result.path)
    }
}

/// Selects which algorithm a host runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    AStar,
    /// Breadth-first search, historically labelled Dijkstra's algorithm; with unit edge costs the
    /// two return paths of the same length.
    #[doc(alias = "Dijkstra")]
    Bfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::AStar, Algorithm::Bfs];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::AStar => write!(f, "A*"),
            Algorithm::Bfs => write!(f, "BFS"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            "bfs" | "dijkstra" => Ok(Algorithm::Bfs),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Runs `algorithm` between the grid's Source and Target cells, calling `on_step` after every
/// expansion. Fails with [Error::InvalidRunState] if either endpoint is missing.
pub fn run_search<F>(grid: &mut PathingGrid, algorithm: Algorithm, on_step: F) -> Result<SearchResult>
where
    F: FnMut(&PathingGrid) -> Step,
{
    match algorithm {
        Algorithm::AStar => AstarSolver::new().search_tagged(grid, on_step),
        Algorithm::Bfs => BfsSolver.search_tagged(grid, on_step),
    }
}
