use indexmap::map::Entry::Vacant;
use log::debug;
use std::collections::VecDeque;

use crate::cell::{CellState, Coord};
use crate::path::{reconstruct, Link, Predecessors};
use crate::pathing_grid::PathingGrid;
use crate::solver::{GridSolver, Outcome, SearchResult, Step};
use crate::UNIT_COST;

/// Breadth-first search. Every move costs the same, so the first time the target is dequeued it
/// has been reached along a shortest path; this is also what Dijkstra's algorithm would return on
/// this grid.
#[doc(alias = "DijkstraSolver")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn explore<F>(
        &self,
        grid: &mut PathingGrid,
        start: Coord,
        goal: Coord,
        on_step: &mut F,
    ) -> SearchResult
    where
        F: FnMut(&PathingGrid) -> Step,
    {
        // Cells enter the predecessor map when they are enqueued, which doubles as the visited set.
        let mut parents = Predecessors::with_root(start);
        let mut frontier = VecDeque::from([0]);
        let mut expansions = 0;
        while let Some(index) = frontier.pop_front() {
            let Some((&node, &Link { cost, .. })) = parents.get_index(index) else {
                continue;
            };
            expansions += 1;
            if node == goal {
                return match reconstruct(grid, &parents, &goal, on_step) {
                    Some(path) => SearchResult::new(Outcome::Found, path, parents, expansions),
                    None => SearchResult::new(Outcome::Cancelled, Vec::new(), parents, expansions),
                };
            }
            for successor in grid.neighbourhood_points(&node) {
                if let Vacant(e) = parents.entry(successor) {
                    frontier.push_back(e.index());
                    e.insert(Link {
                        parent: index,
                        cost: cost + UNIT_COST,
                    });
                    grid.mark(successor, CellState::Open);
                }
            }
            if node != start {
                grid.mark(node, CellState::Closed);
            }
            if on_step(grid) == Step::Cancel {
                debug!("BFS search cancelled after {} expansions", expansions);
                return SearchResult::new(Outcome::Cancelled, Vec::new(), parents, expansions);
            }
        }
        SearchResult::new(Outcome::NoPath, Vec::new(), parents, expansions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_start_goal() {
        let mut pathing_grid = PathingGrid::new(1, 1);
        let start = Coord::new(0, 0);
        let path = BfsSolver
            .get_path_single_goal(&mut pathing_grid, start, start)
            .unwrap();
        assert_eq!(path, vec![start]);
    }

    /// Ties are broken by the neighbour order (down, up, right, left), so on an open 3x3 board
    /// the search heads down the first column before turning right.
    #[test]
    fn deterministic_tie_breaking() {
        let mut pathing_grid: PathingGrid = "S..\n...\n..G".parse().unwrap();
        let result = BfsSolver
            .search_tagged(&mut pathing_grid, |_| Step::Continue)
            .unwrap();
        assert_eq!(
            result.path,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(2, 1),
                Coord::new(2, 2)
            ]
        );
        assert_eq!(result.expansions, 9);
        assert_eq!(result.predecessors.get(&Coord::new(1, 1)), Some(Coord::new(1, 0)));
        assert_eq!(result.predecessors.cost(&Coord::new(2, 2)), Some(4));
    }

    #[test]
    fn straight_corridor() {
        let mut pathing_grid: PathingGrid = "S........G".parse().unwrap();
        let result = BfsSolver
            .search_tagged(&mut pathing_grid, |_| Step::Continue)
            .unwrap();
        assert_eq!(result.cost(), Some(9));
        let expected = (0..10).map(|col| Coord::new(0, col)).collect::<Vec<_>>();
        assert_eq!(result.path, expected);
    }

    #[test]
    fn cells_are_discovered_once() {
        let mut pathing_grid = PathingGrid::new(6, 6);
        pathing_grid.set_state(0, 0, CellState::Source).unwrap();
        pathing_grid.set_state(5, 5, CellState::Target).unwrap();
        let result = BfsSolver
            .search_tagged(&mut pathing_grid, |_| Step::Continue)
            .unwrap();
        // The target is the last cell of the last layer, so the whole board is expanded once.
        assert_eq!(result.expansions, 36);
        assert_eq!(result.predecessors.len(), 36);
        assert_eq!(result.cost(), Some(10));
    }

    #[test]
    fn tags_after_unsuccessful_search() {
        let mut pathing_grid: PathingGrid = "S.#.\n..#G".parse().unwrap();
        let result = BfsSolver
            .search_tagged(&mut pathing_grid, |_| Step::Continue)
            .unwrap();
        assert_eq!(result.outcome, Outcome::NoPath);
        assert_eq!(pathing_grid.to_string(), "Sx#.\nxx#G\n");
    }
}
