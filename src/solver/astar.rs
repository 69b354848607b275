use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cell::{CellState, Coord};
use crate::heuristic::manhattan;
use crate::path::{reconstruct, Link, Predecessors};
use crate::pathing_grid::PathingGrid;
use crate::solver::{GridSolver, Outcome, SearchResult, Step};
use crate::UNIT_COST;

/// Frontier entry. The heap pops the smallest f-score first and, among equal f-scores, the entry
/// that was pushed first.
struct SmallestCostHolder {
    estimated_cost: usize,
    cost: usize,
    sequence: usize,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.sequence == other.sequence
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A* guided by the Manhattan distance, scaled by `heuristic_factor`. A factor above 1.0 turns
/// this into weighted A*, which tends to expand fewer cells but may return longer paths.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// The Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Coord, p2: &Coord) -> usize {
        (manhattan(p1, p2) as f32 * self.heuristic_factor) as usize
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
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
        let mut to_see = BinaryHeap::new();
        let mut sequence = 0;
        to_see.push(SmallestCostHolder {
            estimated_cost: self.heuristic(&start, &goal),
            cost: 0,
            sequence,
            index: 0,
        });
        let mut parents = Predecessors::with_root(start);
        let mut expansions = 0;
        while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
            let Some((&node, link)) = parents.get_index(index) else {
                continue;
            };
            // A cell is pushed again whenever a cheaper route to it turns up. Only the entry
            // carrying the current best cost is expanded, the others are discarded.
            if cost > link.cost {
                continue;
            }
            expansions += 1;
            if node == goal {
                return match reconstruct(grid, &parents, &goal, on_step) {
                    Some(path) => SearchResult::new(Outcome::Found, path, parents, expansions),
                    None => SearchResult::new(Outcome::Cancelled, Vec::new(), parents, expansions),
                };
            }
            let new_cost = cost + UNIT_COST;
            for successor in grid.neighbourhood_points(&node) {
                let n; // index for successor
                match parents.entry(successor) {
                    Vacant(e) => {
                        n = e.index();
                        e.insert(Link {
                            parent: index,
                            cost: new_cost,
                        });
                    }
                    Occupied(mut e) => {
                        if e.get().cost > new_cost {
                            n = e.index();
                            e.insert(Link {
                                parent: index,
                                cost: new_cost,
                            });
                        } else {
                            continue;
                        }
                    }
                }
                sequence += 1;
                to_see.push(SmallestCostHolder {
                    estimated_cost: new_cost + self.heuristic(&successor, &goal),
                    cost: new_cost,
                    sequence,
                    index: n,
                });
                grid.mark(successor, CellState::Open);
            }
            if node != start {
                grid.mark(node, CellState::Closed);
            }
            if on_step(grid) == Step::Cancel {
                debug!("A* search cancelled after {} expansions", expansions);
                return SearchResult::new(Outcome::Cancelled, Vec::new(), parents, expansions);
            }
        }
        SearchResult::new(Outcome::NoPath, Vec::new(), parents, expansions)
    }
}
