use fxhash::FxBuildHasher;
use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;

use crate::cell::{CellState, Coord};
use crate::pathing_grid::PathingGrid;
use crate::solver::Step;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

/// How a cell was reached: the index of its predecessor in the map and the cost from the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link {
    pub parent: usize,
    pub cost: usize,
}

/// Predecessor map of a single run. Cells are kept in the order they were first discovered and
/// refer to their predecessor by index, so walking back from a cell is a chain of index lookups.
#[derive(Clone, Debug, Default)]
pub struct Predecessors {
    links: FxIndexMap<Coord, Link>,
}

impl Predecessors {
    pub(crate) fn with_root(root: Coord) -> Predecessors {
        let mut links = FxIndexMap::default();
        links.insert(
            root,
            Link {
                parent: NO_PARENT,
                cost: 0,
            },
        );
        Predecessors { links }
    }
    pub(crate) fn entry(&mut self, coord: Coord) -> Entry<'_, Coord, Link> {
        self.links.entry(coord)
    }
    pub(crate) fn get_index(&self, index: usize) -> Option<(&Coord, &Link)> {
        self.links.get_index(index)
    }

    /// The cell `coord` was reached from, or [None] for the source and for undiscovered cells.
    pub fn get(&self, coord: &Coord) -> Option<Coord> {
        let link = self.links.get(coord)?;
        self.links.get_index(link.parent).map(|(p, _)| *p)
    }
    /// Cost of the best known route from the source to `coord`.
    pub fn cost(&self, coord: &Coord) -> Option<usize> {
        self.links.get(coord).map(|link| link.cost)
    }
    pub fn contains(&self, coord: &Coord) -> bool {
        self.links.contains_key(coord)
    }
    /// Number of discovered cells, the source included.
    pub fn len(&self) -> usize {
        self.links.len()
    }
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
    /// Discovered cells paired with their predecessor, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<Coord>)> + '_ {
        self.links.iter().map(|(coord, link)| {
            (
                *coord,
                self.links.get_index(link.parent).map(|(p, _)| *p),
            )
        })
    }

    /// Walks from the cell at `index` back to the root and returns the route root first.
    pub(crate) fn route_from(&self, index: usize) -> Vec<Coord> {
        let mut path: Vec<Coord> =
            std::iter::successors(self.links.get_index(index), |(_, link)| {
                self.links.get_index(link.parent)
            })
            .map(|(coord, _)| *coord)
            .collect();
        path.reverse();
        path
    }
}

/// Rebuilds the route from the source to `target`, both endpoints included.
///
/// Every cell strictly between the endpoints is tagged as Path, and `on_step` is called after each
/// tag so the reveal can be animated. Returns [None] as soon as `on_step` asks to cancel, leaving
/// the cells revealed so far tagged. If `target` was never reached the route is empty.
pub fn reconstruct<F>(
    grid: &mut PathingGrid,
    predecessors: &Predecessors,
    target: &Coord,
    on_step: &mut F,
) -> Option<Vec<Coord>>
where
    F: FnMut(&PathingGrid) -> Step,
{
    let Some(index) = predecessors.links.get_index_of(target) else {
        return Some(Vec::new());
    };
    let path = predecessors.route_from(index);
    if path.len() > 2 {
        for coord in path[1..path.len() - 1].iter().rev() {
            grid.mark(*coord, CellState::Path);
            if on_step(grid) == Step::Cancel {
                debug!("Path reveal cancelled at {}", coord);
                return None;
            }
        }
    }
    Some(path)
}
