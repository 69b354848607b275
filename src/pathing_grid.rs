use crate::cell::{Cell, CellState, Coord};
use crate::error::{Error, Result};
use crate::{NEIGHBOUR_ORDER, N_SMALLVEC_SIZE};
use core::fmt;
use core::str::FromStr;
use itertools::{iproduct, Itertools};
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] owns a row-major block of [Cell]s and keeps track of the single Source and Target
/// cell. Adjacency is derived on demand from the current cell states, so barrier edits are picked
/// up by the next search without any refresh step. In addition it maintains connected components
/// in a [UnionFind] structure, which answer reachability queries without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    source: Option<Coord>,
    target: Option<Coord>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::new(0, 0)
    }
}

impl PathingGrid {
    /// Allocates a `rows` x `cols` grid with every cell Free.
    pub fn new(rows: usize, cols: usize) -> PathingGrid {
        let cells = iproduct!(0..rows, 0..cols)
            .map(|(row, col)| Cell::new(Coord::new(row, col)))
            .collect();
        let mut grid = PathingGrid {
            rows,
            cols,
            cells,
            source: None,
            target: None,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn source(&self) -> Option<Coord> {
        self.source
    }
    pub fn target(&self) -> Option<Coord> {
        self.target
    }
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
    fn ix(&self, coord: &Coord) -> usize {
        coord.row * self.cols + coord.col
    }
    fn checked(&self, row: usize, col: usize) -> Result<Coord> {
        if self.in_bounds(row, col) {
            Ok(Coord::new(row, col))
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
    pub fn get(&self, row: usize, col: usize) -> Result<&Cell> {
        let coord = self.checked(row, col)?;
        Ok(&self.cells[self.ix(&coord)])
    }
    pub fn cell(&self, coord: Coord) -> Result<&Cell> {
        self.get(coord.row, coord.col)
    }
    pub fn state(&self, coord: Coord) -> Result<CellState> {
        self.cell(coord).map(Cell::state)
    }
    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Sets the state of a cell.
    ///
    /// Tagging a cell as Source or Target moves the tag: the previous Source (or Target) cell
    /// reverts to Free. Overwriting the current Source or Target with any other state forgets it.
    /// Transient states (Open, Closed, Path) are applied with the same rule the search engine
    /// uses, so they leave Barrier, Source and Target cells untouched.
    pub fn set_state(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        let coord = self.checked(row, col)?;
        if state.is_transient() {
            self.mark(coord, state);
            return Ok(());
        }
        match state {
            CellState::Source => {
                if let Some(previous) = self.source.replace(coord) {
                    if previous != coord {
                        self.write(previous, CellState::Free);
                    }
                }
            }
            CellState::Target => {
                if let Some(previous) = self.target.replace(coord) {
                    if previous != coord {
                        self.write(previous, CellState::Free);
                    }
                }
            }
            _ => {}
        }
        if state != CellState::Source && self.source == Some(coord) {
            self.source = None;
        }
        if state != CellState::Target && self.target == Some(coord) {
            self.target = None;
        }
        self.write(coord, state);
        Ok(())
    }

    /// Writes a state and keeps the components up to date. Joins newly connected components and
    /// flags the components as dirty if they are (potentially) broken apart.
    fn write(&mut self, coord: Coord, state: CellState) {
        let ix = self.ix(&coord);
        let was_passable = self.cells[ix].is_passable();
        self.cells[ix].set(state);
        let passable = self.cells[ix].is_passable();
        if was_passable && !passable {
            self.components_dirty = true;
        } else if !was_passable && passable {
            for n in self.neighbourhood_points(&coord) {
                let n_ix = self.ix(&n);
                self.components.union(ix, n_ix);
            }
        }
    }

    /// Tags a cell with a transient search state. Barrier, Source and Target cells keep their tag.
    pub(crate) fn mark(&mut self, coord: Coord, state: CellState) {
        debug_assert!(state.is_transient());
        let ix = self.ix(&coord);
        let cell = &mut self.cells[ix];
        if !cell.is_fixed() {
            cell.set(state);
        }
    }

    /// The traversable neighbours of a cell in [NEIGHBOUR_ORDER]: down, up, right, left.
    pub fn neighbours(&self, coord: Coord) -> Result<SmallVec<[Coord; N_SMALLVEC_SIZE]>> {
        let coord = self.checked(coord.row, coord.col)?;
        Ok(self.neighbourhood_points(&coord))
    }
    pub(crate) fn neighbourhood_points(&self, coord: &Coord) -> SmallVec<[Coord; N_SMALLVEC_SIZE]> {
        NEIGHBOUR_ORDER
            .iter()
            .filter_map(|&(d_row, d_col)| coord.offset(d_row, d_col))
            .filter(|p| self.can_move_to(p))
            .collect()
    }
    pub fn can_move_to(&self, pos: &Coord) -> bool {
        self.in_bounds(pos.row, pos.col) && self.cells[self.ix(pos)].is_passable()
    }

    /// Reverts every Open, Closed and Path cell to Free, keeping barriers and endpoints.
    pub fn reset_transient(&mut self) {
        self.cells
            .iter_mut()
            .filter(|cell| cell.state().is_transient())
            .for_each(|cell| cell.set(CellState::Free));
    }

    /// Discards all state, leaving a fresh grid of the same dimensions.
    pub fn clear(&mut self) {
        *self = PathingGrid::new(self.rows, self.cols);
    }

    /// Retrieves the component id a given [Coord] belongs to.
    pub fn get_component(&self, coord: &Coord) -> usize {
        self.components.find(self.ix(coord))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Coord, goal: &Coord) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out-of-bounds and blocked
    /// endpoints are never reachable.
    pub fn unreachable(&self, start: &Coord, goal: &Coord) -> bool {
        if self.can_move_to(start) && self.can_move_to(goal) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid neighbours.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components for {}x{} grid", self.rows, self.cols);
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            let point = Coord::new(row, col);
            if !self.can_move_to(&point) {
                continue;
            }
            let parent_ix = self.ix(&point);
            // Down and right are enough, the other two links are made from the neighbour.
            for n in [Coord::new(row + 1, col), Coord::new(row, col + 1)] {
                if self.can_move_to(&n) {
                    let n_ix = self.ix(&n);
                    self.components.union(parent_ix, n_ix);
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cols == 0 {
            return (0..self.rows).try_for_each(|_| writeln!(f));
        }
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().map(|c| c.state().symbol()).join(""))?;
        }
        Ok(())
    }
}

impl FromStr for PathingGrid {
    type Err = Error;

    /// Parses the format written by [Display](fmt::Display), one line per row. Blank lines are
    /// skipped and surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let lines = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect::<Vec<_>>();
        let cols = lines.first().map_or(0, |(_, line)| line.chars().count());
        let mut grid = PathingGrid::new(lines.len(), cols);
        for (row, (line_no, line)) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(Error::RaggedRow {
                    line: *line_no,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let state = CellState::from_symbol(symbol).ok_or(Error::UnknownSymbol {
                    line: *line_no,
                    column: col + 1,
                    symbol,
                })?;
                grid.set_state(row, col, state)?;
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}
