use core::fmt;

/// A position on the grid, 0-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The coordinate shifted by the given offset, or [None] if that would leave the
    /// non-negative quadrant.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// The single state tag of a cell.
///
/// Free, Barrier, Source and Target are set by whoever edits the grid. Open, Closed and Path are
/// transient tags written by the search engine so a host can visualise progress; they are never
/// written over a Barrier, Source or Target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Free,
    Barrier,
    Source,
    Target,
    Open,
    Closed,
    Path,
}

impl CellState {
    /// Whether the state is one of the tags the search engine writes.
    pub fn is_transient(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }

    pub fn symbol(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Barrier => '#',
            CellState::Source => 'S',
            CellState::Target => 'G',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Path => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<CellState> {
        match symbol {
            '.' => Some(CellState::Free),
            '#' => Some(CellState::Barrier),
            'S' => Some(CellState::Source),
            'G' => Some(CellState::Target),
            'o' => Some(CellState::Open),
            'x' => Some(CellState::Closed),
            '*' => Some(CellState::Path),
            _ => None,
        }
    }
}

/// A single grid position and its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    state: CellState,
}

impl Cell {
    pub(crate) fn new(coord: Coord) -> Cell {
        Cell {
            coord,
            state: CellState::Free,
        }
    }
    pub fn coord(&self) -> Coord {
        self.coord
    }
    pub fn row(&self) -> usize {
        self.coord.row
    }
    pub fn col(&self) -> usize {
        self.coord.col
    }
    pub fn state(&self) -> CellState {
        self.state
    }
    pub(crate) fn set(&mut self, state: CellState) {
        self.state = state;
    }
    pub fn is_free(&self) -> bool {
        self.state == CellState::Free
    }
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }
    pub fn is_source(&self) -> bool {
        self.state == CellState::Source
    }
    pub fn is_target(&self) -> bool {
        self.state == CellState::Target
    }
    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }
    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }
    /// Barrier, Source and Target cells keep their tag while a search runs.
    pub fn is_fixed(&self) -> bool {
        matches!(
            self.state,
            CellState::Barrier | CellState::Source | CellState::Target
        )
    }
    /// Every cell except a Barrier is part of the traversable graph.
    pub fn is_passable(&self) -> bool {
        !self.is_barrier()
    }
}
