use core::fmt;

/// The endpoint a run was missing when it was asked to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingEndpoint {
    Source,
    Target,
}

impl fmt::Display for MissingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MissingEndpoint::Source => write!(f, "source"),
            MissingEndpoint::Target => write!(f, "target"),
        }
    }
}

/// Errors raised by grid accessors, grid parsing and search entry points.
///
/// A search that finds no path, or that is cancelled by its observer, is not an error; see
/// [Outcome](crate::solver::Outcome).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A run was requested on a grid without a tagged source or target.
    #[error("cannot start a search: no {0} cell is set")]
    InvalidRunState(MissingEndpoint),

    #[error("unknown cell symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },

    #[error("unknown search algorithm {0:?}, expected \"astar\" or \"bfs\"")]
    UnknownAlgorithm(String),

    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
