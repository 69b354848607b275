use crate::cell::Coord;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two cells. With
/// unit costs and no diagonal moves this never overestimates the remaining cost and satisfies the
/// triangle inequality between neighbours, so A* guided by it returns shortest paths.
pub fn manhattan(a: &Coord, b: &Coord) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
