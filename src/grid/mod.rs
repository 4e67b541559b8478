mod dir;
mod hex_grid;

pub use dir::{Dir, Rotation};
pub use hex_grid::{HexCell, HexGrid};

use crate::math::Point2;

/// Stable index of a cell in its grid's cell arena.
pub type CellIndex = usize;

/// Read-only view of a hexagonal grid, as consumed by the domain analysis.
///
/// Cell indices run over `0..cell_count()`. Neighbour and corner directions
/// follow [`Dir`]: corner `d` lies between neighbours `d` and `d.next()`.
pub trait GridTopology {
    /// Number of cells; identity fields must have this length.
    fn cell_count(&self) -> usize;

    /// The neighbour of `cell` in direction `dir`, if there is one.
    fn neighbor(&self, cell: CellIndex, dir: Dir) -> Option<CellIndex>;

    /// Returns `true` if `cell` has a neighbour in direction `dir`.
    fn neighbor_present(&self, cell: CellIndex, dir: Dir) -> bool {
        self.neighbor(cell, dir).is_some()
    }

    /// Returns `true` if `cell` lies on the outer boundary of the grid.
    fn is_boundary(&self, cell: CellIndex) -> bool;

    /// Coordinate of corner `corner` of `cell`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `cell` is not below `cell_count()`.
    fn corner_coordinate(&self, cell: CellIndex, corner: Dir) -> Point2;

    /// Centre-to-centre distance between neighbouring cells.
    fn characteristic_spacing(&self) -> f64;
}
