use std::collections::HashMap;

use super::{CellIndex, Dir, GridTopology};
use crate::error::GridError;
use crate::math::{Point2, Vector2};

/// One cell of a [`HexGrid`].
#[derive(Debug, Clone)]
pub struct HexCell {
    /// Axial column.
    pub q: i32,
    /// Axial row.
    pub r: i32,
    /// Centre of the cell.
    pub center: Point2,
    neighbors: [Option<CellIndex>; 6],
}

impl HexCell {
    /// Number of neighbouring cells present.
    #[must_use]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }
}

/// A pointy-top hexagonal tiling addressed by axial coordinates.
///
/// Cell centres sit at `x = d (q + r/2)`, `y = d r √3/2` for spacing `d`.
/// A cell lies on the boundary when any of its six neighbours is missing.
#[derive(Debug, Clone)]
pub struct HexGrid {
    cells: Vec<HexCell>,
    lookup: HashMap<(i32, i32), CellIndex>,
    spacing: f64,
}

impl HexGrid {
    /// Builds a hexagon-shaped grid: every cell within `rings` steps of the origin.
    ///
    /// Cells are indexed row by row, bottom to top.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameters` if `spacing` is not positive and
    /// finite or `rings` does not fit an axial coordinate.
    pub fn hexagon(rings: u32, spacing: f64) -> Result<Self, GridError> {
        let n = i32::try_from(rings)
            .map_err(|_| GridError::InvalidParameters(format!("too many rings: {rings}")))?;
        let mut coords = Vec::new();
        for r in -n..=n {
            for q in -n..=n {
                if (q + r).abs() <= n {
                    coords.push((q, r));
                }
            }
        }
        Self::from_axial(coords, spacing)
    }

    /// Builds a grid from an arbitrary set of axial coordinates.
    ///
    /// Cell indices follow the iteration order of `coords`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameters` for a bad spacing and
    /// `GridError::DuplicateCell` if a coordinate appears twice.
    pub fn from_axial<C>(coords: C, spacing: f64) -> Result<Self, GridError>
    where
        C: IntoIterator<Item = (i32, i32)>,
    {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(GridError::InvalidParameters(format!(
                "spacing must be positive and finite, got {spacing}"
            )));
        }

        let mut cells = Vec::new();
        let mut lookup = HashMap::new();
        for (q, r) in coords {
            if lookup.insert((q, r), cells.len()).is_some() {
                return Err(GridError::DuplicateCell { q, r });
            }
            let center = Point2::new(
                spacing * (f64::from(q) + f64::from(r) * 0.5),
                spacing * f64::from(r) * 3.0_f64.sqrt() * 0.5,
            );
            cells.push(HexCell {
                q,
                r,
                center,
                neighbors: [None; 6],
            });
        }

        for cell in &mut cells {
            for dir in Dir::ALL {
                let (dq, dr) = dir.axial_offset();
                cell.neighbors[dir.index()] = lookup.get(&(cell.q + dq, cell.r + dr)).copied();
            }
        }

        Ok(Self {
            cells,
            lookup,
            spacing,
        })
    }

    /// Returns the cell at `index`.
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Option<&HexCell> {
        self.cells.get(index)
    }

    /// Returns the index of the cell at axial `(q, r)`.
    #[must_use]
    pub fn cell_at(&self, q: i32, r: i32) -> Option<CellIndex> {
        self.lookup.get(&(q, r)).copied()
    }

    /// Iterates over all cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.iter()
    }

    /// Centre of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a cell of this grid. Use [`cell`](Self::cell)
    /// for a checked lookup.
    #[must_use]
    pub fn center(&self, index: CellIndex) -> Point2 {
        self.cells[index].center
    }

    /// Distance from a cell centre to any of its corners.
    #[must_use]
    pub fn long_radius(&self) -> f64 {
        self.spacing / 3.0_f64.sqrt()
    }

    /// Area of one cell.
    #[must_use]
    pub fn cell_area(&self) -> f64 {
        3.0_f64.sqrt() * 0.5 * self.spacing * self.spacing
    }
}

impl GridTopology for HexGrid {
    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn neighbor(&self, cell: CellIndex, dir: Dir) -> Option<CellIndex> {
        self.cells.get(cell).and_then(|c| c.neighbors[dir.index()])
    }

    fn is_boundary(&self, cell: CellIndex) -> bool {
        self.cells
            .get(cell)
            .is_some_and(|c| c.neighbor_count() < 6)
    }

    fn corner_coordinate(&self, cell: CellIndex, corner: Dir) -> Point2 {
        let angle = corner.corner_angle();
        self.cells[cell].center + Vector2::new(angle.cos(), angle.sin()) * self.long_radius()
    }

    fn characteristic_spacing(&self) -> f64 {
        self.spacing
    }
}
