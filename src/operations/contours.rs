use crate::error::InputError;
use crate::grid::{CellIndex, Dir, GridTopology};

/// Finds the cells along which each scalar field crosses a threshold.
///
/// All fields are normalised together to `[0, 1]`, using the minimum and
/// maximum over cells that are not on the grid boundary. A cell belongs to a
/// field's contour if its normalised value is above `threshold` and it either
/// sits on the grid boundary or has a neighbour below `threshold`.
pub struct Contours<'a, G: ?Sized, F> {
    grid: &'a G,
    fields: &'a [F],
    threshold: f64,
}

impl<'a, G, F> Contours<'a, G, F>
where
    G: GridTopology + ?Sized,
    F: AsRef<[f64]>,
{
    /// Creates a new `Contours` operation.
    #[must_use]
    pub fn new(grid: &'a G, fields: &'a [F], threshold: f64) -> Self {
        Self {
            grid,
            fields,
            threshold,
        }
    }

    /// Executes the search, returning one list of cells per field.
    ///
    /// Fields that are constant over the interior produce empty lists.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FieldLength` if a field does not have one value
    /// per grid cell.
    pub fn execute(&self) -> Result<Vec<Vec<CellIndex>>, InputError> {
        let n = self.grid.cell_count();
        for (field, f) in self.fields.iter().enumerate() {
            let found = f.as_ref().len();
            if found != n {
                return Err(InputError::FieldLength {
                    field,
                    expected: n,
                    found,
                });
            }
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for cell in (0..n).filter(|&c| !self.grid.is_boundary(c)) {
            for f in self.fields {
                let v = f.as_ref()[cell];
                min = min.min(v);
                max = max.max(v);
            }
        }

        if max <= min {
            tracing::debug!("fields are flat over the grid interior, no contours");
            return Ok(vec![Vec::new(); self.fields.len()]);
        }
        let scale = 1.0 / (max - min);

        let contours = self
            .fields
            .iter()
            .map(|f| {
                let norm: Vec<f64> = f.as_ref().iter().map(|v| (v - min) * scale).collect();
                (0..n)
                    .filter(|&cell| norm[cell] > self.threshold && self.on_contour(cell, &norm))
                    .collect()
            })
            .collect();
        Ok(contours)
    }

    fn on_contour(&self, cell: CellIndex, norm: &[f64]) -> bool {
        self.grid.is_boundary(cell)
            || Dir::ALL.iter().any(|&dir| {
                self.grid
                    .neighbor(cell, dir)
                    .is_some_and(|n| norm[n] < self.threshold)
            })
    }
}
