use crate::error::InputError;
use crate::grid::{CellIndex, Dir, GridTopology};
use crate::topology::{DirichletVertex, Identity, NeighborPair, Side, VertexSet};

use super::check_identity;

/// Finds every Dirichlet vertex of an identity field.
///
/// A corner of a cell is a vertex when the cell and the two sides meeting at
/// the corner carry three distinct identities (interior vertex), or when one
/// of the sides is the outer boundary and the other carries a different
/// identity (boundary vertex). One vertex is emitted per corner and per
/// domain: each of the cells meeting at a vertex records its own copy.
pub struct ClassifyVertices<'a, G: ?Sized, I> {
    grid: &'a G,
    identity: &'a [I],
}

impl<'a, G, I> ClassifyVertices<'a, G, I>
where
    G: GridTopology + ?Sized,
    I: Identity,
{
    /// Creates a new `ClassifyVertices` operation.
    #[must_use]
    pub fn new(grid: &'a G, identity: &'a [I]) -> Self {
        Self { grid, identity }
    }

    /// Executes the classification.
    ///
    /// # Errors
    ///
    /// Returns `InputError::IdentityLength` if the identity field does not
    /// cover the grid.
    pub fn execute(&self) -> Result<VertexSet<I>, InputError> {
        check_identity(self.grid, self.identity)?;

        let mut vertices = VertexSet::new();
        for cell in 0..self.grid.cell_count() {
            self.test_cell(cell, &mut vertices);
        }

        tracing::debug!(
            cells = self.grid.cell_count(),
            vertices = vertices.len(),
            "classified Dirichlet vertices"
        );
        Ok(vertices)
    }

    /// Number of distinct identities among `cell` and its present neighbours.
    pub fn distinct_identities(&self, cell: CellIndex) -> usize {
        let mut seen = vec![self.identity[cell]];
        for dir in Dir::ALL {
            if let Some(n) = self.grid.neighbor(cell, dir) {
                let id = self.identity[n];
                if !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
        seen.len()
    }

    fn test_cell(&self, cell: CellIndex, vertices: &mut VertexSet<I>) {
        let own = self.identity[cell];
        let distinct = self.distinct_identities(cell);
        let on_boundary = self.grid.is_boundary(cell);

        // Inside a domain, or touching a single other domain away from the
        // boundary: that edge's vertices belong to the triple cells.
        if distinct < 2 || (distinct == 2 && !on_boundary) {
            return;
        }

        for corner in Dir::ALL {
            let first = Side::across(self.grid, self.identity, cell, corner.next());
            let second = Side::across(self.grid, self.identity, cell, corner);

            let is_vertex = match (first, second) {
                (Side::Domain(a), Side::Domain(b)) => {
                    distinct > 2 && a != own && b != own && a != b
                }
                (Side::Outside, Side::Domain(other)) | (Side::Domain(other), Side::Outside) => {
                    on_boundary && other != own
                }
                (Side::Outside, Side::Outside) => false,
            };

            if is_vertex {
                vertices.insert(DirichletVertex::new(
                    self.grid.corner_coordinate(cell, corner),
                    own,
                    NeighborPair::new(first, second),
                    cell,
                    corner,
                ));
            }
        }
    }
}
