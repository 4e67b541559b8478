use crate::error::{Result, WalkError};
use crate::grid::{CellIndex, Dir, GridTopology, Rotation};
use crate::math::{Point2, Tolerance};
use crate::topology::{DirichletVertex, Identity, Side};

use super::check_identity;

/// The pair of identities an edge separates.
///
/// The walk keeps `inside` cells on one hand and `across` on the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeIdentities<I> {
    pub inside: I,
    pub across: Side<I>,
}

impl<I> EdgeIdentities<I> {
    #[must_use]
    pub fn new(inside: I, across: Side<I>) -> Self {
        Self { inside, across }
    }
}

/// Where an edge walk stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkEnd<I> {
    /// Position of the Dirichlet vertex reached.
    pub position: Point2,
    /// The third identity met at that vertex.
    pub across: Side<I>,
    /// Sense in which the walk went round its pivot cells.
    pub rotation: Rotation,
}

/// Traces the corners of an edge from one Dirichlet vertex to the next.
pub struct EdgeWalker<'a, G: ?Sized, I> {
    grid: &'a G,
    identity: &'a [I],
    tol: Tolerance,
}

impl<'a, G, I> EdgeWalker<'a, G, I>
where
    G: GridTopology + ?Sized,
    I: Identity,
{
    /// Creates a new edge walker.
    #[must_use]
    pub fn new(grid: &'a G, identity: &'a [I], tol: Tolerance) -> Self {
        Self {
            grid,
            identity,
            tol,
        }
    }

    /// Walks the edge `edge` away from `vertex`, appending every corner passed
    /// to `path`. The last point appended is the vertex reached.
    ///
    /// # Errors
    ///
    /// Returns `WalkError::MalformedTopology` if no cell of `edge.inside`
    /// touches the vertex, if neither side at the vertex carries
    /// `edge.across`, or if the walk does not reach another vertex.
    pub fn walk(
        &self,
        vertex: &DirichletVertex<I>,
        edge: EdgeIdentities<I>,
        path: &mut Vec<Point2>,
    ) -> Result<WalkEnd<I>> {
        check_identity(self.grid, self.identity)?;
        if edge.across.is_domain(edge.inside) {
            return Err(WalkError::MalformedTopology(format!(
                "edge separates {:?} from itself",
                edge.inside
            ))
            .into());
        }

        let (mut cell, mut corner) = self.anchor(vertex, edge.inside)?;
        let rotation = self.rotation(cell, corner, edge)?;

        // Every cell side is crossed at most once and every crossing is
        // followed by at most one pivot.
        let budget = 12 * self.grid.cell_count() + 12;
        for _ in 0..budget {
            let side = rotation.leading_side(corner);
            let next = self.grid.neighbor(cell, side);
            let across = next.map_or(Side::Outside, |n| Side::Domain(self.identity[n]));

            if across == edge.across {
                corner = rotation.advance(corner);
                path.push(self.grid.corner_coordinate(cell, corner));
            } else if let Some(n) = next.filter(|&n| self.identity[n] == edge.inside) {
                cell = n;
                corner = rotation.pivot_corner(corner);
            } else {
                let position = self.grid.corner_coordinate(cell, corner);
                tracing::debug!(
                    x = position.x,
                    y = position.y,
                    across = %across,
                    steps = path.len(),
                    "edge walk reached vertex"
                );
                return Ok(WalkEnd {
                    position,
                    across,
                    rotation,
                });
            }
        }

        Err(WalkError::MalformedTopology(format!(
            "walk from ({}, {}) between {:?} and {} did not reach a vertex",
            vertex.position.x, vertex.position.y, edge.inside, edge.across
        ))
        .into())
    }

    /// Walks the edge between the vertex's domain and `neighbor_ids.second`,
    /// storing the corners in `path_to_next`.
    ///
    /// # Errors
    ///
    /// See [`walk`](Self::walk).
    pub fn walk_to_next(&self, vertex: &mut DirichletVertex<I>) -> Result<WalkEnd<I>> {
        let edge = EdgeIdentities::new(vertex.domain_id, vertex.neighbor_ids.second);
        let mut path = Vec::new();
        let end = self.walk(vertex, edge, &mut path)?;
        vertex.path_to_next = path;
        Ok(end)
    }

    /// Walks the edge between the vertex's domain and `neighbor_ids.first`,
    /// storing the corners in `path_to_neighbor`.
    ///
    /// # Errors
    ///
    /// See [`walk`](Self::walk).
    pub fn walk_to_neighbor(&self, vertex: &mut DirichletVertex<I>) -> Result<WalkEnd<I>> {
        let edge = EdgeIdentities::new(vertex.domain_id, vertex.neighbor_ids.first);
        let mut path = Vec::new();
        let end = self.walk(vertex, edge, &mut path)?;
        vertex.path_to_neighbor = path;
        Ok(end)
    }

    /// Finds the cell of identity `inside` that touches the vertex, and the
    /// vertex's corner name on that cell.
    fn anchor(&self, vertex: &DirichletVertex<I>, inside: I) -> Result<(CellIndex, Dir)> {
        let home = vertex.home_cell;
        if home >= self.grid.cell_count() {
            return Err(WalkError::MalformedTopology(format!(
                "home cell {home} is not in the grid"
            ))
            .into());
        }

        let corner = Dir::ALL
            .into_iter()
            .find(|&c| {
                self.tol
                    .same_point(&self.grid.corner_coordinate(home, c), &vertex.position)
            })
            .ok_or_else(|| {
                WalkError::MalformedTopology(format!(
                    "({}, {}) is not a corner of cell {home}",
                    vertex.position.x, vertex.position.y
                ))
            })?;

        if self.identity[home] == inside {
            return Ok((home, corner));
        }

        // The home cell belongs to another domain: move onto one of the two
        // neighbours sharing the corner.
        for across in [corner, corner.next()] {
            if let (Some(n), Some(seen)) = (
                self.grid.neighbor(home, across),
                corner.corner_seen_from(across),
            ) {
                if self.identity[n] == inside {
                    return Ok((n, seen));
                }
            }
        }

        Err(WalkError::MalformedTopology(format!(
            "no cell of identity {inside:?} at ({}, {})",
            vertex.position.x, vertex.position.y
        ))
        .into())
    }

    /// Picks the rotation whose first side crosses into `edge.across`.
    fn rotation(&self, cell: CellIndex, corner: Dir, edge: EdgeIdentities<I>) -> Result<Rotation> {
        let clockwise_side = Side::across(self.grid, self.identity, cell, corner);
        let anticlockwise_side = Side::across(self.grid, self.identity, cell, corner.next());

        if clockwise_side == edge.across {
            Ok(Rotation::Clockwise)
        } else if anticlockwise_side == edge.across {
            Ok(Rotation::Anticlockwise)
        } else {
            Err(WalkError::MalformedTopology(format!(
                "no {} beside cell {cell} at corner {corner:?}",
                edge.across
            ))
            .into())
        }
    }
}
