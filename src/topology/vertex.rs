use slotmap::SlotMap;

use super::Side;
use crate::grid::{CellIndex, Dir};
use crate::math::{Point2, Tolerance};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a [`VertexSet`].
    pub struct VertexId;
}

/// What lies across the two sides meeting at a vertex's corner.
///
/// `first` is across direction `corner.next()` of the home cell, `second`
/// is across direction `corner`. At most one of them is [`Side::Outside`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborPair<I> {
    pub first: Side<I>,
    pub second: Side<I>,
}

impl<I> NeighborPair<I> {
    #[must_use]
    pub fn new(first: Side<I>, second: Side<I>) -> Self {
        Self { first, second }
    }
}

/// A cell corner where two (grid boundary) or three (interior) domain
/// identities meet, recorded from the point of view of one domain.
#[derive(Debug, Clone, PartialEq)]
pub struct DirichletVertex<I> {
    /// Coordinate of the corner.
    pub position: Point2,
    /// Identity of the home cell.
    pub domain_id: I,
    pub neighbor_ids: NeighborPair<I>,
    /// The cell owning the corner whose identity is `domain_id`.
    pub home_cell: CellIndex,
    /// Which corner of `home_cell` this vertex sits on.
    pub corner: Dir,
    /// Corner coordinates from here to the next vertex of the domain,
    /// ending at that vertex.
    pub path_to_next: Vec<Point2>,
    /// Corner coordinates along the other incident edge, ending at the
    /// neighbouring vertex.
    pub path_to_neighbor: Vec<Point2>,
}

impl<I> DirichletVertex<I> {
    /// Creates a vertex with empty paths.
    #[must_use]
    pub fn new(
        position: Point2,
        domain_id: I,
        neighbor_ids: NeighborPair<I>,
        home_cell: CellIndex,
        corner: Dir,
    ) -> Self {
        Self {
            position,
            domain_id,
            neighbor_ids,
            home_cell,
            corner,
            path_to_next: Vec::new(),
            path_to_neighbor: Vec::new(),
        }
    }

    /// Returns `true` if one of the incident edges runs along the grid boundary.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.neighbor_ids.first.is_outside() || self.neighbor_ids.second.is_outside()
    }

    /// Returns `true` if this vertex sits at `point`.
    #[must_use]
    pub fn is_at(&self, point: &Point2, tol: Tolerance) -> bool {
        tol.same_point(&self.position, point)
    }
}

/// Unordered working set of vertices awaiting assembly.
#[derive(Debug, Clone)]
pub struct VertexSet<I> {
    vertices: SlotMap<VertexId, DirichletVertex<I>>,
}

impl<I> Default for VertexSet<I> {
    fn default() -> Self {
        Self {
            vertices: SlotMap::with_key(),
        }
    }
}

impl<I> VertexSet<I> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex and returns its ID.
    pub fn insert(&mut self, vertex: DirichletVertex<I>) -> VertexId {
        self.vertices.insert(vertex)
    }

    /// Removes and returns the vertex with the given ID.
    pub fn remove(&mut self, id: VertexId) -> Option<DirichletVertex<I>> {
        self.vertices.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: VertexId) -> Option<&DirichletVertex<I>> {
        self.vertices.get(id)
    }

    /// Removes the vertex with the lowest slot, if any.
    pub fn pop_first(&mut self) -> Option<DirichletVertex<I>> {
        let id = self.vertices.keys().next()?;
        self.vertices.remove(id)
    }

    /// Returns the first vertex satisfying `pred`.
    pub fn find<P>(&self, mut pred: P) -> Option<VertexId>
    where
        P: FnMut(&DirichletVertex<I>) -> bool,
    {
        self.vertices
            .iter()
            .find(|(_, v)| pred(v))
            .map(|(id, _)| id)
    }

    /// Removes and returns the first vertex satisfying `pred`.
    pub fn take<P>(&mut self, pred: P) -> Option<DirichletVertex<I>>
    where
        P: FnMut(&DirichletVertex<I>) -> bool,
    {
        let id = self.find(pred)?;
        self.vertices.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirichletVertex<I>> {
        self.vertices.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<I> FromIterator<DirichletVertex<I>> for VertexSet<I> {
    fn from_iter<T: IntoIterator<Item = DirichletVertex<I>>>(iter: T) -> Self {
        let mut set = Self::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}
