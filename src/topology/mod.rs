pub mod domain;
pub mod vertex;

pub use domain::{Domain, DomainAnalysis, DomainFailure};
pub use vertex::{DirichletVertex, NeighborPair, VertexId, VertexSet};

use std::fmt;

use crate::grid::{CellIndex, Dir, GridTopology};

/// Value type of an identity field.
///
/// Two cells belong to the same domain iff their identities compare equal.
pub trait Identity: Copy + PartialEq + fmt::Debug {}

impl<T: Copy + PartialEq + fmt::Debug> Identity for T {}

/// What lies across one side of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Side<I> {
    /// A cell carrying this identity.
    Domain(I),
    /// No cell: the side is part of the grid's outer boundary.
    Outside,
}

impl<I: Identity> Side<I> {
    /// Looks up what lies across side `dir` of `cell`.
    pub fn across<G: GridTopology + ?Sized>(
        grid: &G,
        identity: &[I],
        cell: CellIndex,
        dir: Dir,
    ) -> Self {
        match grid.neighbor(cell, dir) {
            Some(n) => Side::Domain(identity[n]),
            None => Side::Outside,
        }
    }
}

impl<I> Side<I> {
    #[must_use]
    pub fn is_outside(&self) -> bool {
        matches!(self, Side::Outside)
    }

    /// The identity, if this side is a cell.
    #[must_use]
    pub fn domain(self) -> Option<I> {
        match self {
            Side::Domain(id) => Some(id),
            Side::Outside => None,
        }
    }
}

impl<I: PartialEq> Side<I> {
    /// Returns `true` if this side is a cell with identity `id`.
    #[must_use]
    pub fn is_domain(&self, id: I) -> bool {
        matches!(self, Side::Domain(d) if *d == id)
    }
}

impl<I: fmt::Debug> fmt::Display for Side<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Domain(id) => write!(f, "{id:?}"),
            Side::Outside => f.write_str("outside"),
        }
    }
}
