use super::DirichletVertex;
use crate::error::HexDomainError;
use crate::math::polygon_2d::{rotate_to_canonical_start, signed_area_2d};
use crate::math::{Point2, Tolerance};

/// One closed domain perimeter.
///
/// Vertices are stored in walk order; each vertex's `path_to_next` ends at
/// the following vertex, and the last one's ends at the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain<I> {
    /// Identity shared by every cell of the domain.
    pub domain_id: I,
    pub vertices: Vec<DirichletVertex<I>>,
}

impl<I> Domain<I> {
    #[must_use]
    pub fn new(domain_id: I, vertices: Vec<DirichletVertex<I>>) -> Self {
        Self {
            domain_id,
            vertices,
        }
    }

    /// Number of Dirichlet vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Positions of the Dirichlet vertices in walk order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point2> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// The full boundary polygon: every vertex followed by the intermediate
    /// corners on its way to the next one. The closing point is not repeated.
    #[must_use]
    pub fn outline(&self) -> Vec<Point2> {
        let mut points = Vec::new();
        for v in &self.vertices {
            points.push(v.position);
            if let Some((_, inner)) = v.path_to_next.split_last() {
                points.extend_from_slice(inner);
            }
        }
        points
    }

    /// Area enclosed by [`outline`](Self::outline).
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.outline()).abs()
    }

    /// Returns `true` if the last vertex's path leads back to the first vertex.
    #[must_use]
    pub fn is_closed(&self, tol: Tolerance) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => last
                .path_to_next
                .last()
                .is_some_and(|end| tol.same_point(end, &first.position)),
            _ => false,
        }
    }

    /// Vertex positions rotated to start at the leftmost one, so perimeters
    /// walked from different seeds compare equal.
    #[must_use]
    pub fn canonical_positions(&self, tol: Tolerance) -> Vec<Point2> {
        rotate_to_canonical_start(&self.positions(), tol)
    }
}

/// A perimeter that could not be closed.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainFailure<I> {
    pub domain_id: I,
    /// Position of the vertex the failed walk started from.
    pub seed_position: Point2,
    pub error: HexDomainError,
}

/// Result of a full domain analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainAnalysis<I> {
    pub domains: Vec<Domain<I>>,
    pub failures: Vec<DomainFailure<I>>,
}

impl<I> Default for DomainAnalysis<I> {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<I: PartialEq> DomainAnalysis<I> {
    /// Returns `true` if every perimeter closed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Domains carrying identity `id`.
    pub fn domains_with_id(&self, id: I) -> impl Iterator<Item = &Domain<I>> + '_ {
        self.domains.iter().filter(move |d| d.domain_id == id)
    }
}
