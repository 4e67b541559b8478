use crate::error::{AssemblyError, Result};
use crate::grid::GridTopology;
use crate::math::Tolerance;
use crate::topology::{
    DirichletVertex, Domain, DomainAnalysis, DomainFailure, Identity, VertexSet,
};

use super::{check_identity, EdgeWalker};

/// Stitches an unordered vertex set into closed domain perimeters.
///
/// Each perimeter is walked vertex to vertex until it returns to its seed.
/// A perimeter that cannot be closed is reported in
/// [`DomainAnalysis::failures`]; the vertices it consumed are dropped and
/// assembly carries on with the rest of the set.
pub struct AssembleDomains<'a, G: ?Sized, I> {
    grid: &'a G,
    identity: &'a [I],
    tol: Tolerance,
}

impl<'a, G, I> AssembleDomains<'a, G, I>
where
    G: GridTopology + ?Sized,
    I: Identity,
{
    /// Creates a new `AssembleDomains` operation.
    #[must_use]
    pub fn new(grid: &'a G, identity: &'a [I], tol: Tolerance) -> Self {
        Self {
            grid,
            identity,
            tol,
        }
    }

    /// Consumes `vertices` and returns every perimeter that closed.
    ///
    /// # Errors
    ///
    /// Returns `InputError::IdentityLength` if the identity field does not
    /// cover the grid. Failures of individual domains are not errors.
    pub fn execute(&self, mut vertices: VertexSet<I>) -> Result<DomainAnalysis<I>> {
        check_identity(self.grid, self.identity)?;

        let walker = EdgeWalker::new(self.grid, self.identity, self.tol);
        let mut analysis = DomainAnalysis::default();

        while let Some(seed) = vertices.pop_first() {
            let domain_id = seed.domain_id;
            let seed_position = seed.position;

            match self.process_domain(&walker, seed, &mut vertices) {
                Ok(domain) => {
                    tracing::debug!(
                        domain = ?domain_id,
                        vertices = domain.len(),
                        "closed domain perimeter"
                    );
                    analysis.domains.push(domain);
                }
                Err(error) => {
                    tracing::warn!(
                        domain = ?domain_id,
                        x = seed_position.x,
                        y = seed_position.y,
                        %error,
                        "dropping unclosed domain"
                    );
                    analysis.failures.push(DomainFailure {
                        domain_id,
                        seed_position,
                        error,
                    });
                }
            }
        }

        Ok(analysis)
    }

    /// Walks one perimeter starting at `seed`, taking each continuation
    /// vertex out of `vertices`.
    fn process_domain(
        &self,
        walker: &EdgeWalker<'_, G, I>,
        seed: DirichletVertex<I>,
        vertices: &mut VertexSet<I>,
    ) -> Result<Domain<I>> {
        let domain_id = seed.domain_id;
        let first_position = seed.position;
        let mut walked = Vec::new();
        let mut current = seed;

        loop {
            walker.walk_to_neighbor(&mut current)?;
            let next = walker.walk_to_next(&mut current)?;
            let arriving_from = current.neighbor_ids.second;
            walked.push(current);

            if self.tol.same_point(&next.position, &first_position) {
                return Ok(Domain::new(domain_id, walked));
            }

            // Several domains may share the corner; only the copy on this
            // side of both edges continues the perimeter.
            let continuation = vertices.take(|v| {
                v.is_at(&next.position, self.tol)
                    && v.domain_id == domain_id
                    && v.neighbor_ids.first == arriving_from
                    && v.neighbor_ids.second == next.across
            });

            match continuation {
                Some(v) => current = v,
                None => {
                    return Err(AssemblyError::UnclosedPerimeter {
                        domain: format!("{domain_id:?}"),
                        x: next.position.x,
                        y: next.position.y,
                    }
                    .into())
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{HexDomainError, WalkError};
    use crate::grid::{Dir, HexGrid};
    use crate::math::Point2;
    use crate::operations::{fixtures, ClassifyVertices};

    fn tol() -> Tolerance {
        Tolerance::new(1e-6).unwrap()
    }

    fn assemble(grid: &HexGrid, ids: &[u32]) -> DomainAnalysis<u32> {
        let vertices = ClassifyVertices::new(grid, ids).execute().unwrap();
        AssembleDomains::new(grid, ids, tol())
            .execute(vertices)
            .unwrap()
    }

    #[test]
    fn island_closes_after_two_vertices() {
        let (grid, ids) = fixtures::island();
        let analysis = assemble(&grid, &ids);
        assert!(analysis.is_complete());
        assert_eq!(analysis.domains.len(), 3);

        let island: Vec<_> = analysis.domains_with_id(1).collect();
        assert_eq!(island.len(), 1);
        assert_eq!(island[0].len(), 2);
        assert!(island[0].is_closed(tol()));
        assert_eq!(island[0].outline().len(), 6);

        assert_eq!(analysis.domains_with_id(0).next().unwrap().len(), 4);
        assert_eq!(analysis.domains_with_id(2).next().unwrap().len(), 4);
    }

    #[test]
    fn diagonal_split_gives_two_domains() {
        let (grid, ids) = fixtures::diagonal_split();
        let analysis = assemble(&grid, &ids);
        assert!(analysis.is_complete());
        assert_eq!(analysis.domains.len(), 2);

        let lower = analysis.domains_with_id(0).next().unwrap();
        let upper = analysis.domains_with_id(1).next().unwrap();
        assert_eq!(lower.len(), 2);
        assert_eq!(upper.len(), 2);

        // Both perimeters share the two ends of the dividing line.
        for p in lower.positions() {
            assert!(upper.positions().iter().any(|q| tol().same_point(&p, q)));
        }

        let cell_area = grid.cell_area();
        approx::assert_relative_eq!(lower.area(), 7.0 * cell_area, max_relative = 1e-9);
        approx::assert_relative_eq!(upper.area(), 12.0 * cell_area, max_relative = 1e-9);
    }

    #[test]
    fn same_identity_regions_stay_separate() {
        let (grid, ids) = fixtures::bands();
        let analysis = assemble(&grid, &ids);
        assert!(analysis.is_complete());
        assert_eq!(analysis.domains.len(), 3);

        let outer: Vec<_> = analysis.domains_with_id(0).collect();
        assert_eq!(outer.len(), 2);
        for d in &outer {
            assert_eq!(d.len(), 2);
            approx::assert_relative_eq!(d.area(), 7.0 * grid.cell_area(), max_relative = 1e-9);
        }
        let band = analysis.domains_with_id(1).next().unwrap();
        assert_eq!(band.len(), 4);
        approx::assert_relative_eq!(band.area(), 5.0 * grid.cell_area(), max_relative = 1e-9);
    }

    #[test]
    fn missing_vertex_fails_only_its_domain() {
        let (grid, ids) = fixtures::three_sectors(3);
        let mut vertices = ClassifyVertices::new(&grid, &ids).execute().unwrap();
        let dropped = vertices.take(|v| v.domain_id == 1).unwrap();

        let analysis = AssembleDomains::new(&grid, &ids, tol())
            .execute(vertices)
            .unwrap();

        assert_eq!(analysis.domains_with_id(1).count(), 0);
        assert_eq!(analysis.domains_with_id(0).count(), 1);
        assert_eq!(analysis.domains_with_id(2).count(), 1);
        assert!(analysis.failures.iter().all(|f| f.domain_id == 1));
        assert!(analysis.failures.iter().all(|f| matches!(
            f.error,
            HexDomainError::Assembly(AssemblyError::UnclosedPerimeter { .. })
        )));

        // The first walk stops where the dropped vertex used to be; later
        // walks stop at vertices the failed walks already consumed.
        match &analysis.failures[0].error {
            HexDomainError::Assembly(AssemblyError::UnclosedPerimeter { x, y, .. }) => {
                assert!(tol().same_point(&Point2::new(*x, *y), &dropped.position));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn relabelled_cell_breaks_only_its_domain() {
        let (grid, ids) = fixtures::three_sectors(3);
        let vertices = ClassifyVertices::new(&grid, &ids).execute().unwrap();

        // A rim cell of sector 0 whose neighbours are all sector 0 or outside.
        let rim = grid.cell_at(3, -1).unwrap();
        assert_eq!(ids[rim], 0);
        let mut damaged = ids.clone();
        damaged[rim] = 9;

        let analysis = AssembleDomains::new(&grid, &damaged, tol())
            .execute(vertices)
            .unwrap();

        assert_eq!(analysis.domains_with_id(0).count(), 0);
        assert_eq!(analysis.domains_with_id(1).count(), 1);
        assert_eq!(analysis.domains_with_id(2).count(), 1);
        assert!(analysis.domains.iter().all(|d| d.is_closed(tol())));
        assert!(!analysis.failures.is_empty());
        assert!(analysis.failures.iter().all(|f| f.domain_id == 0));
        assert!(analysis.failures.iter().all(|f| matches!(
            f.error,
            HexDomainError::Assembly(AssemblyError::UnclosedPerimeter { .. })
        )));

        // The first perimeter walk is cut short at a corner of the relabelled cell.
        match &analysis.failures[0].error {
            HexDomainError::Assembly(AssemblyError::UnclosedPerimeter { x, y, .. }) => {
                let stop = Point2::new(*x, *y);
                assert!(Dir::ALL
                    .into_iter()
                    .any(|c| tol().same_point(&grid.corner_coordinate(rim, c), &stop)));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn foreign_identity_field_fails_every_walk() {
        let (grid, ids) = fixtures::three_sectors(3);
        let vertices = ClassifyVertices::new(&grid, &ids).execute().unwrap();

        // No cell carries the identities the vertices were classified with.
        let other: Vec<u32> = ids.iter().map(|id| id + 10).collect();
        let analysis = AssembleDomains::new(&grid, &other, tol())
            .execute(vertices)
            .unwrap();
        assert!(analysis.domains.is_empty());
        assert!(!analysis.failures.is_empty());
        assert!(analysis.failures.iter().all(|f| matches!(
            f.error,
            HexDomainError::Walk(WalkError::MalformedTopology(_))
        )));
    }

    #[test]
    fn working_set_is_consumed() {
        let (grid, ids) = fixtures::three_sectors(4);
        let vertices = ClassifyVertices::new(&grid, &ids).execute().unwrap();
        let total = vertices.len();
        let analysis = AssembleDomains::new(&grid, &ids, tol())
            .execute(vertices)
            .unwrap();
        let used: usize = analysis.domains.iter().map(Domain::len).sum();
        assert_eq!(used, total);
    }
}
