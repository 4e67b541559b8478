use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::grid::GridTopology;
use crate::topology::{DomainAnalysis, Identity};

use super::{check_identity, AssembleDomains, ClassifyVertices};

/// Extracts every Dirichlet domain of an identity field.
///
/// Runs [`ClassifyVertices`] then [`AssembleDomains`] with a tolerance
/// resolved from the grid spacing.
pub struct DirichletDomains<'a, G: ?Sized, I> {
    grid: &'a G,
    identity: &'a [I],
    config: AnalysisConfig,
}

impl<'a, G, I> DirichletDomains<'a, G, I>
where
    G: GridTopology + ?Sized,
    I: Identity,
{
    /// Creates a new `DirichletDomains` operation with the default config.
    #[must_use]
    pub fn new(grid: &'a G, identity: &'a [I]) -> Self {
        Self {
            grid,
            identity,
            config: AnalysisConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the analysis.
    ///
    /// # Errors
    ///
    /// Returns `HexDomainError::Input` if the identity field does not cover
    /// the grid or the configured tolerance is invalid. Perimeters that fail
    /// to close are reported in [`DomainAnalysis::failures`].
    pub fn execute(&self) -> Result<DomainAnalysis<I>> {
        check_identity(self.grid, self.identity)?;
        let tol = self.config.resolve(self.grid.characteristic_spacing())?;

        let vertices = ClassifyVertices::new(self.grid, self.identity).execute()?;
        let analysis = AssembleDomains::new(self.grid, self.identity, tol).execute(vertices)?;

        tracing::debug!(
            domains = analysis.domains.len(),
            failures = analysis.failures.len(),
            tolerance = tol.value(),
            "Dirichlet domain analysis finished"
        );
        Ok(analysis)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{HexDomainError, InputError};
    use crate::grid::HexGrid;
    use crate::math::Tolerance;
    use crate::operations::fixtures;
    use crate::topology::Domain;
    use approx::assert_relative_eq;

    #[test]
    fn sectors_close_with_exact_areas() {
        let (grid, ids) = fixtures::three_sectors(4);
        let analysis = DirichletDomains::new(&grid, &ids).execute().unwrap();
        assert!(analysis.is_complete());
        assert_eq!(analysis.domains.len(), 3);

        let tol = Tolerance::new(1e-6).unwrap();
        for domain in &analysis.domains {
            assert!(domain.is_closed(tol));
            let cells = ids.iter().filter(|&&id| id == domain.domain_id).count();
            #[allow(clippy::cast_precision_loss)]
            let expected = cells as f64 * grid.cell_area();
            assert_relative_eq!(domain.area(), expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn positions_are_not_repeated_within_a_domain() {
        let (grid, ids) = fixtures::three_sectors(4);
        let analysis = DirichletDomains::new(&grid, &ids).execute().unwrap();
        let tol = Tolerance::new(1e-6).unwrap();
        for domain in &analysis.domains {
            let positions = domain.positions();
            for (i, a) in positions.iter().enumerate() {
                assert!(positions[i + 1..].iter().all(|b| !tol.same_point(a, b)));
            }
        }
    }

    fn sorted_positions(domain: &Domain<u32>) -> Vec<(f64, f64)> {
        let mut points: Vec<_> = domain.positions().iter().map(|p| (p.x, p.y)).collect();
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        points
    }

    #[test]
    fn repeated_runs_agree() {
        let tol = Tolerance::new(1e-6).unwrap();
        for (grid, ids) in [fixtures::island(), fixtures::three_sectors(4)] {
            let a = DirichletDomains::new(&grid, &ids).execute().unwrap();
            let b = DirichletDomains::new(&grid, &ids).execute().unwrap();
            assert!(a.is_complete() && b.is_complete());
            assert_eq!(a.domains.len(), b.domains.len());
            for (x, y) in a.domains.iter().zip(&b.domains) {
                assert_eq!(x.domain_id, y.domain_id);
                assert_eq!(sorted_positions(x), sorted_positions(y));
                assert_eq!(x.canonical_positions(tol), y.canonical_positions(tol));
            }
        }
    }

    #[test]
    fn works_with_non_integer_identities() {
        let (grid, ids) = fixtures::diagonal_split();
        let labels: Vec<char> = ids.iter().map(|&id| if id == 0 { 'a' } else { 'b' }).collect();
        let analysis = DirichletDomains::new(&grid, &labels).execute().unwrap();
        assert!(analysis.is_complete());
        assert_eq!(analysis.domains_with_id('a').count(), 1);
        assert_eq!(analysis.domains_with_id('b').count(), 1);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let (grid, ids) = fixtures::island();
        let config = AnalysisConfig::default().with_tolerance(-1.0);
        assert_eq!(
            DirichletDomains::new(&grid, &ids)
                .with_config(config)
                .execute()
                .unwrap_err(),
            HexDomainError::Input(InputError::InvalidTolerance(-1.0))
        );

        assert_eq!(
            DirichletDomains::new(&grid, &ids[..4]).execute().unwrap_err(),
            HexDomainError::Input(InputError::IdentityLength {
                expected: 7,
                found: 4
            })
        );
    }

    #[test]
    fn uniform_field_has_no_domains() {
        let grid = HexGrid::hexagon(2, 1.0).unwrap();
        let ids = vec![0_u8; grid.cell_count()];
        let analysis = DirichletDomains::new(&grid, &ids).execute().unwrap();
        assert!(analysis.domains.is_empty());
        assert!(analysis.is_complete());
    }
}
