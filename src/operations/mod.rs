mod assemble;
mod classify;
mod contours;
mod dirichlet;
mod regions;
mod walk;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assemble::AssembleDomains;
pub use classify::ClassifyVertices;
pub use contours::Contours;
pub use dirichlet::DirichletDomains;
pub use regions::dirichlet_regions;
pub use walk::{EdgeIdentities, EdgeWalker, WalkEnd};

use crate::error::InputError;
use crate::grid::GridTopology;

/// Checks that an identity field has one entry per grid cell.
pub(crate) fn check_identity<G, I>(grid: &G, identity: &[I]) -> Result<(), InputError>
where
    G: GridTopology + ?Sized,
{
    if identity.len() == grid.cell_count() {
        Ok(())
    } else {
        Err(InputError::IdentityLength {
            expected: grid.cell_count(),
            found: identity.len(),
        })
    }
}
