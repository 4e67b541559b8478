use crate::error::InputError;
use crate::math::{Tolerance, DEFAULT_RELATIVE_TOLERANCE};

/// Parameters controlling a domain analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Absolute position tolerance. Overrides `relative_tolerance` when set.
    pub tolerance: Option<f64>,
    /// Position tolerance as a fraction of the grid spacing.
    pub relative_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: None,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Uses a fixed absolute tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, eps: f64) -> Self {
        self.tolerance = Some(eps);
        self
    }

    /// Uses a tolerance proportional to the grid spacing.
    #[must_use]
    pub fn with_relative_tolerance(mut self, relative: f64) -> Self {
        self.tolerance = None;
        self.relative_tolerance = relative;
        self
    }

    /// Resolves the tolerance for a grid with the given spacing.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidTolerance` if the resulting distance is not
    /// positive and finite.
    pub fn resolve(&self, spacing: f64) -> Result<Tolerance, InputError> {
        match self.tolerance {
            Some(eps) => Tolerance::new(eps),
            None => Tolerance::from_spacing(spacing, self.relative_tolerance),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_relative_to_spacing() {
        let tol = AnalysisConfig::default().resolve(0.5).unwrap();
        assert_relative_eq!(tol.value(), 0.5e-3);
    }

    #[test]
    fn absolute_overrides_relative() {
        let config = AnalysisConfig::default().with_tolerance(0.25);
        assert_relative_eq!(config.resolve(100.0).unwrap().value(), 0.25);
        let config = config.with_relative_tolerance(0.1);
        assert_relative_eq!(config.resolve(2.0).unwrap().value(), 0.2);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(
            AnalysisConfig::default().with_tolerance(0.0).resolve(1.0),
            Err(InputError::InvalidTolerance(0.0))
        );
    }
}
