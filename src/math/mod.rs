pub mod polygon_2d;

use crate::error::InputError;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default position tolerance as a fraction of the grid's characteristic spacing.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-3;

/// Absolute distance under which two positions count as the same point.
///
/// One value is resolved per analysis run and shared by every comparison
/// site (corner lookup, continuation search, closure test).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a tolerance from an absolute distance.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidTolerance` if `eps` is not positive and finite.
    pub fn new(eps: f64) -> Result<Self, InputError> {
        if eps.is_finite() && eps > 0.0 {
            Ok(Self(eps))
        } else {
            Err(InputError::InvalidTolerance(eps))
        }
    }

    /// Creates a tolerance proportional to the grid spacing.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidTolerance` if the product is not positive and finite.
    pub fn from_spacing(spacing: f64, relative: f64) -> Result<Self, InputError> {
        Self::new(spacing * relative)
    }

    /// The absolute distance.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if `a` and `b` are within tolerance of each other.
    #[must_use]
    pub fn same_point(self, a: &Point2, b: &Point2) -> bool {
        nalgebra::distance(a, b) <= self.0
    }
}
