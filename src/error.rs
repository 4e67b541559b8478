use thiserror::Error;

/// Top-level error type for hexdomain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexDomainError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid grid parameters: {0}")]
    InvalidParameters(String),

    #[error("duplicate cell at axial ({q}, {r})")]
    DuplicateCell { q: i32, r: i32 },
}

/// Errors raised by the edge walker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalkError {
    /// The identity field and the grid adjacency disagree about an edge.
    #[error("malformed topology: {0}")]
    MalformedTopology(String),
}

/// Errors raised while stitching vertices into domains.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblyError {
    #[error("unclosed perimeter for domain {domain}: no continuation vertex at ({x}, {y})")]
    UnclosedPerimeter { domain: String, x: f64, y: f64 },
}

/// Errors caused by inputs that do not fit the grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("identity field has {found} entries, grid has {expected} cells")]
    IdentityLength { expected: usize, found: usize },

    #[error("field {field} has {found} entries, expected {expected}")]
    FieldLength {
        field: usize,
        expected: usize,
        found: usize,
    },

    #[error("at least one field is required")]
    EmptyFields,

    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`HexDomainError`].
pub type Result<T> = std::result::Result<T, HexDomainError>;
