use thiserror::Error;

/// Top-level error type for the roadplot engine.
#[derive(Debug, Error)]
pub enum RoadplotError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while turning a centerline into a linear reference.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no centerline found on layer {0:?}")]
    CenterlineNotFound(String),

    #[error("unsupported centerline entity: {0}")]
    UnsupportedEntity(String),

    #[error("centerline needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("centerline has zero length")]
    ZeroLength,
}

/// Errors reported by a drawing document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("entity is a {actual}, expected a {expected}")]
    WrongEntityKind {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("layout already exists: {0}")]
    LayoutExists(String),
}

/// Errors related to engine operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`RoadplotError`].
pub type Result<T> = std::result::Result<T, RoadplotError>;
