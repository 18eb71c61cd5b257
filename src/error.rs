//! Error types for geometry queries and configuration parsing.

/// Error returned by polygon operations that need a well-formed polygon.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The polygon has fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {len}")]
    DegeneratePolygon { len: usize },
    /// A vertex has a NaN or infinite coordinate.
    #[error("polygon vertex {index} is not finite")]
    NonFinite { index: usize },
    /// A vertex lies too far from the origin to walk in unit steps.
    #[error("polygon vertex {index} is outside the rasterizable range")]
    OutOfRange { index: usize },
}

/// Error returned by [`crate::config::SceneConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input is not valid JSON for the config shape.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// A field parsed but holds a value the engine cannot use.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Error returned by [`crate::engine::EngineCore`] queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// No beam is registered under this id.
    #[error("unknown beam {0}")]
    UnknownBeam(u32),
    /// The beam's geometry could not be rasterized.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
