use thiserror::Error;

/// Errors raised when a filter specification cannot be evaluated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid bound for {field}: min {min} is greater than max {max}")]
    InvertedBound {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid bound for {field}: values must be finite")]
    NonFiniteBound { field: &'static str },

    #[error("invalid bound for {field}: {value} is negative")]
    NegativeBound { field: &'static str, value: f64 },

    #[error("invalid map bounds: south/west edge lies beyond north/east edge")]
    InvertedMapBounds,
}
