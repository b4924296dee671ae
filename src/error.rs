// ⚠️ Geometry Errors
// Domain failures raised when side lengths cannot form a triangle

use thiserror::Error;

/// Errors produced while computing derived shape values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A side is zero, negative or not a finite number.
    #[error("{label}: side length {side} must be a positive finite number")]
    NonPositiveSide { label: String, side: f64 },

    /// The sides violate the triangle inequality, so Heron's radicand is negative.
    #[error("{label}: sides do not form a triangle (Heron radicand {radicand})")]
    InvalidTriangle { label: String, radicand: f64 },
}
