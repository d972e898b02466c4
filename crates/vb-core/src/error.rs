use thiserror::Error;

/// Degenerate-input failures in the geometry layer.
///
/// Every failure mode here is a division by zero in some form. The policy
/// is uniform and fail-fast: `divided`, `normalized`, and `angle_between`
/// all return `Err` instead of letting NaN or Infinity leak into callers
/// (and eventually into draw calls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A scalar divisor was exactly zero.
    #[error("division by zero scalar")]
    DivisionByZero,

    /// A zero-magnitude vector was used where a direction is required
    /// (normalization, angle measurement).
    #[error("zero-magnitude vector has no direction")]
    ZeroMagnitude,
}
