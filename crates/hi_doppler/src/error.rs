//! Error types for Doppler convention handling.

use thiserror::Error;

/// Errors from Doppler convention selection.
///
/// Numeric domain problems (|v| ≥ c, zero frequency, z = −1) are not
/// represented here; they surface as `inf` or `NaN` from the formulas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DopplerError {
    /// Convention name is not one of `relativistic`, `radio`, `optical`.
    #[error("invalid Doppler convention {0:?}: expected relativistic, radio or optical")]
    InvalidConvention(String),
}
