//! Error types for mcoption.
//!
//! A single `thiserror`-derived enum covers the two failure classes the
//! engine distinguishes: rejected configuration (detected before any
//! simulation work begins) and degenerate numerics (a non-finite result
//! that must not be reported as a normal number).

use thiserror::Error;

/// The top-level error type used throughout mcoption.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Scenario or sampling parameters violate an invariant.
    ///
    /// Raised before any path is simulated; no partial matrices are
    /// returned alongside this error.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A computation produced a non-finite price or standard error.
    #[error("degenerate numerics: {0}")]
    NumericDegenerate(String),
}

/// Shorthand `Result` type used throughout mcoption.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a configuration invariant.
///
/// Returns `Err(Error::InvalidConfiguration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mc_core::ensure;
/// fn positive(x: f64) -> mc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidConfiguration(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail with a degenerate-numerics error.
///
/// # Example
/// ```
/// use mc_core::fail_degenerate;
/// fn checked(x: f64) -> mc_core::errors::Result<f64> {
///     if !x.is_finite() {
///         fail_degenerate!("value is not finite: {x}");
///     }
///     Ok(x)
/// }
/// assert!(checked(1.0).is_ok());
/// assert!(checked(f64::NAN).is_err());
/// ```
#[macro_export]
macro_rules! fail_degenerate {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::NumericDegenerate(format!($($msg)*)))
    };
}
