//! Tolerance defaults for face geometry (internal).
//!
//! Policy
//! - Fixed constants, never passed by callers. They guard divisions by
//!   magnitudes that may be exactly zero on degenerate faces; they are not
//!   comparison tolerances.

/// Added to vector magnitudes before dividing; also the "zero total area"
/// threshold for the weighted centroid.
pub(crate) const VSMALL: f64 = 1e-300;
/// Starting value for maximum searches over angles.
pub(crate) const GREAT: f64 = 1e300;
