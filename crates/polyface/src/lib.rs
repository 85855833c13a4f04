//! Polygonal face geometry for finite-volume meshes.
//!
//! A [`Face`] is a circular list of vertex indices into a point array that
//! the caller owns. Every geometric query borrows the points for the duration
//! of the call; the face itself never stores coordinates.
//!
//! Layout
//! - `face`: the face type, ring arithmetic, sequence ops, geometry kernel,
//!   concavity analysis and the recursive triangle/quad splitter.
//! - `triangle`: three-point primitives (area vector, inertia, swept volume)
//!   that the face kernel decomposes into.
//! - `error`: the single hard failure (splitting a face below a triangle).

mod cfg;
pub mod error;
pub mod face;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SplitError;
pub use face::{
    orientation_sign, Edge, Face, Orientation, Ring, SplitCounts, SplitMode, SplitOutput,
    SplitSink,
};
pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
pub use triangle::Tri;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::SplitError;
    pub use crate::face::{
        orientation_sign, Edge, Face, Orientation, Ring, SplitCounts, SplitMode, SplitOutput,
        SplitSink,
    };
    pub use crate::triangle::Tri;
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
