//! Polygonal faces over an external point array.
//!
//! Purpose
//! - Represent one mesh face as a circular list of vertex indices and derive
//!   its geometry (centre, area vector, inertia, swept volume) from points
//!   passed in per call.
//! - Decompose arbitrary simple polygons into triangles or triangles+quads.
//!
//! Conventions
//! - `normal` is the area vector; `area` is its norm.
//! - Divisions by magnitudes add a tiny constant instead of branching, so
//!   zero-length edges and zero-area faces yield finite results.
//! - No-match outcomes are `Option`s; [`orientation_sign`] maps them onto the
//!   `+1 / -1 / 0` integer convention.
//!
//! Split across files: `types` (Face, Edge, Orientation), `ring` (circular
//! indexing), `sequence` (edges, collapse, flip, compare), `geometry`,
//! `concavity`, and `split`.

mod concavity;
mod geometry;
mod ring;
mod sequence;
mod split;
mod types;

pub use ring::Ring;
pub use split::{SplitCounts, SplitMode, SplitOutput, SplitSink};
pub use types::{orientation_sign, Edge, Face, Orientation};
