//! Error types for face operations.

use thiserror::Error;

/// Failure raised by the splitter.
///
/// Geometric degeneracy (zero-length edges, zero-area faces) is absorbed by
/// the kernel and never reported here. The only error is structural: a face
/// that cannot hold a single triangle, which means the mesh that produced it
/// is corrupt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The face has fewer than three vertices.
    #[error("cannot split a face with {n} vertices (need at least 3)")]
    TooFewVertices {
        /// Vertex count of the offending face.
        n: usize,
    },
}
