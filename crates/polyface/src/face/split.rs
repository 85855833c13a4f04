//! Recursive decomposition of a face into triangles, or triangles and quads.
//!
//! Algorithm (per face of size `n`)
//! - `n == 3`: leaf triangle.
//! - `n == 4`: leaf quad if quads are accepted; otherwise two triangles cut
//!   along the diagonal from the most concave vertex.
//! - `n > 4`: cut along the chord from the most concave vertex to the
//!   non-adjacent vertex whose direction best bisects its interior angle,
//!   then recurse into both halves. Both halves have between 3 and `n-1`
//!   vertices, so recursion terminates.
//!
//! Output goes to a [`SplitSink`]. [`SplitCounts`] only counts;
//! [`SplitOutput`] (and `Vec<Face>`) records faces. The sink is shared by the
//! whole recursion, so its lengths act as running cursors and a sink sized up
//! front for many faces fills without reallocating.

use nalgebra::Vector3;
use tracing::{debug, trace};

use super::types::Face;
use crate::cfg::VSMALL;
use crate::error::SplitError;

/// Which leaf shapes the splitter may emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    /// Triangles only.
    Triangles,
    /// Triangles, and quads where a four-vertex piece remains.
    TrianglesQuads,
}

/// Receiver of split leaves.
pub trait SplitSink {
    /// `false` for sinks that only count; lets the splitter skip the
    /// geometry that only decides vertex order of a quad's two triangles.
    const RECORDS_FACES: bool = true;

    fn push_triangle(&mut self, tri: [usize; 3]);
    fn push_quad(&mut self, quad: &Face);
}

/// Leaf counts of one or more splits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitCounts {
    pub tris: usize,
    pub quads: usize,
}

impl SplitCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.tris + self.quads
    }
}

impl SplitSink for SplitCounts {
    const RECORDS_FACES: bool = false;

    #[inline]
    fn push_triangle(&mut self, _tri: [usize; 3]) {
        self.tris += 1;
    }
    #[inline]
    fn push_quad(&mut self, _quad: &Face) {
        self.quads += 1;
    }
}

/// Recorded triangles and quads of one or more splits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitOutput {
    pub tris: Vec<Face>,
    pub quads: Vec<Face>,
}

impl SplitOutput {
    /// Pre-size for a known number of leaves (e.g. from a counting pass).
    pub fn with_capacity(counts: SplitCounts) -> Self {
        Self {
            tris: Vec::with_capacity(counts.tris),
            quads: Vec::with_capacity(counts.quads),
        }
    }

    #[inline]
    pub fn counts(&self) -> SplitCounts {
        SplitCounts {
            tris: self.tris.len(),
            quads: self.quads.len(),
        }
    }
}

impl SplitSink for SplitOutput {
    fn push_triangle(&mut self, tri: [usize; 3]) {
        self.tris.push(Face::from(tri));
    }
    fn push_quad(&mut self, quad: &Face) {
        self.quads.push(quad.clone());
    }
}

/// Collects every leaf regardless of shape.
impl SplitSink for Vec<Face> {
    fn push_triangle(&mut self, tri: [usize; 3]) {
        self.push(Face::from(tri));
    }
    fn push_quad(&mut self, quad: &Face) {
        self.push(quad.clone());
    }
}

impl Face {
    /// Number of triangles in any triangulation of this face.
    #[inline]
    pub fn n_triangles(&self) -> usize {
        self.len().saturating_sub(2)
    }

    /// Split into `sink` under `mode`; returns the number of leaves added.
    ///
    /// Errors only when the face has fewer than three vertices.
    pub fn split<S: SplitSink>(
        &self,
        mode: SplitMode,
        points: &[Vector3<f64>],
        sink: &mut S,
    ) -> Result<usize, SplitError> {
        if self.len() < 3 {
            return Err(SplitError::TooFewVertices { n: self.len() });
        }
        debug!(n = self.len(), ?mode, "split");
        Ok(self.split_into(mode, points, sink))
    }

    fn split_into<S: SplitSink>(
        &self,
        mode: SplitMode,
        points: &[Vector3<f64>],
        sink: &mut S,
    ) -> usize {
        debug_assert!(self.len() >= 3);
        match self.len() {
            3 => {
                sink.push_triangle([self.verts[0], self.verts[1], self.verts[2]]);
                1
            }
            4 => match mode {
                SplitMode::TrianglesQuads => {
                    sink.push_quad(self);
                    1
                }
                SplitMode::Triangles => {
                    // start at the largest interior angle
                    let start = if S::RECORDS_FACES {
                        let edge_dirs = self.unit_edge_directions(points);
                        self.most_concave_angle(points, &edge_dirs).0
                    } else {
                        0
                    };
                    let next = self.next(start);
                    let split = self.next(next);
                    let last = self.next(split);
                    sink.push_triangle([self.verts[start], self.verts[next], self.verts[split]]);
                    sink.push_triangle([self.verts[split], self.verts[last], self.verts[start]]);
                    2
                }
            },
            _ => {
                let (start, opposite) = self.split_chord(points);
                let face1 = self.run(start, opposite);
                let face2 = self.run(opposite, start);
                trace!(
                    n = self.len(),
                    start,
                    opposite,
                    n1 = face1.len(),
                    n2 = face2.len(),
                    "split: chord"
                );
                face1.split_into(mode, points, sink) + face2.split_into(mode, points, sink)
            }
        }
    }

    /// Chord used to halve a face of five or more vertices: local indices of
    /// the most concave vertex and the non-adjacent vertex whose direction
    /// from it lies closest to the bisector of its interior angle.
    pub fn split_chord(&self, points: &[Vector3<f64>]) -> (usize, usize) {
        debug_assert!(self.len() > 3);
        let edge_dirs = self.unit_edge_directions(points);
        let (start, max_angle) = self.most_concave_angle(points, &edge_dirs);

        let bisect_angle = max_angle / 2.0;
        let right_edge = edge_dirs[self.ring().right_edge(start)];
        let start_point = self.point(points, start);

        // candidates start two vertices away; neighbours give degenerate halves
        let mut index = self.next(self.next(start));
        let mut best = index;
        let mut best_diff = std::f64::consts::PI;
        for _ in 0..self.len() - 3 {
            let mut split_edge = self.point(points, index) - start_point;
            split_edge /= split_edge.norm() + VSMALL;

            let split_angle = split_edge.dot(&right_edge).clamp(-1.0, 1.0).acos();
            let diff = (split_angle - bisect_angle).abs();
            if diff < best_diff {
                best_diff = diff;
                best = index;
            }
            index = self.next(index);
        }
        (start, best)
    }

    /// Triangulate into `out`; returns the number of triangles added.
    pub fn triangles(
        &self,
        points: &[Vector3<f64>],
        out: &mut Vec<Face>,
    ) -> Result<usize, SplitError> {
        self.split(SplitMode::Triangles, points, out)
    }

    /// Count triangles by running the splitter without recording faces.
    pub fn count_triangles(&self, points: &[Vector3<f64>]) -> Result<usize, SplitError> {
        let mut counts = SplitCounts::default();
        self.split(SplitMode::Triangles, points, &mut counts)?;
        Ok(counts.tris)
    }

    /// Count the triangles and quads a triangle/quad split would produce.
    pub fn n_triangles_quads(&self, points: &[Vector3<f64>]) -> Result<SplitCounts, SplitError> {
        let mut counts = SplitCounts::default();
        self.split(SplitMode::TrianglesQuads, points, &mut counts)?;
        Ok(counts)
    }

    /// Split into triangles and quads; returns the number of leaves added.
    pub fn triangles_quads(
        &self,
        points: &[Vector3<f64>],
        out: &mut SplitOutput,
    ) -> Result<usize, SplitError> {
        self.split(SplitMode::TrianglesQuads, points, out)
    }
}
