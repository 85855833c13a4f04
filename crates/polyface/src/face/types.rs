//! Core face types: the circular vertex list, its edges, and orientation.

use std::hash::{Hash, Hasher};
use std::ops::Index;

use nalgebra::Vector3;

/// Relative traversal sense of two boundaries (or an edge against a face).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Same traversal order.
    Forward,
    /// Same boundary, opposite traversal order.
    Reverse,
}

impl Orientation {
    /// `+1` for `Forward`, `-1` for `Reverse`.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Orientation::Forward => 1,
            Orientation::Reverse => -1,
        }
    }
}

/// Integer convention for match results: `+1`, `-1`, or `0` for no match.
#[inline]
pub fn orientation_sign(o: Option<Orientation>) -> i32 {
    o.map_or(0, Orientation::sign)
}

/// Pair of vertex indices `start → end`.
///
/// Equality and hashing ignore direction; use [`Edge::compare`] to recover it.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    start: usize,
    end: usize,
}

impl Edge {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// `Forward` if `a` and `b` run the same way, `Reverse` if opposite,
    /// `None` if they join different vertices.
    pub fn compare(a: &Edge, b: &Edge) -> Option<Orientation> {
        if a.start == b.start && a.end == b.end {
            Some(Orientation::Forward)
        } else if a.start == b.end && a.end == b.start {
            Some(Orientation::Reverse)
        } else {
            None
        }
    }

    /// A vertex shared with `other`, preferring this edge's start.
    pub fn common_vertex(&self, other: &Edge) -> Option<usize> {
        if self.start == other.start || self.start == other.end {
            Some(self.start)
        } else if self.end == other.start || self.end == other.end {
            Some(self.end)
        } else {
            None
        }
    }

    /// The endpoint opposite `v`, if `v` is on this edge.
    pub fn other_vertex(&self, v: usize) -> Option<usize> {
        if v == self.start {
            Some(self.end)
        } else if v == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// `points[end] - points[start]`.
    #[inline]
    pub fn vec(&self, points: &[Vector3<f64>]) -> Vector3<f64> {
        points[self.end] - points[self.start]
    }
    #[inline]
    pub fn mag(&self, points: &[Vector3<f64>]) -> f64 {
        self.vec(points).norm()
    }
    #[inline]
    pub fn centre(&self, points: &[Vector3<f64>]) -> Vector3<f64> {
        0.5 * (points[self.start] + points[self.end])
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        Edge::compare(self, other).is_some()
    }
}
impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.min(self.end).hash(state);
        self.start.max(self.end).hash(state);
    }
}

/// Polygon as a circular list of vertex indices.
///
/// Invariants:
/// - The element after the last is the first.
/// - Indices are not validated; consecutive duplicates are allowed until
///   `collapse` removes them.
/// - Geometry is meaningful for `len() >= 3` only.
///
/// Derived `PartialEq` is exact list equality. Structural equality of two
/// boundaries (any rotation, either direction) is [`Face::compare`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Face {
    pub(crate) verts: Vec<usize>,
}

impl Face {
    #[inline]
    pub fn new(verts: Vec<usize>) -> Self {
        Self { verts }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.verts
    }
    #[inline]
    pub fn into_vec(self) -> Vec<usize> {
        self.verts
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.verts.iter()
    }

    /// Coordinates of local vertex `i`.
    #[inline]
    pub(crate) fn point(&self, points: &[Vector3<f64>], i: usize) -> Vector3<f64> {
        points[self.verts[i]]
    }
}

impl Index<usize> for Face {
    type Output = usize;
    #[inline]
    fn index(&self, i: usize) -> &usize {
        &self.verts[i]
    }
}

impl From<Vec<usize>> for Face {
    fn from(verts: Vec<usize>) -> Self {
        Self::new(verts)
    }
}

impl From<&[usize]> for Face {
    fn from(verts: &[usize]) -> Self {
        Self::new(verts.to_vec())
    }
}

impl From<[usize; 3]> for Face {
    fn from(tri: [usize; 3]) -> Self {
        Self::new(tri.to_vec())
    }
}

impl<'a> IntoIterator for &'a Face {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;
    fn into_iter(self) -> Self::IntoIter {
        self.verts.iter()
    }
}
