//! Per-vertex interior angles and the most concave vertex.

use nalgebra::Vector3;

use super::types::Face;
use crate::cfg::{GREAT, VSMALL};

impl Face {
    /// Unit direction of every traversal edge; entry `i` is edge `i`.
    ///
    /// Zero-length edges give a zero vector rather than NaN.
    pub fn unit_edge_directions(&self, points: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
        (0..self.len())
            .map(|i| {
                let v = self.point(points, self.next(i)) - self.point(points, i);
                v / (v.norm() + VSMALL)
            })
            .collect()
    }

    /// Cosine of the interior angle at vertex `i` (convex reading).
    #[inline]
    pub fn edge_cos(&self, edge_dirs: &[Vector3<f64>], i: usize) -> f64 {
        let ring = self.ring();
        // negate the arriving edge so both point away from the vertex
        -edge_dirs[ring.left_edge(i)].dot(&edge_dirs[ring.right_edge(i)])
    }

    /// Vertex with the largest interior angle, and that angle in `[0, 2π]`.
    ///
    /// A vertex is concave when the cross product of its two edges points
    /// along the face normal; its angle is then `π + θ`, otherwise `π − θ`,
    /// where `θ` is the turning angle between the edges. Ties keep the first.
    pub fn most_concave_angle(
        &self,
        points: &[Vector3<f64>],
        edge_dirs: &[Vector3<f64>],
    ) -> (usize, f64) {
        let n = self.normal(points);
        let ring = self.ring();

        let mut index = 0;
        let mut max_angle = -GREAT;
        for i in 0..edge_dirs.len() {
            let left = edge_dirs[ring.left_edge(i)];
            let right = edge_dirs[ring.right_edge(i)];

            let edge_normal = right.cross(&left);
            let turn = left.dot(&right).clamp(-1.0, 1.0).acos();

            let angle = if edge_normal.dot(&n) > 0.0 {
                std::f64::consts::PI + turn
            } else {
                std::f64::consts::PI - turn
            };

            if angle > max_angle {
                max_angle = angle;
                index = i;
            }
        }
        (index, max_angle)
    }
}
