//! Geometric quantities of a face over caller-supplied points.
//!
//! Polygons with more than three vertices are decomposed into the `n`
//! triangles `(v_i, v_{i+1}, c)` around a central point `c`. The central
//! decomposition tolerates mild concavity and warping far better than a fan
//! from vertex 0. Triangles are evaluated directly.

use nalgebra::{Matrix3, Vector3};
use tracing::trace;

use super::types::Face;
use crate::cfg::VSMALL;
use crate::triangle::Tri;

impl Face {
    /// Unweighted mean of the vertices.
    fn average_point(&self, points: &[Vector3<f64>]) -> Vector3<f64> {
        let sum = self
            .verts
            .iter()
            .fold(Vector3::zeros(), |acc, &v| acc + points[v]);
        sum / self.len() as f64
    }

    /// Area-weighted centroid.
    ///
    /// Falls back to the vertex average when the total area is zero.
    pub fn centre(&self, points: &[Vector3<f64>]) -> Vector3<f64> {
        let n = self.len();
        if n == 3 {
            return Tri::from_indices(points, [self.verts[0], self.verts[1], self.verts[2]])
                .centre();
        }

        let centre_point = self.average_point(points);
        let mut sum_a = 0.0;
        let mut sum_ac = Vector3::zeros();
        for i in 0..n {
            let this_point = self.point(points, i);
            let next_point = self.point(points, self.next(i));
            // 3 * triangle centre
            let ttc = this_point + next_point + centre_point;
            // 2 * triangle area
            let ta = (this_point - centre_point)
                .cross(&(next_point - centre_point))
                .norm();
            sum_a += ta;
            sum_ac += ta * ttc;
        }

        if sum_a > VSMALL {
            sum_ac / (3.0 * sum_a)
        } else {
            trace!(n, "centre: zero area, using vertex average");
            centre_point
        }
    }

    /// Area vector: direction by the right-hand rule over the traversal,
    /// magnitude equal to the area.
    pub fn normal(&self, points: &[Vector3<f64>]) -> Vector3<f64> {
        let n = self.len();
        if n == 3 {
            return Tri::from_indices(points, [self.verts[0], self.verts[1], self.verts[2]])
                .normal();
        }

        let centre_point = self.average_point(points);
        (0..n)
            .map(|i| {
                // centre point last for accuracy
                Tri::new(
                    self.point(points, i),
                    self.point(points, self.next(i)),
                    centre_point,
                )
                .normal()
            })
            .fold(Vector3::zeros(), |acc, tn| acc + tn)
    }

    /// Normal scaled to unit length (zero-area faces give a near-zero vector).
    pub fn unit_normal(&self, points: &[Vector3<f64>]) -> Vector3<f64> {
        let n = self.normal(points);
        n / (n.norm() + VSMALL)
    }

    /// Area, the magnitude of [`Face::normal`].
    #[inline]
    pub fn area(&self, points: &[Vector3<f64>]) -> f64 {
        self.normal(points).norm()
    }

    /// Inertia tensor of the face as a lamina about `ref_pt`, scaled by
    /// `density`.
    ///
    /// Uses the area-weighted centroid as the decomposition point so the
    /// triangles tile the face exactly.
    pub fn inertia(
        &self,
        points: &[Vector3<f64>],
        ref_pt: Vector3<f64>,
        density: f64,
    ) -> Matrix3<f64> {
        if self.len() == 3 {
            return Tri::from_indices(points, [self.verts[0], self.verts[1], self.verts[2]])
                .inertia(ref_pt, density);
        }

        let ctr = self.centre(points);
        (0..self.len())
            .map(|i| {
                Tri::new(self.point(points, i), self.point(points, self.next(i)), ctr)
                    .inertia(ref_pt, density)
            })
            .fold(Matrix3::zeros(), |acc, j| acc + j)
    }

    /// Volume swept by the face moving from `old_points` to `new_points`.
    ///
    /// Always uses the central decomposition, triangles included: a direct
    /// triangle evaluation would disagree slightly with the polygon on the
    /// opposite side of a cell, and neighbouring cells must see identical
    /// swept volumes on a shared face.
    pub fn swept_vol(&self, old_points: &[Vector3<f64>], new_points: &[Vector3<f64>]) -> f64 {
        let centre_old = self.centre(old_points);
        let centre_new = self.centre(new_points);

        (0..self.len())
            .map(|i| {
                let j = self.next(i);
                let old = Tri::new(
                    centre_old,
                    self.point(old_points, i),
                    self.point(old_points, j),
                );
                let new = Tri::new(
                    centre_new,
                    self.point(new_points, i),
                    self.point(new_points, j),
                );
                old.swept_vol(&new)
            })
            .sum()
    }
}
