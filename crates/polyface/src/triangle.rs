//! Three-point triangle primitives.
//!
//! The face kernel decomposes every polygon into triangles and sums these
//! quantities, so their conventions fix the face conventions:
//! - `normal` is the area vector `½ (b−a)×(c−a)`; its norm is the area.
//! - `inertia` is the second-moment tensor of a flat lamina about a point.
//! - `swept_vol` is signed along the area vector of the old snapshot.

use nalgebra::{Matrix3, Vector3};

/// Triangle by value over three points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tri {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
    pub c: Vector3<f64>,
}

impl Tri {
    #[inline]
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Triangle over `points[i], points[j], points[k]`.
    #[inline]
    pub fn from_indices(points: &[Vector3<f64>], [i, j, k]: [usize; 3]) -> Self {
        Self::new(points[i], points[j], points[k])
    }

    #[inline]
    pub fn centre(&self) -> Vector3<f64> {
        (self.a + self.b + self.c) / 3.0
    }

    /// Area vector (right-hand rule over a→b→c).
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        0.5 * (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Area.
    #[inline]
    pub fn mag(&self) -> f64 {
        self.normal().norm()
    }

    /// Inertia tensor of the lamina about `ref_pt`, scaled by `density`.
    ///
    /// With `r_k` the corners relative to `ref_pt` and `s = Σ r_k`, the
    /// second moment is `M = A/12 (Σ r_k r_kᵀ + s sᵀ)` and the tensor is
    /// `tr(M) I − M`.
    pub fn inertia(&self, ref_pt: Vector3<f64>, density: f64) -> Matrix3<f64> {
        let a_rel = self.a - ref_pt;
        let b_rel = self.b - ref_pt;
        let c_rel = self.c - ref_pt;
        let v = Matrix3::from_rows(&[a_rel.transpose(), b_rel.transpose(), c_rel.transpose()]);

        // twice the area
        let a2 = (self.b - self.a).cross(&(self.c - self.a)).norm();
        let s = (Matrix3::repeat(1.0) + Matrix3::identity()) / 24.0;
        let sum = a_rel + b_rel + c_rel;
        let trace = a_rel.norm_squared() + b_rel.norm_squared() + c_rel.norm_squared()
            + sum.norm_squared();

        (Matrix3::identity() * (a2 * trace / 24.0) - (v.transpose() * s * v) * a2) * density
    }

    /// Volume swept moving from `self` to `to`.
    ///
    /// Average of the two complementary three-tetrahedron decompositions of
    /// the solid between the snapshots.
    pub fn swept_vol(&self, to: &Tri) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        let (ta, tb, tc) = (to.a, to.b, to.c);
        (1.0 / 12.0)
            * ((ta - a).dot(&(b - a).cross(&(c - a)))
                + (tb - b).dot(&(c - b).cross(&(ta - b)))
                + (c - tc).dot(&(tb - tc).cross(&(ta - tc)))
                + (ta - a).dot(&(b - a).cross(&(c - a)))
                + (b - tb).dot(&(ta - tb).cross(&(tc - tb)))
                + (c - tc).dot(&(b - tc).cross(&(ta - tc))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_right() -> Tri {
        Tri::new(
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
        )
    }

    #[test]
    fn area_vector_follows_right_hand_rule() {
        let t = unit_right();
        assert!((t.normal() - vector![0.0, 0.0, 0.5]).norm() < 1e-15);
        assert!((t.mag() - 0.5).abs() < 1e-15);
        let flipped = Tri::new(t.a, t.c, t.b);
        assert!((flipped.normal() + t.normal()).norm() < 1e-15);
    }

    #[test]
    fn swept_volume_of_translation_is_area_times_height() {
        let t = unit_right();
        let d = vector![0.0, 0.0, 2.0];
        let moved = Tri::new(t.a + d, t.b + d, t.c + d);
        assert!((t.swept_vol(&moved) - 1.0).abs() < 1e-14);
        // moving against the area vector flips the sign
        let down = Tri::new(t.a - d, t.b - d, t.c - d);
        assert!((t.swept_vol(&down) + 1.0).abs() < 1e-14);
        assert!(t.swept_vol(&t).abs() < 1e-15);
    }

    #[test]
    fn swept_volume_ignores_in_plane_motion() {
        let t = unit_right();
        let d = vector![0.3, -0.7, 0.0];
        let slid = Tri::new(t.a + d, t.b + d, t.c + d);
        assert!(t.swept_vol(&slid).abs() < 1e-14);
    }

    #[test]
    fn inertia_about_centroid_matches_lamina_formula() {
        // Right isosceles lamina with legs 1: about its centroid the in-plane
        // second moments are 1/36 (each axis) and the product is 1/72.
        let t = unit_right();
        let j = t.inertia(t.centre(), 1.0);
        let mxx = 1.0 / 36.0;
        let myy = 1.0 / 36.0;
        let mxy = -1.0 / 72.0;
        assert!((j[(0, 0)] - myy).abs() < 1e-14);
        assert!((j[(1, 1)] - mxx).abs() < 1e-14);
        assert!((j[(2, 2)] - (mxx + myy)).abs() < 1e-14);
        assert!((j[(0, 1)] + mxy).abs() < 1e-14);
        assert!((j - j.transpose()).amax() < 1e-15);
    }

    #[test]
    fn inertia_scales_linearly_with_density() {
        let t = unit_right();
        let p = vector![0.2, -1.0, 0.5];
        let j1 = t.inertia(p, 1.0);
        let j3 = t.inertia(p, 3.0);
        assert!((j3 - j1 * 3.0).amax() < 1e-14);
    }
}
