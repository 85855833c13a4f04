//! Property-based tests for face sequence ops, geometry and splitting.
//!
//! Run with: cargo test -p polyface -- proptest

use nalgebra::{vector, Vector3};
use polyface::{Face, Orientation, SplitCounts, SplitMode};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A face with 3..12 distinct vertex indices in random order.
fn arb_face() -> impl Strategy<Value = Face> {
    prop::sample::subsequence((0..40usize).collect::<Vec<_>>(), 3..12)
        .prop_shuffle()
        .prop_map(Face::new)
}

/// Star-shaped planar polygon around the origin, counter-clockwise.
fn arb_star_polygon() -> impl Strategy<Value = (Face, Vec<Vector3<f64>>)> {
    (3usize..24).prop_flat_map(|n| {
        (
            prop::collection::vec(0.3..1.0f64, n),
            prop::collection::vec(-0.3..0.3f64, n),
        )
            .prop_map(move |(radii, jitter)| {
                let step = std::f64::consts::TAU / n as f64;
                let points = radii
                    .iter()
                    .zip(&jitter)
                    .enumerate()
                    .map(|(k, (r, j))| {
                        let th = step * (k as f64 + j);
                        vector![r * th.cos(), r * th.sin(), 0.0]
                    })
                    .collect();
                (Face::new((0..n).collect()), points)
            })
    })
}

/// Arbitrary (generally non-planar) points for an `n`-gon.
fn arb_points(n: usize) -> impl Strategy<Value = Vec<Vector3<f64>>> {
    prop::collection::vec(
        prop::array::uniform3(-10.0..10.0f64).prop_map(|[x, y, z]| vector![x, y, z]),
        n,
    )
}

// =============================================================================
// Sequence ops
// =============================================================================

proptest! {
    #[test]
    fn proptest_compare_self_is_forward(f in arb_face()) {
        prop_assert_eq!(Face::compare(&f, &f), Some(Orientation::Forward));
    }

    #[test]
    fn proptest_compare_ignores_rotation(f in arb_face(), k in 0usize..12) {
        let mut rotated = f.clone().into_vec();
        let n = rotated.len();
        rotated.rotate_left(k % n);
        prop_assert_eq!(
            Face::compare(&f, &Face::new(rotated)),
            Some(Orientation::Forward)
        );
    }

    #[test]
    fn proptest_reverse_face_compares_reverse(f in arb_face()) {
        let r = f.reverse_face();
        prop_assert_eq!(r[0], f[0]);
        prop_assert_eq!(Face::compare(&f, &r), Some(Orientation::Reverse));
        prop_assert_eq!(Face::compare(&r, &f), Some(Orientation::Reverse));
    }

    #[test]
    fn proptest_flip_twice_is_identity(v in prop::collection::vec(0usize..20, 0..15)) {
        let mut f = Face::new(v.clone());
        f.flip();
        f.flip();
        prop_assert_eq!(f.as_slice(), v.as_slice());
    }

    #[test]
    fn proptest_every_edge_has_forward_direction(f in arb_face()) {
        for e in f.edges() {
            prop_assert_eq!(f.edge_direction(&e), Some(Orientation::Forward));
            prop_assert_eq!(f.edge_direction(&e.reversed()), Some(Orientation::Reverse));
        }
    }

    #[test]
    fn proptest_collapse_is_idempotent(v in prop::collection::vec(0usize..4, 1..15)) {
        let mut f = Face::new(v);
        let n = f.collapse();
        let once = f.clone();
        prop_assert_eq!(f.collapse(), n);
        prop_assert_eq!(f, once);
    }
}

// =============================================================================
// Geometry
// =============================================================================

proptest! {
    #[test]
    fn proptest_swept_volume_zero_without_motion(
        (f, pts) in (3usize..10).prop_flat_map(|n| (Just(Face::new((0..n).collect())), arb_points(n)))
    ) {
        prop_assert!(f.swept_vol(&pts, &pts).abs() < 1e-12);
    }

    #[test]
    fn proptest_translation_sweeps_area_times_offset(
        (f, pts) in arb_star_polygon(),
        d in prop::array::uniform3(-2.0..2.0f64),
    ) {
        let d = vector![d[0], d[1], d[2]];
        let moved: Vec<_> = pts.iter().map(|p| p + d).collect();
        let expected = f.normal(&pts).dot(&d);
        prop_assert!((f.swept_vol(&pts, &moved) - expected).abs() < 1e-9);
    }

    #[test]
    fn proptest_reversal_negates_normal(
        (f, pts) in (3usize..10).prop_flat_map(|n| (Just(Face::new((0..n).collect())), arb_points(n)))
    ) {
        let n = f.normal(&pts);
        let r = f.reverse_face().normal(&pts);
        prop_assert!((n + r).norm() < 1e-9 * (1.0 + n.norm()));
    }
}

// =============================================================================
// Splitting
// =============================================================================

proptest! {
    #[test]
    fn proptest_triangulation_has_n_minus_two_triangles((f, pts) in arb_star_polygon()) {
        let mut tris = Vec::new();
        let added = f.triangles(&pts, &mut tris).unwrap();
        prop_assert_eq!(added, f.len() - 2);
        prop_assert_eq!(tris.len(), f.n_triangles());
        for t in &tris {
            prop_assert_eq!(t.len(), 3);
            prop_assert!(t.iter().all(|v| f.which(*v).is_some()));
        }
    }

    #[test]
    fn proptest_split_conserves_signed_area((f, pts) in arb_star_polygon()) {
        let axis = f.unit_normal(&pts);
        let area = f.normal(&pts).dot(&axis);

        let mut tris = Vec::new();
        f.triangles(&pts, &mut tris).unwrap();
        let tri_area: f64 = tris.iter().map(|t| t.normal(&pts).dot(&axis)).sum();
        prop_assert!((tri_area - area).abs() < 1e-9);

        let mut leaves: Vec<Face> = Vec::new();
        f.split(SplitMode::TrianglesQuads, &pts, &mut leaves).unwrap();
        let leaf_area: f64 = leaves.iter().map(|t| t.normal(&pts).dot(&axis)).sum();
        prop_assert!((leaf_area - area).abs() < 1e-9);
    }

    #[test]
    fn proptest_counting_matches_recording((f, pts) in arb_star_polygon()) {
        let counts = f.n_triangles_quads(&pts).unwrap();
        let mut leaves = polyface::SplitOutput::with_capacity(counts);
        let added = f.triangles_quads(&pts, &mut leaves).unwrap();
        prop_assert_eq!(leaves.counts(), counts);
        prop_assert_eq!(added, counts.total());
        // every quad removed from the triangle count saves exactly one leaf
        prop_assert_eq!(counts.tris + 2 * counts.quads, f.len() - 2);
        prop_assert_ne!(counts, SplitCounts::default());
    }
}
