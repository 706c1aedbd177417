//! Property checks for matrices, transforms and shading frames.

use approx::assert_abs_diff_eq;
use gm_math::{Matrix4, Matrix4f, Normal3, Onb, Point3, Transform, Vec3};

fn invertible_matrices() -> Vec<Matrix4f> {
    let mut composed = Transform::new();
    composed
        .rotate(Vec3::new(0.3, -1.0, 2.0), 123.0)
        .scale(Vec3::new(0.25, 8.0, -2.0))
        .translate(Vec3::new(10.0, -3.0, 0.5));

    vec![
        Matrix4::identity(),
        Matrix4::diagonal(2.0, -3.0, 0.5, 1.0),
        Matrix4::from_rows([
            [1.0, 2.0, 0.0, 1.0],
            [0.0, 1.0, 3.0, 0.0],
            [2.0, 0.0, 1.0, 4.0],
            [0.0, 1.0, 0.0, 1.0],
        ]),
        Matrix4::from_rows([
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
            [0.0, 3.0, 0.0, 0.0],
        ]),
        *composed.matrix(),
    ]
}

#[test]
fn transpose_is_an_involution() {
    for m in invertible_matrices() {
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    for m in invertible_matrices() {
        assert_abs_diff_eq!(m.inverse() * m, Matrix4::identity(), epsilon = 1e-4);
        assert_abs_diff_eq!(m.try_inverse().unwrap() * m, Matrix4::identity(), epsilon = 1e-4);
    }
}

#[test]
fn identity_is_neutral() {
    for m in invertible_matrices() {
        assert_eq!(m * Matrix4::identity(), m);
        assert_eq!(Matrix4::identity() * m, m);
    }
}

#[test]
fn integer_matrices_compare_exactly() {
    let a = Matrix4::<i64>::fill_with(3);
    let mut b = a;
    assert_eq!(a, b);
    b[(3, 3)] = 4;
    assert_ne!(a, b);
}

#[test]
fn directions_ignore_translation() {
    let mut t = Transform::new();
    t.translate(Vec3::new(0.0, 0.0, 7.0));

    for v in [Vec3::X, Vec3::new(-2.0, 5.0, 0.5), Vec3::ZERO] {
        assert_eq!(t.apply(v), v);
    }
    let n = Vec3::new(1.0, 1.0, 1.0).to_normal();
    assert_eq!(t.apply(n), n);
    assert_eq!(t.apply(Point3::new(1.0, 1.0, 1.0)), Point3::new(1.0, 1.0, 8.0));
}

#[test]
fn normals_stay_perpendicular_under_composed_transforms() {
    let mut t = Transform::new();
    t.rotate(Vec3::new(0.0, 1.0, 1.0), 30.0)
        .scale(Vec3::new(3.0, 0.5, 1.5))
        .translate(Vec3::new(1.0, 2.0, 3.0));

    // Plane through the origin spanned by two tangents
    let t0 = Vec3::new(1.0, 2.0, 0.0);
    let t1 = Vec3::new(0.0, 1.0, -1.0);
    let n = t0.cross(t1).to_normal();

    let n_world = t.apply(n);
    assert!(n_world.dot(t.apply(t0)).abs() < 1e-4);
    assert!(n_world.dot(t.apply(t1)).abs() < 1e-4);
    assert!((n_world.length() - 1.0).abs() < 1e-5);
}

#[test]
fn degenerate_transforms_are_reported_not_panicking() {
    let mut t = Transform::new();
    t.scale(Vec3::new(1.0, 0.0, 1.0));
    assert!(t.is_degenerate());
    assert!(t.validate().is_err());
    assert!(!t.apply(Normal3::new(0.0, 1.0, 0.0)).is_finite());
}

#[test]
fn onb_frames_are_orthonormal() {
    let normals = [
        Vec3::new(0.99, 0.1, 0.1),
        Vec3::new(-0.95, 0.2, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ];

    for n in normals {
        let onb = Onb::new(n.to_normal());
        let (u, v, w) = (onb.u().to_vec(), onb.v().to_vec(), onb.w().to_vec());

        assert_abs_diff_eq!(u.dot(v), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(v.dot(w), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(u.dot(w), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(u.cross(v), w, epsilon = 1e-5);

        assert_eq!(onb.convert_to_local(u), Vec3::X);
        assert_eq!(onb.convert_to_local(v), Vec3::Y);
        assert_eq!(onb.convert_to_local(w), Vec3::Z);
    }
}
