//! Algebraic property checks for the vector module, swept over a fixed
//! pool of sample vectors rather than single hand-picked cases.

use approx::assert_abs_diff_eq;
use vb_core::{GeomError, Vec3, angle_between, triangle_area};

/// A mix of axis-aligned, diagonal, tiny, large, and negative vectors.
fn samples() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(3.0, 4.0, 0.0),
        Vec3::new(-2.5, 1.5, 0.75),
        Vec3::new(1e-6, -1e-6, 1e-6),
        Vec3::new(1e5, 2e5, -3e5),
        Vec3::new(-1.0, -1.0, -1.0),
    ]
}

#[test]
fn dot_commutes_over_all_pairs() {
    for &a in &samples() {
        for &b in &samples() {
            assert_eq!(a.dot(b), b.dot(a), "dot({a:?}, {b:?})");
        }
    }
}

#[test]
fn cross_anti_commutes_over_all_pairs() {
    for &a in &samples() {
        for &b in &samples() {
            assert_eq!(a.cross(b), -b.cross(a), "cross({a:?}, {b:?})");
        }
    }
}

#[test]
fn cross_is_orthogonal_to_both_inputs() {
    for &a in &samples() {
        for &b in &samples() {
            let c = a.cross(b);
            // Scale tolerance by the operand magnitudes; the 1e5-range
            // samples produce products around 1e10.
            let tol = 1e-9 * (1.0 + a.magnitude() * b.magnitude());
            assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = tol);
            assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = tol);
        }
    }
}

#[test]
fn normalized_is_unit_length_for_all_samples() {
    for &v in &samples() {
        let unit = v.normalized().expect("samples are non-zero");
        assert_abs_diff_eq!(unit.magnitude(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn area_is_orientation_independent_over_all_pairs() {
    for &a in &samples() {
        for &b in &samples() {
            assert_eq!(triangle_area(a, b), triangle_area(b, a));
        }
    }
}

#[test]
fn self_angle_is_zero_for_all_samples() {
    for &v in &samples() {
        let angle = angle_between(v, v).expect("samples are non-zero");
        assert_abs_diff_eq!(angle.degrees, 0.0, epsilon = 1e-5);
    }
}

#[test]
fn angle_is_symmetric_over_all_pairs() {
    for &a in &samples() {
        for &b in &samples() {
            let ab = angle_between(a, b).unwrap();
            let ba = angle_between(b, a).unwrap();
            assert_abs_diff_eq!(ab.radians, ba.radians, epsilon = 1e-12);
        }
    }
}

#[test]
fn degenerate_inputs_fail_uniformly() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.divided(0.0), Err(GeomError::DivisionByZero));
    assert_eq!(Vec3::ZERO.normalized(), Err(GeomError::ZeroMagnitude));
    assert_eq!(angle_between(v, Vec3::ZERO), Err(GeomError::ZeroMagnitude));
}
