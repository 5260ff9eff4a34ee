// =========================================================================
// FALSIFY-VE: Vector arithmetic contract
//
// Each test names the property it tries to break. A failure message starts
// with "FALSIFIED VE-nnn" so the broken property is obvious in CI output.
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
// =========================================================================

use super::*;
use crate::error::DensoError;

/// FALSIFY-VE-001: (a + b)[i] == a[i] + b[i]
#[test]
fn falsify_ve_001_add_is_elementwise() {
    let a = Vector::from_slice(&[1.0_f64, -2.5, 3.0, 0.25]);
    let b = Vector::from_slice(&[4.0_f64, 0.5, -1.0, 2.0]);
    let sum = a.add_vector(&b).expect("same length");

    for i in 0..a.len() {
        assert!(
            (sum[i] - (a[i] + b[i])).abs() < 1e-12,
            "FALSIFIED VE-001: sum[{i}]={} != {}",
            sum[i],
            a[i] + b[i]
        );
    }
}

/// FALSIFY-VE-002: dot(a,b) == Σ a[i]*b[i]
#[test]
fn falsify_ve_002_dot_is_sum_of_products() {
    let a = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    let b = Vector::from_slice(&[5.0_f64, 6.0, 7.0]);
    let expected: f64 = (0..3).map(|i| a[i] * b[i]).sum();
    let dot = a.dot(&b).expect("same length");

    assert!(
        (dot - expected).abs() < 1e-12,
        "FALSIFIED VE-002: dot={dot}, expected {expected}"
    );
}

/// FALSIFY-VE-003: Mismatched lengths fail without mutating either operand
#[test]
fn falsify_ve_003_mismatch_is_atomic() {
    let mut a = Vector::from_slice(&[1, 2, 3]);
    let b = Vector::from_slice(&[9, 9]);

    let err = a
        .cumulative_add_vector(&b)
        .expect_err("lengths 3 and 2 must be rejected");
    assert!(
        matches!(err, DensoError::DimensionMismatch { .. }),
        "FALSIFIED VE-003: wrong error kind {err:?}"
    );
    assert_eq!(a.as_slice(), &[1, 2, 3], "FALSIFIED VE-003: receiver mutated");
    assert_eq!(b.as_slice(), &[9, 9], "FALSIFIED VE-003: operand mutated");
}

/// FALSIFY-VE-004: norm([1,2,3]) == sqrt(14)
#[test]
fn falsify_ve_004_norm_of_one_two_three() {
    let n = Vector::from_slice(&[1.0_f64, 2.0, 3.0]).norm();

    assert!(
        (n - 14.0_f64.sqrt()).abs() < 1e-12,
        "FALSIFIED VE-004: norm={n}, expected sqrt(14)"
    );
}

/// FALSIFY-VE-005: Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn falsify_ve_005_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0_f64, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0_f64, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).expect("same length").abs();
    let bound = u.norm() * v.norm();

    assert!(
        dot <= bound + 1e-9,
        "FALSIFIED VE-005: |dot|={dot} > norm(u)*norm(v)={bound}"
    );
}

/// FALSIFY-VE-006: cumulative chain (v + 2) * 3 matches the fresh computation
#[test]
fn falsify_ve_006_cumulative_chain() {
    let original = Vector::from_slice(&[0.5_f64, -1.0, 4.0]);
    let mut v = original.clone();
    v.cumulative_add_scalar(2.0).cumulative_mul_scalar(3.0);

    for i in 0..v.len() {
        let expected = (original[i] + 2.0) * 3.0;
        assert!(
            (v[i] - expected).abs() < 1e-12,
            "FALSIFIED VE-006: v[{i}]={}, expected {expected}",
            v[i]
        );
    }
}
