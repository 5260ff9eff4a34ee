// =========================================================================
// FALSIFY-MX: Matrix arithmetic contract
//
// Each test names the property it tries to break. A failure message starts
// with "FALSIFIED MX-nnn" so the broken property is obvious in CI output.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations", §2.3 (Frobenius norm)
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Round trip: (A - B) + B = A
#[test]
fn falsify_mx_001_sub_add_round_trip() {
    let a = Matrix::from_vec(2, 3, vec![1.0_f64, -2.0, 3.5, 0.0, 7.25, -1.5]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![0.5_f64, 4.0, -3.0, 2.0, 1.0, 9.0]).expect("valid");

    let back = a
        .sub_matrix(&b)
        .and_then(|d| d.add_matrix(&b))
        .expect("same shape");

    assert_eq!(back.shape(), a.shape(), "FALSIFIED MX-001: shape changed");
    for (i, (x, y)) in back.as_slice().iter().zip(a.as_slice()).enumerate() {
        assert!(
            (x - y).abs() < 1e-12,
            "FALSIFIED MX-001: cell {i}: {x} != {y}"
        );
    }
}

/// FALSIFY-MX-002: trace(3x3 filled with 2.2) = 6.6
#[test]
fn falsify_mx_002_trace_of_filled_square() {
    let t = Matrix::new(3, 3, 2.2_f64).trace().expect("square");

    assert!(
        (t - 6.6).abs() < 1e-9,
        "FALSIFIED MX-002: trace={t}, expected 6.6"
    );
}

/// FALSIFY-MX-003: trace of a non-square matrix is rejected
#[test]
fn falsify_mx_003_trace_requires_square() {
    let err = Matrix::new(2, 3, 1.0_f64)
        .trace()
        .expect_err("2x3 is not square");

    assert!(
        matches!(err, DensoError::DimensionMismatch { .. }),
        "FALSIFIED MX-003: wrong error kind {err:?}"
    );
    assert!(
        err.to_string().contains("2x3"),
        "FALSIFIED MX-003: message does not name the dimensions: {err}"
    );
}

/// FALSIFY-MX-004: M(1,1) is the first cell; M(0,1) and M(rows+1,1) fail
#[test]
fn falsify_mx_004_one_based_subscript() {
    let m = Matrix::from_vec(3, 2, vec![10, 20, 30, 40, 50, 60]).expect("valid");

    assert_eq!(m.get(1, 1), Ok(10), "FALSIFIED MX-004: M(1,1) is not the first cell");
    for bad_row in [0, m.n_rows() + 1] {
        assert!(
            matches!(
                m.get(bad_row, 1),
                Err(DensoError::IndexOutOfRange { axis: Axis::Row, .. })
            ),
            "FALSIFIED MX-004: M({bad_row},1) did not fail with IndexOutOfRange"
        );
    }
}

/// FALSIFY-MX-005: Hadamard of 3x3 fills 2.2 and 2.0 is 3x3 of 4.4
#[test]
fn falsify_mx_005_hadamard_fill() {
    let z = Matrix::new(3, 3, 2.2_f64)
        .hadamard(&Matrix::new(3, 3, 2.0))
        .expect("same shape");

    assert_eq!(z.shape(), (3, 3), "FALSIFIED MX-005: shape={:?}", z.shape());
    for &cell in z.as_slice() {
        assert!(
            (cell - 4.4).abs() < 1e-12,
            "FALSIFIED MX-005: cell={cell}, expected 4.4"
        );
    }
}

/// FALSIFY-MX-006: Frobenius norm squared equals the sum of squared cells
#[test]
fn falsify_mx_006_frobenius_norm() {
    let m = Matrix::from_vec(2, 2, vec![3.0_f64, 0.0, 0.0, 4.0]).expect("valid");
    let n = m.norm();

    assert!(
        (n - 5.0).abs() < 1e-12,
        "FALSIFIED MX-006: norm={n}, expected 5.0"
    );
    assert!(n >= 0.0, "FALSIFIED MX-006: norm={n} is negative");
}

/// FALSIFY-MX-007: A shape mismatch in only one axis is still rejected
#[test]
fn falsify_mx_007_add_checks_both_axes() {
    let a = Matrix::new(2, 2, 1.0_f64);

    assert!(
        a.add_matrix(&Matrix::new(2, 3, 1.0)).is_err(),
        "FALSIFIED MX-007: column mismatch accepted"
    );
    assert!(
        a.add_matrix(&Matrix::new(3, 2, 1.0)).is_err(),
        "FALSIFIED MX-007: row mismatch accepted"
    );
}
