//! Integration tests for the denso library.
//!
//! These tests drive the public API the way a caller program would,
//! including recovering from rejected operations.

use denso::prelude::*;

#[test]
fn test_vector_workflow() {
    let x = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    let y = Vector::from_slice(&[5.0_f64, 6.0, 7.0]);
    let scalar = 2.0;

    assert_eq!((&x + scalar).as_slice(), &[3.0, 4.0, 5.0]);
    assert_eq!((&x - scalar).as_slice(), &[-1.0, 0.0, 1.0]);
    assert_eq!((&x * scalar).as_slice(), &[2.0, 4.0, 6.0]);

    assert_eq!((&x + &y).expect("same length").as_slice(), &[6.0, 8.0, 10.0]);
    assert_eq!((&x - &y).expect("same length").as_slice(), &[-4.0, -4.0, -4.0]);
    assert!(((&x * &y).expect("same length") - 38.0).abs() < 1e-12);

    assert!((x.norm() - 14.0_f64.sqrt()).abs() < 1e-12);
    assert!((x.norm_with(&y).expect("same length") - 38.0_f64.sqrt()).abs() < 1e-12);
    assert!((x.dot(&y).expect("same length") - 38.0).abs() < 1e-12);
}

#[test]
fn test_matrix_workflow() {
    let x = Matrix::new(3, 3, 2.2_f64);
    let y = Matrix::new(3, 3, 2.0_f64);
    let scalar = 2.0;

    let checks = [
        (&x + scalar, 4.2),
        (&x - scalar, 0.2),
        (&x * scalar, 4.4),
        ((&x + &y).expect("same shape"), 4.2),
        ((&x - &y).expect("same shape"), 0.2),
        ((&x * &y).expect("same shape"), 4.4),
    ];
    for (m, expected) in &checks {
        assert_eq!(m.shape(), (3, 3));
        assert!(m.as_slice().iter().all(|c| (c - expected).abs() < 1e-9));
    }

    assert!((x.trace().expect("square") - 6.6).abs() < 1e-9);
    assert!((x.norm() - 6.6).abs() < 1e-9);
}

#[test]
fn test_caller_survives_rejected_operations() {
    let mut v = Vector::from_slice(&[1, 2, 3]);
    let short = Vector::from_slice(&[1, 2]);

    let err = v.cumulative_add_vector(&short).unwrap_err();
    assert_eq!(err, DensoError::length_mismatch("cumulative_add_vector", 3, 2));

    // The caller keeps going with the untouched receiver.
    v.cumulative_add_scalar(2).cumulative_mul_scalar(3);
    assert_eq!(v.as_slice(), &[9, 12, 15]);

    let mut m = Matrix::new(2, 3, 1.0_f64);
    assert!(matches!(
        m.trace(),
        Err(DensoError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        m.get(3, 1),
        Err(DensoError::IndexOutOfRange {
            axis: Axis::Row,
            index: 3,
            bound: 2
        })
    ));
    m.set(2, 3, 5.0).expect("in range");
    assert_eq!(m.get(2, 3), Ok(5.0));
}

#[test]
fn test_matrix_rows_and_vectors_interoperate() {
    let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).expect("rectangular");
    let r1 = m.row(1).expect("in range");
    let r2 = m.row(2).expect("in range");
    assert_eq!(r1.dot(&r2), Ok(32));

    let c3 = m.column(3).expect("in range");
    assert_eq!(c3.as_slice(), &[3, 6]);
    assert!(r1.dot(&c3).is_err());
}

#[test]
fn test_error_messages_name_dimensions() {
    let a = Matrix::new(2, 3, 0_i64);
    let b = Matrix::new(3, 3, 0_i64);
    let msg = a.add_matrix(&b).unwrap_err().to_string();
    assert!(msg.contains("2x3"), "{msg}");
    assert!(msg.contains("3x3"), "{msg}");

    let msg = a.get(1, 9).unwrap_err().to_string();
    assert!(msg.contains('9'), "{msg}");
    assert!(msg.contains("1..=3"), "{msg}");
}
