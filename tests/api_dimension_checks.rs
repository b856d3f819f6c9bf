use numarray::algebra::*;

// a collection of tests to ensure that operands of
// incompatible dimension won't be accepted

fn api_dim_check_data() -> (Matrix<f64>, Matrix<f64>, Vector<f64>) {
    let a = Matrix::<f64>::zeros((3, 2)).unwrap();
    let b = Matrix::<f64>::zeros((3, 2)).unwrap();
    let v = Vector::<f64>::zeros(2);
    (a, b, v)
}

#[test]
fn api_dim_check_working() {
    // these dimensions are all compatible; the following tests
    // vary one of the sizes to trigger each check

    let (a, b, v) = api_dim_check_data();
    assert!(a.add(&b).is_ok());
    assert!(a.subtract(&b).is_ok());
    assert!(v.multiply(&Matrix::<f64>::zeros((2, 4)).unwrap()).is_ok());
}

#[test]
fn api_dim_check_bad_rows() {
    let (a, _b, _v) = api_dim_check_data();
    let b = Matrix::<f64>::zeros((4, 2)).unwrap();
    assert_eq!(a.add(&b).unwrap_err().kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn api_dim_check_bad_cols() {
    let (a, _b, _v) = api_dim_check_data();
    let b = Matrix::<f64>::zeros((3, 3)).unwrap();
    assert_eq!(a.subtract(&b).unwrap_err().kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn api_dim_check_bad_inner() {
    let (a, b, _v) = api_dim_check_data();
    // (3x2) * (3x2): inner dimensions disagree
    assert_eq!(a.multiply(&b).unwrap_err().kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn api_dim_check_bad_vector_length() {
    let (_a, _b, v) = api_dim_check_data();
    let w = Vector::<f64>::zeros(3);
    assert_eq!(v.add(&w).unwrap_err().kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn api_dim_check_bad_vector_matrix_inner() {
    let (a, _b, v) = api_dim_check_data();
    // v is 1x2, a is 3x2
    assert_eq!(v.multiply(&a).unwrap_err().kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn api_dim_check_capability_mixed() {
    let v: NumericArray<f64> = Vector::<f64>::zeros(2).into();
    let m: NumericArray<f64> = Matrix::<f64>::zeros((2, 2)).unwrap().into();
    assert_eq!(v.add(&m).unwrap_err().kind(), ErrorKind::ShapeMismatch);
    assert!(v.multiply(&m).is_ok());
}
