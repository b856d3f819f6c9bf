use crate::algebra::*;

fn vector_123() -> NumericArray<i32> {
    Vector::new(vec![1, 2, 3]).into()
}

fn row_matrix_456() -> NumericArray<i32> {
    Matrix::from_rows(&[vec![4, 5, 6]]).unwrap().into()
}

#[test]
fn test_dispatched_shape() {
    let v = vector_123();
    assert_eq!(v.size(), (1, 3));

    let m: NumericArray<i32> = Matrix::from(&[[1, 2], [3, 4]]).into();
    assert_eq!(m.size(), (2, 2));
    assert!(m.is_square());
}

#[test]
fn test_get_set() {
    let mut v = vector_123();
    v.set(0, 2, 9).unwrap();
    assert_eq!(v.get(0, 2).unwrap(), 9);
    // a vector has exactly one row
    assert_eq!(v.get(1, 0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);

    let mut m: NumericArray<i32> = Matrix::from(&[[1, 2], [3, 4]]).into();
    m.set(1, 0, 7).unwrap();
    assert_eq!(m.get(1, 0).unwrap(), 7);
    assert_eq!(m.get(0, 2).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
}

#[test]
fn test_add_same_variant() {
    let a = vector_123();
    let b: NumericArray<i32> = Vector::new(vec![4, 5, 6]).into();
    let sum = a.add(&b).unwrap();
    assert_eq!(sum, Vector::new(vec![5, 7, 9]).into());
}

#[test]
fn test_add_mixed_variants() {
    // a length-3 vector and a 1x3 matrix have the same shape; the result
    // carries the left operand's variant
    let v = vector_123();
    let m = row_matrix_456();

    let sum = v.add(&m).unwrap();
    assert_eq!(sum, Vector::new(vec![5, 7, 9]).into());

    let sum = m.add(&v).unwrap();
    assert_eq!(sum, Matrix::from_rows(&[vec![5, 7, 9]]).unwrap().into());
}

#[test]
fn test_mixed_shape_mismatch() {
    let v = vector_123();
    let tall: NumericArray<i32> = Matrix::from(&[[1, 2, 3], [4, 5, 6]]).into();
    assert_eq!(v.add(&tall).unwrap_err().kind(), ErrorKind::ShapeMismatch);

    let short: NumericArray<i32> = Matrix::from_rows(&[vec![1, 2]]).unwrap().into();
    assert_eq!(v.add(&short).unwrap_err().kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn test_subtract_roundtrip() {
    let a = vector_123();
    let b = row_matrix_456();
    let roundtrip = a.add(&b).unwrap().subtract(&b).unwrap();
    assert_eq!(roundtrip, a);
}

#[test]
fn test_divide_by_zero() {
    let a: NumericArray<i32> = Vector::new(vec![1, 0]).into();
    let b: NumericArray<i32> = Vector::new(vec![1, 0]).into();
    assert_eq!(a.divide(&b).unwrap_err().kind(), ErrorKind::DivisionByZero);
}

#[test]
fn test_multiply_vector_matrix() {
    let v = vector_123();
    let m: NumericArray<i32> = Matrix::from(&[[1, 0], [0, 1], [1, 1]]).into();

    let out = v.multiply(&m).unwrap();
    assert_eq!(out, Vector::new(vec![4, 5]).into());
}

#[test]
fn test_multiply_matrix_vector() {
    // (2x1) * (1x3) -> 2x3 matrix
    let col: NumericArray<i32> = Matrix::from(&[[2], [3]]).into();
    let v = vector_123();

    let out = col.multiply(&v).unwrap();
    assert_eq!(
        out,
        Matrix::from(&[[2, 4, 6], [3, 6, 9]]).into()
    );
}

#[test]
fn test_multiply_vector_vector() {
    // valid only when the left operand has a single column
    let unit: NumericArray<i32> = Vector::new(vec![2]).into();
    let v = vector_123();
    assert_eq!(unit.multiply(&v).unwrap(), Vector::new(vec![2, 4, 6]).into());

    assert_eq!(
        v.multiply(&unit).unwrap_err().kind(),
        ErrorKind::ShapeMismatch
    );
}

#[test]
fn test_multiply_matrix_matrix() {
    let a: NumericArray<i32> = Matrix::from(&[[1, 2], [3, 4]]).into();
    let b: NumericArray<i32> = Matrix::from(&[[5, 6], [7, 8]]).into();
    let out = a.multiply(&b).unwrap();
    assert_eq!(out, Matrix::from(&[[19, 22], [43, 50]]).into());
}

#[test]
fn test_conversions() {
    let v = Vector::new(vec![1.0, 2.0]);
    let array: NumericArray<f64> = v.clone().into();
    let back: Vector<f64> = array.try_into().unwrap();
    assert_eq!(back, v);
}
