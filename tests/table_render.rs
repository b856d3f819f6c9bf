use numarray::algebra::*;
use numarray::io::PrintTarget;
use numarray::render::*;

fn rendered(target: PrintTarget) -> String {
    match target {
        PrintTarget::Buffer(buffer) => String::from_utf8(buffer).unwrap(),
        _ => panic!("expected a buffer target"),
    }
}

#[test]
fn test_render_integer_grid() {
    let m = Matrix::from(&[[1, 200], [35, 4]]);
    let mut target = PrintTarget::Buffer(vec![]);

    render_table(&mut target, &m, &FormatSettings::default()).unwrap();

    let expected = "\
+----+-----+
|  1 | 200 |
+----+-----+
| 35 |   4 |
+----+-----+
";
    assert_eq!(rendered(target), expected);
}

#[test]
fn test_render_float_precision() {
    let v = Vector::new(vec![1.0, 2.25]);
    let settings = FormatSettingsBuilder::default().precision(2).build().unwrap();
    let mut target = PrintTarget::Buffer(vec![]);

    render_table(&mut target, &v, &settings).unwrap();

    let expected = "\
+------+------+
| 1.00 | 2.25 |
+------+------+
";
    assert_eq!(rendered(target), expected);
}

#[test]
fn test_render_with_headers() {
    let m = Matrix::from(&[[1, 2], [3, 4]]);
    let mut target = PrintTarget::Buffer(vec![]);

    render_table_with_headers(&mut target, &["left", "right"], &m, &FormatSettings::default())
        .unwrap();

    let expected = "\
+------+-------+
| left | right |
+------+-------+
|    1 |     2 |
+------+-------+
|    3 |     4 |
+------+-------+
";
    assert_eq!(rendered(target), expected);
}

#[test]
fn test_render_header_count_mismatch() {
    let m = Matrix::from(&[[1, 2], [3, 4]]);
    let mut target = PrintTarget::Buffer(vec![]);

    let err =
        render_table_with_headers(&mut target, &["only"], &m, &FormatSettings::default())
            .unwrap_err();
    assert!(matches!(
        err,
        RenderError::Invalid(ArrayError::ShapeMismatch(_))
    ));

    let err = render_table_with_headers(&mut target, &[], &m, &FormatSettings::default())
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::Invalid(ArrayError::InvalidArgument(_))
    ));
}

#[test]
fn test_settings_builder_validation() {
    assert!(FormatSettingsBuilder::default().precision(17).build().is_ok());
    assert!(FormatSettingsBuilder::default().precision(18).build().is_err());
}

#[test]
fn test_render_capability_type() {
    let array: NumericArray<i32> = Vector::new(vec![7, 8]).into();
    let mut target = PrintTarget::Buffer(vec![]);

    render_table(&mut target, &array, &FormatSettings::default()).unwrap();

    let expected = "\
+---+---+
| 7 | 8 |
+---+---+
";
    assert_eq!(rendered(target), expected);
}
