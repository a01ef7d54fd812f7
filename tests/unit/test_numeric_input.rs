use file_manager::{validate_input, FileManagerError, RawInput};
use serde_json::json;

#[test]
fn test_numbers_convert_directly() {
    assert_eq!(validate_input(&RawInput::Integer(-4)).unwrap(), -4.0);
    assert_eq!(validate_input(&RawInput::Float(0.25)).unwrap(), 0.25);
}

#[test]
fn test_text_is_trimmed_and_parsed() {
    assert_eq!(validate_input(&RawInput::from(" 10 ")).unwrap(), 10.0);
    assert_eq!(validate_input(&RawInput::from("1e3")).unwrap(), 1000.0);
    assert_eq!(validate_input(&RawInput::from("-0.5")).unwrap(), -0.5);
}

#[test]
fn test_values_from_json() {
    let inputs: Vec<RawInput> = serde_json::from_str(r#"[10, 5.5, "10", "5.5"]"#).unwrap();
    let values: Vec<f64> = inputs
        .iter()
        .map(|input| validate_input(input).unwrap())
        .collect();
    assert_eq!(values, vec![10.0, 5.5, 10.0, 5.5]);
}

#[test]
fn test_other_types_are_named() {
    for (value, type_name) in [
        (json!([]), "list"),
        (json!({}), "dict"),
        (json!(null), "null"),
        (json!(false), "bool"),
    ] {
        let err = validate_input(&RawInput::from(value)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Invalid type '{type_name}'. Expected str, int, or float.")
        );
    }
}

#[test]
fn test_invalid_text() {
    assert!(matches!(
        validate_input(&RawInput::from("   ")),
        Err(FileManagerError::EmptyOrWhitespaceInput)
    ));
    assert!(matches!(
        validate_input(&RawInput::from("12abc")),
        Err(FileManagerError::InvalidNumber { ref input }) if input == "12abc"
    ));
}
