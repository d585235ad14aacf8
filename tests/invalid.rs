use boolean_interpreter as bi;
use bi::context::Context;
use bi::errors::InterpError;
use bi::Interpreter;

// Words outside the fixed grammar are rejected before any tree is built.
#[test]
fn test_invalid_token_is_reported_by_name() {
    let interp = Interpreter::new().unwrap();
    let err = interp.eval("A nand B").unwrap_err();
    assert_eq!(err, InterpError::InvalidToken("nand".into()));
    assert!(err.to_string().contains("nand"));
}

#[test]
fn test_lowercase_variable_is_invalid() {
    let interp = Interpreter::new().unwrap();
    assert!(matches!(
        interp.eval("a and B").unwrap_err(),
        InterpError::InvalidToken(_)
    ));
}

#[test]
fn test_unbalanced_parentheses() {
    let interp = Interpreter::new().unwrap();
    assert!(matches!(interp.eval("(A and B").unwrap_err(), InterpError::Parse(_)));
    assert!(matches!(interp.eval("A and B))").unwrap_err(), InterpError::Parse(_)));
}

#[test]
fn test_seed_alphabet_with_digit_fails() {
    assert!(matches!(
        Context::with_alphabet("ABC1").unwrap_err(),
        InterpError::Configuration(_)
    ));
}

#[test]
fn test_deeply_nested_input_is_an_error_not_a_crash() {
    let interp = Interpreter::new().unwrap();
    let err = interp.eval(&format!("{}A", "not ".repeat(200_000))).unwrap_err();
    assert!(matches!(err, InterpError::Parse(_)), "{err}");

    let err = interp.eval(&format!("{}A{}", "(".repeat(1_000), ")".repeat(1_000))).unwrap_err();
    assert_eq!(err, InterpError::Parse("expression nested too deeply".into()));
}
