use boolean_interpreter as bi;
use bi::letter::Letter;
use bi::{Expression, Interpreter};

fn l(c: char) -> Letter {
    Letter::new(c).unwrap()
}

#[test]
fn test_worked_example_by_hand() {
    let mut interp = Interpreter::new().unwrap();
    interp.context_mut().assign(l('Y'), true);
    interp.context_mut().assign(l('X'), false);

    let fw = interp.flyweight();
    let x = fw.variable(l('X'));
    let y = fw.variable(l('Y'));
    let total = Expression::or(
        Expression::and(Expression::constant(true), x.clone()),
        Expression::and(y, Expression::not(x)),
    );
    assert!(interp.evaluate(&total));

    let replaced = total.replace(l('Y'), &Expression::constant(false), fw);
    assert!(!interp.evaluate(&replaced));
    assert!(interp.evaluate(&total));
}

#[test]
fn test_worked_example_from_text() {
    let mut interp = Interpreter::new().unwrap();
    interp.context_mut().assign_pair("Y=true").unwrap();
    assert!(interp.eval("(true and X) or (Y and not X)").unwrap());

    let replaced = interp
        .substitute("(true and X) or (Y and not X)", l('Y'), "false")
        .unwrap();
    assert!(!interp.evaluate(&replaced));
}

#[test]
fn test_rebinding_changes_result_of_same_tree() {
    let mut interp = Interpreter::new().unwrap();
    let expr = interp.compile("A and not B").unwrap();
    assert!(!interp.evaluate(&expr));
    interp.context_mut().assign(l('A'), true);
    assert!(interp.evaluate(&expr));
    interp.context_mut().assign(l('B'), true);
    assert!(!interp.evaluate(&expr));
    interp.context_mut().reset();
    assert!(!interp.evaluate(&expr));
}

#[test]
fn test_constant_copies_are_identical() {
    let interp = Interpreter::new().unwrap();
    let fw = interp.flyweight();
    let first = Expression::constant(true).copy(fw);
    let second = Expression::constant(true);
    assert!(first.same_leaf(&second.copy(fw)));
    assert!(!first.same_leaf(&second));
}

#[test]
fn test_one_shot_helpers() {
    assert!(bi::eval_with_bindings("X and not Y", r#"{"X": true}"#).unwrap());
    assert!(bi::substitute_and_eval("A or B", l('B'), "not A", "{}").unwrap());
}
