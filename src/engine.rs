use serde::Serialize;
use serde_json::Value;

use crate::errors::{InterpError, Result};
use crate::letter::Letter;
use crate::{Expression, Interpreter};

/// =========================
/// Public API (one-shot)
/// =========================

/// Evaluate `expr` against a fresh context seeded from a JSON object, e.g.
///   eval_with_bindings("X and not Y", r#"{"X": true}"#)
pub fn eval_with_bindings(expr: &str, bindings_json: &str) -> Result<bool> {
    let interp = interpreter_with(bindings_json)?;
    interp.eval(expr)
}

/// Replace `letter` in `expr` with `replacement`, then evaluate.
pub fn substitute_and_eval(
    expr: &str,
    letter: Letter,
    replacement: &str,
    bindings_json: &str,
) -> Result<bool> {
    let interp = interpreter_with(bindings_json)?;
    let tree = interp.substitute(expr, letter, replacement)?;
    Ok(interp.evaluate(&tree))
}

fn interpreter_with(bindings_json: &str) -> Result<Interpreter> {
    let bindings: Value = serde_json::from_str(bindings_json)
        .map_err(|e| InterpError::InvalidBinding(format!("bindings are not valid JSON: {e}")))?;
    let mut interp = Interpreter::new()?;
    interp.context_mut().assign_json(&bindings)?;
    Ok(interp)
}

/// =========================
/// Reporting
/// =========================

/// Machine-readable outcome of one evaluation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub expression: String,
    pub result: bool,
    pub variables: Vec<String>,
    pub bindings: Value,
}

impl Report {
    pub fn new(interp: &Interpreter, expr: &Expression) -> Self {
        Self {
            expression: expr.to_string(),
            result: interp.evaluate(expr),
            variables: expr.variables().iter().map(Letter::to_string).collect(),
            bindings: interp.context().to_json(),
        }
    }
}
