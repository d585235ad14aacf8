pub mod errors;
pub mod context;
pub mod engine;
pub mod expression;
pub mod flyweight;
pub mod letter;
pub mod parser;

use tracing::debug;

use context::Context;
use errors::Result;
pub use expression::{Expression, Leaf};
use flyweight::Flyweight;
use letter::Letter;

/// Composition root: owns the one [`Context`] and the one [`Flyweight`] and
/// lends them to every compile and evaluation.
pub struct Interpreter {
    context: Context,
    flyweight: Flyweight,
}

impl Interpreter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            context: Context::new()?,
            flyweight: Flyweight::new(),
        })
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn flyweight(&self) -> &Flyweight {
        &self.flyweight
    }

    pub fn compile(&self, expr: &str) -> Result<Expression> {
        parser::compile(expr, &self.flyweight)
    }

    pub fn evaluate(&self, expr: &Expression) -> bool {
        expr.evaluate(&self.context)
    }

    /// Compiles and evaluates against the current bindings.
    pub fn eval(&self, expr: &str) -> Result<bool> {
        Ok(self.evaluate(&self.compile(expr)?))
    }

    /// Compiles `expr` and `replacement`, then substitutes `letter`.
    pub fn substitute(&self, expr: &str, letter: Letter, replacement: &str) -> Result<Expression> {
        let tree = self.compile(expr)?;
        let replacement = self.compile(replacement)?;
        debug!(%letter, %replacement, "substituting");
        Ok(tree.replace(letter, &replacement, &self.flyweight))
    }
}

/// Re-export the convenience helpers for one-shot callers.
pub use engine::{eval_with_bindings, substitute_and_eval};
