use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum to represent everything that can go wrong in the interpreter
#[derive(Debug, Error, PartialEq, Eq)] // `PartialEq` lets tests match on the exact variant
pub enum InterpError {
    // The seed alphabet for a context holds something other than `A..=Z`
    #[error("configuration error: {0}")]
    Configuration(String),

    // A word in a textual expression is not a literal, a letter or an operator
    #[error("invalid token: {0:?} (expected `true`, `false`, `and`, `or`, `not` or an upper-case letter)")]
    InvalidToken(String),

    // Tokens are valid but do not form an expression
    #[error("parse error: {0}")]
    Parse(String),

    // A binding supplied from outside (JSON, `X=true`) is malformed
    #[error("invalid binding: {0}")]
    InvalidBinding(String),

    // A result could not be rendered for output
    #[error("render error: {0}")]
    Render(String),
}

// Type alias for results that use `InterpError` as the error type
pub type Result<T> = std::result::Result<T, InterpError>;
