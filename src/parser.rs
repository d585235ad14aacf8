// src/parser.rs
use std::fmt;

use itertools::Itertools;
use tracing::debug;

use crate::errors::{InterpError, Result};
use crate::expression::Expression;
use crate::flyweight::Flyweight;
use crate::letter::Letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(bool),
    Variable(Letter),
    Operator(Op),
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(b) => write!(f, "{b}"),
            Token::Variable(l) => write!(f, "{l}"),
            Token::Operator(Op::And) => f.write_str("and"),
            Token::Operator(Op::Or) => f.write_str("or"),
            Token::Operator(Op::Not) => f.write_str("not"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

/// Classifies one whitespace-free word.
fn classify(word: &str) -> Result<Token> {
    Ok(match word {
        "true" => Token::Literal(true),
        "false" => Token::Literal(false),
        "and" => Token::Operator(Op::And),
        "or" => Token::Operator(Op::Or),
        "not" => Token::Operator(Op::Not),
        _ => Token::Variable(Letter::try_from(word)?),
    })
}

/// Splits on whitespace. Parentheses at either end of a word are peeled off
/// into their own tokens, so `(A and B)` needs no extra spacing.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut out = Vec::new();
    for word in input.split_whitespace() {
        let inner = word.trim_start_matches('(');
        out.extend(std::iter::repeat(Token::LParen).take(word.len() - inner.len()));
        let core = inner.trim_end_matches(')');
        if !core.is_empty() {
            out.push(classify(core)?);
        }
        out.extend(std::iter::repeat(Token::RParen).take(inner.len() - core.len()));
    }
    Ok(out)
}

/// Deepest chain of `not` / `(` the parser will descend into.
pub const MAX_NESTING: usize = 128;

/// Longest token stream accepted by [`compile`]. Bounds the depth of
/// left-leaning `and`/`or` chains, which the parser builds iteratively but
/// every tree walk visits recursively.
pub const MAX_TOKENS: usize = 4096;

/// Compiles a textual expression into a tree whose leaves come from
/// `flyweight`.
///
/// Precedence is `not` > `and` > `or`; binary operators associate to the
/// left and parentheses group. Inputs beyond [`MAX_TOKENS`] or
/// [`MAX_NESTING`] are rejected with [`InterpError::Parse`].
pub fn compile(input: &str, flyweight: &Flyweight) -> Result<Expression> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(InterpError::Parse("empty expression".into()));
    }
    if tokens.len() > MAX_TOKENS {
        return Err(InterpError::Parse(format!(
            "expression too long: {} tokens, limit is {MAX_TOKENS}",
            tokens.len()
        )));
    }
    let mut p = Parser::new(&tokens, flyweight);
    let expr = p.parse_or()?;
    if !p.eof() {
        return Err(InterpError::Parse(format!(
            "trailing input: `{}`",
            tokens[p.i..].iter().join(" ")
        )));
    }
    debug!(input, depth = expr.depth(), "compiled expression");
    Ok(expr)
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    i: usize,
    depth: usize,
    flyweight: &'a Flyweight,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], flyweight: &'a Flyweight) -> Self {
        Self { tokens, i: 0, depth: 0, flyweight }
    }

    pub fn parse_or(&mut self) -> Result<Expression> {
        let mut left = self.parse_and()?;
        while self.consume(Token::Operator(Op::Or)) {
            let right = self.parse_and()?;
            left = Expression::or(left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expression> {
        let mut left = self.parse_not()?;
        while self.consume(Token::Operator(Op::And)) {
            let right = self.parse_not()?;
            left = Expression::and(left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expression> {
        if self.consume(Token::Operator(Op::Not)) {
            self.descend()?;
            let inner = self.parse_not();
            self.depth -= 1;
            Ok(Expression::not(inner?))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Expression> {
        let token = self
            .peek()
            .ok_or_else(|| InterpError::Parse("unexpected end of expression".into()))?;
        self.i += 1;
        match token {
            Token::Literal(value) => Ok(self.flyweight.constant(value)),
            Token::Variable(letter) => Ok(self.flyweight.variable(letter)),
            Token::LParen => {
                self.descend()?;
                let inner = self.parse_or();
                self.depth -= 1;
                let inner = inner?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            other => Err(InterpError::Parse(format!(
                "expected an operand, found `{other}`"
            ))),
        }
    }

    fn descend(&mut self) -> Result<()> {
        if self.depth >= MAX_NESTING {
            return Err(InterpError::Parse("expression nested too deeply".into()));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn expect(&mut self, t: Token) -> Result<()> {
        if self.consume(t) {
            Ok(())
        } else {
            match self.peek() {
                Some(found) => Err(InterpError::Parse(format!("expected `{t}`, found `{found}`"))),
                None => Err(InterpError::Parse(format!("expected `{t}` before end of expression"))),
            }
        }
    }

    pub fn consume(&mut self, t: Token) -> bool {
        if self.peek() == Some(t) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.i).copied()
    }

    pub fn eof(&self) -> bool {
        self.i >= self.tokens.len()
    }
}
