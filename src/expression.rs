// src/expression.rs
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::context::Context;
use crate::flyweight::Flyweight;
use crate::letter::Letter;

/// Terminal node of an expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaf {
    Constant(bool),
    Variable(Letter),
}

/// Immutable boolean expression tree.
///
/// Internal nodes own their children. Leaves are reference-counted handles;
/// when they come from a [`Flyweight`] every equal leaf is the same
/// allocation. `PartialEq` compares structure, use [`Expression::same_leaf`]
/// for identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Leaf(Rc<Leaf>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Not(Box<Expression>),
}

impl Expression {
    /// A fresh constant leaf, not shared with any cache.
    pub fn constant(value: bool) -> Self {
        Expression::Leaf(Rc::new(Leaf::Constant(value)))
    }

    /// A fresh variable leaf, not shared with any cache.
    pub fn variable(letter: Letter) -> Self {
        Expression::Leaf(Rc::new(Leaf::Variable(letter)))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expression) -> Self {
        Expression::Not(Box::new(inner))
    }

    /// Reduces the tree against the current bindings of `ctx`.
    ///
    /// Both operands of `and`/`or` are always evaluated.
    pub fn evaluate(&self, ctx: &Context) -> bool {
        match self {
            Expression::Leaf(leaf) => match **leaf {
                Leaf::Constant(value) => value,
                Leaf::Variable(letter) => ctx.lookup(letter),
            },
            Expression::And(l, r) => {
                let left = l.evaluate(ctx);
                let right = r.evaluate(ctx);
                left && right
            }
            Expression::Or(l, r) => {
                let left = l.evaluate(ctx);
                let right = r.evaluate(ctx);
                left || right
            }
            Expression::Not(inner) => !inner.evaluate(ctx),
        }
    }

    /// Structural copy. Leaves resolve to the canonical instance held by
    /// `flyweight`; internal nodes are newly allocated.
    pub fn copy(&self, flyweight: &Flyweight) -> Expression {
        match self {
            Expression::Leaf(leaf) => flyweight.intern(**leaf),
            Expression::And(l, r) => Expression::and(l.copy(flyweight), r.copy(flyweight)),
            Expression::Or(l, r) => Expression::or(l.copy(flyweight), r.copy(flyweight)),
            Expression::Not(inner) => Expression::not(inner.copy(flyweight)),
        }
    }

    /// New tree with every `Variable(letter)` swapped for a copy of
    /// `replacement`. `self` is left untouched.
    pub fn replace(&self, letter: Letter, replacement: &Expression, flyweight: &Flyweight) -> Expression {
        match self {
            Expression::Leaf(leaf) => match **leaf {
                Leaf::Variable(l) if l == letter => replacement.copy(flyweight),
                other => flyweight.intern(other),
            },
            Expression::And(l, r) => Expression::and(
                l.replace(letter, replacement, flyweight),
                r.replace(letter, replacement, flyweight),
            ),
            Expression::Or(l, r) => Expression::or(
                l.replace(letter, replacement, flyweight),
                r.replace(letter, replacement, flyweight),
            ),
            Expression::Not(inner) => Expression::not(inner.replace(letter, replacement, flyweight)),
        }
    }

    /// True when both are leaves backed by the same allocation.
    pub fn same_leaf(&self, other: &Expression) -> bool {
        match (self, other) {
            (Expression::Leaf(a), Expression::Leaf(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Letters that occur in the tree.
    pub fn variables(&self) -> BTreeSet<Letter> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables(&self, out: &mut BTreeSet<Letter>) {
        match self {
            Expression::Leaf(leaf) => {
                if let Leaf::Variable(letter) = **leaf {
                    out.insert(letter);
                }
            }
            Expression::And(l, r) | Expression::Or(l, r) => {
                l.collect_variables(out);
                r.collect_variables(out);
            }
            Expression::Not(inner) => inner.collect_variables(out),
        }
    }

    /// A lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::And(l, r) | Expression::Or(l, r) => 1 + l.depth().max(r.depth()),
            Expression::Not(inner) => 1 + inner.depth(),
        }
    }
}

/// Renders in the textual grammar, parenthesizing every binary node so the
/// output compiles back to the same shape.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Leaf(leaf) => match **leaf {
                Leaf::Constant(value) => write!(f, "{value}"),
                Leaf::Variable(letter) => write!(f, "{letter}"),
            },
            Expression::And(l, r) => write!(f, "({l} and {r})"),
            Expression::Or(l, r) => write!(f, "({l} or {r})"),
            Expression::Not(inner) => write!(f, "not {inner}"),
        }
    }
}
