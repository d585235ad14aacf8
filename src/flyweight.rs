use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::expression::{Expression, Leaf};
use crate::letter::Letter;

/// Interning tables for expression leaves.
///
/// One table per leaf kind: variables are created on first request per
/// letter, the two constants up front. Entries are never evicted, so every
/// leaf handed out stays canonical for as long as the flyweight lives.
/// Not thread-safe.
#[derive(Debug)]
pub struct Flyweight {
    variables: RefCell<HashMap<Letter, Rc<Leaf>>>,
    constants: [Rc<Leaf>; 2],
}

impl Default for Flyweight {
    fn default() -> Self {
        Self::new()
    }
}

impl Flyweight {
    pub fn new() -> Self {
        Self {
            variables: RefCell::new(HashMap::new()),
            constants: [
                Rc::new(Leaf::Constant(false)),
                Rc::new(Leaf::Constant(true)),
            ],
        }
    }

    pub fn variable(&self, letter: Letter) -> Expression {
        let mut variables = self.variables.borrow_mut();
        let leaf = variables.entry(letter).or_insert_with(|| {
            trace!(%letter, "interning variable");
            Rc::new(Leaf::Variable(letter))
        });
        Expression::Leaf(Rc::clone(leaf))
    }

    pub fn constant(&self, value: bool) -> Expression {
        Expression::Leaf(Rc::clone(&self.constants[value as usize]))
    }

    /// Canonical handle for any leaf value.
    pub fn intern(&self, leaf: Leaf) -> Expression {
        match leaf {
            Leaf::Constant(value) => self.constant(value),
            Leaf::Variable(letter) => self.variable(letter),
        }
    }

    /// How many distinct letters have been requested so far.
    pub fn interned_variables(&self) -> usize {
        self.variables.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_letter_same_instance() {
        let fw = Flyweight::new();
        let a = Letter::new('A').unwrap();
        let first = fw.variable(a);
        let second = fw.variable(a);
        assert!(first.same_leaf(&second));
        assert!(!first.same_leaf(&fw.variable(Letter::new('B').unwrap())));
        assert_eq!(fw.interned_variables(), 2);
    }

    #[test]
    fn constants_are_prebuilt() {
        let fw = Flyweight::new();
        assert_eq!(fw.interned_variables(), 0);
        assert!(fw.constant(true).same_leaf(&fw.constant(true)));
        assert!(!fw.constant(true).same_leaf(&fw.constant(false)));
        assert_eq!(fw.constant(false), Expression::constant(false));
    }

    #[test]
    fn copy_of_fresh_leaves_lands_on_the_cache() {
        let fw = Flyweight::new();
        let t1 = Expression::constant(true).copy(&fw);
        let t2 = Expression::constant(true).copy(&fw);
        assert!(t1.same_leaf(&t2));

        let a = Letter::new('A').unwrap();
        let v1 = Expression::variable(a).copy(&fw);
        let v2 = Expression::variable(a).copy(&fw);
        assert!(v1.same_leaf(&v2));
        assert!(v1.same_leaf(&fw.variable(a)));
    }

    #[test]
    fn separate_flyweights_do_not_share() {
        let a = Letter::new('A').unwrap();
        let one = Flyweight::new();
        let two = Flyweight::new();
        assert!(!one.variable(a).same_leaf(&two.variable(a)));
    }
}
