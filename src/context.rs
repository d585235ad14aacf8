use std::collections::HashMap;

use itertools::Itertools;
use serde_json::{Map, Value};
use tracing::trace;

use crate::errors::{InterpError, Result};
use crate::letter::{Letter, ALPHABET};

/// Variable bindings consulted by [`Expression::evaluate`](crate::Expression::evaluate).
///
/// Built once by the owner of the interpreter and handed out by reference.
/// Every letter starts out `false`; a letter that was never assigned still
/// looks up as `false`.
#[derive(Debug, Clone)]
pub struct Context {
    bindings: HashMap<Letter, bool>,
}

impl Context {
    /// A context over the full `A..=Z` alphabet.
    pub fn new() -> Result<Self> {
        Self::with_alphabet(ALPHABET)
    }

    /// Seeds every character of `alphabet` to `false`.
    ///
    /// Fails with [`InterpError::Configuration`] as soon as a character is
    /// not an upper-case ASCII letter.
    pub fn with_alphabet(alphabet: &str) -> Result<Self> {
        let mut bindings = HashMap::with_capacity(alphabet.len());
        for c in alphabet.chars() {
            let letter = Letter::new(c).ok_or_else(|| {
                InterpError::Configuration(format!(
                    "seed alphabet contains {c:?}, only `A..=Z` may be bound"
                ))
            })?;
            bindings.insert(letter, false);
        }
        Ok(Self { bindings })
    }

    pub fn lookup(&self, letter: Letter) -> bool {
        self.bindings.get(&letter).copied().unwrap_or(false)
    }

    pub fn assign(&mut self, letter: Letter, value: bool) {
        trace!(%letter, value, "assign");
        self.bindings.insert(letter, value);
    }

    /// Back to all-`false`.
    pub fn reset(&mut self) {
        self.bindings.values_mut().for_each(|v| *v = false);
    }

    /// Applies a JSON object such as `{"X": true, "Y": false}`.
    ///
    /// Validates the whole object before touching any binding, so a bad
    /// entry leaves the context unchanged.
    pub fn assign_json(&mut self, bindings: &Value) -> Result<()> {
        let obj = bindings.as_object().ok_or_else(|| {
            InterpError::InvalidBinding(format!("expected a JSON object, got {bindings}"))
        })?;
        let parsed = obj
            .iter()
            .map(|(k, v)| {
                let letter = Letter::try_from(k.as_str())
                    .map_err(|_| InterpError::InvalidBinding(format!("{k:?} is not a letter")))?;
                let value = v.as_bool().ok_or_else(|| {
                    InterpError::InvalidBinding(format!("{k}: expected a boolean, got {v}"))
                })?;
                Ok((letter, value))
            })
            .collect::<Result<Vec<_>>>()?;
        for (letter, value) in parsed {
            self.assign(letter, value);
        }
        Ok(())
    }

    /// Parses and applies a single `X=true` style assignment.
    pub fn assign_pair(&mut self, pair: &str) -> Result<()> {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| InterpError::InvalidBinding(format!("{pair:?}: expected `X=true`")))?;
        let letter = Letter::try_from(name.trim())
            .map_err(|_| InterpError::InvalidBinding(format!("{name:?} is not a letter")))?;
        let value = match value.trim() {
            "true" => true,
            "false" => false,
            other => {
                return Err(InterpError::InvalidBinding(format!(
                    "{letter}: expected `true` or `false`, got {other:?}"
                )))
            }
        };
        self.assign(letter, value);
        Ok(())
    }

    /// All bound letters in alphabetical order, seeded or assigned later.
    pub fn bindings(&self) -> Vec<(Letter, bool)> {
        self.bindings
            .iter()
            .map(|(l, v)| (*l, *v))
            .sorted_by_key(|(l, _)| *l)
            .collect()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .bindings()
            .into_iter()
            .map(|(l, v)| (l.to_string(), Value::Bool(v)))
            .collect();
        Value::Object(map)
    }
}
