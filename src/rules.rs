//! Production rule storage and alphabet inference.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

/// A table of context-free, deterministic production rules, one per symbol.
///
/// Symbols that have an entry are *variables* and rewrite to their
/// replacement string; every other symbol is a *constant* and rewrites to
/// itself. Lookups are total — there is no such thing as an unknown symbol,
/// so rewriting never fails.
///
/// The variable/constant split is derived from the current rules on every
/// query and is never cached, because [`set_rule`](Self::set_rule) may
/// promote a constant to a variable (or introduce new constants) at any time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: HashMap<char, String>,
}

impl RuleTable {
    /// Creates an empty table. Every symbol is a constant until a rule is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(symbol, replacement)` pairs.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(|(s, r)| (s, r.into())).collect(),
        }
    }

    /// Assigns (or overwrites) the production for `symbol`.
    ///
    /// The replacement may be empty (the symbol erases itself on rewrite) and
    /// may reference symbols that have no rule of their own; those resolve
    /// lazily as constants the next time a string is rewritten.
    pub fn set_rule(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    /// Removes the production for `symbol`, turning it back into a constant.
    ///
    /// Returns the replacement it had, if any.
    pub fn remove_rule(&mut self, symbol: char) -> Option<String> {
        self.rules.remove(&symbol)
    }

    /// The production for `symbol`, or `None` if it is a constant.
    pub fn rule(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// The image of `symbol` under one rewriting step.
    ///
    /// Variables map to their replacement, constants to themselves. Total:
    /// every symbol has a well-defined image.
    pub fn replacement(&self, symbol: char) -> Cow<'_, str> {
        match self.rules.get(&symbol) {
            Some(replacement) => Cow::Borrowed(replacement.as_str()),
            None => Cow::Owned(symbol.to_string()),
        }
    }

    /// True if `symbol` has an explicit production rule.
    pub fn is_variable(&self, symbol: char) -> bool {
        self.rules.contains_key(&symbol)
    }

    /// The set of variables: every symbol with a production rule.
    pub fn variables(&self) -> BTreeSet<char> {
        self.rules.keys().copied().collect()
    }

    /// The set of constants: every symbol appearing in some replacement that
    /// has no rule of its own.
    pub fn constants(&self) -> BTreeSet<char> {
        self.rules
            .values()
            .flat_map(|replacement| replacement.chars())
            .filter(|symbol| !self.rules.contains_key(symbol))
            .collect()
    }

    /// The full alphabet: variables and constants together.
    pub fn alphabet(&self) -> BTreeSet<char> {
        let mut alphabet = self.variables();
        alphabet.extend(self.constants());
        alphabet
    }

    /// True if any symbol of `input` has a production rule.
    ///
    /// A string with no variables is a fixed point of rewriting.
    pub fn contains_variable(&self, input: &str) -> bool {
        input.chars().any(|symbol| self.rules.contains_key(&symbol))
    }

    /// Counts the occurrences of variables in `input`.
    pub fn count_variables(&self, input: &str) -> usize {
        input
            .chars()
            .filter(|symbol| self.rules.contains_key(symbol))
            .count()
    }

    /// Number of production rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
