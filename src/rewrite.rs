//! Parallel rewriting over a [`RuleTable`].

use crate::rules::RuleTable;

/// Applies one parallel rewriting step to `input`.
///
/// Every symbol is replaced simultaneously: each is mapped through the table
/// in order and the images are concatenated. Replacement output is never
/// re-scanned within the same step, so the result is concatenative —
/// rewriting `a` and `b` separately and joining them equals rewriting `ab`.
pub fn apply(table: &RuleTable, input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for symbol in input.chars() {
        match table.rule(symbol) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(symbol),
        }
    }
    output
}

/// Applies `n` rewriting steps to `input`.
///
/// `n = 0` returns the input unchanged.
pub fn apply_n(table: &RuleTable, input: &str, n: usize) -> String {
    let mut current = input.to_owned();
    for _ in 0..n {
        current = apply(table, &current);
    }
    current
}

/// Infinite lazy sequence of L-System generations.
///
/// Yields the seed itself as generation 0, then each successive rewriting of
/// the previous generation. Each generation is computed only when pulled, so
/// consuming N generations performs exactly N - 1 rewriting steps even though
/// string length can grow geometrically; `next` never returns `None`, and the
/// caller decides how far to go. The table is borrowed for the lifetime of
/// the iterator, so its rules cannot change mid-sequence; constructing a new
/// iterator from the same table and seed reproduces the identical sequence.
#[derive(Clone, Debug)]
pub struct Generations<'a> {
    table: &'a RuleTable,
    /// The seed, until it has been yielded.
    pending: Option<String>,
    /// The most recently yielded generation.
    previous: Option<String>,
}

impl<'a> Generations<'a> {
    /// Starts the sequence at `seed`.
    pub fn new(table: &'a RuleTable, seed: impl Into<String>) -> Self {
        Self {
            table,
            pending: Some(seed.into()),
            previous: None,
        }
    }
}

impl Iterator for Generations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = match self.pending.take() {
            Some(seed) => seed,
            None => apply(self.table, self.previous.as_deref()?),
        };
        self.previous = Some(current.clone());
        Some(current)
    }
}

impl RuleTable {
    /// Returns the lazy generation sequence seeded with `seed`.
    pub fn generations(&self, seed: impl Into<String>) -> Generations<'_> {
        Generations::new(self, seed)
    }
}
