//! Lazy enumeration of syllables that fit a set of shapes.
//!
//! The search is a depth-first walk over pattern positions. A cursor stack
//! records which pool entry is being tried at each depth, so the walk can
//! be suspended after every yielded syllable and resumed on the next call
//! to [`Iterator::next`]. Each sound is vetted by
//! [`why_not_next`](crate::phonotactics::why_not_next) against the partial
//! sequence before the walk descends.

use tracing::debug;

use crate::pattern::{Pattern, Slot};
use crate::phoneme::Phoneme;
use crate::phonotactics::why_not_next;

/// Iterator returned by [`candidates`].
///
/// Cloning before the first `next` gives an independent enumeration that
/// yields the same sequence.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    vowels: &'a [&'static Phoneme],
    consonants: &'a [&'static Phoneme],
    allowed_doubles: &'a [&'static Phoneme],
    patterns: &'a [Pattern],
    pattern: usize,
    /// Pool index tried at each depth.
    cursors: Vec<usize>,
    /// Sounds chosen at depths `0..cursors.len() - 1`.
    current: Vec<&'static Phoneme>,
    started: bool,
    yielded: usize,
}

/// Enumerate every sequence matching one of `patterns` that passes the
/// phonotactic rules.
///
/// Output is pattern-major, and within a pattern follows pool order:
/// `vowels` and `consonants` in the order given. Nothing is de-duplicated.
pub fn candidates<'a>(
    vowels: &'a [&'static Phoneme],
    consonants: &'a [&'static Phoneme],
    allowed_doubles: &'a [&'static Phoneme],
    patterns: &'a [Pattern],
) -> Candidates<'a> {
    Candidates {
        vowels,
        consonants,
        allowed_doubles,
        patterns,
        pattern: 0,
        cursors: Vec::new(),
        current: Vec::new(),
        started: false,
        yielded: 0,
    }
}

impl<'a> Candidates<'a> {
    fn pool(&self, slot: &'a Slot) -> &'a [&'static Phoneme] {
        match slot {
            Slot::Consonant => self.consonants,
            Slot::Vowel => self.vowels,
            Slot::Literal(ph) => std::slice::from_ref(ph),
        }
    }

    /// Resume the walk over `slots`; `None` once the pattern is exhausted.
    fn advance(&mut self, slots: &'a [Slot]) -> Option<Vec<&'static Phoneme>> {
        while let Some(depth) = self.cursors.len().checked_sub(1) {
            let pool = self.pool(&slots[depth]);
            let Some(&ph) = pool.get(self.cursors[depth]) else {
                self.cursors.pop();
                self.current.pop();
                if let Some(cursor) = self.cursors.last_mut() {
                    *cursor += 1;
                }
                continue;
            };

            if why_not_next(&self.current, ph, self.allowed_doubles).is_some() {
                self.cursors[depth] += 1;
                continue;
            }

            if depth + 1 == slots.len() {
                let mut found = self.current.clone();
                found.push(ph);
                self.cursors[depth] += 1;
                return Some(found);
            }
            self.current.push(ph);
            self.cursors.push(0);
        }
        None
    }
}

impl Iterator for Candidates<'_> {
    type Item = Vec<&'static Phoneme>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pattern = self.patterns.get(self.pattern)?;
            let slots = pattern.slots();
            if !self.started {
                self.started = true;
                self.yielded = 0;
                if !slots.is_empty() {
                    self.cursors.push(0);
                }
            }
            if let Some(found) = self.advance(slots) {
                self.yielded += 1;
                return Some(found);
            }
            debug!(pattern = %pattern, yielded = self.yielded, "pattern exhausted");
            self.pattern += 1;
            self.started = false;
        }
    }
}
