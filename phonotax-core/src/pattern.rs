//! Syllable shape patterns such as `CV`, `CCVC` or `sCV`.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::inventory::Inventory;
use crate::phoneme::Phoneme;
use crate::table::parse_ipa;

/// One position of a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `C`: any consonant.
    Consonant,
    /// `V`: any vowel.
    Vowel,
    /// Exactly this sound.
    Literal(&'static Phoneme),
}

impl Slot {
    pub fn accepts(&self, ph: &Phoneme, inventory: Option<&Inventory>) -> bool {
        match self {
            Slot::Consonant => ph.is_consonant() && inventory.is_none_or(|inv| inv.contains(ph)),
            Slot::Vowel => ph.is_vowel() && inventory.is_none_or(|inv| inv.contains(ph)),
            Slot::Literal(literal) => *literal == ph,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Consonant => f.write_str("C"),
            Slot::Vowel => f.write_str("V"),
            Slot::Literal(ph) => f.write_str(ph.symbol()),
        }
    }
}

/// A sequence of slots describing a syllable shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Slot>,
}

impl Pattern {
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let mut slots = Vec::new();
        let mut literal = String::new();
        for ch in text.chars() {
            let slot = match ch {
                'C' => Slot::Consonant,
                'V' => Slot::Vowel,
                _ => {
                    literal.push(ch);
                    continue;
                }
            };
            flush_literal(&mut literal, &mut slots)?;
            slots.push(slot);
        }
        flush_literal(&mut literal, &mut slots)?;

        if slots.is_empty() {
            return Err(CoreError::InvalidPattern(format!(
                "'{text}' has no slots"
            )));
        }
        Ok(Pattern { slots })
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Positional match. With an inventory, `C` and `V` slots only accept
    /// that inventory's consonants and vowels.
    pub fn matches(&self, sequence: &[&Phoneme], inventory: Option<&Inventory>) -> bool {
        sequence.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(sequence)
                .all(|(slot, ph)| slot.accepts(ph, inventory))
    }

    /// Like [`Pattern::matches`] on IPA text; text that does not parse
    /// never matches.
    pub fn matches_text(&self, text: &str, inventory: Option<&Inventory>) -> bool {
        parse_ipa(text).is_ok_and(|sequence| self.matches(&sequence, inventory))
    }
}

fn flush_literal(literal: &mut String, slots: &mut Vec<Slot>) -> Result<(), CoreError> {
    if !literal.is_empty() {
        slots.extend(parse_ipa(literal)?.into_iter().map(Slot::Literal));
        literal.clear();
    }
    Ok(())
}

impl FromStr for Pattern {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.slots.iter().try_for_each(|slot| write!(f, "{slot}"))
    }
}
