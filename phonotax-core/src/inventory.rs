//! The sound inventory of one language.

use tracing::debug;

use crate::error::CoreError;
use crate::generator::{Candidates, candidates};
use crate::pattern::Pattern;
use crate::phoneme::Phoneme;
use crate::table::parse_ipa;

/// Vowels, consonants and the sounds a language lets double.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    vowels: Vec<&'static Phoneme>,
    consonants: Vec<&'static Phoneme>,
    doubles: Vec<&'static Phoneme>,
}

impl Inventory {
    /// Build an inventory from three IPA strings.
    ///
    /// Fails on unknown symbols, and when a consonant is listed among the
    /// vowels or the other way round.
    pub fn new(vowels: &str, consonants: &str, doubles: &str) -> Result<Self, CoreError> {
        let vowels = parse_ipa(vowels)?;
        if let Some(ph) = vowels.iter().find(|ph| !ph.is_vowel()) {
            return Err(CoreError::InventoryMismatch {
                symbol: ph.symbol().to_string(),
                expected: "vowel",
            });
        }
        let consonants = parse_ipa(consonants)?;
        if let Some(ph) = consonants.iter().find(|ph| !ph.is_consonant()) {
            return Err(CoreError::InventoryMismatch {
                symbol: ph.symbol().to_string(),
                expected: "consonant",
            });
        }
        let doubles = parse_ipa(doubles)?;
        debug!(
            vowels = vowels.len(),
            consonants = consonants.len(),
            doubles = doubles.len(),
            "built inventory"
        );
        Ok(Inventory {
            vowels,
            consonants,
            doubles,
        })
    }

    pub fn vowels(&self) -> &[&'static Phoneme] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[&'static Phoneme] {
        &self.consonants
    }

    pub fn doubles(&self) -> &[&'static Phoneme] {
        &self.doubles
    }

    /// Whether `ph` is one of the inventory's vowels or consonants.
    pub fn contains(&self, ph: &Phoneme) -> bool {
        self.vowels
            .iter()
            .chain(&self.consonants)
            .any(|&own| own == ph)
    }

    /// Enumerate legal syllables of the given shapes from this inventory.
    pub fn candidates<'a>(&'a self, patterns: &'a [Pattern]) -> Candidates<'a> {
        candidates(&self.vowels, &self.consonants, &self.doubles, patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{lookup, spell};

    #[test]
    fn splits_vowels_and_consonants() {
        let inventory = Inventory::new("aiu", "ptk", "k").expect("inventory");
        assert_eq!(spell(inventory.vowels()), "aiu");
        assert_eq!(spell(inventory.consonants()), "ptk");
        assert_eq!(spell(inventory.doubles()), "k");
        assert!(inventory.contains(lookup("t").expect("t")));
        assert!(!inventory.contains(lookup("o").expect("o")));
    }

    #[test]
    fn rejects_misplaced_sounds() {
        match Inventory::new("ak", "t", "") {
            Err(CoreError::InventoryMismatch { symbol, expected }) => {
                assert_eq!(symbol, "k");
                assert_eq!(expected, "vowel");
            }
            other => panic!("expected InventoryMismatch, got {other:?}"),
        }
        assert!(matches!(
            Inventory::new("a", "te", ""),
            Err(CoreError::InventoryMismatch { expected: "consonant", .. })
        ));
        assert!(matches!(
            Inventory::new("a", "t7", ""),
            Err(CoreError::UnknownPhoneme(_))
        ));
    }

    #[test]
    fn generates_from_own_sounds() {
        let inventory = Inventory::new("ai", "sm", "").expect("inventory");
        let patterns = [Pattern::parse("CV").expect("pattern")];
        let words: Vec<String> = inventory
            .candidates(&patterns)
            .map(|seq| spell(&seq))
            .collect();
        assert_eq!(words, ["sa", "si", "ma", "mi"]);
    }
}
