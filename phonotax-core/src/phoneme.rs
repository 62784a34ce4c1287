//! A single speech sound and the predicates derived from its features.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::CoreError;
use crate::features::{self, *};
use crate::sonority;

/// An immutable sound definition.
///
/// Phonemes are created once when the [`PhonemeTable`](crate::table::PhonemeTable)
/// is built and are handed out as `&'static Phoneme`. Equality, ordering
/// and hashing only consider the primary symbol.
#[derive(Debug, Clone)]
pub struct Phoneme {
    symbol: &'static str,
    alt_symbol: &'static str,
    description: &'static str,
    example: &'static str,
    features: u32,
    sonority: u8,
}

impl Phoneme {
    pub(crate) fn new(
        symbol: &'static str,
        alt_symbol: &'static str,
        description: &'static str,
        example: &'static str,
    ) -> Result<Self, CoreError> {
        let features = features::encode(description)?;
        let mut phoneme = Phoneme {
            symbol,
            alt_symbol,
            description,
            example,
            features,
            sonority: 0,
        };
        phoneme.sonority = sonority::score(&phoneme);
        Ok(phoneme)
    }

    /// IPA symbol.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// X-SAMPA symbol.
    pub fn alt_symbol(&self) -> &'static str {
        self.alt_symbol
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn example(&self) -> &'static str {
        self.example
    }

    pub fn features(&self) -> u32 {
        self.features
    }

    pub fn sonority(&self) -> u8 {
        self.sonority
    }

    fn has(&self, bits: u32) -> bool {
        self.features & bits == bits
    }

    pub fn is_vowel(&self) -> bool {
        self.has(VOWEL)
    }

    pub fn is_consonant(&self) -> bool {
        !self.is_vowel()
    }

    pub fn is_pulmonic(&self) -> bool {
        self.has(PULMONIC)
    }

    pub fn is_rounded(&self) -> bool {
        self.is_vowel() && self.features & ROUNDING_MASK == ROUNDED
    }

    pub fn is_voiced(&self) -> bool {
        self.features & VOICING_MASK == VOICED
    }

    /// Place-of-articulation bits, or 0 for vowels.
    pub fn place(&self) -> u32 {
        if self.is_vowel() {
            0
        } else {
            self.features & PLACE_MASK
        }
    }

    /// Manner-of-articulation value, or 0 for vowels and non-pulmonic sounds.
    pub fn manner(&self) -> u32 {
        if self.is_consonant() && self.is_pulmonic() {
            self.features & MANNER_MASK
        } else {
            0
        }
    }

    /// Manner and airstream together; two clicks share one, as do two
    /// fricatives.
    pub(crate) fn manner_class(&self) -> u32 {
        if self.is_vowel() {
            0
        } else {
            self.features & (MANNER_MASK | NON_PULMONIC_MASK)
        }
    }

    pub fn is_nasal(&self) -> bool {
        self.manner() == NASAL
    }

    pub fn is_plosive(&self) -> bool {
        self.manner() == PLOSIVE
    }

    pub fn is_fricative(&self) -> bool {
        self.manner() == FRICATIVE
    }

    pub fn is_affricate(&self) -> bool {
        self.manner() == AFFRICATE
    }

    pub fn is_approximant(&self) -> bool {
        self.manner() == APPROXIMANT
    }

    pub fn is_trill(&self) -> bool {
        self.manner() == TRILL
    }

    pub fn is_flap(&self) -> bool {
        self.manner() == FLAP
    }

    pub fn is_lateral(&self) -> bool {
        self.is_consonant() && self.has(LATERAL)
    }

    pub fn is_click(&self) -> bool {
        self.has(CLICK)
    }

    pub fn is_implosive(&self) -> bool {
        self.has(IMPLOSIVE)
    }

    pub fn is_ejective(&self) -> bool {
        self.has(EJECTIVE)
    }

    /// Sounds that fully interrupt the airflow: plosives, flaps and affricates.
    pub fn is_interrupted(&self) -> bool {
        matches!(self.manner(), PLOSIVE | FLAP | AFFRICATE)
    }

    pub fn is_glottal(&self) -> bool {
        self.place() & GLOTTAL != 0
    }

    pub fn is_glottal_stop(&self) -> bool {
        self.is_glottal() && self.is_plosive()
    }

    pub fn is_glide(&self) -> bool {
        self.is_consonant() && sonority::GLIDES.contains(&self.symbol)
    }

    pub fn is_liquid(&self) -> bool {
        self.is_consonant() && sonority::LIQUIDS.contains(&self.symbol)
    }

    /// The mid central vowel (schwa).
    pub fn is_neutral_vowel(&self) -> bool {
        self.is_vowel()
            && self.features & VOWEL_OPENNESS_MASK == MID
            && self.features & VOWEL_POSITION_MASK == CENTRAL
    }

    /// Front-back index of a vowel: back = 1, central = 2, front = 3.
    pub fn position_index(&self) -> Option<u8> {
        self.is_vowel()
            .then(|| ((self.features & VOWEL_POSITION_MASK) >> 4) as u8)
    }

    /// Openness index of a vowel: open = 1 through close = 7.
    pub fn openness_index(&self) -> Option<u8> {
        self.is_vowel()
            .then(|| ((self.features & VOWEL_OPENNESS_MASK) >> 6) as u8)
    }
}

impl PartialEq for Phoneme {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Phoneme {}

impl PartialOrd for Phoneme {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Phoneme {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol.cmp(other.symbol)
    }
}

impl Hash for Phoneme {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
