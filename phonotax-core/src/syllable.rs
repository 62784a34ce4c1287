//! Onset / nucleus / coda decomposition driven by sonority.

use std::fmt;

use tracing::trace;

use crate::error::CoreError;
use crate::phoneme::Phoneme;
use crate::sonority::{Band, MIN_VOCALIC_SONORITY, band};
use crate::table::{parse_ipa, spell};

/// A single syllable split into its three constituents.
///
/// The constituents are stored as boundaries into one contiguous sequence,
/// so `onset ++ nucleus ++ coda` always reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    phonemes: Vec<&'static Phoneme>,
    nucleus_start: usize,
    coda_start: usize,
}

impl Syllable {
    /// Split `phonemes` around its most sonorous run.
    ///
    /// A run of vowels is the nucleus when one exists. Otherwise the first
    /// sound with the highest sonority carries the syllable, provided it is
    /// at least as sonorous as a nasal and is not a glide.
    pub fn analyze(phonemes: &[&'static Phoneme]) -> Result<Self, CoreError> {
        let vowel = Band::Vowel.score();
        let mut nucleus_start = None;
        let mut coda_start = None;
        let mut peak: Option<usize> = None;

        for (i, ph) in phonemes.iter().enumerate() {
            let score = ph.sonority();
            if score >= vowel {
                if coda_start.is_some() {
                    return Err(CoreError::MultipleNucleus);
                }
                nucleus_start.get_or_insert(i);
            } else if nucleus_start.is_some() && coda_start.is_none() {
                coda_start = Some(i);
            }
            if peak.is_none_or(|p| score > phonemes[p].sonority()) {
                peak = Some(i);
            }
        }

        let (nucleus_start, coda_start) = match nucleus_start {
            Some(start) => (start, coda_start.unwrap_or(phonemes.len())),
            None => {
                let peak = peak.ok_or(CoreError::NoNucleusFound)?;
                let carrier = phonemes[peak];
                if carrier.sonority() < MIN_VOCALIC_SONORITY {
                    return Err(CoreError::NoNucleusFound);
                }
                if band(carrier) == Band::Glide {
                    return Err(CoreError::GlideCannotBeNucleus);
                }
                (peak, peak + 1)
            }
        };

        let syllable = Syllable {
            phonemes: phonemes.to_vec(),
            nucleus_start,
            coda_start,
        };
        trace!(
            onset = %syllable.onset_text(),
            nucleus = %syllable.nucleus_text(),
            coda = %syllable.coda_text(),
            "analyzed syllable"
        );
        Ok(syllable)
    }

    /// Parse IPA text and analyze it.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        Self::analyze(&parse_ipa(text)?)
    }

    pub fn phonemes(&self) -> &[&'static Phoneme] {
        &self.phonemes
    }

    pub fn onset(&self) -> &[&'static Phoneme] {
        &self.phonemes[..self.nucleus_start]
    }

    pub fn nucleus(&self) -> &[&'static Phoneme] {
        &self.phonemes[self.nucleus_start..self.coda_start]
    }

    pub fn coda(&self) -> &[&'static Phoneme] {
        &self.phonemes[self.coda_start..]
    }

    /// Nucleus and coda together.
    pub fn rime(&self) -> &[&'static Phoneme] {
        &self.phonemes[self.nucleus_start..]
    }

    pub fn onset_text(&self) -> String {
        spell(self.onset())
    }

    pub fn nucleus_text(&self) -> String {
        spell(self.nucleus())
    }

    pub fn coda_text(&self) -> String {
        spell(self.coda())
    }
}

impl fmt::Display for Syllable {
    /// Renders as `onset.nucleus.coda`, leaving empty parts blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.onset_text(),
            self.nucleus_text(),
            self.coda_text()
        )
    }
}
