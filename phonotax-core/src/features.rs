//! Articulatory feature codec.
//!
//! A sound's features are packed into a single `u32`. Each categorical
//! attribute owns a reserved, non-overlapping bit range:
//!
//! ```text
//!  bit  0        pulmonic airstream
//!  bit  1        vowel
//!  bits 2..=3    rounding      (rounded, unrounded)
//!  bits 4..=5    position      (back, central, front)
//!  bits 6..=8    openness      (open .. close, seven values)
//!  bits 9..=20   place         (one bit per place; co-articulation sets several)
//!  bit  21       lateral
//!  bits 22..=24  manner        (nasal .. affricate, seven values)
//!  bits 25..=27  non-pulmonic  (click, implosive, ejective)
//!  bits 28..=29  voicing       (voiced, voiceless)
//! ```
//!
//! Multi-bit groups store small integers, so a value such as `CENTRAL`
//! (`2 << 4`) is contained in `FRONT` (`3 << 4`). The decode tables below
//! are therefore ordered from the most specific value to the most generic,
//! and decoding takes the first entry whose bits are all present.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::CoreError;

pub const PULMONIC: u32 = 1;
pub const VOWEL: u32 = 1 << 1;

// Two bits so that "unrounded" is distinguishable from "no rounding given".
pub const ROUNDING_MASK: u32 = 3 << 2;
pub const ROUNDED: u32 = 1 << 2;
pub const UNROUNDED: u32 = 2 << 2;

pub const VOWEL_POSITION_MASK: u32 = 3 << 4;
pub const BACK: u32 = 1 << 4;
pub const CENTRAL: u32 = 2 << 4;
pub const FRONT: u32 = 3 << 4;

pub const VOWEL_OPENNESS_MASK: u32 = 7 << 6;
pub const OPEN: u32 = 1 << 6;
pub const NEAR_OPEN: u32 = 2 << 6;
pub const OPEN_MID: u32 = 3 << 6;
pub const MID: u32 = 4 << 6;
pub const CLOSE_MID: u32 = 5 << 6;
pub const NEAR_CLOSE: u32 = 6 << 6;
pub const CLOSE: u32 = 7 << 6;

pub const BILABIAL: u32 = 1 << 9;
pub const LABIODENTAL: u32 = 1 << 10;
pub const LABIAL: u32 = BILABIAL | LABIODENTAL;
pub const DENTAL: u32 = 1 << 11;
pub const ALVEOLAR: u32 = 1 << 12;
pub const POSTALVEOLAR: u32 = 1 << 13;
pub const RETROFLEX: u32 = 1 << 14;
pub const CORONAL: u32 = DENTAL | ALVEOLAR | POSTALVEOLAR | RETROFLEX;
pub const PALATAL: u32 = 1 << 15;
pub const VELAR: u32 = 1 << 16;
pub const UVULAR: u32 = 1 << 17;
pub const DORSAL: u32 = PALATAL | VELAR | UVULAR;
pub const PHARYNGEAL: u32 = 1 << 18;
pub const EPIGLOTTAL: u32 = 1 << 19;
pub const GLOTTAL: u32 = 1 << 20;
pub const LARYNGEAL: u32 = PHARYNGEAL | EPIGLOTTAL | GLOTTAL;
pub const PLACE_MASK: u32 = 0xFFF << 9;

pub const LATERAL: u32 = 1 << 21;

pub const MANNER_MASK: u32 = 7 << 22;
pub const NASAL: u32 = 1 << 22;
pub const STOP: u32 = 2 << 22;
pub const PLOSIVE: u32 = STOP;
pub const FRICATIVE: u32 = 3 << 22;
pub const APPROXIMANT: u32 = 4 << 22;
pub const TRILL: u32 = 5 << 22;
pub const TAP: u32 = 6 << 22;
pub const FLAP: u32 = TAP;
pub const AFFRICATE: u32 = 7 << 22;

pub const NON_PULMONIC_MASK: u32 = 7 << 25;
pub const CLICK: u32 = 1 << 25;
pub const IMPLOSIVE: u32 = 1 << 26;
pub const EJECTIVE: u32 = 1 << 27;

// Two bits so that "voiceless" differs numerically from `PULMONIC`.
pub const VOICING_MASK: u32 = 3 << 28;
pub const VOICED: u32 = 1 << 28;
pub const VOICELESS: u32 = 2 << 28;

pub const ALVEOLO_PALATAL: u32 = ALVEOLAR | PALATAL;
pub const LABIAL_VELAR: u32 = BILABIAL | VELAR;
pub const PALATAL_VELAR: u32 = PALATAL | VELAR;
pub const LABIAL_PALATAL: u32 = LABIAL | PALATAL;

/// Every attribute word the codec understands, with its bits.
///
/// When two names share a value the first one is canonical: it is the
/// name `attribute_name` returns and the one `decode` writes.
pub const ATTRIBUTES: &[(&str, u32)] = &[
    ("pulmonic", PULMONIC),
    ("vowel", VOWEL),
    ("rounded", ROUNDED),
    ("unrounded", UNROUNDED),
    ("back", BACK),
    ("central", CENTRAL),
    ("front", FRONT),
    ("open", OPEN),
    ("near-open", NEAR_OPEN),
    ("open-mid", OPEN_MID),
    ("mid", MID),
    ("close-mid", CLOSE_MID),
    ("near-close", NEAR_CLOSE),
    ("close", CLOSE),
    ("bilabial", BILABIAL),
    ("labiodental", LABIODENTAL),
    ("labial", LABIAL),
    ("dental", DENTAL),
    ("alveolar", ALVEOLAR),
    ("postalveolar", POSTALVEOLAR),
    ("retroflex", RETROFLEX),
    ("coronal", CORONAL),
    ("palatal", PALATAL),
    ("velar", VELAR),
    ("uvular", UVULAR),
    ("dorsal", DORSAL),
    ("pharyngeal", PHARYNGEAL),
    ("epiglottal", EPIGLOTTAL),
    ("glottal", GLOTTAL),
    ("laryngeal", LARYNGEAL),
    ("lateral", LATERAL),
    ("nasal", NASAL),
    ("plosive", PLOSIVE),
    ("stop", STOP),
    ("fricative", FRICATIVE),
    ("approximant", APPROXIMANT),
    ("trill", TRILL),
    ("flap", FLAP),
    ("tap", TAP),
    ("affricate", AFFRICATE),
    ("click", CLICK),
    ("implosive", IMPLOSIVE),
    ("ejective", EJECTIVE),
    ("voiced", VOICED),
    ("voiceless", VOICELESS),
    ("alveolo-palatal", ALVEOLO_PALATAL),
    ("labial-velar", LABIAL_VELAR),
    ("palatal-velar", PALATAL_VELAR),
    ("labial-palatal", LABIAL_PALATAL),
];

// Decode tables, most specific value first.

const OPENNESS: &[(&str, u32)] = &[
    ("close", CLOSE),
    ("near-close", NEAR_CLOSE),
    ("close-mid", CLOSE_MID),
    ("mid", MID),
    ("open-mid", OPEN_MID),
    ("near-open", NEAR_OPEN),
    ("open", OPEN),
];

const POSITIONS: &[(&str, u32)] = &[("front", FRONT), ("central", CENTRAL), ("back", BACK)];

const ROUNDINGS: &[(&str, u32)] = &[("rounded", ROUNDED), ("unrounded", UNROUNDED)];

const MANNERS: &[(&str, u32)] = &[
    ("affricate", AFFRICATE),
    ("flap", FLAP),
    ("trill", TRILL),
    ("approximant", APPROXIMANT),
    ("fricative", FRICATIVE),
    ("plosive", PLOSIVE),
    ("nasal", NASAL),
];

const NON_PULMONICS: &[(&str, u32)] = &[
    ("click", CLICK),
    ("implosive", IMPLOSIVE),
    ("ejective", EJECTIVE),
];

const PLACES: &[(&str, u32)] = &[
    ("glottal", GLOTTAL),
    ("epiglottal", EPIGLOTTAL),
    ("pharyngeal", PHARYNGEAL),
    ("uvular", UVULAR),
    ("velar", VELAR),
    ("palatal", PALATAL),
    ("retroflex", RETROFLEX),
    ("postalveolar", POSTALVEOLAR),
    ("alveolar", ALVEOLAR),
    ("dental", DENTAL),
    ("labiodental", LABIODENTAL),
    ("bilabial", BILABIAL),
];

const COARTICULATIONS: &[(&str, u32)] = &[
    ("alveolo-palatal", ALVEOLO_PALATAL),
    ("labial-velar", LABIAL_VELAR),
    ("palatal-velar", PALATAL_VELAR),
    ("labial-palatal", LABIAL_PALATAL),
];

/// Manners that have no voiceless counterpart in the inventory.
const IMPLIED_VOICINGS: &[u32] = &[NASAL, APPROXIMANT, TRILL, FLAP];

fn normalize(word: &str) -> String {
    word.chars()
        .filter(|ch| *ch != '-' && *ch != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn name_map() -> &'static HashMap<String, u32> {
    static NAMES: OnceLock<HashMap<String, u32>> = OnceLock::new();
    NAMES.get_or_init(|| {
        ATTRIBUTES
            .iter()
            .map(|(name, bits)| (normalize(name), *bits))
            .collect()
    })
}

/// Look up the bits for a single attribute word.
///
/// Matching ignores case, hyphens and underscores, so `near-open`,
/// `near_open` and `NearOpen` all resolve to [`NEAR_OPEN`].
pub fn attribute_value(name: &str) -> Option<u32> {
    name_map().get(&normalize(name)).copied()
}

/// Canonical name of an exact attribute value, if it has one.
pub fn attribute_name(bits: u32) -> Option<&'static str> {
    ATTRIBUTES
        .iter()
        .find(|(_, value)| *value == bits)
        .map(|(name, _)| *name)
}

/// Attribute groups whose values exclude each other.
const EXCLUSIVE_GROUPS: &[u32] = &[
    ROUNDING_MASK,
    VOWEL_POSITION_MASK,
    VOWEL_OPENNESS_MASK,
    MANNER_MASK,
    VOICING_MASK,
];

/// Encode a space-separated description such as `"voiced bilabial plosive"`.
///
/// Information the phrase leaves implicit is made explicit: consonants
/// without a non-pulmonic attribute are pulmonic, and nasals, approximants,
/// trills and flaps are always voiced. Two different words from one
/// exclusive group (two manners, say) are rejected.
pub fn encode(phrase: &str) -> Result<u32, CoreError> {
    let mut bits = 0;
    let mut words = 0;
    for word in phrase.split_whitespace() {
        let value = attribute_value(word)
            .ok_or_else(|| CoreError::UnrecognizedAttribute(word.to_string()))?;
        if let Some(&mask) = EXCLUSIVE_GROUPS.iter().find(|&&mask| value & !mask == 0) {
            let previous = bits & mask;
            if previous != 0 && previous != value {
                return Err(CoreError::ConflictingAttribute {
                    word: word.to_string(),
                    previous: attribute_name(previous).unwrap_or("an earlier word"),
                });
            }
        }
        bits |= value;
        words += 1;
    }
    if words == 0 {
        return Err(CoreError::UnrecognizedAttribute(phrase.to_string()));
    }
    if IMPLIED_VOICINGS.contains(&(bits & MANNER_MASK)) {
        bits = (bits & !VOICING_MASK) | VOICED;
    }
    if bits & VOWEL == 0 && bits & NON_PULMONIC_MASK == 0 {
        bits |= PULMONIC;
    }
    Ok(bits)
}

/// Render a bitfield as the canonical description phrase.
pub fn decode(bits: u32) -> String {
    let mut words: Vec<&'static str> = Vec::new();

    if has(bits, VOWEL) {
        words.extend(first_match(bits, OPENNESS));
        words.extend(first_match(bits, POSITIONS));
        words.extend(first_match(bits, ROUNDINGS));
        words.push("vowel");
        return words.join(" ");
    }

    let mut manner: Vec<&'static str> = Vec::new();
    let voicing_implied = if has(bits, PULMONIC) {
        let value = bits & MANNER_MASK;
        match MANNERS.iter().find(|(_, m)| *m == value) {
            // Laryngeal stops are inherently voiceless; the glottal one is
            // conventionally called a "stop".
            Some((_, m)) if *m == STOP && bits & LARYNGEAL != 0 => {
                manner.push(if has(bits, GLOTTAL) { "stop" } else { "plosive" });
                true
            }
            Some((name, m)) => {
                manner.push(*name);
                IMPLIED_VOICINGS.contains(m)
            }
            None => true,
        }
    } else {
        manner.extend(
            NON_PULMONICS
                .iter()
                .rev()
                .filter(|(_, np)| has(bits, *np))
                .map(|(name, _)| *name),
        );
        !has(bits, IMPLOSIVE)
    };

    if !voicing_implied {
        words.push(if has(bits, VOICED) { "voiced" } else { "voiceless" });
    }

    let coarticulated: Vec<&'static str> = COARTICULATIONS
        .iter()
        .rev()
        .filter(|(_, ca)| has(bits, *ca))
        .map(|(name, _)| *name)
        .collect();
    if coarticulated.is_empty() {
        words.extend(first_match(bits, PLACES));
    } else {
        words.extend(coarticulated);
    }

    if has(bits, LATERAL) {
        words.push("lateral");
    }
    words.extend(manner);
    words.join(" ")
}

fn has(bits: u32, attribute: u32) -> bool {
    bits & attribute == attribute
}

fn first_match(bits: u32, table: &[(&'static str, u32)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, value)| has(bits, *value))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_single_bit_has_a_name() {
        for bit in 0..=29 {
            let name = attribute_name(1 << bit);
            assert!(
                name.is_some_and(|n| !n.is_empty()),
                "bit {bit} has no attribute name"
            );
        }
    }

    #[test]
    fn canonical_names_prefer_plosive_and_flap() {
        assert_eq!(attribute_name(STOP), Some("plosive"));
        assert_eq!(attribute_name(TAP), Some("flap"));
    }

    #[test]
    fn attribute_lookup_ignores_case_and_separators() {
        assert_eq!(attribute_value("near-open"), Some(NEAR_OPEN));
        assert_eq!(attribute_value("near_open"), Some(NEAR_OPEN));
        assert_eq!(attribute_value("NearOpen"), Some(NEAR_OPEN));
        assert_eq!(attribute_value("labial-velar"), Some(LABIAL_VELAR));
        assert_eq!(attribute_value("sibilant"), None);
    }

    #[test]
    fn encodes_phrases_with_implicit_bits() {
        let cases = [
            ("alveolar lateral click", ALVEOLAR | LATERAL | CLICK),
            ("postalveolar click", POSTALVEOLAR | CLICK),
            ("velar approximant", VOICED | VELAR | APPROXIMANT | PULMONIC),
            (
                "voiceless palatal-velar fricative",
                VOICELESS | PALATAL_VELAR | FRICATIVE | PULMONIC,
            ),
            (
                "voiceless uvular plosive",
                VOICELESS | UVULAR | PLOSIVE | PULMONIC,
            ),
            (
                "retroflex lateral approximant",
                VOICED | RETROFLEX | LATERAL | APPROXIMANT | PULMONIC,
            ),
            ("alveolar trill", VOICED | ALVEOLAR | TRILL | PULMONIC),
            ("alveolar nasal", VOICED | ALVEOLAR | NASAL | PULMONIC),
            (
                "voiced glottal fricative",
                VOICED | GLOTTAL | FRICATIVE | PULMONIC,
            ),
            ("voiced velar implosive", VOICED | VELAR | IMPLOSIVE),
            (
                "near-open central rounded vowel",
                NEAR_OPEN | CENTRAL | ROUNDED | VOWEL,
            ),
            ("open front unrounded vowel", OPEN | FRONT | UNROUNDED | VOWEL),
        ];
        for (phrase, expected) in cases {
            let bits = encode(phrase).expect("phrase should encode");
            assert_eq!(
                bits,
                expected,
                "{phrase} yielded {bits:#x} ({}), not {expected:#x}",
                decode(bits)
            );
        }
    }

    #[test]
    fn rejects_unknown_words() {
        let err = encode("voiced sibilant fricative").unwrap_err();
        assert!(matches!(err, CoreError::UnrecognizedAttribute(word) if word == "sibilant"));
    }

    #[test]
    fn rejects_two_words_from_one_group() {
        let cases = [
            ("alveolar nasal plosive", "plosive", "nasal"),
            ("voiced voiceless alveolar plosive", "voiceless", "voiced"),
            ("open close front unrounded vowel", "close", "open"),
            ("close front back unrounded vowel", "back", "front"),
            ("close front rounded unrounded vowel", "unrounded", "rounded"),
        ];
        for (phrase, conflicting, earlier) in cases {
            match encode(phrase) {
                Err(CoreError::ConflictingAttribute { word, previous }) => {
                    assert_eq!(word, conflicting, "{phrase}");
                    assert_eq!(previous, earlier, "{phrase}");
                }
                other => panic!("{phrase}: expected a conflict, got {other:?}"),
            }
        }
    }

    #[test]
    fn accepts_repeats_and_synonyms() {
        assert_eq!(
            encode("glottal stop plosive").unwrap(),
            encode("glottal stop").unwrap()
        );
        // Places are not exclusive; co-articulations combine them.
        assert_eq!(
            encode("labial velar approximant").unwrap(),
            encode("labial-velar approximant").unwrap() | LABIODENTAL
        );
    }

    #[test]
    fn rejects_empty_phrase() {
        let err = encode("   ").unwrap_err();
        assert!(matches!(err, CoreError::UnrecognizedAttribute(_)));
    }

    #[test]
    fn decodes_laryngeal_stops_without_voicing() {
        assert_eq!(decode(encode("glottal stop").unwrap()), "glottal stop");
        assert_eq!(
            decode(encode("epiglottal plosive").unwrap()),
            "epiglottal plosive"
        );
    }

    #[test]
    fn decodes_open_mid_without_matching_open() {
        // OPEN_MID contains OPEN's bits; the ordered table must pick OPEN_MID.
        let bits = VOWEL | OPEN_MID | CENTRAL | ROUNDED;
        assert_eq!(decode(bits), "open-mid central rounded vowel");
    }

    #[test]
    fn prefers_coarticulation_labels() {
        let bits = PULMONIC | LABIAL_VELAR | APPROXIMANT | VOICED;
        assert_eq!(decode(bits), "labial-velar approximant");
    }

    #[test]
    fn writes_voiceless_when_voicing_is_absent() {
        let bits = PULMONIC | VELAR | PLOSIVE;
        assert_eq!(decode(bits), "voiceless velar plosive");
    }
}
