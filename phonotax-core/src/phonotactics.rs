//! Cross-linguistic phonotactic rules.
//!
//! Different languages have different combining rules. These impose a
//! common set that holds across many languages and rejects the most
//! obviously unpronounceable combinations. Rules are evaluated in a fixed
//! order and the first one that fires is reported.

use thiserror::Error;

use crate::error::CoreError;
use crate::features::{ALVEOLAR, LABIODENTAL};
use crate::phoneme::Phoneme;
use crate::sonority::{DIPHTHONG_THRESHOLD, vowel_distance};

/// Why a sound may not follow a partial sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("/{0}/ can't double unless the language allows it")]
    Doubled(&'static str),
    #[error("/{0}/ can't triple, even where doubling is allowed")]
    Tripled(&'static str),
    #[error("a schwa can't be part of a diphthong")]
    NeutralVowelInDiphthong,
    #[error("/{0}/ and /{1}/ aren't distinct enough to form a diphthong")]
    VowelsTooClose(&'static str, &'static str),
    #[error("/{0}/ would start a second nucleus")]
    SecondNucleus(&'static str),
    #[error("glottals can't follow another consonant")]
    GlottalAfterConsonant,
    #[error("clicks can't follow another consonant")]
    ClickAfterConsonant,
    #[error("a glottal stop can't be followed by a consonant")]
    ConsonantAfterGlottalStop,
    #[error("a flap can't be followed by a consonant")]
    ConsonantAfterFlap,
    #[error("/{0}{1}/ is unpronounceable; both share a manner of articulation")]
    SameManner(&'static str, &'static str),
    #[error("an affricate can't be followed by a fricative")]
    FricativeAfterAffricate,
    #[error("glides can only appear next to vowels")]
    GlideNextToConsonant,
    #[error("two nasals can't be adjacent unless doubling is allowed")]
    AdjacentNasals,
    #[error("a nasal can't follow an interrupted consonant")]
    NasalAfterInterruption,
    #[error("/{0}/ can't appear twice in one consonant cluster")]
    RepeatedInCluster(&'static str),
    #[error("the consonant cluster is already interrupted")]
    AlreadyInterrupted,
    #[error("a consonant cluster can't change voicing more than once")]
    VoicingChange,
}

/// Decide whether `next` may be appended to `sequence`.
///
/// Returns `None` when it may, or the first rule that forbids it.
/// `allowed_doubles` lists the sounds a language permits to double.
pub fn why_not_next(
    sequence: &[&Phoneme],
    next: &Phoneme,
    allowed_doubles: &[&Phoneme],
) -> Option<Violation> {
    let last = *sequence.last()?;

    if last == next {
        if !allowed_doubles.contains(&next) {
            return Some(Violation::Doubled(next.symbol()));
        }
        if sequence.len() >= 2 && sequence[sequence.len() - 2] == next {
            return Some(Violation::Tripled(next.symbol()));
        }
        return None;
    }

    match (last.is_vowel(), next.is_vowel()) {
        (true, true) => why_not_vowel(sequence, last, next),
        (false, false) => why_not_consonant(sequence, last, next, allowed_doubles),
        _ => None,
    }
}

fn why_not_vowel(sequence: &[&Phoneme], last: &Phoneme, next: &Phoneme) -> Option<Violation> {
    // A schwa is the most relaxed sound there is; gliding into or out of it
    // undoes that.
    if last.is_neutral_vowel() || next.is_neutral_vowel() {
        return Some(Violation::NeutralVowelInDiphthong);
    }
    if vowel_distance(last, next) < DIPHTHONG_THRESHOLD {
        return Some(Violation::VowelsTooClose(last.symbol(), next.symbol()));
    }
    let trailing_vowels = sequence.iter().rev().take_while(|ph| ph.is_vowel()).count();
    let earlier = &sequence[..sequence.len() - trailing_vowels];
    if earlier.iter().any(|ph| ph.is_vowel()) {
        return Some(Violation::SecondNucleus(next.symbol()));
    }
    None
}

fn why_not_consonant(
    sequence: &[&Phoneme],
    last: &Phoneme,
    next: &Phoneme,
    allowed_doubles: &[&Phoneme],
) -> Option<Violation> {
    if next.is_glottal() {
        return Some(Violation::GlottalAfterConsonant);
    }
    if next.is_click() {
        return Some(Violation::ClickAfterConsonant);
    }
    if last.is_glottal_stop() {
        return Some(Violation::ConsonantAfterGlottalStop);
    }
    if last.is_flap() {
        return Some(Violation::ConsonantAfterFlap);
    }
    // Same manner (pt, gd, sʃ) is out, except alveolar + labiodental (vz, sf).
    if last.manner_class() == next.manner_class() {
        let mut places = [last.place(), next.place()];
        places.sort_unstable();
        if places != [LABIODENTAL, ALVEOLAR] {
            return Some(Violation::SameManner(last.symbol(), next.symbol()));
        }
    }
    if last.is_affricate() && next.is_fricative() {
        return Some(Violation::FricativeAfterAffricate);
    }
    if last.is_glide() || next.is_glide() {
        return Some(Violation::GlideNextToConsonant);
    }
    if last.is_nasal() && next.is_nasal() && !allowed_doubles.contains(&next) {
        return Some(Violation::AdjacentNasals);
    }
    if next.is_nasal() && last.is_interrupted() {
        return Some(Violation::NasalAfterInterruption);
    }
    why_not_cluster(sequence, next)
}

/// Rules over the whole consonant run since the last vowel, `next` included.
fn why_not_cluster(sequence: &[&Phoneme], next: &Phoneme) -> Option<Violation> {
    let start = sequence
        .iter()
        .rposition(|ph| ph.is_vowel())
        .map_or(0, |i| i + 1);
    let cluster = &sequence[start..];

    if cluster.contains(&next) {
        return Some(Violation::RepeatedInCluster(next.symbol()));
    }

    let interruptions = cluster
        .iter()
        .copied()
        .chain(std::iter::once(next))
        .filter(|ph| ph.is_interrupted())
        .count();
    if interruptions > 1 {
        return Some(Violation::AlreadyInterrupted);
    }

    let voicing: Vec<bool> = cluster
        .iter()
        .copied()
        .chain(std::iter::once(next))
        .map(Phoneme::is_voiced)
        .collect();
    let changes = voicing.windows(2).filter(|w| w[0] != w[1]).count();
    if changes > 1 {
        return Some(Violation::VoicingChange);
    }
    None
}

/// Validate a whole sequence left to right.
///
/// The error carries the position of the first sound that could not be
/// appended.
pub fn check(sequence: &[&Phoneme], allowed_doubles: &[&Phoneme]) -> Result<(), CoreError> {
    for position in 1..sequence.len() {
        if let Some(reason) = why_not_next(&sequence[..position], sequence[position], allowed_doubles)
        {
            return Err(CoreError::PhonotacticViolation { position, reason });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{lookup, parse_ipa};

    fn why_not(text: &str, doubles: &str) -> Option<Violation> {
        let sequence = parse_ipa(text).expect("test text should parse");
        let doubles = parse_ipa(doubles).expect("doubles should parse");
        let (next, prefix) = sequence.split_last().expect("non-empty");
        why_not_next(prefix, next, &doubles)
    }

    fn first_violation(text: &str) -> Option<Violation> {
        let sequence = parse_ipa(text).expect("test text should parse");
        match check(&sequence, &[]) {
            Ok(()) => None,
            Err(CoreError::PhonotacticViolation { reason, .. }) => Some(reason),
            Err(other) => panic!("unexpected error {other}"),
        }
    }

    fn assert_reason(reason: Option<Violation>, expected: &str) {
        let message = reason.map(|r| r.to_string().to_lowercase()).unwrap_or_default();
        assert!(
            message.contains(expected),
            "expected a reason containing '{expected}', got '{message}'"
        );
    }

    #[test]
    fn empty_sequence_accepts_anything() {
        let a = lookup("a").expect("a");
        assert_eq!(why_not_next(&[], a, &[]), None);
    }

    #[test]
    fn diphthongs() {
        for vowels in ["ai", "oa", "ui"] {
            assert_eq!(why_not(vowels, ""), None, "{vowels}");
            assert_eq!(why_not(&format!("k{vowels}"), ""), None, "k{vowels}");
        }
        for prefix in ["", "k"] {
            assert_reason(why_not(&format!("{prefix}aa"), ""), "can't double");
            assert_reason(why_not(&format!("{prefix}æɞ"), ""), "aren't distinct enough");
            assert_reason(why_not(&format!("{prefix}aə"), ""), "schwa");
        }
    }

    #[test]
    fn second_nucleus_is_refused() {
        assert_eq!(why_not("akai", ""), Some(Violation::SecondNucleus("i")));
        // Shape alone cannot see this; a consonant-to-vowel step is allowed.
        assert_eq!(why_not("aka", ""), None);
    }

    #[test]
    fn doubling_and_tripling() {
        assert_reason(why_not("mm", ""), "can't double");
        assert_eq!(why_not("mm", "m"), None);
        assert_reason(why_not("mmm", "m"), "can't triple");
        assert_eq!(why_not("amm", "m"), None);
    }

    #[test]
    fn consonant_pairs() {
        assert_reason(why_not("ʔs", ""), "can't be followed by a consonant");
        assert_reason(why_not("kh", ""), "glottals can't follow");
        assert_reason(why_not("ɽs", ""), "flap can't be followed by a consonant");
        assert_reason(why_not("sǃ", ""), "clicks can't follow");
        assert_eq!(why_not("zv", ""), None);
        assert_eq!(why_not("sf", ""), None);
        assert_reason(why_not("sx", ""), "unpronounceable");
        assert_reason(why_not("pt", ""), "unpronounceable");
        assert_reason(why_not("ws", ""), "next to vowels");
        assert_reason(why_not("tn", ""), "interrupted");
    }

    #[test]
    fn nasal_pairs_need_doubling_permission() {
        // Labiodental + alveolar slips past the same-manner rule.
        assert_eq!(why_not("ɱn", ""), Some(Violation::AdjacentNasals));
        assert_eq!(why_not("ɱn", "n"), None);
    }

    #[test]
    fn cluster_rules() {
        assert_reason(first_violation("tlt"), "can't appear twice");
        assert_reason(first_violation("tlk"), "already interrupted");
        assert_reason(first_violation("tls"), "change voicing");
        assert_eq!(first_violation("alts"), None);
        assert_eq!(first_violation("armps"), None);
        assert_eq!(first_violation("str"), None);
    }

    #[test]
    fn glides_only_touch_vowels() {
        for text in ["ws", "sw", "kj", "sj", "kw"] {
            assert_eq!(why_not(text, ""), Some(Violation::GlideNextToConsonant), "{text}");
        }
        assert_eq!(first_violation("kja"), Some(Violation::GlideNextToConsonant));
        assert_eq!(first_violation("ja"), None);
        assert_eq!(first_violation("aj"), None);
        assert_eq!(first_violation("wajs"), Some(Violation::GlideNextToConsonant));
    }

    #[test]
    fn diphthong_vowels_must_be_far_enough_apart() {
        // i-e are two openness steps apart, i-ɪ only one.
        assert_eq!(why_not("ie", ""), None);
        assert_eq!(why_not("iɪ", ""), Some(Violation::VowelsTooClose("i", "ɪ")));
        assert_eq!(why_not("kiɪ", ""), Some(Violation::VowelsTooClose("i", "ɪ")));
    }

    #[test]
    fn a_vowel_resets_the_cluster() {
        assert_eq!(first_violation("tat"), None);
        assert_eq!(first_violation("stast"), None);
    }

    #[test]
    fn check_reports_position() {
        let sequence = parse_ipa("akʔs").expect("parse");
        let err = check(&sequence, &[]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::PhonotacticViolation {
                position: 2,
                reason: Violation::GlottalAfterConsonant
            }
        ));
    }
}
