//! Sonority model.
//!
//! Sounds fall into bands of decreasing acoustic prominence. Voiced sounds
//! in bands below [`Band::Nasal`] get a small bonus, so that a voiced
//! fricative outranks its voiceless partner without reaching the next band.

use crate::phoneme::Phoneme;

/// Consonants that behave as non-syllabic vowels.
pub const GLIDES: &[&str] = &["j", "w", "ɥ", "ɰ", "ʋ"];

/// Laterals and rhotics.
pub const LIQUIDS: &[&str] = &[
    "l", "ɭ", "ʎ", "ʟ", "ɺ", "r", "ɾ", "ɽ", "ɹ", "ɻ", "ʀ", "ʙ",
];

pub const VOICED_BONUS: u8 = 5;

/// Lowest score a sound needs to carry a syllable on its own.
pub const MIN_VOCALIC_SONORITY: u8 = Band::Nasal.score();

/// Adjacent vowels closer than this cannot form a diphthong.
pub const DIPHTHONG_THRESHOLD: f64 = 1.5;

/// Sonority bands, least sonorous first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    /// Clicks, implosives, ejectives and anything left unclassified.
    NonPulmonic,
    Plosive,
    Affricate,
    Fricative,
    Nasal,
    Liquid,
    Glide,
    Vowel,
}

impl Band {
    pub const fn score(self) -> u8 {
        match self {
            Band::NonPulmonic => 10,
            Band::Plosive => 30,
            Band::Affricate => 40,
            Band::Fricative => 50,
            Band::Nasal => 70,
            Band::Liquid => 80,
            Band::Glide => 90,
            Band::Vowel => 100,
        }
    }

    /// Vowels, glides, liquids and nasals are voiced by definition.
    pub const fn always_voiced(self) -> bool {
        matches!(self, Band::Vowel | Band::Glide | Band::Liquid | Band::Nasal)
    }
}

/// Classify a sound, testing the more sonorous bands first.
pub fn band(ph: &Phoneme) -> Band {
    if ph.is_vowel() {
        Band::Vowel
    } else if ph.is_glide() {
        Band::Glide
    } else if ph.is_liquid() {
        Band::Liquid
    } else if ph.is_nasal() {
        Band::Nasal
    } else if ph.is_fricative() {
        Band::Fricative
    } else if ph.is_affricate() {
        Band::Affricate
    } else if ph.is_plosive() {
        Band::Plosive
    } else {
        Band::NonPulmonic
    }
}

/// Compute the score from a sound's features. [`Phoneme::sonority`] caches it.
pub(crate) fn score(ph: &Phoneme) -> u8 {
    let band = band(ph);
    if !band.always_voiced() && ph.is_voiced() {
        band.score() + VOICED_BONUS
    } else {
        band.score()
    }
}

pub fn sonority(ph: &Phoneme) -> u8 {
    ph.sonority()
}

pub fn can_be_vocalic(ph: &Phoneme) -> bool {
    ph.sonority() >= MIN_VOCALIC_SONORITY
}

/// Euclidean distance between two vowels on the (front-back, openness) grid.
///
/// Consonants sit at the origin, so the distance is only meaningful when
/// both arguments are vowels.
pub fn vowel_distance(a: &Phoneme, b: &Phoneme) -> f64 {
    let coords = |ph: &Phoneme| {
        (
            f64::from(ph.position_index().unwrap_or(0)),
            f64::from(ph.openness_index().unwrap_or(0)),
        )
    };
    let (ax, ay) = coords(a);
    let (bx, by) = coords(b);
    (ax - bx).hypot(ay - by)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::lookup;

    fn ph(symbol: &str) -> &'static Phoneme {
        lookup(symbol).unwrap_or_else(|| panic!("/{symbol}/ missing from table"))
    }

    #[test]
    fn sonority_ordering() {
        let ordered = ["a", "j", "l", "n", "z", "s", "d", "t", "ʘ"];
        for pair in ordered.windows(2) {
            assert!(
                sonority(ph(pair[0])) > sonority(ph(pair[1])),
                "/{}/ should be more sonorous than /{}/",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn voiced_bonus_stays_inside_the_band() {
        assert_eq!(sonority(ph("z")), Band::Fricative.score() + VOICED_BONUS);
        assert!(sonority(ph("z")) < Band::Nasal.score());
        assert_eq!(sonority(ph("m")), Band::Nasal.score());
    }

    #[test]
    fn classifies_bands() {
        assert_eq!(band(ph("i")), Band::Vowel);
        assert_eq!(band(ph("w")), Band::Glide);
        assert_eq!(band(ph("r")), Band::Liquid);
        assert_eq!(band(ph("ŋ")), Band::Nasal);
        assert_eq!(band(ph("x")), Band::Fricative);
        assert_eq!(band(ph("p")), Band::Plosive);
        assert_eq!(band(ph("ɓ")), Band::NonPulmonic);
    }

    #[test]
    fn vocalic_capability() {
        assert!(can_be_vocalic(ph("n")));
        assert!(can_be_vocalic(ph("l")));
        assert!(!can_be_vocalic(ph("s")));
    }

    #[test]
    fn vowel_distances() {
        let close = |actual: f64, expected: f64| (actual - expected).abs() <= expected * 0.01;
        assert!(close(vowel_distance(ph("a"), ph("i")), 6.0));
        assert!(close(vowel_distance(ph("u"), ph("i")), 2.0));
        assert!(close(vowel_distance(ph("a"), ph("u")), 6.32));
        assert!(close(vowel_distance(ph("æ"), ph("ɞ")), 1.414));
    }
}
