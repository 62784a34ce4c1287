//! Built-in phoneme inventory.
//!
//! This is not an exhaustive list of the IPA, just the sounds that are
//! likely to matter for most constructed languages. Each entry is written
//! as (IPA, X-SAMPA, description, example); the description is parsed by
//! [`features::encode`](crate::features::encode) when the table is built.

use std::collections::HashMap;
use std::iter;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::CoreError;
use crate::phoneme::Phoneme;

pub type PhonemeEntry = (&'static str, &'static str, &'static str, &'static str);

pub const PHONEMES: &[PhonemeEntry] = &[
    ("a", "a", "open front unrounded vowel", "French dame [dam]"),
    ("b", "b", "voiced bilabial plosive", "English bed [bEd], French bon [bO~]"),
    ("ɓ", "b_<", "voiced bilabial implosive", "Sindhi ɓarʊ [b_<arU]"),
    ("c", "c", "voiceless palatal plosive", r#"Hungarian latyak ["lQcQk]"#),
    ("d", "d", "voiced alveolar plosive", "English dig [dIg], French doigt [dwa]"),
    ("ɖ", "d`", "voiced retroflex plosive", "Swedish hord [hu:d`]"),
    ("ɗ", "d_<", "voiced alveolar implosive", "Sindhi ɗarʊ [d_<arU]"),
    ("e", "e", "close-mid front unrounded vowel", "French blé [ble]"),
    ("f", "f", "voiceless labiodental fricative", "English five [faIv], French femme [fam]"),
    ("ɡ", "g", "voiced velar plosive", "English game [geIm], French longue [lO~g]"),
    ("ɠ", "g_<", "voiced velar implosive", "Sindhi ɠəro [g_<@ro]"),
    ("h", "h", "voiceless glottal fricative", "English house [haUs]"),
    ("ɦ", r#"h\"#, "voiced glottal fricative", r#"Czech hrad [h\rat]"#),
    ("i", "i", "close front unrounded vowel", "English be [bi:], French oui [wi], Spanish si [si]"),
    ("j", "j", "palatal approximant", "English yes [jEs], French yeux [j2]"),
    ("ʝ", r#"j\"#, "voiced palatal fricative", r#"Greek γειά [j\a]"#),
    ("k", "k", "voiceless velar plosive", r#"English skip [skIp], Spanish carro ["karo]"#),
    ("l", "l", "alveolar lateral approximant", "English lay [leI], French mal [mal]"),
    ("ɭ", "l`", "retroflex lateral approximant", "Svealand Swedish sorl [so:l`]"),
    ("ɺ", r#"l\"#, "alveolar lateral flap", r#"Wayuu püülükü [pM:l\MkM]"#),
    ("m", "m", "bilabial nasal", "English mouse [maUs], French homme [Om]"),
    ("n", "n", "alveolar nasal", "English nap [n{p], French non [nO~]"),
    ("ɳ", "n`", "retroflex nasal", "Swedish hörn [h2:n`]"),
    ("o", "o", "close-mid back rounded vowel", "French veau [vo]"),
    ("p", "p", "voiceless bilabial plosive", r#"English speak [spik], French pose [poz], Spanish perro ["pero]"#),
    ("ɸ", r#"p\"#, "voiceless bilabial fricative", "Japanese fuku "),
    ("q", "q", "voiceless uvular plosive", r#"Arabic qasbah ["qQs_Gba]"#),
    ("r", "r", "alveolar trill", r#"Spanish perro ["pero]"#),
    ("ɽ", "r`", "retroflex flap", "Bengali gari [gar`i:]"),
    ("ɹ", r#"r\"#, "alveolar approximant", r#"English red [r\Ed]"#),
    ("ɻ", r#"r\`"#, "retroflex approximant", r#"Malayalam വഴി ["v@r\`i]"#),
    ("s", "s", "voiceless alveolar fricative", r#"English seem [si:m], French session [sE"sjO~]"#),
    ("ʂ", "s`", "voiceless retroflex fricative", "Swedish mars [mas`]"),
    ("ɕ", r#"s\"#, "voiceless alveolo-palatal fricative", r#"Polish świerszcz [s\v'ers`ts`]"#),
    ("t", "t", "voiceless alveolar plosive", r#"English stew [stju:], French raté [Ra"te]"#),
    ("ʈ", "t`", "voiceless retroflex plosive", "Swedish mört [m2t`]"),
    ("u", "u", "close back rounded vowel", "English boom [bu:m], Spanish su [su]"),
    ("v", "v", "voiced labiodental fricative", "English vest [vEst], French voix [vwa]"),
    ("w", "w", "labial-velar approximant", "English west [wEst], French oui [wi]"),
    ("x", "x", "voiceless velar fricative", "Scots loch [lOx] or [5Ox]; German Buch, Dach; Spanish caja, gestión"),
    ("ɧ", r#"x\"#, "voiceless palatal-velar fricative", r#"Swedish sjal [x\A:l]"#),
    ("y", "y", "close front rounded vowel", r#"French tu [ty] German über ["y:b6]"#),
    ("z", "z", "voiced alveolar fricative", r#"English zoo [zu:], French azote [a"zOt]"#),
    ("ʐ", "z`", "voiced retroflex fricative", "Mandarin Chinese rang [z`aN]"),
    ("ʑ", r#"z\"#, "voiced alveolo-palatal fricative", r#"Polish źrebak ["z\rEbak]"#),
    ("ɑ", "A", "open back unrounded vowel", r#"English father ["fA:D@(r\)] (RP and Gen.Am.)"#),
    ("β", "B", "voiced bilabial fricative", r#"Spanish lavar [la"Ba4]"#),
    ("ʙ", r#"B\"#, "bilabial trill", r#"Reminiscent of shivering ("brrr")"#),
    ("ç", "C", "voiceless palatal fricative", r#"German ich [IC], English human ["Cjum@n] (broad transcription uses [hj-])"#),
    ("ð", "D", "voiced dental fricative", "English then [DEn]"),
    ("ɛ", "E", "open-mid front unrounded vowel", "French même [mE:m], English met [mEt] (RP and Gen.Am.)"),
    ("ɱ", "F", "labiodental nasal", r#"English emphasis ["EFf@sIs] (spoken quickly, otherwise uses [Emf-])"#),
    ("ɣ", "G", "voiced velar fricative", r#"Greek γωνία [Go"nia]"#),
    ("ɢ", r#"G\"#, "voiced uvular plosive", r#"Inuktitut nirivvik [niG\ivvik]"#),
    ("ʛ", r#"G\_<"#, "voiced uvular implosive", r#"Mam ʛa [G\_<a]"#),
    ("ɥ", "H", "labial-palatal approximant", "French huit [Hit]"),
    ("ʜ", r#"H\"#, "voiceless epiglottal fricative", r#"Agul мехӀ [mEH\]"#),
    ("ɪ", "I", "near-close front unrounded vowel", "English kit [kIt]"),
    ("ᵻ", r#"I\"#, "near-close central unrounded vowel", r#"Polish ryba [rI\bA]"#),
    ("ɲ", "J", "palatal nasal", r#"Spanish año ["aJo], English canyon ["k{J@n] (broad transcription uses [-nj-])"#),
    ("ɟ", r#"J\"#, "voiced palatal plosive", r#"Hungarian egy [EJ\]"#),
    ("ʄ", r#"J\_<"#, "voiced palatal implosive", r#"Sindhi ʄaro [J\_<aro]"#),
    ("ɬ", "K", "voiceless alveolar lateral fricative", "Welsh llaw [KaU]"),
    ("ɮ", r#"K\"#, "voiced alveolar lateral fricative", r#"Mongolian долоо [tOK\O:]"#),
    ("ʎ", "L", "palatal lateral approximant", r#"Italian famiglia [fa"miLLa], Castilian: llamar [La"mar]"#),
    ("ʟ", r#"L\"#, "velar lateral approximant", r#"Korean 달구지 [t6L\gudz\i]"#),
    ("ɯ", "M", "close back unrounded vowel", r#"Korean 음식 [M:ms\_hik_}]"#),
    ("ɰ", r#"M\"#, "velar approximant", r#"Spanish fuego ["fweM\o]"#),
    ("ŋ", "N", "velar nasal", "English thing [TIN]"),
    ("ɴ", r#"N\"#, "uvular nasal", r#"Japanese さん san [saN\]"#),
    ("ɔ", "O", "open-mid back rounded vowel", "American English off [O:f]"),
    ("ʘ", r#"O\"#, "bilabial click", ""),
    ("ʋ", "P", "labiodental approximant", r#"Dutch west [PEst]/[v\Est], allophone of English phoneme /r\/"#),
    ("ɒ", "Q", "open back rounded vowel", "RP lot [lQt]"),
    ("ʁ", "R", "voiced uvular fricative", "German rein [RaIn]"),
    ("ʀ", r#"R\"#, "uvular trill", r#"French roi [R\wa]"#),
    ("ʃ", "S", "voiceless postalveolar fricative", "English ship [SIp]"),
    ("θ", "T", "voiceless dental fricative", "English thin [TIn]"),
    ("ʊ", "U", "near-close back rounded vowel", "English foot [fUt]"),
    ("ᵿ", r#"U\"#, "near-close central rounded vowel", r#"English euphoria [jU\"fO@r\i@]"#),
    ("ʌ", "V", "open-mid back unrounded vowel", r#"Scottish English strut [str\Vt]"#),
    ("ʍ", "W", "voiceless labial-velar fricative", "Scots when [WEn]"),
    ("χ", "X", "voiceless uvular fricative", "Klallam sχaʔqʷaʔ [sXa?q_wa?]"),
    ("ħ", r#"X\"#, "voiceless pharyngeal fricative", r#"Arabic ح ḥāʾ [X\A:]"#),
    ("ʏ", "Y", "near-close front rounded vowel", "German hübsch [hYpS]"),
    ("ʒ", "Z", "voiced postalveolar fricative", r#"English vision ["vIZ@n]"#),
    ("ə", "@", "mid central unrounded vowel", r#"schwa, English arena [@"r\i:n@]"#),
    ("ɘ", r#"@\"#, "close-mid central unrounded vowel", r#"Paicĩ kɘ̄ɾɘ [k@\_M4@\_M]"#),
    ("æ", "{", "near-open front unrounded vowel", r#"English trap [tr\{p]"#),
    ("ʉ", "}", "close central rounded vowel", r#"Swedish sju [x\}:]; AuE/NZE boot [b}:t]"#),
    ("ɨ", "1", "close central unrounded vowel", r#"Welsh tu [t1], American English rose's ["r\oUz1z]"#),
    ("ø", "2", "close-mid front rounded vowel", r#"Danish købe ["k2:b@], French deux [d2]"#),
    ("ɜ", "3", "open-mid central unrounded vowel", "English nurse [n3:s] (RP) or [n3`s] (Gen.Am.)"),
    ("ɞ", r#"3\"#, "open-mid central rounded vowel", r#"Irish tomhail [t3\:l']"#),
    ("ɾ", "4", "alveolar flap", r#"Spanish pero ["pe4o], American English better ["bE4@`]"#),
    ("ɐ", "6", "near-open central unrounded vowel", r#"German besser ["bEs6], Australian English mud [m6d]"#),
    ("ɤ", "7", "close-mid back unrounded vowel", "Estonian kõik [k7ik], Vietnamese mơ [m7_M]"),
    ("ɵ", "8", "close-mid central rounded vowel", "Swedish buss [b8s]"),
    ("œ", "9", "open-mid front rounded vowel", "French neuf [n9f], Danish drømme [dR9m@]"),
    ("ɶ", "&", "open front rounded vowel", r#"Swedish skörd [x\&d`]"#),
    ("ʔ", "?", "glottal stop", r#"Cockney English bottle ["bQ?o]"#),
    ("ʕ", r#"?\"#, "voiced pharyngeal fricative", r#"Arabic ع ʿayn [?\Ajn]"#),
    ("ʢ", r#"<\"#, "voiced epiglottal fricative", r#"Siwi arˤbˤəʢa (four) [ar_?\b_?\@<\a]"#),
    ("ʡ", r#">\"#, "epiglottal plosive", r#"Archi гӀарз (complaint) [>\arz]"#),
    ("ǃ", r#"!\"#, "postalveolar click", r#"Zulu iqaqa (polecat) [i:!\a:!\a]"#),
    ("ǀ", r#"|\"#, "dental click", r#"Zulu icici (earring) [i:|\i:|\i]"#),
    ("ǁ", r#"|\|\"#, "alveolar lateral click", r#"Zulu xoxa (to converse) [|\|\O:|\|\a]"#),
    ("ǂ", r#"=\"#, "palatal click", ""),
];

/// Which symbol column a piece of text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Ipa,
    XSampa,
}

/// Registry of every known sound, indexed by both symbol columns.
#[derive(Debug)]
pub struct PhonemeTable {
    phonemes: Vec<Phoneme>,
    by_symbol: HashMap<&'static str, usize>,
    by_alt: HashMap<&'static str, usize>,
    longest_symbol: usize,
    longest_alt: usize,
}

impl PhonemeTable {
    /// The process-wide table, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if a built-in description does not parse; that is a defect in
    /// [`PHONEMES`], not a condition callers can recover from.
    pub fn global() -> &'static PhonemeTable {
        static TABLE: OnceLock<PhonemeTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            PhonemeTable::build(PHONEMES)
                .unwrap_or_else(|err| panic!("built-in phoneme table is malformed: {err}"))
        })
    }

    pub fn build(entries: &[PhonemeEntry]) -> Result<Self, CoreError> {
        let mut table = PhonemeTable {
            phonemes: Vec::with_capacity(entries.len()),
            by_symbol: HashMap::with_capacity(entries.len()),
            by_alt: HashMap::with_capacity(entries.len()),
            longest_symbol: 0,
            longest_alt: 0,
        };
        for &(symbol, alt, description, example) in entries {
            let index = table.phonemes.len();
            table.phonemes.push(Phoneme::new(symbol, alt, description, example)?);
            table.by_symbol.insert(symbol, index);
            table.by_alt.insert(alt, index);
            table.longest_symbol = table.longest_symbol.max(symbol.chars().count());
            table.longest_alt = table.longest_alt.max(alt.chars().count());
        }
        debug!(phonemes = table.phonemes.len(), "built phoneme table");
        Ok(table)
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&Phoneme> {
        self.by_symbol.get(symbol).map(|&i| &self.phonemes[i])
    }

    pub fn by_alt(&self, alt: &str) -> Option<&Phoneme> {
        self.by_alt.get(alt).map(|&i| &self.phonemes[i])
    }

    /// All phonemes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Phoneme> {
        self.phonemes.iter()
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    /// Split `text` into phonemes by greedy longest match.
    ///
    /// Whitespace between symbols is ignored. The first position that
    /// starts no known symbol fails with [`CoreError::UnknownPhoneme`].
    pub fn parse(&self, text: &str, notation: Notation) -> Result<Vec<&Phoneme>, CoreError> {
        let (index, longest) = match notation {
            Notation::Ipa => (&self.by_symbol, self.longest_symbol),
            Notation::XSampa => (&self.by_alt, self.longest_alt),
        };
        let mut phonemes = Vec::new();
        let mut position = 0;
        while let Some(ch) = text[position..].chars().next() {
            if ch.is_whitespace() {
                position += ch.len_utf8();
                continue;
            }
            let rest = &text[position..];
            // The last hit among the first `longest` prefixes is the longest one.
            let matched = rest
                .char_indices()
                .skip(1)
                .map(|(i, _)| i)
                .chain(iter::once(rest.len()))
                .take(longest)
                .filter_map(|end| index.get(&rest[..end]).map(|&i| (end, i)))
                .last();
            match matched {
                Some((end, i)) => {
                    phonemes.push(&self.phonemes[i]);
                    position += end;
                }
                None => return Err(CoreError::UnknownPhoneme(ch.to_string())),
            }
        }
        Ok(phonemes)
    }
}

pub fn lookup(symbol: &str) -> Option<&'static Phoneme> {
    PhonemeTable::global().by_symbol(symbol)
}

pub fn lookup_alt(alt: &str) -> Option<&'static Phoneme> {
    PhonemeTable::global().by_alt(alt)
}

/// Like [`lookup`], but a miss is an error.
pub fn require(symbol: &str) -> Result<&'static Phoneme, CoreError> {
    lookup(symbol).ok_or_else(|| CoreError::UnknownPhoneme(symbol.to_string()))
}

pub fn parse_ipa(text: &str) -> Result<Vec<&'static Phoneme>, CoreError> {
    PhonemeTable::global().parse(text, Notation::Ipa)
}

pub fn parse_xsampa(text: &str) -> Result<Vec<&'static Phoneme>, CoreError> {
    PhonemeTable::global().parse(text, Notation::XSampa)
}

/// Render a sequence with primary symbols.
pub fn spell(sequence: &[&Phoneme]) -> String {
    sequence.iter().map(|ph| ph.symbol()).collect()
}
