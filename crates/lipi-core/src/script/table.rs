use std::sync::OnceLock;

use crate::unit::UnitTable;

pub(crate) const VIRAMA: char = '\u{094D}';
pub(crate) const OM: char = 'ॐ';
pub(crate) const OM_IAST: &str = "oṁ";

pub(crate) const CONSONANTS: &[(char, &str)] = &[
    ('क', "k"),
    ('ख', "kh"),
    ('ग', "g"),
    ('घ', "gh"),
    ('ङ', "ṅ"),
    ('च', "c"),
    ('छ', "ch"),
    ('ज', "j"),
    ('झ', "jh"),
    ('ञ', "ñ"),
    ('ट', "ṭ"),
    ('ठ', "ṭh"),
    ('ड', "ḍ"),
    ('ढ', "ḍh"),
    ('ण', "ṇ"),
    ('त', "t"),
    ('थ', "th"),
    ('द', "d"),
    ('ध', "dh"),
    ('न', "n"),
    ('प', "p"),
    ('फ', "ph"),
    ('ब', "b"),
    ('भ', "bh"),
    ('म', "m"),
    ('य', "y"),
    ('र', "r"),
    ('ल', "l"),
    ('ळ', "ḻ"),
    ('व', "v"),
    ('श', "ś"),
    ('ष', "ṣ"),
    ('स', "s"),
    ('ह', "h"),
];

/// (independent vowel, vowel sign, IAST). `अ` has no sign: it is the
/// inherent vowel.
pub(crate) const VOWELS: &[(char, Option<char>, &str)] = &[
    ('अ', None, "a"),
    ('आ', Some('ा'), "ā"),
    ('इ', Some('ि'), "i"),
    ('ई', Some('ी'), "ī"),
    ('उ', Some('ु'), "u"),
    ('ऊ', Some('ू'), "ū"),
    ('ऋ', Some('ृ'), "ṛ"),
    ('ॠ', Some('ॄ'), "ṝ"),
    ('ऌ', Some('ॢ'), "ḷ"),
    ('ॡ', Some('ॣ'), "ḹ"),
    ('ए', Some('े'), "e"),
    ('ऐ', Some('ै'), "ai"),
    ('ओ', Some('ो'), "o"),
    ('औ', Some('ौ'), "au"),
];

/// Diaeresis spellings of i/u in hiatus after a, read back only.
const HIATUS_VOWELS: &[(char, Option<char>, &str)] =
    &[('इ', Some('ि'), "ï"), ('उ', Some('ु'), "ü")];

pub(crate) const SYMBOLS: &[(char, &str)] = &[
    ('ं', "ṁ"),
    ('ँ', "m\u{0310}"),
    ('ः', "ḥ"),
    ('ऽ', "'"),
    ('।', "/"),
    ('॥', "//"),
    ('०', "0"),
    ('१', "1"),
    ('२', "2"),
    ('३', "3"),
    ('४', "4"),
    ('५', "5"),
    ('६', "6"),
    ('७', "7"),
    ('८', "8"),
    ('९', "9"),
];

pub(crate) fn consonant_iast(c: char) -> Option<&'static str> {
    CONSONANTS.iter().find(|(d, _)| *d == c).map(|(_, l)| *l)
}

pub(crate) fn vowel_sign_iast(c: char) -> Option<&'static str> {
    VOWELS
        .iter()
        .find(|(_, sign, _)| *sign == Some(c))
        .map(|(_, _, l)| *l)
}

pub(crate) fn independent_vowel_iast(c: char) -> Option<&'static str> {
    VOWELS.iter().find(|(d, _, _)| *d == c).map(|(_, _, l)| *l)
}

pub(crate) fn hiatus_spelling(c: char) -> Option<&'static str> {
    HIATUS_VOWELS
        .iter()
        .find(|(d, _, _)| *d == c)
        .map(|(_, _, l)| *l)
}

pub(crate) fn symbol_iast(c: char) -> Option<&'static str> {
    SYMBOLS.iter().find(|(d, _)| *d == c).map(|(_, l)| *l)
}

/// What an IAST unit stands for in Devanagari.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Iast {
    Om,
    Consonant(char),
    Vowel(char),
    Symbol(char),
}

/// Every IAST unit, longest first.
pub(crate) fn iast_lexicon() -> &'static UnitTable<Iast> {
    static INSTANCE: OnceLock<UnitTable<Iast>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let mut pairs: Vec<(&str, Iast)> = vec![(OM_IAST, Iast::Om)];
        pairs.extend(CONSONANTS.iter().map(|&(d, l)| (l, Iast::Consonant(d))));
        pairs.extend(
            VOWELS
                .iter()
                .chain(HIATUS_VOWELS)
                .map(|&(d, _, l)| (l, Iast::Vowel(d))),
        );
        pairs.extend(SYMBOLS.iter().map(|&(d, l)| (l, Iast::Symbol(d))));
        UnitTable::new(&pairs)
    })
}

/// Vowels that can follow a consonant. `None` is the inherent `a`.
pub(crate) fn iast_vowel_signs() -> &'static UnitTable<Option<char>> {
    static INSTANCE: OnceLock<UnitTable<Option<char>>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let pairs: Vec<(&str, Option<char>)> = VOWELS
            .iter()
            .chain(HIATUS_VOWELS)
            .map(|&(_, sign, l)| (l, sign))
            .collect();
        UnitTable::new(&pairs)
    })
}
