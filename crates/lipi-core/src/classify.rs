//! Character classification for normalized IAST text.
//!
//! Every Latin letter unit lives in a single lexicon, so a two-codepoint unit
//! of one class (the candrabindu `m̐`) is never split by a one-codepoint unit
//! of another class (the consonant `m`).

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::unit::UnitTable;

/// Explicit pause marker. Transparent to consonant and vowel scanning.
pub const PAUSE_GLYPH: char = '|';

pub const CONSONANTS: &[&str] = &[
    "k", "kh", "g", "gh", "ṅ", "c", "ch", "j", "jh", "ñ", "ṭ", "ṭh", "ḍ", "ḍh", "ṇ", "t", "th", "d",
    "dh", "n", "p", "ph", "b", "bh", "m", "y", "r", "l", "ḻ", "v", "ś", "ṣ", "s", "h",
];

/// Nasals, semivowels and sibilants: never the placement site of a holding
/// inside a single-word cluster.
pub const SKIP_CONSONANTS: &[&str] = &["ṅ", "ñ", "ṇ", "n", "m", "y", "r", "l", "ḻ", "v", "ś", "ṣ", "s"];

pub const SHORT_VOWELS: &[&str] = &["a", "i", "u", "ṛ", "ḷ", "ï", "ü"];

pub const LONG_VOWELS: &[&str] = &["ā", "ī", "ū", "ṝ", "ḹ", "e", "ai", "o", "au"];

/// Anusvāra, visarga and candrabindu. They close a syllable, so the holding
/// lookback treats them as vowel-bearing.
pub const VOWEL_BEARING_MARKS: &[&str] = &["ṁ", "ḥ", "m\u{0310}"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Consonant { skip: bool },
    Vowel { long: bool },
    Mark,
}

/// A classified unit: the matched text and its width in codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub text: &'static str,
    pub width: usize,
    pub class: Class,
}

impl Unit {
    pub fn is_long_vowel(&self) -> bool {
        matches!(self.class, Class::Vowel { long: true })
    }

    pub fn is_skip_consonant(&self) -> bool {
        matches!(self.class, Class::Consonant { skip: true })
    }
}

fn lexicon() -> &'static UnitTable<(&'static str, Class)> {
    static INSTANCE: OnceLock<UnitTable<(&'static str, Class)>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let mut pairs: Vec<(&str, (&'static str, Class))> = Vec::new();
        for &c in CONSONANTS {
            let skip = SKIP_CONSONANTS.contains(&c);
            pairs.push((c, (c, Class::Consonant { skip })));
        }
        for &v in SHORT_VOWELS {
            pairs.push((v, (v, Class::Vowel { long: false })));
        }
        for &v in LONG_VOWELS {
            pairs.push((v, (v, Class::Vowel { long: true })));
        }
        for &m in VOWEL_BEARING_MARKS {
            pairs.push((m, (m, Class::Mark)));
        }
        UnitTable::new(&pairs)
    })
}

fn unit_from((found, width): ((&'static str, Class), usize)) -> Unit {
    let (text, class) = found;
    Unit { text, width, class }
}

/// Classify the letter unit starting at `pos`, whatever its class.
pub fn classify_at(chars: &[char], pos: usize) -> Option<Unit> {
    lexicon().match_at(chars, pos).map(unit_from)
}

/// Classify the letter unit ending at `end` (exclusive).
pub fn classify_before(chars: &[char], end: usize) -> Option<Unit> {
    lexicon().match_ending_at(chars, end).map(unit_from)
}

pub fn classify_consonant(chars: &[char], pos: usize) -> Option<Unit> {
    classify_at(chars, pos).filter(|u| matches!(u.class, Class::Consonant { .. }))
}

pub fn classify_vowel(chars: &[char], pos: usize) -> Option<Unit> {
    classify_at(chars, pos).filter(|u| matches!(u.class, Class::Vowel { .. }))
}

pub fn classify_vowel_before(chars: &[char], end: usize) -> Option<Unit> {
    classify_before(chars, end).filter(|u| matches!(u.class, Class::Vowel { .. }))
}

pub fn classify_mark_before(chars: &[char], end: usize) -> Option<Unit> {
    classify_before(chars, end).filter(|u| u.class == Class::Mark)
}

/// The four accent categories of Vedic recitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Udatta,
    Anudatta,
    Svarita,
    DirghaSvarita,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Udatta,
        Tone::Anudatta,
        Tone::Svarita,
        Tone::DirghaSvarita,
    ];

    /// The canonical combining mark for this tone.
    pub fn mark(self) -> char {
        match self {
            Tone::Udatta => '\u{0301}',
            Tone::Anudatta => '\u{0300}',
            Tone::Svarita => '\u{030D}',
            Tone::DirghaSvarita => '\u{030E}',
        }
    }

    /// Recognise a canonical or variant tone mark.
    pub fn of(c: char) -> Option<Tone> {
        TONE_MARKS
            .iter()
            .find(|(mark, _)| *mark == c)
            .map(|(_, tone)| *tone)
    }

    pub fn is_canonical_mark(c: char) -> bool {
        Tone::ALL.iter().any(|t| t.mark() == c)
    }
}

/// Canonical marks first, then the legacy encodings of each category.
const TONE_MARKS: &[(char, Tone)] = &[
    ('\u{0301}', Tone::Udatta),
    ('\u{0300}', Tone::Anudatta),
    ('\u{030D}', Tone::Svarita),
    ('\u{030E}', Tone::DirghaSvarita),
    // combining acute tone mark
    ('\u{0341}', Tone::Udatta),
    // combining grave tone mark, grave accent below, Devanagari stress sign anudatta
    ('\u{0340}', Tone::Anudatta),
    ('\u{0316}', Tone::Anudatta),
    ('\u{0952}', Tone::Anudatta),
    // Devanagari stress sign udatta, written as a vertical stroke in Rigveda texts
    ('\u{0951}', Tone::Svarita),
    ('\u{1CDA}', Tone::DirghaSvarita),
];

pub fn is_tone_mark(c: char) -> bool {
    Tone::of(c).is_some()
}

pub fn is_pause_glyph(c: char) -> bool {
    c == PAUSE_GLYPH
}

/// Tone marks and the pause glyph are skipped, never consumed as content.
pub fn is_transparent(c: char) -> bool {
    is_tone_mark(c) || is_pause_glyph(c)
}
