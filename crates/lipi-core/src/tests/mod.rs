
use proptest::prelude::*;

pub(super) const CONSONANTS_NO_H: &[&str] = &[
    "k", "kh", "g", "gh", "ṅ", "c", "ch", "j", "jh", "ñ", "ṭ", "ṭh", "ḍ", "ḍh", "ṇ", "t", "th", "d",
    "dh", "n", "p", "ph", "b", "bh", "m", "y", "r", "l", "ḻ", "v", "ś", "ṣ", "s",
];

pub(super) const VOWELS: &[&str] = &[
    "a", "ā", "i", "ī", "u", "ū", "ṛ", "ṝ", "ḷ", "ḹ", "e", "ai", "o", "au",
];

pub(super) const DEVANAGARI_CONSONANTS: &[char] = &[
    'क', 'ख', 'ग', 'घ', 'ङ', 'च', 'छ', 'ज', 'झ', 'ञ', 'ट', 'ठ', 'ड', 'ढ', 'ण', 'त', 'थ', 'द', 'ध',
    'न', 'प', 'फ', 'ब', 'भ', 'म', 'य', 'र', 'ल', 'ळ', 'व', 'श', 'ष', 'स', 'ह',
];

pub(super) const VIRAMA: char = '\u{094D}';

pub(super) fn arb_consonant() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CONSONANTS_NO_H)
}

pub(super) fn arb_vowel() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOWELS)
}

/// Tone marks in canonical and variant encodings, plus the pause glyph.
pub(super) fn arb_transparent() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '\u{0301}', '\u{0300}', '\u{030D}', '\u{030E}', '\u{0951}', '\u{0952}', '\u{1CDA}', '|',
    ])
}

/// Any IAST unit the converter knows, plus separators.
pub(super) fn arb_iast_token() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        4 => prop::sample::select(vec![
            "k", "kh", "g", "gh", "ṅ", "c", "ch", "j", "jh", "ñ", "ṭ", "ṭh", "ḍ", "ḍh", "ṇ", "t",
            "th", "d", "dh", "n", "p", "ph", "b", "bh", "m", "y", "r", "l", "ḻ", "v", "ś", "ṣ",
            "s", "h",
        ]),
        4 => prop::sample::select(vec![
            "a", "ā", "i", "ī", "u", "ū", "ṛ", "ṝ", "ḷ", "ḹ", "e", "ai", "o", "au", "ï", "ü",
        ]),
        1 => prop::sample::select(vec!["ṁ", "ḥ", "m\u{0310}", "oṁ", "'"]),
        1 => prop::sample::select(vec![" ", " ", "/", "0", "1", "9"]),
    ]
}

/// Devanagari syllable: conjunct onset, vowel sign or inherent vowel, optional
/// coda. A virama is never followed by `ह`, whose IAST would fuse into an
/// aspirate.
fn arb_syllable() -> impl Strategy<Value = String> {
    let onset_head = prop::sample::select(DEVANAGARI_CONSONANTS);
    let onset_tail = prop::collection::vec(
        prop::sample::select(&DEVANAGARI_CONSONANTS[..DEVANAGARI_CONSONANTS.len() - 1]),
        0..3,
    );
    let sign = prop::option::of(prop::sample::select(vec![
        'ा', 'ि', 'ी', 'ु', 'ू', 'ृ', 'ॄ', 'ॢ', 'ॣ', 'े', 'ै', 'ो', 'ौ',
    ]));
    let coda = prop::option::of(prop::sample::select(vec!['ं', 'ः', 'ँ']));
    (onset_head, onset_tail, sign, coda).prop_map(|(head, tail, sign, coda)| {
        let mut s = String::from(head);
        for c in tail {
            s.push(VIRAMA);
            s.push(c);
        }
        s.extend(sign);
        s.extend(coda);
        s
    })
}

/// Independent vowel. `ओ` never takes a coda: `ओं` and `ॐ` share an IAST
/// spelling.
fn arb_independent_vowel() -> impl Strategy<Value = String> {
    let vowel = prop::sample::select(vec![
        'अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ऋ', 'ॠ', 'ऌ', 'ॡ', 'ए', 'ऐ', 'ओ', 'औ',
    ]);
    let coda = prop::option::of(prop::sample::select(vec!['ं', 'ः']));
    (vowel, coda).prop_map(|(v, coda)| {
        let mut s = String::from(v);
        if v != 'ओ' {
            s.extend(coda);
        }
        s
    })
}

fn arb_devanagari_word() -> impl Strategy<Value = String> {
    let part = prop_oneof![4 => arb_syllable(), 1 => arb_independent_vowel()];
    let final_consonant = prop::option::of(prop::sample::select(DEVANAGARI_CONSONANTS));
    (prop::collection::vec(part, 1..5), final_consonant).prop_map(|(parts, last)| {
        let mut s: String = parts.concat();
        if let Some(c) = last {
            s.push(c);
            s.push(VIRAMA);
        }
        s
    })
}

/// Devanagari text of words separated by spaces, dandas and digits.
pub(super) fn arb_devanagari_text() -> impl Strategy<Value = String> {
    let sep = prop::sample::select(vec![" ", " ", " ", " । ", " ॥ ", " ऽ", " १२ "]);
    prop::collection::vec((arb_devanagari_word(), sep), 1..6).prop_map(|words| {
        let mut s = String::new();
        for (word, sep) in words {
            s.push_str(&word);
            s.push_str(sep);
        }
        s.trim_end().to_string()
    })
}
