//! Canonical form for IAST and Devanagari text.
//!
//! Text is split into clusters: a base character and its run of combining
//! marks. A cluster that carries a tone mark, an IAST letter diacritic or a
//! variant spelling is decomposed (NFD), its marks canonicalized (tone
//! variants, letter variants, canonical order) and the IAST letters
//! recomposed. Every other cluster is copied through untouched. Tone marks
//! stay separate combining codepoints: `é` becomes `e` + U+0301, never the
//! precomposed Latin letter.
//!
//! `normalize(normalize(t)) == normalize(t)` for every `t`.

use tracing::{debug, debug_span};
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

use crate::classify::Tone;
use crate::settings::{settings, NormalizeSettings};

struct Composition {
    base: char,
    /// Diacritics in canonical order.
    marks: &'static [char],
    letter: char,
}

const fn comp(base: char, marks: &'static [char], letter: char) -> Composition {
    Composition {
        base,
        marks,
        letter,
    }
}

/// Two-mark letters come first so they win over their one-mark prefixes.
const COMPOSITIONS: &[Composition] = &[
    comp('r', &['\u{0323}', '\u{0304}'], 'ṝ'),
    comp('l', &['\u{0323}', '\u{0304}'], 'ḹ'),
    comp('a', &['\u{0304}'], 'ā'),
    comp('i', &['\u{0304}'], 'ī'),
    comp('u', &['\u{0304}'], 'ū'),
    comp('i', &['\u{0308}'], 'ï'),
    comp('u', &['\u{0308}'], 'ü'),
    comp('r', &['\u{0323}'], 'ṛ'),
    comp('l', &['\u{0323}'], 'ḷ'),
    comp('l', &['\u{0331}'], 'ḻ'),
    comp('n', &['\u{0307}'], 'ṅ'),
    comp('n', &['\u{0303}'], 'ñ'),
    comp('n', &['\u{0323}'], 'ṇ'),
    comp('t', &['\u{0323}'], 'ṭ'),
    comp('d', &['\u{0323}'], 'ḍ'),
    comp('s', &['\u{0301}'], 'ś'),
    comp('s', &['\u{0323}'], 'ṣ'),
    comp('m', &['\u{0307}'], 'ṁ'),
    comp('h', &['\u{0323}'], 'ḥ'),
];

/// Legacy spellings of anusvāra, collapsed to `ṁ`. Keys are in normalized form.
const NASAL_IDIOMS: &[&str] = &["(ṁ)", "(m\u{0310})", "(m)\u{0310}", "(n)\u{0310}"];

const CANONICAL_NASAL: char = 'ṁ';

pub fn normalize(text: &str) -> String {
    normalize_with(text, &settings().normalize)
}

pub fn normalize_with(text: &str, opts: &NormalizeSettings) -> String {
    let _span = debug_span!("normalize", bytes = text.len()).entered();

    let mut out = canonicalize(text, opts);
    // A collapsed idiom can leave its marks on a new base letter; canonicalize
    // again until nothing collapses.
    while let Some(collapsed) = collapse_nasal_idioms(&out) {
        out = canonicalize(&collapsed, opts);
    }

    debug!(bytes_out = out.len());
    out
}

fn canonicalize(text: &str, opts: &NormalizeSettings) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let mut end = i + 1;
        while end < chars.len() && canonical_combining_class(chars[end]) != 0 {
            end += 1;
        }
        let cluster = &chars[i..end];
        let decomposed: Vec<char> = cluster.iter().copied().nfd().collect();
        let has_base = canonical_combining_class(decomposed[0]) == 0;
        let base = has_base.then_some(decomposed[0]);
        let marks = if has_base { &decomposed[1..] } else { &decomposed[..] };
        // A starter that decomposes into bare marks would re-attach to the
        // previous cluster; past the start of the text it keeps its spelling
        // and only its tones are mapped.
        if !has_base && i > 0 {
            out.extend(cluster.iter().map(|&c| canonical_tone(c, opts)));
        } else if marks.iter().any(|&m| is_significant(base, m, opts)) {
            recompose(base, marks, opts, &mut out);
        } else {
            out.extend(cluster);
        }
        i = end;
    }
    out
}

/// Marks the normalizer rewrites: tones, IAST letter diacritics on their base
/// letter, and letter variants.
fn is_significant(base: Option<char>, mark: char, opts: &NormalizeSettings) -> bool {
    if Tone::of(mark).is_some() || opts.tone_variant(mark).is_some() {
        return true;
    }
    let Some(base) = base else {
        return false;
    };
    fold_letter_variant(base, mark) != Some(mark)
        || COMPOSITIONS
            .iter()
            .any(|c| c.base == base && c.marks.contains(&mark))
}

fn recompose(base: Option<char>, marks: &[char], opts: &NormalizeSettings, out: &mut String) {
    let mut marks: Vec<char> = marks
        .iter()
        .map(|&m| canonical_tone(m, opts))
        .filter_map(|m| match base {
            Some(b) => fold_letter_variant(b, m),
            None => Some(m),
        })
        .collect();
    marks.sort_by_key(|&m| canonical_combining_class(m));

    let Some(base) = base else {
        out.extend(marks);
        return;
    };
    match COMPOSITIONS
        .iter()
        .find(|c| c.base == base && is_subsequence(c.marks, &marks))
    {
        Some(c) => {
            out.push(c.letter);
            remove_subsequence(&mut marks, c.marks);
        }
        None => out.push(base),
    }
    out.extend(marks);
}

/// Marks that spell part of an IAST letter rather than a tone.
pub(crate) fn is_letter_diacritic(mark: char) -> bool {
    mark == '\u{0325}' || COMPOSITIONS.iter().any(|c| c.marks.contains(&mark))
}

fn canonical_tone(mark: char, opts: &NormalizeSettings) -> char {
    if let Some(tone) = opts.tone_variant(mark) {
        return tone.mark();
    }
    Tone::of(mark).map_or(mark, Tone::mark)
}

/// Map alternate letter diacritics onto the canonical one; `None` drops the mark.
fn fold_letter_variant(base: char, mark: char) -> Option<char> {
    match (base, mark) {
        // ṃ (dot below) is the older anusvāra spelling
        ('m', '\u{0323}') => Some('\u{0307}'),
        // ISO 15919 r̥ l̥
        ('r' | 'l', '\u{0325}') => Some('\u{0323}'),
        // ē ō: e and o are always long
        ('e' | 'o', '\u{0304}') => None,
        _ => Some(mark),
    }
}

fn is_subsequence(needle: &[char], hay: &[char]) -> bool {
    let mut it = hay.iter();
    needle.iter().all(|n| it.any(|h| h == n))
}

fn remove_subsequence(marks: &mut Vec<char>, needle: &[char]) {
    let mut from = 0;
    for n in needle {
        if let Some(offset) = marks[from..].iter().position(|m| m == n) {
            marks.remove(from + offset);
            from += offset;
        }
    }
}

/// Collapse idioms in one left-to-right pass; a collapse can complete an
/// enclosing idiom, so `((ṁ))` becomes `ṁ`. `None` when the text holds none.
fn collapse_nasal_idioms(text: &str) -> Option<String> {
    let idioms: Vec<Vec<char>> = NASAL_IDIOMS.iter().map(|s| s.chars().collect()).collect();
    let mut out: Vec<char> = Vec::with_capacity(text.len());
    let mut collapsed = false;
    for c in text.chars() {
        out.push(c);
        if let Some(idiom) = idioms.iter().find(|idiom| out.ends_with(idiom.as_slice())) {
            out.truncate(out.len() - idiom.len());
            out.push(CANONICAL_NASAL);
            collapsed = true;
        }
    }
    collapsed.then(|| out.into_iter().collect())
}
