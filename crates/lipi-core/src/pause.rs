//! Pause locator: insertion points at sandhi vowel boundaries and after a
//! leading "oṁ".

use tracing::{debug, debug_span};

use crate::classify::{
    classify_before, classify_vowel, classify_vowel_before, is_tone_mark, Class, Unit,
};
use crate::settings::{settings, PauseSettings};
use crate::span::{AnnotationSpan, SpanKind};

const OM: [char; 2] = ['o', 'ṁ'];

/// Locate pauses using the global settings.
pub fn find_all_pauses(text: &str) -> Vec<AnnotationSpan> {
    find_all_pauses_with(text, &settings().pause)
}

/// Locate pauses in normalized IAST. Every span has length 0 and sits right
/// after the whitespace it belongs to.
pub fn find_all_pauses_with(text: &str, opts: &PauseSettings) -> Vec<AnnotationSpan> {
    let _span = debug_span!("find_all_pauses", bytes = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    for (w, c) in chars.iter().enumerate() {
        if !c.is_whitespace() {
            continue;
        }
        let at = w + 1;
        if opts.om && is_om_before(&chars, w) {
            spans.push(AnnotationSpan::pause(at, SpanKind::Short));
            continue;
        }
        let Some(first) = deciding_vowel(&chars, skip_tones_back(&chars, w)) else {
            continue;
        };
        let Some(second) = classify_vowel(&chars, skip_tones(&chars, at)) else {
            continue;
        };
        let kind = if first.is_long_vowel() && !second.is_long_vowel() {
            SpanKind::Long
        } else {
            SpanKind::Short
        };
        spans.push(AnnotationSpan::pause(at, kind));
    }

    debug!(pause_count = spans.len());
    spans
}

fn skip_tones(chars: &[char], mut pos: usize) -> usize {
    while chars.get(pos).is_some_and(|&c| is_tone_mark(c)) {
        pos += 1;
    }
    pos
}

fn skip_tones_back(chars: &[char], mut end: usize) -> usize {
    while end > 0 && is_tone_mark(chars[end - 1]) {
        end -= 1;
    }
    end
}

/// The vowel that sets the pause length: the last vowel of the word ending at
/// `end`, passing over a word-final inherent `a` to the vowel before it.
/// `rāma` is decided by `ā`, `nara` by its first `a`.
fn deciding_vowel(chars: &[char], end: usize) -> Option<Unit> {
    let last = classify_vowel_before(chars, end)?;
    if last.text != "a" {
        return Some(last);
    }
    let mut pos = skip_tones_back(chars, end - last.width);
    let after_consonant = classify_before(chars, pos)
        .is_some_and(|u| matches!(u.class, Class::Consonant { .. }));
    if !after_consonant {
        return Some(last);
    }
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        if let Some(vowel) = classify_vowel_before(chars, pos) {
            return Some(vowel);
        }
        pos -= 1;
    }
    Some(last)
}

/// `oṁ` standing as a whole word right before `end`, tone marks allowed.
fn is_om_before(chars: &[char], end: usize) -> bool {
    let mut end = end;
    for &expected in OM.iter().rev() {
        end = skip_tones_back(chars, end);
        if end == 0 || chars[end - 1] != expected {
            return false;
        }
        end -= 1;
    }
    end == 0 || chars[end - 1].is_whitespace()
}
