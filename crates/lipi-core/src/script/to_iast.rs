use tracing::{debug, debug_span};

use crate::settings::{settings, ScriptSettings};

use super::table::{
    consonant_iast, hiatus_spelling, independent_vowel_iast, symbol_iast, vowel_sign_iast, OM,
    OM_IAST, VIRAMA,
};

/// Transliterate Devanagari to IAST using the global settings.
pub fn to_iast(text: &str) -> String {
    to_iast_with(text, &settings().script)
}

/// Transliterate Devanagari to IAST.
///
/// A consonant takes the vowel sign after it, loses its vowel before a
/// virama, and otherwise carries the inherent `a`. Codepoints outside the
/// tables pass through unchanged.
pub fn to_iast_with(text: &str, opts: &ScriptSettings) -> String {
    let _span = debug_span!("to_iast", bytes = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    // The last emitted unit is a short "a", inherent or written.
    let mut after_a = false;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;

        if let Some(consonant) = consonant_iast(c) {
            out.push_str(consonant);
            after_a = false;
            match chars.get(i) {
                // Bare consonant; a following consonant continues the conjunct.
                Some(&VIRAMA) => i += 1,
                Some(&next) => match vowel_sign_iast(next) {
                    Some(vowel) => {
                        out.push_str(vowel);
                        i += 1;
                    }
                    None => {
                        out.push('a');
                        after_a = true;
                    }
                },
                None => {
                    if !opts.bare_final_consonant {
                        out.push('a');
                        after_a = true;
                    }
                }
            }
            continue;
        }

        if c == OM {
            out.push_str(OM_IAST);
            after_a = false;
        } else if let Some(vowel) = independent_vowel_iast(c) {
            let spelled = match hiatus_spelling(c) {
                Some(h) if after_a && opts.hiatus_diaeresis => h,
                _ => vowel,
            };
            out.push_str(spelled);
            after_a = vowel == "a";
        } else if let Some(symbol) = symbol_iast(c) {
            out.push_str(symbol);
            after_a = false;
        } else {
            out.push(c);
            after_a = false;
        }
    }

    debug!(chars_in = chars.len(), bytes_out = out.len());
    out
}
