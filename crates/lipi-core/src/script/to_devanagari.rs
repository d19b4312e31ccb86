use tracing::{debug, debug_span};

use super::table::{iast_lexicon, iast_vowel_signs, Iast, OM, VIRAMA};

/// Transliterate IAST to Devanagari, longest unit first at every position.
///
/// Input is expected in normalized form (precomposed IAST letters); codepoints
/// outside the tables pass through unchanged.
pub fn to_devanagari(text: &str) -> String {
    let _span = debug_span!("to_devanagari", bytes = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    let lexicon = iast_lexicon();
    let mut out = String::with_capacity(text.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let Some((unit, width)) = lexicon.match_at(&chars, i) else {
            out.push(chars[i]);
            i += 1;
            continue;
        };
        i += width;
        match unit {
            Iast::Om => out.push(OM),
            Iast::Vowel(independent) => out.push(independent),
            Iast::Symbol(glyph) => out.push(glyph),
            Iast::Consonant(glyph) => {
                out.push(glyph);
                i = close_consonant(&chars, i, &mut out);
            }
        }
    }

    debug!(chars_in = chars.len(), bytes_out = out.len());
    out
}

/// Finish the syllable of a consonant ending at `i`; returns the new position.
fn close_consonant(chars: &[char], i: usize, out: &mut String) -> usize {
    if let Some((sign, width)) = iast_vowel_signs().match_at(chars, i) {
        // `None` is the inherent a: consumed, nothing written.
        if let Some(sign) = sign {
            out.push(sign);
        }
        return i + width;
    }
    let conjunct = matches!(
        iast_lexicon().match_at(chars, i),
        Some((Iast::Consonant(_), _))
    );
    if conjunct || is_word_boundary(chars.get(i).copied()) {
        out.push(VIRAMA);
    }
    i
}

fn is_word_boundary(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => {
            c.is_whitespace()
                || c.is_ascii_punctuation()
                || c.is_ascii_digit()
                || matches!(c, '।' | '॥' | '०'..='९')
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherent_a_is_silent() {
        assert_eq!(to_devanagari("rāma"), "राम");
        assert_eq!(to_devanagari("kha"), "ख");
        assert_eq!(to_devanagari("bhavati"), "भवति");
    }

    #[test]
    fn conjuncts_get_virama() {
        assert_eq!(to_devanagari("kṛṣṇa"), "कृष्ण");
        assert_eq!(to_devanagari("strī"), "स्त्री");
        assert_eq!(to_devanagari("dharmakṣetre"), "धर्मक्षेत्रे");
    }

    #[test]
    fn word_final_consonant_gets_virama() {
        assert_eq!(to_devanagari("tat"), "तत्");
        assert_eq!(to_devanagari("tat tvam asi"), "तत् त्वम् असि");
        assert_eq!(to_devanagari("vāk/"), "वाक्।");
        assert_eq!(to_devanagari("tat|"), "तत्|");
    }

    #[test]
    fn diphthongs_before_short_vowels() {
        assert_eq!(to_devanagari("kai"), "कै");
        assert_eq!(to_devanagari("kau"), "कौ");
        assert_eq!(to_devanagari("ai"), "ऐ");
        assert_eq!(to_devanagari("kaï"), "कइ");
        assert_eq!(to_devanagari("aü"), "अउ");
    }

    #[test]
    fn om_is_atomic() {
        assert_eq!(to_devanagari("oṁ namaḥ śivāya"), "ॐ नमः शिवाय");
        assert_eq!(to_devanagari("koṁ"), "कों");
    }

    #[test]
    fn symbols_and_digits() {
        assert_eq!(to_devanagari("rāmaḥ//"), "रामः॥");
        assert_eq!(to_devanagari("te 'pi"), "ते ऽपि");
        assert_eq!(to_devanagari("ham\u{0310}sa"), "हँस");
        assert_eq!(to_devanagari("108"), "१०८");
    }

    #[test]
    fn unknown_codepoints_pass_through() {
        assert_eq!(to_devanagari("qfwx"), "qfwx");
        assert_eq!(to_devanagari("Rāma"), "Rआम");
        assert_eq!(to_devanagari(""), "");
    }
}
