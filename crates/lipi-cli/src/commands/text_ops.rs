use lipi_engine::{normalize, to_devanagari, to_iast};

pub fn normalize_cmd(text: &str) {
    println!("{}", normalize(text));
}

pub fn to_iast_cmd(text: &str) {
    println!("{}", to_iast(text));
}

/// Latin input is normalized first so decomposed or legacy spellings convert.
pub fn to_devanagari_cmd(text: &str) {
    println!("{}", devanagari_of(text));
}

pub fn devanagari_of(text: &str) -> String {
    to_devanagari(&normalize(text))
}
