//! Devanagari ⇄ IAST transliteration.

mod table;
mod to_devanagari;
mod to_iast;

pub use to_devanagari::to_devanagari;
pub use to_iast::{to_iast, to_iast_with};
