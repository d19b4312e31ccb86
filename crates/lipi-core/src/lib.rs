pub mod classify;
pub mod holding;
pub mod normalize;
pub mod pause;
pub mod script;
pub mod settings;
pub mod span;
pub(crate) mod unit;

#[cfg(test)]
mod tests;

pub use holding::find_all_holdings;
pub use normalize::normalize;
pub use pause::find_all_pauses;
pub use script::{to_devanagari, to_iast};
pub use span::{AnnotationSpan, SpanKind};
