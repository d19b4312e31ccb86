//! Host-facing layer: settings loading and JSON export of annotation spans.

use serde::Serialize;

use lipi_core::{find_all_holdings, find_all_pauses, normalize, AnnotationSpan, SpanKind};

#[derive(Debug, thiserror::Error)]
pub enum LipiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

/// Package version with a trailing NUL, shared with the C ABI.
pub(crate) const VERSION_NUL: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

pub fn engine_version() -> &'static str {
    &VERSION_NUL[..VERSION_NUL.len() - 1]
}

/// Load a settings TOML file. Must run before the first conversion.
pub fn settings_load_config(path: &str) -> Result<(), LipiError> {
    let content = std::fs::read_to_string(path).map_err(|e| LipiError::Io {
        msg: format!("{path}: {e}"),
    })?;
    lipi_core::settings::init_custom(content)
        .map_err(|e| LipiError::InvalidData { msg: e.to_string() })
}

pub fn settings_default_config() -> &'static str {
    lipi_core::settings::default_toml()
}

/// A pause is an insertion point: no length on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PausePoint {
    pub position: usize,
    pub kind: SpanKind,
}

impl From<&AnnotationSpan> for PausePoint {
    fn from(span: &AnnotationSpan) -> Self {
        Self {
            position: span.position,
            kind: span.kind,
        }
    }
}

/// Normalized text with both span lists; offsets index `text`.
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub text: String,
    pub holdings: Vec<AnnotationSpan>,
    pub pauses: Vec<PausePoint>,
}

pub fn annotate(text: &str) -> Annotation {
    let text = normalize(text);
    let holdings = find_all_holdings(&text);
    let pauses = find_all_pauses(&text).iter().map(PausePoint::from).collect();
    Annotation {
        text,
        holdings,
        pauses,
    }
}

/// `[{"position":..,"length":..,"kind":..}, ...]` for already normalized text.
pub fn holdings_json(text: &str) -> Result<String, LipiError> {
    to_json(&find_all_holdings(text))
}

/// `[{"position":..,"kind":..}, ...]` for already normalized text.
pub fn pauses_json(text: &str) -> Result<String, LipiError> {
    let points: Vec<PausePoint> = find_all_pauses(text).iter().map(PausePoint::from).collect();
    to_json(&points)
}

/// Normalize, then locate holdings and pauses in one call.
pub fn annotate_json(text: &str) -> Result<String, LipiError> {
    to_json(&annotate(text))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, LipiError> {
    serde_json::to_string(value).map_err(|e| LipiError::InvalidData { msg: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holdings_serialize_with_length() {
        let json = holdings_json("ātmā").unwrap();
        assert_eq!(json, r#"[{"position":1,"length":1,"kind":"long"}]"#);
    }

    #[test]
    fn pauses_serialize_without_length() {
        let json = pauses_json("oṁ namaḥ").unwrap();
        assert_eq!(json, r#"[{"position":3,"kind":"short"}]"#);
    }

    #[test]
    fn annotate_normalizes_first() {
        let a = annotate("a\u{0304}tma\u{0304} iti");
        assert_eq!(a.text, "ātmā iti");
        assert_eq!(a.holdings, vec![AnnotationSpan::holding(1, 1, SpanKind::Long)]);
        assert_eq!(
            a.pauses,
            vec![PausePoint {
                position: 5,
                kind: SpanKind::Long
            }]
        );
    }

    #[test]
    fn annotate_json_shape() {
        let json = annotate_json("tat tvam").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "tat tvam");
        assert_eq!(value["holdings"][0]["position"], 2);
        assert_eq!(value["holdings"][0]["kind"], "short");
        assert_eq!(value["pauses"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn missing_settings_file_is_io_error() {
        let err = settings_load_config("/nonexistent/lipi/settings.toml").unwrap_err();
        assert!(matches!(err, LipiError::Io { .. }));
    }

    #[test]
    fn default_config_is_embedded_toml() {
        assert!(settings_default_config().contains("[script]"));
        assert!(!engine_version().is_empty());
    }
}
