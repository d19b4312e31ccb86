//! Annotation spans returned to the host.
//!
//! Positions and lengths are codepoint offsets into the exact (normalized)
//! string that was analyzed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Short,
    Long,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Short => "short",
            SpanKind::Long => "long",
        }
    }
}

/// A holding covers the consonant it is placed on; a pause is a zero-length
/// insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSpan {
    pub position: usize,
    pub length: usize,
    pub kind: SpanKind,
}

impl AnnotationSpan {
    pub fn holding(position: usize, length: usize, kind: SpanKind) -> Self {
        Self {
            position,
            length,
            kind,
        }
    }

    pub fn pause(position: usize, kind: SpanKind) -> Self {
        Self {
            position,
            length: 0,
            kind,
        }
    }

    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

/// Order spans for a caller that edits the text while applying them: highest
/// offset first, so earlier edits never shift the offsets of later ones.
pub fn sort_for_application(spans: &mut [AnnotationSpan]) {
    spans.sort_by(|a, b| b.position.cmp(&a.position).then(b.length.cmp(&a.length)));
}
