// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod api;
pub mod ffi;
mod trace_init;

pub use lipi_core::classify::Tone;
pub use lipi_core::script::to_iast_with;
pub use lipi_core::settings;
pub use lipi_core::span::{sort_for_application, AnnotationSpan, SpanKind};
pub use lipi_core::{find_all_holdings, find_all_pauses, normalize, to_devanagari, to_iast};

pub use api::{
    annotate, annotate_json, engine_version, holdings_json, pauses_json, settings_default_config,
    settings_load_config, Annotation, LipiError, PausePoint,
};
pub use ffi::*;
pub use trace_init::init_tracing;
