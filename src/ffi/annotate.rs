use std::ffi::c_char;
use std::ptr;

use super::{ffi_guard, into_cptr};
use crate::api::{annotate_json, holdings_json, pauses_json, LipiError};

// --- Annotation FFI (JSON out) ---

fn json_out(result: Result<String, LipiError>) -> *mut c_char {
    match result {
        Ok(json) => into_cptr(json),
        Err(e) => {
            tracing::warn!("annotation export failed: {e}");
            ptr::null_mut()
        }
    }
}

/// Holdings in already normalized text, as a JSON array.
#[no_mangle]
pub extern "C" fn lipi_holdings_json(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    json_out(holdings_json(text_str))
}

/// Pauses in already normalized text, as a JSON array.
#[no_mangle]
pub extern "C" fn lipi_pauses_json(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    json_out(pauses_json(text_str))
}

/// `{"text":..,"holdings":[..],"pauses":[..]}` where `text` is the
/// normalized input the offsets refer to.
#[no_mangle]
pub extern "C" fn lipi_annotate_json(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    json_out(annotate_json(text_str))
}
