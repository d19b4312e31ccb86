use std::ffi::c_char;
use std::ptr;

use super::{ffi_guard, into_cptr};

// --- Text FFI ---

#[no_mangle]
pub extern "C" fn lipi_normalize(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    into_cptr(lipi_core::normalize(text_str))
}

#[no_mangle]
pub extern "C" fn lipi_to_iast(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    into_cptr(lipi_core::to_iast(text_str))
}

#[no_mangle]
pub extern "C" fn lipi_to_devanagari(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    into_cptr(lipi_core::to_devanagari(text_str))
}
