//! FFI layer: each sub-module exposes one area of the C API.
//!
//! Every string crossing the boundary is NUL-terminated UTF-8. Strings
//! returned to C are owned by Rust and must be released with
//! [`lipi_free_string`].

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

pub mod annotate;
pub mod config;
pub mod text;


pub use annotate::*;
pub use config::*;
pub use text::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand a Rust string to C. Null if the string holds an interior NUL.
pub(crate) fn into_cptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Validate one or more FFI string arguments and bind them as `&str`,
/// returning `$on_err` from the **calling** function if any check fails.
///
/// ```ignore
/// ffi_guard!(ptr::null_mut();
///     str: text = text_ptr,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn lipi_engine_version() -> *const c_char {
    crate::api::VERSION_NUL.as_ptr().cast()
}

/// Free a string returned by any `lipi_*` function. No-op on null.
#[no_mangle]
pub extern "C" fn lipi_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe { drop(CString::from_raw(s)) };
    }
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn lipi_init_tracing(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
