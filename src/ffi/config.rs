use std::ffi::c_char;

use lipi_core::settings::{init_custom, SettingsError};

use super::ffi_guard;

pub const LIPI_OK: i32 = 0;
pub const LIPI_ERR_ARG: i32 = -1;
pub const LIPI_ERR_INVALID: i32 = 1;
pub const LIPI_ERR_ALREADY_INITIALIZED: i32 = 2;

/// Install settings from TOML content. Call before the first conversion.
#[no_mangle]
pub extern "C" fn lipi_init_settings(toml: *const c_char) -> i32 {
    ffi_guard!(LIPI_ERR_ARG;
        str: toml_str = toml,
    );
    match init_custom(toml_str.to_string()) {
        Ok(()) => LIPI_OK,
        Err(SettingsError::AlreadyInitialized) => LIPI_ERR_ALREADY_INITIALIZED,
        Err(e) => {
            tracing::warn!("rejected settings: {e}");
            LIPI_ERR_INVALID
        }
    }
}
