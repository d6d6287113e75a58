//! Contract between the launcher and greeting modules.
//!
//! A module exports one static named `Greeter` holding a [`GreeterDecl`].
//! The declaration is `#[repr(C)]` and carries an ABI version, so a module
//! built against an incompatible layout is refused instead of misread.
//! Modules should declare it with [`export_greeter!`](crate::export_greeter).

pub mod loader;

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::errors::{Error, Result};

pub use loader::{DylibLoader, LoadedModule, ModuleLoader};

/// Bumped whenever [`GreeterDecl`] changes shape.
pub const ABI_VERSION: u32 = 1;

pub const GREETER_SYMBOL_NAME: &str = "Greeter";
pub const GREETER_SYMBOL: &[u8] = b"Greeter\0";

#[repr(C)]
pub struct GreeterDecl {
    pub abi_version: u32,
    /// Returns a NUL-terminated UTF-8 string that lives as long as the module.
    pub greeting: extern "C" fn() -> *const c_char,
}

impl GreeterDecl {
    /// Version check, then copies the greeting out of module memory.
    pub fn read_greeting(&self) -> Result<String> {
        if self.abi_version != ABI_VERSION {
            return Err(Error::AbiMismatch {
                expected: ABI_VERSION,
                found: self.abi_version,
            });
        }
        let ptr = (self.greeting)();
        if ptr.is_null() {
            return Err(Error::invalid_greeting("module returned a null string"));
        }
        // SAFETY: non-null, and the ABI requires a NUL-terminated string owned by the module.
        let raw = unsafe { CStr::from_ptr(ptr) };
        raw.to_str()
            .map(str::to_owned)
            .map_err(|e| Error::invalid_greeting(format!("not UTF-8 ({e})")))
    }
}

/// `true` when `s` contains a NUL byte, which would end the C string early.
pub const fn has_interior_nul(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0 {
            return true;
        }
        i += 1;
    }
    false
}

/// Exports the `Greeter` declaration from a `cdylib` crate.
///
/// The greeting must be a string literal without NUL bytes; anything else
/// fails to compile.
///
/// ```ignore
/// greeter::export_greeter!("Hello Universe");
/// ```
#[macro_export]
macro_rules! export_greeter {
    ($greeting:literal) => {
        const _: () = assert!(
            !$crate::plugin::has_interior_nul($greeting),
            "greeting must not contain NUL bytes"
        );

        #[unsafe(no_mangle)]
        #[allow(non_upper_case_globals)]
        pub static Greeter: $crate::plugin::GreeterDecl = $crate::plugin::GreeterDecl {
            abi_version: $crate::plugin::ABI_VERSION,
            greeting: {
                extern "C" fn greeting() -> *const ::std::os::raw::c_char {
                    concat!($greeting, "\0").as_ptr().cast()
                }
                greeting
            },
        };
    };
}
