//! The glyph lookup for callers on the other side of a C ABI.

use core::{ffi::c_char, ptr};

use crate::font::HANKAKU;

/// Returns the 16 rows of the glyph for `c`, or null if the embedded font doesn't have one.
///
/// The rows are read-only and live for as long as the program does. `c` is treated as an unsigned
/// byte regardless of whether `c_char` is signed on the target.
#[no_mangle]
pub extern "C" fn get_font(c: c_char) -> *const u8 {
    HANKAKU
        .resolve_glyph(c as u8)
        .map_or(ptr::null(), |glyph| glyph.as_ptr())
}
