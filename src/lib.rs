//! Bounds-checked lookup of 8x16 bitmap glyphs.
//!
//! The font is a flat table of 16-byte glyphs, one per character code. [`get_font`] resolves a
//! code against the font embedded in this crate, [`FontResource`] lets you do the same against
//! any other table (which is mostly useful for tests and for fonts that are loaded at runtime).
#![cfg_attr(not(test), no_std)]

pub mod ascii;
pub mod error;
#[cfg(feature = "c-abi")]
pub mod ffi;
pub mod font;
pub mod glyph;

pub use ascii::{get_font_from, AsciiChar};
pub use error::{FontError, FontResult};
pub use font::{get_font, FontResource, HANKAKU};
pub use glyph::{Glyph, GlyphRow, GLYPH_HEIGHT, GLYPH_STRIDE, GLYPH_WIDTH};
