//! The glyph table itself.
//!
//! A font resource is nothing more than the glyphs of every character code laid out one after the
//! other, so the glyph for a code lives at `code * GLYPH_STRIDE`. There is no header and nothing to
//! parse, the only thing we check is that the glyph actually fits inside the resource.

use core::iter::FusedIterator;

use log::{debug, warn};

use crate::{
    error::{FontError, FontResult},
    glyph::{Glyph, GLYPH_STRIDE},
};

/// The font embedded in this crate (see `build.rs` for how it gets here).
pub static HANKAKU: FontResource<'static> =
    FontResource::new(include_bytes!(concat!(env!("OUT_DIR"), "/hankaku.bin")));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontResource<'font> {
    data: &'font [u8],
}

impl<'font> FontResource<'font> {
    pub const fn new(data: &'font [u8]) -> Self {
        Self { data }
    }

    /// Like [`FontResource::new`], but reports what the resource looks like.
    ///
    /// Meant for fonts that don't come from the build, where a truncated file is a real
    /// possibility.
    pub fn from_bytes(data: &'font [u8]) -> Self {
        let font = Self::new(data);
        debug!(
            "Font resource at {:p}: {} bytes, {} glyphs",
            font.as_ptr(),
            font.size(),
            font.glyph_count()
        );
        let trailing_bytes = font.size() % GLYPH_STRIDE;
        if trailing_bytes != 0 {
            warn!(
                "Font resource size {} is not a multiple of {}, the last {} bytes are unreachable",
                font.size(),
                GLYPH_STRIDE,
                trailing_bytes
            );
        }
        font
    }

    pub const fn size(&self) -> usize {
        self.data.len()
    }

    pub const fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    pub const fn as_bytes(&self) -> &'font [u8] {
        self.data
    }

    /// The number of complete glyphs in the resource.
    pub const fn glyph_count(&self) -> usize {
        self.size() / GLYPH_STRIDE
    }

    /// Whether every possible character code has a glyph.
    pub const fn is_complete(&self) -> bool {
        self.glyph_count() > u8::MAX as usize
    }

    /// Finds the glyph for `code`, or [`None`] if it isn't inside the resource.
    pub fn resolve_glyph(&self, code: u8) -> Option<Glyph<'font>> {
        // At most 255 * 16, so this can't overflow even on 16-bit targets.
        let offset = usize::from(code) * GLYPH_STRIDE;
        if offset >= self.size() {
            return None;
        }
        // A resource that stops halfway through the glyph doesn't have it either, the view must
        // never go past the end.
        let bytes = self.data.get(offset..offset + GLYPH_STRIDE)?;
        bytes.try_into().ok().map(Glyph::new)
    }

    pub fn try_resolve_glyph(&self, code: u8) -> FontResult<Glyph<'font>> {
        self.resolve_glyph(code).ok_or(FontError::GlyphNotFound {
            code,
            size: self.size(),
        })
    }

    /// Resolves an ASCII character. Anything else has no glyph in this kind of font.
    pub fn glyph_for(&self, character: char) -> Option<Glyph<'font>> {
        if !character.is_ascii() {
            return None;
        }
        self.resolve_glyph(character as u8)
    }

    /// Every glyph in the resource together with its code, in ascending order.
    pub fn glyphs(&self) -> Glyphs<'font> {
        Glyphs {
            font: *self,
            next_code: 0,
        }
    }
}

impl Default for FontResource<'static> {
    fn default() -> Self {
        HANKAKU
    }
}

#[derive(Debug, Clone)]
pub struct Glyphs<'font> {
    font: FontResource<'font>,
    // u16 so that we can step past 255 without wrapping around to 0 again.
    next_code: u16,
}

impl<'font> Iterator for Glyphs<'font> {
    type Item = (u8, Glyph<'font>);

    fn next(&mut self) -> Option<Self::Item> {
        let code = u8::try_from(self.next_code).ok()?;
        let glyph = self.font.resolve_glyph(code)?;
        self.next_code += 1;
        Some((code, glyph))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            usize::min(self.font.glyph_count(), 256).saturating_sub(self.next_code.into());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Glyphs<'_> {}

impl FusedIterator for Glyphs<'_> {}

/// Looks up `code` in the embedded font.
pub fn get_font(code: u8) -> Option<Glyph<'static>> {
    HANKAKU.resolve_glyph(code)
}
