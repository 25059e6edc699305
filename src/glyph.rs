use core::{fmt, iter::FusedIterator, slice};

pub const GLYPH_WIDTH: usize = 8;
pub const GLYPH_HEIGHT: usize = 16;
/// The number of bytes each glyph takes up in the font resource.
pub const GLYPH_STRIDE: usize = GLYPH_HEIGHT * GLYPH_WIDTH.div_ceil(8);

// Rows are stored as single bytes, so anything wider would need a different row type.
const _: () = assert!(GLYPH_WIDTH == 8, "Glyph rows must be exactly one byte wide");
// The furthest glyph has to be addressable, otherwise the offset computation could wrap.
const _: () = assert!(
    (u8::MAX as usize).checked_mul(GLYPH_STRIDE).is_some(),
    "Glyph offsets must not overflow"
);

/// A read-only view of one glyph inside a font resource.
///
/// The view borrows the resource, so it can't outlive it (for the embedded font it is `'static`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph<'font> {
    bytes: &'font [u8; GLYPH_STRIDE],
}

impl<'font> Glyph<'font> {
    pub(crate) const fn new(bytes: &'font [u8; GLYPH_STRIDE]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'font [u8; GLYPH_STRIDE] {
        self.bytes
    }

    /// The address of the first row, for handing the glyph to code that only understands pointers.
    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    pub fn row(&self, y: usize) -> Option<GlyphRow> {
        self.bytes.get(y).copied().map(GlyphRow)
    }

    pub fn rows(&self) -> Rows<'font> {
        Rows {
            inner: self.bytes.iter(),
        }
    }

    /// Whether the pixel at (`x`, `y`) is set. Anything outside the glyph is unset.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.is_set(x))
    }

    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&row| row == 0)
    }
}

impl fmt::Debug for Glyph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glyph")
            .field("address", &self.as_ptr())
            .field("bytes", self.bytes)
            .finish()
    }
}

/// One row of a glyph. The most significant bit is the left-most pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphRow(u8);

impl GlyphRow {
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_set(self, x: usize) -> bool {
        x < GLYPH_WIDTH && (self.0 << x) & 0x80 != 0
    }

    /// The pixels of this row from left to right.
    pub fn pixels(self) -> impl ExactSizeIterator<Item = bool> {
        (0..GLYPH_WIDTH).map(move |x| self.is_set(x))
    }
}

#[derive(Debug, Clone)]
pub struct Rows<'font> {
    inner: slice::Iter<'font, u8>,
}

impl Iterator for Rows<'_> {
    type Item = GlyphRow;

    fn next(&mut self) -> Option<GlyphRow> {
        self.inner.next().copied().map(GlyphRow)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<GlyphRow> {
        self.inner.next_back().copied().map(GlyphRow)
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
