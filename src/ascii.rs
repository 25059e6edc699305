use crate::{
    error::FontError,
    font::{FontResource, HANKAKU},
    glyph::{Glyph, GlyphRow},
};

/// A character that is known to be ASCII, and so has a slot in the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct AsciiChar(char);

impl AsciiChar {
    pub const fn new(character: char) -> Option<Self> {
        if character.is_ascii() {
            Some(Self(character))
        } else {
            None
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        Self::new(code as char)
    }

    pub const fn char(&self) -> char {
        self.0
    }

    pub const fn code(&self) -> u8 {
        // Can't truncate, we only ever hold ASCII.
        self.0 as u8
    }

    /// The glyph for this character in the embedded font.
    pub fn glyph(&self) -> Option<Glyph<'static>> {
        self.glyph_in(&HANKAKU)
    }

    pub fn glyph_in<'font>(&self, font: &FontResource<'font>) -> Option<Glyph<'font>> {
        font.resolve_glyph(self.code())
    }

    pub fn row(&self, y: usize) -> Option<GlyphRow> {
        self.glyph()?.row(y)
    }
}

impl TryFrom<char> for AsciiChar {
    type Error = FontError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::new(character).ok_or(FontError::NotAscii(character))
    }
}

impl From<AsciiChar> for char {
    fn from(ascii: AsciiChar) -> Self {
        ascii.0
    }
}

impl From<AsciiChar> for u8 {
    fn from(ascii: AsciiChar) -> Self {
        ascii.code()
    }
}

/// Looks up `character` in the embedded font, if it is ASCII.
pub fn get_font_from(character: char) -> Option<Glyph<'static>> {
    AsciiChar::new(character)?.glyph()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};

    #[test]
    fn printable_ascii_test() {
        assert!((0x20..=0x7Eu8).all(|code| get_font_from(char::from(code)).is_some()));
    }

    #[test]
    fn non_ascii_test() {
        assert!(get_font_from('\u{FFFD}').is_none());
        assert!(get_font_from(char::from(0x80)).is_none());
        assert!(AsciiChar::new('é').is_none());
        assert_eq!(AsciiChar::try_from('é'), Err(FontError::NotAscii('é')));
    }

    #[test]
    fn conversion_test() {
        for code in 0..=0x7Fu8 {
            let ascii = AsciiChar::from_code(code).unwrap();
            assert_eq!(ascii.code(), code);
            assert_eq!(char::from(ascii), code as char);
            assert_eq!(AsciiChar::try_from(code as char), Ok(ascii));
        }
        for code in 0x80..=u8::MAX {
            assert!(AsciiChar::from_code(code).is_none());
        }
    }

    #[test]
    fn same_glyph_as_by_code() {
        let ascii = AsciiChar::new('q').unwrap();
        assert_eq!(ascii.glyph(), crate::font::get_font(b'q'));
        assert_eq!(ascii.glyph_in(&HANKAKU), ascii.glyph());
    }

    #[test]
    fn glyph_in_other_font() {
        let tiny = [0xFFu8; 16];
        let font = FontResource::new(&tiny);
        assert!(AsciiChar::new('\0').unwrap().glyph_in(&font).is_some());
        assert!(AsciiChar::new('A').unwrap().glyph_in(&font).is_none());
    }

    #[test]
    fn rows_test() {
        let ascii = AsciiChar::new('A').unwrap();
        for y in 0..GLYPH_HEIGHT {
            assert!(ascii.row(y).is_some());
        }
        assert!(ascii.row(GLYPH_HEIGHT).is_none());
    }

    #[test]
    fn pixels_of_a() {
        const A: [&[u8; GLYPH_WIDTH]; GLYPH_HEIGHT] = [
            b"..@@@...",
            b"..@@@...",
            b".@...@..",
            b".@...@..",
            b".@...@..",
            b".@...@..",
            b".@@@@@..",
            b".@@@@@..",
            b".@...@..",
            b".@...@..",
            b".@...@..",
            b".@...@..",
            b".@...@..",
            b".@...@..",
            b"........",
            b"........",
        ];
        let glyph = get_font_from('A').unwrap();

        let pixels: Vec<bool> = glyph.rows().flat_map(GlyphRow::pixels).collect();
        let expected: Vec<bool> = A
            .iter()
            .flat_map(|row| row.iter())
            .map(|&pixel| pixel == b'@')
            .collect();

        assert_eq!(pixels.len(), GLYPH_WIDTH * GLYPH_HEIGHT);
        assert_eq!(pixels, expected);
    }
}
