use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FontError {
    /// The glyph for `code` would start (or end) past the end of the font resource.
    #[error("no glyph for character code {code:#04x} in a {size} byte font")]
    GlyphNotFound { code: u8, size: usize },
    #[error("{0:?} is not an ASCII character")]
    NotAscii(char),
}

pub type FontResult<T> = Result<T, FontError>;
