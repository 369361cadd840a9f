use thiserror::Error;

/// Errors that can occur while loading or rendering an image
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input could not be decoded as an image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Reading the input or writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration rejected by `RenderConfig::validate`
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A glyph table needs at least one entry to be indexable
    #[error("glyph table must contain at least one glyph")]
    EmptyGlyphTable,
}
