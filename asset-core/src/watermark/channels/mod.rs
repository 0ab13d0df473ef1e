//! The three independent text watermark channels.

pub mod punctuation;
pub mod space;
pub mod synonym;

/// Options shared by the text channels.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbedOptions {
    /// When embedding a bit-1 via the space channel, use the zero-width
    /// space pair `U+200B U+0020` instead of the default U+00A0.
    pub use_zero_width: bool,
}
