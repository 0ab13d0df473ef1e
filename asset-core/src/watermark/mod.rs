//! Watermark codec: a JSON payload embedded into a carrier resource
//! through one of several channels, and a typed strategy slot so other
//! media types can plug in their own embedding algorithm later.

pub mod channels;
pub mod combined;
pub mod error;
pub mod payload;
pub mod strategy;

pub use channels::EmbedOptions;
pub use error::WatermarkError;
pub use payload::Payload;
pub use strategy::{
    AiModelStrategy, AudioStrategy, ImageStrategy, Resource, TextChannel, TextStrategy,
    WatermarkStrategy,
};
