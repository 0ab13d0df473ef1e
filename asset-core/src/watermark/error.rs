use std::fmt;

/// Errors raised by the watermark codec.
#[derive(Debug)]
pub enum WatermarkError {
    /// Embed found fewer candidate positions on the selected channel than
    /// payload bits to place.
    InsufficientCarrierCapacity { available: usize, required: usize },
    /// Extract could not recover a valid payload from the carrier.
    NotFound,
}

impl fmt::Display for WatermarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatermarkError::InsufficientCarrierCapacity { available, required } => write!(
                f,
                "insufficient carrier capacity: {available} candidate positions available, {required} required"
            ),
            WatermarkError::NotFound => write!(f, "no valid watermark payload found"),
        }
    }
}

impl std::error::Error for WatermarkError {}
