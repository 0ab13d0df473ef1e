//! Ambient defaults for the identifier/watermark/graph operations that
//! leave a choice to the caller.
//!
//! An aggregate of per-subsystem `Default` structs, scoped to what this
//! crate actually leaves configurable: the DID method tag, the default
//! digest encoding, the default watermark channel, and the default
//! traversal depth bound.

use crate::encoding::Encoding;
use crate::identifier::ResourceType;
use crate::watermark::TextChannel;

/// Default DID method tag used when a caller does not supply one.
pub const DEFAULT_METHOD: &str = "asset";

/// Configuration for identifier derivation.
#[derive(Clone, Debug)]
pub struct IdentifierConfig {
    /// DID method tag, e.g. `"asset"`.
    pub method: String,
    /// Digest encoding used when rendering a `did:...` string.
    pub encoding: Encoding,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self { method: DEFAULT_METHOD.to_string(), encoding: Encoding::Base64UrlNoPad }
    }
}

/// Configuration for the watermark codec.
#[derive(Clone, Debug)]
pub struct WatermarkConfig {
    /// Channel used when a caller does not request one explicitly.
    pub default_channel: TextChannel,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self { default_channel: TextChannel::Combined }
    }
}

/// Configuration for graph traversal queries.
#[derive(Clone, Debug)]
pub struct TraversalConfig {
    /// Depth bound applied when a caller does not request one explicitly.
    pub default_max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self { default_max_depth: 5 }
    }
}

/// Top-level configuration for the core library.
///
/// This aggregates the sub-configs a host binary (e.g.
/// `registry-gateway`) can construct from defaults, a config file, or
/// environment variables:
///
/// - identifier derivation (`identifier`),
/// - the watermark codec (`watermark`),
/// - graph traversal (`traversal`).
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    pub identifier: IdentifierConfig,
    pub watermark: WatermarkConfig,
    pub traversal: TraversalConfig,
}

/// Resource types carried forward from the GLOSSARY's closed vocabulary,
/// re-exported here so a host binary can validate a request's
/// `resourceType` field without importing `identifier` directly.
pub const SUPPORTED_RESOURCE_TYPES: [ResourceType; 9] = [
    ResourceType::Text,
    ResourceType::Image,
    ResourceType::Audio,
    ResourceType::Video,
    ResourceType::AiModel,
    ResourceType::Dataset,
    ResourceType::Code,
    ResourceType::ExecutionStructure,
    ResourceType::Generic,
];
