//! Shared application state: the in-memory resource registry and
//! relationship graph.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use asset_core::{CoreConfig, Identifier, MetadataBundle, ResourceGraph};

/// A single registered resource: its identifier, assembled metadata
/// bundle, and (if text and watermarked) the carrier text a later
/// verification call re-checks against.
#[derive(Clone, Debug)]
pub struct RegisteredResource {
    pub identifier: Identifier,
    pub metadata: MetadataBundle,
    pub watermarked_text: Option<String>,
}

/// In-memory resource store, keyed by the identifier's `did:...` string.
///
/// A single async mutex guards the whole store rather than per-entry
/// locking.
#[derive(Default)]
pub struct Registry {
    resources: HashMap<String, RegisteredResource>,
}

impl Registry {
    pub fn new() -> Self {
        Registry { resources: HashMap::new() }
    }

    pub fn insert(&mut self, resource: RegisteredResource) {
        self.resources.insert(resource.identifier.to_did_string(), resource);
    }

    pub fn get(&self, did: &str) -> Option<&RegisteredResource> {
        self.resources.get(did)
    }
}

/// Shared state held by the API.
///
/// This is wrapped in an [`Arc`] and passed to request handlers via
/// Axum's `State` extractor.
pub struct AppState {
    /// Ambient defaults (method tag, encoding, traversal depth).
    pub config: CoreConfig,
    /// In-memory registered-resource store.
    pub registry: Mutex<Registry>,
    /// Shared resource relationship graph, explored via `/graph/*`.
    pub graph: Mutex<ResourceGraph>,
}

/// Thread-safe alias for `AppState`.
pub type SharedState = Arc<AppState>;
