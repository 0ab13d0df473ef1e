//! Hierarchical metadata bundle: five named layers, per-layer validation,
//! and projections to standard vocabularies plus a merged integrated view.

pub mod bundle;
pub mod error;
pub mod layer;
pub mod projection;

pub use bundle::MetadataBundle;
pub use error::MetadataError;
pub use layer::LayerTag;
pub use projection::{
    integrated_view, project_characteristics, project_identity, project_lineage,
    project_provenance, project_rights,
};
