//! Resource relationship graph: a directed labeled multigraph over
//! digital assets, with traversal queries and a PROV projection.

mod edge;
mod error;
mod graph;
mod node;
mod prov;
mod traversal;

pub use edge::{Edge, RelationshipType};
pub use error::GraphError;
pub use graph::{Direction, ResourceGraph};
pub use node::{EntityType, Node};
pub use prov::{from_prov, to_prov};
pub use traversal::{
    find_components, find_dependencies, find_dependents, find_derived_resources, find_paths,
    find_related_resources, find_sources, RelatedResource,
};
