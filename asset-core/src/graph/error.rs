use std::fmt;

/// Errors raised by the relationship graph.
#[derive(Debug)]
pub enum GraphError {
    /// An operation referenced a node that is not in the graph.
    NodeNotFound(String),
    /// An edge or wrapper query used a relationship type outside the
    /// closed RELATIONSHIP_TYPES vocabulary.
    UnsupportedRelationshipType(String),
    /// A node was declared with an entity type outside the closed
    /// ENTITY_TYPES vocabulary.
    UnsupportedEntityType(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeNotFound(id) => write!(f, "node not found: {id}"),
            GraphError::UnsupportedRelationshipType(t) => {
                write!(f, "unsupported relationship type: {t}")
            }
            GraphError::UnsupportedEntityType(t) => write!(f, "unsupported entity type: {t}"),
        }
    }
}

impl std::error::Error for GraphError {}
