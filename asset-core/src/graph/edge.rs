//! Graph edges: the closed RELATIONSHIP_TYPES vocabulary and edge records.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::error::GraphError;

/// The closed set of relationship-type tags an edge may carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum RelationshipType {
    Contains,
    IsPartOf,
    HasComponent,
    IsComponentOf,
    WasDerivedFrom,
    WasRevisionOf,
    WasQuotedFrom,
    WasInfluencedBy,
    WasGeneratedBy,
    Used,
    WasAttributedTo,
    WasAssociatedWith,
    DependsOn,
    Requires,
    Uses,
    Supports,
    Precedes,
    Follows,
    Replaces,
    TrainedOn,
    FineTunedFrom,
    Generates,
    Analyzes,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Contains => "contains",
            RelationshipType::IsPartOf => "isPartOf",
            RelationshipType::HasComponent => "hasComponent",
            RelationshipType::IsComponentOf => "isComponentOf",
            RelationshipType::WasDerivedFrom => "wasDerivedFrom",
            RelationshipType::WasRevisionOf => "wasRevisionOf",
            RelationshipType::WasQuotedFrom => "wasQuotedFrom",
            RelationshipType::WasInfluencedBy => "wasInfluencedBy",
            RelationshipType::WasGeneratedBy => "wasGeneratedBy",
            RelationshipType::Used => "used",
            RelationshipType::WasAttributedTo => "wasAttributedTo",
            RelationshipType::WasAssociatedWith => "wasAssociatedWith",
            RelationshipType::DependsOn => "dependsOn",
            RelationshipType::Requires => "requires",
            RelationshipType::Uses => "uses",
            RelationshipType::Supports => "supports",
            RelationshipType::Precedes => "precedes",
            RelationshipType::Follows => "follows",
            RelationshipType::Replaces => "replaces",
            RelationshipType::TrainedOn => "trainedOn",
            RelationshipType::FineTunedFrom => "fineTunedFrom",
            RelationshipType::Generates => "generates",
            RelationshipType::Analyzes => "analyzes",
        }
    }

    pub const ALL: [RelationshipType; 23] = [
        RelationshipType::Contains,
        RelationshipType::IsPartOf,
        RelationshipType::HasComponent,
        RelationshipType::IsComponentOf,
        RelationshipType::WasDerivedFrom,
        RelationshipType::WasRevisionOf,
        RelationshipType::WasQuotedFrom,
        RelationshipType::WasInfluencedBy,
        RelationshipType::WasGeneratedBy,
        RelationshipType::Used,
        RelationshipType::WasAttributedTo,
        RelationshipType::WasAssociatedWith,
        RelationshipType::DependsOn,
        RelationshipType::Requires,
        RelationshipType::Uses,
        RelationshipType::Supports,
        RelationshipType::Precedes,
        RelationshipType::Follows,
        RelationshipType::Replaces,
        RelationshipType::TrainedOn,
        RelationshipType::FineTunedFrom,
        RelationshipType::Generates,
        RelationshipType::Analyzes,
    ];

    pub fn parse(name: &str) -> Result<Self, GraphError> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == name)
            .copied()
            .ok_or_else(|| GraphError::UnsupportedRelationshipType(name.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub relationship_type: RelationshipType,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, relationship_type: RelationshipType, metadata: Value) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            relationship_type,
            metadata,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_type_round_trips_through_string() {
        for rt in RelationshipType::ALL {
            assert_eq!(RelationshipType::parse(rt.as_str()).unwrap(), rt);
        }
    }

    #[test]
    fn unknown_relationship_type_is_rejected() {
        assert!(RelationshipType::parse("teleportsTo").is_err());
    }
}
