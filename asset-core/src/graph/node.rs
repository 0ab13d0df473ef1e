//! Graph nodes: the closed ENTITY_TYPES vocabulary and node records.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::error::GraphError;

/// The closed set of entity-type tags a node may carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum EntityType {
    DigitalResource,
    Dataset,
    AIModel,
    TextContent,
    ImageContent,
    AudioContent,
    VideoContent,
    SoftwareCode,
    Agent,
    Person,
    Organization,
    Software,
    Activity,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::DigitalResource => "DigitalResource",
            EntityType::Dataset => "Dataset",
            EntityType::AIModel => "AIModel",
            EntityType::TextContent => "TextContent",
            EntityType::ImageContent => "ImageContent",
            EntityType::AudioContent => "AudioContent",
            EntityType::VideoContent => "VideoContent",
            EntityType::SoftwareCode => "SoftwareCode",
            EntityType::Agent => "Agent",
            EntityType::Person => "Person",
            EntityType::Organization => "Organization",
            EntityType::Software => "Software",
            EntityType::Activity => "Activity",
        }
    }

    pub fn parse(name: &str) -> Result<Self, GraphError> {
        match name {
            "DigitalResource" => Ok(EntityType::DigitalResource),
            "Dataset" => Ok(EntityType::Dataset),
            "AIModel" => Ok(EntityType::AIModel),
            "TextContent" => Ok(EntityType::TextContent),
            "ImageContent" => Ok(EntityType::ImageContent),
            "AudioContent" => Ok(EntityType::AudioContent),
            "VideoContent" => Ok(EntityType::VideoContent),
            "SoftwareCode" => Ok(EntityType::SoftwareCode),
            "Agent" => Ok(EntityType::Agent),
            "Person" => Ok(EntityType::Person),
            "Organization" => Ok(EntityType::Organization),
            "Software" => Ok(EntityType::Software),
            "Activity" => Ok(EntityType::Activity),
            other => Err(GraphError::UnsupportedEntityType(other.to_string())),
        }
    }

    /// Whether this entity type is projected as a PROV `agent`.
    pub fn is_agent_like(&self) -> bool {
        matches!(
            self,
            EntityType::Agent | EntityType::Person | EntityType::Organization | EntityType::Software
        )
    }

    /// Whether this entity type is projected as a PROV `activity`.
    pub fn is_activity(&self) -> bool {
        matches!(self, EntityType::Activity)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: String,
    pub entity_type: EntityType,
    pub label: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Node {
    pub fn new(id: impl Into<String>, entity_type: EntityType, label: impl Into<String>, metadata: Value) -> Self {
        let now = Utc::now();
        Node {
            id: id.into(),
            entity_type,
            label: label.into(),
            metadata,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_round_trips_through_string() {
        for et in [
            EntityType::DigitalResource,
            EntityType::Dataset,
            EntityType::AIModel,
            EntityType::TextContent,
            EntityType::ImageContent,
            EntityType::AudioContent,
            EntityType::VideoContent,
            EntityType::SoftwareCode,
            EntityType::Agent,
            EntityType::Person,
            EntityType::Organization,
            EntityType::Software,
            EntityType::Activity,
        ] {
            assert_eq!(EntityType::parse(et.as_str()).unwrap(), et);
        }
    }

    #[test]
    fn agent_like_and_activity_classification() {
        assert!(EntityType::Agent.is_agent_like());
        assert!(EntityType::Person.is_agent_like());
        assert!(EntityType::Organization.is_agent_like());
        assert!(EntityType::Software.is_agent_like());
        assert!(!EntityType::Dataset.is_agent_like());
        assert!(EntityType::Activity.is_activity());
        assert!(!EntityType::Dataset.is_activity());
    }
}
