use axum::{Json, extract::{Query, State}, http::StatusCode};
use serde::{Deserialize, Serialize};

use asset_core::graph::{find_paths as graph_find_paths, to_prov, EntityType, RelationshipType};

use crate::state::SharedState;

/// Request body for `POST /graph/nodes`.
#[derive(Debug, Deserialize)]
pub struct AddNodeRequest {
    pub id: String,
    pub entity_type: String,
    pub label: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

fn bad_request(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.into())
}

/// `POST /graph/nodes`
pub async fn add_node(
    State(state): State<SharedState>,
    Json(body): Json<AddNodeRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let entity_type = EntityType::parse(&body.entity_type).map_err(|e| bad_request(e.to_string()))?;
    let mut graph = state.graph.lock().await;
    graph.add_node(body.id, entity_type, body.label, body.metadata);
    Ok(StatusCode::CREATED)
}

/// Request body for `POST /graph/edges`.
#[derive(Debug, Deserialize)]
pub struct AddEdgeRequest {
    pub source: String,
    pub target: String,
    pub relationship_type: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// `POST /graph/edges`
pub async fn add_edge(
    State(state): State<SharedState>,
    Json(body): Json<AddEdgeRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let relationship_type = RelationshipType::parse(&body.relationship_type).map_err(|e| bad_request(e.to_string()))?;
    let mut graph = state.graph.lock().await;
    graph
        .add_edge(&body.source, &body.target, relationship_type, body.metadata)
        .map_err(|e| bad_request(e.to_string()))?;
    Ok(StatusCode::CREATED)
}

/// Query parameters for `GET /graph/paths`.
#[derive(Debug, Deserialize)]
pub struct FindPathsQuery {
    pub source: String,
    pub target: String,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    5
}

#[derive(Debug, Serialize)]
pub struct FindPathsResponse {
    pub paths: Vec<Vec<String>>,
}

/// `GET /graph/paths?source=...&target=...&max_depth=...`
pub async fn find_paths(
    State(state): State<SharedState>,
    Query(query): Query<FindPathsQuery>,
) -> Json<FindPathsResponse> {
    let graph = state.graph.lock().await;
    let paths = graph_find_paths(&graph, &query.source, &query.target, query.max_depth, None);
    Json(FindPathsResponse { paths })
}

/// `GET /graph/prov`
///
/// Projects the whole shared graph to a PROV document.
pub async fn prov_document(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let graph = state.graph.lock().await;
    Json(to_prov(&graph))
}
