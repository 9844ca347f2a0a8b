use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use contracts::system::attribute_map::MetadataMap;

use crate::system::api::state::AppState;

/// GET /api/system/attribute-map
pub async fn get_attribute_map(State(state): State<Arc<AppState>>) -> Json<MetadataMap> {
    let map = state
        .registry
        .build_metadata_map(&state.origin_system_name, &state.options);

    tracing::info!(
        "Attribute map: {} entities, {} actions",
        map.total_entities(),
        map.total_actions()
    );

    Json(map)
}
