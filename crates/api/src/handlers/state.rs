//! Handlers for the read-only `/states` resource.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::projections::{listing, STATE};
use crate::state::AppState;

/// GET /api/v1/states
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let states = state.store.list_states().await?;
    Ok(Json(listing("states", &STATE, &states)?))
}
