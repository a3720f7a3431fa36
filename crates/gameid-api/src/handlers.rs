//! API Handlers
use crate::metrics::Outcome;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use gameid_core::ValidationResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    /// Raw identifier as typed by the user
    pub text: String,
    /// Game code from the catalog
    pub game: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub code: String,
    pub display_name: String,
    pub example: String,
}

pub async fn validate(
    State(state): State<AppState>,
    Json(payload): Json<ValidateRequest>,
) -> (StatusCode, Json<ValidationResult>) {
    let result = state.registry.validate(&payload.text, &payload.game);

    let outcome = if !state.registry.contains(&payload.game) {
        Outcome::Unregistered
    } else if result.is_valid {
        Outcome::Valid
    } else {
        Outcome::Invalid
    };
    state.metrics.observe(&payload.game, outcome);

    (StatusCode::OK, Json(result))
}

pub async fn list_games(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let games: Vec<GameSummary> = state
        .registry
        .codes()
        .into_iter()
        .filter_map(|code| state.registry.lookup(code))
        .map(|d| GameSummary {
            code: d.code.clone(),
            display_name: d.display_name.clone(),
            example: d.example.clone(),
        })
        .collect();

    (StatusCode::OK, Json(json!({ "games": games })))
}

pub async fn metrics(State(state): State<AppState>) -> (StatusCode, String) {
    match state.metrics.encode() {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "games": state.registry.len(),
        })),
    )
}
