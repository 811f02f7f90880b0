use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    /// Percentage rendered with a trailing `%`, e.g. "70%"
    pub confirmation_probability: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/predict", get(predict_confirmation))
}

async fn predict_confirmation(State(state): State<AppState>) -> Json<PredictionResponse> {
    let probability = state.bookings.predict_confirmation().await;

    Json(PredictionResponse {
        confirmation_probability: format!("{}%", probability),
    })
}
