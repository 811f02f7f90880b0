use axum::{extract::State, routing::get, Json, Router};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/stations", get(list_stations))
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.bookings.list_stations().await)
}
