use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod error;
pub mod predict;
pub mod seats;
pub mod state;
pub mod stations;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // Any origin may call the API from a browser
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(seats::routes())
        .merge(bookings::routes())
        .merge(stations::routes())
        .merge(predict::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
