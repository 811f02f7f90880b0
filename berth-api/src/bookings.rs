use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use berth_domain::Booking;
use serde::{Deserialize, Serialize};
use crate::{error::AppError, seats::BookingResponse, state::AppState};

#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub seat: String,
    pub meal: String,
}

#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    pub seat: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meal", post(add_meal))
        .route("/cancel", post(cancel_booking))
        .route("/bookings", get(booking_history))
}

async fn add_meal(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<MealRequest>, AppError>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state.bookings.add_meal(&req.seat, &req.meal).await?;

    Ok(Json(BookingResponse {
        message: "Meal added".to_string(),
        booking,
    }))
}

async fn cancel_booking(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CancelRequest>, AppError>,
) -> Result<Json<MessageResponse>, AppError> {
    state.bookings.cancel_booking(&req.seat).await?;

    Ok(Json(MessageResponse {
        message: "Booking cancelled".to_string(),
    }))
}

/// Booking history, oldest first.
async fn booking_history(State(state): State<AppState>) -> Json<Vec<Booking>> {
    Json(state.bookings.list_bookings().await)
}
