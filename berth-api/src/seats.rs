use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use berth_domain::{Booking, SeatId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct BookSeatRequest {
    pub seat: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub message: String,
    pub booking: Booking,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/seats", get(list_seats))
        .route("/book-seat", post(book_seat))
}

async fn list_seats(State(state): State<AppState>) -> Json<BTreeMap<SeatId, bool>> {
    Json(state.bookings.list_seats().await)
}

async fn book_seat(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<BookSeatRequest>, AppError>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state.bookings.book_seat(&req.seat, &req.name).await?;

    Ok(Json(BookingResponse {
        message: "Seat booked successfully".to_string(),
        booking,
    }))
}
