use async_trait::async_trait;
use std::collections::BTreeMap;
use crate::booking::{Booking, BookingError};
use crate::seat::SeatId;

/// Repository trait for seat and booking access
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list_seats(&self) -> BTreeMap<SeatId, bool>;

    async fn book_seat(&self, seat: &str, name: &str) -> Result<Booking, BookingError>;

    async fn add_meal(&self, seat: &str, meal: &str) -> Result<Booking, BookingError>;

    /// Returns the booking that was removed.
    async fn cancel_booking(&self, seat: &str) -> Result<Booking, BookingError>;

    async fn list_stations(&self) -> Vec<String>;

    async fn list_bookings(&self) -> Vec<Booking>;

    /// Confirmation probability in percent.
    async fn predict_confirmation(&self) -> u8;
}
