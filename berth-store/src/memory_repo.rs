use async_trait::async_trait;
use berth_domain::{Booking, BookingError, BookingRepository, BookingStore, SeatId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use crate::app_config::Config;

/// Process-local booking state. Nothing survives a restart.
///
/// Every mutation takes the write lock for its whole check-then-update,
/// so two requests for the same seat can never both succeed.
pub struct InMemoryBookingRepository {
    store: RwLock<BookingStore>,
}

impl InMemoryBookingRepository {
    pub fn new(store: BookingStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(BookingStore::with_fares(
            config.fares.clone(),
            config.stations.clone(),
        ))
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new(BookingStore::new())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn list_seats(&self) -> BTreeMap<SeatId, bool> {
        self.store.read().await.seats().clone()
    }

    async fn book_seat(&self, seat: &str, name: &str) -> Result<Booking, BookingError> {
        let mut store = self.store.write().await;
        let booking = store.book_seat(seat, name)?;
        info!(seat = %booking.seat, name = %booking.name, "Seat booked");
        Ok(booking)
    }

    async fn add_meal(&self, seat: &str, meal: &str) -> Result<Booking, BookingError> {
        let mut store = self.store.write().await;
        let booking = store.add_meal(seat, meal)?;
        info!(seat = %booking.seat, meal = %booking.meal, price = booking.price, "Meal added");
        Ok(booking)
    }

    async fn cancel_booking(&self, seat: &str) -> Result<Booking, BookingError> {
        let mut store = self.store.write().await;
        let booking = store.cancel_booking(seat)?;
        info!(seat = %booking.seat, name = %booking.name, "Booking cancelled");
        Ok(booking)
    }

    async fn list_stations(&self) -> Vec<String> {
        self.store.read().await.stations().to_vec()
    }

    async fn list_bookings(&self) -> Vec<Booking> {
        self.store.read().await.bookings().to_vec()
    }

    async fn predict_confirmation(&self) -> u8 {
        let store = self.store.read().await;
        let probability = store.predict_confirmation();
        debug!(booked = store.booked_count(), probability, "Confirmation estimate");
        probability
    }
}
