use std::sync::Arc;
use berth_domain::BookingRepository;

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }
}
