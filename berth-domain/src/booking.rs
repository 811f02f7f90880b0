use serde::Serialize;
use std::collections::BTreeMap;
use crate::fare::{FareRules, NO_MEAL};
use crate::prediction::confirmation_probability;
use crate::seat::SeatId;
use crate::DEFAULT_STATIONS;

/// One passenger's reservation of one berth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub name: String,
    pub seat: SeatId,
    pub meal: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid seat number")]
    InvalidSeat(String),

    #[error("Seat already booked")]
    AlreadyBooked(SeatId),

    #[error("Booking not found")]
    BookingNotFound(String),
}

/// Seat occupancy plus booking history for a single coach.
///
/// A seat is occupied exactly when one booking in `bookings` names it.
/// Callers sharing a store across tasks must serialize `&mut self` calls.
#[derive(Debug, Clone)]
pub struct BookingStore {
    seats: BTreeMap<SeatId, bool>,
    bookings: Vec<Booking>,
    fares: FareRules,
    stations: Vec<String>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::with_fares(
            FareRules::default(),
            DEFAULT_STATIONS.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn with_fares(fares: FareRules, stations: Vec<String>) -> Self {
        Self {
            seats: SeatId::all().map(|seat| (seat, false)).collect(),
            bookings: Vec::new(),
            fares,
            stations,
        }
    }

    pub fn seats(&self) -> &BTreeMap<SeatId, bool> {
        &self.seats
    }

    /// Bookings in the order they were made.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn book_seat(&mut self, seat: &str, name: &str) -> Result<Booking, BookingError> {
        let seat_id: SeatId = seat
            .parse()
            .map_err(|_| BookingError::InvalidSeat(seat.to_string()))?;

        let occupied = self.seats
            .get_mut(&seat_id)
            .ok_or_else(|| BookingError::InvalidSeat(seat.to_string()))?;

        if *occupied {
            return Err(BookingError::AlreadyBooked(seat_id));
        }
        *occupied = true;

        let booking = Booking {
            name: name.to_string(),
            seat: seat_id,
            meal: NO_MEAL.to_string(),
            price: self.fares.base_fare,
        };
        self.bookings.push(booking.clone());

        Ok(booking)
    }

    /// Attach a meal to the booking on `seat`.
    ///
    /// The surcharge is added on every call, so choosing a meal twice pays
    /// for it twice. Unknown meal names are stored as given at no charge.
    /// The price saturates at `i64::MAX` instead of wrapping.
    pub fn add_meal(&mut self, seat: &str, meal: &str) -> Result<Booking, BookingError> {
        let surcharge = self.fares.surcharge(meal);
        let index = self.position_of(seat)?;

        let booking = &mut self.bookings[index];
        booking.price = booking.price.saturating_add(surcharge);
        booking.meal = meal.to_string();

        Ok(booking.clone())
    }

    /// Remove the booking on `seat` and free the berth.
    pub fn cancel_booking(&mut self, seat: &str) -> Result<Booking, BookingError> {
        let index = self.position_of(seat)?;
        let booking = self.bookings.remove(index);

        if let Some(occupied) = self.seats.get_mut(&booking.seat) {
            *occupied = false;
        }

        Ok(booking)
    }

    pub fn booked_count(&self) -> usize {
        self.seats.values().filter(|occupied| **occupied).count()
    }

    /// Confirmation probability in percent (40, 70 or 90).
    pub fn predict_confirmation(&self) -> u8 {
        confirmation_probability(self.booked_count(), self.seats.len())
    }

    fn position_of(&self, seat: &str) -> Result<usize, BookingError> {
        let not_found = || BookingError::BookingNotFound(seat.to_string());
        let seat_id: SeatId = seat.parse().map_err(|_| not_found())?;

        self.bookings
            .iter()
            .position(|b| b.seat == seat_id)
            .ok_or_else(not_found)
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}
