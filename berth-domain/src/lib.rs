pub mod seat;
pub mod fare;
pub mod booking;
pub mod prediction;
pub mod repository;

pub use seat::{Deck, SeatId, SeatParseError};
pub use fare::FareRules;
pub use booking::{Booking, BookingError, BookingStore};
pub use repository::BookingRepository;

/// Stations served by the demo route, in travel order.
pub const DEFAULT_STATIONS: [&str; 4] = ["Ahmedabad", "Vadodara", "Surat", "Mumbai"];
