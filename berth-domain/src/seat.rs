use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest berth number on either deck.
pub const SEATS_PER_DECK: u8 = 10;

/// Sleeper deck of a berth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Deck {
    Lower,
    Upper,
}

impl Deck {
    pub fn code(&self) -> char {
        match self {
            Deck::Lower => 'L',
            Deck::Upper => 'U',
        }
    }

    fn from_code(c: char) -> Option<Self> {
        match c {
            'L' => Some(Deck::Lower),
            'U' => Some(Deck::Upper),
            _ => None,
        }
    }
}

/// Seat label such as `L3` or `U10`.
///
/// Ordering is deck first, then number, so a sorted collection reads
/// `L1..L10, U1..U10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    deck: Deck,
    number: u8,
}

impl SeatId {
    pub fn new(deck: Deck, number: u8) -> Result<Self, SeatParseError> {
        if !(1..=SEATS_PER_DECK).contains(&number) {
            return Err(SeatParseError(format!("{}{}", deck.code(), number)));
        }
        Ok(Self { deck, number })
    }

    pub fn deck(&self) -> Deck {
        self.deck
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// The full berth universe, lower deck first.
    pub fn all() -> impl Iterator<Item = SeatId> {
        [Deck::Lower, Deck::Upper].into_iter().flat_map(|deck| {
            (1..=SEATS_PER_DECK).map(move |number| SeatId { deck, number })
        })
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.deck.code(), self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid seat label: {0:?}")]
pub struct SeatParseError(pub String);

impl FromStr for SeatId {
    type Err = SeatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SeatParseError(s.to_string());

        let mut chars = s.chars();
        let deck = chars.next().and_then(Deck::from_code).ok_or_else(invalid)?;
        let digits = chars.as_str();

        // u8::from_str tolerates "+3" and "03"; labels never carry either
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let number: u8 = digits.parse().map_err(|_| invalid())?;
        SeatId::new(deck, number).map_err(|_| invalid())
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(seat: SeatId) -> Self {
        seat.to_string()
    }
}
