//! Open-Face Chinese Poker scoring.
//!
//! A board is three rows: a five card back, a five card middle, and a three
//! card front. This crate computes a comparable [`Strength`] for each row,
//! decides whether a board fouls (rows out of strength order), and settles a
//! head-to-head match between two boards into a signed point total with the
//! scoop bonus.
//!
//! Five card rows are ranked by an injectable lookup evaluator; three card
//! front rows use their own restricted ranking (trips, one pair, high card)
//! with kicker-aware arithmetic tie-breaks. Every operation is a pure
//! function of its inputs.
//!
//! [`Strength`]: evaluation::strength::Strength
pub mod cards;
pub mod error;
pub mod evaluation;
pub mod scoring;

pub use error::Error;

/// Signed match points from the perspective of the first board.
pub type Score = i8;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}
