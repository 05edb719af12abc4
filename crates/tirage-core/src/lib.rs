//! Oracle card deck generation for tabletop storytelling.
//!
//! Builds a deck of narrative prompt cards from a JSON configuration:
//! a weighted title distribution decides which title lands on each card,
//! every other slot is drawn at random from a configured pool of strings,
//! and each finished card renders as a fixed-width asterisk-framed block.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod render;
pub mod select;
pub mod titles;

pub use card::Card;
pub use config::{DeckConfig, OutputConfig};
pub use deck::{DECK_TITLE, Deck};
pub use error::{DeckError, DeckResult};
