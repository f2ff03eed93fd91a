//! Slide decks: the data model, the markdown file parser that produces them,
//! and the sources a presenter loads them from.

pub mod parser;
pub mod source;
mod types;

pub use parser::ParseError;
pub use source::{DeckSource, LoadError};
pub use types::{Deck, DeckPayload, Slide, SlidePayload};
