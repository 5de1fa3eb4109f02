//! Rate lookup, discount and offer rules behind the rate display.

pub mod rates;
pub mod reveal;

pub use rates::RateQuote;
pub use reveal::OfferReveal;
