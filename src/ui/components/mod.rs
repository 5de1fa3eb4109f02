pub mod offer_banner;
pub mod rate_card;
pub mod rate_display;

pub use rate_display::RateDisplay;
