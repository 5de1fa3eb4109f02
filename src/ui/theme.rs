//! Class names shared by the rate display components. Rules live in `assets/main.css`.

pub const CONTAINER: &str = "rate-display";
pub const CARD: &str = "card";
pub const REVEAL_BUTTON: &str = "reveal";
pub const OFFER: &str = "offer";
pub const FINAL_RATE: &str = "final-rate";
