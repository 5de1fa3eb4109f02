pub mod components;
pub mod theme;
