//! Data models for Seatbook

mod action;
mod hand;
mod player;

pub use action::*;
pub use hand::*;
pub use player::*;
