pub mod bank;
pub mod deck;
pub mod phase;
pub mod role;
pub mod seat;
pub mod slot;
