pub mod config;
mod elimination;
mod flow;
mod input;
pub mod log;
pub mod outcome;
mod resolve;
pub mod state;
pub mod view;
