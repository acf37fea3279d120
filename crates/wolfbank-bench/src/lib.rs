pub mod config;
pub mod logging;
pub mod play;
pub mod render;
pub mod simulation;
