//! API endpoint handlers.

pub mod amps;
pub mod gate;
pub mod health;
pub mod state;
