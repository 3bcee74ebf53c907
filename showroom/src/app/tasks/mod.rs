//! # Async Tasks
//!
//! Background task spawning for the capture simulation and the UI timers.

pub mod capture;
pub mod timers;
