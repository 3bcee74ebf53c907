//! # Simulated Collaborators
//!
//! Concrete implementations of the collaborator traits in
//! [`crate::core::service`]. Everything here is a local simulation: the demo
//! never talks to a server.
//!
//! ## Modules
//!
//! - **[`auth`]**: demo identity provider behind the sign-in modal
//! - **[`analyzer`]**: simulated damage analysis behind the capture screen

pub mod analyzer;
pub mod auth;
