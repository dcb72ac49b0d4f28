//! Vehicle Info Bot server — library crate for the Telegram webhook server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `vib-e2e-tests`) can build the router around mock collaborators.

pub mod bot;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
