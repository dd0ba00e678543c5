// ABOUTME: Library root for scmssh - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod inventory;
pub mod launch;
pub mod menu;
pub mod scm;
