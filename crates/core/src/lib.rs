//! Core types for bookverse
//!
//! This crate contains domain types shared across all other crates.

mod book;
pub mod constants;
mod cover;
pub mod env_config;

pub use book::*;
pub use constants::*;
pub use cover::*;
