//! Library interface for propmeter.
//!
//! Everything that does not touch hardware lives here: the menu state
//! machine, the editors, rendering, the settings layout and the HD44780
//! driver (generic over `embedded-hal` traits). The firmware binary wires
//! these to the nRF52840 peripherals.
//!
//! Usage: `cargo test --lib` or `cargo test` (host, no hardware needed)
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and needs `--features embedded`.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod display;
pub mod editors;
pub mod error;
pub mod input;
pub mod menu;
pub mod render;
pub mod settings;

pub use app::Controller;
pub use error::{Error, StorageError};

// ═══════════════════════════════════════════════════════════════════════════
// Cross-module Tests
// ═══════════════════════════════════════════════════════════════════════════
