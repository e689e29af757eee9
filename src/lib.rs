//! Library crate for users-app.
//!
//! This crate exposes the building blocks of the prompt loop:
//! - Actions, theme, state and the command loop (`app`)
//! - Error and result types (`error`)
//! - Severity-tagged status messages (`message`)
//! - The in-memory user store (`store`)
//! - Console rendering of banners, messages and tables (`ui`)
//!
//! It is used by the `users-app` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod cli;
pub mod error;
pub mod message;
pub mod store;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
