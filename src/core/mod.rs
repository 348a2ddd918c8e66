//! Core components of the `ugtabs-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`UgClient`] and its builder.
//! - The primary [`UgError`] type and its [`ErrorClass`].
//! - Internal networking helpers.

/// The main client (`UgClient`), builder, and configuration.
pub mod client;
/// The primary error type (`UgError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::UgClient`
pub use client::{UgClient, UgClientBuilder};
pub use error::{ErrorClass, UgError};
