//! Astral API domain module.
//!
//! This module owns the outbound side of the server: a thin HTTP client for
//! the Astral location-attestation API and its error taxonomy. Tools consume
//! it through [`AstralClient`] and never touch `reqwest` directly.

mod client;
mod error;

pub use client::{AstralClient, CallOutcome};
pub use error::{ClientError, RESPONSE_TEXT_CAP, truncate_body};
