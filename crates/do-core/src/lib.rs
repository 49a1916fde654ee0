//! # do-core
//!
//! Core types and HTTP plumbing for the DigitalOcean legacy (v1) API.
//!
//! This crate provides the error type, credential handling, and the
//! [`transport::Transport`] seam that service crates such as `do-droplets`
//! issue their requests through.
//!
//! ## Modules
//!
//! - [`error`] - Error types for API operations
//! - [`credentials`] - The immutable `client_id` / `api_key` pair
//! - [`client`] - HTTP client configuration (endpoint, timeout, user agent)
//! - [`transport`] - The `Transport` trait and its `reqwest` implementation

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod credentials;
pub mod error;
pub mod transport;

// Re-export commonly used types
pub use error::{Error, Result};
