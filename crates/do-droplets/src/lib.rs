//! Droplet client for the DigitalOcean legacy (v1) API.
//!
//! Provides the [`DropletClient`] for programmatic lifecycle control over
//! droplets: list, inspect, reboot, power-cycle, shut down, power on/off,
//! and destroy.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{DropletClient, DropletClientBuilder};
pub use models::{ApiStatus, Droplet, Envelope};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = do_core::Result<T>;
