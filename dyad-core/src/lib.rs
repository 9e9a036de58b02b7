//! Board-agnostic transaction engine for the Dyad two-wire bus
//!
//! This crate contains the protocol logic that does not depend on a
//! specific bus peripheral:
//!
//! - Bounded polling wait primitive
//! - Write and read transaction state machines
//! - Timeout diagnostics counter
//! - Device registry with an active-device shorthand
//!
//! The engine drives hardware exclusively through the traits in
//! `dyad-hal`; tests exercise it against a simulated controller.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod poll;
pub mod registry;
pub mod transaction;

#[cfg(test)]
pub(crate) mod sim;

pub use error::{BusError, ErrorCounter};
pub use registry::{DeviceId, DeviceRegistry};
pub use transaction::Bus;
