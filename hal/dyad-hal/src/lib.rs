//! Dyad Hardware Abstraction Layer
//!
//! This crate defines the traits the Dyad transaction engine needs from a
//! two-wire bus peripheral, so the same engine code can drive real silicon
//! or a simulated controller in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (sensor drivers, etc.)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dyad-core (transaction engine)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dyad-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ dyad-hal-     │       │ simulated     │
//! │ stm32f3       │       │ controller    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::BusController`] - status flags and transfer control
//! - [`bus::BusBootstrap`] - one-time clock/pin/timing bring-up

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod timing;

// Re-export key types at crate root for convenience
pub use bus::{BusBootstrap, BusController, Direction, EndMode, StartCondition};
pub use timing::TimingProfile;
