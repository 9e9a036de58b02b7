//! STM32F3-specific support for the Dyad bus engine
//!
//! This crate provides STM32F3 constants, pin assignments and error
//! converters for use with the `dyad-hal` traits. It targets boards built
//! around the STM32F303 family:
//!
//! # Features
//!
//! - `stm32f303cb` / `stm32f303cc` - chip variant selection
//! - `defmt` - enable debug formatting support

#![no_std]

pub mod i2c;

// Re-export shared types from dyad-hal
pub use dyad_hal::timing::TimingProfile;
