//! Bus controller abstractions
//!
//! These traits model the status/control register surface of a master-mode
//! two-wire bus peripheral. The transaction engine only ever talks to the
//! hardware through them, one flag query or one control write at a time.

use crate::timing::TimingProfile;

/// Direction of the data phase of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Master transmits to the addressed device
    Write,
    /// Master receives from the addressed device
    Read,
}

/// How the peripheral terminates the configured byte count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EndMode {
    /// More bytes follow after the count is exhausted; the bus is held
    /// and the transfer-complete-reload flag is raised
    Reload,
    /// Hardware issues a stop condition automatically once the count
    /// completes
    AutoEnd,
    /// Hardware holds the bus after the count completes so a repeated
    /// start can follow (used to turn a write around into a read)
    SoftEnd,
}

/// Start condition generation for a transfer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartCondition {
    /// Generate a start (or repeated start if the bus is already owned)
    Start,
    /// Continue the current transfer without a new start or stop
    None,
}

/// Master-mode bus controller
///
/// One implementor per physical bus instance. Status queries are cheap,
/// non-destructive register reads; the engine polls them in bounded loops.
///
/// Implementations are expected to come up in the "idle, not busy" state
/// after [`BusBootstrap`] bring-up.
pub trait BusController {
    /// Bus-busy flag: a transaction (ours or another master's) owns the bus
    fn is_busy(&self) -> bool;

    /// Transmit register is empty and the peripheral wants the next byte
    fn ready_to_transmit(&self) -> bool;

    /// Configured byte count has completed
    ///
    /// With `reload_expected` the reload variant of the flag is consulted
    /// (more bytes announced via [`EndMode::Reload`]); otherwise the final
    /// completion flag is consulted (soft-end transfers).
    fn transfer_complete(&self, reload_expected: bool) -> bool;

    /// A stop condition was detected on the bus
    fn stop_detected(&self) -> bool;

    /// Receive register holds an unread byte
    fn receive_ready(&self) -> bool;

    /// Configure device address byte, byte count, end mode and start
    /// generation for the next transfer segment
    ///
    /// `address` is the already-shifted bus address byte (7-bit device
    /// address left-shifted by one); the direction bit is conveyed
    /// separately through `direction`.
    fn begin_transfer(
        &mut self,
        address: u8,
        count: u8,
        end_mode: EndMode,
        start: StartCondition,
        direction: Direction,
    );

    /// Load one byte into the transmit register
    fn transmit(&mut self, byte: u8);

    /// Take one byte from the receive register
    fn receive(&mut self) -> u8;

    /// Clear the sticky stop-detected flag
    fn clear_stop(&mut self);
}

/// One-time bus bring-up
///
/// Invoked once per bus during registry initialization, before any
/// transaction executes. Order follows the hardware requirements: clock
/// first, then pins, then timing.
pub trait BusBootstrap {
    /// Enable the peripheral clock for this bus
    fn enable_clock(&mut self);

    /// Route and configure the clock/data pins (open-drain, alternate
    /// function)
    fn configure_pins(&mut self);

    /// Apply the preset timing profile selected for this bus
    fn apply_timing(&mut self, profile: TimingProfile);
}
