//! Write and read transaction state machines
//!
//! A transaction walks the bus through a fixed phase sequence - address
//! phase, register-select phase, data phase, termination phase - with each
//! phase gated on one hardware status flag via [`poll::poll_until`]. A
//! timed-out wait aborts immediately: the shared counter is bumped and the
//! caller gets [`BusError::Timeout`]. No rollback is attempted; the next
//! transaction's bus-free wait is what resynchronizes the hardware.
//!
//! The `&mut self` receivers encode the one-transaction-per-bus invariant.
//! Callers that share a bus across priority levels must serialize access
//! themselves; the engine has no locking of its own.

use dyad_hal::{BusBootstrap, BusController, Direction, EndMode, StartCondition, TimingProfile};

use crate::error::{BusError, ErrorCounter};
use crate::poll::{poll_until, LONG_BUDGET, SHORT_BUDGET};

/// One physical bus instance paired with its selected timing profile
///
/// The pairing is fixed after construction; the profile is applied to the
/// hardware once during [`Bus::initialize`].
pub struct Bus<C: BusController> {
    controller: C,
    profile: TimingProfile,
}

impl<C: BusController> Bus<C> {
    /// Pair a controller with its timing profile
    pub fn new(controller: C, profile: TimingProfile) -> Self {
        Self {
            controller,
            profile,
        }
    }

    /// Timing profile selected for this bus
    pub fn profile(&self) -> TimingProfile {
        self.profile
    }

    /// Read-only access to the controller (diagnostics)
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Release the owned controller
    pub fn free(self) -> C {
        self.controller
    }

    /// One-time hardware bring-up: clock, pins, then timing
    ///
    /// Must complete before any transaction executes; leaves the bus in
    /// the idle, not-busy state.
    pub fn initialize(&mut self)
    where
        C: BusBootstrap,
    {
        self.controller.enable_clock();
        self.controller.configure_pins();
        self.controller.apply_timing(self.profile);
    }

    /// Record the timeout and produce the transaction's failure value
    fn timed_out(errors: &mut ErrorCounter) -> BusError {
        errors.record_timeout();
        BusError::Timeout
    }

    /// Single-byte register write
    ///
    /// `addr` is the unshifted 7-bit device address.
    pub fn write_register(
        &mut self,
        errors: &mut ErrorCounter,
        addr: u8,
        reg: u8,
        data: u8,
    ) -> Result<(), BusError> {
        self.write_registers(errors, addr, reg, &[data])
    }

    /// Register write with a multi-byte payload
    ///
    /// Sends the register selector under reload mode, then reconfigures
    /// for the payload burst in auto-end mode and waits for the hardware
    /// stop condition.
    pub fn write_registers(
        &mut self,
        errors: &mut ErrorCounter,
        addr: u8,
        reg: u8,
        payload: &[u8],
    ) -> Result<(), BusError> {
        if payload.is_empty() {
            return Err(BusError::EmptyTransfer);
        }
        // The hardware byte counter is 8 bits wide
        debug_assert!(payload.len() <= u8::MAX as usize);

        let address = addr << 1;

        if !poll_until(|| !self.controller.is_busy(), LONG_BUDGET) {
            return Err(Self::timed_out(errors));
        }

        // Address phase: one byte (the register selector), more to follow
        self.controller.begin_transfer(
            address,
            1,
            EndMode::Reload,
            StartCondition::Start,
            Direction::Write,
        );
        if !poll_until(|| self.controller.ready_to_transmit(), LONG_BUDGET) {
            return Err(Self::timed_out(errors));
        }

        self.controller.transmit(reg);
        if !poll_until(|| self.controller.transfer_complete(true), LONG_BUDGET) {
            return Err(Self::timed_out(errors));
        }

        // Data phase: payload burst, hardware issues the stop condition
        self.controller.begin_transfer(
            address,
            payload.len() as u8,
            EndMode::AutoEnd,
            StartCondition::None,
            Direction::Write,
        );
        for &byte in payload {
            if !poll_until(|| self.controller.ready_to_transmit(), LONG_BUDGET) {
                return Err(Self::timed_out(errors));
            }
            self.controller.transmit(byte);
        }

        if !poll_until(|| self.controller.stop_detected(), LONG_BUDGET) {
            return Err(Self::timed_out(errors));
        }
        self.controller.clear_stop();

        Ok(())
    }

    /// Single-byte register read
    pub fn read_register(
        &mut self,
        errors: &mut ErrorCounter,
        addr: u8,
        reg: u8,
    ) -> Result<u8, BusError> {
        let mut byte = [0u8; 1];
        self.read_registers(errors, addr, reg, &mut byte)?;
        Ok(byte[0])
    }

    /// Burst register read filling `buf`
    ///
    /// Writes the register selector under soft-end mode, turns the bus
    /// around with a repeated start, then receives `buf.len()` bytes in
    /// auto-end mode.
    pub fn read_registers(
        &mut self,
        errors: &mut ErrorCounter,
        addr: u8,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), BusError> {
        if buf.is_empty() {
            return Err(BusError::EmptyTransfer);
        }
        debug_assert!(buf.len() <= u8::MAX as usize);

        let address = addr << 1;

        if !poll_until(|| !self.controller.is_busy(), LONG_BUDGET) {
            return Err(Self::timed_out(errors));
        }

        // Address phase: soft-end so a repeated start can follow
        self.controller.begin_transfer(
            address,
            1,
            EndMode::SoftEnd,
            StartCondition::Start,
            Direction::Write,
        );
        if !poll_until(|| self.controller.ready_to_transmit(), LONG_BUDGET) {
            return Err(Self::timed_out(errors));
        }

        self.controller.transmit(reg);
        // Final byte of the write phase: the non-reload completion flag
        if !poll_until(|| self.controller.transfer_complete(false), LONG_BUDGET) {
            return Err(Self::timed_out(errors));
        }

        // Repeated start, read direction, hardware stops after the burst
        self.controller.begin_transfer(
            address,
            buf.len() as u8,
            EndMode::AutoEnd,
            StartCondition::Start,
            Direction::Read,
        );
        for slot in buf.iter_mut() {
            if !poll_until(|| self.controller.receive_ready(), SHORT_BUDGET) {
                return Err(Self::timed_out(errors));
            }
            *slot = self.controller.receive();
        }

        if !poll_until(|| self.controller.stop_detected(), LONG_BUDGET) {
            return Err(Self::timed_out(errors));
        }
        self.controller.clear_stop();

        Ok(())
    }
}
