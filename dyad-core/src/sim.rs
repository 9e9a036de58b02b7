//! Simulated bus controller for engine tests
//!
//! Asserts its status flags in the order the protocol models them and
//! records everything the engine does to it. A single wait point can be
//! configured to stall forever to exercise the timeout paths.

use core::cell::Cell;

use dyad_hal::{
    BusBootstrap, BusController, Direction, EndMode, StartCondition, TimingProfile,
};
use heapless::Vec;

/// Wait points the simulation can be told never to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stall {
    BusFree,
    ReadyToTransmit,
    TransferComplete,
    StopDetected,
    ReceiveReady,
}

/// One `begin_transfer` call as observed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub address: u8,
    pub count: u8,
    pub end_mode: EndMode,
    pub start: StartCondition,
    pub direction: Direction,
}

/// Bring-up steps as observed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    Clock,
    Pins,
    Timing(TimingProfile),
}

/// Simulated master-mode controller
pub struct SimController {
    stall: Option<Stall>,
    /// Busy-flag polls remaining before the bus reports free
    busy_polls: Cell<u32>,
    rx: Vec<u8, 32>,
    rx_cursor: usize,
    /// Observed transfer configurations
    pub transfers: Vec<Transfer, 8>,
    /// Observed transmitted bytes
    pub sent: Vec<u8, 32>,
    /// Observed `clear_stop` calls
    pub stops_cleared: usize,
    /// Observed bring-up steps, in order
    pub bootstrap_log: Vec<BootstrapStep, 4>,
}

impl SimController {
    /// Controller whose flags all assert on the first poll
    pub fn new() -> Self {
        Self {
            stall: None,
            busy_polls: Cell::new(0),
            rx: Vec::new(),
            rx_cursor: 0,
            transfers: Vec::new(),
            sent: Vec::new(),
            stops_cleared: 0,
            bootstrap_log: Vec::new(),
        }
    }

    /// Controller that will deliver `bytes` during receive phases
    pub fn with_rx(bytes: &[u8]) -> Self {
        let mut sim = Self::new();
        sim.rx.extend_from_slice(bytes).unwrap();
        sim
    }

    /// Controller that never satisfies the given wait point
    pub fn stalled_at(stall: Stall) -> Self {
        let mut sim = Self::new();
        sim.stall = Some(stall);
        sim
    }

    /// Report busy for the next `polls` busy-flag polls
    pub fn set_busy_polls(&mut self, polls: u32) {
        self.busy_polls.set(polls);
    }

    fn stalled(&self, at: Stall) -> bool {
        self.stall == Some(at)
    }
}

impl BusController for SimController {
    fn is_busy(&self) -> bool {
        if self.stalled(Stall::BusFree) {
            return true;
        }
        let remaining = self.busy_polls.get();
        if remaining > 0 {
            self.busy_polls.set(remaining - 1);
            return true;
        }
        false
    }

    fn ready_to_transmit(&self) -> bool {
        !self.stalled(Stall::ReadyToTransmit)
    }

    fn transfer_complete(&self, _reload_expected: bool) -> bool {
        !self.stalled(Stall::TransferComplete)
    }

    fn stop_detected(&self) -> bool {
        !self.stalled(Stall::StopDetected)
    }

    fn receive_ready(&self) -> bool {
        !self.stalled(Stall::ReceiveReady) && self.rx_cursor < self.rx.len()
    }

    fn begin_transfer(
        &mut self,
        address: u8,
        count: u8,
        end_mode: EndMode,
        start: StartCondition,
        direction: Direction,
    ) {
        self.transfers
            .push(Transfer {
                address,
                count,
                end_mode,
                start,
                direction,
            })
            .unwrap();
    }

    fn transmit(&mut self, byte: u8) {
        self.sent.push(byte).unwrap();
    }

    fn receive(&mut self) -> u8 {
        let byte = self.rx[self.rx_cursor];
        self.rx_cursor += 1;
        byte
    }

    fn clear_stop(&mut self) {
        self.stops_cleared += 1;
    }
}

impl BusBootstrap for SimController {
    fn enable_clock(&mut self) {
        self.bootstrap_log.push(BootstrapStep::Clock).unwrap();
    }

    fn configure_pins(&mut self) {
        self.bootstrap_log.push(BootstrapStep::Pins).unwrap();
    }

    fn apply_timing(&mut self, profile: TimingProfile) {
        self.bootstrap_log
            .push(BootstrapStep::Timing(profile))
            .unwrap();
    }
}
