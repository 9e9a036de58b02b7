//! Device registry and caller-facing entry points
//!
//! Maps logical device identifiers onto buses. The table reflects fixed
//! board topology and is built once at configuration time; the only
//! runtime-mutable pieces are the active-device slot and the shared
//! timeout counter.

use dyad_hal::{BusBootstrap, BusController};

use crate::error::{BusError, ErrorCounter};
use crate::transaction::Bus;

/// Logical device identifier: index into the registry's bus table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId(usize);

impl DeviceId {
    /// First bus instance
    pub const BUS1: Self = Self(0);
    /// Second bus instance
    pub const BUS2: Self = Self(1);

    /// Identifier for the bus at `index` in the registry table
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Table index
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Fixed bus table plus the active-device shorthand slot
///
/// Owns the process-wide timeout counter so transactions on every bus
/// accumulate into one diagnostics value. Holding counter and buses in a
/// single owner replaces the free-floating globals a C rendition of this
/// engine would use.
pub struct DeviceRegistry<C: BusController, const N: usize> {
    buses: [Bus<C>; N],
    active: Option<DeviceId>,
    errors: ErrorCounter,
}

impl<C: BusController, const N: usize> DeviceRegistry<C, N> {
    /// Build the registry from the board's bus topology
    pub fn new(buses: [Bus<C>; N]) -> Self {
        Self {
            buses,
            active: None,
            errors: ErrorCounter::new(),
        }
    }

    /// One-time bring-up of `id`, which becomes the active device for the
    /// shorthand entry points
    pub fn initialize(&mut self, id: DeviceId) -> Result<(), BusError>
    where
        C: BusBootstrap,
    {
        let bus = self
            .buses
            .get_mut(id.index())
            .ok_or(BusError::UnknownDevice)?;
        bus.initialize();
        self.active = Some(id);
        Ok(())
    }

    /// Currently selected device, if any
    pub fn active_device(&self) -> Option<DeviceId> {
        self.active
    }

    /// Total timed-out transactions across all buses
    pub fn error_count(&self) -> u16 {
        self.errors.count()
    }

    /// Read-only access to a bus controller (diagnostics)
    pub fn controller(&self, id: DeviceId) -> Option<&C> {
        self.buses.get(id.index()).map(Bus::controller)
    }

    /// Single-byte register write on an explicit device
    pub fn write_by_device(
        &mut self,
        id: DeviceId,
        addr: u8,
        reg: u8,
        data: u8,
    ) -> Result<(), BusError> {
        let bus = self
            .buses
            .get_mut(id.index())
            .ok_or(BusError::UnknownDevice)?;
        bus.write_register(&mut self.errors, addr, reg, data)
    }

    /// Buffer register write on an explicit device
    pub fn write_buffer_by_device(
        &mut self,
        id: DeviceId,
        addr: u8,
        reg: u8,
        payload: &[u8],
    ) -> Result<(), BusError> {
        let bus = self
            .buses
            .get_mut(id.index())
            .ok_or(BusError::UnknownDevice)?;
        bus.write_registers(&mut self.errors, addr, reg, payload)
    }

    /// Burst register read on an explicit device
    pub fn read_by_device(
        &mut self,
        id: DeviceId,
        addr: u8,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), BusError> {
        let bus = self
            .buses
            .get_mut(id.index())
            .ok_or(BusError::UnknownDevice)?;
        bus.read_registers(&mut self.errors, addr, reg, buf)
    }

    /// Single-byte register write on the active device
    pub fn write(&mut self, addr: u8, reg: u8, data: u8) -> Result<(), BusError> {
        let id = self.active.ok_or(BusError::UnknownDevice)?;
        self.write_by_device(id, addr, reg, data)
    }

    /// Buffer register write on the active device
    pub fn write_buffer(&mut self, addr: u8, reg: u8, payload: &[u8]) -> Result<(), BusError> {
        let id = self.active.ok_or(BusError::UnknownDevice)?;
        self.write_buffer_by_device(id, addr, reg, payload)
    }

    /// Burst register read on the active device
    pub fn read(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), BusError> {
        let id = self.active.ok_or(BusError::UnknownDevice)?;
        self.read_by_device(id, addr, reg, buf)
    }
}
