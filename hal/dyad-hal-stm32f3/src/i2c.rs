//! I2C peripheral support for STM32F3
//!
//! Default pin assignments and error mapping for the two hardware I2C
//! instances the Dyad engine is typically wired to on F3 boards.

use dyad_hal::timing::TimingProfile;
use embassy_stm32::i2c::Error as I2cError;

/// Default pin assignment for one I2C instance
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cPins {
    /// Clock line, e.g. "PB6"
    pub scl: &'static str,
    /// Data line, e.g. "PB7"
    pub sda: &'static str,
}

/// Default pins for I2C1 (SCL=PB6, SDA=PB7)
pub const I2C1_PINS: I2cPins = I2cPins {
    scl: "PB6",
    sda: "PB7",
};

/// Default pins for I2C2 (SCL=PF4, SDA=PA10)
pub const I2C2_PINS: I2cPins = I2cPins {
    scl: "PF4",
    sda: "PA10",
};

/// Per-instance configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Pin assignment
    pub pins: I2cPins,
    /// Run this instance at 1 MHz instead of 400 kHz
    pub overclocked: bool,
}

impl I2cConfig {
    /// Timing register value for this configuration
    pub const fn timing(&self) -> TimingProfile {
        TimingProfile::preset(self.overclocked)
    }
}

// Firmware that wants interrupt-driven transfers instead of the polled
// Dyad engine can drive embassy's own I2C; this mapping lets both report
// through one error type.

/// Fault reported by the F3 I2C peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralFault {
    /// Misplaced start/stop on the bus
    Bus,
    /// Lost arbitration against another master
    Arbitration,
    /// Address or data byte not acknowledged
    Nack,
    /// Peripheral-level timeout (SCL held low)
    Timeout,
    /// Packet checksum mismatch (SMBus mode)
    Crc,
    /// Receive overrun / transmit underrun
    Overrun,
    /// Anything the peripheral cannot classify
    Other,
}

impl From<I2cError> for PeripheralFault {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Bus => Self::Bus,
            I2cError::Arbitration => Self::Arbitration,
            I2cError::Nack => Self::Nack,
            I2cError::Timeout => Self::Timeout,
            I2cError::Crc => Self::Crc,
            I2cError::Overrun => Self::Overrun,
            _ => Self::Other,
        }
    }
}
