//! Transaction errors and the timeout diagnostics counter

use embedded_hal::i2c;

/// Errors returned by the transaction engine
///
/// Only [`BusError::Timeout`] reflects a failed bus transaction and is
/// diagnostics-counted; the other variants are argument validation and
/// never touch the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// A phase's bounded wait exhausted its budget
    ///
    /// Device not present, bus locked up and bit errors all surface this
    /// way; the hardware offers no way to tell them apart. The bus is
    /// left wherever the hardware reached; the next transaction's
    /// bus-free wait resynchronizes it.
    Timeout,
    /// Zero-length read buffer or write payload
    EmptyTransfer,
    /// Device id not in the registry, or shorthand used before a device
    /// was selected
    UnknownDevice,
}

impl i2c::Error for BusError {
    fn kind(&self) -> i2c::ErrorKind {
        i2c::ErrorKind::Other
    }
}

/// Monotonic count of timed-out transactions
///
/// Zero at startup, incremented only when a transaction phase times out,
/// never reset. Wraps per `u16` arithmetic. Reading is non-destructive
/// and always permitted; a read racing an increment observes either the
/// pre- or post-increment value, nothing stronger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorCounter(u16);

impl ErrorCounter {
    /// Counter starting at zero
    pub const fn new() -> Self {
        Self(0)
    }

    /// Record one timed-out transaction
    pub fn record_timeout(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Current count
    pub const fn count(&self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_accumulates() {
        let mut counter = ErrorCounter::new();
        assert_eq!(counter.count(), 0);

        counter.record_timeout();
        counter.record_timeout();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_counter_wraps() {
        let mut counter = ErrorCounter::new();
        for _ in 0..u16::MAX {
            counter.record_timeout();
        }
        assert_eq!(counter.count(), u16::MAX);

        counter.record_timeout();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_error_kind() {
        use embedded_hal::i2c::Error;
        assert_eq!(
            BusError::Timeout.kind(),
            embedded_hal::i2c::ErrorKind::Other
        );
    }
}
