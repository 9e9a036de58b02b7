//! Bus timing profiles
//!
//! A timing profile is an opaque bit pattern for the peripheral's timing
//! register: clock divider plus rise/fall/setup/hold fields for one target
//! bus frequency. Profiles are chosen once at initialization and never
//! changed at runtime; the engine performs no frequency computation.

/// Preset timing register value for one bus frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingProfile(u32);

impl TimingProfile {
    /// 400 kHz, 72 MHz kernel clock, analog filter on, rise 100 ns, fall 10 ns
    pub const STANDARD: Self = Self(0x00E0_257A);

    /// 1 MHz, 72 MHz kernel clock, analog filter on, setup 40 ns, hold 4 ns
    pub const OVERCLOCKED: Self = Self(0x0050_0E30);

    /// Wrap a raw timing register value
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw timing register value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Select the preset for a bus from its static overclock flag
    pub const fn preset(overclocked: bool) -> Self {
        if overclocked {
            Self::OVERCLOCKED
        } else {
            Self::STANDARD
        }
    }
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::STANDARD
    }
}
