//! Master clock: crystal frequency plus elapsed-cycle accounting.

use crate::Ticks;

/// The master clock of a system.
///
/// A thin cycle accumulator: the driver reports every instruction's cycle
/// cost here, and hosts or test harnesses query the running total. Nothing
/// in the emulation core reads the clock back; it exists for elapsed-time
/// queries only.
#[derive(Debug, Clone, Copy)]
pub struct MasterClock {
    frequency_hz: u64,
    elapsed: Ticks,
}

impl MasterClock {
    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self {
            frequency_hz,
            elapsed: Ticks::ZERO,
        }
    }

    /// Crystal frequency in Hz.
    #[must_use]
    pub const fn frequency_hz(&self) -> u64 {
        self.frequency_hz
    }

    /// Record `ticks` elapsed cycles.
    pub fn advance(&mut self, ticks: Ticks) {
        self.elapsed += ticks;
    }

    /// Total cycles recorded since power-on or the last reset.
    #[must_use]
    pub const fn elapsed(&self) -> Ticks {
        self.elapsed
    }

    /// Elapsed emulated time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.get() as f64 / self.frequency_hz as f64
    }

    /// Clear the accumulator.
    pub fn reset(&mut self) {
        self.elapsed = Ticks::ZERO;
    }
}
