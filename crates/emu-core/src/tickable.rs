//! Trait for components that can be advanced by clock ticks.

use crate::Ticks;

/// A component that can be advanced by clock ticks.
///
/// Peripherals (timers, I/O controllers) implement this trait and are
/// advanced by exactly the number of cycles the CPU just consumed, keeping
/// the whole machine in lockstep with the master clock.
pub trait Tickable {
    /// Advance the component by one master clock tick.
    fn tick(&mut self);

    /// Advance the component by multiple ticks.
    ///
    /// Default implementation calls `tick()` in a loop. Components may
    /// override for efficiency, but must produce identical results.
    fn tick_n(&mut self, count: Ticks) {
        for _ in 0..count.get() {
            self.tick();
        }
    }
}
