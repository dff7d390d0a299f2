//! CPU core trait.

use crate::{Bus, Ticks};

/// A CPU core.
///
/// CPUs execute instructions and access memory through a bus. The bus is
/// passed in, not owned, so it can be shared with the peripherals that the
/// CPU's memory accesses have side effects on.
///
/// CPUs expose their internal state for observation and debugging.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// The error type returned when execution cannot continue.
    type Error;

    /// Execute one instruction (or service one interrupt) and report the
    /// number of master clock cycles it consumed.
    ///
    /// Execution faults such as undefined opcodes are returned as errors,
    /// never handled by terminating the process; the caller decides whether
    /// to stop, log, or recover.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the CPU fetched an instruction it cannot
    /// execute.
    fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Ticks, Self::Error>;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Returns true if the CPU is halted.
    fn is_halted(&self) -> bool;

    /// Reset the CPU to its power-on state.
    fn reset(&mut self);
}
