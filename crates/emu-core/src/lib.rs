//! Core traits and types for cycle-accurate emulation.
//!
//! Every component is driven by counts of master-crystal cycles. The CPU
//! reports how many cycles each instruction consumed; peripherals advance
//! by exactly that amount. Nothing runs on wall-clock time.

mod bus;
mod clock;
mod cpu;
mod observable;
mod tickable;
mod ticks;

pub use bus::{Bus, OPEN_BUS, SimpleBus};
pub use clock::MasterClock;
pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use tickable::Tickable;
pub use ticks::Ticks;
