//! Game Boy (DMG) machine emulation.
//!
//! Wires a Sharp SM83 CPU to the DMG memory map: cartridge ROM, video and
//! work RAM, the divider/timer unit, the joypad and the interrupt
//! controller. The machine advances one CPU instruction at a time, with
//! peripherals catching up by exactly the cycles the instruction took.

mod gameboy;
mod interrupt;
mod joypad;
mod memory;
mod timer;

pub use gameboy::{CRYSTAL_HZ, GameBoy};
pub use interrupt::{InterruptController, Source};
pub use joypad::{Button, Joypad};
pub use memory::{LoadError, Mmu};
pub use timer::Timer;
