//! The assembled machine: CPU, MMU and master clock.

use emu_core::{MasterClock, Observable, Tickable, Ticks, Value};
use sharp_sm83::{Sm83, StepError};

use crate::interrupt::Source;
use crate::joypad::Button;
use crate::memory::{LoadError, Mmu};

/// DMG crystal frequency in Hz.
pub const CRYSTAL_HZ: u64 = 4_194_304;

/// A Game Boy.
///
/// The CPU is the engine: each [`GameBoy::step`] runs one instruction,
/// then advances the peripherals and the elapsed-cycle clock by exactly
/// the cycles it consumed.
pub struct GameBoy {
    cpu: Sm83,
    bus: Mmu,
    clock: MasterClock,
}

impl GameBoy {
    /// A machine in the post-boot-ROM state with empty ROM.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cpu: Sm83::new(),
            bus: Mmu::new(),
            clock: MasterClock::new(CRYSTAL_HZ),
        }
    }

    /// Load a cartridge image into ROM.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the image is empty or does not fit.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.bus.load_rom(image)
    }

    /// Run one instruction (or service one interrupt).
    ///
    /// # Errors
    ///
    /// Propagates [`StepError`] from the CPU; the machine state up to the
    /// failing fetch is preserved, so a monitor can inspect it.
    pub fn step(&mut self) -> Result<Ticks, StepError> {
        let cycles = self.cpu.step(&mut self.bus)?;
        self.bus.tick_n(cycles);
        self.clock.advance(cycles);
        Ok(cycles)
    }

    /// Request an interrupt from outside the timer, e.g. a video or
    /// serial implementation layered on top.
    pub fn request_interrupt(&mut self, source: Source) {
        self.bus.interrupts.request(source);
    }

    /// Press a key.
    pub fn press(&mut self, button: Button) {
        self.bus.joypad.press(button, &mut self.bus.interrupts);
    }

    /// Release a key.
    pub fn release(&mut self, button: Button) {
        self.bus.joypad.release(button, &mut self.bus.interrupts);
    }

    /// Power-cycle everything except the cartridge ROM.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
        self.clock.reset();
    }

    #[must_use]
    pub fn cpu(&self) -> &Sm83 {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Sm83 {
        &mut self.cpu
    }

    #[must_use]
    pub fn bus(&self) -> &Mmu {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Mmu {
        &mut self.bus
    }

    /// Total cycles executed since power-on or reset.
    #[must_use]
    pub fn elapsed(&self) -> Ticks {
        self.clock.elapsed()
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl Observable for GameBoy {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "clock.elapsed" => Some(Value::U64(self.clock.elapsed().get())),
            "timer.div" => Some(Value::U8(self.bus.timer.div())),
            "timer.tima" => Some(Value::U8(self.bus.timer.tima())),
            "interrupts.ie" => Some(Value::U8(self.bus.interrupts.enabled())),
            "interrupts.if" => Some(Value::U8(self.bus.interrupts.flags())),
            _ => path.strip_prefix("cpu.").and_then(|rest| self.cpu.query(rest)),
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "clock.elapsed",
            "timer.div",
            "timer.tima",
            "interrupts.ie",
            "interrupts.if",
            "cpu.pc",
            "cpu.af",
            "cpu.bc",
            "cpu.de",
            "cpu.hl",
            "cpu.sp",
            "cpu.ime",
            "cpu.instruction",
        ]
    }
}
