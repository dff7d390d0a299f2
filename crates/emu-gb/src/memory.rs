//! DMG memory map and memory-mapped I/O.
//!
//! Memory map:
//! - `0x0000-0x7FFF` Cartridge ROM (writes dropped; no banking)
//! - `0x8000-0x9FFF` Video RAM
//! - `0xA000-0xBFFF` External cartridge RAM
//! - `0xC000-0xDFFF` Work RAM
//! - `0xE000-0xFDFF` Echo of work RAM
//! - `0xFE00-0xFE9F` Object attribute memory
//! - `0xFEA0-0xFEFF` Unusable (reads open bus)
//! - `0xFF00-0xFF7F` I/O registers
//! - `0xFF80-0xFFFE` High RAM
//! - `0xFFFF`        Interrupt enable

use std::fmt;

use emu_core::{Bus, OPEN_BUS, Tickable, Ticks};

use crate::interrupt::InterruptController;
use crate::joypad::Joypad;
use crate::timer::Timer;

const ROM_SIZE: usize = 0x8000;

/// Error loading a cartridge image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The image is empty.
    Empty,
    /// The image does not fit in the 32 KiB ROM window.
    TooLarge { size: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Empty => write!(f, "cartridge image is empty"),
            LoadError::TooLarge { size } => {
                write!(f, "cartridge image is {size} bytes, larger than {ROM_SIZE}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// The memory management unit.
///
/// Owns every addressable component and performs all address decoding.
/// No address is ever an error: unusable regions read [`OPEN_BUS`] and
/// writes to ROM or holes are dropped.
pub struct Mmu {
    rom: Box<[u8; ROM_SIZE]>,
    vram: Box<[u8; 0x2000]>,
    eram: Box<[u8; 0x2000]>,
    wram: Box<[u8; 0x2000]>,
    oam: [u8; 0xA0],
    /// Backing store for I/O registers without dedicated hardware here
    /// (serial, sound, video). They hold written values.
    io: [u8; 0x80],
    hram: [u8; 0x7F],
    pub timer: Timer,
    pub interrupts: InterruptController,
    pub joypad: Joypad,
}

impl Mmu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rom: Box::new([0; ROM_SIZE]),
            vram: Box::new([0; 0x2000]),
            eram: Box::new([0; 0x2000]),
            wram: Box::new([0; 0x2000]),
            oam: [0; 0xA0],
            io: [0; 0x80],
            hram: [0; 0x7F],
            timer: Timer::new(),
            interrupts: InterruptController::new(),
            joypad: Joypad::new(),
        }
    }

    /// Copy a cartridge image into ROM, starting at 0x0000.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the image is empty or larger than the
    /// 32 KiB ROM window.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.is_empty() {
            return Err(LoadError::Empty);
        }
        if image.len() > ROM_SIZE {
            return Err(LoadError::TooLarge { size: image.len() });
        }
        self.rom[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Clear all RAM and peripheral state, keeping the loaded ROM.
    pub fn reset(&mut self) {
        self.vram.fill(0);
        self.eram.fill(0);
        self.wram.fill(0);
        self.oam.fill(0);
        self.io.fill(0);
        self.hram.fill(0);
        self.timer = Timer::new();
        self.interrupts = InterruptController::new();
        self.joypad = Joypad::new();
    }

    /// Read an I/O register (0xFF00-0xFF7F).
    ///
    /// Registers owned here (joypad, timer, IF) answer from their
    /// hardware; registers belonging to external collaborators (serial,
    /// sound, video) return whatever was last written; holes with no
    /// register behind them read open bus.
    #[must_use]
    pub fn read_io(&self, address: u16) -> u8 {
        match address {
            0xFF00 => self.joypad.read(),
            0xFF04 => self.timer.div(),
            0xFF05 => self.timer.tima(),
            0xFF06 => self.timer.tma(),
            0xFF07 => self.timer.tac(),
            0xFF0F => self.interrupts.flags(),
            0xFF03 | 0xFF08..=0xFF0E | 0xFF4C..=0xFF7F => OPEN_BUS,
            _ => self.io[(address & 0x7F) as usize],
        }
    }

    /// Write an I/O register (0xFF00-0xFF7F), running its side effect.
    pub fn write_io(&mut self, address: u16, value: u8) {
        match address {
            0xFF00 => self.joypad.write(value),
            0xFF04 => self.timer.reset_div(),
            0xFF05 => self.timer.set_tima(value),
            0xFF06 => self.timer.set_tma(value),
            0xFF07 => self.timer.set_tac(value),
            0xFF0F => self.interrupts.set_flags(value),
            0xFF03 | 0xFF08..=0xFF0E | 0xFF4C..=0xFF7F => {}
            _ => self.io[(address & 0x7F) as usize] = value,
        }
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Mmu {
    fn read(&mut self, address: u16) -> u8 {
        match address {
            0x0000..=0x7FFF => self.rom[address as usize],
            0x8000..=0x9FFF => self.vram[(address & 0x1FFF) as usize],
            0xA000..=0xBFFF => self.eram[(address & 0x1FFF) as usize],
            0xC000..=0xDFFF | 0xE000..=0xFDFF => self.wram[(address & 0x1FFF) as usize],
            0xFE00..=0xFE9F => self.oam[(address & 0xFF) as usize],
            0xFEA0..=0xFEFF => OPEN_BUS,
            0xFF00..=0xFF7F => self.read_io(address),
            0xFF80..=0xFFFE => self.hram[(address & 0x7F) as usize],
            0xFFFF => self.interrupts.enabled(),
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        match address {
            // ROM is not writable; banking hardware would live here.
            0x0000..=0x7FFF | 0xFEA0..=0xFEFF => {}
            0x8000..=0x9FFF => self.vram[(address & 0x1FFF) as usize] = value,
            0xA000..=0xBFFF => self.eram[(address & 0x1FFF) as usize] = value,
            0xC000..=0xDFFF | 0xE000..=0xFDFF => self.wram[(address & 0x1FFF) as usize] = value,
            0xFE00..=0xFE9F => self.oam[(address & 0xFF) as usize] = value,
            0xFF00..=0xFF7F => self.write_io(address, value),
            0xFF80..=0xFFFE => self.hram[(address & 0x7F) as usize] = value,
            0xFFFF => self.interrupts.set_enabled(value),
        }
    }
}

impl Tickable for Mmu {
    fn tick(&mut self) {
        self.timer.step(1, &mut self.interrupts);
    }

    fn tick_n(&mut self, count: Ticks) {
        #[allow(clippy::cast_possible_truncation)]
        self.timer.step(count.get() as u32, &mut self.interrupts);
    }
}
