//! Interrupt controller: the IE (0xFFFF) and IF (0xFF0F) registers.
//!
//! The controller only holds the enable and request masks. The master
//! enable (IME) lives in the CPU, which reads both registers over the bus
//! when deciding whether to dispatch.

/// An interrupt source, in priority order. Lower bits win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Source {
    /// Bit position in the IE and IF registers.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Source::VBlank => 0,
            Source::LcdStat => 1,
            Source::Timer => 2,
            Source::Serial => 3,
            Source::Joypad => 4,
        }
    }

    /// Dispatch vector for this source.
    #[must_use]
    pub const fn vector(self) -> u16 {
        0x0040 + self.bit() as u16 * 8
    }
}

/// Interrupt enable and request masks.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterruptController {
    enabled: u8,
    requested: u8,
}

impl InterruptController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: 0,
            requested: 0,
        }
    }

    /// Raise the request bit for `source`.
    pub fn request(&mut self, source: Source) {
        self.requested |= 1 << source.bit();
    }

    /// Sources that are both requested and enabled.
    #[must_use]
    pub const fn pending(&self) -> u8 {
        self.enabled & self.requested & 0x1F
    }

    /// The highest-priority source that is both requested and enabled.
    #[must_use]
    pub const fn pending_source(&self) -> Option<Source> {
        let pending = self.pending();
        if pending == 0 {
            return None;
        }
        Some(match pending.trailing_zeros() {
            0 => Source::VBlank,
            1 => Source::LcdStat,
            2 => Source::Timer,
            3 => Source::Serial,
            _ => Source::Joypad,
        })
    }

    /// Clear the request bit for a dispatched source.
    pub fn acknowledge(&mut self, source: Source) {
        self.requested &= !(1 << source.bit());
    }

    /// IE register value.
    #[must_use]
    pub const fn enabled(&self) -> u8 {
        self.enabled
    }

    pub fn set_enabled(&mut self, value: u8) {
        self.enabled = value;
    }

    /// IF register value. The unused top bits read back as ones.
    #[must_use]
    pub const fn flags(&self) -> u8 {
        0xE0 | self.requested
    }

    pub fn set_flags(&mut self, value: u8) {
        self.requested = value & 0x1F;
    }
}
