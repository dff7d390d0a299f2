//! Memory bus interface.

/// Value returned for reads that hit nothing: unmapped addresses, holes in
/// the I/O window, write-only registers. The data lines float high on real
/// hardware, so programs probing for devices see 0xFF.
pub const OPEN_BUS: u8 = 0xFF;

/// Memory bus interface.
///
/// Components access memory and memory-mapped peripherals through this
/// trait. The bus performs all address decoding; no address is ever an
/// error. Reads of unmapped addresses return [`OPEN_BUS`] and writes to
/// unmapped or read-only addresses are dropped.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Read a 16-bit little-endian word.
    fn read_word(&mut self, address: u16) -> u16 {
        let lo = self.read(address);
        let hi = self.read(address.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Write a 16-bit word, low byte first.
    fn write_word(&mut self, address: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(address, lo);
        self.write(address.wrapping_add(1), hi);
    }
}

/// Flat 64 KiB RAM with no decoding or side effects.
///
/// Backs CPU unit tests, where the memory map of a real machine would only
/// get in the way.
pub struct SimpleBus {
    ram: Box<[u8; 0x1_0000]>,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x1_0000]),
        }
    }

    /// Copy `bytes` into RAM starting at `address`.
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.ram[address as usize + i] = byte;
        }
    }

    /// Inspect RAM without going through the bus.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }
}
