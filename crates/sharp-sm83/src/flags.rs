//! SM83 flag register bits.
//!
//! The SM83 has only four flags, packed into the high nibble of F. The low
//! nibble always reads as zero; every store to F goes through [`FLAG_MASK`].

/// Zero flag (bit 7) - set if result is zero.
pub const ZF: u8 = 0b1000_0000;

/// Subtract flag (bit 6) - set if last operation was subtraction.
pub const NF: u8 = 0b0100_0000;

/// Half-carry flag (bit 5) - carry from bit 3 to bit 4.
pub const HF: u8 = 0b0010_0000;

/// Carry flag (bit 4) - carry out of bit 7.
pub const CF: u8 = 0b0001_0000;

/// Only the high nibble of F is implemented in hardware.
pub const FLAG_MASK: u8 = 0xF0;
