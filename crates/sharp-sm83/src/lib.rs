//! Cycle-counted Sharp SM83 CPU emulator.
//!
//! The SM83 is the 8-bit core of the Game Boy: a Z80-flavoured instruction
//! set with only four flags, no index registers and no I/O port space. Each
//! call to `step()` executes one instruction (or services one interrupt)
//! and reports the master clock cycles consumed.

mod alu;
mod cpu;
mod execute;
mod flags;
mod opcodes;
mod registers;

pub use cpu::{Sm83, StepError};
pub use flags::{CF, FLAG_MASK, HF, NF, ZF};
pub use opcodes::{CB_OPCODES, ExecFn, OPCODES, Opcode};
pub use registers::Registers;
