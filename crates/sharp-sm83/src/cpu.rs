//! SM83 CPU core and step engine.

use std::fmt;

use emu_core::{Bus, Observable, Ticks, Value};

use crate::flags::{CF, HF, NF, ZF};
use crate::opcodes::{CB_OPCODES, OPCODES};
use crate::registers::Registers;

/// Address of the interrupt enable register.
const IE: u16 = 0xFFFF;

/// Address of the interrupt flag register.
const IF: u16 = 0xFF0F;

/// Only five interrupt sources exist; the upper bits of IE/IF are unused.
const INT_MASK: u8 = 0x1F;

/// Error returned when execution cannot continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// The CPU fetched one of the eleven opcodes the SM83 does not decode.
    /// On hardware this locks up the CPU.
    UndefinedOpcode { pc: u16, opcode: u8 },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::UndefinedOpcode { pc, opcode } => {
                write!(f, "undefined opcode {opcode:#04X} at {pc:#06X}")
            }
        }
    }
}

impl std::error::Error for StepError {}

/// Sharp SM83 CPU.
///
/// `step()` executes one instruction at a time and reports its cost in
/// master clock cycles. Interrupt dispatch happens between instructions,
/// before the next fetch.
#[derive(Debug, Clone)]
pub struct Sm83 {
    pub regs: Registers,
    /// Interrupt master enable.
    ime: bool,
    /// Set by EI; IME turns on after the following instruction completes.
    ime_pending: bool,
    halted: bool,
    stopped: bool,
    /// Set by a handler when its condition passed, selecting the longer
    /// cycle count for the instruction.
    branch_taken: bool,
    last_pc: u16,
    last_mnemonic: &'static str,
    last_operand: u16,
}

impl Sm83 {
    /// CPU as the boot ROM leaves it: registers per [`Registers::new`],
    /// interrupts disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            ime: false,
            ime_pending: false,
            halted: false,
            stopped: false,
            branch_taken: false,
            last_pc: 0x0100,
            last_mnemonic: "",
            last_operand: 0,
        }
    }

    /// Execute one instruction, or dispatch one interrupt, and return the
    /// cycles consumed.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UndefinedOpcode`] when the fetched byte is not
    /// an SM83 instruction. The caller decides whether to stop or log;
    /// state up to and including the fetch is preserved.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Ticks, StepError> {
        if let Some(cost) = self.service_interrupt(bus) {
            return Ok(cost);
        }
        if self.halted || self.stopped {
            // Idle; peripherals still need cycles to advance against.
            return Ok(Ticks::new(4));
        }

        // EI takes effect after the instruction that follows it, so the
        // decision is made from the state before this instruction runs.
        let enable_after = self.ime_pending;

        self.last_pc = self.regs.pc;
        let first = self.fetch(bus);

        let (opcode, op) = if first == 0xCB {
            let cb = self.fetch(bus);
            (&CB_OPCODES[cb as usize], cb)
        } else if let Some(opcode) = &OPCODES[first as usize] {
            (opcode, first)
        } else {
            return Err(StepError::UndefinedOpcode {
                pc: self.last_pc,
                opcode: first,
            });
        };

        let operand = match opcode.operand_bytes {
            1 => u16::from(self.fetch(bus)),
            2 => self.fetch16(bus),
            _ => 0,
        };
        self.last_mnemonic = opcode.mnemonic;
        self.last_operand = operand;

        self.branch_taken = false;
        (opcode.exec)(self, bus, op, operand);

        if enable_after && self.ime_pending {
            self.ime = true;
            self.ime_pending = false;
        }

        let cycles = if self.branch_taken {
            opcode.cycles_taken
        } else {
            opcode.cycles
        };
        Ok(Ticks::new(u64::from(cycles)))
    }

    /// Dispatch the highest-priority pending interrupt, if any.
    ///
    /// A pending interrupt always wakes the CPU from HALT or STOP, but is
    /// only dispatched when IME is set. Bit 0 (VBlank) has the highest
    /// priority.
    fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<Ticks> {
        let enabled = bus.read(IE);
        let requested = bus.read(IF);
        let pending = enabled & requested & INT_MASK;
        if pending == 0 {
            return None;
        }

        self.halted = false;
        self.stopped = false;
        if !self.ime {
            return None;
        }

        self.ime = false;
        self.ime_pending = false;

        #[allow(clippy::cast_possible_truncation)]
        let source = pending.trailing_zeros() as u8;
        bus.write(IF, requested & !(1 << source));
        self.push16(bus, self.regs.pc);
        self.regs.pc = 0x0040 + u16::from(source) * 8;

        Some(Ticks::new(20))
    }

    /// Reset to the power-on state. Memory is untouched.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn fetch<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read_word(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        value
    }

    /// Push a word: SP drops by two, then low byte lands at the new SP.
    pub(crate) fn push16(&mut self, bus: &mut dyn Bus, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        bus.write_word(self.regs.sp, value);
    }

    /// Pop a word from the stack.
    pub(crate) fn pop16(&mut self, bus: &mut dyn Bus) -> u16 {
        let value = bus.read_word(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    /// Read the 8-bit register selected by a 3-bit instruction field.
    /// Index 6 is the memory operand (HL).
    pub(crate) fn get_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index & 7 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Write the 8-bit register selected by a 3-bit instruction field.
    pub(crate) fn set_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 7 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// Register pair for the rp group: BC, DE, HL, SP.
    pub(crate) fn get_rp(&self, index: u8) -> u16 {
        match index & 3 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    pub(crate) fn set_rp(&mut self, index: u8, value: u16) {
        match index & 3 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// Register pair for the push/pop group: BC, DE, HL, AF.
    pub(crate) fn get_rp2(&self, index: u8) -> u16 {
        match index & 3 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        }
    }

    pub(crate) fn set_rp2(&mut self, index: u8, value: u16) {
        match index & 3 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.set_af(value),
        }
    }

    /// Evaluate the condition selected by a 2-bit instruction field:
    /// NZ, Z, NC, C.
    pub(crate) fn condition(&self, index: u8) -> bool {
        match index & 3 {
            0 => self.regs.f & ZF == 0,
            1 => self.regs.f & ZF != 0,
            2 => self.regs.f & CF == 0,
            _ => self.regs.f & CF != 0,
        }
    }

    pub(crate) fn set_halted(&mut self) {
        self.halted = true;
    }

    pub(crate) fn set_stopped(&mut self) {
        self.stopped = true;
    }

    pub(crate) fn enable_interrupts_delayed(&mut self) {
        self.ime_pending = true;
    }

    pub(crate) fn enable_interrupts_now(&mut self) {
        self.ime = true;
    }

    pub(crate) fn disable_interrupts(&mut self) {
        self.ime = false;
        self.ime_pending = false;
    }

    pub(crate) fn take_branch(&mut self) {
        self.branch_taken = true;
    }

    /// True while the CPU is in HALT.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// True while the CPU is in STOP.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Interrupt master enable.
    #[must_use]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// The address of the last instruction fetched.
    #[must_use]
    pub fn last_pc(&self) -> u16 {
        self.last_pc
    }

    /// Disassembly of the last executed instruction, with its operand.
    #[must_use]
    pub fn last_instruction(&self) -> String {
        let mnemonic = self.last_mnemonic;
        if mnemonic.is_empty() {
            return String::new();
        }
        if let Some(prefix) = mnemonic.strip_suffix("nn") {
            format!("{prefix}{:#06X}", self.last_operand)
        } else if let Some(prefix) = mnemonic.strip_suffix('n') {
            format!("{prefix}{:#04X}", self.last_operand)
        } else {
            mnemonic.to_string()
        }
    }

    /// Force IME for tests that exercise interrupt dispatch directly.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;
    }
}

impl Default for Sm83 {
    fn default() -> Self {
        Self::new()
    }
}

impl emu_core::Cpu for Sm83 {
    type Registers = Registers;
    type Error = StepError;

    fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Ticks, StepError> {
        Sm83::step(self, bus)
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Registers {
        self.regs
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn reset(&mut self) {
        Sm83::reset(self);
    }
}

impl Observable for Sm83 {
    fn query(&self, path: &str) -> Option<Value> {
        let value = match path {
            "a" => Value::U8(self.regs.a),
            "f" => Value::U8(self.regs.f),
            "b" => Value::U8(self.regs.b),
            "c" => Value::U8(self.regs.c),
            "d" => Value::U8(self.regs.d),
            "e" => Value::U8(self.regs.e),
            "h" => Value::U8(self.regs.h),
            "l" => Value::U8(self.regs.l),
            "af" => Value::U16(self.regs.af()),
            "bc" => Value::U16(self.regs.bc()),
            "de" => Value::U16(self.regs.de()),
            "hl" => Value::U16(self.regs.hl()),
            "sp" => Value::U16(self.regs.sp),
            "pc" => Value::U16(self.regs.pc),
            "ime" => Value::Bool(self.ime),
            "halted" => Value::Bool(self.halted),
            "stopped" => Value::Bool(self.stopped),
            "flags.z" => Value::Bool(self.regs.f & ZF != 0),
            "flags.n" => Value::Bool(self.regs.f & NF != 0),
            "flags.h" => Value::Bool(self.regs.f & HF != 0),
            "flags.c" => Value::Bool(self.regs.f & CF != 0),
            "instruction" => Value::String(self.last_instruction()),
            _ => return None,
        };
        Some(value)
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "a",
            "f",
            "b",
            "c",
            "d",
            "e",
            "h",
            "l",
            "af",
            "bc",
            "de",
            "hl",
            "sp",
            "pc",
            "ime",
            "halted",
            "stopped",
            "flags.z",
            "flags.n",
            "flags.h",
            "flags.c",
            "instruction",
        ]
    }
}
