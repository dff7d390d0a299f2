//! Instruction execution for the SM83.
//!
//! Each handler covers one row of the opcode matrix and decodes the
//! register, pair or condition field from the opcode byte itself. The
//! dispatch tables in [`crate::opcodes`] carry the per-opcode mnemonic,
//! operand length and cycle counts; handlers never adjust PC for operands.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use emu_core::Bus;

use crate::alu;
use crate::cpu::Sm83;
use crate::flags::{CF, HF, NF, ZF};

// =========================================================================
// Control
// =========================================================================

pub(crate) fn nop(_cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {}

pub(crate) fn stop(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.set_stopped();
}

pub(crate) fn halt(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.set_halted();
}

pub(crate) fn di(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.disable_interrupts();
}

pub(crate) fn ei(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.enable_interrupts_delayed();
}

// =========================================================================
// Accumulator and flag operations
// =========================================================================

pub(crate) fn daa(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let result = alu::daa(cpu.regs.a, cpu.regs.f);
    cpu.regs.a = result.value;
    cpu.regs.set_f(result.flags);
}

pub(crate) fn cpl(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.a = !cpu.regs.a;
    cpu.regs.set_f(cpu.regs.f & (ZF | CF) | NF | HF);
}

pub(crate) fn scf(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.set_f(cpu.regs.f & ZF | CF);
}

pub(crate) fn ccf(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.set_f(cpu.regs.f & ZF | (cpu.regs.f & CF) ^ CF);
}

// The accumulator rotates always clear Z, unlike their CB-prefixed twins.

pub(crate) fn rlca(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let result = alu::rlc(cpu.regs.a);
    cpu.regs.a = result.value;
    cpu.regs.set_f(result.flags & CF);
}

pub(crate) fn rrca(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let result = alu::rrc(cpu.regs.a);
    cpu.regs.a = result.value;
    cpu.regs.set_f(result.flags & CF);
}

pub(crate) fn rla(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let result = alu::rl(cpu.regs.a, cpu.regs.f & CF != 0);
    cpu.regs.a = result.value;
    cpu.regs.set_f(result.flags & CF);
}

pub(crate) fn rra(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let result = alu::rr(cpu.regs.a, cpu.regs.f & CF != 0);
    cpu.regs.a = result.value;
    cpu.regs.set_f(result.flags & CF);
}

// =========================================================================
// 16-bit loads and arithmetic
// =========================================================================

pub(crate) fn ld_rr_nn(cpu: &mut Sm83, _bus: &mut dyn Bus, op: u8, operand: u16) {
    cpu.set_rp(op >> 4, operand);
}

pub(crate) fn inc_rr(cpu: &mut Sm83, _bus: &mut dyn Bus, op: u8, _operand: u16) {
    let rp = op >> 4;
    cpu.set_rp(rp, cpu.get_rp(rp).wrapping_add(1));
}

pub(crate) fn dec_rr(cpu: &mut Sm83, _bus: &mut dyn Bus, op: u8, _operand: u16) {
    let rp = op >> 4;
    cpu.set_rp(rp, cpu.get_rp(rp).wrapping_sub(1));
}

pub(crate) fn add_hl_rr(cpu: &mut Sm83, _bus: &mut dyn Bus, op: u8, _operand: u16) {
    let (value, flags) = alu::add16(cpu.regs.hl(), cpu.get_rp(op >> 4));
    cpu.regs.set_hl(value);
    cpu.regs.set_f(cpu.regs.f & ZF | flags);
}

pub(crate) fn ld_nnp_sp(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, operand: u16) {
    bus.write_word(operand, cpu.regs.sp);
}

pub(crate) fn add_sp_e(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, operand: u16) {
    let (value, flags) = alu::add_sp(cpu.regs.sp, operand as u8);
    cpu.regs.sp = value;
    cpu.regs.set_f(flags);
}

pub(crate) fn ld_hl_sp_e(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, operand: u16) {
    let (value, flags) = alu::add_sp(cpu.regs.sp, operand as u8);
    cpu.regs.set_hl(value);
    cpu.regs.set_f(flags);
}

pub(crate) fn ld_sp_hl(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.sp = cpu.regs.hl();
}

pub(crate) fn push_rr(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let value = cpu.get_rp2(op >> 4);
    cpu.push16(bus, value);
}

pub(crate) fn pop_rr(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let value = cpu.pop16(bus);
    // POP AF goes through set_af, dropping the low nibble of F.
    cpu.set_rp2(op >> 4, value);
}

// =========================================================================
// 8-bit loads
// =========================================================================

pub(crate) fn inc_r(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let r = op >> 3;
    let result = alu::inc8(cpu.get_reg8(bus, r));
    cpu.set_reg8(bus, r, result.value);
    cpu.regs.set_f(cpu.regs.f & CF | result.flags);
}

pub(crate) fn dec_r(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let r = op >> 3;
    let result = alu::dec8(cpu.get_reg8(bus, r));
    cpu.set_reg8(bus, r, result.value);
    cpu.regs.set_f(cpu.regs.f & CF | result.flags);
}

pub(crate) fn ld_r_n(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, operand: u16) {
    cpu.set_reg8(bus, op >> 3, operand as u8);
}

pub(crate) fn ld_r_r(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let value = cpu.get_reg8(bus, op);
    cpu.set_reg8(bus, op >> 3, value);
}

pub(crate) fn ld_bcp_a(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    bus.write(cpu.regs.bc(), cpu.regs.a);
}

pub(crate) fn ld_a_bcp(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.a = bus.read(cpu.regs.bc());
}

pub(crate) fn ld_dep_a(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    bus.write(cpu.regs.de(), cpu.regs.a);
}

pub(crate) fn ld_a_dep(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.a = bus.read(cpu.regs.de());
}

pub(crate) fn ldi_hlp_a(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let hl = cpu.regs.hl();
    bus.write(hl, cpu.regs.a);
    cpu.regs.set_hl(hl.wrapping_add(1));
}

pub(crate) fn ldi_a_hlp(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let hl = cpu.regs.hl();
    cpu.regs.a = bus.read(hl);
    cpu.regs.set_hl(hl.wrapping_add(1));
}

pub(crate) fn ldd_hlp_a(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let hl = cpu.regs.hl();
    bus.write(hl, cpu.regs.a);
    cpu.regs.set_hl(hl.wrapping_sub(1));
}

pub(crate) fn ldd_a_hlp(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    let hl = cpu.regs.hl();
    cpu.regs.a = bus.read(hl);
    cpu.regs.set_hl(hl.wrapping_sub(1));
}

pub(crate) fn ld_nnp_a(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, operand: u16) {
    bus.write(operand, cpu.regs.a);
}

pub(crate) fn ld_a_nnp(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, operand: u16) {
    cpu.regs.a = bus.read(operand);
}

pub(crate) fn ldh_n_a(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, operand: u16) {
    bus.write(0xFF00 | operand, cpu.regs.a);
}

pub(crate) fn ldh_a_n(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, operand: u16) {
    cpu.regs.a = bus.read(0xFF00 | operand);
}

pub(crate) fn ld_cp_a(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    bus.write(0xFF00 | u16::from(cpu.regs.c), cpu.regs.a);
}

pub(crate) fn ld_a_cp(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.a = bus.read(0xFF00 | u16::from(cpu.regs.c));
}

// =========================================================================
// 8-bit arithmetic and logic
// =========================================================================

/// Apply the ALU row selected by bits 3-5 of the opcode: ADD, ADC, SUB,
/// SBC, AND, XOR, OR, CP.
fn alu_apply(cpu: &mut Sm83, index: u8, value: u8) {
    let a = cpu.regs.a;
    let carry = cpu.regs.f & CF != 0;
    let result = match index & 7 {
        0 => alu::add8(a, value, false),
        1 => alu::add8(a, value, carry),
        2 => alu::sub8(a, value, false),
        3 => alu::sub8(a, value, carry),
        4 => alu::and8(a, value),
        5 => alu::xor8(a, value),
        6 => alu::or8(a, value),
        // CP: compare only, the result is discarded below.
        _ => alu::sub8(a, value, false),
    };
    if index & 7 != 7 {
        cpu.regs.a = result.value;
    }
    cpu.regs.set_f(result.flags);
}

pub(crate) fn alu_a_r(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let value = cpu.get_reg8(bus, op);
    alu_apply(cpu, op >> 3, value);
}

pub(crate) fn alu_a_n(cpu: &mut Sm83, _bus: &mut dyn Bus, op: u8, operand: u16) {
    alu_apply(cpu, op >> 3, operand as u8);
}

// =========================================================================
// Jumps, calls and returns
// =========================================================================

pub(crate) fn jr_e(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, operand: u16) {
    cpu.regs.pc = cpu.regs.pc.wrapping_add_signed(i16::from(operand as u8 as i8));
}

pub(crate) fn jr_cc(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, operand: u16) {
    if cpu.condition(op >> 3) {
        cpu.take_branch();
        jr_e(cpu, bus, op, operand);
    }
}

pub(crate) fn jp_nn(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, operand: u16) {
    cpu.regs.pc = operand;
}

pub(crate) fn jp_cc(cpu: &mut Sm83, _bus: &mut dyn Bus, op: u8, operand: u16) {
    if cpu.condition(op >> 3) {
        cpu.take_branch();
        cpu.regs.pc = operand;
    }
}

pub(crate) fn jp_hl(cpu: &mut Sm83, _bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.pc = cpu.regs.hl();
}

pub(crate) fn call_nn(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, operand: u16) {
    let pc = cpu.regs.pc;
    cpu.push16(bus, pc);
    cpu.regs.pc = operand;
}

pub(crate) fn call_cc(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, operand: u16) {
    if cpu.condition(op >> 3) {
        cpu.take_branch();
        call_nn(cpu, bus, op, operand);
    }
}

pub(crate) fn ret(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    cpu.regs.pc = cpu.pop16(bus);
}

pub(crate) fn ret_cc(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    if cpu.condition(op >> 3) {
        cpu.take_branch();
        cpu.regs.pc = cpu.pop16(bus);
    }
}

pub(crate) fn reti(cpu: &mut Sm83, bus: &mut dyn Bus, _op: u8, _operand: u16) {
    // Unlike EI, RETI enables interrupts immediately.
    cpu.regs.pc = cpu.pop16(bus);
    cpu.enable_interrupts_now();
}

pub(crate) fn rst(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let pc = cpu.regs.pc;
    cpu.push16(bus, pc);
    cpu.regs.pc = u16::from(op & 0x38);
}

// =========================================================================
// CB-prefixed instructions
// =========================================================================

pub(crate) fn cb_rotate(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let value = cpu.get_reg8(bus, op);
    let carry = cpu.regs.f & CF != 0;
    let result = match (op >> 3) & 7 {
        0 => alu::rlc(value),
        1 => alu::rrc(value),
        2 => alu::rl(value, carry),
        3 => alu::rr(value, carry),
        4 => alu::sla(value),
        5 => alu::sra(value),
        6 => alu::swap(value),
        _ => alu::srl(value),
    };
    cpu.set_reg8(bus, op, result.value);
    cpu.regs.set_f(result.flags);
}

pub(crate) fn cb_bit(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let value = cpu.get_reg8(bus, op);
    let flags = alu::bit(value, (op >> 3) & 7);
    cpu.regs.set_f(cpu.regs.f & CF | flags);
}

pub(crate) fn cb_res(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let value = cpu.get_reg8(bus, op) & !(1 << ((op >> 3) & 7));
    cpu.set_reg8(bus, op, value);
}

pub(crate) fn cb_set(cpu: &mut Sm83, bus: &mut dyn Bus, op: u8, _operand: u16) {
    let value = cpu.get_reg8(bus, op) | 1 << ((op >> 3) & 7);
    cpu.set_reg8(bus, op, value);
}
