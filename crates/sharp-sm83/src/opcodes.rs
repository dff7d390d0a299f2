//! Data-driven opcode tables for the SM83.
//!
//! One entry per opcode: disassembly mnemonic, immediate operand length,
//! base and branch-taken cycle counts, and the handler that executes it.
//! Undefined opcodes (the eleven holes the SM83 never decodes) are `None`;
//! stepping onto one is reported as an error, not a crash.

use emu_core::Bus;

use crate::cpu::Sm83;
use crate::execute as ex;

/// Handler for one opcode row. Receives the opcode byte, so a single
/// handler serves a whole row by decoding the register, pair or condition
/// field, plus the already-fetched immediate operand.
pub type ExecFn = fn(&mut Sm83, &mut dyn Bus, u8, u16);

/// One decoded instruction.
#[derive(Clone, Copy)]
pub struct Opcode {
    /// Disassembly mnemonic; `n`/`nn` mark immediate operands.
    pub mnemonic: &'static str,
    /// Immediate operand length in bytes (0, 1 or 2).
    pub operand_bytes: u8,
    /// Cycle cost, and for conditional instructions the cost when the
    /// condition fails.
    pub cycles: u8,
    /// Cycle cost when a conditional branch is taken. Equal to `cycles`
    /// for unconditional instructions.
    pub cycles_taken: u8,
    pub exec: ExecFn,
}

const fn op(mnemonic: &'static str, operand_bytes: u8, cycles: u8, exec: ExecFn) -> Option<Opcode> {
    Some(Opcode {
        mnemonic,
        operand_bytes,
        cycles,
        cycles_taken: cycles,
        exec,
    })
}

const fn br(
    mnemonic: &'static str,
    operand_bytes: u8,
    cycles: u8,
    cycles_taken: u8,
    exec: ExecFn,
) -> Option<Opcode> {
    Some(Opcode {
        mnemonic,
        operand_bytes,
        cycles,
        cycles_taken,
        exec,
    })
}

const fn cb(mnemonic: &'static str, cycles: u8, exec: ExecFn) -> Opcode {
    Opcode {
        mnemonic,
        operand_bytes: 0,
        cycles,
        cycles_taken: cycles,
        exec,
    }
}

/// Unprefixed opcode table.
pub static OPCODES: [Option<Opcode>; 256] = [
    // 0x00
    op("NOP", 0, 4, ex::nop),
    op("LD BC,nn", 2, 12, ex::ld_rr_nn),
    op("LD (BC),A", 0, 8, ex::ld_bcp_a),
    op("INC BC", 0, 8, ex::inc_rr),
    op("INC B", 0, 4, ex::inc_r),
    op("DEC B", 0, 4, ex::dec_r),
    op("LD B,n", 1, 8, ex::ld_r_n),
    op("RLCA", 0, 4, ex::rlca),
    op("LD (nn),SP", 2, 20, ex::ld_nnp_sp),
    op("ADD HL,BC", 0, 8, ex::add_hl_rr),
    op("LD A,(BC)", 0, 8, ex::ld_a_bcp),
    op("DEC BC", 0, 8, ex::dec_rr),
    op("INC C", 0, 4, ex::inc_r),
    op("DEC C", 0, 4, ex::dec_r),
    op("LD C,n", 1, 8, ex::ld_r_n),
    op("RRCA", 0, 4, ex::rrca),
    // 0x10
    op("STOP", 1, 4, ex::stop),
    op("LD DE,nn", 2, 12, ex::ld_rr_nn),
    op("LD (DE),A", 0, 8, ex::ld_dep_a),
    op("INC DE", 0, 8, ex::inc_rr),
    op("INC D", 0, 4, ex::inc_r),
    op("DEC D", 0, 4, ex::dec_r),
    op("LD D,n", 1, 8, ex::ld_r_n),
    op("RLA", 0, 4, ex::rla),
    op("JR n", 1, 12, ex::jr_e),
    op("ADD HL,DE", 0, 8, ex::add_hl_rr),
    op("LD A,(DE)", 0, 8, ex::ld_a_dep),
    op("DEC DE", 0, 8, ex::dec_rr),
    op("INC E", 0, 4, ex::inc_r),
    op("DEC E", 0, 4, ex::dec_r),
    op("LD E,n", 1, 8, ex::ld_r_n),
    op("RRA", 0, 4, ex::rra),
    // 0x20
    br("JR NZ,n", 1, 8, 12, ex::jr_cc),
    op("LD HL,nn", 2, 12, ex::ld_rr_nn),
    op("LD (HL+),A", 0, 8, ex::ldi_hlp_a),
    op("INC HL", 0, 8, ex::inc_rr),
    op("INC H", 0, 4, ex::inc_r),
    op("DEC H", 0, 4, ex::dec_r),
    op("LD H,n", 1, 8, ex::ld_r_n),
    op("DAA", 0, 4, ex::daa),
    br("JR Z,n", 1, 8, 12, ex::jr_cc),
    op("ADD HL,HL", 0, 8, ex::add_hl_rr),
    op("LD A,(HL+)", 0, 8, ex::ldi_a_hlp),
    op("DEC HL", 0, 8, ex::dec_rr),
    op("INC L", 0, 4, ex::inc_r),
    op("DEC L", 0, 4, ex::dec_r),
    op("LD L,n", 1, 8, ex::ld_r_n),
    op("CPL", 0, 4, ex::cpl),
    // 0x30
    br("JR NC,n", 1, 8, 12, ex::jr_cc),
    op("LD SP,nn", 2, 12, ex::ld_rr_nn),
    op("LD (HL-),A", 0, 8, ex::ldd_hlp_a),
    op("INC SP", 0, 8, ex::inc_rr),
    op("INC (HL)", 0, 12, ex::inc_r),
    op("DEC (HL)", 0, 12, ex::dec_r),
    op("LD (HL),n", 1, 12, ex::ld_r_n),
    op("SCF", 0, 4, ex::scf),
    br("JR C,n", 1, 8, 12, ex::jr_cc),
    op("ADD HL,SP", 0, 8, ex::add_hl_rr),
    op("LD A,(HL-)", 0, 8, ex::ldd_a_hlp),
    op("DEC SP", 0, 8, ex::dec_rr),
    op("INC A", 0, 4, ex::inc_r),
    op("DEC A", 0, 4, ex::dec_r),
    op("LD A,n", 1, 8, ex::ld_r_n),
    op("CCF", 0, 4, ex::ccf),
    // 0x40
    op("LD B,B", 0, 4, ex::ld_r_r),
    op("LD B,C", 0, 4, ex::ld_r_r),
    op("LD B,D", 0, 4, ex::ld_r_r),
    op("LD B,E", 0, 4, ex::ld_r_r),
    op("LD B,H", 0, 4, ex::ld_r_r),
    op("LD B,L", 0, 4, ex::ld_r_r),
    op("LD B,(HL)", 0, 8, ex::ld_r_r),
    op("LD B,A", 0, 4, ex::ld_r_r),
    op("LD C,B", 0, 4, ex::ld_r_r),
    op("LD C,C", 0, 4, ex::ld_r_r),
    op("LD C,D", 0, 4, ex::ld_r_r),
    op("LD C,E", 0, 4, ex::ld_r_r),
    op("LD C,H", 0, 4, ex::ld_r_r),
    op("LD C,L", 0, 4, ex::ld_r_r),
    op("LD C,(HL)", 0, 8, ex::ld_r_r),
    op("LD C,A", 0, 4, ex::ld_r_r),
    // 0x50
    op("LD D,B", 0, 4, ex::ld_r_r),
    op("LD D,C", 0, 4, ex::ld_r_r),
    op("LD D,D", 0, 4, ex::ld_r_r),
    op("LD D,E", 0, 4, ex::ld_r_r),
    op("LD D,H", 0, 4, ex::ld_r_r),
    op("LD D,L", 0, 4, ex::ld_r_r),
    op("LD D,(HL)", 0, 8, ex::ld_r_r),
    op("LD D,A", 0, 4, ex::ld_r_r),
    op("LD E,B", 0, 4, ex::ld_r_r),
    op("LD E,C", 0, 4, ex::ld_r_r),
    op("LD E,D", 0, 4, ex::ld_r_r),
    op("LD E,E", 0, 4, ex::ld_r_r),
    op("LD E,H", 0, 4, ex::ld_r_r),
    op("LD E,L", 0, 4, ex::ld_r_r),
    op("LD E,(HL)", 0, 8, ex::ld_r_r),
    op("LD E,A", 0, 4, ex::ld_r_r),
    // 0x60
    op("LD H,B", 0, 4, ex::ld_r_r),
    op("LD H,C", 0, 4, ex::ld_r_r),
    op("LD H,D", 0, 4, ex::ld_r_r),
    op("LD H,E", 0, 4, ex::ld_r_r),
    op("LD H,H", 0, 4, ex::ld_r_r),
    op("LD H,L", 0, 4, ex::ld_r_r),
    op("LD H,(HL)", 0, 8, ex::ld_r_r),
    op("LD H,A", 0, 4, ex::ld_r_r),
    op("LD L,B", 0, 4, ex::ld_r_r),
    op("LD L,C", 0, 4, ex::ld_r_r),
    op("LD L,D", 0, 4, ex::ld_r_r),
    op("LD L,E", 0, 4, ex::ld_r_r),
    op("LD L,H", 0, 4, ex::ld_r_r),
    op("LD L,L", 0, 4, ex::ld_r_r),
    op("LD L,(HL)", 0, 8, ex::ld_r_r),
    op("LD L,A", 0, 4, ex::ld_r_r),
    // 0x70
    op("LD (HL),B", 0, 8, ex::ld_r_r),
    op("LD (HL),C", 0, 8, ex::ld_r_r),
    op("LD (HL),D", 0, 8, ex::ld_r_r),
    op("LD (HL),E", 0, 8, ex::ld_r_r),
    op("LD (HL),H", 0, 8, ex::ld_r_r),
    op("LD (HL),L", 0, 8, ex::ld_r_r),
    op("HALT", 0, 4, ex::halt),
    op("LD (HL),A", 0, 8, ex::ld_r_r),
    op("LD A,B", 0, 4, ex::ld_r_r),
    op("LD A,C", 0, 4, ex::ld_r_r),
    op("LD A,D", 0, 4, ex::ld_r_r),
    op("LD A,E", 0, 4, ex::ld_r_r),
    op("LD A,H", 0, 4, ex::ld_r_r),
    op("LD A,L", 0, 4, ex::ld_r_r),
    op("LD A,(HL)", 0, 8, ex::ld_r_r),
    op("LD A,A", 0, 4, ex::ld_r_r),
    // 0x80
    op("ADD A,B", 0, 4, ex::alu_a_r),
    op("ADD A,C", 0, 4, ex::alu_a_r),
    op("ADD A,D", 0, 4, ex::alu_a_r),
    op("ADD A,E", 0, 4, ex::alu_a_r),
    op("ADD A,H", 0, 4, ex::alu_a_r),
    op("ADD A,L", 0, 4, ex::alu_a_r),
    op("ADD A,(HL)", 0, 8, ex::alu_a_r),
    op("ADD A,A", 0, 4, ex::alu_a_r),
    op("ADC A,B", 0, 4, ex::alu_a_r),
    op("ADC A,C", 0, 4, ex::alu_a_r),
    op("ADC A,D", 0, 4, ex::alu_a_r),
    op("ADC A,E", 0, 4, ex::alu_a_r),
    op("ADC A,H", 0, 4, ex::alu_a_r),
    op("ADC A,L", 0, 4, ex::alu_a_r),
    op("ADC A,(HL)", 0, 8, ex::alu_a_r),
    op("ADC A,A", 0, 4, ex::alu_a_r),
    // 0x90
    op("SUB B", 0, 4, ex::alu_a_r),
    op("SUB C", 0, 4, ex::alu_a_r),
    op("SUB D", 0, 4, ex::alu_a_r),
    op("SUB E", 0, 4, ex::alu_a_r),
    op("SUB H", 0, 4, ex::alu_a_r),
    op("SUB L", 0, 4, ex::alu_a_r),
    op("SUB (HL)", 0, 8, ex::alu_a_r),
    op("SUB A", 0, 4, ex::alu_a_r),
    op("SBC A,B", 0, 4, ex::alu_a_r),
    op("SBC A,C", 0, 4, ex::alu_a_r),
    op("SBC A,D", 0, 4, ex::alu_a_r),
    op("SBC A,E", 0, 4, ex::alu_a_r),
    op("SBC A,H", 0, 4, ex::alu_a_r),
    op("SBC A,L", 0, 4, ex::alu_a_r),
    op("SBC A,(HL)", 0, 8, ex::alu_a_r),
    op("SBC A,A", 0, 4, ex::alu_a_r),
    // 0xA0
    op("AND B", 0, 4, ex::alu_a_r),
    op("AND C", 0, 4, ex::alu_a_r),
    op("AND D", 0, 4, ex::alu_a_r),
    op("AND E", 0, 4, ex::alu_a_r),
    op("AND H", 0, 4, ex::alu_a_r),
    op("AND L", 0, 4, ex::alu_a_r),
    op("AND (HL)", 0, 8, ex::alu_a_r),
    op("AND A", 0, 4, ex::alu_a_r),
    op("XOR B", 0, 4, ex::alu_a_r),
    op("XOR C", 0, 4, ex::alu_a_r),
    op("XOR D", 0, 4, ex::alu_a_r),
    op("XOR E", 0, 4, ex::alu_a_r),
    op("XOR H", 0, 4, ex::alu_a_r),
    op("XOR L", 0, 4, ex::alu_a_r),
    op("XOR (HL)", 0, 8, ex::alu_a_r),
    op("XOR A", 0, 4, ex::alu_a_r),
    // 0xB0
    op("OR B", 0, 4, ex::alu_a_r),
    op("OR C", 0, 4, ex::alu_a_r),
    op("OR D", 0, 4, ex::alu_a_r),
    op("OR E", 0, 4, ex::alu_a_r),
    op("OR H", 0, 4, ex::alu_a_r),
    op("OR L", 0, 4, ex::alu_a_r),
    op("OR (HL)", 0, 8, ex::alu_a_r),
    op("OR A", 0, 4, ex::alu_a_r),
    op("CP B", 0, 4, ex::alu_a_r),
    op("CP C", 0, 4, ex::alu_a_r),
    op("CP D", 0, 4, ex::alu_a_r),
    op("CP E", 0, 4, ex::alu_a_r),
    op("CP H", 0, 4, ex::alu_a_r),
    op("CP L", 0, 4, ex::alu_a_r),
    op("CP (HL)", 0, 8, ex::alu_a_r),
    op("CP A", 0, 4, ex::alu_a_r),
    // 0xC0
    br("RET NZ", 0, 8, 20, ex::ret_cc),
    op("POP BC", 0, 12, ex::pop_rr),
    br("JP NZ,nn", 2, 12, 16, ex::jp_cc),
    op("JP nn", 2, 16, ex::jp_nn),
    br("CALL NZ,nn", 2, 12, 24, ex::call_cc),
    op("PUSH BC", 0, 16, ex::push_rr),
    op("ADD A,n", 1, 8, ex::alu_a_n),
    op("RST 00H", 0, 16, ex::rst),
    br("RET Z", 0, 8, 20, ex::ret_cc),
    op("RET", 0, 16, ex::ret),
    br("JP Z,nn", 2, 12, 16, ex::jp_cc),
    None, // 0xCB prefix, dispatched through CB_OPCODES
    br("CALL Z,nn", 2, 12, 24, ex::call_cc),
    op("CALL nn", 2, 24, ex::call_nn),
    op("ADC A,n", 1, 8, ex::alu_a_n),
    op("RST 08H", 0, 16, ex::rst),
    // 0xD0
    br("RET NC", 0, 8, 20, ex::ret_cc),
    op("POP DE", 0, 12, ex::pop_rr),
    br("JP NC,nn", 2, 12, 16, ex::jp_cc),
    None, // 0xD3 undefined
    br("CALL NC,nn", 2, 12, 24, ex::call_cc),
    op("PUSH DE", 0, 16, ex::push_rr),
    op("SUB n", 1, 8, ex::alu_a_n),
    op("RST 10H", 0, 16, ex::rst),
    br("RET C", 0, 8, 20, ex::ret_cc),
    op("RETI", 0, 16, ex::reti),
    br("JP C,nn", 2, 12, 16, ex::jp_cc),
    None, // 0xDB undefined
    br("CALL C,nn", 2, 12, 24, ex::call_cc),
    None, // 0xDD undefined
    op("SBC A,n", 1, 8, ex::alu_a_n),
    op("RST 18H", 0, 16, ex::rst),
    // 0xE0
    op("LDH (n),A", 1, 12, ex::ldh_n_a),
    op("POP HL", 0, 12, ex::pop_rr),
    op("LD (C),A", 0, 8, ex::ld_cp_a),
    None, // 0xE3 undefined
    None, // 0xE4 undefined
    op("PUSH HL", 0, 16, ex::push_rr),
    op("AND n", 1, 8, ex::alu_a_n),
    op("RST 20H", 0, 16, ex::rst),
    op("ADD SP,n", 1, 16, ex::add_sp_e),
    op("JP HL", 0, 4, ex::jp_hl),
    op("LD (nn),A", 2, 16, ex::ld_nnp_a),
    None, // 0xEB undefined
    None, // 0xEC undefined
    None, // 0xED undefined
    op("XOR n", 1, 8, ex::alu_a_n),
    op("RST 28H", 0, 16, ex::rst),
    // 0xF0
    op("LDH A,(n)", 1, 12, ex::ldh_a_n),
    op("POP AF", 0, 12, ex::pop_rr),
    op("LD A,(C)", 0, 8, ex::ld_a_cp),
    op("DI", 0, 4, ex::di),
    None, // 0xF4 undefined
    op("PUSH AF", 0, 16, ex::push_rr),
    op("OR n", 1, 8, ex::alu_a_n),
    op("RST 30H", 0, 16, ex::rst),
    op("LD HL,SP+n", 1, 12, ex::ld_hl_sp_e),
    op("LD SP,HL", 0, 8, ex::ld_sp_hl),
    op("LD A,(nn)", 2, 16, ex::ld_a_nnp),
    op("EI", 0, 4, ex::ei),
    None, // 0xFC undefined
    None, // 0xFD undefined
    op("CP n", 1, 8, ex::alu_a_n),
    op("RST 38H", 0, 16, ex::rst),
];

/// CB-prefixed opcode table. Cycle counts include the 4 cycles of the
/// prefix fetch.
pub static CB_OPCODES: [Opcode; 256] = [
    // 0x00
    cb("RLC B", 8, ex::cb_rotate),
    cb("RLC C", 8, ex::cb_rotate),
    cb("RLC D", 8, ex::cb_rotate),
    cb("RLC E", 8, ex::cb_rotate),
    cb("RLC H", 8, ex::cb_rotate),
    cb("RLC L", 8, ex::cb_rotate),
    cb("RLC (HL)", 16, ex::cb_rotate),
    cb("RLC A", 8, ex::cb_rotate),
    cb("RRC B", 8, ex::cb_rotate),
    cb("RRC C", 8, ex::cb_rotate),
    cb("RRC D", 8, ex::cb_rotate),
    cb("RRC E", 8, ex::cb_rotate),
    cb("RRC H", 8, ex::cb_rotate),
    cb("RRC L", 8, ex::cb_rotate),
    cb("RRC (HL)", 16, ex::cb_rotate),
    cb("RRC A", 8, ex::cb_rotate),
    // 0x10
    cb("RL B", 8, ex::cb_rotate),
    cb("RL C", 8, ex::cb_rotate),
    cb("RL D", 8, ex::cb_rotate),
    cb("RL E", 8, ex::cb_rotate),
    cb("RL H", 8, ex::cb_rotate),
    cb("RL L", 8, ex::cb_rotate),
    cb("RL (HL)", 16, ex::cb_rotate),
    cb("RL A", 8, ex::cb_rotate),
    cb("RR B", 8, ex::cb_rotate),
    cb("RR C", 8, ex::cb_rotate),
    cb("RR D", 8, ex::cb_rotate),
    cb("RR E", 8, ex::cb_rotate),
    cb("RR H", 8, ex::cb_rotate),
    cb("RR L", 8, ex::cb_rotate),
    cb("RR (HL)", 16, ex::cb_rotate),
    cb("RR A", 8, ex::cb_rotate),
    // 0x20
    cb("SLA B", 8, ex::cb_rotate),
    cb("SLA C", 8, ex::cb_rotate),
    cb("SLA D", 8, ex::cb_rotate),
    cb("SLA E", 8, ex::cb_rotate),
    cb("SLA H", 8, ex::cb_rotate),
    cb("SLA L", 8, ex::cb_rotate),
    cb("SLA (HL)", 16, ex::cb_rotate),
    cb("SLA A", 8, ex::cb_rotate),
    cb("SRA B", 8, ex::cb_rotate),
    cb("SRA C", 8, ex::cb_rotate),
    cb("SRA D", 8, ex::cb_rotate),
    cb("SRA E", 8, ex::cb_rotate),
    cb("SRA H", 8, ex::cb_rotate),
    cb("SRA L", 8, ex::cb_rotate),
    cb("SRA (HL)", 16, ex::cb_rotate),
    cb("SRA A", 8, ex::cb_rotate),
    // 0x30
    cb("SWAP B", 8, ex::cb_rotate),
    cb("SWAP C", 8, ex::cb_rotate),
    cb("SWAP D", 8, ex::cb_rotate),
    cb("SWAP E", 8, ex::cb_rotate),
    cb("SWAP H", 8, ex::cb_rotate),
    cb("SWAP L", 8, ex::cb_rotate),
    cb("SWAP (HL)", 16, ex::cb_rotate),
    cb("SWAP A", 8, ex::cb_rotate),
    cb("SRL B", 8, ex::cb_rotate),
    cb("SRL C", 8, ex::cb_rotate),
    cb("SRL D", 8, ex::cb_rotate),
    cb("SRL E", 8, ex::cb_rotate),
    cb("SRL H", 8, ex::cb_rotate),
    cb("SRL L", 8, ex::cb_rotate),
    cb("SRL (HL)", 16, ex::cb_rotate),
    cb("SRL A", 8, ex::cb_rotate),
    // 0x40
    cb("BIT 0,B", 8, ex::cb_bit),
    cb("BIT 0,C", 8, ex::cb_bit),
    cb("BIT 0,D", 8, ex::cb_bit),
    cb("BIT 0,E", 8, ex::cb_bit),
    cb("BIT 0,H", 8, ex::cb_bit),
    cb("BIT 0,L", 8, ex::cb_bit),
    cb("BIT 0,(HL)", 12, ex::cb_bit),
    cb("BIT 0,A", 8, ex::cb_bit),
    cb("BIT 1,B", 8, ex::cb_bit),
    cb("BIT 1,C", 8, ex::cb_bit),
    cb("BIT 1,D", 8, ex::cb_bit),
    cb("BIT 1,E", 8, ex::cb_bit),
    cb("BIT 1,H", 8, ex::cb_bit),
    cb("BIT 1,L", 8, ex::cb_bit),
    cb("BIT 1,(HL)", 12, ex::cb_bit),
    cb("BIT 1,A", 8, ex::cb_bit),
    // 0x50
    cb("BIT 2,B", 8, ex::cb_bit),
    cb("BIT 2,C", 8, ex::cb_bit),
    cb("BIT 2,D", 8, ex::cb_bit),
    cb("BIT 2,E", 8, ex::cb_bit),
    cb("BIT 2,H", 8, ex::cb_bit),
    cb("BIT 2,L", 8, ex::cb_bit),
    cb("BIT 2,(HL)", 12, ex::cb_bit),
    cb("BIT 2,A", 8, ex::cb_bit),
    cb("BIT 3,B", 8, ex::cb_bit),
    cb("BIT 3,C", 8, ex::cb_bit),
    cb("BIT 3,D", 8, ex::cb_bit),
    cb("BIT 3,E", 8, ex::cb_bit),
    cb("BIT 3,H", 8, ex::cb_bit),
    cb("BIT 3,L", 8, ex::cb_bit),
    cb("BIT 3,(HL)", 12, ex::cb_bit),
    cb("BIT 3,A", 8, ex::cb_bit),
    // 0x60
    cb("BIT 4,B", 8, ex::cb_bit),
    cb("BIT 4,C", 8, ex::cb_bit),
    cb("BIT 4,D", 8, ex::cb_bit),
    cb("BIT 4,E", 8, ex::cb_bit),
    cb("BIT 4,H", 8, ex::cb_bit),
    cb("BIT 4,L", 8, ex::cb_bit),
    cb("BIT 4,(HL)", 12, ex::cb_bit),
    cb("BIT 4,A", 8, ex::cb_bit),
    cb("BIT 5,B", 8, ex::cb_bit),
    cb("BIT 5,C", 8, ex::cb_bit),
    cb("BIT 5,D", 8, ex::cb_bit),
    cb("BIT 5,E", 8, ex::cb_bit),
    cb("BIT 5,H", 8, ex::cb_bit),
    cb("BIT 5,L", 8, ex::cb_bit),
    cb("BIT 5,(HL)", 12, ex::cb_bit),
    cb("BIT 5,A", 8, ex::cb_bit),
    // 0x70
    cb("BIT 6,B", 8, ex::cb_bit),
    cb("BIT 6,C", 8, ex::cb_bit),
    cb("BIT 6,D", 8, ex::cb_bit),
    cb("BIT 6,E", 8, ex::cb_bit),
    cb("BIT 6,H", 8, ex::cb_bit),
    cb("BIT 6,L", 8, ex::cb_bit),
    cb("BIT 6,(HL)", 12, ex::cb_bit),
    cb("BIT 6,A", 8, ex::cb_bit),
    cb("BIT 7,B", 8, ex::cb_bit),
    cb("BIT 7,C", 8, ex::cb_bit),
    cb("BIT 7,D", 8, ex::cb_bit),
    cb("BIT 7,E", 8, ex::cb_bit),
    cb("BIT 7,H", 8, ex::cb_bit),
    cb("BIT 7,L", 8, ex::cb_bit),
    cb("BIT 7,(HL)", 12, ex::cb_bit),
    cb("BIT 7,A", 8, ex::cb_bit),
    // 0x80
    cb("RES 0,B", 8, ex::cb_res),
    cb("RES 0,C", 8, ex::cb_res),
    cb("RES 0,D", 8, ex::cb_res),
    cb("RES 0,E", 8, ex::cb_res),
    cb("RES 0,H", 8, ex::cb_res),
    cb("RES 0,L", 8, ex::cb_res),
    cb("RES 0,(HL)", 16, ex::cb_res),
    cb("RES 0,A", 8, ex::cb_res),
    cb("RES 1,B", 8, ex::cb_res),
    cb("RES 1,C", 8, ex::cb_res),
    cb("RES 1,D", 8, ex::cb_res),
    cb("RES 1,E", 8, ex::cb_res),
    cb("RES 1,H", 8, ex::cb_res),
    cb("RES 1,L", 8, ex::cb_res),
    cb("RES 1,(HL)", 16, ex::cb_res),
    cb("RES 1,A", 8, ex::cb_res),
    // 0x90
    cb("RES 2,B", 8, ex::cb_res),
    cb("RES 2,C", 8, ex::cb_res),
    cb("RES 2,D", 8, ex::cb_res),
    cb("RES 2,E", 8, ex::cb_res),
    cb("RES 2,H", 8, ex::cb_res),
    cb("RES 2,L", 8, ex::cb_res),
    cb("RES 2,(HL)", 16, ex::cb_res),
    cb("RES 2,A", 8, ex::cb_res),
    cb("RES 3,B", 8, ex::cb_res),
    cb("RES 3,C", 8, ex::cb_res),
    cb("RES 3,D", 8, ex::cb_res),
    cb("RES 3,E", 8, ex::cb_res),
    cb("RES 3,H", 8, ex::cb_res),
    cb("RES 3,L", 8, ex::cb_res),
    cb("RES 3,(HL)", 16, ex::cb_res),
    cb("RES 3,A", 8, ex::cb_res),
    // 0xA0
    cb("RES 4,B", 8, ex::cb_res),
    cb("RES 4,C", 8, ex::cb_res),
    cb("RES 4,D", 8, ex::cb_res),
    cb("RES 4,E", 8, ex::cb_res),
    cb("RES 4,H", 8, ex::cb_res),
    cb("RES 4,L", 8, ex::cb_res),
    cb("RES 4,(HL)", 16, ex::cb_res),
    cb("RES 4,A", 8, ex::cb_res),
    cb("RES 5,B", 8, ex::cb_res),
    cb("RES 5,C", 8, ex::cb_res),
    cb("RES 5,D", 8, ex::cb_res),
    cb("RES 5,E", 8, ex::cb_res),
    cb("RES 5,H", 8, ex::cb_res),
    cb("RES 5,L", 8, ex::cb_res),
    cb("RES 5,(HL)", 16, ex::cb_res),
    cb("RES 5,A", 8, ex::cb_res),
    // 0xB0
    cb("RES 6,B", 8, ex::cb_res),
    cb("RES 6,C", 8, ex::cb_res),
    cb("RES 6,D", 8, ex::cb_res),
    cb("RES 6,E", 8, ex::cb_res),
    cb("RES 6,H", 8, ex::cb_res),
    cb("RES 6,L", 8, ex::cb_res),
    cb("RES 6,(HL)", 16, ex::cb_res),
    cb("RES 6,A", 8, ex::cb_res),
    cb("RES 7,B", 8, ex::cb_res),
    cb("RES 7,C", 8, ex::cb_res),
    cb("RES 7,D", 8, ex::cb_res),
    cb("RES 7,E", 8, ex::cb_res),
    cb("RES 7,H", 8, ex::cb_res),
    cb("RES 7,L", 8, ex::cb_res),
    cb("RES 7,(HL)", 16, ex::cb_res),
    cb("RES 7,A", 8, ex::cb_res),
    // 0xC0
    cb("SET 0,B", 8, ex::cb_set),
    cb("SET 0,C", 8, ex::cb_set),
    cb("SET 0,D", 8, ex::cb_set),
    cb("SET 0,E", 8, ex::cb_set),
    cb("SET 0,H", 8, ex::cb_set),
    cb("SET 0,L", 8, ex::cb_set),
    cb("SET 0,(HL)", 16, ex::cb_set),
    cb("SET 0,A", 8, ex::cb_set),
    cb("SET 1,B", 8, ex::cb_set),
    cb("SET 1,C", 8, ex::cb_set),
    cb("SET 1,D", 8, ex::cb_set),
    cb("SET 1,E", 8, ex::cb_set),
    cb("SET 1,H", 8, ex::cb_set),
    cb("SET 1,L", 8, ex::cb_set),
    cb("SET 1,(HL)", 16, ex::cb_set),
    cb("SET 1,A", 8, ex::cb_set),
    // 0xD0
    cb("SET 2,B", 8, ex::cb_set),
    cb("SET 2,C", 8, ex::cb_set),
    cb("SET 2,D", 8, ex::cb_set),
    cb("SET 2,E", 8, ex::cb_set),
    cb("SET 2,H", 8, ex::cb_set),
    cb("SET 2,L", 8, ex::cb_set),
    cb("SET 2,(HL)", 16, ex::cb_set),
    cb("SET 2,A", 8, ex::cb_set),
    cb("SET 3,B", 8, ex::cb_set),
    cb("SET 3,C", 8, ex::cb_set),
    cb("SET 3,D", 8, ex::cb_set),
    cb("SET 3,E", 8, ex::cb_set),
    cb("SET 3,H", 8, ex::cb_set),
    cb("SET 3,L", 8, ex::cb_set),
    cb("SET 3,(HL)", 16, ex::cb_set),
    cb("SET 3,A", 8, ex::cb_set),
    // 0xE0
    cb("SET 4,B", 8, ex::cb_set),
    cb("SET 4,C", 8, ex::cb_set),
    cb("SET 4,D", 8, ex::cb_set),
    cb("SET 4,E", 8, ex::cb_set),
    cb("SET 4,H", 8, ex::cb_set),
    cb("SET 4,L", 8, ex::cb_set),
    cb("SET 4,(HL)", 16, ex::cb_set),
    cb("SET 4,A", 8, ex::cb_set),
    cb("SET 5,B", 8, ex::cb_set),
    cb("SET 5,C", 8, ex::cb_set),
    cb("SET 5,D", 8, ex::cb_set),
    cb("SET 5,E", 8, ex::cb_set),
    cb("SET 5,H", 8, ex::cb_set),
    cb("SET 5,L", 8, ex::cb_set),
    cb("SET 5,(HL)", 16, ex::cb_set),
    cb("SET 5,A", 8, ex::cb_set),
    // 0xF0
    cb("SET 6,B", 8, ex::cb_set),
    cb("SET 6,C", 8, ex::cb_set),
    cb("SET 6,D", 8, ex::cb_set),
    cb("SET 6,E", 8, ex::cb_set),
    cb("SET 6,H", 8, ex::cb_set),
    cb("SET 6,L", 8, ex::cb_set),
    cb("SET 6,(HL)", 16, ex::cb_set),
    cb("SET 6,A", 8, ex::cb_set),
    cb("SET 7,B", 8, ex::cb_set),
    cb("SET 7,C", 8, ex::cb_set),
    cb("SET 7,D", 8, ex::cb_set),
    cb("SET 7,E", 8, ex::cb_set),
    cb("SET 7,H", 8, ex::cb_set),
    cb("SET 7,L", 8, ex::cb_set),
    cb("SET 7,(HL)", 16, ex::cb_set),
    cb("SET 7,A", 8, ex::cb_set),
];
