//! Unit tests for SM83 instruction behaviour, run as short programs
//! against a flat RAM bus.

use emu_core::{Bus, SimpleBus, Ticks};
use sharp_sm83::{CF, HF, NF, Sm83, ZF};

/// Load a program at 0x0200 and point PC there.
fn setup_program(bus: &mut SimpleBus, cpu: &mut Sm83, program: &[u8]) {
    bus.load(0x0200, program);
    cpu.regs.pc = 0x0200;
}

/// Step `count` instructions, returning the total cycle cost.
fn run(cpu: &mut Sm83, bus: &mut SimpleBus, count: usize) -> Ticks {
    let mut total = Ticks::ZERO;
    for _ in 0..count {
        total += cpu.step(bus).expect("program contains only defined opcodes");
    }
    total
}

#[test]
fn immediate_loads_and_increment() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD A,5; INC A
    setup_program(&mut bus, &mut cpu, &[0x3E, 0x05, 0x3C]);

    let cost = run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 6);
    assert_eq!(cost, Ticks::new(12));
    assert_eq!(cpu.regs.f & ZF, 0);
    assert_eq!(cpu.regs.f & NF, 0);
}

#[test]
fn countdown_loop_with_jr() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD B,3; DEC B; JR NZ,-3
    setup_program(&mut bus, &mut cpu, &[0x06, 0x03, 0x05, 0x20, 0xFD]);

    // LD, then (DEC + taken JR) twice, then DEC + untaken JR.
    run(&mut cpu, &mut bus, 7);
    assert_eq!(cpu.regs.b, 0);
    assert_ne!(cpu.regs.f & ZF, 0);
    assert_eq!(cpu.regs.pc, 0x0205);
}

#[test]
fn memory_operand_through_hl() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD HL,0xC000; LD (HL),0x2A; LD A,(HL); ADD A,(HL)
    setup_program(
        &mut bus,
        &mut cpu,
        &[0x21, 0x00, 0xC0, 0x36, 0x2A, 0x7E, 0x86],
    );

    run(&mut cpu, &mut bus, 4);
    assert_eq!(bus.peek(0xC000), 0x2A);
    assert_eq!(cpu.regs.a, 0x54);
}

#[test]
fn block_copy_with_post_increment_loads() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    bus.load(0xC000, &[0xDE, 0xAD]);
    // LD HL,0xC000; LD DE,0xD000; LD A,(HL+); LD (DE),A; INC DE;
    // LD A,(HL+); LD (DE),A
    setup_program(
        &mut bus,
        &mut cpu,
        &[0x21, 0x00, 0xC0, 0x11, 0x00, 0xD0, 0x2A, 0x12, 0x13, 0x2A, 0x12],
    );

    run(&mut cpu, &mut bus, 7);
    assert_eq!(bus.peek(0xD000), 0xDE);
    assert_eq!(bus.peek(0xD001), 0xAD);
    assert_eq!(cpu.regs.hl(), 0xC002);
}

#[test]
fn accumulator_rotate_clears_z_but_cb_form_sets_it() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD A,0x80; RLCA -> A=0x01, Z always clear.
    setup_program(&mut bus, &mut cpu, &[0x3E, 0x80, 0x07]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, CF);

    // LD A,0x80; SLA A -> A=0x00, CB form reports Z.
    let mut cpu = Sm83::new();
    setup_program(&mut bus, &mut cpu, &[0x3E, 0x80, 0xCB, 0x27]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, ZF | CF);
}

#[test]
fn bcd_addition_sequence() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD A,0x19; LD B,0x28; ADD A,B; DAA  => BCD 19 + 28 = 47
    setup_program(&mut bus, &mut cpu, &[0x3E, 0x19, 0x06, 0x28, 0x80, 0x27]);

    run(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.regs.a, 0x47);
    assert_eq!(cpu.regs.f & CF, 0);
}

#[test]
fn bcd_subtraction_sequence() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD A,0x20; LD B,0x13; SUB B; DAA  => BCD 20 - 13 = 07
    setup_program(&mut bus, &mut cpu, &[0x3E, 0x20, 0x06, 0x13, 0x90, 0x27]);

    run(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.regs.a, 0x07);
    assert_ne!(cpu.regs.f & NF, 0);
}

#[test]
fn add_hl_preserves_zero_flag() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // XOR A (sets Z); LD HL,0x0FFF; LD BC,0x0001; ADD HL,BC
    setup_program(
        &mut bus,
        &mut cpu,
        &[0xAF, 0x21, 0xFF, 0x0F, 0x01, 0x01, 0x00, 0x09],
    );

    run(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(cpu.regs.f, ZF | HF);
}

#[test]
fn call_and_ret_round_trip() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // CALL 0x0300 ... at 0x0300: LD A,0x77; RET
    setup_program(&mut bus, &mut cpu, &[0xCD, 0x00, 0x03]);
    bus.load(0x0300, &[0x3E, 0x77, 0xC9]);
    cpu.regs.sp = 0xFFFE;

    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x77);
    assert_eq!(cpu.regs.pc, 0x0203);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn push_pop_round_trip_restores_sp() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD BC,0x1234; PUSH BC; POP DE
    setup_program(&mut bus, &mut cpu, &[0x01, 0x34, 0x12, 0xC5, 0xD1]);
    cpu.regs.sp = 0xFFFE;

    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn rst_jumps_to_fixed_vector() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    setup_program(&mut bus, &mut cpu, &[0xEF]); // RST 28H
    cpu.regs.sp = 0xFFFE;

    let cost = run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(cost, Ticks::new(16));
    assert_eq!(bus.peek(0xFFFC), 0x01);
    assert_eq!(bus.peek(0xFFFD), 0x02);
}

#[test]
fn high_ram_addressing_modes_agree() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD A,0x5A; LDH (0x80),A; LD C,0x80; LD A,(C)
    setup_program(&mut bus, &mut cpu, &[0x3E, 0x5A, 0xE0, 0x80, 0x0E, 0x80, 0xF2]);

    run(&mut cpu, &mut bus, 4);
    assert_eq!(bus.peek(0xFF80), 0x5A);
    assert_eq!(cpu.regs.a, 0x5A);
}

#[test]
fn compare_sets_flags_without_touching_a() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD A,0x10; CP 0x20
    setup_program(&mut bus, &mut cpu, &[0x3E, 0x10, 0xFE, 0x20]);

    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 0x10);
    assert_ne!(cpu.regs.f & CF, 0); // borrow
    assert_ne!(cpu.regs.f & NF, 0);
    assert_eq!(cpu.regs.f & ZF, 0);
}

#[test]
fn bit_res_set_work_on_registers_and_memory() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    bus.write(0xC000, 0xFF);
    // LD HL,0xC000; RES 3,(HL); SET 0,B; BIT 3,(HL)
    setup_program(
        &mut bus,
        &mut cpu,
        &[0x21, 0x00, 0xC0, 0xCB, 0x9E, 0xCB, 0xC0, 0xCB, 0x5E],
    );

    run(&mut cpu, &mut bus, 4);
    assert_eq!(bus.peek(0xC000), 0xF7);
    assert_eq!(cpu.regs.b, 0x01);
    assert_ne!(cpu.regs.f & ZF, 0); // bit 3 is now clear
}

#[test]
fn jp_hl_is_a_plain_register_jump() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // LD HL,0x1234; JP HL
    setup_program(&mut bus, &mut cpu, &[0x21, 0x34, 0x12, 0xE9]);

    let cost = run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cost, Ticks::new(16));
}

#[test]
fn conditional_call_cost_depends_on_outcome() {
    let mut bus = SimpleBus::new();
    let mut cpu = Sm83::new();
    // SCF; CALL NC,0x0300 (not taken)
    setup_program(&mut bus, &mut cpu, &[0x37, 0xD4, 0x00, 0x03]);
    cpu.regs.sp = 0xFFFE;

    run(&mut cpu, &mut bus, 1);
    let not_taken = cpu.step(&mut bus).unwrap();
    assert_eq!(not_taken, Ticks::new(12));
    assert_eq!(cpu.regs.pc, 0x0204);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}
