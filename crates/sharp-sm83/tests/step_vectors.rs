//! Data-driven single-step tests.
//!
//! Each vector in `tests/data/step_vectors.json` holds the complete CPU
//! and memory state before one instruction, the expected state after it,
//! and the cycle cost, worked out by hand from the published SM83
//! instruction tables. Unlisted registers are zero on both sides.

use std::fs;
use std::path::Path;

use emu_core::{Bus, SimpleBus, Ticks};
use serde::Deserialize;
use sharp_sm83::Sm83;

#[derive(Deserialize)]
struct TestCase {
    name: String,
    initial: CpuState,
    #[serde(rename = "final")]
    final_state: CpuState,
    cycles: u64,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CpuState {
    a: u8,
    f: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,
    sp: u16,
    pc: u16,
    /// (address, value) pairs: contents to preload, or to assert afterwards.
    ram: Vec<(u16, u8)>,
}

fn apply(cpu: &mut Sm83, bus: &mut SimpleBus, state: &CpuState) {
    cpu.regs.a = state.a;
    cpu.regs.f = state.f;
    cpu.regs.b = state.b;
    cpu.regs.c = state.c;
    cpu.regs.d = state.d;
    cpu.regs.e = state.e;
    cpu.regs.h = state.h;
    cpu.regs.l = state.l;
    cpu.regs.sp = state.sp;
    cpu.regs.pc = state.pc;
    for &(address, value) in &state.ram {
        bus.write(address, value);
    }
}

fn check(cpu: &Sm83, bus: &SimpleBus, expected: &CpuState, name: &str) {
    assert_eq!(cpu.regs.a, expected.a, "{name}: A");
    assert_eq!(cpu.regs.f, expected.f, "{name}: F");
    assert_eq!(cpu.regs.b, expected.b, "{name}: B");
    assert_eq!(cpu.regs.c, expected.c, "{name}: C");
    assert_eq!(cpu.regs.d, expected.d, "{name}: D");
    assert_eq!(cpu.regs.e, expected.e, "{name}: E");
    assert_eq!(cpu.regs.h, expected.h, "{name}: H");
    assert_eq!(cpu.regs.l, expected.l, "{name}: L");
    assert_eq!(cpu.regs.sp, expected.sp, "{name}: SP");
    assert_eq!(cpu.regs.pc, expected.pc, "{name}: PC");
    for &(address, value) in &expected.ram {
        assert_eq!(bus.peek(address), value, "{name}: ram[{address:#06X}]");
    }
}

#[test]
fn step_vectors() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/step_vectors.json");
    let data = fs::read_to_string(&path).expect("vector file readable");
    let cases: Vec<TestCase> = serde_json::from_str(&data).expect("vector file parses");
    assert!(!cases.is_empty());

    for case in &cases {
        let mut cpu = Sm83::new();
        let mut bus = SimpleBus::new();
        apply(&mut cpu, &mut bus, &case.initial);

        let cycles = cpu
            .step(&mut bus)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));

        assert_eq!(cycles, Ticks::new(case.cycles), "{}: cycles", case.name);
        check(&cpu, &bus, &case.final_state, &case.name);
    }
}
