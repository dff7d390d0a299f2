//! Whole-machine tests: programs in ROM running against the real memory
//! map, timer and interrupt controller.

use emu_core::{Bus, Observable, Ticks, Value};
use emu_gb::{Button, GameBoy, LoadError, Source};

/// Build a 1 KiB image with `program` at the 0x0100 entry point.
fn image_with_program(program: &[u8]) -> Vec<u8> {
    let mut image = vec![0; 0x400];
    image[0x100..0x100 + program.len()].copy_from_slice(program);
    image
}

fn boot(image: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new();
    gb.load_image(image).expect("test image loads");
    gb
}

#[test]
fn load_image_validates_size() {
    let mut gb = GameBoy::new();
    assert_eq!(gb.load_image(&[]), Err(LoadError::Empty));
    let too_big = vec![0; 0x8001];
    assert_eq!(gb.load_image(&too_big), Err(LoadError::TooLarge { size: 0x8001 }));
    assert!(gb.load_image(&[0x00]).is_ok());
}

#[test]
fn program_runs_from_the_entry_point() {
    // LD A,5; INC A; HALT
    let mut gb = boot(&image_with_program(&[0x3E, 0x05, 0x3C, 0x76]));

    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu().regs.a, 6);

    gb.step().unwrap();
    assert!(gb.cpu().is_halted());
    // Halted CPU idles but the machine keeps ticking.
    assert_eq!(gb.step().unwrap(), Ticks::new(4));
}

#[test]
fn work_ram_round_trips_through_the_cpu() {
    // LD HL,0xC000; LD (HL),0x42; LD A,(HL)
    let mut gb = boot(&image_with_program(&[0x21, 0x00, 0xC0, 0x36, 0x42, 0x7E]));

    for _ in 0..3 {
        gb.step().unwrap();
    }
    assert_eq!(gb.cpu().regs.a, 0x42);
    assert_eq!(gb.bus_mut().read(0xC000), 0x42);
    assert_eq!(gb.bus_mut().read(0xE000), 0x42); // echo
}

#[test]
fn divider_advances_with_executed_cycles() {
    // 64 NOPs = 256 cycles = one DIV increment.
    let mut gb = boot(&image_with_program(&[0x00; 64]));

    for _ in 0..64 {
        gb.step().unwrap();
    }
    assert_eq!(gb.bus_mut().read(0xFF04), 1);
    assert_eq!(gb.elapsed(), Ticks::new(256));
}

#[test]
fn timer_interrupt_reaches_its_vector() {
    // LD A,4; LDH (FF),A   enable the timer interrupt
    // LD A,5; LDH (07),A   TAC: running, 16-cycle period
    // LD A,F0; LDH (06),A  TMA, so the reload is visible
    // LD A,FF; LDH (05),A  TIMA one tick from overflow
    // EI; then NOPs until dispatch
    let mut image = image_with_program(&[
        0x3E, 0x04, 0xE0, 0xFF, 0x3E, 0x05, 0xE0, 0x07, 0x3E, 0xF0, 0xE0, 0x06, 0x3E, 0xFF,
        0xE0, 0x05, 0xFB, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]);
    image[0x50] = 0xD9; // RETI at the timer vector
    let mut gb = boot(&image);

    let mut dispatched = false;
    for _ in 0..20 {
        gb.step().unwrap();
        if gb.cpu().regs.pc == 0x0050 {
            dispatched = true;
            break;
        }
    }
    assert!(dispatched, "timer interrupt never dispatched");
    assert!(!gb.cpu().ime());
    assert_eq!(gb.bus_mut().read(0xFF0F) & 0x04, 0); // acknowledged
    assert!(gb.bus_mut().read(0xFF05) >= 0xF0); // reloaded from TMA

    // RETI resumes the interrupted program with interrupts back on.
    gb.step().unwrap();
    assert!(gb.cpu().ime());
    assert_ne!(gb.cpu().regs.pc, 0x0050);
}

#[test]
fn stop_wakes_on_a_keypad_interrupt() {
    // LD A,0x10; LDH (FF),A; STOP; NOP
    let mut gb = boot(&image_with_program(&[0x3E, 0x10, 0xE0, 0xFF, 0x10, 0x00, 0x00]));

    for _ in 0..3 {
        gb.step().unwrap();
    }
    assert!(gb.cpu().is_stopped());
    assert_eq!(gb.step().unwrap(), Ticks::new(4)); // idling

    gb.press(Button::Start);
    gb.step().unwrap();
    assert!(!gb.cpu().is_stopped());
}

#[test]
fn joypad_matrix_reads_through_the_bus() {
    let mut gb = boot(&[0x00]);
    gb.press(Button::A);
    gb.press(Button::Left);

    gb.bus_mut().write(0xFF00, 0x10);
    assert_eq!(gb.bus_mut().read(0xFF00), 0x0E);

    gb.bus_mut().write(0xFF00, 0x20);
    assert_eq!(gb.bus_mut().read(0xFF00), 0x0D);

    gb.release(Button::Left);
    assert_eq!(gb.bus_mut().read(0xFF00), 0x0F);
}

#[test]
fn external_interrupt_requests_are_visible_in_if() {
    let mut gb = boot(&[0x00]);
    gb.request_interrupt(Source::VBlank);
    assert_eq!(gb.bus_mut().read(0xFF0F), 0xE1);
}

#[test]
fn reset_restores_power_on_state_but_keeps_rom() {
    // LD A,0x42; LD (0xC000),A
    let mut gb = boot(&image_with_program(&[0x3E, 0x42, 0xEA, 0x00, 0xC0]));
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.bus_mut().read(0xC000), 0x42);

    gb.reset();
    assert_eq!(gb.cpu().regs.pc, 0x0100);
    assert_eq!(gb.cpu().regs.af(), 0x01B0);
    assert_eq!(gb.bus_mut().read(0xC000), 0x00);
    assert_eq!(gb.elapsed(), Ticks::ZERO);
    // The program is still there and runs again.
    gb.step().unwrap();
    assert_eq!(gb.cpu().regs.a, 0x42);
}

#[test]
fn machine_state_is_observable() {
    let mut gb = boot(&image_with_program(&[0x3E, 0x07]));
    gb.step().unwrap();

    assert_eq!(gb.query("cpu.a"), Some(Value::U8(0x07)));
    assert_eq!(gb.query("clock.elapsed"), Some(Value::U64(8)));
    assert_eq!(gb.query("interrupts.if"), Some(Value::U8(0xE0)));
    for path in gb.query_paths() {
        assert!(gb.query(path).is_some(), "path {path} did not resolve");
    }
    assert_eq!(gb.query("video.ly"), None);
}
