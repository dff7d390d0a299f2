//! Divider and timer unit: DIV (0xFF04), TIMA (0xFF05), TMA (0xFF06)
//! and TAC (0xFF07).

use crate::interrupt::{InterruptController, Source};

/// Cycles per TIMA increment for each TAC clock-select value.
const PERIODS: [u32; 4] = [1024, 16, 64, 256];

/// The DMG timer.
///
/// DIV is the high byte of a 16-bit counter that runs every cycle and can
/// only be cleared, never set. TIMA ticks at the TAC-selected rate while
/// TAC bit 2 is set; when it overflows it reads as zero for the remainder
/// of the current step, and at the start of the next step it is reloaded
/// from TMA and a Timer interrupt is requested. Writing TIMA inside that
/// window cancels the reload.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    /// Free-running counter; DIV is its high byte.
    counter: u16,
    tima: u8,
    tma: u8,
    tac: u8,
    /// Cycles accumulated toward the next TIMA increment.
    accumulator: u32,
    reload_pending: bool,
}

impl Timer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: 0,
            tima: 0,
            tma: 0,
            tac: 0,
            accumulator: 0,
            reload_pending: false,
        }
    }

    /// Advance by `cycles`, requesting a Timer interrupt on a completed
    /// overflow.
    pub fn step(&mut self, cycles: u32, interrupts: &mut InterruptController) {
        // A pending overflow resolves at the start of the step after the
        // one that produced it.
        if self.reload_pending {
            self.reload_pending = false;
            self.tima = self.tma;
            interrupts.request(Source::Timer);
        }

        #[allow(clippy::cast_possible_truncation)]
        {
            self.counter = self.counter.wrapping_add(cycles as u16);
        }

        if self.tac & 0x04 == 0 {
            return;
        }

        self.accumulator += cycles;
        let period = PERIODS[(self.tac & 0x03) as usize];
        while self.accumulator >= period {
            self.accumulator -= period;
            let (tima, overflow) = self.tima.overflowing_add(1);
            self.tima = tima;
            if overflow {
                // Any surplus cycles carry over to after the reload.
                self.reload_pending = true;
                break;
            }
        }
    }

    /// DIV register value.
    #[must_use]
    pub const fn div(&self) -> u8 {
        (self.counter >> 8) as u8
    }

    /// Writing any value to DIV clears the whole counter, including the
    /// cycles accumulated toward the next TIMA tick.
    pub fn reset_div(&mut self) {
        self.counter = 0;
        self.accumulator = 0;
    }

    #[must_use]
    pub const fn tima(&self) -> u8 {
        self.tima
    }

    pub fn set_tima(&mut self, value: u8) {
        self.tima = value;
        self.reload_pending = false;
    }

    #[must_use]
    pub const fn tma(&self) -> u8 {
        self.tma
    }

    pub fn set_tma(&mut self, value: u8) {
        self.tma = value;
    }

    /// TAC register value. Only the low three bits exist.
    #[must_use]
    pub const fn tac(&self) -> u8 {
        0xF8 | self.tac
    }

    pub fn set_tac(&mut self, value: u8) {
        self.tac = value & 0x07;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_is_the_high_byte_of_the_counter() {
        let mut timer = Timer::new();
        let mut ic = InterruptController::new();
        timer.step(255, &mut ic);
        assert_eq!(timer.div(), 0);
        timer.step(1, &mut ic);
        assert_eq!(timer.div(), 1);
    }

    #[test]
    fn div_write_clears_the_counter() {
        let mut timer = Timer::new();
        let mut ic = InterruptController::new();
        timer.step(0x1234, &mut ic);
        assert_ne!(timer.div(), 0);
        timer.reset_div();
        assert_eq!(timer.div(), 0);
    }

    #[test]
    fn tima_rate_follows_tac() {
        let mut timer = Timer::new();
        let mut ic = InterruptController::new();
        timer.set_tac(0x05); // enabled, 16-cycle period
        timer.step(64, &mut ic);
        assert_eq!(timer.tima(), 4);

        timer.set_tac(0x04); // enabled, 1024-cycle period
        timer.step(1024, &mut ic);
        assert_eq!(timer.tima(), 5);
    }

    #[test]
    fn disabled_timer_does_not_count() {
        let mut timer = Timer::new();
        let mut ic = InterruptController::new();
        timer.step(4096, &mut ic);
        assert_eq!(timer.tima(), 0);
        assert_ne!(timer.div(), 0);
    }

    #[test]
    fn overflow_reads_zero_then_reloads_and_interrupts() {
        let mut timer = Timer::new();
        let mut ic = InterruptController::new();
        timer.set_tac(0x05);
        timer.set_tma(0xAB);
        timer.set_tima(0xFF);

        timer.step(16, &mut ic);
        assert_eq!(timer.tima(), 0); // overflow window
        assert_eq!(ic.flags() & 0x04, 0);

        timer.step(4, &mut ic);
        assert_eq!(timer.tima(), 0xAB);
        assert_ne!(ic.flags() & 0x04, 0);
    }

    #[test]
    fn tima_write_cancels_the_reload() {
        let mut timer = Timer::new();
        let mut ic = InterruptController::new();
        timer.set_tac(0x05);
        timer.set_tma(0xAB);
        timer.set_tima(0xFF);

        timer.step(16, &mut ic);
        timer.set_tima(0x10);
        timer.step(4, &mut ic);
        assert_eq!(timer.tima(), 0x10);
        assert_eq!(ic.flags() & 0x04, 0);
    }
}
