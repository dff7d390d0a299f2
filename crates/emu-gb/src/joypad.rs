//! Joypad register (0xFF00).
//!
//! The eight keys are wired as a 2x4 matrix. Software selects a row by
//! writing bit 4 (buttons) or bit 5 (directions), then reads the four key
//! lines, which are active low.

use crate::interrupt::{InterruptController, Source};

/// One of the eight keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Right,
    Left,
    Up,
    Down,
}

impl Button {
    /// Line within the key's row. Active low.
    const fn line(self) -> u8 {
        match self {
            Button::A | Button::Right => 0x01,
            Button::B | Button::Left => 0x02,
            Button::Select | Button::Up => 0x04,
            Button::Start | Button::Down => 0x08,
        }
    }

    const fn is_direction(self) -> bool {
        matches!(self, Button::Right | Button::Left | Button::Up | Button::Down)
    }
}

/// Joypad matrix state.
#[derive(Debug, Clone, Copy)]
pub struct Joypad {
    /// A, B, Select, Start lines, active low.
    buttons: u8,
    /// Right, Left, Up, Down lines, active low.
    directions: u8,
    /// Last written row select (bits 4-5).
    select: u8,
}

impl Joypad {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buttons: 0x0F,
            directions: 0x0F,
            select: 0,
        }
    }

    /// Read 0xFF00: the four key lines of the selected row.
    #[must_use]
    pub const fn read(&self) -> u8 {
        match self.select {
            0x10 => self.buttons,
            0x20 => self.directions,
            _ => 0,
        }
    }

    /// Write 0xFF00: only the row-select bits stick.
    pub fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Press a key. Any keypad edge requests a Joypad interrupt.
    pub fn press(&mut self, button: Button, interrupts: &mut InterruptController) {
        if button.is_direction() {
            self.directions &= !button.line();
        } else {
            self.buttons &= !button.line();
        }
        interrupts.request(Source::Joypad);
    }

    /// Release a key.
    pub fn release(&mut self, button: Button, interrupts: &mut InterruptController) {
        if button.is_direction() {
            self.directions |= button.line();
        } else {
            self.buttons |= button.line();
        }
        interrupts.request(Source::Joypad);
    }
}

impl Default for Joypad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_selected_by_the_written_bits() {
        let mut joypad = Joypad::new();
        let mut ic = InterruptController::new();
        joypad.press(Button::A, &mut ic);
        joypad.press(Button::Down, &mut ic);

        joypad.write(0x10);
        assert_eq!(joypad.read(), 0x0E); // A held

        joypad.write(0x20);
        assert_eq!(joypad.read(), 0x07); // Down held

        joypad.write(0x00);
        assert_eq!(joypad.read(), 0);
    }

    #[test]
    fn release_restores_the_line() {
        let mut joypad = Joypad::new();
        let mut ic = InterruptController::new();
        joypad.write(0x10);
        joypad.press(Button::Start, &mut ic);
        assert_eq!(joypad.read(), 0x07);
        joypad.release(Button::Start, &mut ic);
        assert_eq!(joypad.read(), 0x0F);
    }

    #[test]
    fn edges_request_the_joypad_interrupt() {
        let mut joypad = Joypad::new();
        let mut ic = InterruptController::new();
        joypad.press(Button::B, &mut ic);
        assert_ne!(ic.flags() & 0x10, 0);
    }
}
