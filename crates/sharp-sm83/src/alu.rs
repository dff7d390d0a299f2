//! ALU operations for the SM83.
//!
//! Every operation returns the result together with a complete flags byte;
//! callers that must preserve a flag (CF across INC/DEC, ZF across
//! ADD HL,rr) mask it back in themselves.

#![allow(clippy::cast_possible_truncation)] // Intentional truncation for low byte extraction.
#![allow(clippy::cast_sign_loss)]

use crate::flags::{CF, HF, NF, ZF};

/// Result of an ALU operation with flags.
#[derive(Debug, Clone, Copy)]
pub struct AluResult {
    pub value: u8,
    pub flags: u8,
}

const fn zf(value: u8) -> u8 {
    if value == 0 { ZF } else { 0 }
}

/// Add two bytes with optional carry.
#[must_use]
pub fn add8(a: u8, b: u8, carry: bool) -> AluResult {
    let c = u8::from(carry);
    let result16 = u16::from(a) + u16::from(b) + u16::from(c);
    let result = result16 as u8;

    let mut flags = zf(result);
    // Half-carry: carry out of bit 3.
    if (a & 0x0F) + (b & 0x0F) + c > 0x0F {
        flags |= HF;
    }
    if result16 > 0xFF {
        flags |= CF;
    }

    AluResult { value: result, flags }
}

/// Subtract two bytes with optional borrow.
#[must_use]
pub fn sub8(a: u8, b: u8, carry: bool) -> AluResult {
    let c = u8::from(carry);
    let result = a.wrapping_sub(b).wrapping_sub(c);

    let mut flags = NF | zf(result);
    // Half-carry: borrow from bit 4.
    if (a & 0x0F) < (b & 0x0F) + c {
        flags |= HF;
    }
    if u16::from(a) < u16::from(b) + u16::from(c) {
        flags |= CF;
    }

    AluResult { value: result, flags }
}

/// AND operation. Half-carry is always set.
#[must_use]
pub fn and8(a: u8, b: u8) -> AluResult {
    let result = a & b;
    AluResult {
        value: result,
        flags: zf(result) | HF,
    }
}

/// OR operation.
#[must_use]
pub fn or8(a: u8, b: u8) -> AluResult {
    let result = a | b;
    AluResult {
        value: result,
        flags: zf(result),
    }
}

/// XOR operation.
#[must_use]
pub fn xor8(a: u8, b: u8) -> AluResult {
    let result = a ^ b;
    AluResult {
        value: result,
        flags: zf(result),
    }
}

/// Increment. Does not report carry; the caller preserves CF.
#[must_use]
pub fn inc8(value: u8) -> AluResult {
    let result = value.wrapping_add(1);
    let mut flags = zf(result);
    if value & 0x0F == 0x0F {
        flags |= HF;
    }
    AluResult { value: result, flags }
}

/// Decrement. Does not report borrow; the caller preserves CF.
#[must_use]
pub fn dec8(value: u8) -> AluResult {
    let result = value.wrapping_sub(1);
    let mut flags = NF | zf(result);
    if value & 0x0F == 0 {
        flags |= HF;
    }
    AluResult { value: result, flags }
}

/// 16-bit add for ADD HL,rr. Returns the result and the N/H/C flags; the
/// caller preserves ZF. Half-carry is taken from bit 11.
#[must_use]
pub fn add16(a: u16, b: u16) -> (u16, u8) {
    let result32 = u32::from(a) + u32::from(b);
    let mut flags = 0;
    if (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF {
        flags |= HF;
    }
    if result32 > 0xFFFF {
        flags |= CF;
    }
    (result32 as u16, flags)
}

/// Signed-offset add for ADD SP,e and LD HL,SP+e.
///
/// The offset is sign-extended for the result, but the H and C flags come
/// from the unsigned low-byte addition: H from bit 3, C from bit 7. Z and N
/// are always clear.
#[must_use]
pub fn add_sp(sp: u16, offset: u8) -> (u16, u8) {
    let result = sp.wrapping_add_signed(i16::from(offset as i8));
    let mut flags = 0;
    if (sp & 0x000F) + u16::from(offset & 0x0F) > 0x000F {
        flags |= HF;
    }
    if (sp & 0x00FF) + u16::from(offset) > 0x00FF {
        flags |= CF;
    }
    (result, flags)
}

/// Decimal-adjust the accumulator after a BCD add or subtract.
///
/// After an addition (N clear) each out-of-range nibble is corrected
/// upward and a decimal carry is reported; after a subtraction (N set)
/// only the recorded H and C borrows are corrected downward. H is always
/// cleared, N is preserved, and C is never cleared once set.
#[must_use]
pub fn daa(a: u8, f: u8) -> AluResult {
    let mut adjust = 0u8;
    let mut carry = f & CF != 0;

    let result = if f & NF == 0 {
        if f & HF != 0 || a & 0x0F > 0x09 {
            adjust |= 0x06;
        }
        if carry || a > 0x99 {
            adjust |= 0x60;
            carry = true;
        }
        a.wrapping_add(adjust)
    } else {
        if f & HF != 0 {
            adjust |= 0x06;
        }
        if carry {
            adjust |= 0x60;
        }
        a.wrapping_sub(adjust)
    };

    let mut flags = zf(result) | (f & NF);
    if carry {
        flags |= CF;
    }

    AluResult { value: result, flags }
}

/// Rotate left circular. ZF reflects the result; the A-register form
/// (RLCA) masks it off.
#[must_use]
pub fn rlc(value: u8) -> AluResult {
    let result = value.rotate_left(1);
    let mut flags = zf(result);
    if value & 0x80 != 0 {
        flags |= CF;
    }
    AluResult { value: result, flags }
}

/// Rotate right circular.
#[must_use]
pub fn rrc(value: u8) -> AluResult {
    let result = value.rotate_right(1);
    let mut flags = zf(result);
    if value & 0x01 != 0 {
        flags |= CF;
    }
    AluResult { value: result, flags }
}

/// Rotate left through carry.
#[must_use]
pub fn rl(value: u8, carry: bool) -> AluResult {
    let result = value << 1 | u8::from(carry);
    let mut flags = zf(result);
    if value & 0x80 != 0 {
        flags |= CF;
    }
    AluResult { value: result, flags }
}

/// Rotate right through carry.
#[must_use]
pub fn rr(value: u8, carry: bool) -> AluResult {
    let result = value >> 1 | u8::from(carry) << 7;
    let mut flags = zf(result);
    if value & 0x01 != 0 {
        flags |= CF;
    }
    AluResult { value: result, flags }
}

/// Shift left arithmetic. Bit 0 becomes zero.
#[must_use]
pub fn sla(value: u8) -> AluResult {
    let result = value << 1;
    let mut flags = zf(result);
    if value & 0x80 != 0 {
        flags |= CF;
    }
    AluResult { value: result, flags }
}

/// Shift right arithmetic. Bit 7 is preserved.
#[must_use]
pub fn sra(value: u8) -> AluResult {
    let result = value >> 1 | (value & 0x80);
    let mut flags = zf(result);
    if value & 0x01 != 0 {
        flags |= CF;
    }
    AluResult { value: result, flags }
}

/// Shift right logical. Bit 7 becomes zero.
#[must_use]
pub fn srl(value: u8) -> AluResult {
    let result = value >> 1;
    let mut flags = zf(result);
    if value & 0x01 != 0 {
        flags |= CF;
    }
    AluResult { value: result, flags }
}

/// Swap nibbles.
#[must_use]
pub fn swap(value: u8) -> AluResult {
    let result = value.rotate_left(4);
    AluResult {
        value: result,
        flags: zf(result),
    }
}

/// Test bit `n`. Returns the Z/N/H flags; the caller preserves CF.
#[must_use]
pub fn bit(value: u8, n: u8) -> u8 {
    let mut flags = HF;
    if value & (1 << n) == 0 {
        flags |= ZF;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add8_half_carry_at_bit_3() {
        let r = add8(0x0F, 0x01, false);
        assert_eq!(r.value, 0x10);
        assert_eq!(r.flags, HF);
    }

    #[test]
    fn add8_wraps_with_zero_and_carry() {
        let r = add8(0xFF, 0x01, false);
        assert_eq!(r.value, 0x00);
        assert_eq!(r.flags, ZF | HF | CF);
    }

    #[test]
    fn adc_carry_in_contributes_to_half_carry() {
        let r = add8(0x0F, 0x00, true);
        assert_eq!(r.value, 0x10);
        assert_eq!(r.flags, HF);
    }

    #[test]
    fn sub8_borrow() {
        let r = sub8(0x00, 0x01, false);
        assert_eq!(r.value, 0xFF);
        assert_eq!(r.flags, NF | HF | CF);
    }

    #[test]
    fn sub8_equal_sets_zero() {
        let r = sub8(0x42, 0x42, false);
        assert_eq!(r.value, 0x00);
        assert_eq!(r.flags, ZF | NF);
    }

    #[test]
    fn and8_always_sets_half_carry() {
        let r = and8(0xF0, 0x0F);
        assert_eq!(r.value, 0x00);
        assert_eq!(r.flags, ZF | HF);
    }

    #[test]
    fn inc8_preserves_no_carry() {
        let r = inc8(0xFF);
        assert_eq!(r.value, 0x00);
        assert_eq!(r.flags, ZF | HF);
    }

    #[test]
    fn dec8_half_borrow() {
        let r = dec8(0x10);
        assert_eq!(r.value, 0x0F);
        assert_eq!(r.flags, NF | HF);
    }

    #[test]
    fn add16_half_carry_at_bit_11() {
        let (value, flags) = add16(0x0FFF, 0x0001);
        assert_eq!(value, 0x1000);
        assert_eq!(flags, HF);

        let (value, flags) = add16(0x8000, 0x8000);
        assert_eq!(value, 0x0000);
        assert_eq!(flags, CF);
    }

    #[test]
    fn add_sp_flags_come_from_low_byte() {
        // 0xFFF8 + 8: low byte 0xF8 + 0x08 carries out of both bit 3 and
        // bit 7 even though the 16-bit result wraps to zero.
        let (value, flags) = add_sp(0xFFF8, 0x08);
        assert_eq!(value, 0x0000);
        assert_eq!(flags, HF | CF);
    }

    #[test]
    fn add_sp_negative_offset() {
        let (value, flags) = add_sp(0x0000, 0xFF);
        assert_eq!(value, 0xFFFF);
        assert_eq!(flags, 0);
    }

    #[test]
    fn daa_after_bcd_add() {
        // 0x19 + 0x28 = 0x41 with H set; DAA corrects to 0x47.
        let sum = add8(0x19, 0x28, false);
        assert_eq!(sum.value, 0x41);
        let r = daa(sum.value, sum.flags);
        assert_eq!(r.value, 0x47);
        assert_eq!(r.flags, 0);
    }

    #[test]
    fn daa_add_with_decimal_carry() {
        // 0x90 + 0x90 = 0x20 with C set; DAA gives 0x80, carry kept.
        let sum = add8(0x90, 0x90, false);
        let r = daa(sum.value, sum.flags);
        assert_eq!(r.value, 0x80);
        assert_eq!(r.flags, CF);
    }

    #[test]
    fn daa_after_bcd_subtract() {
        // 0x20 - 0x13 = 0x0D with N and H set; DAA corrects to 0x07.
        let diff = sub8(0x20, 0x13, false);
        assert_eq!(diff.value, 0x0D);
        let r = daa(diff.value, diff.flags);
        assert_eq!(r.value, 0x07);
        assert_eq!(r.flags, NF);
    }

    #[test]
    fn rotates_and_shifts() {
        assert_eq!(rlc(0x80).value, 0x01);
        assert_eq!(rlc(0x80).flags, CF);
        assert_eq!(rrc(0x01).value, 0x80);
        assert_eq!(rl(0x80, false).flags, ZF | CF);
        assert_eq!(rr(0x01, true).value, 0x80);
        assert_eq!(sra(0x81).value, 0xC0);
        assert_eq!(srl(0x81).value, 0x40);
        assert_eq!(swap(0xAB).value, 0xBA);
    }

    #[test]
    fn bit_test_reports_zero_for_clear_bit() {
        assert_eq!(bit(0b0000_0100, 2), HF);
        assert_eq!(bit(0b0000_0100, 3), ZF | HF);
    }
}
