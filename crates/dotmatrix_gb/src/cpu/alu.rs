use super::Cpu;

/// Return `value` with bit `n` forced to `on`. No flag effects.
#[inline]
pub fn set_bit(value: u8, n: u8, on: bool) -> u8 {
    let mask = 1u8 << (n & 0x07);
    if on {
        value | mask
    } else {
        value & !mask
    }
}

impl Cpu {
    /// 8-bit ADD. Returns the unmasked sum; callers truncate on store.
    ///
    /// Z compares the unmasked sum, so 0x80 + 0x80 leaves Z clear even
    /// though the stored byte is 0x00.
    pub(crate) fn add(&mut self, a: u8, b: u8) -> u16 {
        let sum = a as u16 + b as u16;
        self.flags_after_add(sum, b);
        sum
    }

    /// 8-bit ADC: ADD with one extra if C was set on entry.
    pub(crate) fn adc(&mut self, a: u8, b: u8) -> u16 {
        let carry_in = self.regs.flags.carry as u16;
        let sum = a as u16 + b as u16 + carry_in;
        self.flags_after_add(sum, b);
        sum
    }

    #[inline]
    fn flags_after_add(&mut self, sum: u16, b: u8) {
        let flags = &mut self.regs.flags;
        flags.zero = sum == 0;
        flags.carry = (sum & 0x100) != 0;
        flags.half_carry = (sum & 0x08) != 0 && (b & 0x08) != 0;
        flags.negate = false;
    }

    /// 8-bit SUB. Returns the signed difference; callers truncate on store.
    pub(crate) fn sub(&mut self, a: u8, b: u8) -> i16 {
        let diff = a as i16 - b as i16;
        self.flags_after_sub(diff, a, b);
        diff
    }

    /// 8-bit SBC: SUB with one more taken off if C was set on entry.
    pub(crate) fn sbc(&mut self, a: u8, b: u8) -> i16 {
        let carry_in = self.regs.flags.carry as i16;
        let diff = a as i16 - b as i16 - carry_in;
        self.flags_after_sub(diff, a, b);
        diff
    }

    #[inline]
    fn flags_after_sub(&mut self, diff: i16, a: u8, b: u8) {
        let flags = &mut self.regs.flags;
        flags.carry = diff < 0;
        flags.zero = diff == 0;
        flags.negate = true;
        flags.half_carry = (a & 0x08) == 0 && (b & 0x08) != 0;
    }

    pub(crate) fn and(&mut self, a: u8, b: u8) -> u8 {
        let result = a & b;
        self.flags_after_logic(result, true);
        result
    }

    pub(crate) fn or(&mut self, a: u8, b: u8) -> u8 {
        let result = a | b;
        self.flags_after_logic(result, false);
        result
    }

    pub(crate) fn xor(&mut self, a: u8, b: u8) -> u8 {
        let result = a ^ b;
        self.flags_after_logic(result, false);
        result
    }

    #[inline]
    fn flags_after_logic(&mut self, result: u8, half_carry: bool) {
        let flags = &mut self.regs.flags;
        flags.zero = result == 0;
        flags.carry = false;
        flags.negate = false;
        flags.half_carry = half_carry;
    }

    /// 8-bit increment. C is left alone.
    pub(crate) fn inc(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let flags = &mut self.regs.flags;
        flags.half_carry = (value & 0x0F) == 0x0F;
        flags.zero = result == 0;
        flags.negate = false;
        result
    }

    /// 8-bit decrement. C is left alone.
    pub(crate) fn dec(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let flags = &mut self.regs.flags;
        flags.half_carry = (value & 0x0F) == 0x00;
        flags.zero = result == 0;
        flags.negate = true;
        result
    }

    /// 16-bit add for `ADD HL,rr`. Z is unaffected.
    pub(crate) fn add16(&mut self, a: u16, b: u16) -> u32 {
        let sum = a as u32 + b as u32;
        let flags = &mut self.regs.flags;
        flags.carry = (sum & 0x1_0000) != 0;
        flags.half_carry = (sum & 0x0800) != 0 && (b & 0x0800) != 0;
        flags.negate = false;
        sum
    }

    pub(crate) fn rlc(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(1);
        self.flags_after_rotate(result, (value & 0x80) != 0);
        result
    }

    pub(crate) fn rrc(&mut self, value: u8) -> u8 {
        let result = value.rotate_right(1);
        self.flags_after_rotate(result, (value & 0x01) != 0);
        result
    }

    /// Rotate left through carry.
    pub(crate) fn rl(&mut self, value: u8) -> u8 {
        let carry_in = self.regs.flags.carry as u8;
        let result = (value << 1) | carry_in;
        self.flags_after_rotate(result, (value & 0x80) != 0);
        result
    }

    /// Rotate right through carry.
    pub(crate) fn rr(&mut self, value: u8) -> u8 {
        let carry_in = if self.regs.flags.carry { 0x80 } else { 0 };
        let result = (value >> 1) | carry_in;
        self.flags_after_rotate(result, (value & 0x01) != 0);
        result
    }

    #[inline]
    fn flags_after_rotate(&mut self, result: u8, carry: bool) {
        let flags = &mut self.regs.flags;
        flags.carry = carry;
        flags.zero = result == 0;
        flags.negate = false;
        flags.half_carry = false;
    }

    // Shifts report the bit shifted out but leave Z alone.

    pub(crate) fn sla(&mut self, value: u8) -> u8 {
        self.flags_after_shift((value & 0x80) != 0);
        value << 1
    }

    /// Arithmetic right shift; bit 7 is kept.
    pub(crate) fn sra(&mut self, value: u8) -> u8 {
        self.flags_after_shift((value & 0x01) != 0);
        (value & 0x80) | (value >> 1)
    }

    pub(crate) fn srl(&mut self, value: u8) -> u8 {
        self.flags_after_shift((value & 0x01) != 0);
        value >> 1
    }

    #[inline]
    fn flags_after_shift(&mut self, carry: bool) {
        let flags = &mut self.regs.flags;
        flags.carry = carry;
        flags.negate = false;
        flags.half_carry = false;
    }

    /// Exchange the two nibbles. Nothing is shifted out, so C is cleared.
    pub(crate) fn swap(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(4);
        self.flags_after_rotate(result, false);
        result
    }

    /// Z is set when bit `n` of `value` is clear. C is left alone.
    pub(crate) fn test_bit(&mut self, value: u8, n: u8) {
        let flags = &mut self.regs.flags;
        flags.zero = (value & (1 << (n & 0x07))) == 0;
        flags.negate = false;
        flags.half_carry = false;
    }
}
