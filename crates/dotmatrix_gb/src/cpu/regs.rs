use super::Cpu;

/// Condition flags.
///
/// Kept as four independent booleans; the packed byte only exists when the
/// flags travel as the low half of AF.
///
/// Packed layout:
/// - bit 7: Z (zero)
/// - bit 6: C (carry)
/// - bit 5: H (half carry)
/// - bit 4: N (negate / subtract)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Flags {
    pub zero: bool,
    pub carry: bool,
    pub half_carry: bool,
    pub negate: bool,
}

impl Flags {
    pub fn to_u8(self) -> u8 {
        let mut f = 0u8;
        if self.zero {
            f |= 0x80;
        }
        if self.carry {
            f |= 0x40;
        }
        if self.half_carry {
            f |= 0x20;
        }
        if self.negate {
            f |= 0x10;
        }
        f
    }

    pub fn from_u8(&mut self, v: u8) {
        self.zero = (v & 0x80) != 0;
        self.carry = (v & 0x40) != 0;
        self.half_carry = (v & 0x20) != 0;
        self.negate = (v & 0x10) != 0;
    }
}

/// Register file.
///
/// The 16-bit pairs are views over the 8-bit halves and are never stored
/// on their own.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub flags: Flags,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.flags.to_u8()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.flags.from_u8(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

impl Cpu {
    /// Clamp every register to its width and re-derive the flag byte.
    ///
    /// Widths are already fixed by the field types, so what remains is the
    /// flag round trip through the packed byte, which drops anything the
    /// low nibble could have carried.
    pub fn mask_registers(&mut self) {
        let packed = self.regs.flags.to_u8() & 0xF0;
        self.regs.flags.from_u8(packed);
    }
}
