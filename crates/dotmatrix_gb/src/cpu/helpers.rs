use super::{Condition, Cpu, Operand, StackPair, WordReg};

impl Cpu {
    /// Read an 8-bit operand slot; (HL) goes through memory.
    #[inline]
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::B => self.regs.b,
            Operand::C => self.regs.c,
            Operand::D => self.regs.d,
            Operand::E => self.regs.e,
            Operand::H => self.regs.h,
            Operand::L => self.regs.l,
            Operand::IndirectHl => self.read_byte(self.regs.hl()),
            Operand::A => self.regs.a,
        }
    }

    /// Write an 8-bit operand slot. The encoding matches `read_operand`.
    #[inline]
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::B => self.regs.b = value,
            Operand::C => self.regs.c = value,
            Operand::D => self.regs.d = value,
            Operand::E => self.regs.e = value,
            Operand::H => self.regs.h = value,
            Operand::L => self.regs.l = value,
            Operand::IndirectHl => self.write_byte(self.regs.hl(), value),
            Operand::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(crate) fn read_word_reg(&self, reg: WordReg) -> u16 {
        match reg {
            WordReg::Bc => self.regs.bc(),
            WordReg::De => self.regs.de(),
            WordReg::Hl => self.regs.hl(),
            WordReg::Sp => self.regs.sp,
        }
    }

    #[inline]
    pub(crate) fn write_word_reg(&mut self, reg: WordReg, value: u16) {
        match reg {
            WordReg::Bc => self.regs.set_bc(value),
            WordReg::De => self.regs.set_de(value),
            WordReg::Hl => self.regs.set_hl(value),
            WordReg::Sp => self.regs.sp = value,
        }
    }

    /// Advance PC onto the next operand byte and read it.
    ///
    /// PC is left pointing at the byte just read; the end-of-step increment
    /// moves it past the instruction.
    #[inline]
    pub(crate) fn read_imm8(&mut self) -> u8 {
        self.regs.pc = self.regs.pc.wrapping_add(1);
        self.read_byte(self.regs.pc)
    }

    /// Two `read_imm8` calls, little-endian.
    #[inline]
    pub(crate) fn read_imm16(&mut self) -> u16 {
        let lo = self.read_imm8();
        let hi = self.read_imm8();
        u16::from_le_bytes([lo, hi])
    }

    /// Push a word: high byte first, each write preceded by a decrement.
    pub fn push(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_byte(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_byte(self.regs.sp, lo);
    }

    /// Pop a word: low byte first, each read followed by an increment.
    pub fn pop(&mut self) -> u16 {
        let lo = self.read_byte(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.read_byte(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(crate) fn read_stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::Bc => self.regs.bc(),
            StackPair::De => self.regs.de(),
            StackPair::Hl => self.regs.hl(),
            StackPair::Af => self.regs.af(),
        }
    }

    #[inline]
    pub(crate) fn write_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::Bc => self.regs.set_bc(value),
            StackPair::De => self.regs.set_de(value),
            StackPair::Hl => self.regs.set_hl(value),
            StackPair::Af => self.regs.set_af(value),
        }
    }

    #[inline]
    pub(crate) fn condition_met(&self, cond: Condition) -> bool {
        let flags = self.regs.flags;
        match cond {
            Condition::Always => true,
            Condition::NotZero => !flags.zero,
            Condition::Zero => flags.zero,
            Condition::NotCarry => !flags.carry,
            Condition::Carry => flags.carry,
        }
    }

    /// Transfer control so that the next fetch happens at `target`.
    ///
    /// PC holds `target - 1` until the end-of-step increment.
    #[inline]
    pub(crate) fn jump_to(&mut self, target: u16) {
        self.regs.pc = target.wrapping_sub(1);
    }

    /// Address of the instruction after the current one, once its operand
    /// bytes have been consumed.
    #[inline]
    pub(crate) fn next_instruction_addr(&self) -> u16 {
        self.regs.pc.wrapping_add(1)
    }
}
