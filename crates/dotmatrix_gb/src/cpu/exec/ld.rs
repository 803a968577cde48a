use crate::cpu::{Cpu, Indirect, Operand, WordReg};

/// Base of the high I/O page addressed by LDH and LD (C).
const HIGH_PAGE: u16 = 0xFF00;

impl Cpu {
    pub(super) fn exec_ld_r_r(&mut self, dst: Operand, src: Operand) {
        let value = self.read_operand(src);
        self.write_operand(dst, value);
    }

    pub(super) fn exec_ld_r_d8(&mut self, dst: Operand) {
        let value = self.read_imm8();
        self.write_operand(dst, value);
    }

    pub(super) fn exec_ld_rr_d16(&mut self, reg: WordReg) {
        let value = self.read_imm16();
        self.write_word_reg(reg, value);
    }

    /// Resolve the address of an `(rr)` operand, applying the HL+/HL-
    /// post-adjustment.
    fn indirect_addr(&mut self, operand: Indirect) -> u16 {
        match operand {
            Indirect::Bc => self.regs.bc(),
            Indirect::De => self.regs.de(),
            Indirect::HlIncrement => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDecrement => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a(&mut self, target: Indirect) {
        let addr = self.indirect_addr(target);
        self.write_byte(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_indirect(&mut self, source: Indirect) {
        let addr = self.indirect_addr(source);
        self.regs.a = self.read_byte(addr);
    }

    pub(super) fn exec_ld_a16_sp(&mut self) {
        let addr = self.read_imm16();
        self.write_word(addr, self.regs.sp);
    }

    pub(super) fn exec_ldh_a8_a(&mut self) {
        let offset = self.read_imm8();
        self.write_byte(HIGH_PAGE | offset as u16, self.regs.a);
    }

    pub(super) fn exec_ldh_a_a8(&mut self) {
        let offset = self.read_imm8();
        self.regs.a = self.read_byte(HIGH_PAGE | offset as u16);
    }

    pub(super) fn exec_ldh_c_a(&mut self) {
        self.write_byte(HIGH_PAGE | self.regs.c as u16, self.regs.a);
    }

    pub(super) fn exec_ldh_a_c(&mut self) {
        self.regs.a = self.read_byte(HIGH_PAGE | self.regs.c as u16);
    }

    pub(super) fn exec_ld_a16_a(&mut self) {
        let addr = self.read_imm16();
        self.write_byte(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_a16(&mut self) {
        let addr = self.read_imm16();
        self.regs.a = self.read_byte(addr);
    }

    pub(super) fn exec_ld_sp_hl(&mut self) {
        self.regs.sp = self.regs.hl();
    }

    // The two SP+r8 forms take a signed displacement and leave flags alone.

    pub(super) fn exec_ld_hl_sp_r8(&mut self) {
        let offset = self.read_imm8() as i8;
        let value = self.regs.sp.wrapping_add_signed(offset as i16);
        self.regs.set_hl(value);
    }

    pub(super) fn exec_add_sp_r8(&mut self) {
        let offset = self.read_imm8() as i8;
        self.regs.sp = self.regs.sp.wrapping_add_signed(offset as i16);
    }
}
