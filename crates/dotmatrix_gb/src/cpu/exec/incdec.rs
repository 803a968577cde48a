use crate::cpu::{Cpu, Operand, WordReg};

impl Cpu {
    /// INC r / INC (HL)
    pub(super) fn exec_inc8(&mut self, operand: Operand) {
        let value = self.read_operand(operand);
        let result = self.inc(value);
        self.write_operand(operand, result);
    }

    /// DEC r / DEC (HL)
    pub(super) fn exec_dec8(&mut self, operand: Operand) {
        let value = self.read_operand(operand);
        let result = self.dec(value);
        self.write_operand(operand, result);
    }

    // 16-bit INC/DEC wrap and do not touch flags.

    pub(super) fn exec_inc16(&mut self, reg: WordReg) {
        let value = self.read_word_reg(reg).wrapping_add(1);
        self.write_word_reg(reg, value);
    }

    pub(super) fn exec_dec16(&mut self, reg: WordReg) {
        let value = self.read_word_reg(reg).wrapping_sub(1);
        self.write_word_reg(reg, value);
    }
}
