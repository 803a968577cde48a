use crate::cpu::{Condition, Cpu};

impl Cpu {
    /// JR / JR cc: signed displacement from the address after the operand.
    pub(super) fn exec_jr(&mut self, cond: Condition) {
        let offset = self.read_imm8() as i8;
        if self.condition_met(cond) {
            self.regs.pc = self.regs.pc.wrapping_add_signed(offset as i16);
        }
    }

    pub(super) fn exec_jp(&mut self, cond: Condition) {
        let target = self.read_imm16();
        if self.condition_met(cond) {
            self.jump_to(target);
        }
    }

    pub(super) fn exec_jp_hl(&mut self) {
        self.jump_to(self.regs.hl());
    }

    pub(super) fn exec_call(&mut self, cond: Condition) {
        let target = self.read_imm16();
        if self.condition_met(cond) {
            let ret = self.next_instruction_addr();
            self.push(ret);
            self.jump_to(target);
        }
    }

    /// RET / RET cc. RET Z and RET C also drop interrupt-enable, taken or
    /// not.
    pub(super) fn exec_ret(&mut self, cond: Condition) {
        if self.condition_met(cond) {
            let target = self.pop();
            self.jump_to(target);
        }
        if matches!(cond, Condition::Zero | Condition::Carry) {
            self.interrupts_enabled = false;
        }
    }

    pub(super) fn exec_reti(&mut self) {
        let target = self.pop();
        self.jump_to(target);
        self.interrupts_enabled = true;
    }

    pub(super) fn exec_rst(&mut self, vector: u8) {
        let ret = self.next_instruction_addr();
        self.push(ret);
        self.jump_to(vector as u16);
        self.interrupts_enabled = false;
    }
}
