use crate::cpu::{AluOp, Cpu, Rotation, WordReg};

impl Cpu {
    /// Apply an 8-bit ALU operation to A. CP only updates flags.
    pub(super) fn exec_alu(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a;
        match op {
            AluOp::Add => self.regs.a = self.add(a, value) as u8,
            AluOp::Adc => self.regs.a = self.adc(a, value) as u8,
            AluOp::Sub => self.regs.a = self.sub(a, value) as u8,
            AluOp::Sbc => self.regs.a = self.sbc(a, value) as u8,
            AluOp::And => self.regs.a = self.and(a, value),
            AluOp::Xor => self.regs.a = self.xor(a, value),
            AluOp::Or => self.regs.a = self.or(a, value),
            AluOp::Cp => {
                self.sub(a, value);
            }
        }
    }

    pub(super) fn exec_add_hl_rr(&mut self, reg: WordReg) {
        let hl = self.regs.hl();
        let value = self.read_word_reg(reg);
        let sum = self.add16(hl, value);
        self.regs.set_hl(sum as u16);
    }

    /// RLCA / RRCA / RLA / RRA.
    pub(super) fn exec_rotate_a(&mut self, rotation: Rotation) {
        let a = self.regs.a;
        self.regs.a = match rotation {
            Rotation::Rlc => self.rlc(a),
            Rotation::Rrc => self.rrc(a),
            Rotation::Rl => self.rl(a),
            Rotation::Rr => self.rr(a),
            other => unreachable!("{other:?} has no accumulator form"),
        };
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.regs.flags.half_carry = true;
        self.regs.flags.negate = true;
    }

    pub(super) fn exec_scf(&mut self) {
        self.regs.flags.carry = true;
        self.regs.flags.half_carry = false;
        self.regs.flags.negate = false;
    }

    pub(super) fn exec_ccf(&mut self) {
        self.regs.flags.carry = !self.regs.flags.carry;
        self.regs.flags.half_carry = false;
        self.regs.flags.negate = false;
    }
}
