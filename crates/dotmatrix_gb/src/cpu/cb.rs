use super::alu::set_bit;
use super::{Cpu, Operand, Rotation};

impl Cpu {
    /// Execute an extended-table (0xCB-prefixed) opcode.
    ///
    /// Layout: `op >> 6` picks the group (rotate/shift, BIT, RES, SET),
    /// bits 3–5 pick the rotation or bit number, bits 0–2 the operand slot.
    /// Everything except BIT writes its result back to the slot.
    pub(crate) fn execute_extended(&mut self, op: u8) {
        let group = op >> 6;
        let y = (op >> 3) & 0x07;
        let operand = Operand::from_index(op);
        let value = self.read_operand(operand);

        let result = match group {
            0 => match Rotation::from_index(y) {
                Rotation::Rlc => self.rlc(value),
                Rotation::Rrc => self.rrc(value),
                Rotation::Rl => self.rl(value),
                Rotation::Rr => self.rr(value),
                Rotation::Sla => self.sla(value),
                Rotation::Sra => self.sra(value),
                Rotation::Swap => self.swap(value),
                Rotation::Srl => self.srl(value),
            },
            1 => {
                self.test_bit(value, y);
                return;
            }
            2 => set_bit(value, y, false),
            _ => set_bit(value, y, true),
        };

        self.write_operand(operand, result);
    }
}
