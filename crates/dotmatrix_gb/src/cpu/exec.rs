mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Cpu, Instruction};

impl Cpu {
    /// Execute one decoded primary-table instruction.
    ///
    /// `opcode` is the raw byte, only used for diagnostics. Operand bytes
    /// are consumed through `read_imm8`/`read_imm16`; the caller applies the
    /// end-of-step PC increment.
    pub(crate) fn execute(&mut self, instr: Instruction, opcode: u8) {
        match instr {
            Instruction::Nop => {}
            Instruction::Stop => self.exec_stop(),

            Instruction::Load { dst, src } => self.exec_ld_r_r(dst, src),
            Instruction::LoadImmediate(dst) => self.exec_ld_r_d8(dst),
            Instruction::LoadWordImmediate(reg) => self.exec_ld_rr_d16(reg),
            Instruction::StoreA(target) => self.exec_ld_indirect_a(target),
            Instruction::LoadA(source) => self.exec_ld_a_indirect(source),
            Instruction::StoreSp => self.exec_ld_a16_sp(),
            Instruction::StoreHigh => self.exec_ldh_a8_a(),
            Instruction::LoadHigh => self.exec_ldh_a_a8(),
            Instruction::StoreHighC => self.exec_ldh_c_a(),
            Instruction::LoadHighC => self.exec_ldh_a_c(),
            Instruction::StoreAbsolute => self.exec_ld_a16_a(),
            Instruction::LoadAbsolute => self.exec_ld_a_a16(),
            Instruction::LoadSpHl => self.exec_ld_sp_hl(),
            Instruction::LoadHlSpOffset => self.exec_ld_hl_sp_r8(),
            Instruction::AddSpOffset => self.exec_add_sp_r8(),

            Instruction::Alu { op, src } => {
                let value = self.read_operand(src);
                self.exec_alu(op, value);
            }
            Instruction::AluImmediate(op) => {
                let value = self.read_imm8();
                self.exec_alu(op, value);
            }
            Instruction::AddHl(reg) => self.exec_add_hl_rr(reg),
            Instruction::RotateA(rotation) => self.exec_rotate_a(rotation),
            Instruction::Complement => self.exec_cpl(),
            Instruction::SetCarry => self.exec_scf(),
            Instruction::ComplementCarry => self.exec_ccf(),

            Instruction::Increment(operand) => self.exec_inc8(operand),
            Instruction::Decrement(operand) => self.exec_dec8(operand),
            Instruction::IncrementWord(reg) => self.exec_inc16(reg),
            Instruction::DecrementWord(reg) => self.exec_dec16(reg),

            Instruction::JumpRelative(cond) => self.exec_jr(cond),
            Instruction::Jump(cond) => self.exec_jp(cond),
            Instruction::JumpHl => self.exec_jp_hl(),
            Instruction::Call(cond) => self.exec_call(cond),
            Instruction::Return(cond) => self.exec_ret(cond),
            Instruction::ReturnEnableInterrupts => self.exec_reti(),
            Instruction::Restart(vector) => self.exec_rst(vector),
            Instruction::Push(pair) => self.exec_push(pair),
            Instruction::Pop(pair) => self.exec_pop(pair),

            Instruction::DisableInterrupts => self.exec_di(),
            Instruction::EnableInterrupts => self.exec_ei(),
            Instruction::DecimalAdjust => self.exec_daa(opcode),
            Instruction::Illegal => self.exec_illegal(opcode),

            // The second fetch reads the same PC as the prefix byte, and
            // the whole pair only advances PC by one.
            Instruction::Prefix => {
                let extended = self.read_byte(self.regs.pc);
                self.execute_extended(extended);
            }
        }
    }
}
