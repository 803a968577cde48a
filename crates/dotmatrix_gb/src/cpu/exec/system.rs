use crate::cpu::{Cpu, Diagnostic};

impl Cpu {
    pub(super) fn exec_stop(&mut self) {
        log::debug!("STOP at PC=0x{:04X}; halting", self.regs.pc);
        self.running = false;
    }

    pub(super) fn exec_di(&mut self) {
        self.interrupts_enabled = false;
    }

    pub(super) fn exec_ei(&mut self) {
        self.interrupts_enabled = true;
    }

    /// DAA is recognized but not computed: report it and halt.
    pub(super) fn exec_daa(&mut self, opcode: u8) {
        let pc = self.regs.pc;
        log::error!(
            "unimplemented opcode {:X}{:X} (DAA) at PC=0x{pc:04X}; halting",
            opcode >> 4,
            opcode & 0x0F,
        );
        self.last_diagnostic = Some(Diagnostic::Unimplemented { opcode, pc });
        self.running = false;
    }

    /// Undefined encodings are reported and otherwise skipped.
    pub(super) fn exec_illegal(&mut self, opcode: u8) {
        let pc = self.regs.pc;
        log::warn!(
            "illegal opcode {:X}{:X} at PC=0x{pc:04X}",
            opcode >> 4,
            opcode & 0x0F,
        );
        self.last_diagnostic = Some(Diagnostic::Illegal { opcode, pc });
    }
}
