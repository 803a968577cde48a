mod alu;
mod cb;
mod exec;
mod helpers;
mod init;
mod memory;
mod opcode;
mod regs;
mod step;

pub use memory::Memory;
pub use opcode::{
    decode, AluOp, Condition, Indirect, Instruction, Operand, Rotation, StackPair, WordReg,
};
pub use regs::{Flags, Registers};

/// Something the interpreter reported instead of executing normally.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    /// Opcode from the undefined set; execution continued.
    Illegal { opcode: u8, pc: u16 },
    /// Recognized but not computed (DAA); the running latch was cleared.
    Unimplemented { opcode: u8, pc: u16 },
}

/// Processor state: register file, memory and the execution latches.
///
/// The owner drives it by calling [`Cpu::step`] until [`Cpu::is_running`]
/// returns `false`.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    memory: Memory,
    running: bool,
    interrupts_enabled: bool,
    /// Number of steps taken since construction; shown in the trace line.
    instruction_count: u64,
    last_diagnostic: Option<Diagnostic>,
}

impl Cpu {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Lets the driver stop (or resume) the run loop from outside.
    #[inline]
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    #[inline]
    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    #[inline]
    pub fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    #[inline]
    pub fn last_diagnostic(&self) -> Option<Diagnostic> {
        self.last_diagnostic
    }

    #[inline]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory.read8(addr)
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory.write8(addr, value);
    }

    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        self.memory.read16(addr)
    }

    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.memory.write16(addr, value);
    }
}
