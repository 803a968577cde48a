use super::opcode::OPCODE_TABLE;
use super::Cpu;

impl Cpu {
    /// Fetch, decode and execute one instruction.
    ///
    /// Always runs to completion. The effects are only visible through the
    /// registers, memory and latches afterwards.
    pub fn step(&mut self) {
        self.mask_registers();

        let opcode = self.read_byte(self.regs.pc);
        self.trace(opcode);
        self.instruction_count = self.instruction_count.wrapping_add(1);

        let instr = OPCODE_TABLE[opcode as usize];
        self.execute(instr, opcode);

        self.regs.pc = self.regs.pc.wrapping_add(1);
    }

    #[inline]
    fn trace(&self, opcode: u8) {
        log::trace!(
            "{count}) PC={pc:04X} SP={sp:04X} I={opcode:02X} AF={af:04X} BC={bc:04X} DE={de:04X} HL={hl:04X}",
            count = self.instruction_count,
            pc = self.regs.pc,
            sp = self.regs.sp,
            opcode = opcode,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
    }
}
