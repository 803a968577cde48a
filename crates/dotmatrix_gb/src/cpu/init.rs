use super::{Cpu, Memory, Registers};

/// I/O register values left behind by the DMG boot ROM.
///
/// Timer, sound, LCD and interrupt-enable registers, in address order.
const BOOT_IO_STATE: [(u16, u8); 31] = [
    (0xFF05, 0x00), // TIMA
    (0xFF06, 0x00), // TMA
    (0xFF07, 0x00), // TAC
    (0xFF10, 0x80), // NR10
    (0xFF11, 0xBF), // NR11
    (0xFF12, 0xF3), // NR12
    (0xFF14, 0xBF), // NR14
    (0xFF16, 0x3F), // NR21
    (0xFF17, 0x00), // NR22
    (0xFF19, 0xBF), // NR24
    (0xFF1A, 0x7F), // NR30
    (0xFF1B, 0xFF), // NR31
    (0xFF1C, 0x9F), // NR32
    (0xFF1E, 0xBF), // NR34
    (0xFF20, 0xFF), // NR41
    (0xFF21, 0x00), // NR42
    (0xFF22, 0x00), // NR43
    (0xFF23, 0xBF), // NR44
    (0xFF24, 0x77), // NR50
    (0xFF25, 0xF3), // NR51
    (0xFF26, 0xF1), // NR52
    (0xFF40, 0x91), // LCDC
    (0xFF42, 0x00), // SCY
    (0xFF43, 0x00), // SCX
    (0xFF45, 0x00), // LYC
    (0xFF47, 0xFC), // BGP
    (0xFF48, 0xFF), // OBP0
    (0xFF49, 0xFF), // OBP1
    (0xFF4A, 0x00), // WY
    (0xFF4B, 0x00), // WX
    (0xFFFF, 0x00), // IE
];

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl Cpu {
    /// Create a processor whose memory is seeded with `image`.
    ///
    /// The image is copied to address 0 (at most 64 KiB of it), the rest of
    /// memory is zeroed, and the boot state is applied on top.
    pub fn new(image: &[u8]) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            memory: Memory::with_image(image),
            running: false,
            interrupts_enabled: false,
            instruction_count: 0,
            last_diagnostic: None,
        };
        cpu.reset();
        cpu
    }

    /// Put registers, latches and I/O registers in their post-boot state.
    ///
    /// Memory outside the boot I/O table is left as is, so calling this
    /// twice gives the same result as calling it once.
    pub fn reset(&mut self) {
        self.regs.set_af(0x01B0);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.pc = 0x0100;
        self.regs.sp = 0xFFFE;

        self.interrupts_enabled = false;
        self.running = true;
        self.last_diagnostic = None;

        for &(addr, value) in BOOT_IO_STATE.iter() {
            self.write_byte(addr, value);
        }
    }
}
