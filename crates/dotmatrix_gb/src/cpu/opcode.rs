use lazy_static::lazy_static;

/// One of the eight 8-bit operand slots shared by the load band, the ALU
/// band and the extended table.
///
/// The order matches the low three bits of the opcode:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operand {
    B,
    C,
    D,
    E,
    H,
    L,
    IndirectHl,
    A,
}

impl Operand {
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Operand::B,
            1 => Operand::C,
            2 => Operand::D,
            3 => Operand::E,
            4 => Operand::H,
            5 => Operand::L,
            6 => Operand::IndirectHl,
            _ => Operand::A,
        }
    }
}

/// 8-bit ALU operations on A, in opcode order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Branch conditions. Only Z and C are ever tested.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Condition {
    Always,
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

impl Condition {
    #[inline]
    fn from_cc(cc: u8) -> Self {
        match cc & 0x03 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NotCarry,
            _ => Condition::Carry,
        }
    }
}

/// Register pairs addressed by 16-bit loads and arithmetic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WordReg {
    Bc,
    De,
    Hl,
    Sp,
}

impl WordReg {
    #[inline]
    fn from_rp(rp: u8) -> Self {
        match rp & 0x03 {
            0 => WordReg::Bc,
            1 => WordReg::De,
            2 => WordReg::Hl,
            _ => WordReg::Sp,
        }
    }
}

/// Register pairs addressed by PUSH/POP.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StackPair {
    Bc,
    De,
    Hl,
    Af,
}

impl StackPair {
    #[inline]
    fn from_rp2(rp: u8) -> Self {
        match rp & 0x03 {
            0 => StackPair::Bc,
            1 => StackPair::De,
            2 => StackPair::Hl,
            _ => StackPair::Af,
        }
    }
}

/// Memory operands of `LD (rr),A` / `LD A,(rr)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Indirect {
    Bc,
    De,
    HlIncrement,
    HlDecrement,
}

impl Indirect {
    #[inline]
    fn from_rp(rp: u8) -> Self {
        match rp & 0x03 {
            0 => Indirect::Bc,
            1 => Indirect::De,
            2 => Indirect::HlIncrement,
            _ => Indirect::HlDecrement,
        }
    }
}

/// Rotations and shifts. The first four also serve the unprefixed
/// accumulator rotates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rotation {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl Rotation {
    #[inline]
    pub(crate) fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Rotation::Rlc,
            1 => Rotation::Rrc,
            2 => Rotation::Rl,
            3 => Rotation::Rr,
            4 => Rotation::Sla,
            5 => Rotation::Sra,
            6 => Rotation::Swap,
            _ => Rotation::Srl,
        }
    }
}

/// A decoded primary-table instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Instruction {
    Nop,
    /// STOP: clears the running latch.
    Stop,
    /// Register-to-register band, 0x40–0x7F.
    Load { dst: Operand, src: Operand },
    /// LD r,d8 / LD (HL),d8
    LoadImmediate(Operand),
    /// LD rr,d16
    LoadWordImmediate(WordReg),
    /// LD (rr),A
    StoreA(Indirect),
    /// LD A,(rr)
    LoadA(Indirect),
    /// LD (a16),SP
    StoreSp,
    /// LDH (a8),A
    StoreHigh,
    /// LDH A,(a8)
    LoadHigh,
    /// LD (C),A
    StoreHighC,
    /// LD A,(C)
    LoadHighC,
    /// LD (a16),A
    StoreAbsolute,
    /// LD A,(a16)
    LoadAbsolute,
    /// LD SP,HL
    LoadSpHl,
    /// LD HL,SP+r8
    LoadHlSpOffset,
    /// ADD SP,r8
    AddSpOffset,
    /// ALU band, 0x80–0xBF.
    Alu { op: AluOp, src: Operand },
    /// ALU with an 8-bit immediate operand.
    AluImmediate(AluOp),
    Increment(Operand),
    Decrement(Operand),
    IncrementWord(WordReg),
    DecrementWord(WordReg),
    /// ADD HL,rr
    AddHl(WordReg),
    /// RLCA / RRCA / RLA / RRA
    RotateA(Rotation),
    DecimalAdjust,
    Complement,
    SetCarry,
    ComplementCarry,
    JumpRelative(Condition),
    Jump(Condition),
    JumpHl,
    Call(Condition),
    Return(Condition),
    ReturnEnableInterrupts,
    Restart(u8),
    Push(StackPair),
    Pop(StackPair),
    DisableInterrupts,
    EnableInterrupts,
    /// 0xCB: dispatch through the extended table.
    Prefix,
    /// Undefined encoding.
    Illegal,
}

lazy_static! {
    /// Primary decode table, built once on first use.
    pub(crate) static ref OPCODE_TABLE: [Instruction; 256] =
        std::array::from_fn(|opcode| decode(opcode as u8));
}

/// Decode a primary-table opcode.
///
/// Every byte value maps to an instruction; the undefined encodings map to
/// [`Instruction::Illegal`].
pub fn decode(opcode: u8) -> Instruction {
    let hi = opcode >> 4;
    let lo = opcode & 0x0F;
    let y = (opcode >> 3) & 0x07;

    // Register-to-register load band.
    if (0x4..=0x7).contains(&hi) {
        return Instruction::Load {
            dst: Operand::from_index(y),
            src: Operand::from_index(lo),
        };
    }

    // ALU band.
    if (0x8..=0xB).contains(&hi) {
        return Instruction::Alu {
            op: AluOp::from_index(y),
            src: Operand::from_index(lo),
        };
    }

    match opcode {
        0x00 => Instruction::Nop,
        0x10 => Instruction::Stop,

        0x01 | 0x11 | 0x21 | 0x31 => Instruction::LoadWordImmediate(WordReg::from_rp(hi)),
        0x02 | 0x12 | 0x22 | 0x32 => Instruction::StoreA(Indirect::from_rp(hi)),
        0x0A | 0x1A | 0x2A | 0x3A => Instruction::LoadA(Indirect::from_rp(hi)),
        0x03 | 0x13 | 0x23 | 0x33 => Instruction::IncrementWord(WordReg::from_rp(hi)),
        0x0B | 0x1B | 0x2B | 0x3B => Instruction::DecrementWord(WordReg::from_rp(hi)),
        0x09 | 0x19 | 0x29 | 0x39 => Instruction::AddHl(WordReg::from_rp(hi)),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            Instruction::Increment(Operand::from_index(y))
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            Instruction::Decrement(Operand::from_index(y))
        }
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            Instruction::LoadImmediate(Operand::from_index(y))
        }

        0x07 => Instruction::RotateA(Rotation::Rlc),
        0x0F => Instruction::RotateA(Rotation::Rrc),
        0x17 => Instruction::RotateA(Rotation::Rl),
        0x1F => Instruction::RotateA(Rotation::Rr),

        0x08 => Instruction::StoreSp,
        0x18 => Instruction::JumpRelative(Condition::Always),
        0x20 | 0x28 | 0x30 | 0x38 => Instruction::JumpRelative(Condition::from_cc(y)),

        0x27 => Instruction::DecimalAdjust,
        0x2F => Instruction::Complement,
        0x37 => Instruction::SetCarry,
        0x3F => Instruction::ComplementCarry,

        0xC0 | 0xC8 | 0xD0 | 0xD8 => Instruction::Return(Condition::from_cc(y)),
        0xC9 => Instruction::Return(Condition::Always),
        0xD9 => Instruction::ReturnEnableInterrupts,

        0xC1 | 0xD1 | 0xE1 | 0xF1 => Instruction::Pop(StackPair::from_rp2(hi)),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Instruction::Push(StackPair::from_rp2(hi)),

        0xC2 | 0xCA | 0xD2 | 0xDA => Instruction::Jump(Condition::from_cc(y)),
        0xC3 => Instruction::Jump(Condition::Always),
        0xE9 => Instruction::JumpHl,

        0xC4 | 0xCC | 0xD4 | 0xDC => Instruction::Call(Condition::from_cc(y)),
        0xCD => Instruction::Call(Condition::Always),

        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            Instruction::AluImmediate(AluOp::from_index(y))
        }

        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            Instruction::Restart(opcode & 0x38)
        }

        0xCB => Instruction::Prefix,

        0xE0 => Instruction::StoreHigh,
        0xF0 => Instruction::LoadHigh,
        0xE2 => Instruction::StoreHighC,
        0xF2 => Instruction::LoadHighC,
        0xEA => Instruction::StoreAbsolute,
        0xFA => Instruction::LoadAbsolute,
        0xE8 => Instruction::AddSpOffset,
        0xF8 => Instruction::LoadHlSpOffset,
        0xF9 => Instruction::LoadSpHl,

        0xF3 => Instruction::DisableInterrupts,
        0xFB => Instruction::EnableInterrupts,

        // Opcode holes: D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD.
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
            Instruction::Illegal
        }

        _ => unreachable!("opcode 0x{opcode:02X} missing from decode table"),
    }
}
