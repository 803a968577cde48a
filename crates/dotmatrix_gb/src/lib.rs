pub mod cpu;
pub mod machine;

pub use cpu::{Cpu, Diagnostic, Flags, Registers};
pub use machine::{GameBoy, RunOutcome, StopReason};

/// Total addressable memory (64 KiB, flat, no banking).
pub const MEMORY_SIZE: usize = 0x10000;
