mod gameboy;

pub use gameboy::{GameBoy, RunOutcome, StopReason};
