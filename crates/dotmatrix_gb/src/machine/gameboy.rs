use crate::cpu::Cpu;

/// Why [`GameBoy::run`] returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StopReason {
    /// The running latch dropped (STOP or the DAA stub).
    Halted,
    /// The step budget ran out while the processor was still running.
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunOutcome {
    pub steps: u64,
    pub reason: StopReason,
}

/// Owning handle around the processor.
///
/// The driver keeps the only `GameBoy` and passes it by `&mut` into every
/// step; nothing else holds on to the processor state.
#[derive(Clone, Debug, Default)]
pub struct GameBoy {
    pub cpu: Cpu,
}

impl GameBoy {
    /// Build a machine with `image` seeded at address 0 and the boot state
    /// applied.
    pub fn from_image(image: &[u8]) -> Self {
        Self {
            cpu: Cpu::new(image),
        }
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    #[inline]
    pub fn step(&mut self) {
        self.cpu.step();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.cpu.is_running()
    }

    /// Step until the running latch drops or `budget` steps have been taken.
    ///
    /// `None` means no budget. A machine that is already halted returns
    /// immediately with zero steps.
    pub fn run(&mut self, budget: Option<u64>) -> RunOutcome {
        let mut steps = 0u64;
        while self.cpu.is_running() {
            if budget.is_some_and(|limit| steps >= limit) {
                log::info!(
                    "step budget of {steps} exhausted at PC=0x{:04X}",
                    self.cpu.regs.pc
                );
                return RunOutcome {
                    steps,
                    reason: StopReason::BudgetExhausted,
                };
            }
            self.cpu.step();
            steps += 1;
        }

        log::info!(
            "halted after {steps} steps at PC=0x{:04X}",
            self.cpu.regs.pc
        );
        RunOutcome {
            steps,
            reason: StopReason::Halted,
        }
    }
}
