use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use dotmatrix_gb::{GameBoy, Registers, RunOutcome, StopReason};
use typed_builder::TypedBuilder;

/// Step budget used when the command line does not give one.
pub const DEFAULT_MAX_STEPS: u64 = 10_000_000;

#[derive(Clone, Debug, TypedBuilder)]
pub struct RunConfig {
    /// `None` runs until the processor halts.
    #[builder(default = Some(DEFAULT_MAX_STEPS))]
    pub max_steps: Option<u64>,
    /// Log the final register state at `info` level.
    #[builder(default = false)]
    pub dump_state: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Result of a headless run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub registers: Registers,
    pub interrupts_enabled: bool,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.outcome.reason {
            StopReason::Halted => "halted",
            StopReason::BudgetExhausted => "step budget exhausted",
        };
        let regs = &self.registers;
        write!(
            f,
            "{reason} after {} steps: PC=0x{:04X} SP=0x{:04X} AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} IME={}",
            self.outcome.steps,
            regs.pc,
            regs.sp,
            regs.af(),
            regs.bc(),
            regs.de(),
            regs.hl(),
            self.interrupts_enabled,
        )
    }
}

/// Read a program image from disk.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let image = std::fs::read(path)
        .with_context(|| format!("failed to read image '{}'", path.display()))?;
    if image.len() > dotmatrix_gb::MEMORY_SIZE {
        log::warn!(
            "image is {} bytes; only the first {} are mapped",
            image.len(),
            dotmatrix_gb::MEMORY_SIZE
        );
    }
    Ok(image)
}

/// Seed a machine with `image` and step it per `config`.
pub fn run(config: &RunConfig, image: &[u8]) -> Result<RunReport> {
    let mut gb = GameBoy::from_image(image);
    log::info!("Game Boy interpreter init: {} byte image", image.len());

    let outcome = gb.run(config.max_steps);
    let report = RunReport {
        outcome,
        registers: gb.cpu.regs,
        interrupts_enabled: gb.cpu.interrupts_enabled(),
    };

    if config.dump_state {
        log::info!("{report}");
    }
    if let Some(diagnostic) = gb.cpu.last_diagnostic() {
        log::info!("last diagnostic: {diagnostic:?}");
    }

    Ok(report)
}

/// Parse `<image-path> [max-steps]`. A step count of 0 means unbounded.
pub fn parse_args<I>(args: I) -> Result<(String, RunConfig)>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let path = args
        .next()
        .context("missing image path; usage: dotmatrix <image-path> [max-steps]")?;
    let max_steps = match args.next() {
        None => Some(DEFAULT_MAX_STEPS),
        Some(raw) => {
            let steps: u64 = raw
                .parse()
                .with_context(|| format!("invalid max-steps '{raw}'; expected an integer"))?;
            (steps != 0).then_some(steps)
        }
    };

    let config = RunConfig::builder()
        .max_steps(max_steps)
        .dump_state(true)
        .build();
    Ok((path, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_with_program(program: &[u8]) -> Vec<u8> {
        let mut image = vec![0u8; 0x0100];
        image.extend_from_slice(program);
        image
    }

    #[test]
    fn default_config_uses_step_budget() {
        let config = RunConfig::default();
        assert_eq!(config.max_steps, Some(DEFAULT_MAX_STEPS));
        assert!(!config.dump_state);
    }

    #[test]
    fn run_reports_halt_and_registers() {
        // LD B,0x07 ; STOP
        let image = image_with_program(&[0x06, 0x07, 0x10]);
        let report = run(&RunConfig::default(), &image).unwrap();

        assert_eq!(report.outcome.reason, StopReason::Halted);
        assert_eq!(report.outcome.steps, 2);
        assert_eq!(report.registers.b, 0x07);
        assert!(!report.interrupts_enabled);

        let text = report.to_string();
        assert!(text.starts_with("halted after 2 steps"), "{text}");
        assert!(text.contains("BC=0x0713"), "{text}");
    }

    #[test]
    fn run_reports_budget_exhaustion() {
        let image = image_with_program(&[0x18, 0xFE]);
        let config = RunConfig::builder().max_steps(Some(16)).build();
        let report = run(&config, &image).unwrap();

        assert_eq!(report.outcome.reason, StopReason::BudgetExhausted);
        assert_eq!(report.outcome.steps, 16);
    }

    #[test]
    fn parse_args_defaults_and_unbounded() {
        let (path, config) = parse_args(vec!["game.gb".to_string()]).unwrap();
        assert_eq!(path, "game.gb");
        assert_eq!(config.max_steps, Some(DEFAULT_MAX_STEPS));

        let (_, config) = parse_args(vec!["game.gb".to_string(), "0".to_string()]).unwrap();
        assert_eq!(config.max_steps, None);

        let (_, config) = parse_args(vec!["game.gb".to_string(), "42".to_string()]).unwrap();
        assert_eq!(config.max_steps, Some(42));
    }

    #[test]
    fn parse_args_rejects_bad_input() {
        assert!(parse_args(Vec::<String>::new()).is_err());
        assert!(parse_args(vec!["game.gb".to_string(), "lots".to_string()]).is_err());
    }

    #[test]
    fn load_image_reports_missing_file() {
        let err = load_image("/nonexistent/dotmatrix/image.gb").unwrap_err();
        assert!(err.to_string().contains("failed to read image"));
    }
}
