use anyhow::Result;
use clap::Parser;
use hog::experiments::{ExperimentConfig, NUM_SAMPLES, run_experiments};

#[derive(Parser)]
#[command(version, about = "Play Hog")]
struct Cli {
    /// Runs strategy experiments
    #[arg(short, long, alias = "run_experiments")]
    run_experiments: bool,
    /// Trials behind every average
    #[arg(long, default_value_t = NUM_SAMPLES)]
    samples: usize,
    /// Seed the dice for a reproducible report
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if cli.run_experiments {
        let cfg = ExperimentConfig { num_samples: cli.samples, seed: cli.seed };
        let report = run_experiments(&cfg)?;
        print!("{report}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_experiments_flag_spellings() {
        for flag in ["-r", "--run-experiments", "--run_experiments"] {
            let cli = Cli::try_parse_from(["hog", flag]).unwrap();
            assert!(cli.run_experiments, "{flag} should enable experiments");
        }
        let cli = Cli::try_parse_from(["hog"]).unwrap();
        assert!(!cli.run_experiments);
        assert_eq!(cli.samples, NUM_SAMPLES);
    }
}
