pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::selector::ShuffleStrategy;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::RaffleConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "raffle")]
#[command(about = "Draw random winners from a list of participants")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Participant name (repeatable)
    #[arg(short, long = "participant")]
    pub participants: Vec<String>,

    /// File with one participant name per line
    #[arg(long)]
    pub participants_file: Option<PathBuf>,

    /// Number of winners to draw
    #[arg(short = 'k', long = "winners")]
    pub winner_count: Option<usize>,

    /// Shuffle strategy: full or partial
    #[arg(long)]
    pub strategy: Option<ShuffleStrategy>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the recorded winner history and exit
    #[arg(long)]
    pub history: bool,

    /// Do not record this draw in the winner history
    #[arg(long)]
    pub no_save: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the file configuration (or defaults) and applies command line overrides.
    pub fn resolve(&self) -> Result<RaffleConfig> {
        let mut config = match &self.config {
            Some(path) => RaffleConfig::from_file(path)?,
            None => RaffleConfig::default(),
        };

        if let Some(winner_count) = self.winner_count {
            config.raffle.winner_count = winner_count;
        }
        if let Some(strategy) = self.strategy {
            config.raffle.strategy = strategy;
        }
        if self.seed.is_some() {
            config.raffle.seed = self.seed;
        }
        if self.no_save {
            config.storage.enabled = false;
        }

        Ok(config)
    }

    /// Raw participant inputs: `--participant` values first, then file lines.
    pub fn participant_inputs(&self) -> Result<Vec<String>> {
        let mut inputs = self.participants.clone();
        if let Some(path) = &self.participants_file {
            let content = std::fs::read_to_string(path)?;
            inputs.extend(content.lines().map(str::to_string));
        }
        Ok(inputs)
    }
}
