use crate::error::{WfResult, WordForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_POPULATION_SIZE: usize = 256;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.1;
pub const DEFAULT_MAX_EPOCHS: usize = 50_000;
pub const DEFAULT_PRINT_GRANULARITY: usize = 100;

/// Parameters of the evolutionary loop.
///
/// Set once before a run starts and read-only afterwards. Values come from
/// (in increasing priority) the built-in defaults, an optional JSON file,
/// and flags typed on the command line.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionParams {
    /// Number of organisms per generation. Must be even and positive.
    #[arg(long, default_value_t = DEFAULT_POPULATION_SIZE)]
    pub population_size: usize,

    /// Per-organism probability of a point mutation after each epoch.
    #[arg(long, default_value_t = DEFAULT_MUTATION_PROBABILITY)]
    pub mutation_probability: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_EPOCHS)]
    pub max_epochs: usize,

    /// Emit a progress event every N epochs.
    #[arg(long, default_value_t = DEFAULT_PRINT_GRANULARITY)]
    pub print_granularity: usize,

    /// Fixed RNG seed for reproducible runs.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            max_epochs: DEFAULT_MAX_EPOCHS,
            print_granularity: DEFAULT_PRINT_GRANULARITY,
            seed: None,
        }
    }
}

impl EvolutionParams {
    pub fn validate(&self) -> WfResult<()> {
        if self.population_size == 0 {
            return Err(WordForgeError::Config(
                "population_size must be positive".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(WordForgeError::Config(format!(
                "population_size must be even (parents breed in pairs), got {}",
                self.population_size
            )));
        }
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(WordForgeError::Config(format!(
                "mutation_probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if self.print_granularity == 0 {
            return Err(WordForgeError::Config(
                "print_granularity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays the flags that were explicitly typed on the command line.
    pub fn merge_from_cli(&mut self, cli_params: &EvolutionParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field.clone();
                }
            };
        }

        update_if_present!(population_size);
        update_if_present!(mutation_probability);
        update_if_present!(max_epochs);
        update_if_present!(print_granularity);
        update_if_present!(seed);
    }

    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        }
    }
}
