pub mod config;
pub mod error;
pub mod evolution;
pub mod organism;
pub mod population;
pub mod target;

pub use config::EvolutionParams;
pub use error::{WfResult, WordForgeError};
pub use evolution::{Evolution, EvolutionResult, Outcome, Phase, Progress, ProgressObserver};
pub use organism::Organism;
pub use population::Population;
pub use target::Target;
