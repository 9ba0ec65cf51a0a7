use crate::config::EvolutionParams;
use crate::error::WfResult;
use crate::organism::Organism;
use crate::population::Population;
use crate::target::Target;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Evolving,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// An organism matched the target exactly.
    Found,
    /// The epoch limit was reached first.
    Exhausted,
}

/// Snapshot of the current generation's best organism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub genome: String,
    pub fitness: usize,
    pub epoch: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionResult {
    pub outcome: Outcome,
    pub genome: String,
    pub fitness: usize,
    pub epochs_run: usize,
}

/// Receives progress events. It only observes; it has no way to steer or
/// stop the run.
pub trait ProgressObserver {
    fn on_progress(&mut self, progress: &Progress);
}

impl<F: FnMut(&Progress)> ProgressObserver for F {
    fn on_progress(&mut self, progress: &Progress) {
        self(progress)
    }
}

pub struct Evolution {
    population: Population,
    max_epochs: usize,
    print_granularity: usize,
    epochs: usize,
    current_best: Organism,
    global_best: Organism,
    phase: Phase,
}

impl Evolution {
    pub fn new(target: Target, params: &EvolutionParams) -> WfResult<Self> {
        Self::with_rng(target, params, params.rng())
    }

    /// Like [`Evolution::new`] but with a caller-supplied random source.
    pub fn with_rng(target: Target, params: &EvolutionParams, rng: fastrand::Rng) -> WfResult<Self> {
        let population = Population::new(target, params, rng)?;
        Ok(Self::from_population(population, params))
    }

    /// Wraps an already seeded population. `max_epochs` and
    /// `print_granularity` come from `params`.
    pub fn from_population(population: Population, params: &EvolutionParams) -> Self {
        let best = population.best().clone();

        let mut evo = Self {
            population,
            max_epochs: params.max_epochs,
            print_granularity: params.print_granularity.max(1),
            epochs: 0,
            current_best: best.clone(),
            global_best: best,
            phase: Phase::Init,
        };
        evo.phase = evo.next_phase();
        evo
    }

    fn next_phase(&self) -> Phase {
        if self.current_best.is_ideal(self.population.target()) || self.epochs >= self.max_epochs
        {
            Phase::Terminated
        } else {
            Phase::Evolving
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn epochs_run(&self) -> usize {
        self.epochs
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn current_best(&self) -> &Organism {
        &self.current_best
    }

    pub fn global_best(&self) -> &Organism {
        &self.global_best
    }

    /// Runs one epoch. Does nothing once terminated.
    pub fn step(&mut self) -> Phase {
        if self.phase != Phase::Evolving {
            return self.phase;
        }

        self.population.epoch();
        self.epochs += 1;

        self.current_best = self.population.best().clone();
        if self.current_best.fitness() > self.global_best.fitness() {
            self.global_best = self.current_best.clone();
        }

        self.phase = self.next_phase();
        self.phase
    }

    pub fn progress(&self) -> Progress {
        Progress {
            genome: self.current_best.genome_str(),
            fitness: self.current_best.fitness(),
            epoch: self.epochs,
        }
    }

    pub fn result(&self) -> EvolutionResult {
        let outcome = if self.current_best.is_ideal(self.population.target()) {
            Outcome::Found
        } else {
            Outcome::Exhausted
        };
        EvolutionResult {
            outcome,
            genome: self.global_best.genome_str(),
            fitness: self.global_best.fitness(),
            epochs_run: self.epochs,
        }
    }

    /// Evolves until a perfect match appears or the epoch limit is hit.
    pub fn run<O: ProgressObserver>(mut self, observer: &mut O) -> EvolutionResult {
        info!(
            "Searching for a {}-character word ({} organisms, mutation {}, max {} epochs)",
            self.population.target().len(),
            self.population.len(),
            self.population.mutation_probability(),
            self.max_epochs
        );

        while self.step() == Phase::Evolving {
            if self.epochs % self.print_granularity == 0 {
                let progress = self.progress();
                debug!(
                    "Epoch {} | best {} | fitness {} | sum {}",
                    progress.epoch,
                    progress.genome,
                    progress.fitness,
                    self.population.fitness_sum()
                );
                observer.on_progress(&progress);
            }
        }

        observer.on_progress(&self.progress());

        let result = self.result();
        info!(
            "Finished: {} after {} epochs (fitness {})",
            result.outcome, result.epochs_run, result.fitness
        );
        result
    }
}
