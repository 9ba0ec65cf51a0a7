use crate::config::EvolutionParams;
use crate::error::{WfResult, WordForgeError};
use crate::organism::{fittest, Organism};
use crate::target::Target;
use tracing::debug;

/// A generation of organisms together with the random source that breeds them.
///
/// The organism buffer is always exactly `population_size` long and is
/// replaced wholesale by [`Population::epoch`].
pub struct Population {
    organisms: Vec<Organism>,
    fitness_sum: usize,
    target: Target,
    mutation_probability: f64,
    rng: fastrand::Rng,
}

impl Population {
    pub fn new(target: Target, params: &EvolutionParams, rng: fastrand::Rng) -> WfResult<Self> {
        params.validate()?;

        let mut pop = Self {
            organisms: Vec::with_capacity(params.population_size),
            fitness_sum: 0,
            target,
            mutation_probability: params.mutation_probability,
            rng,
        };

        for _ in 0..params.population_size {
            let o = Organism::random(&pop.target, &mut pop.rng);
            pop.organisms.push(o);
        }
        pop.compute_sum();

        debug!(
            "Seeded {} organisms, fitness sum {}",
            pop.organisms.len(),
            pop.fitness_sum
        );
        Ok(pop)
    }

    /// Starts from caller-provided genomes instead of a random generation.
    pub fn from_genomes<G: AsRef<[u8]>>(
        genomes: &[G],
        target: Target,
        params: &EvolutionParams,
        rng: fastrand::Rng,
    ) -> WfResult<Self> {
        params.validate()?;
        if genomes.len() != params.population_size {
            return Err(WordForgeError::Config(format!(
                "initial population has {} organisms, expected {}",
                genomes.len(),
                params.population_size
            )));
        }

        let organisms = genomes
            .iter()
            .map(|g| Organism::from_genome(g.as_ref(), &target))
            .collect::<WfResult<Vec<_>>>()?;

        let mut pop = Self {
            organisms,
            fitness_sum: 0,
            target,
            mutation_probability: params.mutation_probability,
            rng,
        };
        pop.compute_sum();
        Ok(pop)
    }

    pub fn compute_sum(&mut self) {
        self.fitness_sum = self.organisms.iter().map(Organism::fitness).sum();
    }

    pub fn fitness_sum(&self) -> usize {
        self.fitness_sum
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn best(&self) -> &Organism {
        // `new` rejects a zero population size.
        fittest(&self.organisms).expect("population is never empty")
    }

    /// Roulette wheel selection biased by `1 + fitness`, so zero-fitness
    /// organisms can still be picked.
    pub fn select(&mut self) -> usize {
        let n = self.organisms.len();
        let toss = self.rng.usize(0..=self.fitness_sum + n);
        roulette_index(&self.organisms, toss).unwrap_or(n - 1)
    }

    pub fn select_parents(&mut self) -> (usize, usize) {
        let first = self.select();
        let second = self.select();
        (first, second)
    }

    /// Replaces the population with a new generation.
    pub fn epoch(&mut self) {
        let size = self.organisms.len();
        let mut next = Vec::with_capacity(size);

        for _ in 0..size / 2 {
            let (a, b) = self.select_parents();
            let (p1, p2) = (&self.organisms[a], &self.organisms[b]);
            next.push(p1.crossover(p2, &self.target, &mut self.rng));
            next.push(p1.crossover(p2, &self.target, &mut self.rng));
        }

        self.organisms = next;

        for o in self.organisms.iter_mut() {
            if self.rng.f64() < self.mutation_probability {
                *o = o.mutate(&self.target, &mut self.rng);
            }
        }

        self.compute_sum();
    }
}

/// Walks the wheel and returns the first organism whose running sum of
/// `1 + fitness` reaches `toss`. `None` only if `toss` exceeds the wheel.
pub fn roulette_index(organisms: &[Organism], toss: usize) -> Option<usize> {
    let mut running_sum = 0;
    for (i, o) in organisms.iter().enumerate() {
        running_sum += 1 + o.fitness();
        if running_sum >= toss {
            return Some(i);
        }
    }
    None
}
