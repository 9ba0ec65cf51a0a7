use crate::error::{WfResult, WordForgeError};
use crate::target::{is_valid_gene, random_gene, Target};
use std::cmp::Ordering;

/// One candidate string and its fitness against the target.
///
/// Fitness is computed once at construction. Organisms are never changed in
/// place: `mutate` and `crossover` hand back fresh values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organism {
    genome: Vec<u8>,
    fitness: usize,
}

impl Organism {
    fn with_genome(genome: Vec<u8>, target: &Target) -> Self {
        let fitness = genome
            .iter()
            .zip(target.as_bytes())
            .filter(|(g, t)| g == t)
            .count();
        Self { genome, fitness }
    }

    pub fn from_genome(genome: &[u8], target: &Target) -> WfResult<Self> {
        if genome.len() != target.len() {
            return Err(WordForgeError::Config(format!(
                "genome length {} does not match target length {}",
                genome.len(),
                target.len()
            )));
        }
        if !genome.iter().all(|&g| is_valid_gene(g)) {
            return Err(WordForgeError::InvalidWord(
                String::from_utf8_lossy(genome).into_owned(),
            ));
        }
        Ok(Self::with_genome(genome.to_vec(), target))
    }

    pub fn random(target: &Target, rng: &mut fastrand::Rng) -> Self {
        let genome = (0..target.len()).map(|_| random_gene(rng)).collect();
        Self::with_genome(genome, target)
    }

    /// Number of positions that match the target.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    pub fn ideal_fitness(target: &Target) -> usize {
        target.len()
    }

    pub fn is_ideal(&self, target: &Target) -> bool {
        self.fitness == Self::ideal_fitness(target)
    }

    pub fn genome(&self) -> &[u8] {
        &self.genome
    }

    pub fn genome_str(&self) -> String {
        String::from_utf8_lossy(&self.genome).into_owned()
    }

    /// Replaces one uniformly chosen gene with a uniformly random letter.
    pub fn mutate(&self, target: &Target, rng: &mut fastrand::Rng) -> Self {
        if self.genome.is_empty() {
            return self.clone();
        }
        let mut genome = self.genome.clone();
        let idx = rng.usize(..genome.len());
        genome[idx] = random_gene(rng);
        Self::with_genome(genome, target)
    }

    /// Uniform crossover: every gene comes from either parent on a fair coin.
    pub fn crossover(&self, other: &Organism, target: &Target, rng: &mut fastrand::Rng) -> Self {
        let genome = self
            .genome
            .iter()
            .zip(&other.genome)
            .map(|(&a, &b)| if rng.bool() { a } else { b })
            .collect();
        Self::with_genome(genome, target)
    }
}

pub fn compare_fitness(a: &Organism, b: &Organism) -> Ordering {
    a.fitness.cmp(&b.fitness)
}

/// Highest-fitness organism; the first one wins ties.
pub fn fittest(organisms: &[Organism]) -> Option<&Organism> {
    let mut iter = organisms.iter();
    let mut best = iter.next()?;
    for o in iter {
        if compare_fitness(o, best) == Ordering::Greater {
            best = o;
        }
    }
    Some(best)
}
