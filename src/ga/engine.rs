//! Genetic allocation engine.
//!
//! Orchestrates the full run: build a random initial population, apply
//! a fixed number of generation steps, extract the best individual. No
//! convergence check or early termination; the configured generation
//! count always runs to completion.
//!
//! # Generation step
//!
//! Sort the population by descending fitness, pair consecutive
//! individuals (0&1, 2&3, ...), and for each pair produce two
//! crossed-over, mutated offspring. The population size therefore must
//! be even, which [`GaConfig`] validation enforces.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning"

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::chromosome::AllocationChromosome;
use super::operators::{cut_splice_crossover, reassign_mutation};
use crate::models::{Allocation, ProblemInstance};
use crate::validation::{validate_config, ValidationError, ValidationErrorKind};

/// Genetic engine configuration.
///
/// Defaults: population 100, 1000 generations, mutation rate 0.01.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals per generation. Must be positive and even.
    pub population_size: usize,
    /// Number of generation steps to run. Zero is legal and returns the
    /// best individual of the initial population.
    pub generations: usize,
    /// Per-gene mutation probability in `[0, 1]`.
    pub mutation_rate: f64,
    /// Seed for the random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.01,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Outcome of a genetic engine run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The winning allocation, decoded with violations.
    pub best: Allocation,
    /// The winning chromosome.
    pub best_chromosome: AllocationChromosome,
    /// Fitness of the winner.
    pub best_fitness: i64,
    /// Number of generation steps that ran.
    pub generations: usize,
}

/// Runs the genetic allocation engine.
pub struct GaRunner;

impl GaRunner {
    /// Solves an instance with the given configuration.
    ///
    /// Validates the configuration and rejects instances without supply
    /// units before any evolution starts. An instance without demand
    /// units is legal and yields an empty allocation with fitness 0.
    pub fn run(instance: &ProblemInstance, config: &GaConfig) -> Result<GaResult, Vec<ValidationError>> {
        Self::check(instance, config)?;
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self::solve(instance, config, &mut rng))
    }

    /// Solves an instance with an injected random source.
    ///
    /// `config.seed` is ignored; the caller owns the randomness.
    pub fn run_with_rng<R: Rng>(
        instance: &ProblemInstance,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, Vec<ValidationError>> {
        Self::check(instance, config)?;
        Ok(Self::solve(instance, config, rng))
    }

    fn check(instance: &ProblemInstance, config: &GaConfig) -> Result<(), Vec<ValidationError>> {
        let mut errors = match validate_config(config) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };
        if instance.supply_units().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySupply,
                "instance has no supply units; no assignment can be constructed",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn solve<R: Rng>(instance: &ProblemInstance, config: &GaConfig, rng: &mut R) -> GaResult {
        let mut population: Vec<AllocationChromosome> = (0..config.population_size)
            .map(|_| AllocationChromosome::random(instance, rng))
            .collect();

        for _ in 0..config.generations {
            population = Self::evolve(population, instance, config.mutation_rate, rng);
        }

        // Fitness is recomputed per comparison; nothing is cached.
        population.sort_by(|a, b| b.fitness(instance).cmp(&a.fitness(instance)));
        let best_chromosome = population.remove(0);

        GaResult {
            best: best_chromosome.decode(instance),
            best_fitness: best_chromosome.fitness(instance),
            best_chromosome,
            generations: config.generations,
        }
    }

    /// Produces the next generation from the current one.
    ///
    /// Each consecutive pair of the fitness-sorted population yields two
    /// offspring: left-over-right and right-over-left crossover, both
    /// mutated. The returned population has the same size.
    fn evolve<R: Rng>(
        mut population: Vec<AllocationChromosome>,
        instance: &ProblemInstance,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Vec<AllocationChromosome> {
        population.sort_by(|a, b| b.fitness(instance).cmp(&a.fitness(instance)));

        let mut next = Vec::with_capacity(population.len());
        for pair in population.chunks_exact(2) {
            let mut first = cut_splice_crossover(&pair[0], &pair[1], instance, rng);
            let mut second = cut_splice_crossover(&pair[1], &pair[0], instance, rng);
            reassign_mutation(&mut first, instance, mutation_rate, rng);
            reassign_mutation(&mut second, instance, mutation_rate, rng);
            next.push(first);
            next.push(second);
        }
        next
    }
}
