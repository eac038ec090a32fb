//! Genetic allocation engine.
//!
//! Evolves populations of candidate demand-to-supply allocations under
//! capacity constraints. Best-effort: infeasibility lowers fitness
//! instead of failing the run.
//!
//! # Submodules
//!
//! - [`chromosome`]: gene-per-demand encoding, fitness, decoding
//! - [`operators`]: cut-splice crossover, collision repair, mutation
//! - [`engine`]: configuration and the generation loop
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Carter & Laporte (1996), "Recent developments in practical
//!   examination timetabling"

mod chromosome;
mod engine;
pub mod operators;

pub use chromosome::{AllocationChromosome, Gene};
pub use engine::{GaConfig, GaResult, GaRunner};
pub use operators::{cut_splice_crossover, reassign_mutation};
