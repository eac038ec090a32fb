//! Genetic operators for assignment chromosomes.
//!
//! # Operators
//!
//! - **Crossover**: single random cut point; the child takes the left
//!   parent's genes before the cut and the right parent's genes from the
//!   cut onward (spliced by position, i.e. by demand order), then gets
//!   repaired in place.
//! - **Repair**: best-effort removal of duplicate supply usage. Scans
//!   genes left to right against a running used-id list, so repairs of
//!   earlier genes affect collision detection for later genes. Replaced
//!   ids are never removed from the list.
//! - **Mutation**: per-gene random reassignment with a fixed
//!   probability. The used-id list is recomputed from the ENTIRE
//!   chromosome for every mutated gene, unlike repair's running list.
//!   The two bookkeeping schemes are distinct observable behaviors; do
//!   not unify them.

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::chromosome::AllocationChromosome;
use crate::models::ProblemInstance;

/// Performs single-cut splice crossover and repairs the child.
///
/// The cut index is drawn uniformly from `[0, len - 1]`; a cut of 0
/// copies the right parent wholesale. Both parents must encode the same
/// instance.
pub fn cut_splice_crossover<R: Rng>(
    left: &AllocationChromosome,
    right: &AllocationChromosome,
    instance: &ProblemInstance,
    rng: &mut R,
) -> AllocationChromosome {
    let len = left.genes.len();
    if len == 0 {
        return AllocationChromosome { genes: Vec::new() };
    }

    let cut = rng.random_range(0..len);
    let mut genes = Vec::with_capacity(len);
    genes.extend_from_slice(&left.genes[..cut]);
    genes.extend_from_slice(&right.genes[cut..]);

    let mut child = AllocationChromosome { genes };
    repair_collisions(&mut child, instance, rng);
    child
}

/// Reassigns duplicate supply units to eligible unused ones, best effort.
///
/// The used-id list starts as the multiset of all assigned supply ids.
/// A gene counts as colliding when its supply id occurs more than once
/// in the CURRENT list. Reassignment pushes the new id without removing
/// the replaced one; a collision with no eligible alternative is left in
/// place. Never increases the collision count.
pub(crate) fn repair_collisions<R: Rng>(
    chromosome: &mut AllocationChromosome,
    instance: &ProblemInstance,
    rng: &mut R,
) {
    let mut used: Vec<u32> = chromosome.genes.iter().map(|g| g.supply_id).collect();

    for i in 0..chromosome.genes.len() {
        let current = chromosome.genes[i].supply_id;
        if used.iter().filter(|&&id| id == current).count() <= 1 {
            continue;
        }

        let demand = match instance.lookup_demand(chromosome.genes[i].demand_id) {
            Some(d) => d,
            None => continue,
        };

        let eligible: Vec<u32> = instance
            .supply_units()
            .iter()
            .filter(|s| s.can_hold(demand.required_capacity) && !used.contains(&s.id))
            .map(|s| s.id)
            .collect();

        if let Some(&id) = eligible.choose(rng) {
            used.push(id);
            chromosome.genes[i].supply_id = id;
        }
    }
}

/// Mutates genes in place with per-gene probability `rate`.
///
/// A mutated gene is reassigned uniformly among capacity-sufficient
/// supply units not currently used anywhere in the chromosome. The
/// used-id list is recomputed fresh per gene, so it always includes the
/// gene's own current assignment and reflects earlier mutations within
/// the same call. With no eligible unit the gene is left unchanged.
pub fn reassign_mutation<R: Rng>(
    chromosome: &mut AllocationChromosome,
    instance: &ProblemInstance,
    rate: f64,
    rng: &mut R,
) {
    for i in 0..chromosome.genes.len() {
        if !rng.random_bool(rate) {
            continue;
        }

        let demand = match instance.lookup_demand(chromosome.genes[i].demand_id) {
            Some(d) => d,
            None => continue,
        };

        let used: Vec<u32> = chromosome.genes.iter().map(|g| g.supply_id).collect();
        let eligible: Vec<u32> = instance
            .supply_units()
            .iter()
            .filter(|s| s.can_hold(demand.required_capacity) && !used.contains(&s.id))
            .map(|s| s.id)
            .collect();

        if let Some(&id) = eligible.choose(rng) {
            chromosome.genes[i].supply_id = id;
        }
    }
}
