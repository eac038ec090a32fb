//! Gene-per-demand chromosome for assignment.
//!
//! # Encoding
//!
//! One gene per demand unit, in instance order. Each gene pairs a demand
//! id with the supply id it is currently assigned to. Construction is
//! constraint-aware but soft: when no capacity-sufficient unused supply
//! unit remains, a gene falls back to an arbitrary supply unit rather
//! than failing.
//!
//! # Reference
//! Eiben & Smith (2015), "Introduction to Evolutionary Computing", Ch. 4

use rand::prelude::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::models::{Allocation, Assignment, ProblemInstance, Violation};

/// One demand-to-supply assignment within a chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gene {
    /// Demand unit id.
    pub demand_id: u32,
    /// Assigned supply unit id.
    pub supply_id: u32,
}

/// A candidate allocation: one gene per demand unit, in instance order.
///
/// Fitness is never stored; it is recomputed on demand from the genes
/// and the instance.
#[derive(Debug, Clone)]
pub struct AllocationChromosome {
    /// Genes, one per demand unit, in instance order.
    pub genes: Vec<Gene>,
}

impl AllocationChromosome {
    /// Creates a random constraint-aware chromosome.
    ///
    /// Walks demand units in instance order, keeping a used-supply list.
    /// Each gene picks uniformly among capacity-sufficient unused supply
    /// units and marks its pick as used. When none remains, the gene
    /// picks uniformly from the full supply set and the pick is NOT
    /// marked used; such a gene may collide or undersize. An instance
    /// without supply units yields an empty chromosome; the engine
    /// rejects those instances up front.
    pub fn random<R: Rng>(instance: &ProblemInstance, rng: &mut R) -> Self {
        if instance.supply_units().is_empty() {
            return Self { genes: Vec::new() };
        }

        let mut genes = Vec::with_capacity(instance.demand_count());
        let mut used: Vec<u32> = Vec::new();

        for demand in instance.demand_units() {
            let eligible: Vec<u32> = instance
                .supply_units()
                .iter()
                .filter(|s| s.can_hold(demand.required_capacity) && !used.contains(&s.id))
                .map(|s| s.id)
                .collect();

            let supply_id = match eligible.choose(rng) {
                Some(&id) => {
                    used.push(id);
                    id
                }
                // Fallback keeps construction total; the pick stays unmarked.
                None => instance
                    .supply_units()
                    .choose(rng)
                    .map(|s| s.id)
                    .unwrap_or_default(),
            };

            genes.push(Gene {
                demand_id: demand.id,
                supply_id,
            });
        }

        Self { genes }
    }

    /// Computes the fitness of this chromosome.
    ///
    /// Sum of required capacity over genes whose assigned supply unit
    /// can hold the demand unit. Pure and deterministic; double-booked
    /// genes still count when capacity suffices.
    pub fn fitness(&self, instance: &ProblemInstance) -> i64 {
        self.genes
            .iter()
            .filter_map(|g| {
                let demand = instance.lookup_demand(g.demand_id)?;
                let supply = instance.lookup_supply(g.supply_id)?;
                supply
                    .can_hold(demand.required_capacity)
                    .then_some(demand.required_capacity as i64)
            })
            .sum()
    }

    /// Number of genes whose supply unit is shared with another gene.
    pub fn collision_count(&self) -> usize {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for g in &self.genes {
            *counts.entry(g.supply_id).or_insert(0) += 1;
        }
        self.genes
            .iter()
            .filter(|g| counts[&g.supply_id] > 1)
            .count()
    }

    /// Decodes the chromosome into an [`Allocation`] with violations.
    pub fn decode(&self, instance: &ProblemInstance) -> Allocation {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for g in &self.genes {
            *counts.entry(g.supply_id).or_insert(0) += 1;
        }

        let mut allocation = Allocation::new();
        for g in &self.genes {
            let (demand, supply) = match (
                instance.lookup_demand(g.demand_id),
                instance.lookup_supply(g.supply_id),
            ) {
                (Some(d), Some(s)) => (d, s),
                _ => continue,
            };

            allocation.assignments.push(Assignment::new(
                g.demand_id,
                g.supply_id,
                demand.required_capacity,
                supply.capacity,
            ));

            if !supply.can_hold(demand.required_capacity) {
                allocation.violations.push(Violation::capacity_shortfall(
                    g.demand_id,
                    format!(
                        "demand {} requires {} but supply {} offers {}",
                        g.demand_id, demand.required_capacity, g.supply_id, supply.capacity
                    ),
                ));
            }
            if counts[&g.supply_id] > 1 {
                allocation.violations.push(Violation::double_booked(
                    g.supply_id,
                    format!(
                        "supply {} held by {} demand units",
                        g.supply_id, counts[&g.supply_id]
                    ),
                ));
            }
        }

        allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DemandUnit, SupplyUnit};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn satisfiable_instance() -> ProblemInstance {
        ProblemInstance::new(
            vec![
                DemandUnit::new(1, 50),
                DemandUnit::new(2, 60),
                DemandUnit::new(3, 70),
            ],
            vec![
                SupplyUnit::new(1, 100),
                SupplyUnit::new(2, 100),
                SupplyUnit::new(3, 100),
                SupplyUnit::new(4, 100),
            ],
        )
    }

    #[test]
    fn test_random_one_gene_per_demand_in_order() {
        let instance = satisfiable_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = AllocationChromosome::random(&instance, &mut rng);

        let demand_ids: Vec<u32> = ch.genes.iter().map(|g| g.demand_id).collect();
        assert_eq!(demand_ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_random_is_collision_free_when_satisfiable() {
        // Every demand fits every supply and supply count >= demand count,
        // so the eligible set can never run dry during construction.
        let instance = satisfiable_instance();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let ch = AllocationChromosome::random(&instance, &mut rng);
            assert_eq!(ch.collision_count(), 0);
        }
    }

    #[test]
    fn test_random_fallback_when_nothing_fits() {
        // No supply can hold demand 2; its gene must still be produced.
        let instance = ProblemInstance::new(
            vec![DemandUnit::new(1, 50), DemandUnit::new(2, 60)],
            vec![SupplyUnit::new(1, 100), SupplyUnit::new(2, 40)],
        );
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..20 {
            let ch = AllocationChromosome::random(&instance, &mut rng);
            assert_eq!(ch.genes.len(), 2);
            // Demand 1 always gets supply 1, the only unit that fits it.
            assert_eq!(ch.genes[0].supply_id, 1);
        }
    }

    #[test]
    fn test_random_empty_supply_yields_empty_chromosome() {
        let instance = ProblemInstance::new(vec![DemandUnit::new(1, 10)], vec![]);
        let mut rng = SmallRng::seed_from_u64(3);
        let ch = AllocationChromosome::random(&instance, &mut rng);
        assert!(ch.genes.is_empty());
    }

    #[test]
    fn test_fitness_deterministic_and_pure() {
        let instance = satisfiable_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = AllocationChromosome::random(&instance, &mut rng);

        let before = ch.genes.clone();
        let f1 = ch.fitness(&instance);
        let f2 = ch.fitness(&instance);
        assert_eq!(f1, f2);
        assert_eq!(ch.genes, before);
    }

    #[test]
    fn test_fitness_bounded_by_total_required() {
        let instance = satisfiable_instance();
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..20 {
            let ch = AllocationChromosome::random(&instance, &mut rng);
            assert!(ch.fitness(&instance) <= instance.total_required());
        }
    }

    #[test]
    fn test_fitness_counts_only_satisfying_genes() {
        let instance = ProblemInstance::new(
            vec![DemandUnit::new(1, 50), DemandUnit::new(2, 60)],
            vec![SupplyUnit::new(1, 100), SupplyUnit::new(2, 40)],
        );
        let ch = AllocationChromosome {
            genes: vec![
                Gene {
                    demand_id: 1,
                    supply_id: 1,
                },
                Gene {
                    demand_id: 2,
                    supply_id: 2,
                },
            ],
        };
        // Demand 2 in supply 2 undersizes and contributes nothing.
        assert_eq!(ch.fitness(&instance), 50);
    }

    #[test]
    fn test_collision_count() {
        let ch = AllocationChromosome {
            genes: vec![
                Gene {
                    demand_id: 1,
                    supply_id: 1,
                },
                Gene {
                    demand_id: 2,
                    supply_id: 1,
                },
                Gene {
                    demand_id: 3,
                    supply_id: 2,
                },
            ],
        };
        assert_eq!(ch.collision_count(), 2);
    }

    #[test]
    fn test_decode_reports_violations() {
        let instance = ProblemInstance::new(
            vec![DemandUnit::new(1, 50), DemandUnit::new(2, 60)],
            vec![SupplyUnit::new(1, 100), SupplyUnit::new(2, 40)],
        );
        let ch = AllocationChromosome {
            genes: vec![
                Gene {
                    demand_id: 1,
                    supply_id: 1,
                },
                Gene {
                    demand_id: 2,
                    supply_id: 1,
                },
            ],
        };
        let allocation = ch.decode(&instance);

        assert_eq!(allocation.assignment_count(), 2);
        assert!(!allocation.is_conflict_free());
        // Both genes satisfy capacity, so the raw satisfied sum counts both.
        assert_eq!(allocation.satisfied_total(), 110);
    }
}
