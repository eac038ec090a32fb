//! Problem instance model.
//!
//! An immutable view of the demand and supply collections for one
//! solver run, with id-based lookups.

use std::collections::HashMap;

use super::{DemandUnit, SupplyUnit};

/// An assignment problem instance: who needs space, and what space exists.
///
/// Immutable for the duration of a run. Duplicate ids and negative
/// capacities are caller preconditions; the constructor does not reject
/// them. Use [`crate::validation::validate_instance`] to check inputs
/// before solving.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    demands: Vec<DemandUnit>,
    supplies: Vec<SupplyUnit>,
    demand_index: HashMap<u32, usize>,
    supply_index: HashMap<u32, usize>,
}

impl ProblemInstance {
    /// Creates an instance from demand and supply collections.
    ///
    /// Demand order is preserved; allocations are always produced in
    /// this order.
    pub fn new(demands: Vec<DemandUnit>, supplies: Vec<SupplyUnit>) -> Self {
        let demand_index = demands.iter().enumerate().map(|(i, d)| (d.id, i)).collect();
        let supply_index = supplies.iter().enumerate().map(|(i, s)| (s.id, i)).collect();
        Self {
            demands,
            supplies,
            demand_index,
            supply_index,
        }
    }

    /// All demand units, in instance order.
    pub fn demand_units(&self) -> &[DemandUnit] {
        &self.demands
    }

    /// All supply units.
    pub fn supply_units(&self) -> &[SupplyUnit] {
        &self.supplies
    }

    /// Looks up a demand unit by id.
    pub fn lookup_demand(&self, id: u32) -> Option<&DemandUnit> {
        self.demand_index.get(&id).map(|&i| &self.demands[i])
    }

    /// Looks up a supply unit by id.
    pub fn lookup_supply(&self, id: u32) -> Option<&SupplyUnit> {
        self.supply_index.get(&id).map(|&i| &self.supplies[i])
    }

    /// Number of demand units.
    pub fn demand_count(&self) -> usize {
        self.demands.len()
    }

    /// Number of supply units.
    pub fn supply_count(&self) -> usize {
        self.supplies.len()
    }

    /// Sum of required capacity over all demand units.
    ///
    /// Upper bound for any fitness value on this instance.
    pub fn total_required(&self) -> i64 {
        self.demands.iter().map(|d| d.required_capacity as i64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instance() -> ProblemInstance {
        ProblemInstance::new(
            vec![
                DemandUnit::new(1, 80).with_name("BCA Semester 1"),
                DemandUnit::new(2, 90).with_name("BCA Semester 2"),
            ],
            vec![
                SupplyUnit::new(1, 80).with_name("Room 101"),
                SupplyUnit::new(3, 150).with_name("Room 103"),
            ],
        )
    }

    #[test]
    fn test_lookups() {
        let instance = sample_instance();
        assert_eq!(instance.lookup_demand(2).map(|d| d.required_capacity), Some(90));
        assert_eq!(instance.lookup_supply(3).map(|s| s.capacity), Some(150));
        assert!(instance.lookup_demand(99).is_none());
        assert!(instance.lookup_supply(99).is_none());
    }

    #[test]
    fn test_order_preserved() {
        let instance = sample_instance();
        let ids: Vec<u32> = instance.demand_units().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_total_required() {
        let instance = sample_instance();
        assert_eq!(instance.total_required(), 170);
        assert_eq!(instance.demand_count(), 2);
        assert_eq!(instance.supply_count(), 2);
    }
}
