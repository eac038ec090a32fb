//! Allocation (solution) model.
//!
//! An allocation is a complete demand-to-supply assignment. It may
//! include constraint violations, since the solver is a best-effort
//! heuristic rather than a constraint solver.

use serde::{Deserialize, Serialize};

/// A complete allocation (solution to an assignment problem).
///
/// Assignments appear in demand-unit order, one per demand unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Allocation {
    /// Demand-to-supply assignments, in demand order.
    pub assignments: Vec<Assignment>,
    /// Constraint violations detected in this allocation.
    pub violations: Vec<Violation>,
}

/// A single demand-to-supply assignment.
///
/// Capacities are denormalized from the problem instance for query
/// convenience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned demand unit id.
    pub demand_id: u32,
    /// Assigned supply unit id.
    pub supply_id: u32,
    /// Capacity the demand unit requires.
    pub required_capacity: i32,
    /// Capacity the supply unit offers.
    pub capacity: i32,
}

/// A constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity id (demand or supply unit).
    pub entity_id: u32,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of constraint violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A demand unit was placed in a supply unit too small for it.
    CapacityShortfall,
    /// A supply unit is held by more than one demand unit.
    DoubleBooked,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(demand_id: u32, supply_id: u32, required_capacity: i32, capacity: i32) -> Self {
        Self {
            demand_id,
            supply_id,
            required_capacity,
            capacity,
        }
    }

    /// Whether the supply unit can actually hold the demand unit.
    #[inline]
    pub fn satisfied(&self) -> bool {
        self.capacity >= self.required_capacity
    }
}

impl Violation {
    /// Creates a capacity shortfall violation.
    pub fn capacity_shortfall(demand_id: u32, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::CapacityShortfall,
            entity_id: demand_id,
            message: message.into(),
            severity: 70,
        }
    }

    /// Creates a double booking violation.
    pub fn double_booked(supply_id: u32, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::DoubleBooked,
            entity_id: supply_id,
            message: message.into(),
            severity: 90,
        }
    }
}

impl Allocation {
    /// Creates an empty allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no supply unit is held by more than one demand unit.
    pub fn is_conflict_free(&self) -> bool {
        !self
            .violations
            .iter()
            .any(|v| v.violation_type == ViolationType::DoubleBooked)
    }

    /// Sum of required capacity over capacity-satisfying assignments.
    ///
    /// Counts every satisfying assignment, double-booked or not; this is
    /// the same quantity the genetic engine optimizes.
    pub fn satisfied_total(&self) -> i64 {
        self.assignments
            .iter()
            .filter(|a| a.satisfied())
            .map(|a| a.required_capacity as i64)
            .sum()
    }

    /// Looks up the assignment for a demand unit.
    pub fn assignment_for(&self, demand_id: u32) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.demand_id == demand_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_allocation() -> Allocation {
        Allocation {
            assignments: vec![
                Assignment::new(1, 1, 50, 100),
                Assignment::new(2, 2, 60, 40),
            ],
            violations: vec![Violation::capacity_shortfall(
                2,
                "demand 2 requires 60 but supply 2 offers 40",
            )],
        }
    }

    #[test]
    fn test_satisfied() {
        let a = Assignment::new(1, 1, 50, 100);
        assert!(a.satisfied());
        let b = Assignment::new(2, 2, 60, 40);
        assert!(!b.satisfied());
    }

    #[test]
    fn test_satisfied_total() {
        let allocation = sample_allocation();
        assert_eq!(allocation.satisfied_total(), 50);
        assert_eq!(allocation.assignment_count(), 2);
    }

    #[test]
    fn test_conflict_free() {
        let mut allocation = sample_allocation();
        assert!(allocation.is_conflict_free());

        allocation
            .violations
            .push(Violation::double_booked(1, "supply 1 held twice"));
        assert!(!allocation.is_conflict_free());
    }

    #[test]
    fn test_assignment_for() {
        let allocation = sample_allocation();
        assert_eq!(allocation.assignment_for(2).map(|a| a.supply_id), Some(2));
        assert!(allocation.assignment_for(9).is_none());
    }

    #[test]
    fn test_allocation_serializes() {
        let allocation = sample_allocation();
        let json = serde_json::to_string(&allocation).unwrap();
        assert!(json.contains("\"demand_id\":1"));
        assert!(json.contains("CapacityShortfall"));
    }
}
