//! Allocation quality metrics (KPIs).
//!
//! Computes standard quality indicators from a decoded allocation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Students | Sum of required capacity over all assignments |
//! | Satisfied Students | Required capacity summed over capacity-valid assignments |
//! | Seated Students | Satisfied students in rooms held by exactly one demand unit |
//! | Seated Rate | seated / total |
//! | Double-Booked Rooms | Supply units held by more than one demand unit |
//!
//! Satisfied counts every capacity-valid seat and equals the engine's
//! fitness; seated additionally excludes rooms in conflict, making it
//! the "legally seated" headcount a report should lead with.

use std::collections::HashMap;

use crate::models::Allocation;

/// Allocation performance indicators.
#[derive(Debug, Clone)]
pub struct AllocationKpi {
    /// Sum of required capacity over all assignments.
    pub total_students: i64,
    /// Required capacity summed over capacity-valid assignments,
    /// double-booked or not. Equals the engine's fitness.
    pub satisfied_students: i64,
    /// Required capacity summed over capacity-valid assignments whose
    /// supply unit is held by exactly one demand unit.
    pub seated_students: i64,
    /// seated_students / total_students (1.0 for an empty allocation).
    pub seated_rate: f64,
    /// Number of capacity-valid assignments.
    pub satisfied_count: usize,
    /// Number of assignments whose supply unit is too small.
    pub unsatisfied_count: usize,
    /// Number of supply units held by more than one demand unit.
    pub double_booked_rooms: usize,
    /// Demand units per supply unit, for occupancy reporting.
    pub occupancy_by_supply: HashMap<u32, usize>,
}

impl AllocationKpi {
    /// Computes KPIs from a decoded allocation.
    pub fn calculate(allocation: &Allocation) -> Self {
        let mut occupancy_by_supply: HashMap<u32, usize> = HashMap::new();
        for a in &allocation.assignments {
            *occupancy_by_supply.entry(a.supply_id).or_insert(0) += 1;
        }

        let mut total_students: i64 = 0;
        let mut satisfied_students: i64 = 0;
        let mut seated_students: i64 = 0;
        let mut satisfied_count: usize = 0;

        for a in &allocation.assignments {
            total_students += a.required_capacity as i64;
            if a.satisfied() {
                satisfied_count += 1;
                satisfied_students += a.required_capacity as i64;
                if occupancy_by_supply[&a.supply_id] == 1 {
                    seated_students += a.required_capacity as i64;
                }
            }
        }

        let double_booked_rooms = occupancy_by_supply.values().filter(|&&n| n > 1).count();
        let seated_rate = if total_students == 0 {
            1.0
        } else {
            seated_students as f64 / total_students as f64
        };

        Self {
            total_students,
            satisfied_students,
            seated_students,
            seated_rate,
            satisfied_count,
            unsatisfied_count: allocation.assignment_count() - satisfied_count,
            double_booked_rooms,
            occupancy_by_supply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    #[test]
    fn test_kpi_mixed_allocation() {
        // Demand 1 seated cleanly; demands 2 and 3 double-book supply 2;
        // demand 4 undersized in supply 3.
        let allocation = Allocation {
            assignments: vec![
                Assignment::new(1, 1, 50, 100),
                Assignment::new(2, 2, 60, 100),
                Assignment::new(3, 2, 30, 100),
                Assignment::new(4, 3, 90, 40),
            ],
            violations: vec![],
        };

        let kpi = AllocationKpi::calculate(&allocation);
        assert_eq!(kpi.total_students, 230);
        assert_eq!(kpi.satisfied_students, 140);
        assert_eq!(kpi.seated_students, 50);
        assert_eq!(kpi.satisfied_count, 3);
        assert_eq!(kpi.unsatisfied_count, 1);
        assert_eq!(kpi.double_booked_rooms, 1);
        assert_eq!(kpi.occupancy_by_supply[&2], 2);
        assert!((kpi.seated_rate - 50.0 / 230.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_allocation() {
        let kpi = AllocationKpi::calculate(&Allocation::new());
        assert_eq!(kpi.total_students, 0);
        assert_eq!(kpi.seated_students, 0);
        assert!((kpi.seated_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.double_booked_rooms, 0);
    }

    #[test]
    fn test_kpi_perfect_allocation() {
        let allocation = Allocation {
            assignments: vec![
                Assignment::new(1, 1, 10, 100),
                Assignment::new(2, 2, 10, 100),
                Assignment::new(3, 3, 10, 100),
            ],
            violations: vec![],
        };

        let kpi = AllocationKpi::calculate(&allocation);
        assert_eq!(kpi.seated_students, 30);
        assert_eq!(kpi.satisfied_students, 30);
        assert!((kpi.seated_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.unsatisfied_count, 0);
    }
}
