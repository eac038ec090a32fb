//! Assignment domain models.
//!
//! Core data types for capacity-constrained assignment problems and
//! their solutions. Domain-agnostic within assignment: the same types
//! cover course/room allocation, exam seating, and dock assignment.
//!
//! # Domain Mappings
//!
//! | u-alloc | Education | Events | Logistics |
//! |------------|-----------|---------|-----------|
//! | DemandUnit | Course | Session | Shipment |
//! | SupplyUnit | Room | Hall | Dock Slot |
//! | Allocation | Room Plan | Venue Plan | Dock Plan |

mod allocation;
mod demand;
mod instance;
mod supply;

pub use allocation::{Allocation, Assignment, Violation, ViolationType};
pub use demand::DemandUnit;
pub use instance::ProblemInstance;
pub use supply::SupplyUnit;
