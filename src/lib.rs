//! Capacity-constrained assignment solver.
//!
//! Assigns demand units (courses, sessions, shipments) to supply units
//! (rooms, halls, dock slots) so that as much demand as possible lands
//! in a unit that can hold it, while discouraging double-booking. The
//! solver is a genetic algorithm: fast, approximate, best-effort. It is
//! not a constraint solver and does not guarantee optimality or zero
//! violations.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DemandUnit`, `SupplyUnit`,
//!   `ProblemInstance`, `Allocation`, `Assignment`, `Violation`
//! - **`ga`**: The genetic engine — chromosome encoding, operators,
//!   configuration, and the generation loop
//! - **`kpi`**: Allocation quality metrics for reporting consumers
//! - **`validation`**: Input integrity checks (duplicate ids, negative
//!   capacities, malformed configuration)
//!
//! # Example
//!
//! ```
//! use u_alloc::ga::{GaConfig, GaRunner};
//! use u_alloc::models::{DemandUnit, ProblemInstance, SupplyUnit};
//!
//! let instance = ProblemInstance::new(
//!     vec![
//!         DemandUnit::new(1, 80).with_name("BCA Semester 1"),
//!         DemandUnit::new(2, 60).with_name("MCA Semester 1"),
//!     ],
//!     vec![
//!         SupplyUnit::new(1, 80).with_name("Room 101"),
//!         SupplyUnit::new(3, 150).with_name("Room 103"),
//!     ],
//! );
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(100)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&instance, &config).unwrap();
//! assert_eq!(result.best.assignment_count(), 2);
//! ```

pub mod ga;
pub mod kpi;
pub mod models;
pub mod validation;
