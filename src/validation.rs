//! Input validation for assignment problems.
//!
//! Checks structural integrity of problem instances and engine
//! configurations before solving. Detects:
//! - Duplicate ids
//! - Negative capacities
//! - Missing supply
//! - Malformed engine configuration

use std::collections::HashSet;

use crate::ga::GaConfig;
use crate::models::ProblemInstance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same id within one collection.
    DuplicateId,
    /// A demand or supply unit carries a negative capacity.
    NegativeCapacity,
    /// The instance has no supply units.
    EmptySupply,
    /// The population size is zero or odd.
    InvalidPopulationSize,
    /// The mutation rate is NaN or outside `[0, 1]`.
    InvalidMutationRate,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of a problem instance.
///
/// Checks:
/// 1. No duplicate demand unit ids
/// 2. No duplicate supply unit ids
/// 3. No negative required capacity or offered capacity
///
/// These are documented caller preconditions of the solver; this
/// function is the opt-in way to enforce them at the boundary.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &ProblemInstance) -> ValidationResult {
    let mut errors = Vec::new();

    let mut demand_ids = HashSet::new();
    for d in instance.demand_units() {
        if !demand_ids.insert(d.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate demand unit id: {}", d.id),
            ));
        }
        if d.required_capacity < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCapacity,
                format!(
                    "Demand unit {} has negative required capacity {}",
                    d.id, d.required_capacity
                ),
            ));
        }
    }

    let mut supply_ids = HashSet::new();
    for s in instance.supply_units() {
        if !supply_ids.insert(s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate supply unit id: {}", s.id),
            ));
        }
        if s.capacity < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCapacity,
                format!("Supply unit {} has negative capacity {}", s.id, s.capacity),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an engine configuration.
///
/// The pairwise reproduction scheme consumes the population two
/// individuals at a time, so the population size must be positive and
/// even. The mutation rate is a probability and must lie in `[0, 1]`.
pub fn validate_config(config: &GaConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.population_size == 0 || config.population_size % 2 != 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPopulationSize,
            format!(
                "Population size must be positive and even, got {}",
                config.population_size
            ),
        ));
    }

    if config.mutation_rate.is_nan()
        || config.mutation_rate < 0.0
        || config.mutation_rate > 1.0
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMutationRate,
            format!(
                "Mutation rate must lie in [0, 1], got {}",
                config.mutation_rate
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
