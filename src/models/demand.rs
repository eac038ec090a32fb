//! Demand unit model.
//!
//! A demand unit is an entity that needs to be placed somewhere with
//! enough capacity: a course needing a room, a meeting needing a hall,
//! a shipment needing a dock.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A demand unit to be assigned to a supply unit.
///
/// The solver only reads `id` and `required_capacity`; the remaining
/// fields carry reporting metadata through to the final allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandUnit {
    /// Unique demand identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Grouping key (e.g., department, business unit).
    pub group: String,
    /// Minimum capacity the assigned supply unit must offer.
    pub required_capacity: i32,
    /// Domain-specific key-value metadata.
    pub attributes: HashMap<String, String>,
}

impl DemandUnit {
    /// Creates a new demand unit.
    pub fn new(id: u32, required_capacity: i32) -> Self {
        Self {
            id,
            name: String::new(),
            group: String::new(),
            required_capacity,
            attributes: HashMap::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the grouping key.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
