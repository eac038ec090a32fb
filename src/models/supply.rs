//! Supply unit model.
//!
//! A supply unit offers a fixed capacity: a room, a hall, a dock slot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A supply unit that demand units can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyUnit {
    /// Unique supply identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Fixed capacity on offer.
    pub capacity: i32,
    /// Domain-specific key-value metadata.
    pub attributes: HashMap<String, String>,
}

impl SupplyUnit {
    /// Creates a new supply unit.
    pub fn new(id: u32, capacity: i32) -> Self {
        Self {
            id,
            name: String::new(),
            capacity,
            attributes: HashMap::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether this unit can hold the given required capacity.
    #[inline]
    pub fn can_hold(&self, required_capacity: i32) -> bool {
        self.capacity >= required_capacity
    }
}
