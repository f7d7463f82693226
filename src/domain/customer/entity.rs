use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================

/// Customer handle shared between the producer and the events it publishes
pub type SharedCustomer = Arc<RwLock<Customer>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    pub fn into_shared(self) -> SharedCustomer {
        Arc::new(RwLock::new(self))
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.trim().is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) -> Result<(), CustomerError> {
        address.validate()?;
        self.address = Some(address);
        Ok(())
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::MissingAddress);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) -> Result<(), CustomerError> {
        if points == 0 {
            return Err(CustomerError::InvalidRewardPoints);
        }
        self.reward_points = self.reward_points.saturating_add(points);
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
