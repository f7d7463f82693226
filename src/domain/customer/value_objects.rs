use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    pub fn validate(&self) -> Result<(), CustomerError> {
        if self.street.trim().is_empty() {
            return Err(CustomerError::EmptyStreet);
        }
        if self.number == 0 {
            return Err(CustomerError::InvalidStreetNumber);
        }
        if self.zip.trim().is_empty() {
            return Err(CustomerError::EmptyZip);
        }
        if self.city.trim().is_empty() {
            return Err(CustomerError::EmptyCity);
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rua {}, {}, {}, {}", self.street, self.number, self.zip, self.city)
    }
}
