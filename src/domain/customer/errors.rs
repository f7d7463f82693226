// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Address is mandatory to activate a customer")]
    MissingAddress,

    #[error("Street is required")]
    EmptyStreet,

    #[error("Street number must be greater than zero")]
    InvalidStreetNumber,

    #[error("Zip is required")]
    EmptyZip,

    #[error("City is required")]
    EmptyCity,

    #[error("Reward points must be greater than zero")]
    InvalidRewardPoints,
}
