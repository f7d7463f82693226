// ============================================================================
// Domain Layer - Event Producers and Reactions
// ============================================================================
//
// Each domain has its own subdirectory with:
// - Value objects
// - Entity
// - Events
// - Handlers
// - Service publishing events after state changes
//
// This layer only talks to the dispatcher through src/event_dispatch/.
//
// ============================================================================

pub mod customer;
