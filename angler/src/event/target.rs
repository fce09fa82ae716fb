use std::sync::Arc;

use crate::entity::EntityBase;

/// A trait representing events that act on a target entity.
pub trait TargetEntityEvent: Send + Sync {
    /// Retrieves the UUID of the entity the event originally targeted.
    fn get_target_uuid(&self) -> uuid::Uuid;

    /// Retrieves the entity currently targeted, if there still is one.
    fn get_target_entity(&self) -> Option<Arc<dyn EntityBase>> {
        None
    }
}
