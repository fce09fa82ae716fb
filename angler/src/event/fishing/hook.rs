use std::sync::Arc;

use angler_macros::{Event, cancellable};
use tracing::debug;

use crate::entity::{
    EntityBase, projectile::fish_hook::FishHook, snapshot::EntitySnapshot,
};
use crate::event::target::TargetEntityEvent;

use super::{FishingEvent, FishingPhase, FishingSource};

/// An event that occurs when an entity is hooked by a fish hook.
#[cancellable]
#[derive(Event, Clone)]
pub struct FishHookEvent {
    /// Who the hook belongs to, if anyone.
    source: Option<FishingSource>,

    /// The hook doing the hooking.
    fish_hook: Arc<FishHook>,

    /// The hook as it was when the event was created.
    original_fish_hook: EntitySnapshot,

    /// The entity that was hit, as it was when the event was created.
    original_hooked_entity: EntitySnapshot,

    /// The entity that ends up hooked. Handlers may redirect or clear it.
    hooked_entity: Option<Arc<dyn EntityBase>>,
}

impl FishHookEvent {
    /// Creates a new instance of `FishHookEvent` for `hooked_entity` being hit.
    #[must_use]
    pub fn new(
        source: Option<FishingSource>,
        fish_hook: Arc<FishHook>,
        hooked_entity: Arc<dyn EntityBase>,
    ) -> Self {
        Self {
            source,
            original_fish_hook: fish_hook.create_snapshot(),
            fish_hook,
            original_hooked_entity: hooked_entity.create_snapshot(),
            hooked_entity: Some(hooked_entity),
            cancelled: false,
        }
    }

    /// Gets the hooked entity as it was before the event.
    #[must_use]
    pub const fn get_original_hooked_entity(&self) -> &EntitySnapshot {
        &self.original_hooked_entity
    }

    /// Gets the entity that will be hooked, if any.
    #[must_use]
    pub const fn get_hooked_entity(&self) -> Option<&Arc<dyn EntityBase>> {
        self.hooked_entity.as_ref()
    }

    /// Sets the entity that will be hooked. `None` leaves the hook empty.
    pub fn set_hooked_entity(&mut self, entity: Option<Arc<dyn EntityBase>>) {
        debug!(
            "Hooked entity of {} set to {:?}",
            self.fish_hook.entity.entity_uuid,
            entity.as_ref().map(|e| e.get_entity().entity_uuid)
        );
        self.hooked_entity = entity;
    }

    /// Whether a handler replaced or cleared the originally hooked entity.
    #[must_use]
    pub fn hooked_entity_changed(&self) -> bool {
        self.hooked_entity
            .as_ref()
            .is_none_or(|entity| !self.original_hooked_entity.is_of(&**entity))
    }

    /// Resolves the hook once every handler has run.
    ///
    /// # Returns
    /// Whether the hook is now attached to an entity. A removed hook never is.
    pub fn apply(&self) -> bool {
        if self.cancelled || self.fish_hook.entity.is_removed() {
            return false;
        }
        self.fish_hook
            .set_hooked_entity(self.hooked_entity.as_deref());
        self.hooked_entity.is_some()
    }
}

impl FishingEvent for FishHookEvent {
    fn get_phase(&self) -> FishingPhase {
        FishingPhase::Hook
    }

    fn get_source(&self) -> Option<&FishingSource> {
        self.source.as_ref()
    }

    fn get_original_fish_hook(&self) -> &EntitySnapshot {
        &self.original_fish_hook
    }

    fn get_fish_hook(&self) -> &Arc<FishHook> {
        &self.fish_hook
    }
}

impl TargetEntityEvent for FishHookEvent {
    fn get_target_uuid(&self) -> uuid::Uuid {
        self.original_hooked_entity.get_uuid()
    }

    fn get_target_entity(&self) -> Option<Arc<dyn EntityBase>> {
        self.hooked_entity.clone()
    }
}
