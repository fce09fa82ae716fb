use angler_util::math::vector3::Vector3;
use crossbeam::atomic::AtomicCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{Entity, EntityBase, EntityType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FishHookState {
    /// Thrown and not yet attached to anything.
    Flying,
    /// Attached to an entity.
    HookedInEntity,
}

/// The projectile at the end of a fishing line.
pub struct FishHook {
    pub entity: Entity,
    /// The entity holding the rod, if any.
    owner: Option<Uuid>,
    hooked_entity: AtomicCell<Option<Uuid>>,
    state: AtomicCell<FishHookState>,
}

impl FishHook {
    /// Speed the hook leaves the rod with, in blocks per tick.
    pub const CAST_SPEED: f64 = 0.6;

    #[must_use]
    pub fn new(entity: Entity, owner: Option<Uuid>) -> Self {
        Self {
            entity,
            owner,
            hooked_entity: AtomicCell::new(None),
            state: AtomicCell::new(FishHookState::Flying),
        }
    }

    /// Spawns a hook at `pos` flying along `direction`.
    #[must_use]
    pub fn cast(owner: Option<Uuid>, pos: Vector3<f64>, direction: Vector3<f64>) -> Self {
        let entity = Entity::spawn(&EntityType::FISHING_BOBBER, pos);
        entity.set_velocity(direction.normalize() * Self::CAST_SPEED);
        Self::new(entity, owner)
    }

    #[must_use]
    pub const fn get_owner(&self) -> Option<Uuid> {
        self.owner
    }

    #[must_use]
    pub fn get_hooked_entity(&self) -> Option<Uuid> {
        self.hooked_entity.load()
    }

    /// Attaches the hook to `entity`, or detaches it and lets it fly again.
    pub fn set_hooked_entity(&self, entity: Option<&dyn EntityBase>) {
        let hooked = entity.map(|entity| entity.get_entity().entity_uuid);
        self.hooked_entity.store(hooked);
        self.state.store(if hooked.is_some() {
            FishHookState::HookedInEntity
        } else {
            FishHookState::Flying
        });
    }

    #[must_use]
    pub fn get_state(&self) -> FishHookState {
        self.state.load()
    }
}

impl EntityBase for FishHook {
    fn get_entity(&self) -> &Entity {
        &self.entity
    }
}
