use angler_util::math::vector3::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::{EntityBase, EntityType, SourceKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Snapshot belongs to entity {expected}, not {found}")]
    UuidMismatch { expected: Uuid, found: Uuid },

    #[error("Snapshot of a {expected} cannot be restored onto a {found}")]
    TypeMismatch {
        expected: String,
        found: &'static str,
    },

    #[error("Entity {0} has been removed")]
    EntityRemoved(Uuid),
}

/// An immutable capture of an entity's state at one point in time.
///
/// Snapshots never change after they are taken, so they can be compared with
/// the live entity later on to see what happened in between.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    uuid: Uuid,
    entity_type: String,
    kind: SourceKind,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    yaw: f32,
    pitch: f32,
    on_ground: bool,
    health: Option<f32>,
}

impl EntitySnapshot {
    #[must_use]
    pub fn capture<E: EntityBase + ?Sized>(entity: &E) -> Self {
        let base = entity.get_entity();
        Self {
            uuid: base.entity_uuid,
            entity_type: base.entity_type.resource_name.to_string(),
            kind: entity.get_source_kind(),
            position: base.pos.load(),
            velocity: base.velocity.load(),
            yaw: base.yaw.load(),
            pitch: base.pitch.load(),
            on_ground: base.on_ground.load(std::sync::atomic::Ordering::Relaxed),
            health: entity.get_living_entity().map(|living| living.health.load()),
        }
    }

    #[must_use]
    pub const fn get_uuid(&self) -> Uuid {
        self.uuid
    }

    #[must_use]
    pub fn get_entity_type(&self) -> Option<&'static EntityType> {
        EntityType::from_name(&self.entity_type)
    }

    #[must_use]
    pub const fn get_kind(&self) -> SourceKind {
        self.kind
    }

    #[must_use]
    pub const fn get_position(&self) -> Vector3<f64> {
        self.position
    }

    #[must_use]
    pub const fn get_velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    #[must_use]
    pub const fn get_rotation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    #[must_use]
    pub const fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    /// The captured health, `None` if the entity was not living.
    #[must_use]
    pub const fn get_health(&self) -> Option<f32> {
        self.health
    }

    /// Whether this snapshot was taken of `entity`.
    #[must_use]
    pub fn is_of<E: EntityBase + ?Sized>(&self, entity: &E) -> bool {
        self.uuid == entity.get_entity().entity_uuid
    }

    /// Writes the captured state back onto the live entity it was taken from.
    pub fn restore<E: EntityBase + ?Sized>(&self, target: &E) -> Result<(), SnapshotError> {
        let base = target.get_entity();
        if base.entity_uuid != self.uuid {
            return Err(SnapshotError::UuidMismatch {
                expected: self.uuid,
                found: base.entity_uuid,
            });
        }
        if base.entity_type.resource_name != self.entity_type {
            return Err(SnapshotError::TypeMismatch {
                expected: self.entity_type.clone(),
                found: base.entity_type.resource_name,
            });
        }
        if base.is_removed() {
            return Err(SnapshotError::EntityRemoved(self.uuid));
        }

        base.set_pos(self.position);
        base.set_velocity(self.velocity);
        base.yaw.store(self.yaw);
        base.pitch.store(self.pitch);
        base.on_ground
            .store(self.on_ground, std::sync::atomic::Ordering::Relaxed);
        if let (Some(living), Some(health)) = (target.get_living_entity(), self.health) {
            living.set_health(health);
        }

        debug!("Restored {} {} from snapshot", self.entity_type, self.uuid);
        Ok(())
    }
}
