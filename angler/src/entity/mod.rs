use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use angler_util::math::{vector3::Vector3, wrap_degrees};
use crossbeam::atomic::AtomicCell;
use human::HumanEntity;
use living::LivingEntity;
use player::Player;
use serde::{Deserialize, Serialize};
use snapshot::EntitySnapshot;
use uuid::Uuid;

pub mod human;
pub mod living;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod r#type;

pub use r#type::EntityType;

static CURRENT_ID: AtomicI32 = AtomicI32::new(0);

/// How specific an entity is, from the most general to the most specific.
///
/// Every player is a human, every human is living and every living entity is
/// an entity, so the ordering doubles as an "is at least" relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Entity,
    Living,
    Human,
    Player,
}

impl SourceKind {
    pub const ALL: [Self; 4] = [Self::Entity, Self::Living, Self::Human, Self::Player];

    /// Returns whether something of kind `other` also counts as `self`.
    #[must_use]
    pub fn includes(self, other: Self) -> bool {
        other >= self
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "Entity",
            Self::Living => "Living",
            Self::Human => "Human",
            Self::Player => "Player",
        }
    }
}

pub trait EntityBase: Send + Sync {
    fn get_entity(&self) -> &Entity;

    fn get_living_entity(&self) -> Option<&LivingEntity> {
        None
    }

    fn get_human(&self) -> Option<&HumanEntity> {
        None
    }

    fn get_player(&self) -> Option<&Player> {
        None
    }

    /// The most specific kind this entity can be narrowed to.
    fn get_source_kind(&self) -> SourceKind {
        if self.get_player().is_some() {
            SourceKind::Player
        } else if self.get_human().is_some() {
            SourceKind::Human
        } else if self.get_living_entity().is_some() {
            SourceKind::Living
        } else {
            SourceKind::Entity
        }
    }

    /// Captures the entity's current state.
    fn create_snapshot(&self) -> EntitySnapshot {
        EntitySnapshot::capture(self)
    }
}

/// State shared by every entity in the world.
pub struct Entity {
    /// A unique identifier for the entity, valid for this process only
    pub entity_id: i32,
    /// A persistent, unique identifier for the entity
    pub entity_uuid: Uuid,
    /// The type of entity (e.g., player, zombie, fishing bobber)
    pub entity_type: &'static EntityType,
    /// The entity's current position in the world
    pub pos: AtomicCell<Vector3<f64>>,
    /// The entity's current velocity vector
    pub velocity: AtomicCell<Vector3<f64>>,
    /// The entity's yaw rotation (horizontal rotation)
    pub yaw: AtomicCell<f32>,
    /// The entity's pitch rotation (vertical rotation)
    pub pitch: AtomicCell<f32>,
    /// Indicates whether the entity is on the ground
    pub on_ground: AtomicBool,
    /// Set once the entity has been removed from its world
    removed: AtomicBool,
}

impl Entity {
    #[must_use]
    pub fn new(entity_uuid: Uuid, entity_type: &'static EntityType, pos: Vector3<f64>) -> Self {
        Self {
            entity_id: CURRENT_ID.fetch_add(1, Ordering::Relaxed),
            entity_uuid,
            entity_type,
            pos: AtomicCell::new(pos),
            velocity: AtomicCell::new(Vector3::default()),
            yaw: AtomicCell::new(0.0),
            pitch: AtomicCell::new(0.0),
            on_ground: AtomicBool::new(false),
            removed: AtomicBool::new(false),
        }
    }

    /// Creates an entity with a freshly generated UUID.
    #[must_use]
    pub fn spawn(entity_type: &'static EntityType, pos: Vector3<f64>) -> Self {
        Self::new(Uuid::new_v4(), entity_type, pos)
    }

    pub fn set_pos(&self, pos: Vector3<f64>) {
        self.pos.store(pos);
    }

    pub fn set_velocity(&self, velocity: Vector3<f64>) {
        self.velocity.store(velocity);
    }

    pub fn add_velocity(&self, velocity: Vector3<f64>) {
        self.velocity.store(self.velocity.load() + velocity);
    }

    pub fn set_rotation(&self, yaw: f32, pitch: f32) {
        self.yaw.store(wrap_degrees(yaw));
        self.pitch.store(pitch.clamp(-90.0, 90.0));
    }

    pub fn remove(&self) {
        self.removed.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::Relaxed)
    }
}

impl EntityBase for Entity {
    fn get_entity(&self) -> &Entity {
        self
    }
}
