use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::atomic::AtomicCell;

use super::{Entity, EntityBase};

/// An entity that has health and can die.
pub struct LivingEntity {
    /// The underlying entity object, providing basic entity information and functionality.
    pub entity: Entity,
    /// The current health level of the entity.
    pub health: AtomicCell<f32>,
    /// The health the entity spawns with and can heal up to.
    pub max_health: f32,
    /// Indicates whether the entity is dead.
    pub dead: AtomicBool,
}

impl LivingEntity {
    #[must_use]
    pub fn new(entity: Entity, max_health: f32) -> Self {
        Self {
            entity,
            health: AtomicCell::new(max_health),
            max_health,
            dead: AtomicBool::new(false),
        }
    }

    /// Sets the health, clamped to `[0, max_health]`. Reaching zero marks the
    /// entity dead; anything above revives it.
    pub fn set_health(&self, health: f32) {
        let health = health.clamp(0.0, self.max_health);
        self.health.store(health);
        self.dead.store(health <= 0.0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.dead.load(Ordering::Relaxed)
    }
}

impl EntityBase for LivingEntity {
    fn get_entity(&self) -> &Entity {
        &self.entity
    }

    fn get_living_entity(&self) -> Option<&LivingEntity> {
        Some(self)
    }
}
