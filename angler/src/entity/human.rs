use super::{Entity, EntityBase, living::LivingEntity};

/// A humanoid actor that is not backed by a connected client.
pub struct HumanEntity {
    /// The underlying living entity object that represents the human.
    pub living_entity: LivingEntity,
    /// The name displayed above the human.
    pub name: String,
}

impl HumanEntity {
    pub const MAX_HEALTH: f32 = 20.0;

    #[must_use]
    pub fn new(entity: Entity, name: String) -> Self {
        Self {
            living_entity: LivingEntity::new(entity, Self::MAX_HEALTH),
            name,
        }
    }
}

impl EntityBase for HumanEntity {
    fn get_entity(&self) -> &Entity {
        &self.living_entity.entity
    }

    fn get_living_entity(&self) -> Option<&LivingEntity> {
        Some(&self.living_entity)
    }

    fn get_human(&self) -> Option<&HumanEntity> {
        Some(self)
    }
}
