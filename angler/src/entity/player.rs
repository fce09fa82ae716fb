use angler_util::math::vector3::Vector3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, EntityBase, EntityType, human::HumanEntity, living::LivingEntity};

/// The account a player connected with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProfile {
    pub id: Uuid,
    pub name: String,
}

/// Represents a player entity.
///
/// A `Player` is a human controlled by a connected client.
pub struct Player {
    /// The underlying human object that represents the player.
    pub human: HumanEntity,
    /// The player's game profile information, including their username and UUID.
    pub gameprofile: GameProfile,
}

impl Player {
    /// Creates a player whose entity UUID is the profile id.
    #[must_use]
    pub fn new(gameprofile: GameProfile, pos: Vector3<f64>) -> Self {
        let entity = Entity::new(gameprofile.id, &EntityType::PLAYER, pos);
        Self {
            human: HumanEntity::new(entity, gameprofile.name.clone()),
            gameprofile,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.gameprofile.name
    }
}

impl EntityBase for Player {
    fn get_entity(&self) -> &Entity {
        &self.human.living_entity.entity
    }

    fn get_living_entity(&self) -> Option<&LivingEntity> {
        Some(&self.human.living_entity)
    }

    fn get_human(&self) -> Option<&HumanEntity> {
        Some(&self.human)
    }

    fn get_player(&self) -> Option<&Player> {
        Some(self)
    }
}

#[cfg(test)]
mod test {
    use angler_util::math::vector3::Vector3;
    use uuid::Uuid;

    use crate::entity::{
        Entity, EntityBase, EntityType, SourceKind, human::HumanEntity,
    };

    use super::{GameProfile, Player};

    #[test]
    fn player_narrows_all_the_way() {
        let id = Uuid::new_v4();
        let player = Player::new(
            GameProfile {
                id,
                name: "Notch".to_string(),
            },
            Vector3::new(0.0, 64.0, 0.0),
        );

        assert_eq!(player.get_source_kind(), SourceKind::Player);
        assert_eq!(player.get_entity().entity_uuid, id);
        assert!(player.get_living_entity().is_some());
        assert_eq!(player.get_human().map(|h| h.name.as_str()), Some("Notch"));
        assert_eq!(player.name(), "Notch");
    }

    #[test]
    fn human_stops_before_player() {
        let human = HumanEntity::new(
            Entity::spawn(&EntityType::MANNEQUIN, Vector3::default()),
            "Steve".to_string(),
        );

        assert_eq!(human.get_source_kind(), SourceKind::Human);
        assert!(human.get_player().is_none());
        assert!(human.get_living_entity().is_some());
    }
}
