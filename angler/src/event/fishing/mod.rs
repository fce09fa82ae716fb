//! Events fired around a fishing rod: casting the hook, the hook attaching to
//! an entity, and reeling the line back in.
//!
//! Instead of one event type per combination of phase and source, every event
//! carries its [`FishingPhase`] and an optional [`FishingSource`]. Handlers that
//! only care about, say, players casting can filter with an [`EventKey`].

use std::fmt;
use std::sync::Arc;

use angler_util::math::vector3::Vector3;

use crate::entity::{
    EntityBase, SourceKind, human::HumanEntity, living::LivingEntity, player::Player,
    projectile::fish_hook::FishHook, snapshot::EntitySnapshot,
};

use super::{Cancellable, Payload};

pub mod cast;
pub mod hook;
pub mod retract;

pub use cast::FishCastEvent;
pub use hook::FishHookEvent;
pub use retract::{FishRetractEvent, RetractOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FishingPhase {
    /// The hook is thrown.
    Cast,
    /// The hook attaches to an entity.
    Hook,
    /// The line is reeled in.
    Retract,
}

impl FishingPhase {
    pub const ALL: [Self; 3] = [Self::Cast, Self::Hook, Self::Retract];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cast => "Cast",
            Self::Hook => "Hook",
            Self::Retract => "Retract",
        }
    }
}

/// The entity responsible for a fishing event.
#[derive(Clone)]
pub struct FishingSource {
    entity: Arc<dyn EntityBase>,
    kind: SourceKind,
}

impl FishingSource {
    #[must_use]
    pub fn new(entity: Arc<dyn EntityBase>) -> Self {
        let kind = entity.get_source_kind();
        Self { entity, kind }
    }

    #[must_use]
    pub const fn get_kind(&self) -> SourceKind {
        self.kind
    }

    #[must_use]
    pub const fn get_entity(&self) -> &Arc<dyn EntityBase> {
        &self.entity
    }

    #[must_use]
    pub fn get_living_entity(&self) -> Option<&LivingEntity> {
        self.entity.get_living_entity()
    }

    #[must_use]
    pub fn get_human(&self) -> Option<&HumanEntity> {
        self.entity.get_human()
    }

    #[must_use]
    pub fn get_player(&self) -> Option<&Player> {
        self.entity.get_player()
    }

    #[must_use]
    pub fn get_uuid(&self) -> uuid::Uuid {
        self.entity.get_entity().entity_uuid
    }

    #[must_use]
    pub fn get_position(&self) -> Vector3<f64> {
        self.entity.get_entity().pos.load()
    }
}

impl<E: EntityBase + 'static> From<Arc<E>> for FishingSource {
    fn from(entity: Arc<E>) -> Self {
        Self::new(entity)
    }
}

/// An event when a fishing action is performed. Always involves a [`FishHook`].
pub trait FishingEvent: Payload + Cancellable {
    /// Which part of the fishing action this event describes.
    fn get_phase(&self) -> FishingPhase;

    /// The entity that caused the event, if any.
    fn get_source(&self) -> Option<&FishingSource>;

    /// Gets the hook as it was before the event, as a snapshot.
    fn get_original_fish_hook(&self) -> &EntitySnapshot;

    /// Gets the live hook related to this event.
    fn get_fish_hook(&self) -> &Arc<FishHook>;

    fn get_source_kind(&self) -> Option<SourceKind> {
        self.get_source().map(FishingSource::get_kind)
    }

    fn get_source_entity(&self) -> Option<&Arc<dyn EntityBase>> {
        self.get_source().map(FishingSource::get_entity)
    }

    /// The source, if it is at least a living entity.
    fn get_source_living(&self) -> Option<&LivingEntity> {
        self.get_source().and_then(FishingSource::get_living_entity)
    }

    /// The source, if it is at least a human.
    fn get_source_human(&self) -> Option<&HumanEntity> {
        self.get_source().and_then(FishingSource::get_human)
    }

    /// The source, if it is a player.
    fn get_source_player(&self) -> Option<&Player> {
        self.get_source().and_then(FishingSource::get_player)
    }

    /// Whether a handler registered under `key` should see this event.
    fn matches(&self, key: &EventKey) -> bool {
        key.matches(self.get_phase(), self.get_source_kind())
    }
}

/// Selects fishing events by phase and by how specific their source is.
///
/// A key without a phase selects every phase, and a key without a source
/// selects events regardless of their source, including those that have none.
/// A key with a source selects events whose source is at least that specific,
/// so `Cast` from `Living` also selects casts by humans and players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub phase: Option<FishingPhase>,
    pub source: Option<SourceKind>,
}

impl EventKey {
    /// Selects every fishing event.
    pub const ANY: Self = Self {
        phase: None,
        source: None,
    };

    #[must_use]
    pub const fn phase(phase: FishingPhase) -> Self {
        Self {
            phase: Some(phase),
            source: None,
        }
    }

    #[must_use]
    pub const fn from_source(self, source: SourceKind) -> Self {
        Self {
            phase: self.phase,
            source: Some(source),
        }
    }

    #[must_use]
    pub fn matches(&self, phase: FishingPhase, source: Option<SourceKind>) -> bool {
        self.phase.is_none_or(|wanted| wanted == phase)
            && self.source.is_none_or(|required| {
                source.is_some_and(|actual| required.includes(actual))
            })
    }

    /// The root key, each phase, and each phase refined by each source kind.
    #[must_use]
    pub fn declared() -> Vec<Self> {
        let mut keys = vec![Self::ANY];
        for phase in FishingPhase::ALL {
            let key = Self::phase(phase);
            keys.push(key);
            keys.extend(SourceKind::ALL.map(|source| key.from_source(source)));
        }
        keys
    }

    /// Every declared key that selects `event`, from the most general down.
    pub fn for_event<E: FishingEvent + ?Sized>(event: &E) -> Vec<Self> {
        Self::declared()
            .into_iter()
            .filter(|key| event.matches(key))
            .collect()
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FishingEvent")?;
        if let Some(phase) = self.phase {
            write!(f, "::{}", phase.as_str())?;
        }
        if let Some(source) = self.source {
            write!(f, "::Source{}", source.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::sync::Arc;

    use angler_util::math::vector3::Vector3;
    use uuid::Uuid;

    use crate::entity::{
        Entity, EntityBase, EntityType, SourceKind,
        human::HumanEntity,
        living::LivingEntity,
        player::{GameProfile, Player},
        projectile::fish_hook::FishHook,
    };

    use super::{EventKey, FishCastEvent, FishingEvent, FishingPhase, FishingSource};

    pub fn player(name: &str) -> Arc<Player> {
        Arc::new(Player::new(
            GameProfile {
                id: Uuid::new_v4(),
                name: name.to_string(),
            },
            Vector3::new(0.0, 64.0, 0.0),
        ))
    }

    pub fn hook_from(source: &FishingSource) -> Arc<FishHook> {
        Arc::new(FishHook::cast(
            Some(source.get_uuid()),
            source.get_position(),
            Vector3::new(0.0, 0.5, 1.0),
        ))
    }

    fn sources() -> [FishingSource; 4] {
        [
            FishingSource::new(Arc::new(Entity::spawn(
                &EntityType::ARMOR_STAND,
                Vector3::default(),
            ))),
            FishingSource::from(Arc::new(LivingEntity::new(
                Entity::spawn(&EntityType::DROWNED, Vector3::default()),
                20.0,
            ))),
            FishingSource::from(Arc::new(HumanEntity::new(
                Entity::spawn(&EntityType::MANNEQUIN, Vector3::default()),
                "Alex".to_string(),
            ))),
            FishingSource::from(player("Steve")),
        ]
    }

    #[test]
    fn key_names_follow_lattice() {
        assert_eq!(EventKey::ANY.to_string(), "FishingEvent");
        assert_eq!(
            EventKey::phase(FishingPhase::Retract).to_string(),
            "FishingEvent::Retract"
        );
        assert_eq!(
            EventKey::phase(FishingPhase::Cast)
                .from_source(SourceKind::Player)
                .to_string(),
            "FishingEvent::Cast::SourcePlayer"
        );
        assert_eq!(
            EventKey::ANY.from_source(SourceKind::Human).to_string(),
            "FishingEvent::SourceHuman"
        );
    }

    #[test]
    fn root_plus_fifteen_declared_keys() {
        let declared = EventKey::declared();
        assert_eq!(declared.len(), 16);
        assert_eq!(declared[0], EventKey::ANY);
        assert_eq!(
            declared.iter().filter(|key| key.phase.is_some()).count(),
            15
        );
        assert_eq!(
            declared.iter().filter(|key| key.source.is_some()).count(),
            12
        );
    }

    #[test]
    fn narrowing_accessors_follow_source_kind() {
        for source in sources() {
            let kind = source.get_kind();
            let event = FishCastEvent::new(Some(source.clone()), hook_from(&source));

            assert_eq!(event.get_source_kind(), Some(kind));
            assert!(event.get_source_entity().is_some());
            assert_eq!(
                event.get_source_living().is_some(),
                kind >= SourceKind::Living
            );
            assert_eq!(event.get_source_human().is_some(), kind >= SourceKind::Human);
            assert_eq!(event.get_source_player().is_some(), kind == SourceKind::Player);
        }
    }

    #[test]
    fn player_cast_matches_six_keys() {
        let source = FishingSource::from(player("Steve"));
        let event = FishCastEvent::new(Some(source.clone()), hook_from(&source));

        let names: Vec<String> = EventKey::for_event(&event)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            names,
            [
                "FishingEvent",
                "FishingEvent::Cast",
                "FishingEvent::Cast::SourceEntity",
                "FishingEvent::Cast::SourceLiving",
                "FishingEvent::Cast::SourceHuman",
                "FishingEvent::Cast::SourcePlayer",
            ]
        );
        assert!(!event.matches(&EventKey::phase(FishingPhase::Hook)));
    }

    #[test]
    fn entity_source_only_matches_entity_refinement() {
        let [entity_source, ..] = sources();
        let event = FishCastEvent::new(Some(entity_source.clone()), hook_from(&entity_source));
        let cast = EventKey::phase(FishingPhase::Cast);

        assert!(event.matches(&cast.from_source(SourceKind::Entity)));
        assert!(!event.matches(&cast.from_source(SourceKind::Living)));
        assert_eq!(EventKey::for_event(&event).len(), 3);
    }

    #[test]
    fn sourceless_event_matches_only_unrefined_keys() {
        let hook = Arc::new(FishHook::cast(None, Vector3::default(), Vector3::new(0.0, 0.0, 1.0)));
        let event = FishCastEvent::new(None, hook);

        assert_eq!(
            EventKey::for_event(&event),
            vec![EventKey::ANY, EventKey::phase(FishingPhase::Cast)]
        );
        assert!(event.get_source_entity().is_none());
        assert!(
            !event.matches(&EventKey::ANY.from_source(SourceKind::Entity)),
            "a source refinement requires a source"
        );
    }

    #[test]
    fn source_reports_live_state() {
        let steve = player("Steve");
        let source = FishingSource::from(Arc::clone(&steve));

        steve.get_entity().set_pos(Vector3::new(3.0, 70.0, -2.0));
        assert_eq!(source.get_position(), Vector3::new(3.0, 70.0, -2.0));
        assert_eq!(source.get_uuid(), steve.gameprofile.id);
        assert_eq!(source.get_player().map(Player::name), Some("Steve"));
    }
}
