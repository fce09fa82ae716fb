use std::sync::Arc;

use angler_macros::{Event, cancellable};
use tracing::debug;

use crate::entity::{EntityBase, projectile::fish_hook::FishHook, snapshot::EntitySnapshot};
use crate::item::{ItemError, ItemStack, ItemStackTransaction};

use super::{FishingEvent, FishingPhase, FishingSource};

/// What a retract resolved to.
#[derive(Clone)]
pub struct RetractOutcome {
    /// The item reeled in, if any.
    pub loot: Option<ItemStack>,
    /// The entity pulled toward the source, if any.
    pub caught_entity: Option<Arc<dyn EntityBase>>,
}

/// An event that occurs when a fish hook is retracted, or "reeled in".
#[cancellable]
#[derive(Event, Clone)]
pub struct FishRetractEvent {
    /// Who is reeling in, if anyone.
    source: Option<FishingSource>,

    /// The hook being reeled in.
    fish_hook: Arc<FishHook>,

    /// The hook as it was when the event was created.
    original_fish_hook: EntitySnapshot,

    /// The change to the loot stack, if the catch produces an item.
    item_stack_transaction: Option<ItemStackTransaction>,

    /// The caught entity as it was when the event was created.
    original_caught_entity: Option<EntitySnapshot>,

    /// The entity that ends up caught. Handlers may redirect or clear it.
    caught_entity: Option<Arc<dyn EntityBase>>,
}

impl FishRetractEvent {
    /// How strongly a caught entity is pulled toward the source.
    pub const PULL_FACTOR: f64 = 0.1;

    /// Creates a new instance of `FishRetractEvent`.
    ///
    /// # Arguments
    /// - `source`: Who is reeling in.
    /// - `fish_hook`: The hook being reeled in.
    /// - `item_stack_transaction`: The loot the catch produces, if any.
    /// - `caught_entity`: The entity on the hook, if any.
    #[must_use]
    pub fn new(
        source: Option<FishingSource>,
        fish_hook: Arc<FishHook>,
        item_stack_transaction: Option<ItemStackTransaction>,
        caught_entity: Option<Arc<dyn EntityBase>>,
    ) -> Self {
        Self {
            source,
            original_fish_hook: fish_hook.create_snapshot(),
            fish_hook,
            item_stack_transaction,
            original_caught_entity: caught_entity.as_ref().map(|e| e.create_snapshot()),
            caught_entity,
            cancelled: false,
        }
    }

    /// Gets the loot transaction, if any. Change the result with
    /// [`ItemStackTransaction::set_custom`].
    #[must_use]
    pub const fn get_item_stack_transaction(&self) -> Option<&ItemStackTransaction> {
        self.item_stack_transaction.as_ref()
    }

    pub const fn get_item_stack_transaction_mut(&mut self) -> Option<&mut ItemStackTransaction> {
        self.item_stack_transaction.as_mut()
    }

    /// Gets the caught entity as it was before the event, if there was one.
    #[must_use]
    pub const fn get_original_caught_entity(&self) -> Option<&EntitySnapshot> {
        self.original_caught_entity.as_ref()
    }

    /// Gets the entity that will be reeled in, if any.
    #[must_use]
    pub const fn get_caught_entity(&self) -> Option<&Arc<dyn EntityBase>> {
        self.caught_entity.as_ref()
    }

    /// Sets the entity that will be reeled in. `None` reels in nothing.
    pub fn set_caught_entity(&mut self, entity: Option<Arc<dyn EntityBase>>) {
        debug!(
            "Caught entity of {} set to {:?}",
            self.fish_hook.entity.entity_uuid,
            entity.as_ref().map(|e| e.get_entity().entity_uuid)
        );
        self.caught_entity = entity;
    }

    /// Whether a handler replaced, added or cleared the caught entity.
    #[must_use]
    pub fn caught_entity_changed(&self) -> bool {
        match (&self.original_caught_entity, &self.caught_entity) {
            (None, None) => false,
            (Some(original), Some(entity)) => !original.is_of(&**entity),
            _ => true,
        }
    }

    /// Resolves the retract once every handler has run.
    ///
    /// A cancelled retract leaves the hook out and returns `None`. Otherwise
    /// the caught entity is pulled toward the source, the hook is removed and
    /// the loot is taken from the transaction, unless it was invalidated or
    /// resolves to nothing.
    ///
    /// The hook only comes in once: applying again after it was removed
    /// returns `None` without touching the loot or the caught entity.
    pub fn apply(&self) -> Result<Option<RetractOutcome>, ItemError> {
        if self.cancelled || self.fish_hook.entity.is_removed() {
            return Ok(None);
        }

        let loot = match &self.item_stack_transaction {
            Some(transaction) if transaction.is_valid() => {
                let stack = transaction.get_final().create_stack()?;
                (!stack.is_empty()).then_some(stack)
            }
            _ => None,
        };

        if let (Some(caught), Some(source)) = (&self.caught_entity, &self.source) {
            let pull = (source.get_position() - self.fish_hook.entity.pos.load())
                * Self::PULL_FACTOR;
            caught.get_entity().add_velocity(pull);
        }

        self.fish_hook.set_hooked_entity(None);
        self.fish_hook.entity.remove();

        Ok(Some(RetractOutcome {
            loot,
            caught_entity: self.caught_entity.clone(),
        }))
    }
}

impl FishingEvent for FishRetractEvent {
    fn get_phase(&self) -> FishingPhase {
        FishingPhase::Retract
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

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use angler_util::math::vector3::Vector3;

    use crate::entity::{Entity, EntityType};
    use crate::event::Cancellable;
    use crate::event::fishing::{
        FishingSource,
        test::{hook_from, player},
    };
    use crate::item::{Item, ItemError, ItemStack, ItemStackSnapshot, ItemStackTransaction};

    use super::FishRetractEvent;

    fn cod_transaction() -> ItemStackTransaction {
        ItemStackTransaction::new(
            ItemStackSnapshot::empty(),
            ItemStack::new(1, &Item::COD).unwrap().create_snapshot(),
        )
    }

    fn retract(
        transaction: Option<ItemStackTransaction>,
        caught: Option<Arc<Entity>>,
    ) -> FishRetractEvent {
        let source = FishingSource::from(player("Steve"));
        let hook = hook_from(&source);
        hook.entity.set_pos(Vector3::new(0.0, 62.0, 10.0));
        FishRetractEvent::new(
            Some(source),
            hook,
            transaction,
            caught.map(|c| c as Arc<dyn crate::entity::EntityBase>),
        )
    }

    #[test]
    fn loot_follows_custom_result() {
        let mut event = retract(Some(cod_transaction()), None);

        event
            .get_item_stack_transaction_mut()
            .unwrap()
            .set_custom(Some(ItemStack::new(1, &Item::SADDLE).unwrap().create_snapshot()));

        let outcome = event.apply().unwrap().unwrap();
        assert_eq!(outcome.loot, Some(ItemStack::new(1, &Item::SADDLE).unwrap()));
        assert!(outcome.caught_entity.is_none());
        assert!(event.fish_hook.entity.is_removed());
    }

    #[test]
    fn nothing_proposed_means_no_loot() {
        let event = retract(None, None);

        assert!(event.get_item_stack_transaction().is_none());
        assert!(event.get_original_caught_entity().is_none());
        assert!(!event.caught_entity_changed());
        assert_eq!(event.apply().unwrap().unwrap().loot, None);
    }

    #[test]
    fn invalid_or_empty_transaction_yields_nothing() {
        let mut event = retract(Some(cod_transaction()), None);
        event.get_item_stack_transaction_mut().unwrap().set_valid(false);
        assert_eq!(event.apply().unwrap().unwrap().loot, None);

        let mut event = retract(Some(cod_transaction()), None);
        event
            .get_item_stack_transaction_mut()
            .unwrap()
            .set_custom(Some(ItemStackSnapshot::empty()));
        assert_eq!(event.apply().unwrap().unwrap().loot, None);
    }

    #[test]
    fn unknown_custom_item_is_an_error() {
        let mut event = retract(Some(cod_transaction()), None);
        let bogus: ItemStackSnapshot =
            serde_json::from_str(r#"{"item":"treasure_map","count":1}"#).unwrap();
        event
            .get_item_stack_transaction_mut()
            .unwrap()
            .set_custom(Some(bogus));

        assert_eq!(
            event.apply().err(),
            Some(ItemError::UnknownItem("treasure_map".to_string()))
        );
    }

    #[test]
    fn caught_entity_is_pulled_toward_source() {
        let cod = Arc::new(Entity::spawn(&EntityType::COD, Vector3::new(0.0, 62.0, 10.0)));
        let event = retract(None, Some(cod.clone()));

        assert!(event.get_original_caught_entity().unwrap().is_of(&*cod));
        let outcome = event.apply().unwrap().unwrap();

        assert!(outcome.caught_entity.is_some());
        let velocity = cod.velocity.load();
        assert!((velocity.x - 0.0).abs() < 1.0e-9);
        assert!((velocity.y - 0.2).abs() < 1.0e-9);
        assert!((velocity.z - -1.0).abs() < 1.0e-9);
    }

    #[test]
    fn clearing_caught_entity_is_accepted() {
        let cod = Arc::new(Entity::spawn(&EntityType::COD, Vector3::default()));
        let mut event = retract(None, Some(cod.clone()));

        event.set_caught_entity(None);

        assert!(event.caught_entity_changed());
        assert!(event.get_caught_entity().is_none());
        assert!(event.get_original_caught_entity().is_some());
        assert!(event.apply().unwrap().unwrap().caught_entity.is_none());
        assert_eq!(cod.velocity.load(), Vector3::default());
    }

    #[test]
    fn cancelled_retract_keeps_hook_out() {
        let mut event = retract(Some(cod_transaction()), None);
        event.set_cancelled(true);

        assert!(event.apply().unwrap().is_none());
        assert!(!event.fish_hook.entity.is_removed());
    }

    #[test]
    fn second_apply_yields_nothing() {
        let cod = Arc::new(Entity::spawn(&EntityType::COD, Vector3::new(0.0, 62.0, 10.0)));
        let event = retract(Some(cod_transaction()), Some(cod.clone()));

        let first = event.apply().unwrap().unwrap();
        assert_eq!(first.loot, Some(ItemStack::new(1, &Item::COD).unwrap()));

        assert!(event.apply().unwrap().is_none());
        assert!(event.fish_hook.entity.is_removed());
        let velocity = cod.velocity.load();
        assert!((velocity.y - 0.2).abs() < 1.0e-9);
        assert!((velocity.z - -1.0).abs() < 1.0e-9);
    }
}
