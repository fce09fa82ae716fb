use std::sync::Arc;

use angler_macros::{Event, cancellable};
use tracing::debug;

use crate::entity::{EntityBase, projectile::fish_hook::FishHook, snapshot::EntitySnapshot};

use super::{FishingEvent, FishingPhase, FishingSource};

/// An event that occurs when a fish hook is cast.
#[cancellable]
#[derive(Event, Clone)]
pub struct FishCastEvent {
    /// Who cast the hook, if anyone.
    source: Option<FishingSource>,

    /// The hook that was just thrown.
    fish_hook: Arc<FishHook>,

    /// The hook as it was when the event was created.
    original_fish_hook: EntitySnapshot,
}

impl FishCastEvent {
    /// Creates a new instance of `FishCastEvent`, capturing the hook's current state.
    #[must_use]
    pub fn new(source: Option<FishingSource>, fish_hook: Arc<FishHook>) -> Self {
        let original_fish_hook = fish_hook.create_snapshot();
        Self {
            source,
            fish_hook,
            original_fish_hook,
            cancelled: false,
        }
    }

    /// Resolves the cast once every handler has run.
    ///
    /// A cancelled cast removes the hook again. A hook that is already gone
    /// stays gone.
    ///
    /// # Returns
    /// Whether the hook stays in the world.
    pub fn apply(&self) -> bool {
        if self.fish_hook.entity.is_removed() {
            return false;
        }
        if self.cancelled {
            debug!(
                "Cast of fish hook {} was cancelled",
                self.fish_hook.entity.entity_uuid
            );
            self.fish_hook.entity.remove();
            return false;
        }
        true
    }
}

impl FishingEvent for FishCastEvent {
    fn get_phase(&self) -> FishingPhase {
        FishingPhase::Cast
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
