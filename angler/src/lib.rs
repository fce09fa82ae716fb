//! Fishing event contracts for game-server plugins.
//!
//! A host server builds one of the [`event::fishing`] events right before it
//! performs a fishing action, hands it to plugin handlers, and reads it back to
//! decide what actually happens. Handlers can cancel the action or redirect
//! what gets hooked, caught, or looted.

pub mod entity;
pub mod event;
pub mod item;
pub mod logging;

pub use event::fishing::{
    EventKey, FishCastEvent, FishHookEvent, FishRetractEvent, FishingEvent, FishingPhase,
    FishingSource, RetractOutcome,
};
pub use event::{Cancellable, EventHandler, EventPriority, Payload};
