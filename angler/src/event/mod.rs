use std::any::Any;
use std::pin::Pin;

pub mod fishing;
pub mod target;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A trait representing an event in the system.
///
/// This trait provides methods for retrieving the event's name and for type-safe downcasting.
/// Implement it with `#[derive(Event)]`.
pub trait Payload: Send + Sync {
    /// Returns the static name of the event type.
    ///
    /// # Returns
    /// A static string slice representing the name of the payload type.
    fn get_name_static() -> &'static str
    where
        Self: Sized;

    /// Returns the name of the payload instance.
    ///
    /// # Returns
    /// A static string slice representing the name of the payload instance.
    fn get_name(&self) -> &'static str;

    /// Provides an immutable reference to the payload as a trait object.
    fn as_any(&self) -> &dyn Any;

    /// Provides a mutable reference to the payload as a trait object.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Helper functions for downcasting `Payload` implementations.
impl dyn Payload + '_ {
    /// Returns whether this payload is a `T`, by event name.
    #[must_use]
    pub fn is<T: Payload + 'static>(&self) -> bool {
        self.get_name() == T::get_name_static()
    }

    /// Attempts to downcast a `&dyn Payload` to `&T`.
    ///
    /// # Returns
    /// `Some(&T)` if the payload is a `T`, `None` otherwise.
    #[must_use]
    pub fn downcast_ref<T: Payload + 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.as_any().downcast_ref()
        } else {
            None
        }
    }

    /// Attempts to downcast a `&mut dyn Payload` to `&mut T`.
    ///
    /// # Returns
    /// `Some(&mut T)` if the payload is a `T`, `None` otherwise.
    pub fn downcast_mut<T: Payload + 'static>(&mut self) -> Option<&mut T> {
        if self.is::<T>() {
            self.as_any_mut().downcast_mut()
        } else {
            None
        }
    }
}

/// A trait for cancellable events.
///
/// This trait provides methods to check and set the cancellation state of an event.
/// What a cancelled event prevents is up to the code that fired it.
pub trait Cancellable: Send + Sync {
    /// Checks if the event has been cancelled.
    fn cancelled(&self) -> bool;

    /// Sets the cancellation state of the event.
    ///
    /// # Arguments
    /// - `cancelled`: A boolean indicating the new cancellation state.
    fn set_cancelled(&mut self, cancelled: bool);
}

/// An enumeration representing the priority levels of event handlers.
///
/// Handlers with higher priority run first; lower priority handlers see, and may override,
/// their changes.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
pub enum EventPriority {
    /// Highest priority level.
    Highest,

    /// High priority level.
    High,

    /// Normal priority level.
    Normal,

    /// Low priority level.
    Low,

    /// Lowest priority level.
    Lowest,
}

/// A trait for handling specific events.
///
/// Both methods default to doing nothing, so a handler only implements the one it needs.
pub trait EventHandler<E: Payload>: Send + Sync {
    /// Observes an event of type `E` without changing it.
    ///
    /// # Arguments
    /// - `event`: A reference to the event to handle.
    fn handle<'a>(&'a self, _event: &'a E) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    /// Handles an event of type `E`, possibly changing or cancelling it.
    ///
    /// # Arguments
    /// - `event`: A mutable reference to the event to handle.
    fn handle_blocking<'a>(&'a self, _event: &'a mut E) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }
}
