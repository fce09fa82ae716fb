use tracing::debug;

use super::ItemStackSnapshot;

/// A proposed change to an item stack.
///
/// `original` is the stack before the change and `default` what the host
/// intends to produce. A handler can replace the outcome with a `custom`
/// stack, or mark the whole transaction invalid so that nothing is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStackTransaction {
    original: ItemStackSnapshot,
    default: ItemStackSnapshot,
    custom: Option<ItemStackSnapshot>,
    valid: bool,
}

impl ItemStackTransaction {
    #[must_use]
    pub const fn new(original: ItemStackSnapshot, default: ItemStackSnapshot) -> Self {
        Self {
            original,
            default,
            custom: None,
            valid: true,
        }
    }

    #[must_use]
    pub const fn get_original(&self) -> &ItemStackSnapshot {
        &self.original
    }

    #[must_use]
    pub const fn get_default(&self) -> &ItemStackSnapshot {
        &self.default
    }

    #[must_use]
    pub const fn get_custom(&self) -> Option<&ItemStackSnapshot> {
        self.custom.as_ref()
    }

    /// Overrides the outcome. `None` drops a previous override.
    pub fn set_custom(&mut self, custom: Option<ItemStackSnapshot>) {
        debug!(
            "Item transaction {} -> {} overridden with {:?}",
            self.original.get_item_name(),
            self.default.get_item_name(),
            custom.as_ref().map(ItemStackSnapshot::get_item_name)
        );
        self.custom = custom;
    }

    /// The stack this transaction resolves to.
    #[must_use]
    pub fn get_final(&self) -> &ItemStackSnapshot {
        self.custom.as_ref().unwrap_or(&self.default)
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }
}
