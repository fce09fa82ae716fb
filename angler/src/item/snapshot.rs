use serde::{Deserialize, Serialize};

use super::{Item, ItemError, ItemStack};

/// An immutable capture of an item stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStackSnapshot {
    item: String,
    count: u8,
}

impl ItemStackSnapshot {
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&ItemStack::EMPTY)
    }

    #[must_use]
    pub fn get_item_name(&self) -> &str {
        &self.item
    }

    #[must_use]
    pub const fn get_count(&self) -> u8 {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item == Item::AIR.resource_name
    }

    /// Builds a live stack from this snapshot.
    pub fn create_stack(&self) -> Result<ItemStack, ItemError> {
        let item =
            Item::from_name(&self.item).ok_or_else(|| ItemError::UnknownItem(self.item.clone()))?;
        ItemStack::new(self.count, item)
    }
}

impl From<&ItemStack> for ItemStackSnapshot {
    fn from(stack: &ItemStack) -> Self {
        Self {
            item: stack.item.resource_name.to_string(),
            count: stack.item_count,
        }
    }
}
