use thiserror::Error;

pub mod snapshot;
pub mod transaction;

pub use snapshot::ItemStackSnapshot;
pub use transaction::ItemStackTransaction;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ItemError {
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("A stack of {item} holds at most {max}, got {count}")]
    StackTooLarge {
        item: &'static str,
        count: u8,
        max: u8,
    },
}

/// A registered item, identified by its registry key.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub resource_name: &'static str,
    pub max_stack_size: u8,
}

impl Item {
    pub const AIR: Self = Self::new("air", 64);
    pub const COD: Self = Self::new("cod", 64);
    pub const SALMON: Self = Self::new("salmon", 64);
    pub const TROPICAL_FISH: Self = Self::new("tropical_fish", 64);
    pub const PUFFERFISH: Self = Self::new("pufferfish", 64);
    pub const FISHING_ROD: Self = Self::new("fishing_rod", 1);
    pub const BOW: Self = Self::new("bow", 1);
    pub const ENCHANTED_BOOK: Self = Self::new("enchanted_book", 1);
    pub const NAME_TAG: Self = Self::new("name_tag", 64);
    pub const NAUTILUS_SHELL: Self = Self::new("nautilus_shell", 64);
    pub const SADDLE: Self = Self::new("saddle", 1);
    pub const LILY_PAD: Self = Self::new("lily_pad", 64);
    pub const LEATHER_BOOTS: Self = Self::new("leather_boots", 1);
    pub const BOWL: Self = Self::new("bowl", 64);
    pub const STRING: Self = Self::new("string", 64);
    pub const INK_SAC: Self = Self::new("ink_sac", 64);

    const ALL: [&'static Self; 16] = [
        &Self::AIR,
        &Self::COD,
        &Self::SALMON,
        &Self::TROPICAL_FISH,
        &Self::PUFFERFISH,
        &Self::FISHING_ROD,
        &Self::BOW,
        &Self::ENCHANTED_BOOK,
        &Self::NAME_TAG,
        &Self::NAUTILUS_SHELL,
        &Self::SADDLE,
        &Self::LILY_PAD,
        &Self::LEATHER_BOOTS,
        &Self::BOWL,
        &Self::STRING,
        &Self::INK_SAC,
    ];

    const fn new(resource_name: &'static str, max_stack_size: u8) -> Self {
        Self {
            resource_name,
            max_stack_size,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<&'static Self> {
        let name = name.strip_prefix("minecraft:").unwrap_or(name);
        Self::ALL.into_iter().find(|item| item.resource_name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStack {
    pub item_count: u8,
    pub item: &'static Item,
}

impl ItemStack {
    pub const EMPTY: Self = Self {
        item_count: 0,
        item: &Item::AIR,
    };

    pub fn new(item_count: u8, item: &'static Item) -> Result<Self, ItemError> {
        if item_count > item.max_stack_size {
            return Err(ItemError::StackTooLarge {
                item: item.resource_name,
                count: item_count,
                max: item.max_stack_size,
            });
        }
        Ok(Self { item_count, item })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || *self.item == Item::AIR
    }

    #[must_use]
    pub fn create_snapshot(&self) -> ItemStackSnapshot {
        ItemStackSnapshot::from(self)
    }
}

#[cfg(test)]
mod test {
    use super::{Item, ItemError, ItemStack};

    #[test]
    fn stack_size_is_enforced() {
        assert!(ItemStack::new(64, &Item::COD).is_ok());
        assert_eq!(
            ItemStack::new(2, &Item::FISHING_ROD),
            Err(ItemError::StackTooLarge {
                item: "fishing_rod",
                count: 2,
                max: 1,
            })
        );
    }

    #[test]
    fn emptiness() {
        assert!(ItemStack::EMPTY.is_empty());
        assert!(ItemStack::new(0, &Item::COD).unwrap().is_empty());
        assert!(!ItemStack::new(1, &Item::COD).unwrap().is_empty());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Item::from_name("minecraft:saddle"), Some(&Item::SADDLE));
        assert_eq!(Item::from_name("trident"), None);
    }
}
