/// A registered kind of entity, identified by its registry key.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EntityType {
    pub resource_name: &'static str,
}

impl EntityType {
    pub const FISHING_BOBBER: Self = Self::new("fishing_bobber");
    pub const PLAYER: Self = Self::new("player");
    pub const MANNEQUIN: Self = Self::new("mannequin");
    pub const ITEM: Self = Self::new("item");
    pub const EXPERIENCE_ORB: Self = Self::new("experience_orb");
    pub const COD: Self = Self::new("cod");
    pub const SALMON: Self = Self::new("salmon");
    pub const PUFFERFISH: Self = Self::new("pufferfish");
    pub const TROPICAL_FISH: Self = Self::new("tropical_fish");
    pub const SQUID: Self = Self::new("squid");
    pub const ZOMBIE: Self = Self::new("zombie");
    pub const DROWNED: Self = Self::new("drowned");
    pub const SKELETON: Self = Self::new("skeleton");
    pub const VILLAGER: Self = Self::new("villager");
    pub const BOAT: Self = Self::new("oak_boat");
    pub const ARMOR_STAND: Self = Self::new("armor_stand");

    const ALL: [&'static Self; 16] = [
        &Self::FISHING_BOBBER,
        &Self::PLAYER,
        &Self::MANNEQUIN,
        &Self::ITEM,
        &Self::EXPERIENCE_ORB,
        &Self::COD,
        &Self::SALMON,
        &Self::PUFFERFISH,
        &Self::TROPICAL_FISH,
        &Self::SQUID,
        &Self::ZOMBIE,
        &Self::DROWNED,
        &Self::SKELETON,
        &Self::VILLAGER,
        &Self::BOAT,
        &Self::ARMOR_STAND,
    ];

    const fn new(resource_name: &'static str) -> Self {
        Self { resource_name }
    }

    /// Looks up an entity type by registry key, with or without the
    /// `minecraft:` namespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<&'static Self> {
        let name = name.strip_prefix("minecraft:").unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|entity_type| entity_type.resource_name == name)
    }
}
