//! Shared constants

/// File name of the config inside the host's config directory
pub const CONFIG_FILE_NAME: &str = "drip.json";

/// Namespace assumed when an identifier omits one
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Vanilla block paths used by the built-in rules
pub mod blocks {
    pub const AIR: &str = "air";
    pub const STONE: &str = "stone";
    pub const DRIPSTONE_BLOCK: &str = "dripstone_block";
    pub const POINTED_DRIPSTONE: &str = "pointed_dripstone";
    pub const CAULDRON: &str = "cauldron";
    pub const MUD: &str = "mud";
    pub const ICE: &str = "ice";
    pub const PACKED_ICE: &str = "packed_ice";
    pub const BLUE_ICE: &str = "blue_ice";
    pub const MAGMA_BLOCK: &str = "magma_block";
}

/// Vanilla fluid paths, in registry id order
pub mod fluids {
    pub const EMPTY: &str = "empty";
    pub const FLOWING_WATER: &str = "flowing_water";
    pub const WATER: &str = "water";
    pub const FLOWING_LAVA: &str = "flowing_lava";
    pub const LAVA: &str = "lava";
}
