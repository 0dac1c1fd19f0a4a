//! World Operations - Pure DOP Functions
//!
//! This is what the game hook calls when pointed dripstone picks the fluid
//! it drips. All functions are pure: take data, return results.

use super::core::{BlockId, FluidId};
use crate::persistence::RuntimeTable;

// ============================================================================
// DRIPSTONE OPERATIONS
// ============================================================================

/// Pick the fluid pointed dripstone drips from the block above it
///
/// # Arguments
/// * `table` - Loaded drip rules
/// * `block` - Block the dripstone hangs from
/// * `vanilla` - Fluid vanilla would drip, `None` if it found nothing
///
/// # Returns
/// The configured fluid when the block has a rule that either replaces
/// unconditionally or fills in for an absent/empty vanilla fluid, otherwise
/// `vanilla` unchanged.
pub fn dripping_fluid(
    table: &RuntimeTable,
    block: BlockId,
    vanilla: Option<FluidId>,
) -> Option<FluidId> {
    match table.get(block) {
        Some(entry) if entry.replace() || vanilla.map_or(true, |fluid| fluid.is_empty()) => {
            Some(entry.fluid())
        }
        _ => vanilla,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::Entry;

    const MUD: BlockId = BlockId(5);
    const ICE: BlockId = BlockId(6);
    const STONE: BlockId = BlockId(1);
    const WATER: FluidId = FluidId(2);
    const LAVA: FluidId = FluidId(4);

    fn table() -> RuntimeTable {
        [
            (MUD, Entry::new(WATER, false)),
            (ICE, Entry::new(LAVA, true)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_replace_overrides_existing_fluid() {
        assert_eq!(dripping_fluid(&table(), ICE, Some(WATER)), Some(LAVA));
        assert_eq!(dripping_fluid(&table(), ICE, None), Some(LAVA));
    }

    #[test]
    fn test_non_replace_keeps_existing_fluid() {
        assert_eq!(dripping_fluid(&table(), MUD, Some(LAVA)), Some(LAVA));
    }

    #[test]
    fn test_non_replace_fills_empty_fluid() {
        assert_eq!(dripping_fluid(&table(), MUD, None), Some(WATER));
        assert_eq!(dripping_fluid(&table(), MUD, Some(FluidId::EMPTY)), Some(WATER));
    }

    #[test]
    fn test_unconfigured_block_falls_back_to_vanilla() {
        assert_eq!(dripping_fluid(&table(), STONE, Some(WATER)), Some(WATER));
        assert_eq!(dripping_fluid(&table(), STONE, None), None);
    }
}
