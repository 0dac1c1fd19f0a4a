//! Registry Operations - Pure DOP Functions
//!
//! All functions take registry data and return results.
//! No methods, no self, just transformations.

use super::registry_data::RegistryData;
use super::{BlockId, FluidId, Identifier};
use crate::constants::{blocks, fluids};
use crate::error::{DripError, DripResult};

/// Vanilla blocks registered by [`create_vanilla_registry`], air first
pub const VANILLA_BLOCKS: [&str; 10] = [
    blocks::AIR,
    blocks::STONE,
    blocks::DRIPSTONE_BLOCK,
    blocks::POINTED_DRIPSTONE,
    blocks::CAULDRON,
    blocks::MUD,
    blocks::ICE,
    blocks::PACKED_ICE,
    blocks::BLUE_ICE,
    blocks::MAGMA_BLOCK,
];

/// Vanilla fluids in registry id order, empty first
pub const VANILLA_FLUIDS: [&str; 5] = [
    fluids::EMPTY,
    fluids::FLOWING_WATER,
    fluids::WATER,
    fluids::FLOWING_LAVA,
    fluids::LAVA,
];

/// Create empty registry data
pub fn create_registry() -> RegistryData {
    RegistryData::default()
}

/// Create registry data holding the vanilla blocks and fluids
pub fn create_vanilla_registry() -> DripResult<RegistryData> {
    let mut data = create_registry();
    for path in VANILLA_BLOCKS {
        register_block(&mut data, Identifier::vanilla(path)?)?;
    }
    for path in VANILLA_FLUIDS {
        register_fluid(&mut data, Identifier::vanilla(path)?)?;
    }
    Ok(data)
}

fn next_handle(len: usize, kind: &str) -> DripResult<u16> {
    u16::try_from(len).map_err(|_| DripError::RegistryFull {
        kind: kind.to_string(),
    })
}

/// Register a block type, returning the existing handle if already present
pub fn register_block(data: &mut RegistryData, name: Identifier) -> DripResult<BlockId> {
    if let Some(&id) = data.block_ids.get(&name) {
        return Ok(id);
    }

    let id = BlockId(next_handle(data.block_names.len(), "block")?);
    log::debug!("Registered block '{}' with ID {}", name, id.0);
    data.block_ids.insert(name.clone(), id);
    data.block_names.push(name);
    Ok(id)
}

/// Register a fluid type, returning the existing handle if already present
pub fn register_fluid(data: &mut RegistryData, name: Identifier) -> DripResult<FluidId> {
    if let Some(&id) = data.fluid_ids.get(&name) {
        return Ok(id);
    }

    let id = FluidId(next_handle(data.fluid_names.len(), "fluid")?);
    log::debug!("Registered fluid '{}' with ID {}", name, id.0);
    data.fluid_ids.insert(name.clone(), id);
    data.fluid_names.push(name);
    Ok(id)
}

/// Get a block ID by identifier
pub fn get_block_id(data: &RegistryData, name: &Identifier) -> Option<BlockId> {
    data.block_ids.get(name).copied()
}

/// Get a fluid ID by identifier
pub fn get_fluid_id(data: &RegistryData, name: &Identifier) -> Option<FluidId> {
    data.fluid_ids.get(name).copied()
}

/// Get the identifier a block was registered under
pub fn get_block_name(data: &RegistryData, id: BlockId) -> Option<&Identifier> {
    data.block_names.get(usize::from(id.0))
}

/// Get the identifier a fluid was registered under
pub fn get_fluid_name(data: &RegistryData, id: FluidId) -> Option<&Identifier> {
    data.fluid_names.get(usize::from(id.0))
}
