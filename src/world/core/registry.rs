use super::registry_data::RegistryData;
use super::registry_operations as ops;
use super::{BlockId, FluidId, Identifier};
use crate::error::DripResult;

/// Identifier ↔ handle resolution the config store needs from its host
///
/// Handles passed to the reverse lookups should come from the same registry;
/// an unknown handle yields `None`.
pub trait Registry {
    fn resolve_block(&self, id: &Identifier) -> Option<BlockId>;

    fn resolve_fluid(&self, id: &Identifier) -> Option<FluidId>;

    /// Canonical identifier of a block handle
    fn block_identifier(&self, block: BlockId) -> Option<Identifier>;

    /// Canonical identifier of a fluid handle
    fn fluid_identifier(&self, fluid: FluidId) -> Option<Identifier>;
}

/// In-memory registry of block and fluid types
#[derive(Debug, Default, Clone)]
pub struct GameRegistry {
    data: RegistryData,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            data: ops::create_registry(),
        }
    }

    /// Registry pre-populated with the vanilla blocks and fluids drip cares about
    pub fn vanilla() -> DripResult<Self> {
        Ok(Self {
            data: ops::create_vanilla_registry()?,
        })
    }

    /// Register a new block type
    pub fn register_block(&mut self, name: &str) -> DripResult<BlockId> {
        ops::register_block(&mut self.data, name.parse()?)
    }

    /// Register a new fluid type
    pub fn register_fluid(&mut self, name: &str) -> DripResult<FluidId> {
        ops::register_fluid(&mut self.data, name.parse()?)
    }

    /// Look up a block by identifier text, e.g. `"mud"` or `"minecraft:mud"`
    pub fn block(&self, name: &str) -> Option<BlockId> {
        let id: Identifier = name.parse().ok()?;
        ops::get_block_id(&self.data, &id)
    }

    /// Look up a fluid by identifier text
    pub fn fluid(&self, name: &str) -> Option<FluidId> {
        let id: Identifier = name.parse().ok()?;
        ops::get_fluid_id(&self.data, &id)
    }

    /// All registered block handles in registration order
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &Identifier)> + '_ {
        self.data
            .block_names
            .iter()
            .enumerate()
            .filter_map(|(index, name)| Some((BlockId(u16::try_from(index).ok()?), name)))
    }
}

impl Registry for GameRegistry {
    fn resolve_block(&self, id: &Identifier) -> Option<BlockId> {
        ops::get_block_id(&self.data, id)
    }

    fn resolve_fluid(&self, id: &Identifier) -> Option<FluidId> {
        ops::get_fluid_id(&self.data, id)
    }

    fn block_identifier(&self, block: BlockId) -> Option<Identifier> {
        ops::get_block_name(&self.data, block).cloned()
    }

    fn fluid_identifier(&self, fluid: FluidId) -> Option<Identifier> {
        ops::get_fluid_name(&self.data, fluid).cloned()
    }
}
