//! Registry Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in registry_operations.rs

use super::{BlockId, FluidId, Identifier};
use rustc_hash::FxHashMap;

/// Registry data that stores all block and fluid types
///
/// Handles are dense: the handle's raw value indexes the name vectors.
#[derive(Debug, Default, Clone)]
pub struct RegistryData {
    /// Block identifiers, indexed by BlockId
    pub block_names: Vec<Identifier>,
    /// Map from identifier to BlockId
    pub block_ids: FxHashMap<Identifier, BlockId>,
    /// Fluid identifiers, indexed by FluidId
    pub fluid_names: Vec<Identifier>,
    /// Map from identifier to FluidId
    pub fluid_ids: FxHashMap<Identifier, FluidId>,
}
