//! Config Data - Pure data
//!
//! The wire shapes serde reads and writes, and the runtime shapes the
//! dripstone hook reads. Conversion between the two lives in
//! config_operations.rs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::DripError;
use crate::world::core::{BlockId, FluidId, Identifier};

/// Resolved rule for one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    fluid: FluidId,
    replace: bool,
}

impl Entry {
    pub const fn new(fluid: FluidId, replace: bool) -> Self {
        Self { fluid, replace }
    }

    /// Fluid dripped from the block
    pub fn fluid(&self) -> FluidId {
        self.fluid
    }

    /// Whether the fluid overrides vanilla's, rather than only filling in when
    /// vanilla has none
    pub fn replace(&self) -> bool {
        self.replace
    }
}

/// Serialized form of [`Entry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEntry {
    pub fluid: Identifier,
    #[serde(default)]
    pub replace: bool,
}

impl fmt::Display for WireEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (replace: {})", self.fluid, self.replace)
    }
}

/// Root of `drip.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub entries: BTreeMap<Identifier, WireEntry>,
}

/// Block to rule lookup, fixed once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeTable {
    entries: FxHashMap<BlockId, Entry>,
}

impl RuntimeTable {
    /// Rule for `block`, if one is configured
    pub fn get(&self, block: BlockId) -> Option<Entry> {
        self.entries.get(&block).copied()
    }

    pub fn contains(&self, block: BlockId) -> bool {
        self.entries.contains_key(&block)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockId, Entry)> + '_ {
        self.entries.iter().map(|(&block, &entry)| (block, entry))
    }
}

/// Later pairs for the same block win
impl FromIterator<(BlockId, Entry)> for RuntimeTable {
    fn from_iter<I: IntoIterator<Item = (BlockId, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Outcome of loading the config
#[derive(Debug)]
pub struct LoadReport {
    pub table: RuntimeTable,
    /// Recoverable problems; each one dropped an entry
    pub warnings: Vec<DripError>,
    /// Whether the file was missing and defaults were written
    pub created: bool,
}
