// drip - dripstone fluid rules
//
// Maps blocks to the fluid pointed dripstone drips beneath them, loaded once
// from `drip.json` at startup:
// - persistence loads, resolves and writes the config
// - world holds identifiers, the registry seam and the dripstone hook
//
// The loaded RuntimeTable is immutable. Build it once and share it by
// reference; there is no global instance.

// Constants module
pub mod constants;

// Core modules
pub mod error;
pub mod persistence;
pub mod world;

pub use constants::{CONFIG_FILE_NAME, DEFAULT_NAMESPACE};
pub use error::{DripError, DripResult, IoResultExt};
pub use persistence::{
    config_path, default_config_path, ConfigDocument, ConfigStore, Entry, LoadReport,
    RuntimeTable, WireEntry,
};
pub use world::{dripping_fluid, BlockId, FluidId, GameRegistry, Identifier, Registry};
