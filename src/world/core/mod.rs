//! Core world data types
//!
//! Identifiers, the block and fluid handles they resolve to, and the registry
//! that maps between the two.

mod block;
mod fluid;
mod identifier;
mod registry;
pub mod registry_data;
pub mod registry_operations;

pub use block::BlockId;
pub use fluid::FluidId;
pub use identifier::Identifier;
pub use registry::{GameRegistry, Registry};
