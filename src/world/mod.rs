//! World Module
//!
//! The slice of the game world drip talks to: identifiers, block and fluid
//! handles, the registry resolving between them, and the dripstone hook.

pub mod core;
pub mod world_operations;

// Re-export core types for convenience
pub use self::core::{BlockId, FluidId, GameRegistry, Identifier, Registry};

pub use world_operations::dripping_fluid;
