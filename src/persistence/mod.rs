//! Persistence Module - `drip.json` lifecycle

// Data modules
pub mod config_data;

// Operations modules
pub mod config_operations;
pub mod lenient;

mod config_store;

// Simple re-exports
pub use config_data::{ConfigDocument, Entry, LoadReport, RuntimeTable, WireEntry};
pub use config_operations::{
    config_path, default_config_path, default_table, finish_read, load_config, save_config,
};
pub use config_store::ConfigStore;
