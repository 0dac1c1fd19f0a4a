use std::path::Path;

use super::config_data::{ConfigDocument, LoadReport, RuntimeTable};
use super::config_operations as ops;
use crate::error::DripResult;
use crate::world::core::Registry;

/// Loads and saves drip rules against a host registry
///
/// Build the table once at startup and hand `&RuntimeTable` (or an
/// `Arc<RuntimeTable>`) to whatever needs it afterwards.
pub struct ConfigStore<'r, R: Registry + ?Sized> {
    registry: &'r R,
}

impl<'r, R: Registry + ?Sized> ConfigStore<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Self { registry }
    }

    /// Load the table from `path`, writing the defaults first if missing
    pub fn load(&self, path: &Path) -> DripResult<RuntimeTable> {
        Ok(self.load_report(path)?.table)
    }

    /// Same as [`ConfigStore::load`] but also returns the dropped entries
    pub fn load_report(&self, path: &Path) -> DripResult<LoadReport> {
        ops::load_config(path, self.registry)
    }

    pub fn save(&self, table: &RuntimeTable) -> ConfigDocument {
        ops::save_config(table, self.registry)
    }

    /// Save `table` and write it to `path`
    pub fn write(&self, path: &Path, table: &RuntimeTable) -> DripResult<()> {
        ops::write_document(path, &self.save(table))
    }

    pub fn default_table(&self) -> DripResult<RuntimeTable> {
        ops::default_table(self.registry)
    }
}
