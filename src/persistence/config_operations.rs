//! Config Operations - load, resolve and write `drip.json`
//!
//! Loading is a one-shot startup step: read and parse the document (fatal on
//! failure), then resolve each entry against the registry (entries that do
//! not resolve are logged and dropped). A missing file is replaced by the
//! built-in defaults.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::config_data::{ConfigDocument, Entry, LoadReport, RuntimeTable, WireEntry};
use super::lenient::strip_lenient;
use crate::constants::{blocks, fluids, CONFIG_FILE_NAME};
use crate::error::{DripError, DripResult, IoResultExt};
use crate::world::core::{Identifier, Registry};

/// Rules written on first run: (block, fluid), none replacing vanilla
pub const DEFAULT_RULES: [(&str, &str); 5] = [
    (blocks::MUD, fluids::WATER),
    (blocks::ICE, fluids::WATER),
    (blocks::PACKED_ICE, fluids::WATER),
    (blocks::BLUE_ICE, fluids::WATER),
    (blocks::MAGMA_BLOCK, fluids::LAVA),
];

/// Path of the config inside `config_dir`
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Path of the config inside the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| config_path(&dir))
}

/// Load the config at `path`, writing the defaults first if it does not exist
pub fn load_config<R: Registry + ?Sized>(path: &Path, registry: &R) -> DripResult<LoadReport> {
    let text = match fs::read_to_string(path) {
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return create_default_config(path, registry);
        }
        result => result.with_path(path)?,
    };

    let document = parse_document(&text, path)?;
    let (table, warnings) = finish_read(document, registry);
    log::info!(
        "Loaded {} drip entries from {} ({} dropped)",
        table.len(),
        path.display(),
        warnings.len()
    );

    Ok(LoadReport {
        table,
        warnings,
        created: false,
    })
}

fn create_default_config<R: Registry + ?Sized>(
    path: &Path,
    registry: &R,
) -> DripResult<LoadReport> {
    log::info!("No config at {}, writing defaults", path.display());

    let (table, warnings) = finish_read(default_document()?, registry);
    let mut document = save_config(&table, registry);

    // Inert: no registry has this block, so it never reaches the table.
    document.entries.insert(
        Identifier::new("ringlings", "gem")?,
        WireEntry {
            fluid: Identifier::vanilla(fluids::WATER)?,
            replace: false,
        },
    );

    write_document(path, &document)?;

    Ok(LoadReport {
        table,
        warnings,
        created: true,
    })
}

/// The built-in rules as a wire document
pub fn default_document() -> DripResult<ConfigDocument> {
    let mut document = ConfigDocument::default();
    for (block, fluid) in DEFAULT_RULES {
        document.entries.insert(
            Identifier::vanilla(block)?,
            WireEntry {
                fluid: Identifier::vanilla(fluid)?,
                replace: false,
            },
        );
    }
    Ok(document)
}

/// The built-in rules resolved against `registry`
pub fn default_table<R: Registry + ?Sized>(registry: &R) -> DripResult<RuntimeTable> {
    let (table, _) = finish_read(default_document()?, registry);
    Ok(table)
}

/// Parse config text, tolerating comments and trailing commas
pub fn parse_document(text: &str, path: &Path) -> DripResult<ConfigDocument> {
    serde_json::from_str(&strip_lenient(text)).map_err(|error| DripError::ConfigParseError {
        path: path.display().to_string(),
        error: error.to_string(),
    })
}

/// Resolve a parsed document into a runtime table
///
/// Entries naming an unknown block or fluid are logged and returned as
/// warnings instead of being inserted.
pub fn finish_read<R: Registry + ?Sized>(
    document: ConfigDocument,
    registry: &R,
) -> (RuntimeTable, Vec<DripError>) {
    let mut warnings = Vec::new();
    let mut resolved = Vec::with_capacity(document.entries.len());

    for (id, entry) in document.entries {
        let Some(block) = registry.resolve_block(&id) else {
            let warning = DripError::UnknownBlock { id, entry };
            log::warn!("{}", warning);
            warnings.push(warning);
            continue;
        };
        let Some(fluid) = registry.resolve_fluid(&entry.fluid) else {
            let warning = DripError::UnknownFluid {
                block: id,
                fluid: entry.fluid,
            };
            log::warn!("{}", warning);
            warnings.push(warning);
            continue;
        };
        resolved.push((block, Entry::new(fluid, entry.replace)));
    }

    (resolved.into_iter().collect(), warnings)
}

/// Convert a runtime table back into its wire document
///
/// Handles the registry cannot name are skipped with a warning.
pub fn save_config<R: Registry + ?Sized>(table: &RuntimeTable, registry: &R) -> ConfigDocument {
    let mut document = ConfigDocument::default();

    for (block, entry) in table.iter() {
        let Some(block_id) = registry.block_identifier(block) else {
            log::warn!("Skipping unregistered {} while saving", block);
            continue;
        };
        let Some(fluid_id) = registry.fluid_identifier(entry.fluid()) else {
            log::warn!(
                "Skipping {}: unregistered {} while saving",
                block_id,
                entry.fluid()
            );
            continue;
        };
        document.entries.insert(
            block_id,
            WireEntry {
                fluid: fluid_id,
                replace: entry.replace(),
            },
        );
    }

    document
}

/// Pretty-print a document; equal documents render to identical text
pub fn render_document(document: &ConfigDocument) -> DripResult<String> {
    let mut text =
        serde_json::to_string_pretty(document).map_err(|error| DripError::SerializationError {
            context: "config document".to_string(),
            error: error.to_string(),
        })?;
    text.push('\n');
    Ok(text)
}

/// Write a document to `path`, creating or truncating the file
pub fn write_document(path: &Path, document: &ConfigDocument) -> DripResult<()> {
    let text = render_document(document)?;
    let mut file = File::create(path).with_path(path)?;
    file.write_all(text.as_bytes()).with_path(path)?;
    log::info!(
        "Wrote {} drip entries to {}",
        document.entries.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::GameRegistry;

    #[test]
    fn test_default_table_has_builtins() {
        let registry = GameRegistry::vanilla().expect("vanilla registry");
        let table = default_table(&registry).expect("default table");
        assert_eq!(table.len(), DEFAULT_RULES.len());

        let water = registry.fluid("water").expect("water registered");
        let lava = registry.fluid("lava").expect("lava registered");
        for block in ["mud", "ice", "packed_ice", "blue_ice"] {
            let id = registry.block(block).expect("block registered");
            assert_eq!(table.get(id), Some(Entry::new(water, false)), "{block}");
        }
        let magma = registry.block("magma_block").expect("magma registered");
        assert_eq!(table.get(magma), Some(Entry::new(lava, false)));
    }

    #[test]
    fn test_default_table_skips_missing_builtins() {
        let mut registry = GameRegistry::new();
        registry.register_block("mud").expect("registers");
        registry.register_fluid("water").expect("registers");
        let table = default_table(&registry).expect("default table");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_finish_read_drops_unknowns() {
        let registry = GameRegistry::vanilla().expect("vanilla registry");
        let document = parse_document(
            r#"{"entries": {
                "mud": {"fluid": "water"},
                "ringlings:gem": {"fluid": "water"},
                "ice": {"fluid": "ringlings:goo", "replace": true}
            }}"#,
            Path::new("drip.json"),
        )
        .expect("parses");

        let (table, warnings) = finish_read(document, &registry);
        assert_eq!(table.len(), 1);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(DripError::is_recoverable));
        assert!(warnings.iter().any(|w| matches!(
            w,
            DripError::UnknownBlock { id, .. } if id.to_string() == "ringlings:gem"
        )));
        assert!(warnings.iter().any(|w| matches!(
            w,
            DripError::UnknownFluid { fluid, .. } if fluid.to_string() == "ringlings:goo"
        )));
    }

    #[test]
    fn test_save_is_deterministic() {
        let registry = GameRegistry::vanilla().expect("vanilla registry");
        let table = default_table(&registry).expect("default table");

        let first = render_document(&save_config(&table, &registry)).expect("renders");
        let second = render_document(&save_config(&table.clone(), &registry)).expect("renders");
        assert_eq!(first, second);

        let blue_ice = first.find("minecraft:blue_ice").expect("blue ice present");
        let packed_ice = first.find("minecraft:packed_ice").expect("packed ice present");
        assert!(blue_ice < packed_ice);
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path(Path::new("/tmp/config"));
        assert_eq!(path, Path::new("/tmp/config/drip.json"));
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
