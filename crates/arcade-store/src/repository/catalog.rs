//! # Catalog Repository
//!
//! Reads and writes catalog files: a JSON array of kind-tagged records.
//!
//! ## Import Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How an Import Works                                  │
//! │                                                                         │
//! │  games_to_import.json                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read_catalog()  ── not readable / not a JSON array ──► ImportFailed   │
//! │       │                                                                 │
//! │       ▼  Vec<serde_json::Value>                                        │
//! │  Catalog::import_records()                                             │
//! │       │                                                                 │
//! │       ├── valid record        ──► added, keeps file order              │
//! │       └── invalid record      ──► warn!, listed in ImportReport        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exports are pretty-printed with four-space indentation, in catalog order.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use arcade_core::{Catalog, ImportReport, ProductRecord};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Indentation of exported catalog files.
const EXPORT_INDENT: &[u8] = b"    ";

/// A catalog file on disk.
///
/// ## Usage
/// ```rust,no_run
/// use arcade_core::Catalog;
/// use arcade_store::CatalogRepository;
///
/// let mut catalog = Catalog::new();
/// let report = CatalogRepository::new("games_to_import.json").import_into(&mut catalog)?;
/// println!("{} imported, {} rejected", report.imported, report.rejected.len());
///
/// CatalogRepository::new("exported_games.json").export_from(&catalog)?;
/// # Ok::<(), arcade_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    path: PathBuf,
}

impl CatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Imports every valid record of the file into `catalog`.
    ///
    /// ## Errors
    /// `ImportFailed` when the file can't be read or isn't a JSON array. In
    /// that case `catalog` is untouched. Bad records inside a good file are
    /// reported, not returned as errors.
    pub fn import_into(&self, catalog: &mut Catalog) -> StoreResult<ImportReport> {
        debug!(path = %self.path.display(), "Importing catalog");

        let file = File::open(&self.path).map_err(|e| StoreError::import_failed(&self.path, e))?;
        let records =
            read_catalog(BufReader::new(file)).map_err(|e| StoreError::import_failed(&self.path, e))?;

        let report = catalog.import_records(records);

        for rejected in &report.rejected {
            warn!(
                path = %self.path.display(),
                index = rejected.index,
                name = rejected.name.as_deref().unwrap_or("<unnamed>"),
                error = %rejected.error,
                "Skipped catalog record"
            );
        }

        info!(
            path = %self.path.display(),
            imported = report.imported,
            rejected = report.rejected.len(),
            "Catalog imported"
        );

        Ok(report)
    }

    /// Writes the whole catalog, replacing the file. Missing parent
    /// directories are created.
    ///
    /// Returns the number of records written.
    pub fn export_from(&self, catalog: &Catalog) -> StoreResult<usize> {
        let records = catalog.export_records();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::export_failed(&self.path, e))?;
        }

        let file = File::create(&self.path).map_err(|e| StoreError::export_failed(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        write_catalog(&mut writer, &records).map_err(|e| StoreError::export_failed(&self.path, e))?;
        writer
            .flush()
            .map_err(|e| StoreError::export_failed(&self.path, e))?;

        info!(path = %self.path.display(), records = records.len(), "Catalog exported");
        Ok(records.len())
    }
}

// =============================================================================
// Format
// =============================================================================

/// Decodes a catalog document into its raw records.
///
/// Only the outer array is checked here. Each element is validated later by
/// [`Catalog::import_records`].
pub fn read_catalog<R: Read>(reader: R) -> serde_json::Result<Vec<Value>> {
    serde_json::from_reader(reader)
}

/// Encodes records as a pretty JSON array.
pub fn write_catalog<W: Write>(writer: W, records: &[ProductRecord]) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(EXPORT_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::{CoreError, Game, Genre, Money, Product};
    use tempfile::TempDir;

    fn talos() -> Game {
        Game::new(
            "The Talos Principle",
            Money::from_cents(3999),
            vec![Genre::Puzzle, Genre::Adventure],
            "Croteam",
            "Devolver Digital",
            "2014/12/11",
        )
        .unwrap()
    }

    fn portal() -> Game {
        Game::new(
            "Portal 2",
            Money::from_cents(999),
            vec![Genre::Puzzle],
            "Valve",
            "Valve",
            "2011/04/19",
        )
        .unwrap()
    }

    #[test]
    fn test_export_then_import_preserves_products_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CatalogRepository::new(temp_dir.path().join("games.json"));

        let mut catalog = Catalog::new();
        catalog.add(talos()).unwrap();
        catalog.add(portal()).unwrap();

        assert_eq!(repo.export_from(&catalog).unwrap(), 2);
        assert!(repo.exists());

        let mut restored = Catalog::new();
        let report = repo.import_into(&mut restored).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.imported, 2);
        assert_eq!(restored.export_records(), catalog.export_records());
        assert_eq!(
            restored.names().collect::<Vec<_>>(),
            vec!["The Talos Principle", "Portal 2"]
        );
    }

    #[test]
    fn test_export_uses_four_space_indent() {
        let mut buffer = Vec::new();
        let records = vec![Product::from(talos()).to_record()];
        write_catalog(&mut buffer, &records).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("[\n    {\n        \"type\": \"Game\""));
        assert!(text.contains("\"price\": 39.99"));
        assert!(text.contains("\"release_date\": \"2014/12/11\""));
    }

    #[test]
    fn test_prices_survive_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.json");
        fs::write(
            &source,
            r#"[
                {"type": "Game", "name": "Sub Cent", "price": 9.999, "genre": ["Puzzle", "Puzzle"],
                 "developer": "Valve", "publisher": "Valve", "release_date": "2011/04/19"},
                {"type": "Game", "name": "Whole", "price": 40, "genre": [],
                 "developer": "Valve", "publisher": "Valve", "release_date": "2011/04/19"}
            ]"#,
        )
        .unwrap();

        let mut catalog = Catalog::new();
        let report = CatalogRepository::new(&source).import_into(&mut catalog).unwrap();
        assert!(report.is_clean());

        let target = temp_dir.path().join("target.json");
        CatalogRepository::new(&target).export_from(&catalog).unwrap();

        let text = fs::read_to_string(&target).unwrap();
        assert!(text.contains("\"price\": 9.999,"));
        assert!(text.contains("\"price\": 40,"));
        assert!(!text.contains("40.0"));
    }

    #[test]
    fn test_unknown_type_is_skipped_and_rest_imports() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixed.json");
        fs::write(
            &path,
            r#"[
                {"type": "Unknown", "name": "Mystery"},
                {"type": "Game", "name": "Portal 2", "price": 9.99, "genre": ["Puzzle"],
                 "developer": "Valve", "publisher": "Valve", "release_date": "2011/04/19"},
                {"type": "Game", "name": "Bad Date", "price": 9.99, "genre": ["Puzzle"],
                 "developer": "Valve", "publisher": "Valve", "release_date": "2023/02/30"}
            ]"#,
        )
        .unwrap();

        let mut catalog = Catalog::new();
        let report = CatalogRepository::new(&path).import_into(&mut catalog).unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].index, 0);
        assert!(matches!(report.rejected[0].error, CoreError::InvalidRecord { .. }));
        assert_eq!(report.rejected[1].name.as_deref(), Some("Bad Date"));
        assert!(matches!(report.rejected[1].error, CoreError::Validation(_)));
        assert!(catalog.contains("Portal 2"));
    }

    #[test]
    fn test_malformed_file_aborts_import() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "[{\"type\": \"Game\",").unwrap();

        let mut catalog = Catalog::new();
        catalog.add(portal()).unwrap();

        let err = CatalogRepository::new(&path).import_into(&mut catalog).unwrap_err();
        assert!(matches!(err, StoreError::ImportFailed { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_non_array_document_aborts_import() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("object.json");
        fs::write(&path, r#"{"type": "Game"}"#).unwrap();

        let err = CatalogRepository::new(&path)
            .import_into(&mut Catalog::new())
            .unwrap_err();
        assert!(matches!(err, StoreError::ImportFailed { .. }));
    }

    #[test]
    fn test_missing_file_is_import_failure() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CatalogRepository::new(temp_dir.path().join("absent.json"));
        assert!(!repo.exists());

        let err = repo.import_into(&mut Catalog::new()).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CatalogRepository::new(temp_dir.path().join("out").join("games.json"));

        assert_eq!(repo.export_from(&Catalog::new()).unwrap(), 0);
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), "[]");
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let repo = CatalogRepository::new(blocker.join("games.json"));
        let err = repo.export_from(&Catalog::new()).unwrap_err();
        assert!(matches!(err, StoreError::ExportFailed { .. }));
    }
}
