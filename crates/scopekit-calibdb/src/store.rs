//! Persistence contract and backends.
//!
//! The engine only depends on the [`CalibrationStore`] trait; whether the
//! records live in a JSON file, a remote service, or memory is the
//! integrator's choice. The file backend keeps the whole record map in one
//! document and replaces it atomically (temp write, then rename), so a
//! failed save never leaves a half-written file behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::model::CalibrationRecord;

/// External persistence contract for calibration records.
///
/// Keys are magnification strings; `save` upserts (last write wins).
pub trait CalibrationStore: Send {
    fn save(&mut self, record: &CalibrationRecord) -> StoreResult<()>;
    fn get(&self, magnification: &str) -> StoreResult<Option<CalibrationRecord>>;
    fn list(&self) -> StoreResult<HashMap<String, CalibrationRecord>>;
    fn delete(&mut self, magnification: &str) -> StoreResult<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, CalibrationRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalibrationStore for MemoryStore {
    fn save(&mut self, record: &CalibrationRecord) -> StoreResult<()> {
        self.records
            .insert(record.magnification.clone(), record.clone());
        Ok(())
    }

    fn get(&self, magnification: &str) -> StoreResult<Option<CalibrationRecord>> {
        Ok(self.records.get(magnification).cloned())
    }

    fn list(&self) -> StoreResult<HashMap<String, CalibrationRecord>> {
        Ok(self.records.clone())
    }

    fn delete(&mut self, magnification: &str) -> StoreResult<()> {
        self.records.remove(magnification);
        Ok(())
    }
}

/// JSON-file-backed store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the given file. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config location
    /// (`<config_dir>/scopekit/calibrations.json`), creating the directory
    /// if needed.
    pub fn at_default_location() -> StoreResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| StoreError::Load("no platform config directory".to_string()))?
            .join("scopekit");
        std::fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join("calibrations.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> StoreResult<HashMap<String, CalibrationRecord>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| StoreError::Load(format!("{}: {}", self.path.display(), e)))
    }

    fn write_map(&self, map: &HashMap<String, CalibrationRecord>) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl CalibrationStore for JsonFileStore {
    fn save(&mut self, record: &CalibrationRecord) -> StoreResult<()> {
        let mut map = self.read_map()?;
        map.insert(record.magnification.clone(), record.clone());
        self.write_map(&map)?;
        tracing::debug!(magnification = %record.magnification, path = %self.path.display(), "calibration saved");
        Ok(())
    }

    fn get(&self, magnification: &str) -> StoreResult<Option<CalibrationRecord>> {
        Ok(self.read_map()?.remove(magnification))
    }

    fn list(&self) -> StoreResult<HashMap<String, CalibrationRecord>> {
        self.read_map()
    }

    fn delete(&mut self, magnification: &str) -> StoreResult<()> {
        let mut map = self.read_map()?;
        if map.remove(magnification).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scopekit_core::Unit;

    fn record(magnification: &str, factor: f64) -> CalibrationRecord {
        CalibrationRecord::new(magnification, Unit::Microns, factor)
    }

    #[test]
    fn test_memory_store_upsert_last_write_wins() {
        let mut store = MemoryStore::new();
        store.save(&record("100x", 1.0)).unwrap();
        store.save(&record("100x", 2.0)).unwrap();

        let got = store.get("100x").unwrap().unwrap();
        assert_eq!(got.pixels_per_unit, 2.0);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibrations.json");

        let mut store = JsonFileStore::new(&path);
        store.save(&record("10x", 0.5)).unwrap();
        store.save(&record("1000x", 4.0)).unwrap();

        // A fresh store instance reads the same records back
        let reopened = JsonFileStore::new(&path);
        let listed = reopened.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed["10x"].pixels_per_unit, 0.5);
        assert_eq!(
            reopened.get("1000x").unwrap().unwrap().pixels_per_unit,
            4.0
        );
    }

    #[test]
    fn test_json_store_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("calibrations.json"));
        store.save(&record("10x", 0.5)).unwrap();
        store.delete("10x").unwrap();
        assert!(store.get("10x").unwrap().is_none());
        // Deleting a missing key is an ack, not an error
        store.delete("40x").unwrap();
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(store.list().unwrap().is_empty());
        assert!(store.get("10x").unwrap().is_none());
    }

    #[test]
    fn test_json_store_corrupt_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibrations.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.list(), Err(StoreError::Load(_))));
    }
}
