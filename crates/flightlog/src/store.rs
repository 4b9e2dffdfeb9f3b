//! JSON-file-backed flight store.
//!
//! The whole store lives in memory for the session. It is read once from the
//! data file at startup and written back in full on exit.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::flight::Flight;
use crate::schema;

/// Indentation used for the persisted file.
const INDENT: &[u8] = b"    ";

/// Ordered collection of flights bound to its data file.
///
/// After every [`FlightStore::append`] the flights are sorted by destination.
/// Flights loaded from disk keep the order they were saved in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightStore {
    /// Path to the data file.
    path: PathBuf,
    /// Flights in store order.
    flights: Vec<Flight>,
}

impl FlightStore {
    /// Create an empty store bound to `path` without touching the file system.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            flights: Vec::new(),
        }
    }

    /// Load the store from the data file at `path`.
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array, or
    /// contains an entry that is not a flight record.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No flight data at {}, starting empty", path.display());
                return Ok(Self::new(path));
            }
            Err(source) => return Err(Error::StoreRead { path, source }),
        };

        let entries: Vec<Value> = match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(source) => return Err(Error::StoreParse { path, source }),
        };

        let mut flights = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if let Err(source) = schema::validate_value(&entry) {
                return Err(Error::InvalidRecord {
                    path,
                    index,
                    source,
                });
            }
            flights.push(serde_json::from_value(entry)?);
        }

        info!("Loaded {} flights from {}", flights.len(), path.display());
        Ok(Self { path, flights })
    }

    /// Write the full store to its data file, replacing previous contents.
    ///
    /// Creates the parent directories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let bytes = self.to_json()?;
        fs::write(&self.path, bytes).map_err(|source| Error::StoreWrite {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Saved {} flights to {}",
            self.flights.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Serialize the store the way it is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.flights.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Add a flight and re-sort the store by destination.
    ///
    /// The sort is stable: flights sharing a destination keep their relative
    /// order.
    pub fn append(&mut self, flight: Flight) {
        debug!(
            "Adding flight {} to {}",
            flight.flight_number, flight.destination
        );
        self.flights.push(flight);
        self.flights.sort_by(|a, b| a.destination.cmp(&b.destination));
    }

    /// Find every flight served by the given aircraft type, in store order.
    #[must_use]
    pub fn find_by_aircraft_type(&self, aircraft_type: &str) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|flight| flight.is_served_by(aircraft_type))
            .collect()
    }

    /// All flights in store order.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Path to the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of flights in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check if the store holds no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_store(path: &Path) -> FlightStore {
        let mut store = FlightStore::new(path);
        store.append(Flight::new("Moscow", "SU100", "A320"));
        store.append(Flight::new("Tokyo", "JL1", "B777"));
        store
    }

    #[test]
    fn test_path_is_kept_from_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        assert_eq!(FlightStore::new(&path).path(), path);
        assert_eq!(FlightStore::load(&path).unwrap().path(), path);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FlightStore::load(dir.path().join("flights.json")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_empty_store_saves_as_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        FlightStore::load(&path).unwrap().save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_append_sorts_by_destination() {
        let mut store = FlightStore::new("flights.json");
        store.append(Flight::new("Tokyo", "JL1", "B777"));
        store.append(Flight::new("Berlin", "LH1", "A320"));
        store.append(Flight::new("Moscow", "SU100", "A320"));

        let destinations: Vec<_> = store
            .flights()
            .iter()
            .map(|f| f.destination.as_str())
            .collect();
        assert_eq!(destinations, vec!["Berlin", "Moscow", "Tokyo"]);
    }

    #[test]
    fn test_append_is_stable_for_equal_destinations() {
        let mut store = FlightStore::new("flights.json");
        store.append(Flight::new("Paris", "AF1", "A320"));
        store.append(Flight::new("Oslo", "SK1", "B737"));
        store.append(Flight::new("Paris", "AF2", "A350"));
        store.append(Flight::new("Paris", "AF3", "B777"));

        let numbers: Vec<_> = store
            .flights()
            .iter()
            .map(|f| f.flight_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["SK1", "AF1", "AF2", "AF3"]);
    }

    #[test]
    fn test_append_sorts_ordinally() {
        let mut store = FlightStore::new("flights.json");
        store.append(Flight::new("москва", "1", "x"));
        store.append(Flight::new("Москва", "2", "x"));
        store.append(Flight::new("moscow", "3", "x"));
        store.append(Flight::new("Moscow", "4", "x"));

        let numbers: Vec<_> = store
            .flights()
            .iter()
            .map(|f| f.flight_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = FlightStore::new("flights.json");
        store.append(Flight::new("Moscow", "SU100", "A320"));
        store.append(Flight::new("Moscow", "SU100", "A320"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_by_aircraft_type() {
        let mut store = FlightStore::new("flights.json");
        store.append(Flight::new("Tokyo", "JL1", "A320"));
        store.append(Flight::new("Moscow", "SU100", "A320"));
        store.append(Flight::new("Berlin", "LH1", "B737"));

        let found = store.find_by_aircraft_type("A320");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].destination, "Moscow");
        assert_eq!(found[1].destination, "Tokyo");

        assert!(store.find_by_aircraft_type("a320").is_empty());
        assert!(store.find_by_aircraft_type("B777").is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        let mut store = scenario_store(&path);
        store.append(Flight::new("Санкт-Петербург", "SU 6", "Ту-204"));
        store.save().unwrap();

        let reloaded = FlightStore::load(&path).unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_save_format_is_pretty_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        let mut store = FlightStore::new(&path);
        store.append(Flight::new("Казань", "SU1", "A320"));
        store.save().unwrap();

        let expected = "[\n    {\n        \"название пункта назначения\": \"Казань\",\n        \"номер рейса\": \"SU1\",\n        \"тип самолета\": \"A320\"\n    }\n]";
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_save_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        scenario_store(&path).save().unwrap();

        FlightStore::new(&path).save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("flights.json");
        scenario_store(&path).save().unwrap();
        assert_eq!(FlightStore::load(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_load_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        fs::write(
            &path,
            r#"[
                {"название пункта назначения": "Tokyo", "номер рейса": "JL1", "тип самолета": "B777"},
                {"название пункта назначения": "Moscow", "номер рейса": "SU100", "тип самолета": "A320"}
            ]"#,
        )
        .unwrap();

        let store = FlightStore::load(&path).unwrap();
        assert_eq!(store.flights()[0].destination, "Tokyo");
        assert_eq!(store.flights()[1].destination, "Moscow");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        fs::write(&path, "not json").unwrap();

        let err = FlightStore::load(&path).unwrap_err();
        assert!(matches!(err, Error::StoreParse { .. }));
    }

    #[test]
    fn test_load_not_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        fs::write(&path, "{}").unwrap();

        let err = FlightStore::load(&path).unwrap_err();
        assert!(matches!(err, Error::StoreParse { .. }));
    }

    #[test]
    fn test_load_wrong_shape_reports_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        fs::write(
            &path,
            r#"[
                {"название пункта назначения": "Tokyo", "номер рейса": "JL1", "тип самолета": "B777"},
                {"название пункта назначения": "Moscow", "номер рейса": 100, "тип самолета": "A320"}
            ]"#,
        )
        .unwrap();

        let err = FlightStore::load(&path).unwrap_err();
        match err {
            Error::InvalidRecord { index, source, .. } => {
                assert_eq!(index, 1);
                assert!(matches!(source, schema::ValidationError::WrongType { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FlightStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::StoreRead { .. }));
    }
}
