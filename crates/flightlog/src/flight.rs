//! Core flight record types for flightlog.
//!
//! A [`Flight`] is one entry in the log: where the flight goes, its number,
//! and the aircraft type that serves it. The persisted key names are the
//! Russian labels shown to the operator and are written verbatim.

use serde::{Deserialize, Serialize};

use crate::config::MenuMode;

/// Persisted key for the destination field.
pub const DESTINATION_KEY: &str = "название пункта назначения";

/// Persisted key for the flight number field.
pub const FLIGHT_NUMBER_KEY: &str = "номер рейса";

/// Persisted key for the aircraft type field.
pub const AIRCRAFT_TYPE_KEY: &str = "тип самолета";

/// All persisted keys, in field order.
pub const FIELD_KEYS: [&str; 3] = [DESTINATION_KEY, FLIGHT_NUMBER_KEY, AIRCRAFT_TYPE_KEY];

/// A single flight record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    /// Name of the destination point.
    #[serde(rename = "название пункта назначения")]
    pub destination: String,

    /// Flight number.
    #[serde(rename = "номер рейса")]
    pub flight_number: String,

    /// Aircraft type serving the flight.
    #[serde(rename = "тип самолета")]
    pub aircraft_type: String,
}

impl Flight {
    /// Create a new flight record.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        flight_number: impl Into<String>,
        aircraft_type: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            flight_number: flight_number.into(),
            aircraft_type: aircraft_type.into(),
        }
    }

    /// Check whether this flight is served by the given aircraft type.
    ///
    /// The comparison is exact and case-sensitive.
    #[must_use]
    pub fn is_served_by(&self, aircraft_type: &str) -> bool {
        self.aircraft_type == aircraft_type
    }
}

/// Raw operator input for a flight, as read from the prompts.
///
/// Values keep whatever the operator typed; [`FlightDraft::into_flight`]
/// decides how they are cleaned up for the active menu mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightDraft {
    /// Text entered for the destination.
    pub destination: String,
    /// Text entered for the flight number.
    pub flight_number: String,
    /// Text entered for the aircraft type.
    pub aircraft_type: String,
}

impl FlightDraft {
    /// Turn the draft into a record.
    ///
    /// In [`MenuMode::Validating`] surrounding whitespace is trimmed from every
    /// field; in [`MenuMode::Basic`] values are taken verbatim.
    #[must_use]
    pub fn into_flight(self, mode: MenuMode) -> Flight {
        match mode {
            MenuMode::Basic => Flight {
                destination: self.destination,
                flight_number: self.flight_number,
                aircraft_type: self.aircraft_type,
            },
            MenuMode::Validating => Flight::new(
                self.destination.trim(),
                self.flight_number.trim(),
                self.aircraft_type.trim(),
            ),
        }
    }
}
