//! `flightlog` - An interactive console log of flights backed by a JSON file
//!
//! This library provides the flight record type, its structural validation,
//! the JSON-file-backed store, table rendering, and the menu that ties them
//! together.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod menu;
pub mod schema;
pub mod store;
pub mod table;

pub use config::{Config, MenuMode};
pub use error::{Error, Result};
pub use flight::{Flight, FlightDraft};
pub use logging::init_logging;
pub use menu::{run, LineConsole, Session};
pub use schema::ValidationError;
pub use store::FlightStore;
pub use table::render_table;
