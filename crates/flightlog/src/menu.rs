//! Interactive menu for flightlog.
//!
//! The menu is split in two layers:
//!
//! - [`Session::execute`] applies one [`Command`] to the store and returns the
//!   text to show plus the next [`State`]. It never reads input.
//! - [`run`] is the shell around it: it prints the menu, reads a selector and
//!   whatever the chosen action needs through a [`Console`], and loops until
//!   the exit action.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use flightlog::config::MenuMode;
//! use flightlog::menu::{run, LineConsole, Session};
//! use flightlog::FlightStore;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = FlightStore::new(dir.path().join("flights.json"));
//! let mut session = Session::new(store, MenuMode::Basic);
//!
//! let input = Cursor::new("1\nMoscow\nSU100\nA320\n2\n4\n");
//! let mut console = LineConsole::new(input, Vec::new());
//! run(&mut session, &mut console).unwrap();
//!
//! assert_eq!(session.store().len(), 1);
//! assert!(dir.path().join("flights.json").exists());
//! ```

use std::io::{BufRead, Write};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::MenuMode;
use crate::error::{Error, Result};
use crate::flight::{Flight, FlightDraft};
use crate::schema;
use crate::store::FlightStore;
use crate::table::render_table;

const MENU_HEADER: &str = "Выберите действие:";
const MENU_ADD: &str = "1. Добавить рейс";
const MENU_LIST: &str = "2. Вывести список рейсов";
const MENU_SEARCH: &str = "3. Поиск рейсов по типу самолета";
const MENU_CHECK: &str = "4. Проверить валидацию данных";

const SELECTOR_PROMPT: &str = "Введите номер действия: ";
const DESTINATION_PROMPT: &str = "Введите название пункта назначения: ";
const FLIGHT_NUMBER_PROMPT: &str = "Введите номер рейса: ";
const AIRCRAFT_TYPE_PROMPT: &str = "Введите тип самолета: ";
const SEARCH_PROMPT: &str = "Введите тип самолета для поиска: ";

const VALIDATION_PASSED: &str = "Введенные данные соответствуют схеме.";
const VALIDATION_FAILED: &str = "Ошибка валидации: ";
const INVALID_SELECTION: &str = "Некорректный ввод. Пожалуйста, выберите действие из списка.";

/// State of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for the next action.
    Running,
    /// The store has been saved and the loop must end.
    Exiting,
}

/// A menu action, as chosen by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add a flight.
    AddFlight,
    /// Print every flight.
    ListFlights,
    /// Print flights served by an aircraft type.
    SearchByAircraftType,
    /// Check a candidate flight against the record shape without storing it.
    CheckValidation,
    /// Save the store and leave.
    SaveAndExit,
    /// Anything the menu does not offer.
    Invalid,
}

impl Action {
    /// Map a selector to an action for the given menu variant.
    ///
    /// The selector must match exactly; surrounding whitespace makes it
    /// invalid.
    #[must_use]
    pub fn parse(selector: &str, mode: MenuMode) -> Self {
        match (selector, mode) {
            ("1", _) => Self::AddFlight,
            ("2", _) => Self::ListFlights,
            ("3", _) => Self::SearchByAircraftType,
            ("4", MenuMode::Basic) | ("5", MenuMode::Validating) => Self::SaveAndExit,
            ("4", MenuMode::Validating) => Self::CheckValidation,
            _ => Self::Invalid,
        }
    }
}

/// The menu listing for the given variant, one line per entry.
#[must_use]
pub fn menu_text(mode: MenuMode) -> String {
    let mut lines = vec![MENU_HEADER, MENU_ADD, MENU_LIST, MENU_SEARCH];
    match mode {
        MenuMode::Basic => lines.push("4. Сохранить и выйти"),
        MenuMode::Validating => {
            lines.push(MENU_CHECK);
            lines.push("5. Сохранить и выйти");
        }
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// An action together with the operator input it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add the drafted flight.
    AddFlight(FlightDraft),
    /// Print every flight.
    ListFlights,
    /// Print flights served by this aircraft type.
    SearchByAircraftType(String),
    /// Check the drafted flight without storing it.
    CheckValidation(FlightDraft),
    /// Save the store and leave.
    SaveAndExit,
    /// Report an unknown selector.
    Invalid,
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the operator; may be empty.
    pub message: String,
    /// State the loop moves to.
    pub state: State,
}

impl Reply {
    fn running(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            state: State::Running,
        }
    }

    fn silent() -> Self {
        Self::running(String::new())
    }
}

/// The menu's working context: the store and the active variant.
#[derive(Debug)]
pub struct Session {
    store: FlightStore,
    mode: MenuMode,
}

impl Session {
    /// Create a session over a loaded store.
    #[must_use]
    pub fn new(store: FlightStore, mode: MenuMode) -> Self {
        Self { store, mode }
    }

    /// The store.
    #[must_use]
    pub fn store(&self) -> &FlightStore {
        &self.store
    }

    /// The active menu variant.
    #[must_use]
    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    /// Execute one command.
    ///
    /// Validation failures, empty searches and unknown selectors are ordinary
    /// replies, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if saving the store fails.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        debug!("Executing {:?}", command);
        match command {
            Command::AddFlight(draft) => self.add_flight(draft),
            Command::ListFlights => Ok(Reply::running(render_table(self.store.flights()))),
            Command::SearchByAircraftType(aircraft_type) => {
                Ok(Reply::running(self.search(&aircraft_type)))
            }
            Command::CheckValidation(draft) => Ok(self.check_validation(draft)),
            Command::SaveAndExit => {
                self.store.save()?;
                Ok(Reply {
                    message: String::new(),
                    state: State::Exiting,
                })
            }
            Command::Invalid => Ok(Reply::running(format!("{INVALID_SELECTION}\n"))),
        }
    }

    /// Add a candidate record given as JSON.
    ///
    /// The candidate is stored only if it has the flight record shape;
    /// otherwise the reply describes the violation and the store is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if a valid candidate still fails to deserialize.
    pub fn add_candidate(&mut self, candidate: Value) -> Result<Reply> {
        if let Err(err) = schema::validate_value(&candidate) {
            warn!("Rejected flight: {err}");
            return Ok(Reply::running(format!("{VALIDATION_FAILED} {err}\n")));
        }
        let flight: Flight = serde_json::from_value(candidate)?;
        self.store.append(flight);
        Ok(Reply::silent())
    }

    fn add_flight(&mut self, draft: FlightDraft) -> Result<Reply> {
        let flight = draft.into_flight(self.mode);
        match self.mode {
            MenuMode::Basic => {
                self.store.append(flight);
                Ok(Reply::silent())
            }
            MenuMode::Validating => self.add_candidate(serde_json::to_value(flight)?),
        }
    }

    fn check_validation(&self, draft: FlightDraft) -> Reply {
        let message = match schema::validate(&draft.into_flight(self.mode)) {
            Ok(()) => format!("{VALIDATION_PASSED}\n"),
            Err(err) => format!("{VALIDATION_FAILED} {err}\n"),
        };
        Reply::running(message)
    }

    fn search(&self, aircraft_type: &str) -> String {
        let found = self.store.find_by_aircraft_type(aircraft_type);
        if found.is_empty() {
            format!("\nРейсов, обслуживаемых самолетом типа {aircraft_type}, не найдено.\n")
        } else {
            let mut text = format!("\nРейсы, обслуживаемые самолетом типа {aircraft_type}: \n");
            text.push_str(&render_table(found));
            text
        }
    }
}

/// Operator console used by the menu shell.
pub trait Console {
    /// Show `prompt` and read one line of input, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] when input is exhausted, or an I/O error.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Show text as is.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the text cannot be written.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// A [`Console`] over any line-oriented reader and writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Create a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Take the reader and writer back.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.write(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

/// Read the operator input an action needs and build its command.
///
/// # Errors
///
/// Returns an error if reading from the console fails.
pub fn gather<C: Console>(action: Action, console: &mut C) -> Result<Command> {
    let command = match action {
        Action::AddFlight => Command::AddFlight(read_draft(console)?),
        Action::ListFlights => Command::ListFlights,
        Action::SearchByAircraftType => {
            Command::SearchByAircraftType(console.read_line(SEARCH_PROMPT)?)
        }
        Action::CheckValidation => Command::CheckValidation(read_draft(console)?),
        Action::SaveAndExit => Command::SaveAndExit,
        Action::Invalid => Command::Invalid,
    };
    Ok(command)
}

fn read_draft<C: Console>(console: &mut C) -> Result<FlightDraft> {
    Ok(FlightDraft {
        destination: console.read_line(DESTINATION_PROMPT)?,
        flight_number: console.read_line(FLIGHT_NUMBER_PROMPT)?,
        aircraft_type: console.read_line(AIRCRAFT_TYPE_PROMPT)?,
    })
}

/// Run the menu loop until the exit action saves the store.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] if input ends before the exit action, in
/// which case nothing is saved. Console and save failures are returned as is.
pub fn run<C: Console>(session: &mut Session, console: &mut C) -> Result<()> {
    info!(
        "Menu started ({} mode, {} flights)",
        session.mode(),
        session.store().len()
    );

    loop {
        console.write(&menu_text(session.mode()))?;
        let selector = console.read_line(SELECTOR_PROMPT)?;
        let action = Action::parse(&selector, session.mode());
        let command = gather(action, console)?;
        let reply = session.execute(command)?;

        if !reply.message.is_empty() {
            console.write(&reply.message)?;
        }
        if reply.state == State::Exiting {
            info!(
                "Menu finished, {} flights saved to {}",
                session.store().len(),
                session.store().path().display()
            );
            return Ok(());
        }
    }
}
