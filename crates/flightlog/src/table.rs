//! Fixed-width table rendering for flights.

use std::fmt::Write;

use crate::flight::Flight;

/// Width of the destination column.
pub const DESTINATION_WIDTH: usize = 30;

/// Width of the flight number column.
pub const FLIGHT_NUMBER_WIDTH: usize = 20;

/// Width of the aircraft type column.
pub const AIRCRAFT_TYPE_WIDTH: usize = 15;

const DESTINATION_HEADER: &str = "Название пункта назначения";
const FLIGHT_NUMBER_HEADER: &str = "Номер рейса";
const AIRCRAFT_TYPE_HEADER: &str = "Тип самолета";

/// Render flights as a bordered table.
///
/// Widths are counted in characters. Values longer than their column are not
/// truncated and push the right border out. Every line, including the last,
/// ends with a newline.
#[must_use]
pub fn render_table<'a, I>(flights: I) -> String
where
    I: IntoIterator<Item = &'a Flight>,
{
    let border = border_line();
    let mut out = String::new();

    out.push_str(&border);
    let _ = writeln!(
        out,
        "| {:^dw$} | {:^fw$} | {:^aw$} |",
        DESTINATION_HEADER,
        FLIGHT_NUMBER_HEADER,
        AIRCRAFT_TYPE_HEADER,
        dw = DESTINATION_WIDTH,
        fw = FLIGHT_NUMBER_WIDTH,
        aw = AIRCRAFT_TYPE_WIDTH,
    );
    out.push_str(&border);

    for flight in flights {
        let _ = writeln!(
            out,
            "| {:<dw$} | {:<fw$} | {:<aw$} |",
            flight.destination,
            flight.flight_number,
            flight.aircraft_type,
            dw = DESTINATION_WIDTH,
            fw = FLIGHT_NUMBER_WIDTH,
            aw = AIRCRAFT_TYPE_WIDTH,
        );
    }

    out.push_str(&border);
    out
}

fn border_line() -> String {
    format!(
        "+-{}-+-{}-+-{}-+\n",
        "-".repeat(DESTINATION_WIDTH),
        "-".repeat(FLIGHT_NUMBER_WIDTH),
        "-".repeat(AIRCRAFT_TYPE_WIDTH),
    )
}
