//! Console implementations of the collaborator traits.
//!
//! The map and panel render their state transitions as lines on stdout; the
//! location provider uses the configured home position or asks the user.

use std::io::{BufRead, Write};

use waylog::geo::{Coordinates, LocationProvider, PositionError};
use waylog::map::{MapDisplay, MarkerPopup, PanOptions};
use waylog::ui::list::ListEntry;
use waylog::ui::panel::WorkoutPanel;

/// Map display that narrates map state on stdout.
#[derive(Debug, Default)]
pub struct ConsoleMap;

impl MapDisplay for ConsoleMap {
    fn create_view(&mut self, center: Coordinates, zoom: u8) {
        println!("map: view centered at {center} (zoom {zoom})");
    }

    fn add_marker(&mut self, coords: Coordinates, popup: MarkerPopup) {
        println!("map: marker at {coords} \u{2014} {}", popup.text);
    }

    fn set_view(&mut self, center: Coordinates, zoom: u8, options: PanOptions) {
        if options.animate {
            println!("map: panning to {center} (zoom {zoom}, {}s)", options.pan_duration_secs);
        } else {
            println!("map: jumped to {center} (zoom {zoom})");
        }
    }
}

/// Form/list surface rendered as console lines.
#[derive(Debug, Default)]
pub struct ConsolePanel;

impl WorkoutPanel for ConsolePanel {
    fn show_form(&mut self) {
        println!("form: open \u{2014} add <running|cycling> <distance> <duration> <cadence|elevation>");
    }

    fn hide_form(&mut self) {
        println!("form: closed");
    }

    fn toggle_kind_rows(&mut self) {
        println!("form: toggled cadence/elevation rows");
    }

    fn push_entry(&mut self, entry: &ListEntry) {
        println!("[{}] {}", entry.id, entry.title);
        for stat in &entry.stats {
            println!("    {} {} {}", stat.icon, stat.value, stat.unit);
        }
    }

    fn clear_entries(&mut self) {
        println!("list: cleared");
    }

    fn alert(&mut self, message: &str) {
        println!("! {message}");
    }
}

/// Position from the config's home entry, or an interactive prompt.
/// An unparseable reply is a position failure, not a retry.
pub struct ConsoleLocator {
    home: Option<[f64; 2]>,
}

impl ConsoleLocator {
    pub fn new(home: Option<[f64; 2]>) -> Self {
        Self {
            home,
        }
    }
}

impl LocationProvider for ConsoleLocator {
    fn current_position(&mut self) -> Result<Coordinates, PositionError> {
        if let Some([latitude, longitude]) = self.home {
            return Ok(Coordinates::new(latitude, longitude));
        }

        print!("Starting position (lat lon): ");
        std::io::stdout()
            .flush()
            .map_err(|e| PositionError::Unavailable(e.to_string()))?;

        let mut reply = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut reply)
            .map_err(|e| PositionError::Unavailable(e.to_string()))?;

        parse_coordinates(&reply)
            .ok_or_else(|| PositionError::Unavailable(format!("unparseable reply {reply:?}")))
    }
}

/// Parse "lat lon" from a line of input.
pub fn parse_coordinates(line: &str) -> Option<Coordinates> {
    let mut parts = line.split_whitespace();
    let latitude = parts.next()?.parse::<f64>().ok()?;
    let longitude = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinates::new(latitude, longitude))
}
