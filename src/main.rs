//! waylog - Map-Pinned Workout Diary
//!
//! Console entry point: wires the controller to console-backed collaborators
//! and a file-backed store, then runs a line-oriented event loop.

use std::io::BufRead;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use waylog::app::App;
use waylog::storage::config::load_config;
use waylog::storage::store::FileStore;
use waylog::workouts::form::WorkoutForm;

mod console;

use console::{parse_coordinates, ConsoleLocator, ConsoleMap, ConsolePanel};

const HELP: &str = "commands:
  mark <lat> <lon>                                  click the map
  add <running|cycling> <dist> <dur> <cad|elev>     submit the form
  toggle                                            switch cadence/elevation rows
  goto <id>                                         pan the map to a workout
  reset                                             clear everything
  quit";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting waylog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("loading configuration")?;

    let store = FileStore::open_default().context("opening workout store")?;

    let mut app = App::new(ConsoleMap, ConsolePanel, store, config.map_zoom);
    let mut locator = ConsoleLocator::new(config.home);
    app.bootstrap(&mut locator);

    println!("{HELP}");

    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading input")?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["mark", rest @ ..] => match parse_coordinates(&rest.join(" ")) {
                Some(coords) => app.handle_map_click(coords),
                None => println!("usage: mark <lat> <lon>"),
            },
            ["add", kind, fields @ ..] => match form_from_tokens(kind, fields) {
                Some(form) => app.handle_submit(&form),
                None => println!("usage: add <running|cycling> <dist> <dur> <cad|elev>"),
            },
            ["toggle"] => app.handle_kind_toggle(),
            ["goto", id] => match id.parse::<i64>() {
                Ok(id) => app.move_to_workout(id),
                Err(_) => println!("usage: goto <id>"),
            },
            ["reset"] => app.reset(),
            ["quit"] | ["exit"] => break,
            _ => println!("{HELP}"),
        }
    }

    Ok(())
}

/// Build a form from raw command tokens. Field values pass through as the
/// strings the user typed so the controller's validation path is the real
/// one; missing fields become empty strings and fail validation there.
fn form_from_tokens(kind: &str, fields: &[&str]) -> Option<WorkoutForm> {
    let field = |i: usize| fields.get(i).copied().unwrap_or("");

    match kind {
        "running" => Some(WorkoutForm::running(field(0), field(1), field(2))),
        "cycling" => Some(WorkoutForm::cycling(field(0), field(1), field(2))),
        _ => None,
    }
}
