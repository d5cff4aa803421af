//! Demo binary: runs the scripted gesture scenarios and prints the
//! presenter panel after each one.
//!
//! Timings come from the optional settings file (see the `settings`
//! module), or from the path in `GESTUREBUTTON_SETTINGS` when set. The
//! demo button keeps its own longer long-press delay so the hold scenario
//! reads clearly.

use std::path::PathBuf;

use anyhow::Context as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gesturebutton::constants::DEMO_LONG_PRESS_DELAY;
use gesturebutton::demo;
use gesturebutton::settings::GestureSettings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match std::env::var_os("GESTUREBUTTON_SETTINGS") {
        Some(path) => {
            let path = PathBuf::from(path);
            GestureSettings::load_from(&path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?
        }
        None => GestureSettings::load(),
    };
    let config = settings
        .to_config()
        .with_long_press_delay(DEMO_LONG_PRESS_DELAY);
    info!(?config, "running gesture demo");

    for (name, button) in demo::run_all(config) {
        println!("== {name} ==");
        print!("{}", button.summary());
        println!();
    }
    Ok(())
}
