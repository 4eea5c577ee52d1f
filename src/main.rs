//! Replays a scripted input session through the camera controller and
//! writes the resulting pose trace to stdout as JSON.
//!
//! Usage: `hovercam <script.toml> [options.toml]`

use std::io::Write;
use std::path::Path;

use hovercam::replay::ReplayScript;
use hovercam::{HovercamError, Options};

fn run(script_path: &Path, options_path: Option<&Path>) -> Result<(), HovercamError> {
    let options = match options_path {
        Some(path) => {
            let options = Options::load(path)?;
            log::info!("Loaded options '{}'", path.display());
            options
        }
        None => Options::default(),
    };

    let script = ReplayScript::load(script_path)?;
    log::info!(
        "Replaying '{}': {} frames at {:.4}s",
        script_path.display(),
        script.frame_count(),
        script.frame_interval
    );

    let trace = script.run(options);
    if let Some(last) = trace.last() {
        log::info!(
            "Final pose: position {:?}, yaw {:.2}, pitch {:.2}, roll {:.2}",
            last.position,
            last.yaw,
            last.pitch,
            last.roll
        );
    }

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &trace)?;
    writeln!(out)?;
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(script) = args.next() else {
        log::error!("Usage: hovercam <script.toml> [options.toml]");
        std::process::exit(1);
    };
    let options = args.next();

    if let Err(e) = run(Path::new(&script), options.as_deref().map(Path::new)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
