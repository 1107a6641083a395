//! Circle Royale headless entry point
//!
//! Runs one round and prints the final frame as JSON. Without a settings file
//! the autopilot steers; with one, its `autopilot` flag decides. Usage: `circle-royale [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use circle_royale::consts::FRAME_RATE;
    use circle_royale::renderer::{Frame, HudLog};
    use circle_royale::{Session, Settings};

    env_logger::init();
    log::info!("Circle Royale (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings {
            autopilot: true,
            ..Default::default()
        },
    };

    let mut session = Session::new(&settings);
    let mut hud = HudLog::new();
    let frames = session.run_to_end(&mut hud, settings.max_frames);

    match session.round.outcome {
        Some(outcome) => log::info!(
            "Finished in {frames} frames (~{:.1}s of play): {outcome:?}",
            frames as f64 / FRAME_RATE as f64
        ),
        None => log::warn!(
            "Frame cap of {} reached with {} circles still alive",
            settings.max_frames,
            session.round.alive_count
        ),
    }

    match serde_json::to_string_pretty(&Frame::capture(&session.round)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize final frame: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page drives `Session::frame` directly
}
