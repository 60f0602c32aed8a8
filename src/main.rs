//! Rockfall entry point
//!
//! Headless native runner: plays a session on autopilot and logs the
//! survival time. Rendering and input belong to the embedding frontend.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use rockfall::sim::{Field, GameEvent, GameState, TickInput, tick};
    use rockfall::{HudView, Tuning};

    /// Stop a lucky autopilot after ten minutes of game time
    const MAX_FRAMES: u64 = 10 * 60 * 60;

    env_logger::init();
    log::info!("Rockfall (headless) starting...");

    let tuning = match std::env::var_os("ROCKFALL_TUNING").map(PathBuf::from) {
        Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring tuning file {}: {}", path.display(), e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(tuning, Field::new(800.0, 600.0), seed);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut destroyed = 0u32;
    while !state.is_game_over() && state.frame_count < MAX_FRAMES {
        tick(&mut state, &input);
        for event in state.drain_events() {
            log::trace!("{:?}", event);
            if matches!(event, GameEvent::EnemyDestroyed { .. }) {
                destroyed += 1;
            }
        }
    }

    let hud = HudView::from_state(&state);
    match &hud.game_over {
        Some(report) => log::info!(
            "{} - {} ({} enemies destroyed)",
            report.headline,
            report.record,
            destroyed
        ),
        None => log::info!(
            "Autopilot survived: {} ({} enemies destroyed)",
            hud.elapsed,
            destroyed
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds are driven by the embedding frontend
}
