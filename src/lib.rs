//! Rockfall - A falling-rock arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game over)
//! - `tuning`: Data-driven game balance
//! - `hud`: Read-only view of the session for the HUD overlay
//! - `error`: Tuning validation errors

pub mod error;
pub mod hud;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use hud::HudView;
pub use tuning::{EnemyTuning, ShotTuning, Tuning};

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the frame-based timers are tuned for
    pub const FRAMES_PER_SECOND: u64 = 60;

    /// Gap between the player's floor and the bottom of the field
    pub const PLAYER_FLOOR_MARGIN: f32 = 30.0;
    /// Distance from the player's top edge to a freshly fired shot's center
    pub const MUZZLE_GAP: f32 = 40.0;

    /// Blast animation length when the tuning doesn't override it (0.5s)
    pub const DEFAULT_BLAST_FRAMES: u32 = 30;
}

/// Split a frame count into whole seconds and tenths at `FRAMES_PER_SECOND`
#[inline]
pub fn frames_to_seconds(frames: u64) -> (u64, u64) {
    let fps = consts::FRAMES_PER_SECOND;
    (frames / fps, (frames / (fps / 10)) % 10)
}

/// Format a frame count as `S.t` seconds
pub fn format_elapsed(frames: u64) -> String {
    let (secs, tenths) = frames_to_seconds(frames);
    format!("{}.{}", secs, tenths)
}
