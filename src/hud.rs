//! HUD overlay data
//!
//! Everything the renderer prints on top of the play field, derived from a
//! session without touching it.

use serde::Serialize;

use crate::consts::FRAMES_PER_SECOND;
use crate::format_elapsed;
use crate::sim::GameState;

/// End-of-game report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameOverReport {
    /// Frames survived
    pub frames: u64,
    pub headline: &'static str,
    /// e.g. "Record: 12.3s"
    pub record: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudView {
    /// e.g. "Elapsed: 4.5s"
    pub elapsed: String,
    /// One entry per shot of capacity; true while that shot is loaded
    pub ammo_slots: Vec<bool>,
    /// Seconds until the next shot regenerates, only while not full
    pub regen_text: Option<String>,
    pub game_over: Option<GameOverReport>,
}

impl HudView {
    pub fn from_state<R>(state: &GameState<R>) -> Self {
        let shots = &state.player.shots;
        let ammo_slots = (0..shots.capacity()).map(|i| i < shots.count()).collect();

        let regen_text = (!shots.is_full()).then(|| {
            let secs = shots.time_until_next_regen() as f64 / FRAMES_PER_SECOND as f64;
            format!("{}s", one_significant_digit(secs))
        });

        let game_over = state.status.latched_at().map(|frames| GameOverReport {
            frames,
            headline: "Game Over",
            record: format!("Record: {}s", format_elapsed(frames)),
        });

        Self {
            elapsed: format!("Elapsed: {}s", format_elapsed(state.frame_count)),
            ammo_slots,
            regen_text,
            game_over,
        }
    }

    /// Loaded shots
    pub fn ammo(&self) -> usize {
        self.ammo_slots.iter().filter(|loaded| **loaded).count()
    }
}

/// Round to a single significant digit: 1, 0.5, 0.05
fn one_significant_digit(value: f64) -> String {
    if !(value > 0.0) {
        return "0".to_string();
    }
    let mut exp = value.log10().floor() as i32;
    // Scale by exact powers of ten so 0.25 rounds up to 0.3
    let scaled = if exp < 0 {
        value * 10f64.powi(-exp)
    } else {
        value / 10f64.powi(exp)
    };
    let mut digit = scaled.round();
    if digit >= 10.0 {
        digit = 1.0;
        exp += 1;
    }
    if exp < 0 {
        let decimals = (-exp) as usize;
        format!("{:.*}", decimals, digit / 10f64.powi(-exp))
    } else {
        format!("{}", digit * 10f64.powi(exp))
    }
}
