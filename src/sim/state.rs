//! Session state and core simulation types
//!
//! One [`GameState`] per play session. It owns every entity, the game-over
//! latch and the RNG; a restart builds a fresh one.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::enemies::{Archetype, EnemyWave};
use super::geom::Field;
use super::player::Player;
use super::rng::{self, RandomSource};
use super::shots::ProjectileBank;
use super::status::GameOverFlag;
use crate::tuning::Tuning;

/// Something that happened during a tick, for audio/visual cues.
/// The simulation never reads these back.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ShotFired { id: u32, pos: Vec2 },
    EnemySpawned { archetype: Archetype, pos: Vec2 },
    /// Struck by a shot; the enemy is now blasting
    EnemyDestroyed { archetype: Archetype, pos: Vec2 },
    /// Left the field at the bottom
    EnemyDespawned { archetype: Archetype },
    /// Reached the player; the session is over
    PlayerHit { archetype: Archetype, pos: Vec2 },
}

/// Complete session state (deterministic for a given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub tuning: Tuning,
    pub field: Field,
    pub player: Player,
    /// One wave per archetype, advanced in this order
    pub waves: Vec<EnemyWave>,
    pub status: GameOverFlag,
    /// Frames simulated this session
    pub frame_count: u64,
    pub rng: R,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState<Pcg32> {
    /// Create a new session with the given seed
    pub fn new(tuning: Tuning, field: Field, seed: u64) -> Self {
        log::info!(
            "New session: seed={} field={}x{}",
            seed,
            field.width,
            field.height
        );
        Self::with_source(tuning, field, rng::seeded(seed))
    }

    /// Throw the session away and start over
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(self.tuning.clone(), self.field, seed);
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new session drawing randomness from `rng`
    pub fn with_source(tuning: Tuning, field: Field, mut rng: R) -> Self {
        let player = Player::new(&field, ProjectileBank::new(&tuning.player_shots));
        let waves = tuning
            .waves()
            .into_iter()
            .map(|(archetype, wave_tuning)| EnemyWave::new(archetype, wave_tuning, &mut rng))
            .collect();

        Self {
            tuning,
            field,
            player,
            waves,
            status: GameOverFlag::new(),
            frame_count: 0,
            rng,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_set()
    }

    /// Wave for `archetype`
    pub fn wave(&self, archetype: Archetype) -> Option<&EnemyWave> {
        self.waves.iter().find(|w| w.archetype() == archetype)
    }

    pub fn wave_mut(&mut self, archetype: Archetype) -> Option<&mut EnemyWave> {
        self.waves.iter_mut().find(|w| w.archetype() == archetype)
    }

    /// Click/press: fire one shot, stamped with the current frame. Ignored
    /// once the game is over.
    pub fn fire(&mut self) -> Option<u32> {
        if self.is_game_over() {
            return None;
        }
        let id = self.player.fire(self.frame_count)?;
        let pos = self.player.muzzle();
        self.events.push(GameEvent::ShotFired { id, pos });
        Some(id)
    }

    /// Canvas resized: keep the player on the new floor
    pub fn resize(&mut self, field: Field) {
        self.field = field;
        let x = self.player.pos().x;
        self.player.track_cursor(x, &field);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
