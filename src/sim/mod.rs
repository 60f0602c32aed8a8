//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per rendered frame
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemies;
pub mod geom;
pub mod object;
pub mod player;
pub mod rng;
pub mod shots;
pub mod state;
pub mod status;
pub mod tick;

pub use collision::{Contact, find_projectile_hit, resolve_contact};
pub use enemies::{Archetype, Enemy, EnemyState, EnemyWave, WaveContext, sample_drift};
pub use geom::{Aabb, Field, Range};
pub use object::{GameObject, SpriteId};
pub use player::Player;
pub use rng::RandomSource;
pub use shots::{Projectile, ProjectileBank};
pub use state::{GameEvent, GameState};
pub use status::GameOverFlag;
pub use tick::{TickInput, is_terminal, tick};
