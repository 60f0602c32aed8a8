//! Enemy waves
//!
//! One [`EnemyWave`] per archetype. Rocks and rockets share every rule here
//! and differ only in their [`EnemyTuning`]: speed range, drift slope and
//! spawn interval.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contact, resolve_contact};
use super::geom::{Aabb, Field, Range};
use super::object::{GameObject, SpriteId};
use super::player::Player;
use super::rng::RandomSource;
use super::state::GameEvent;
use super::status::GameOverFlag;
use crate::tuning::EnemyTuning;

/// Enemy category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Rock,
    Rocket,
}

impl Archetype {
    pub fn sprite(&self) -> SpriteId {
        match self {
            Archetype::Rock => SpriteId::Rock,
            Archetype::Rocket => SpriteId::Rocket,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Rock => "rock",
            Archetype::Rocket => "rocket",
        }
    }
}

/// Falling, or showing its blast after being shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    Falling,
    /// Inert: no motion, no collisions
    Blasting { frames_remaining: u32 },
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub object: GameObject,
    /// Pixels per frame
    pub vel: Vec2,
    pub state: EnemyState,
}

impl Enemy {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.object.pos
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.object.bounds()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == EnemyState::Falling
    }

    pub fn blast_frames_remaining(&self) -> u32 {
        match self.state {
            EnemyState::Falling => 0,
            EnemyState::Blasting { frames_remaining } => frames_remaining,
        }
    }

    fn start_blast(&mut self, frames: u32) {
        self.object.set_sprite(SpriteId::Blast);
        self.state = EnemyState::Blasting {
            frames_remaining: frames,
        };
    }
}

/// Horizontal speed for a fall speed `vy`: `vy * tan(theta)` with theta
/// uniform in `[-atan(max_slope), atan(max_slope)]`, so `|vx| <= vy * max_slope`.
pub fn sample_drift<R: RandomSource + ?Sized>(vy: f32, max_slope: f32, rng: &mut R) -> f32 {
    let limit = max_slope.atan();
    let theta = rng.uniform_f32(-limit, limit);
    let bound = (vy * max_slope).abs();
    (vy * theta.tan()).clamp(-bound, bound)
}

/// Everything outside the wave that one frame of it reads or writes
pub struct WaveContext<'a, R: RandomSource + ?Sized> {
    pub field: &'a Field,
    pub player: &'a mut Player,
    pub status: &'a mut GameOverFlag,
    /// Session frame being simulated
    pub frame: u64,
    pub rng: &'a mut R,
    pub events: &'a mut Vec<GameEvent>,
}

/// Live enemies of one archetype plus their spawn scheduler
#[derive(Debug, Clone)]
pub struct EnemyWave {
    archetype: Archetype,
    /// Sorted by id (spawn order)
    enemies: Vec<Enemy>,
    next_spawn_countdown: u32,
    spawn_interval: Range<u32>,
    speed_y: Range<f32>,
    max_slope: f32,
    blast_frames: u32,
    next_id: u32,
}

impl EnemyWave {
    /// Empty wave with its first countdown drawn from the spawn interval
    pub fn new<R: RandomSource + ?Sized>(
        archetype: Archetype,
        tuning: &EnemyTuning,
        rng: &mut R,
    ) -> Self {
        Self {
            archetype,
            enemies: Vec::new(),
            next_spawn_countdown: tuning.spawn_interval.sample(rng),
            spawn_interval: tuning.spawn_interval,
            speed_y: tuning.speed_y,
            max_slope: tuning.max_slope,
            blast_frames: tuning.blast_frames,
            next_id: 1,
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Live and blasting enemies in spawn order
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn next_spawn_countdown(&self) -> u32 {
        self.next_spawn_countdown
    }

    pub fn spawn_interval(&self) -> Range<u32> {
        self.spawn_interval
    }

    pub fn speed_y(&self) -> Range<f32> {
        self.speed_y
    }

    pub fn max_slope(&self) -> f32 {
        self.max_slope
    }

    /// Place an enemy directly (scripted openings, replays)
    pub fn spawn_at(&mut self, pos: Vec2, vel: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.enemies.push(Enemy {
            id,
            object: GameObject::new(self.archetype.sprite(), pos),
            vel,
            state: EnemyState::Falling,
        });
        id
    }

    /// Spawn one enemy just above the top edge with a random column, fall
    /// speed and drift
    pub fn spawn<R: RandomSource + ?Sized>(&mut self, field: &Field, rng: &mut R) -> u32 {
        let size = self.archetype.sprite().size();
        let x = rng.uniform_f32(0.0, field.width);
        let vy = self.speed_y.sample(rng);
        let vx = sample_drift(vy, self.max_slope, rng);
        let pos = Vec2::new(x, -size.y / 2.0);
        let id = self.spawn_at(pos, Vec2::new(vx, vy));
        log::debug!(
            "Spawned {} #{} at x={:.1} vel=({:.2}, {:.2})",
            self.archetype.as_str(),
            id,
            x,
            vx,
            vy
        );
        id
    }

    /// One frame: update every enemy, then run the spawn countdown.
    ///
    /// Does nothing once the game-over latch is closed. An enemy that closes
    /// it freezes the rest of the wave for the remainder of the frame.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, ctx: &mut WaveContext<'_, R>) {
        if ctx.status.is_set() {
            return;
        }

        let archetype = self.archetype;
        let blast_frames = self.blast_frames;
        self.enemies.retain_mut(|enemy| match enemy.state {
            _ if ctx.status.is_set() => true,
            EnemyState::Blasting { frames_remaining } => {
                let frames_remaining = frames_remaining.saturating_sub(1);
                enemy.state = EnemyState::Blasting { frames_remaining };
                frames_remaining > 0
            }
            EnemyState::Falling => {
                enemy.object.pos += enemy.vel;
                let bounds = enemy.bounds();

                match resolve_contact(&bounds, ctx.player) {
                    Contact::Shot(shot_id) => {
                        ctx.player.shots.consume(shot_id);
                        enemy.start_blast(blast_frames);
                        ctx.events.push(GameEvent::EnemyDestroyed {
                            archetype,
                            pos: enemy.pos(),
                        });
                        true
                    }
                    Contact::Player => {
                        if ctx.status.latch(ctx.frame) {
                            log::info!(
                                "{} #{} reached the player on frame {}",
                                archetype.as_str(),
                                enemy.id,
                                ctx.frame
                            );
                        }
                        ctx.events.push(GameEvent::PlayerHit {
                            archetype,
                            pos: enemy.pos(),
                        });
                        false
                    }
                    Contact::Clear if ctx.field.is_below(&bounds) => {
                        ctx.events.push(GameEvent::EnemyDespawned { archetype });
                        false
                    }
                    Contact::Clear => true,
                }
            }
        });
        if ctx.status.is_set() {
            return;
        }

        self.next_spawn_countdown = self.next_spawn_countdown.saturating_sub(1);
        if self.next_spawn_countdown == 0 {
            self.spawn(ctx.field, ctx.rng);
            if let Some(enemy) = self.enemies.last() {
                ctx.events.push(GameEvent::EnemySpawned {
                    archetype,
                    pos: enemy.pos(),
                });
            }
            self.next_spawn_countdown = self.spawn_interval.sample(ctx.rng);
        }
    }
}
