//! Player projectile bank
//!
//! Holds the live shots plus the limited, regenerating ammo count. A single
//! regeneration timer runs while the bank is below capacity; it tracks the
//! oldest missing shot and restarts after each shot it restores.

use glam::Vec2;

use super::geom::{Aabb, Field};
use super::object::{GameObject, SpriteId};
use super::status::GameOverFlag;
use crate::tuning::ShotTuning;

/// A shot travelling straight up
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub object: GameObject,
    /// Session frame the shot was fired on
    pub created_at_frame: u64,
    pub active: bool,
}

impl Projectile {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.object.pos
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.object.bounds()
    }
}

/// Live projectiles and the fire-cooldown/regeneration state
#[derive(Debug, Clone)]
pub struct ProjectileBank {
    capacity: u32,
    count: u32,
    regen_timer: u32,
    regen_period: u32,
    speed: f32,
    /// Sorted by id (fire order)
    projectiles: Vec<Projectile>,
    next_id: u32,
}

impl ProjectileBank {
    /// A full bank
    pub fn new(tuning: &ShotTuning) -> Self {
        Self {
            capacity: tuning.capacity,
            count: tuning.capacity,
            regen_timer: 0,
            regen_period: tuning.regen_period,
            speed: tuning.speed,
            projectiles: Vec::new(),
            next_id: 1,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Shots available to fire
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn regen_timer(&self) -> u32 {
        self.regen_timer
    }

    pub fn regen_period(&self) -> u32 {
        self.regen_period
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }

    /// Live shots in fire order
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Frames until the next shot is restored. Reads a full period when full.
    pub fn time_until_next_regen(&self) -> u32 {
        self.regen_period.saturating_sub(self.regen_timer)
    }

    /// Fire one shot centered at `muzzle` on session frame `frame`.
    ///
    /// An empty bank denies the shot and nothing changes. Returns the new
    /// projectile's id.
    pub fn fire(&mut self, muzzle: Vec2, frame: u64) -> Option<u32> {
        if self.count == 0 {
            return None;
        }

        // Leaving the full state starts the regeneration clock
        if self.is_full() {
            self.regen_timer = 0;
        }
        self.count -= 1;

        let id = self.next_id;
        self.next_id += 1;
        self.projectiles.push(Projectile {
            id,
            object: GameObject::new(SpriteId::PlayerShot, muzzle),
            created_at_frame: frame,
            active: true,
        });
        Some(id)
    }

    /// One frame: move shots, expire those past the top edge, regenerate
    pub fn advance(&mut self, field: &Field, status: &GameOverFlag) {
        if status.is_set() {
            return;
        }

        let step = Vec2::new(0.0, -self.speed);
        for shot in &mut self.projectiles {
            shot.object.pos += step;
            if field.is_above(&shot.bounds()) {
                shot.active = false;
            }
        }
        self.projectiles.retain(|shot| shot.active);

        if self.count < self.capacity {
            self.regen_timer += 1;
            if self.regen_timer >= self.regen_period {
                self.count = (self.count + 1).min(self.capacity);
                self.regen_timer = 0;
            }
        }
    }

    /// Remove a shot that struck something. Returns false if it wasn't live.
    pub fn consume(&mut self, id: u32) -> bool {
        let before = self.projectiles.len();
        self.projectiles.retain(|shot| shot.id != id);
        self.projectiles.len() != before
    }
}
