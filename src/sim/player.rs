//! The player's creature
//!
//! Sits on the floor of the field, follows the cursor horizontally and fires
//! through the projectile bank it owns.

use glam::Vec2;

use super::geom::{Aabb, Field};
use super::object::{GameObject, SpriteId};
use super::shots::ProjectileBank;
use crate::consts::{MUZZLE_GAP, PLAYER_FLOOR_MARGIN};

#[derive(Debug, Clone)]
pub struct Player {
    pub object: GameObject,
    pub shots: ProjectileBank,
}

impl Player {
    /// Player centered on the floor of `field`
    pub fn new(field: &Field, shots: ProjectileBank) -> Self {
        let size = SpriteId::Player.size();
        let pos = Vec2::new(field.width / 2.0, Self::floor_y(field, size));
        Self {
            object: GameObject::new(SpriteId::Player, pos),
            shots,
        }
    }

    /// Resting center y for a player of `size`
    #[inline]
    pub fn floor_y(field: &Field, size: Vec2) -> f32 {
        field.height - size.y / 2.0 - PLAYER_FLOOR_MARGIN
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.object.pos
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.object.bounds()
    }

    /// Overwrite the position. No clamping: cursor input is already canvas-bound.
    pub fn set_position(&mut self, pos: Vec2) {
        self.object.pos = pos;
    }

    /// Follow the cursor's x on the floor of the field
    pub fn track_cursor(&mut self, cursor_x: f32, field: &Field) {
        let y = Self::floor_y(field, self.object.size);
        self.set_position(Vec2::new(cursor_x, y));
    }

    /// Where a fresh shot appears: just above the player's head
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.object.pos.x, self.object.top() - MUZZLE_GAP)
    }

    /// Fire from the muzzle on session frame `frame`. `None` when the bank
    /// is empty.
    pub fn fire(&mut self, frame: u64) -> Option<u32> {
        let muzzle = self.muzzle();
        self.shots.fire(muzzle, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::ShotTuning;

    fn player() -> Player {
        Player::new(
            &Field::new(800.0, 600.0),
            ProjectileBank::new(&ShotTuning::default()),
        )
    }

    #[test]
    fn test_starts_centered_on_floor() {
        let player = player();
        // 600 - 151/2 - 30
        assert_eq!(player.pos(), Vec2::new(400.0, 494.5));
    }

    #[test]
    fn test_track_cursor_keeps_floor() {
        let mut player = player();
        let field = Field::new(800.0, 600.0);
        player.track_cursor(123.0, &field);
        assert_eq!(player.pos(), Vec2::new(123.0, 494.5));
    }

    #[test]
    fn test_set_position_is_unclamped() {
        let mut player = player();
        player.set_position(Vec2::new(-50.0, 10.0));
        assert_eq!(player.pos(), Vec2::new(-50.0, 10.0));
    }

    #[test]
    fn test_fire_spawns_at_muzzle() {
        let mut player = player();
        let id = player.fire(0).unwrap();
        let shot = &player.shots.projectiles()[0];
        assert_eq!(shot.id, id);
        // top = 494.5 - 75.5 = 419, minus the muzzle gap
        assert_eq!(shot.pos(), Vec2::new(400.0, 379.0));
        assert_eq!(player.shots.count(), 5);
    }

    #[test]
    fn test_fire_delegates_denial() {
        let mut player = player();
        for _ in 0..6 {
            player.fire(0);
        }
        assert_eq!(player.fire(0), None);
        assert_eq!(player.shots.projectiles().len(), 6);
    }
}
