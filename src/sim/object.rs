//! Positioned, sized, renderable entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;

/// Sprite the renderer should draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Player,
    PlayerShot,
    Rock,
    Rocket,
    /// Shared by every destroyed enemy
    Blast,
}

impl SpriteId {
    /// Asset name the renderer loads for this sprite
    pub fn asset_name(&self) -> &'static str {
        match self {
            SpriteId::Player => "player",
            SpriteId::PlayerShot => "player_shot_sm",
            SpriteId::Rock => "rock",
            SpriteId::Rocket => "rocket",
            SpriteId::Blast => "blast_enemy",
        }
    }

    /// Nominal on-screen size in pixels
    pub fn size(&self) -> Vec2 {
        match self {
            SpriteId::Player => Vec2::new(120.0, 151.0),
            SpriteId::PlayerShot => Vec2::new(15.0, 90.0),
            SpriteId::Rock => Vec2::new(40.0, 40.0),
            SpriteId::Rocket => Vec2::new(60.0, 80.0),
            SpriteId::Blast => Vec2::new(110.0, 110.0),
        }
    }
}

/// An entity with a center position, a size and a sprite
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: SpriteId,
}

impl GameObject {
    /// Object at `pos` sized to its sprite
    pub fn new(sprite: SpriteId, pos: Vec2) -> Self {
        Self {
            pos,
            size: sprite.size(),
            sprite,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Swap the sprite and take on its nominal size, keeping the center
    pub fn set_sprite(&mut self, sprite: SpriteId) {
        self.sprite = sprite;
        self.size = sprite.size();
    }
}
