//! Collision resolution between falling enemies, shots and the player
//!
//! Kept as pure functions over bounding boxes and the live shot list so the
//! caller decides what to mutate, in what order.

use super::geom::Aabb;
use super::player::Player;
use super::shots::Projectile;

/// What a falling enemy ran into this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Nothing
    Clear,
    /// Struck by the shot with this id
    Shot(u32),
    /// Reached the player
    Player,
}

/// First active shot (in fire order) whose box overlaps `target`
pub fn find_projectile_hit(target: &Aabb, projectiles: &[Projectile]) -> Option<u32> {
    projectiles
        .iter()
        .filter(|shot| shot.active)
        .find(|shot| shot.bounds().overlaps(target))
        .map(|shot| shot.id)
}

/// Resolve an enemy box against the shots and then the player.
///
/// Shots win: an enemy touching both a shot and the player is destroyed and
/// the player survives.
pub fn resolve_contact(target: &Aabb, player: &Player) -> Contact {
    if let Some(id) = find_projectile_hit(target, player.shots.projectiles()) {
        return Contact::Shot(id);
    }
    if player.bounds().overlaps(target) {
        return Contact::Player;
    }
    Contact::Clear
}
