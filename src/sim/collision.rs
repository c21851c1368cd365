//! Collision detection and resolution
//!
//! Hits are found in one pass over the current positions and removed in a
//! second pass. Removing while scanning would shift indices and let a
//! meteor overlapping two bullets be skipped or counted twice.

use super::aabb::Aabb;
use super::bullet::Bullet;
use super::entity::Entity;
use super::meteor::Meteor;
use super::player::Player;

/// A bullet and the meteor it destroyed, as indices into the tick's collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPair {
    pub meteor: usize,
    pub bullet: usize,
}

/// Pair up colliding meteors and bullets.
///
/// Meteors are visited in collection order and each takes the first
/// intersecting bullet that is still unclaimed. Every entity appears in at
/// most one pair.
pub fn find_bullet_hits(bullets: &[Bullet], meteors: &[Meteor]) -> Vec<HitPair> {
    let mut claimed = vec![false; bullets.len()];
    let bullet_boxes: Vec<Aabb> = bullets.iter().map(Entity::collider).collect();
    let mut hits = Vec::new();

    for (m, meteor) in meteors.iter().enumerate() {
        let meteor_box = meteor.collider();
        let hit = bullet_boxes
            .iter()
            .enumerate()
            .find(|(b, bullet_box)| !claimed[*b] && bullet_box.intersects(&meteor_box))
            .map(|(b, _)| b);

        if let Some(b) = hit {
            claimed[b] = true;
            hits.push(HitPair { meteor: m, bullet: b });
        }
    }

    hits
}

/// Remove every paired bullet and meteor. Returns the destroyed meteors in
/// collection order.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, meteors: &mut Vec<Meteor>) -> Vec<Meteor> {
    let hits = find_bullet_hits(bullets, meteors);
    if hits.is_empty() {
        return Vec::new();
    }

    let mut bullet_dead = vec![false; bullets.len()];
    let mut meteor_dead = vec![false; meteors.len()];
    for hit in &hits {
        bullet_dead[hit.bullet] = true;
        meteor_dead[hit.meteor] = true;
    }

    sweep(bullets, &bullet_dead);
    let (destroyed, survivors): (Vec<_>, Vec<_>) = std::mem::take(meteors)
        .into_iter()
        .zip(meteor_dead)
        .partition(|(_, dead)| *dead);
    *meteors = survivors.into_iter().map(|(m, _)| m).collect();

    destroyed.into_iter().map(|(m, _)| m).collect()
}

/// Index of the first meteor touching the player, if any
pub fn player_hit(player: &Player, meteors: &[Meteor]) -> Option<usize> {
    let player_box = player.collider();
    meteors
        .iter()
        .position(|meteor| meteor.collider().intersects(&player_box))
}

/// Drop entities whose collider no longer overlaps `bounds`. Returns how many were removed.
pub fn cull_outside<T: Entity>(entities: &mut Vec<T>, bounds: &Aabb) -> usize {
    let before = entities.len();
    entities.retain(|e| e.collider().intersects(bounds));
    before - entities.len()
}

fn sweep<T>(items: &mut Vec<T>, dead: &[bool]) {
    let mut flags = dead.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}
