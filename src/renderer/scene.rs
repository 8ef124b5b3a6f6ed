//! Frame composition
//!
//! Turns a `WorldSnapshot` plus the level's scenery into one triangle list
//! in logical screen coordinates, back to front. Sprites whose asset is not
//! ready are skipped; shadows and wings are procedural and always drawn.

use glam::Vec2;

use super::shapes::{circle, ellipse, gradient_rect, rect, triangle};
use super::vertex::{Vertex, colors, with_alpha};
use crate::consts::*;
use crate::input::VirtualJoystick;
use crate::platform::{Asset, AssetStatus};
use crate::sim::level::{CompanionKind, EnemyKind};
use crate::sim::player::Facing;
use crate::sim::scenery::{CLOUD_PARALLAX, FG_PARALLAX, GrassTuft, Scenery};
use crate::sim::snapshot::{CompanionView, EnemyView, PlayerView};
use crate::sim::WorldSnapshot;

const BG_TUFT_SIZE: f32 = 120.0;
const FG_TUFT_SIZE: f32 = 240.0;
const FG_TUFT_ALPHA: f32 = 0.66;
/// Background tufts near a tree sink this far
const NEAR_TREE_DROP: f32 = 60.0;
/// Tree trunks end this share of the way into the ground band
const TREE_ROOT_DEPTH: f32 = 0.25;
const TREE_WIDTH_RATIO: f32 = 0.25;
/// Friends' shadows fade out over this distance
const FRIEND_SHADOW_FADE: f32 = 300.0;
const KNOB_RADIUS: f32 = 20.0;

/// Whether the player sprite is hidden this frame by the damage blink
pub fn blink_hidden(player: &PlayerView) -> bool {
    player.damaged && (player.damage_timer * 10.0).floor() as i64 % 2 == 0
}

/// Build the frame's vertices
pub fn build(
    snapshot: &WorldSnapshot,
    scenery: &Scenery,
    assets: &impl AssetStatus,
    joystick: Option<&VirtualJoystick>,
) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(8192);
    let cam = snapshot.camera_x;

    sky_and_ground(&mut out, scenery, cam);
    if assets.is_ready(Asset::Tree) {
        for tree in &scenery.trees {
            draw_tree(&mut out, tree.x - cam, tree.scale);
        }
    }
    if assets.is_ready(Asset::Grass) {
        let base_y = GRASS_Y - BG_TUFT_SIZE * 0.45;
        for tuft in &scenery.background_grass {
            let drop = if scenery.tuft_near_tree(tuft) { NEAR_TREE_DROP } else { 0.0 };
            draw_tuft(&mut out, tuft, tuft.x - cam, base_y + drop, BG_TUFT_SIZE, colors::TUFT);
        }
    }

    let hive_x = snapshot.hive_pos.x - cam;
    if assets.is_ready(Asset::Hive) && on_screen(hive_x, snapshot.hive_size.x) {
        draw_hive(&mut out, Vec2::new(hive_x, snapshot.hive_pos.y), snapshot.hive_size);
    }
    for friend in &snapshot.companions {
        draw_companion(&mut out, friend, cam, assets.is_ready(Asset::Friend));
    }
    for enemy in &snapshot.enemies {
        let asset = match enemy.kind {
            EnemyKind::Frog => Asset::Frog,
            EnemyKind::Boss => Asset::Boss,
        };
        draw_enemy(&mut out, enemy, cam, assets.is_ready(asset));
    }
    draw_player(&mut out, &snapshot.player, cam, assets.is_ready(Asset::Andrea));

    if assets.is_ready(Asset::Grass) {
        let base_y = VIEW_H - FG_TUFT_SIZE * 0.7;
        let color = with_alpha(colors::TUFT, FG_TUFT_ALPHA);
        for tuft in &scenery.foreground_grass {
            draw_tuft(&mut out, tuft, tuft.x - cam * FG_PARALLAX, base_y, FG_TUFT_SIZE, color);
        }
    }

    if let Some(stick) = joystick.filter(|s| s.is_active()) {
        circle(&mut out, stick.base, stick.radius, colors::STICK_BASE);
        circle(&mut out, stick.knob, KNOB_RADIUS, colors::STICK_KNOB);
    }
    if snapshot.level_complete {
        rect(&mut out, Vec2::ZERO, Vec2::new(VIEW_W, VIEW_H), colors::OVERLAY);
    }
    out
}

fn on_screen(x: f32, margin: f32) -> bool {
    x > -margin && x < VIEW_W + margin
}

fn sky_and_ground(out: &mut Vec<Vertex>, scenery: &Scenery, cam: f32) {
    gradient_rect(out, Vec2::ZERO, Vec2::new(VIEW_W, GRASS_Y), colors::SKY_TOP, colors::SKY_HORIZON);
    for cloud in &scenery.clouds {
        let x = (cloud.x - cam * CLOUD_PARALLAX).rem_euclid(WORLD_W) - WORLD_W * 0.1;
        if on_screen(x, cloud.w) {
            let center = Vec2::new(x + cloud.w / 2.0, cloud.y);
            ellipse(out, center, Vec2::new(cloud.w, cloud.h) / 2.0, 0.0, colors::CLOUD);
        }
    }
    gradient_rect(
        out,
        Vec2::new(0.0, GRASS_Y),
        Vec2::new(VIEW_W, VIEW_H - GRASS_Y),
        colors::GRASS_TOP,
        colors::GRASS_BOTTOM,
    );
}

/// Trunk from the top of the screen down into the ground, canopy blobs along it
fn draw_tree(out: &mut Vec<Vertex>, x: f32, scale: f32) {
    let base_y = GRASS_Y + (VIEW_H - GRASS_Y) * TREE_ROOT_DEPTH;
    let width = base_y * TREE_WIDTH_RATIO * scale;
    if !on_screen(x, width) {
        return;
    }
    let trunk_w = width * 0.3;
    rect(out, Vec2::new(x - trunk_w / 2.0, 0.0), Vec2::new(trunk_w, base_y), colors::TRUNK);
    let mut y = base_y - width * 1.2;
    while y > -width * 0.5 {
        ellipse(out, Vec2::new(x, y), Vec2::new(width * 0.55, width * 0.45), 0.0, colors::CANOPY);
        y -= width * 0.7;
    }
}

/// A few blades rising from the tuft's bottom edge
fn draw_tuft(out: &mut Vec<Vertex>, tuft: &GrassTuft, x: f32, top_y: f32, size: f32, color: [f32; 4]) {
    if !on_screen(x, size) {
        return;
    }
    let w = size * tuft.scale;
    let bottom = top_y + tuft.y_offset + w;
    let blade = w / 5.0;
    for (i, height) in [0.55, 0.85, 1.0, 0.75, 0.5].into_iter().enumerate() {
        let left = x + i as f32 * blade;
        let lean = (i as f32 - 2.0) * blade * 0.4;
        triangle(
            out,
            [
                Vec2::new(left, bottom),
                Vec2::new(left + blade, bottom),
                Vec2::new(left + blade / 2.0 + lean, bottom - w * height),
            ],
            color,
        );
    }
}

fn draw_hive(out: &mut Vec<Vertex>, center: Vec2, size: Vec2) {
    let half = size / 2.0;
    ellipse(out, center, Vec2::new(half.x * 0.8, half.y), 0.0, colors::HIVE);
    for band in [-0.5f32, 0.0, 0.5] {
        let y = center.y + band * half.y;
        let w = half.x * 0.8 * (1.0 - band * band).sqrt();
        rect(out, Vec2::new(center.x - w, y - 3.0), Vec2::new(w * 2.0, 6.0), colors::HIVE_BAND);
    }
    ellipse(out, center + Vec2::new(0.0, half.y * 0.55), Vec2::new(14.0, 10.0), 0.0, colors::HIVE_DOOR);
}

/// Shadow ellipse on the ground line, fading with height
fn ground_shadow(out: &mut Vec<Vertex>, x: f32, y: f32, radii: Vec2, alpha: f32) {
    ellipse(out, Vec2::new(x, y), radii, 0.0, with_alpha(colors::SHADOW, alpha));
}

/// Rotated wing attached at `pivot` (sprite-local), mirrored when `flip`
struct Wing {
    pivot: Vec2,
    angle: f32,
    center: Vec2,
    radii: Vec2,
    tilt: f32,
}

fn draw_wing(out: &mut Vec<Vertex>, origin: Vec2, flip: bool, wing: Wing, color: [f32; 4]) {
    let start = out.len();
    let center = wing.pivot + Vec2::from_angle(wing.angle).rotate(wing.center);
    ellipse(out, center, wing.radii, wing.angle + wing.tilt, color);
    to_world(&mut out[start..], origin, flip);
}

/// Move sprite-local vertices to `origin`, mirroring horizontally if asked
fn to_world(verts: &mut [Vertex], origin: Vec2, flip: bool) {
    let sign = if flip { -1.0 } else { 1.0 };
    for v in verts {
        v.position = [origin.x + v.position[0] * sign, origin.y + v.position[1]];
    }
}

/// Striped body drawn around the local origin, head toward +x
fn wasp_body(out: &mut Vec<Vertex>, size: Vec2, tint: [f32; 4]) {
    let half = size / 2.0;
    triangle(
        out,
        [
            Vec2::new(-half.x * 0.8, -4.0),
            Vec2::new(-half.x * 0.8, 4.0),
            Vec2::new(-half.x, 0.0),
        ],
        colors::STRIPE,
    );
    ellipse(out, Vec2::new(-half.x * 0.15, 0.0), Vec2::new(half.x * 0.7, half.y * 0.6), 0.0, tint);
    for dx in [-0.35f32, 0.0] {
        ellipse(out, Vec2::new(dx * half.x, 0.0), Vec2::new(half.x * 0.08, half.y * 0.55), 0.0, colors::STRIPE);
    }
    circle(out, Vec2::new(half.x * 0.6, -half.y * 0.1), half.y * 0.45, tint);
    circle(out, Vec2::new(half.x * 0.75, -half.y * 0.2), half.y * 0.12, colors::EYE);
}

fn draw_player(out: &mut Vec<Vertex>, player: &PlayerView, cam: f32, sprite_ready: bool) {
    let sx = player.pos.x - cam;
    let max_dist = GROUND_Y - PLAYER_H / 2.0;
    let alt = ((GROUND_Y - player.pos.y) / max_dist).clamp(0.0, 1.0);
    let shadow_scale = 0.5 + 0.5 * (1.0 - alt);
    ground_shadow(
        out,
        sx,
        GROUND_Y,
        Vec2::new(PLAYER_W * 0.35, 6.0) * shadow_scale,
        0.1 + 0.3 * (1.0 - alt),
    );

    if blink_hidden(player) {
        return;
    }

    let origin = Vec2::new(sx, player.pos.y);
    let flip = player.facing == Facing::Left;
    if sprite_ready {
        let start = out.len();
        wasp_body(out, Vec2::new(PLAYER_W, PLAYER_H), colors::WASP);
        to_world(&mut out[start..], origin, flip);
    }
    if player.dead {
        return;
    }
    let flap = if player.landed { 0.0 } else { player.wing_phase.sin() };
    draw_wing(
        out,
        origin,
        flip,
        Wing {
            pivot: Vec2::new(-PLAYER_W * 0.15, -PLAYER_H * 0.3),
            angle: -0.3 + flap * 0.6,
            center: Vec2::new(0.0, -10.0),
            radii: Vec2::new(12.0, 18.0),
            tilt: -0.2,
        },
        colors::WING,
    );
    draw_wing(
        out,
        origin,
        flip,
        Wing {
            pivot: Vec2::new(-PLAYER_W * 0.15, -PLAYER_H * 0.15),
            angle: 0.1 - flap * 0.45,
            center: Vec2::new(0.0, -4.0),
            radii: Vec2::new(9.0, 14.0),
            tilt: -0.15,
        },
        colors::WING,
    );
}

fn draw_enemy(out: &mut Vec<Vertex>, enemy: &EnemyView, cam: f32, sprite_ready: bool) {
    let sx = enemy.pos.x - cam;
    if !on_screen(sx, enemy.size.x) {
        return;
    }
    let alt = ((GROUND_Y - enemy.pos.y).max(0.0) / enemy.jump_height).min(1.0);
    let shadow_scale = 0.5 + 0.5 * (1.0 - alt);
    ground_shadow(
        out,
        sx,
        GROUND_Y,
        Vec2::new(enemy.size.x * 0.35, 8.0) * shadow_scale,
        0.1 + 0.25 * (1.0 - alt),
    );
    if !sprite_ready {
        return;
    }

    let half = enemy.size / 2.0;
    let center = Vec2::new(sx, enemy.pos.y);
    let skin = match enemy.kind {
        EnemyKind::Frog => colors::FROG,
        EnemyKind::Boss => colors::BOSS,
    };
    // Legs tucked under a round body, eyes on top
    ellipse(out, center + Vec2::new(0.0, half.y * 0.55), Vec2::new(half.x * 0.9, half.y * 0.25), 0.0, skin);
    ellipse(out, center + Vec2::new(0.0, half.y * 0.1), Vec2::new(half.x * 0.75, half.y * 0.6), 0.0, skin);
    ellipse(out, center + Vec2::new(0.0, half.y * 0.3), Vec2::new(half.x * 0.45, half.y * 0.35), 0.0, colors::FROG_BELLY);
    for side in [-1.0f32, 1.0] {
        let eye = center + Vec2::new(side * half.x * 0.4, -half.y * 0.45);
        circle(out, eye, half.x * 0.2, skin);
        circle(out, eye, half.x * 0.09, colors::EYE);
    }
}

fn friend_tint(kind: CompanionKind) -> [f32; 4] {
    match kind {
        CompanionKind::VillagerOne => [0.980, 0.760, 0.120, 1.0],
        CompanionKind::VillagerTwo => [1.0, 0.690, 0.150, 1.0],
        CompanionKind::Child => [1.0, 0.900, 0.450, 1.0],
        CompanionKind::Queen => [0.950, 0.650, 0.100, 1.0],
    }
}

fn draw_companion(out: &mut Vec<Vertex>, friend: &CompanionView, cam: f32, sprite_ready: bool) {
    let sx = friend.pos.x - cam;
    let size = Vec2::new(FRIEND_W, FRIEND_H) * friend.size_scale;
    if !on_screen(sx, size.x) {
        return;
    }
    let dist = ((friend.shadow_y - friend.pos.y) / FRIEND_SHADOW_FADE).clamp(0.0, 1.0);
    let shadow_scale = 0.4 + 0.4 * (1.0 - dist);
    ground_shadow(
        out,
        sx,
        friend.shadow_y,
        Vec2::new(size.x * 0.3, 5.0) * shadow_scale,
        0.08 + 0.2 * (1.0 - dist),
    );

    let origin = Vec2::new(sx, friend.pos.y);
    if sprite_ready {
        let start = out.len();
        wasp_body(out, size, friend_tint(friend.kind));
        if friend.kind == CompanionKind::Queen {
            let top = Vec2::new(size.x * 0.3, -size.y * 0.35);
            for dx in [-8.0f32, 0.0, 8.0] {
                triangle(
                    out,
                    [
                        top + Vec2::new(dx - 4.0, 0.0),
                        top + Vec2::new(dx + 4.0, 0.0),
                        top + Vec2::new(dx, -10.0),
                    ],
                    colors::QUEEN_CROWN,
                );
            }
        }
        to_world(&mut out[start..], origin, false);
    }

    let flap = friend.wing_phase.sin();
    let s = friend.size_scale * 0.9;
    draw_wing(
        out,
        origin,
        false,
        Wing {
            pivot: Vec2::new(-size.x * 0.15, -size.y * 0.25),
            angle: -0.3 + flap * 0.5,
            center: Vec2::new(0.0, -8.0 * s),
            radii: Vec2::new(10.0, 15.0) * s,
            tilt: -0.2,
        },
        colors::FRIEND_WING,
    );
    draw_wing(
        out,
        origin,
        false,
        Wing {
            pivot: Vec2::new(-size.x * 0.15, -size.y * 0.1),
            angle: 0.1 - flap * 0.4,
            center: Vec2::new(0.0, -3.0 * s),
            radii: Vec2::new(8.0, 12.0) * s,
            tilt: -0.15,
        },
        colors::FRIEND_WING,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Procedural;
    use crate::sim::{GameState, Scenery};

    struct Missing(Asset);

    impl AssetStatus for Missing {
        fn is_ready(&self, asset: Asset) -> bool {
            asset != self.0
        }
    }

    fn frame(level: u32) -> (WorldSnapshot, Scenery) {
        let mut state = GameState::new(level).unwrap();
        let scenery = state.scenery.clone();
        (WorldSnapshot::capture(&mut state), scenery)
    }

    #[test]
    fn test_builds_whole_triangles() {
        let (snap, scenery) = frame(1);
        let verts = build(&snap, &scenery, &Procedural, None);
        assert!(!verts.is_empty());
        assert_eq!(verts.len() % 3, 0);
        // Sky gradient comes first
        assert_eq!(verts[0].color, colors::SKY_TOP);
    }

    #[test]
    fn test_missing_sprite_is_skipped() {
        let (snap, scenery) = frame(1);
        let all = build(&snap, &scenery, &Procedural, None);
        let without = build(&snap, &scenery, &Missing(Asset::Andrea), None);
        assert!(without.len() < all.len());
        assert!(!without.iter().any(|v| v.color == colors::WASP));
    }

    #[test]
    fn test_blink_hides_player() {
        let (mut snap, scenery) = frame(1);
        let visible = build(&snap, &scenery, &Procedural, None);

        snap.player.damaged = true;
        snap.player.damage_timer = 0.85;
        assert!(blink_hidden(&snap.player));
        let hidden = build(&snap, &scenery, &Procedural, None);
        assert!(hidden.len() < visible.len());

        snap.player.damage_timer = 0.95;
        assert!(!blink_hidden(&snap.player));
    }

    #[test]
    fn test_overlay_when_complete() {
        let (mut snap, scenery) = frame(2);
        snap.level_complete = true;
        let verts = build(&snap, &scenery, &Procedural, None);
        assert!(verts[verts.len() - 6..].iter().all(|v| v.color == colors::OVERLAY));
    }

    #[test]
    fn test_joystick_drawn_only_when_active() {
        let (snap, scenery) = frame(1);
        let mut stick = VirtualJoystick::default();
        let idle = build(&snap, &scenery, &Procedural, Some(&stick));
        stick.pointer_down(1, Vec2::new(400.0, 500.0), false);
        let active = build(&snap, &scenery, &Procedural, Some(&stick));
        assert!(active.iter().any(|v| v.color == colors::STICK_KNOB));
        assert!(!idle.iter().any(|v| v.color == colors::STICK_KNOB));
    }
}
