//! Triangle tessellation for 2D primitives
//!
//! Every function appends to a caller-owned list so a frame is one buffer.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segments used for a full ellipse
pub const ELLIPSE_SEGMENTS: u32 = 24;

/// Axis-aligned rectangle from its top-left corner
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    gradient_rect(out, min, size, color, color);
}

/// Rectangle shaded from `top` to `bottom`
pub fn gradient_rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) {
    let max = min + size;
    out.extend_from_slice(&[
        Vertex::new(min.x, min.y, top),
        Vertex::new(max.x, min.y, top),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(max.x, min.y, top),
        Vertex::new(max.x, max.y, bottom),
    ]);
}

/// Filled ellipse with radii `radii`, rotated by `rotation` radians
pub fn ellipse(out: &mut Vec<Vertex>, center: Vec2, radii: Vec2, rotation: f32, color: [f32; 4]) {
    let rot = Vec2::from_angle(rotation);
    let point = |i: u32| {
        let theta = i as f32 / ELLIPSE_SEGMENTS as f32 * TAU;
        center + rot.rotate(Vec2::new(theta.cos() * radii.x, theta.sin() * radii.y))
    };
    out.reserve((ELLIPSE_SEGMENTS * 3) as usize);
    for i in 0..ELLIPSE_SEGMENTS {
        let a = point(i);
        let b = point(i + 1);
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(a.x, a.y, color));
        out.push(Vertex::new(b.x, b.y, color));
    }
}

pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    ellipse(out, center, Vec2::splat(radius), 0.0, color);
}

/// Single triangle
pub fn triangle(out: &mut Vec<Vertex>, points: [Vec2; 3], color: [f32; 4]) {
    out.extend(points.iter().map(|p| Vertex::new(p.x, p.y, color)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_gradient_colors_follow_rows() {
        let mut out = Vec::new();
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        gradient_rect(&mut out, Vec2::ZERO, Vec2::new(10.0, 10.0), top, bottom);
        for v in &out {
            let expected = if v.position[1] == 0.0 { top } else { bottom };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn test_ellipse_stays_within_radii() {
        let mut out = Vec::new();
        let center = Vec2::new(100.0, 50.0);
        ellipse(&mut out, center, Vec2::new(20.0, 5.0), 0.0, [1.0; 4]);
        assert_eq!(out.len(), (ELLIPSE_SEGMENTS * 3) as usize);
        for v in &out {
            let d = Vec2::from(v.position) - center;
            assert!(d.x.abs() <= 20.0 + 1e-3);
            assert!(d.y.abs() <= 5.0 + 1e-3);
        }
    }

    #[test]
    fn test_rotated_ellipse_swaps_extent() {
        let mut out = Vec::new();
        ellipse(&mut out, Vec2::ZERO, Vec2::new(20.0, 5.0), std::f32::consts::FRAC_PI_2, [1.0; 4]);
        let max_y = out.iter().map(|v| v.position[1].abs()).fold(0.0, f32::max);
        let max_x = out.iter().map(|v| v.position[0].abs()).fold(0.0, f32::max);
        assert!((max_y - 20.0).abs() < 1e-3);
        assert!(max_x <= 5.0 + 1e-3);
    }
}
