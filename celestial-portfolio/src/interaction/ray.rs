use bevy::prelude::*;
use constants::render_settings::{PICK_MAX_DISTANCE, TORUS_PICK_EPSILON, TORUS_PICK_MAX_STEPS};

// Surfaces are single-sided: a ray starting inside a shape does not hit it.

/// Distance along `dir` (unit length) to the near surface of a sphere.
pub fn ray_sphere_hit_t(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_origin = origin - center;
    let b = to_origin.dot(dir);
    let c = to_origin.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let t = -b - discriminant.sqrt();
    (t > 0.0).then_some(t)
}

/// Oriented box test: the ray is moved into the box's local frame and tested
/// against its axis-aligned extents.
pub fn ray_obb_hit_t(origin: Vec3, dir: Vec3, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.affine().inverse();
    let local_origin = inv.transform_point3(origin);
    let local_dir = inv.transform_vector3(dir);
    let half = size * 0.5;
    ray_aabb_hit_t(local_origin, local_dir, -half, half)
}

// Slab method. Axis-parallel rays divide to +-inf and fall out of the min/max.
pub fn ray_aabb_hit_t(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = dir.recip();
    let t1 = (min - origin) * inv;
    let t2 = (max - origin) * inv;

    let t_near = t1.min(t2).max_element();
    let t_far = t1.max(t2).min_element();

    if t_near > t_far || t_near <= 0.0 {
        return None;
    }
    Some(t_near)
}

/// Signed distance to a torus lying in the local XY plane around the Z axis.
pub fn torus_sdf(p: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let ring = Vec2::new(p.truncate().length() - major_radius, p.z);
    ring.length() - minor_radius
}

/// Sphere-traced torus hit, with the ray moved into the torus's local frame.
pub fn ray_torus_hit_t(
    origin: Vec3,
    dir: Vec3,
    xf: &GlobalTransform,
    major_radius: f32,
    minor_radius: f32,
) -> Option<f32> {
    let inv = xf.affine().inverse();
    let local_origin = inv.transform_point3(origin);
    let local_dir = inv.transform_vector3(dir).normalize_or_zero();
    if local_dir == Vec3::ZERO {
        return None;
    }

    if torus_sdf(local_origin, major_radius, minor_radius) <= 0.0 {
        return None;
    }

    let mut t = 0.0;
    for _ in 0..TORUS_PICK_MAX_STEPS {
        let distance = torus_sdf(local_origin + local_dir * t, major_radius, minor_radius);
        if distance < TORUS_PICK_EPSILON {
            return (t > 0.0).then_some(t);
        }
        t += distance;
        if t > PICK_MAX_DISTANCE {
            break;
        }
    }
    None
}
