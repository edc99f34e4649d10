use super::ray::{ray_obb_hit_t, ray_sphere_hit_t, ray_torus_hit_t};
use bevy::prelude::*;

/// Volume a pointer ray is tested against, in the entity's local frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum PickShape {
    Sphere { radius: f32 },
    Cuboid { size: Vec3 },
    /// Ring in the local XY plane around the Z axis.
    Torus { major_radius: f32, minor_radius: f32 },
}

impl PickShape {
    pub fn intersect(&self, ray: Ray3d, xf: &GlobalTransform) -> Option<f32> {
        let dir = ray.direction.as_vec3();
        match *self {
            PickShape::Sphere { radius } => {
                ray_sphere_hit_t(ray.origin, dir, xf.translation(), radius)
            }
            PickShape::Cuboid { size } => ray_obb_hit_t(ray.origin, dir, xf, size),
            PickShape::Torus {
                major_radius,
                minor_radius,
            } => ray_torus_hit_t(ray.origin, dir, xf, major_radius, minor_radius),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Every shape the ray passes through, nearest first.
pub fn intersect_shapes<'a>(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (Entity, &'a PickShape, &'a GlobalTransform)>,
) -> Vec<PickHit> {
    let mut hits: Vec<PickHit> = candidates
        .into_iter()
        .filter_map(|(entity, shape, xf)| {
            shape
                .intersect(ray, xf)
                .map(|distance| PickHit { entity, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Ray from the camera through a point in normalized device coordinates.
/// `aspect` is viewport width over height. The camera is unparented, so its
/// `Transform` is its world pose, current even before transform propagation.
pub fn picking_ray(
    ndc: Vec2,
    camera_xf: &Transform,
    projection: &Projection,
    aspect: f32,
) -> Option<Ray3d> {
    let Projection::Perspective(perspective) = projection else {
        return None;
    };

    let tan_half_fov = (perspective.fov * 0.5).tan();
    let view_dir = Vec3::new(ndc.x * tan_half_fov * aspect, ndc.y * tan_half_fov, -1.0);
    let world_dir = camera_xf.compute_affine().transform_vector3(view_dir);

    let direction = Dir3::new(world_dir).ok()?;
    Some(Ray3d::new(camera_xf.translation, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn perspective(fov: f32) -> Projection {
        Projection::Perspective(PerspectiveProjection { fov, ..default() })
    }

    #[test]
    fn centre_ray_looks_down_negative_z() {
        let xf = Transform::from_xyz(1.0, 2.0, 3.0);
        let ray = picking_ray(Vec2::ZERO, &xf, &perspective(1.3), 1.5).unwrap();

        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert!(ray.direction.as_vec3().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn corner_ray_spans_half_fov() {
        // 90 degree vertical fov: the top edge is 45 degrees up.
        let ray = picking_ray(
            Vec2::new(0.0, 1.0),
            &Transform::IDENTITY,
            &perspective(FRAC_PI_2),
            2.0,
        )
        .unwrap();
        let expected = Vec3::new(0.0, 1.0, -1.0).normalize();
        assert!(ray.direction.as_vec3().abs_diff_eq(expected, 1e-5));

        // Horizontal extent scales with aspect.
        let ray = picking_ray(
            Vec2::new(1.0, 0.0),
            &Transform::IDENTITY,
            &perspective(FRAC_PI_2),
            2.0,
        )
        .unwrap();
        let expected = Vec3::new(2.0, 0.0, -1.0).normalize();
        assert!(ray.direction.as_vec3().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn camera_rotation_turns_ray() {
        let xf = Transform::from_rotation(Quat::from_rotation_y(FRAC_PI_2));
        let ray = picking_ray(Vec2::ZERO, &xf, &perspective(1.0), 1.0).unwrap();
        assert!(ray.direction.as_vec3().abs_diff_eq(Vec3::NEG_X, 1e-5));
    }

    #[test]
    fn orthographic_cameras_are_not_supported() {
        let projection = Projection::Orthographic(OrthographicProjection::default_3d());
        assert!(picking_ray(Vec2::ZERO, &Transform::IDENTITY, &projection, 1.0).is_none());
    }

    #[test]
    fn hits_are_sorted_nearest_first() {
        let mut world = World::new();
        let far = world.spawn_empty().id();
        let near = world.spawn_empty().id();
        let missed = world.spawn_empty().id();

        let sphere = PickShape::Sphere { radius: 1.0 };
        let cube = PickShape::Cuboid {
            size: Vec3::splat(2.0),
        };
        let far_xf = GlobalTransform::from_xyz(0.0, 0.0, -20.0);
        let near_xf = GlobalTransform::from_xyz(0.0, 0.0, -5.0);
        let missed_xf = GlobalTransform::from_xyz(10.0, 0.0, -5.0);

        let ray = Ray3d::new(Vec3::ZERO, Dir3::NEG_Z);
        let hits = intersect_shapes(
            ray,
            [
                (far, &sphere, &far_xf),
                (missed, &sphere, &missed_xf),
                (near, &cube, &near_xf),
            ],
        );

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].entity, near);
        assert_eq!(hits[0].distance, 4.0);
        assert_eq!(hits[1].entity, far);
        assert_eq!(hits[1].distance, 19.0);
    }

    #[test]
    fn torus_shape_uses_world_transform() {
        let shape = PickShape::Torus {
            major_radius: 10.0,
            minor_radius: 3.0,
        };
        let xf = GlobalTransform::from_xyz(0.0, 0.0, -30.0);
        let ray = Ray3d::new(Vec3::new(10.0, 0.0, 0.0), Dir3::NEG_Z);
        let t = shape.intersect(ray, &xf).unwrap();
        assert!((t - 27.0).abs() < 1e-2);
    }
}
