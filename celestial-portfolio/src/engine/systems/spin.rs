use bevy::prelude::*;
use std::f32::consts::TAU;

/// Accumulated XYZ Euler angles in radians, each wrapped into `[0, 2π)`.
/// The entity's `Transform::rotation` is rebuilt from these (intrinsic XYZ).
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
#[require(Transform)]
pub struct EulerRotation(pub Vec3);

impl EulerRotation {
    pub fn advance(&mut self, delta: Vec3) {
        self.0 = Vec3::new(
            (self.0.x + delta.x).rem_euclid(TAU),
            (self.0.y + delta.y).rem_euclid(TAU),
            (self.0.z + delta.z).rem_euclid(TAU),
        );
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.0.x, self.0.y, self.0.z)
    }
}

/// Constant Euler increment applied once per frame. Not scaled by frame
/// time, so visual speed follows the display refresh rate.
#[derive(Component, Debug, Clone, Copy)]
#[require(EulerRotation)]
pub struct Spin(pub Vec3);

/// Euler increment applied once per scroll event.
#[derive(Component, Debug, Clone, Copy)]
#[require(EulerRotation)]
pub struct ScrollSpin(pub Vec3);

pub fn spin_system(mut query: Query<(&mut EulerRotation, &Spin)>) {
    for (mut rotation, spin) in &mut query {
        rotation.advance(spin.0);
    }
}

pub fn sync_euler_rotation(
    mut query: Query<(&EulerRotation, &mut Transform), Changed<EulerRotation>>,
) {
    for (rotation, mut transform) in &mut query {
        transform.rotation = rotation.to_quat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::animation::TORUS_SPIN;

    fn spin_app() -> App {
        let mut app = App::new();
        app.add_systems(Update, (spin_system, sync_euler_rotation).chain());
        app
    }

    fn assert_angle(actual: f32, expected: f32) {
        assert_angle_within(actual, expected, 1e-4);
    }

    fn assert_angle_within(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn torus_angle_accumulates_per_frame() {
        let mut app = spin_app();
        let torus = app.world_mut().spawn(Spin(TORUS_SPIN)).id();

        for n in 1..=100u32 {
            app.update();
            let rotation = app.world().get::<EulerRotation>(torus).unwrap();
            assert_angle(rotation.0.x, (0.01 * n as f32).rem_euclid(TAU));
        }

        let rotation = app.world().get::<EulerRotation>(torus).unwrap();
        assert_angle(rotation.0.y, 0.5);
        assert_angle(rotation.0.z, 1.0);
    }

    #[test]
    fn angles_wrap_past_full_turn() {
        let mut app = spin_app();
        let torus = app.world_mut().spawn(Spin(TORUS_SPIN)).id();

        for _ in 0..700 {
            app.update();
        }

        // 700 frames * 0.01 = 7.0 rad, one full turn plus 0.7168.
        let rotation = app.world().get::<EulerRotation>(torus).unwrap();
        assert_angle_within(rotation.0.x, 7.0 - TAU, 1e-3);
        assert!(rotation.0.x >= 0.0 && rotation.0.x < TAU);
    }

    #[test]
    fn transform_follows_euler_angles() {
        let mut app = spin_app();
        let entity = app.world_mut().spawn(Spin(Vec3::new(0.0, 0.25, 0.0))).id();

        app.update();
        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        let expected = Quat::from_rotation_y(0.5);
        assert!(transform.rotation.angle_between(expected) < 1e-5);
    }

    #[test]
    fn entities_without_spin_stay_still() {
        let mut app = spin_app();
        let still = app.world_mut().spawn(EulerRotation::default()).id();

        app.update();

        assert_eq!(app.world().get::<EulerRotation>(still).unwrap().0, Vec3::ZERO);
    }
}
