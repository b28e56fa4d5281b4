//! Per-frame motion model.
//!
//! Every function here is a fixed arithmetic step. Positions that must not
//! drift (object height, camera aim) are recomputed from immutable inputs
//! instead of accumulated.

use glam::{Vec2, Vec3};

use crate::scene::{Camera, DecorativeObject, PARTICLE_BOUND, ParticleLayer, PointerState};

/// Fraction of the remaining distance an object covers each frame.
pub const OBJECT_EASE: f32 = 0.08;
/// Fraction of the remaining distance the camera covers each frame.
pub const CAMERA_EASE: f32 = 0.05;

/// Pointer reach along X and Z, multiplied by each object's influence.
pub const POINTER_X_REACH: f32 = 2.0;
pub const POINTER_Z_REACH: f32 = 1.0;

/// Pointer scale when measuring object proximity.
pub const GLOW_POINTER_SCALE: f32 = 10.0;
/// Distance at which the proximity glow fades out completely.
pub const GLOW_RADIUS: f32 = 15.0;
/// Glow added at zero distance.
pub const GLOW_STRENGTH: f32 = 0.3;

/// Pointer scale in particle space.
pub const PARTICLE_POINTER_SCALE: f32 = 20.0;
/// Particles closer than this to the pointer are pulled toward it.
pub const PARTICLE_ATTRACT_RADIUS: f32 = 10.0;
/// Fraction of the pointer offset added to a nearby particle's velocity.
pub const PARTICLE_ATTRACTION: f32 = 0.0001;
/// Amplitude of the per-particle vertical wobble.
pub const PARTICLE_WOBBLE: f32 = 0.005;

/// Per-frame layer spin, multiplied by `index + 1`.
pub const LAYER_SPIN_Y: f32 = 0.0005;
pub const LAYER_SPIN_X: f32 = 0.0002;

/// Pointer scale for the camera drift.
pub const CAMERA_POINTER_SCALE: f32 = 2.0;

/// Move `current` a `factor` of the way toward `target`.
pub fn ease(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Wrap a coordinate that left `-PARTICLE_BOUND..=PARTICLE_BOUND` to the
/// opposite boundary.
pub fn wrap(v: f32) -> f32 {
    if v > PARTICLE_BOUND {
        -PARTICLE_BOUND
    } else if v < -PARTICLE_BOUND {
        PARTICLE_BOUND
    } else {
        v
    }
}

/// Where the pointer pulls an object on the XZ plane.
pub fn pointer_target(obj: &DecorativeObject, pointer: PointerState) -> Vec2 {
    let origin = obj.origin();
    Vec2::new(
        origin.x + pointer.x * obj.mouse_influence * POINTER_X_REACH,
        origin.z + pointer.y * obj.mouse_influence * POINTER_Z_REACH,
    )
}

/// Glow for an object at `position`: `GLOW_STRENGTH` under the pointer,
/// falling linearly to zero at `GLOW_RADIUS`.
pub fn proximity_glow(pointer: PointerState, position: Vec3) -> f32 {
    let distance = pointer
        .scaled(GLOW_POINTER_SCALE)
        .distance(Vec2::new(position.x, position.y));
    let proximity = (1.0 - distance / GLOW_RADIUS).max(0.0);
    proximity * GLOW_STRENGTH
}

/// Advance one decorative object by a frame.
///
/// Rotation accumulates per call, not per second, so the spin rate follows
/// the frame rate.
pub fn update_object(obj: &mut DecorativeObject, index: usize, t: f32, pointer: PointerState) {
    obj.rotation += obj.rotation_speed;

    let origin = obj.origin();
    obj.position.y = origin.y + (t * obj.float_speed + index as f32).sin() * obj.float_range;

    let target = pointer_target(obj, pointer);
    obj.position.x = ease(obj.position.x, target.x, OBJECT_EASE);
    obj.position.z = ease(obj.position.z, target.y, OBJECT_EASE);

    obj.glow = if obj.flashing {
        0.0
    } else {
        proximity_glow(pointer, obj.position)
    };
}

/// Advance every particle in `layer` by a frame and spin the layer.
pub fn update_layer(layer: &mut ParticleLayer, t: f32, pointer: PointerState) {
    let attractor = pointer.scaled(PARTICLE_POINTER_SCALE);

    for particle in &mut layer.particles {
        let offset = attractor - particle.position.truncate();
        if offset.length() < PARTICLE_ATTRACT_RADIUS {
            particle.velocity.x += offset.x * PARTICLE_ATTRACTION;
            particle.velocity.y += offset.y * PARTICLE_ATTRACTION;
        }

        particle.position += particle.velocity;
        particle.position.y += (t + particle.position.x).sin() * PARTICLE_WOBBLE;
        particle.position = Vec3::new(
            wrap(particle.position.x),
            wrap(particle.position.y),
            wrap(particle.position.z),
        );
    }

    let step = (layer.index + 1) as f32;
    layer.rotation.y += LAYER_SPIN_Y * step;
    layer.rotation.x += LAYER_SPIN_X * step;
}

/// Drift the camera toward the pointer and re-aim it at the origin.
pub fn update_camera(camera: &mut Camera, pointer: PointerState) {
    let target = pointer.scaled(CAMERA_POINTER_SCALE);
    camera.position.x = ease(camera.position.x, target.x, CAMERA_EASE);
    camera.position.y = ease(camera.position.y, target.y, CAMERA_EASE);
    camera.look_at_origin();
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn object(seed: u64) -> DecorativeObject {
        DecorativeObject::random(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(40.5), -40.0);
        assert_eq!(wrap(-40.01), 40.0);
        assert_eq!(wrap(40.0), 40.0);
        assert_eq!(wrap(12.5), 12.5);
    }

    #[test]
    fn test_particles_stay_contained() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut layer = ParticleLayer::random(2, 200, &mut rng);
        // Give a few particles velocities large enough to cross the bound.
        layer.particles[0].velocity = Vec3::new(3.0, -3.0, 7.0);
        layer.particles[1].velocity = Vec3::new(-90.0, 0.0, 0.0);

        let mut pointer = PointerState::default();
        for frame in 0..2_000 {
            if frame % 50 == 0 {
                pointer.set(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
            }
            update_layer(&mut layer, frame as f32 / 60.0, pointer);
            for p in &layer.particles {
                assert!(
                    p.position.abs().max_element() <= PARTICLE_BOUND,
                    "escaped at frame {frame}: {:?}",
                    p.position
                );
            }
        }
    }

    #[test]
    fn test_nearby_particles_are_attracted() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut layer = ParticleLayer::random(0, 1, &mut rng);
        layer.particles[0].position = Vec3::new(5.0, 0.0, 0.0);
        layer.particles[0].velocity = Vec3::ZERO;

        update_layer(&mut layer, 0.0, PointerState::default());
        assert!(layer.particles[0].velocity.x < 0.0);

        layer.particles[0].position = Vec3::new(30.0, 0.0, 0.0);
        layer.particles[0].velocity = Vec3::ZERO;
        update_layer(&mut layer, 0.0, PointerState::default());
        assert_eq!(layer.particles[0].velocity.x, 0.0);
    }

    #[test]
    fn test_layer_spin_scales_with_index() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut slow = ParticleLayer::random(0, 0, &mut rng);
        let mut fast = ParticleLayer::random(2, 0, &mut rng);
        update_layer(&mut slow, 0.0, PointerState::default());
        update_layer(&mut fast, 0.0, PointerState::default());
        assert!(slow.rotation.y < fast.rotation.y);
        assert!((fast.rotation.y - 3.0 * LAYER_SPIN_Y).abs() < 1e-7);
    }

    #[test]
    fn test_origin_never_changes() {
        let mut obj = object(21);
        let origin = obj.origin();
        let mut pointer = PointerState::default();
        for frame in 0..500 {
            pointer.set((frame as f32 * 0.1).sin(), (frame as f32 * 0.07).cos());
            update_object(&mut obj, 3, frame as f32 / 60.0, pointer);
            assert_eq!(obj.origin(), origin);
        }
    }

    #[test]
    fn test_float_is_bounded_and_stateless() {
        let mut a = object(8);
        let mut b = a.clone();
        // Different histories, same time: same height.
        for frame in 0..100 {
            update_object(&mut a, 0, frame as f32, PointerState::default());
        }
        update_object(&mut b, 0, 99.0, PointerState::default());
        assert_eq!(a.position.y, b.position.y);
        assert!((a.position.y - a.origin().y).abs() <= a.float_range);
    }

    #[test]
    fn test_easing_converges_monotonically() {
        let mut obj = object(13);
        let mut pointer = PointerState::default();
        pointer.set(0.7, -0.4);
        let target = pointer_target(&obj, pointer);

        let distance =
            |o: &DecorativeObject| Vec2::new(o.position.x, o.position.z).distance(target);
        let mut previous = distance(&obj);
        assert!(previous > 0.0);

        for frame in 0..400 {
            update_object(&mut obj, 0, frame as f32 / 60.0, pointer);
            let current = distance(&obj);
            if previous > 1e-3 {
                assert!(current < previous, "frame {frame}: {current} >= {previous}");
            }
            previous = current;
        }
        assert!(previous < 1e-3);
    }

    #[test]
    fn test_rotation_accumulates_per_frame() {
        let mut obj = object(2);
        let speed = obj.rotation_speed;
        for _ in 0..10 {
            update_object(&mut obj, 0, 0.0, PointerState::default());
        }
        assert!((obj.rotation - speed * 10.0).length() < 1e-6);
    }

    #[test]
    fn test_proximity_glow() {
        let pointer = PointerState::default();
        assert!((proximity_glow(pointer, Vec3::ZERO) - GLOW_STRENGTH).abs() < 1e-6);
        assert_eq!(proximity_glow(pointer, Vec3::new(15.0, 0.0, 0.0)), 0.0);
        assert_eq!(proximity_glow(pointer, Vec3::new(0.0, 40.0, 0.0)), 0.0);
        // Depth does not matter, only the XY plane.
        assert!(proximity_glow(pointer, Vec3::new(0.0, 0.0, -9.0)) > 0.0);
    }

    #[test]
    fn test_flashing_object_has_no_glow() {
        let mut obj = object(4);
        obj.flashing = true;
        update_object(&mut obj, 0, 0.0, PointerState::default());
        assert_eq!(obj.glow, 0.0);
    }

    #[test]
    fn test_camera_eases_and_reaims() {
        let mut camera = Camera::new(1.0);
        let mut pointer = PointerState::default();
        pointer.set(1.0, 1.0);
        update_camera(&mut camera, pointer);
        assert!((camera.position.x - 0.1).abs() < 1e-6);
        assert_eq!(camera.position.z, Camera::START_DISTANCE);

        // The origin always projects to the middle of the view.
        let origin_in_view = camera.view().transform_point3(Vec3::ZERO);
        assert!(origin_in_view.x.abs() < 1e-4 && origin_in_view.y.abs() < 1e-4);
        assert!(origin_in_view.z < 0.0);
    }
}
