//! Scene contents: decorative objects, trails, particle layers, lights and
//! the camera.

use std::collections::VecDeque;

use folio_core::{BackgroundSettings, Rgb};
use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

/// Half the side of the cube decorative objects are spawned in.
pub const OBJECT_SPAWN_HALF_EXTENT: f32 = 10.0;

/// Half the side of the cube particles live in. Positions wrap at this bound.
pub const PARTICLE_BOUND: f32 = 40.0;

/// Opacity of the wireframe meshes.
pub const MESH_OPACITY: f32 = 0.6;

/// Shape of a decorative object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cone,
    Cylinder,
    Torus,
    Ring,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
        ShapeKind::Torus,
        ShapeKind::Ring,
    ];

    /// Position in [`ShapeKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            ShapeKind::Box => 0,
            ShapeKind::Sphere => 1,
            ShapeKind::Cone => 2,
            ShapeKind::Cylinder => 3,
            ShapeKind::Torus => 4,
            ShapeKind::Ring => 5,
        }
    }
}

/// A procedurally placed wireframe mesh.
#[derive(Debug, Clone)]
pub struct DecorativeObject {
    pub shape: ShapeKind,
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub color: Rgb,
    /// Current emissive state: the baseline, or a flash color after a click.
    pub emissive: Rgb,
    /// Proximity boost added on top of `emissive` when drawing.
    pub glow: f32,
    /// Set while a click flash owns `emissive`.
    pub flashing: bool,
    pub opacity: f32,
    /// Radians added to `rotation` every frame.
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    pub float_range: f32,
    pub mouse_influence: f32,
    origin: Vec3,
    base_emissive: Rgb,
}

impl DecorativeObject {
    /// Create an object with randomized shape, placement, color and motion.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let shape = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let h = OBJECT_SPAWN_HALF_EXTENT;
        let origin = Vec3::new(
            rng.gen_range(-h..h),
            rng.gen_range(-h..h),
            rng.gen_range(-h..h),
        );
        let color = Rgb::from_hsl(rng.gen_range(0.3..0.7), 0.8, 0.6);
        let base_emissive = color.scale(0.2);

        Self {
            shape,
            position: origin,
            rotation: Vec3::ZERO,
            color,
            emissive: base_emissive,
            glow: 0.0,
            flashing: false,
            opacity: MESH_OPACITY,
            rotation_speed: Vec3::new(
                rng.gen_range(-0.01..=0.01),
                rng.gen_range(-0.01..=0.01),
                rng.gen_range(-0.01..=0.01),
            ),
            float_speed: rng.gen_range(0.005..=0.015),
            float_range: rng.gen_range(1.0..=2.5),
            mouse_influence: rng.gen_range(0.5..=1.5),
            origin,
            base_emissive,
        }
    }

    /// Spawn point. All motion is computed relative to it.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Emissive color captured at creation.
    pub fn base_emissive(&self) -> Rgb {
        self.base_emissive
    }

    /// Emissive color to draw with: the flash color while flashing, otherwise
    /// the emissive state brightened by the proximity glow.
    pub fn rendered_emissive(&self, clamp: bool) -> Rgb {
        if self.flashing {
            return self.emissive;
        }
        let boosted = self.emissive.offset(self.glow);
        if clamp { boosted.clamped() } else { boosted }
    }
}

/// Bounded history of recent positions, oldest first.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `point`, evicting the oldest once the trail is full.
    pub fn push(&mut self, point: Vec3) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &Vec3> + DoubleEndedIterator {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Color, point size and opacity of each particle layer.
const LAYER_STYLES: [(u32, f32, f32); 3] = [
    (0x00ff88, 0.15, 0.8),
    (0x00ccff, 0.10, 0.6),
    (0x88ff00, 0.08, 0.4),
];

/// Number of particle layers.
pub const LAYER_COUNT: usize = LAYER_STYLES.len();

/// A group of particles sharing color and size, drawn with additive blending.
#[derive(Debug, Clone)]
pub struct ParticleLayer {
    pub index: usize,
    pub color: Rgb,
    pub size: f32,
    pub opacity: f32,
    /// Whole-layer rotation: `x` about the X axis, `y` about the Y axis.
    pub rotation: Vec2,
    pub particles: Vec<Particle>,
}

impl ParticleLayer {
    pub fn random<R: Rng>(index: usize, count: usize, rng: &mut R) -> Self {
        let (hex, size, opacity) = LAYER_STYLES[index % LAYER_STYLES.len()];
        let b = PARTICLE_BOUND;
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.gen_range(-b..b),
                    rng.gen_range(-b..b),
                    rng.gen_range(-b..b),
                ),
                velocity: Vec3::new(
                    rng.gen_range(-0.005..=0.005),
                    rng.gen_range(-0.005..=0.005),
                    rng.gen_range(-0.005..=0.005),
                ),
            })
            .collect();

        Self {
            index,
            color: Rgb::from_hex(hex),
            size,
            opacity,
            rotation: Vec2::ZERO,
            particles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    /// Light arriving from `position` toward the origin.
    Directional { position: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Rgb,
    pub intensity: f32,
}

impl Light {
    /// The fixed lighting rig: three directional lights and a dim ambient.
    pub fn rig() -> Vec<Light> {
        vec![
            Light {
                kind: LightKind::Directional {
                    position: Vec3::new(10.0, 10.0, 10.0),
                },
                color: Rgb::from_hex(0x00ff88),
                intensity: 1.0,
            },
            Light {
                kind: LightKind::Directional {
                    position: Vec3::new(-10.0, -10.0, 5.0),
                },
                color: Rgb::from_hex(0x00d4ff),
                intensity: 0.8,
            },
            Light {
                kind: LightKind::Directional {
                    position: Vec3::new(0.0, 10.0, -10.0),
                },
                color: Rgb::from_hex(0x88ff00),
                intensity: 0.6,
            },
            Light {
                kind: LightKind::Ambient,
                color: Rgb::from_hex(0x404040),
                intensity: 0.3,
            },
        ]
    }

    /// Light contribution on a surface facing `normal`. Wireframes have no
    /// back face, so the facing term uses the absolute cosine.
    pub fn contribution(&self, normal: Vec3) -> Rgb {
        let strength = match self.kind {
            LightKind::Ambient => self.intensity,
            LightKind::Directional { position } => {
                self.intensity * normal.dot(position.normalize_or_zero()).abs()
            }
        };
        self.color.scale(strength)
    }
}

/// Perspective camera that always looks at the origin.
#[derive(Debug, Clone)]
pub struct Camera {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
    pub position: Vec3,
    view: Mat4,
}

impl Camera {
    pub const START_DISTANCE: f32 = 15.0;

    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            aspect,
            position: Vec3::new(0.0, 0.0, Self::START_DISTANCE),
            view: Mat4::IDENTITY,
        };
        camera.look_at_origin();
        camera
    }

    /// Recompute the view matrix from the current position.
    pub fn look_at_origin(&mut self) {
        self.view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y);
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view
    }
}

/// Latest normalized pointer coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Store a new position, clamped to `-1.0..=1.0`.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x.clamp(-1.0, 1.0);
        self.y = y.clamp(-1.0, 1.0);
    }

    pub fn scaled(&self, factor: f32) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

/// All animated state owned by the animator.
#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Vec<DecorativeObject>,
    pub trails: Vec<Trail>,
    pub layers: Vec<ParticleLayer>,
    pub lights: Vec<Light>,
    pub camera: Camera,
    pub pointer: PointerState,
}

impl Scene {
    pub fn build<R: Rng>(settings: &BackgroundSettings, aspect: f32, rng: &mut R) -> Self {
        let objects: Vec<DecorativeObject> = (0..settings.object_count)
            .map(|_| DecorativeObject::random(rng))
            .collect();
        let trails = objects
            .iter()
            .map(|_| Trail::new(settings.trail_length))
            .collect();
        let layers = (0..LAYER_COUNT)
            .map(|i| ParticleLayer::random(i, settings.particles_per_layer, rng))
            .collect();

        Self {
            objects,
            trails,
            layers,
            lights: Light::rig(),
            camera: Camera::new(aspect),
            pointer: PointerState::default(),
        }
    }
}
