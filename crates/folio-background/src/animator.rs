//! The background animator: mounts a scene onto a surface and advances it
//! once per scheduled frame.

use std::time::Duration;

use folio_core::BackgroundSettings;
use rand::{SeedableRng, rngs::StdRng};

use crate::motion;
use crate::scene::{Camera, DecorativeObject, ParticleLayer, PointerState, Scene, Trail};
use crate::schedule::{FlashTimeline, FrameScheduler};
use crate::surface::{
    EventKind, InputEvent, ListenerId, ResourceId, ResourceKind, SceneView, Surface, Viewport,
};

/// Listeners registered at mount, one per event kind.
#[derive(Debug, Clone, Copy)]
struct Subscription {
    pointer: ListenerId,
    click: ListenerId,
    resize: ListenerId,
}

impl Subscription {
    fn register<S: Surface>(surface: &mut S) -> Self {
        Self {
            pointer: surface.listen(EventKind::PointerMove),
            click: surface.listen(EventKind::Click),
            resize: surface.listen(EventKind::Resize),
        }
    }

    fn listener(&self, kind: EventKind) -> ListenerId {
        match kind {
            EventKind::PointerMove => self.pointer,
            EventKind::Click => self.click,
            EventKind::Resize => self.resize,
        }
    }

    fn unregister<S: Surface>(self, surface: &mut S) {
        surface.unlisten(self.pointer);
        surface.unlisten(self.click);
        surface.unlisten(self.resize);
    }
}

/// Animated decorative background bound to a surface and a frame scheduler.
///
/// Dropping the animator tears it down.
#[derive(Debug)]
pub struct Animator<S: Surface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    clamp_emissive: bool,
    rng: StdRng,
    scene: Scene,
    timeline: FlashTimeline,
    resources: Vec<ResourceId>,
    subscription: Option<Subscription>,
    started_at: Duration,
    frames: u64,
}

impl<S: Surface, F: FrameScheduler> Animator<S, F> {
    /// Build the scene, allocate its graphics resources, register listeners
    /// and request the first frame.
    pub fn mount(mut surface: S, mut scheduler: F, settings: &BackgroundSettings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = Scene::build(settings, surface.viewport().aspect(), &mut rng);
        let resources = allocate_resources(&mut surface, &scene);
        let subscription = Subscription::register(&mut surface);
        let started_at = scheduler.now();
        scheduler.request_next_frame();

        tracing::info!(
            objects = scene.objects.len(),
            layers = scene.layers.len(),
            resources = resources.len(),
            seed = ?settings.seed,
            "background mounted"
        );

        Self {
            surface,
            scheduler,
            clamp_emissive: settings.clamp_emissive,
            rng,
            scene,
            timeline: FlashTimeline::new(),
            resources,
            subscription: Some(subscription),
            started_at,
            frames: 0,
        }
    }

    /// Run one frame: fire due click timers, advance objects, particles and
    /// the camera, present, then request the next frame.
    ///
    /// Returns false without doing anything once unmounted.
    pub fn frame(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }

        let now = self.scheduler.now();
        let t = now.saturating_sub(self.started_at).as_secs_f32();
        self.timeline.fire_due(now, &mut self.scene.objects);

        let pointer = self.scene.pointer;
        for (i, (obj, trail)) in self
            .scene
            .objects
            .iter_mut()
            .zip(self.scene.trails.iter_mut())
            .enumerate()
        {
            motion::update_object(obj, i, t, pointer);
            trail.push(obj.position);
        }
        for layer in &mut self.scene.layers {
            motion::update_layer(layer, t, pointer);
        }
        motion::update_camera(&mut self.scene.camera, pointer);

        let view = SceneView {
            camera: &self.scene.camera,
            objects: &self.scene.objects,
            trails: &self.scene.trails,
            layers: &self.scene.layers,
            lights: &self.scene.lights,
            clamp_emissive: self.clamp_emissive,
        };
        self.surface.present(&view);
        self.frames += 1;
        self.scheduler.request_next_frame();
        true
    }

    /// Deliver a host event to the listener registered for its kind.
    /// Events arriving after unmount are dropped.
    pub fn handle(&mut self, event: InputEvent) {
        let Some(subscription) = &self.subscription else {
            return;
        };
        let kind = event.kind();
        let listener = subscription.listener(kind);
        tracing::trace!(?kind, listener = listener.0, "background input");

        match event {
            InputEvent::PointerMove { x, y } => self.scene.pointer.set(x, y),
            InputEvent::Click => {
                let now = self.scheduler.now();
                self.timeline
                    .schedule_click(now, self.scene.objects.len(), &mut self.rng);
                tracing::debug!(pending = self.timeline.pending(), "click flash scheduled");
            }
            InputEvent::Resize { width, height } => {
                let viewport = Viewport::new(width, height);
                self.scene.camera.aspect = viewport.aspect();
                self.surface.resize(viewport);
                tracing::debug!(width, height, "background resized");
            }
        }
    }

    /// Remove listeners, stop scheduling and release every resource.
    /// Calling it again is a no-op.
    pub fn unmount(&mut self) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };
        subscription.unregister(&mut self.surface);
        self.scheduler.cancel();
        self.timeline.clear();

        let released = self.resources.len();
        for id in self.resources.drain(..).rev() {
            self.surface.release(id);
        }
        self.surface.destroy();
        tracing::info!(released, frames = self.frames, "background unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Frames run since mount.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn objects(&self) -> &[DecorativeObject] {
        &self.scene.objects
    }

    pub fn trails(&self) -> &[Trail] {
        &self.scene.trails
    }

    pub fn layers(&self) -> &[ParticleLayer] {
        &self.scene.layers
    }

    pub fn camera(&self) -> &Camera {
        &self.scene.camera
    }

    pub fn pointer(&self) -> PointerState {
        self.scene.pointer
    }
}

impl<S: Surface, F: FrameScheduler> Drop for Animator<S, F> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Allocate one handle per graphics resource the scene needs, in mount order.
fn allocate_resources<S: Surface>(surface: &mut S, scene: &Scene) -> Vec<ResourceId> {
    let mut ids = vec![
        surface.allocate(ResourceKind::Renderer),
        surface.allocate(ResourceKind::Camera),
    ];
    let drawables = [
        (scene.objects.len(), ResourceKind::Mesh),
        (scene.trails.len(), ResourceKind::Trail),
        (scene.layers.len(), ResourceKind::ParticleSystem),
    ];
    for (count, kind) in drawables {
        for _ in 0..count {
            ids.push(surface.allocate(ResourceKind::Geometry));
            ids.push(surface.allocate(ResourceKind::Material));
            ids.push(surface.allocate(kind));
        }
    }
    for _ in &scene.lights {
        ids.push(surface.allocate(ResourceKind::Light));
    }
    ids
}

#[cfg(test)]
mod tests {
    use folio_core::Rgb;

    use super::*;
    use crate::scene::PARTICLE_BOUND;
    use crate::schedule::{FLASH_DURATION, FLASH_STAGGER};
    use crate::test_support::{RecordingSurface, StepScheduler};

    fn settings(seed: u64) -> BackgroundSettings {
        BackgroundSettings {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn mount(seed: u64) -> Animator<RecordingSurface, StepScheduler> {
        Animator::mount(
            RecordingSurface::new(160.0, 90.0),
            StepScheduler::new(Duration::from_millis(16)),
            &settings(seed),
        )
    }

    fn step(animator: &mut Animator<RecordingSurface, StepScheduler>, frames: usize) {
        for _ in 0..frames {
            animator.scheduler_mut().tick();
            assert!(animator.frame());
        }
    }

    #[test]
    fn test_mount_builds_scene_and_requests_frame() {
        let animator = mount(1);
        assert!(animator.is_mounted());
        assert_eq!(animator.objects().len(), 25);
        assert_eq!(animator.trails().len(), 25);
        assert_eq!(animator.layers().len(), 3);
        assert_eq!(animator.surface().registry.listener_count(), 3);
        assert_eq!(animator.scheduler().requests, 1);
        assert!((animator.camera().aspect - 160.0 / 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let a = mount(42);
        let b = mount(42);
        for (x, y) in a.objects().iter().zip(b.objects()) {
            assert_eq!(x.origin(), y.origin());
            assert_eq!(x.shape, y.shape);
            assert_eq!(x.color, y.color);
        }
        let c = mount(43);
        assert_ne!(a.objects()[0].origin(), c.objects()[0].origin());
    }

    #[test]
    fn test_each_frame_presents_and_reschedules() {
        let mut animator = mount(2);
        step(&mut animator, 10);
        assert_eq!(animator.frames(), 10);
        assert_eq!(animator.surface().presented, 10);
        assert_eq!(animator.scheduler().requests, 11);
    }

    #[test]
    fn test_trails_stay_bounded() {
        let mut animator = mount(3);
        for n in 1..=40 {
            step(&mut animator, 1);
            for trail in animator.trails() {
                assert!(trail.len() <= 8);
                assert_eq!(trail.len(), n.min(8));
            }
        }
    }

    #[test]
    fn test_particles_stay_in_volume() {
        let mut animator = mount(4);
        for frame in 0..600 {
            let x = ((frame as f32) * 0.05).sin();
            let y = ((frame as f32) * 0.03).cos();
            animator.handle(InputEvent::PointerMove { x, y });
            step(&mut animator, 1);
        }
        for layer in animator.layers() {
            for p in &layer.particles {
                assert!(p.position.abs().max_element() <= PARTICLE_BOUND);
            }
        }
    }

    #[test]
    fn test_origins_survive_frames() {
        let mut animator = mount(5);
        let origins: Vec<_> = animator.objects().iter().map(|o| o.origin()).collect();
        animator.handle(InputEvent::PointerMove { x: 0.9, y: -0.9 });
        step(&mut animator, 250);
        let after: Vec<_> = animator.objects().iter().map(|o| o.origin()).collect();
        assert_eq!(origins, after);
    }

    #[test]
    fn test_click_flash_restores_baseline() {
        let mut animator = mount(6);
        // Park the pointer far away so no glow interferes.
        animator.handle(InputEvent::PointerMove { x: 1.0, y: 1.0 });
        animator.handle(InputEvent::Click);
        step(&mut animator, 1);
        assert!(animator.objects()[0].flashing);
        assert_ne!(animator.objects()[0].emissive, animator.objects()[0].base_emissive());

        let sequence = FLASH_STAGGER * 25 + FLASH_DURATION;
        animator.scheduler_mut().advance(sequence);
        step(&mut animator, 1);

        for obj in animator.objects() {
            assert!(!obj.flashing);
            assert_eq!(obj.emissive, obj.base_emissive());
        }
    }

    #[test]
    fn test_resource_parity() {
        let mut animator = mount(7);
        step(&mut animator, 5);
        animator.unmount();

        let registry = &animator.surface().registry;
        let expected = [
            (ResourceKind::Renderer, 1),
            (ResourceKind::Camera, 1),
            (ResourceKind::Mesh, 25),
            (ResourceKind::Trail, 25),
            (ResourceKind::ParticleSystem, 3),
            (ResourceKind::Light, 4),
            (ResourceKind::Geometry, 53),
            (ResourceKind::Material, 53),
        ];
        for (kind, count) in expected {
            assert_eq!(registry.allocated(kind), count, "{kind:?} allocated");
            assert_eq!(registry.released(kind), count, "{kind:?} released");
        }
        assert_eq!(registry.live_resources(), 0);
        assert_eq!(animator.surface().destroyed, 1);
    }

    #[test]
    fn test_objects_converge_on_held_pointer() {
        let mut animator = mount(8);
        animator.handle(InputEvent::PointerMove { x: -0.6, y: 0.8 });
        let pointer = animator.pointer();
        let gap = |a: &Animator<RecordingSurface, StepScheduler>| -> Vec<f32> {
            a.objects()
                .iter()
                .map(|o| {
                    let target = motion::pointer_target(o, pointer);
                    (o.position.x - target.x).abs() + (o.position.z - target.y).abs()
                })
                .collect()
        };

        let mut previous = gap(&animator);
        for _ in 0..300 {
            step(&mut animator, 1);
            let current = gap(&animator);
            for (now, before) in current.iter().zip(&previous) {
                if *before > 1e-3 {
                    assert!(now < before);
                }
            }
            previous = current;
        }
        assert!(previous.iter().all(|g| *g < 1e-3));
    }

    #[test]
    fn test_teardown_is_total_and_idempotent() {
        let mut animator = mount(9);
        step(&mut animator, 3);
        animator.unmount();
        animator.unmount();

        assert!(!animator.is_mounted());
        assert_eq!(animator.surface().registry.listener_count(), 0);
        assert!(animator.scheduler().cancelled);
        assert_eq!(animator.surface().destroyed, 1);

        let pointer = animator.pointer();
        let aspect = animator.camera().aspect;
        let emissive: Vec<Rgb> = animator.objects().iter().map(|o| o.emissive).collect();

        animator.handle(InputEvent::PointerMove { x: 0.5, y: 0.5 });
        animator.handle(InputEvent::Click);
        animator.handle(InputEvent::Resize {
            width: 10.0,
            height: 40.0,
        });
        animator.scheduler_mut().advance(Duration::from_secs(5));
        assert!(!animator.frame());

        assert_eq!(animator.pointer(), pointer);
        assert_eq!(animator.camera().aspect, aspect);
        assert_eq!(animator.surface().resizes, 0);
        let after: Vec<Rgb> = animator.objects().iter().map(|o| o.emissive).collect();
        assert_eq!(emissive, after);
        assert_eq!(animator.frames(), 3);
    }

    #[test]
    fn test_resize_updates_camera_and_surface() {
        let mut animator = mount(10);
        animator.handle(InputEvent::Resize {
            width: 300.0,
            height: 100.0,
        });
        assert!((animator.camera().aspect - 3.0).abs() < 1e-6);
        assert_eq!(animator.surface().resizes, 1);
        assert_eq!(animator.objects().len(), 25);
    }

    #[test]
    fn test_pointer_move_is_clamped() {
        let mut animator = mount(11);
        animator.handle(InputEvent::PointerMove { x: 4.0, y: -0.25 });
        assert_eq!(animator.pointer(), PointerState { x: 1.0, y: -0.25 });
    }

    #[test]
    fn test_drop_unmounts() {
        let surface = RecordingSurface::new(80.0, 24.0);
        let destroyed = surface.destroy_counter();
        let animator = Animator::mount(
            surface,
            StepScheduler::new(Duration::from_millis(16)),
            &settings(12),
        );
        assert_eq!(destroyed.get(), 0);
        drop(animator);
        assert_eq!(destroyed.get(), 1);
    }

    #[test]
    fn test_glow_stays_in_range_when_clamped() {
        let mut animator = mount(13);
        animator.handle(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        step(&mut animator, 60);
        for obj in animator.objects() {
            let c = obj.rendered_emissive(true);
            assert!(c.max_channel() <= 1.0);
            assert!(c.r >= obj.base_emissive().r - 1e-6);
        }
    }
}
