//! Headless surface and manual scheduler for animator tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::FrameScheduler;
use crate::surface::{
    EventKind, ListenerId, Registry, ResourceId, ResourceKind, SceneView, Surface, Viewport,
};

/// Surface that records calls instead of drawing.
#[derive(Debug)]
pub struct RecordingSurface {
    pub registry: Registry,
    pub viewport: Viewport,
    pub presented: usize,
    pub resizes: usize,
    pub destroyed: usize,
    destroy_counter: Rc<Cell<usize>>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            registry: Registry::new(),
            viewport: Viewport::new(width, height),
            presented: 0,
            resizes: 0,
            destroyed: 0,
            destroy_counter: Rc::new(Cell::new(0)),
        }
    }

    /// Destroy counter that outlives the surface.
    pub fn destroy_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.destroy_counter)
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.resizes += 1;
    }

    fn allocate(&mut self, kind: ResourceKind) -> ResourceId {
        self.registry.allocate(kind)
    }

    fn release(&mut self, id: ResourceId) {
        self.registry.release(id);
    }

    fn listen(&mut self, kind: EventKind) -> ListenerId {
        self.registry.listen(kind)
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.registry.unlisten(id);
    }

    fn present(&mut self, _view: &SceneView<'_>) {
        self.presented += 1;
    }

    fn destroy(&mut self) {
        self.destroyed += 1;
        self.destroy_counter.set(self.destroy_counter.get() + 1);
    }
}

/// Scheduler driven by hand: time only moves on `tick` or `advance`.
#[derive(Debug)]
pub struct StepScheduler {
    pub now: Duration,
    pub step: Duration,
    pub requests: usize,
    pub cancelled: bool,
}

impl StepScheduler {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            step,
            requests: 0,
            cancelled: false,
        }
    }

    /// Move time forward by one frame step.
    pub fn tick(&mut self) {
        self.now += self.step;
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl FrameScheduler for StepScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn request_next_frame(&mut self) {
        self.requests += 1;
        self.cancelled = false;
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}
