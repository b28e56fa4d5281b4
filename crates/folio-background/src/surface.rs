//! The host side of the animator: drawing surface, resources and listeners.

use std::collections::HashMap;

use crate::scene::{Camera, DecorativeObject, Light, ParticleLayer, Trail};

/// Drawing area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, 1.0 for a degenerate viewport.
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Kinds of graphics resources the animator allocates from its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Renderer,
    Camera,
    Geometry,
    Material,
    Mesh,
    Trail,
    ParticleSystem,
    Light,
}

/// Handle to an allocated resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u64);

/// Handle to a registered event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Input event categories a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Click,
    Resize,
}

/// Input delivered by the host between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position normalized to `-1.0..=1.0` on each axis, y pointing up.
    PointerMove { x: f32, y: f32 },
    Click,
    /// New viewport size in logical pixels.
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerMove { .. } => EventKind::PointerMove,
            InputEvent::Click => EventKind::Click,
            InputEvent::Resize { .. } => EventKind::Resize,
        }
    }
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub camera: &'a Camera,
    pub objects: &'a [DecorativeObject],
    pub trails: &'a [Trail],
    pub layers: &'a [ParticleLayer],
    pub lights: &'a [Light],
    pub clamp_emissive: bool,
}

/// A mountable drawing surface supplied by the host.
pub trait Surface {
    /// Current size of the drawing area.
    fn viewport(&self) -> Viewport;

    /// Match the drawing area to a new viewport.
    fn resize(&mut self, viewport: Viewport);

    fn allocate(&mut self, kind: ResourceKind) -> ResourceId;

    fn release(&mut self, id: ResourceId);

    fn listen(&mut self, kind: EventKind) -> ListenerId;

    fn unlisten(&mut self, id: ListenerId);

    /// Draw one frame.
    fn present(&mut self, view: &SceneView<'_>);

    /// Detach the surface from the host. Nothing is drawn afterwards.
    fn destroy(&mut self);
}

/// Bookkeeping for live resources and listeners, shared by surface
/// implementations.
#[derive(Debug, Default)]
pub struct Registry {
    next_id: u64,
    resources: HashMap<ResourceId, ResourceKind>,
    listeners: HashMap<ListenerId, EventKind>,
    allocated: HashMap<ResourceKind, usize>,
    released: HashMap<ResourceKind, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, kind: ResourceKind) -> ResourceId {
        let id = ResourceId(self.bump());
        self.resources.insert(id, kind);
        *self.allocated.entry(kind).or_default() += 1;
        id
    }

    /// Release `id`. Unknown or already released handles are ignored.
    pub fn release(&mut self, id: ResourceId) {
        match self.resources.remove(&id) {
            Some(kind) => *self.released.entry(kind).or_default() += 1,
            None => tracing::warn!(?id, "release of unknown resource"),
        }
    }

    pub fn listen(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.bump());
        self.listeners.insert(id, kind);
        id
    }

    pub fn unlisten(&mut self, id: ListenerId) {
        if self.listeners.remove(&id).is_none() {
            tracing::warn!(?id, "unlisten of unknown listener");
        }
    }

    /// Whether at least one listener for `kind` is registered.
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn live_resources(&self) -> usize {
        self.resources.len()
    }

    /// Total allocations of `kind` over the registry's lifetime.
    pub fn allocated(&self, kind: ResourceKind) -> usize {
        self.allocated.get(&kind).copied().unwrap_or(0)
    }

    /// Total releases of `kind` over the registry's lifetime.
    pub fn released(&self, kind: ResourceKind) -> usize {
        self.released.get(&kind).copied().unwrap_or(0)
    }

    fn bump(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
