//! Animated decorative background for the folio portfolio.
//!
//! An [`Animator`] owns a procedurally generated scene of wireframe shapes,
//! motion trails and particle layers. It is mounted onto a [`Surface`],
//! driven by a [`FrameScheduler`] and reacts to pointer, click and resize
//! events. [`TerminalSurface`] rasterizes the scene into terminal cells.

mod animator;
mod chars;
mod geometry;
mod motion;
mod raster;
mod scene;
mod schedule;
mod surface;

#[cfg(test)]
mod test_support;

pub use animator::Animator;
pub use raster::{TerminalSurface, pointer_from_cell};
pub use scene::{Camera, DecorativeObject, ParticleLayer, PointerState, ShapeKind, Trail};
pub use schedule::{FLASH_DURATION, FLASH_STAGGER, FrameScheduler, PacedScheduler};
pub use surface::{
    EventKind, InputEvent, ListenerId, Registry, ResourceId, ResourceKind, SceneView, Surface,
    Viewport,
};
