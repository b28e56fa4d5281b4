//! Hosts the animated background behind the page.

use std::time::Duration;

use folio_background::{
    Animator, InputEvent, PacedScheduler, Surface, TerminalSurface, pointer_from_cell,
};
use folio_core::BackgroundSettings;
use ratatui::{Frame, layout::Rect};

type TerminalAnimator = Animator<TerminalSurface, PacedScheduler>;

/// The background animator plus the settings to re-create it.
#[derive(Debug)]
pub struct Background {
    settings: BackgroundSettings,
    animator: Option<TerminalAnimator>,
    cols: u16,
    rows: u16,
}

impl Background {
    /// Create the background for a `cols` x `rows` terminal, mounted if
    /// enabled in `settings`.
    pub fn new(settings: BackgroundSettings, cols: u16, rows: u16) -> Self {
        let animator = settings.enabled.then(|| mount(&settings, cols, rows));
        Self {
            settings,
            animator,
            cols,
            rows,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.animator.is_some()
    }

    /// Mount or tear down the animator.
    pub fn toggle(&mut self) {
        match self.animator.take() {
            Some(mut animator) => animator.unmount(),
            None => self.animator = Some(mount(&self.settings, self.cols, self.rows)),
        }
    }

    /// Run a frame if one is due. Returns whether a frame ran.
    pub fn tick(&mut self) -> bool {
        match &mut self.animator {
            Some(animator) if animator.scheduler().is_due() => animator.frame(),
            _ => false,
        }
    }

    /// How long the event loop may wait before the next frame is due.
    pub fn time_until_due(&self) -> Option<Duration> {
        self.animator
            .as_ref()
            .and_then(|a| a.scheduler().time_until_due())
    }

    /// Forward a pointer position in terminal cells.
    pub fn pointer_moved(&mut self, col: u16, row: u16) {
        let (x, y) = pointer_from_cell(col, row, self.cols, self.rows);
        self.send(InputEvent::PointerMove { x, y });
    }

    pub fn clicked(&mut self) {
        self.send(InputEvent::Click);
    }

    pub fn resized(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        let viewport = TerminalSurface::viewport_for(cols, rows);
        self.send(InputEvent::Resize {
            width: viewport.width,
            height: viewport.height,
        });
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(animator) = &self.animator {
            frame.render_widget(animator.surface(), area);
        }
    }

    fn send(&mut self, event: InputEvent) {
        if let Some(animator) = &mut self.animator {
            animator.handle(event);
        }
    }
}

fn mount(settings: &BackgroundSettings, cols: u16, rows: u16) -> TerminalAnimator {
    let scheduler = PacedScheduler::new(settings.frame_interval());
    let animator = Animator::mount(TerminalSurface::new(cols, rows), scheduler, settings);
    tracing::debug!(
        cols,
        rows,
        viewport = ?animator.surface().viewport(),
        interval_ms = animator.scheduler().interval().as_millis() as u64,
        "background attached"
    );
    animator
}
