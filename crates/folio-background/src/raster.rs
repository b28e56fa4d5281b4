//! Terminal implementation of [`Surface`]: a software rasterizer that draws
//! the scene into a grid of colored glyphs.

use folio_core::Rgb;
use glam::{EulerRot, Mat4, Quat, Vec3};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::chars::{
    EDGE_FALLING, EDGE_HORIZONTAL, EDGE_RISING, EDGE_VERTICAL, PARTICLE_CHARS, TRAIL_CHAR,
};
use crate::geometry::Wireframe;
use crate::surface::{
    EventKind, ListenerId, Registry, ResourceId, ResourceKind, SceneView, Surface, Viewport,
};

/// Height of a terminal cell in logical pixels (cells are 1 wide).
pub const CELL_ASPECT: f32 = 2.0;

/// Peak opacity of the newest trail segment.
const TRAIL_OPACITY: f32 = 0.5;

/// Scale applied to each particle's contribution before additive blending.
const PARTICLE_INTENSITY: f32 = 0.6;

/// Cells dimmer than this are left blank.
const MIN_VISIBLE: f32 = 0.03;

/// Segments reaching further than this many viewports off screen are skipped.
const CLIP_MARGIN: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    color: Rgb,
    depth: f32,
}

impl Cell {
    const EMPTY: Cell = Cell {
        ch: ' ',
        color: Rgb::BLACK,
        depth: f32::INFINITY,
    };
}

/// Drawing surface backed by a grid of terminal cells.
#[derive(Debug)]
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
    registry: Registry,
    wireframes: [Wireframe; 6],
    destroyed: bool,
    frames: u64,
}

impl TerminalSurface {
    /// Create a surface covering `cols` x `rows` cells.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::EMPTY; cols as usize * rows as usize],
            registry: Registry::new(),
            wireframes: Wireframe::all(),
            destroyed: false,
            frames: 0,
        }
    }

    /// Viewport in logical pixels for a terminal of `cols` x `rows` cells.
    pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
        Viewport::new(cols as f32, rows as f32 * CELL_ASPECT)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// Glyph drawn at cell (`x`, `y`), if any.
    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        let cell = self.cells[self.offset(x as i32, y as i32)?];
        (cell.ch != ' ').then_some(cell.ch)
    }

    /// Number of cells holding a glyph.
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.ch != ' ').count()
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    /// Project a world-space point to (column, row, depth).
    fn project(&self, view_projection: &Mat4, point: Vec3) -> Option<Vec3> {
        let clip = *view_projection * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.cols as f32,
            (1.0 - ndc.y) * 0.5 * self.rows as f32,
            ndc.z,
        ))
    }

    /// Depth-tested write.
    fn plot(&mut self, x: i32, y: i32, depth: f32, ch: char, color: Rgb) {
        let Some(i) = self.offset(x, y) else {
            return;
        };
        let cell = &mut self.cells[i];
        if depth <= cell.depth {
            *cell = Cell { ch, color, depth };
        }
    }

    /// Additive write that never occludes.
    fn blend(&mut self, x: i32, y: i32, ch: char, color: Rgb) {
        let Some(i) = self.offset(x, y) else {
            return;
        };
        let cell = &mut self.cells[i];
        cell.color += color;
        if cell.ch == ' ' {
            cell.ch = ch;
        }
    }

    /// Draw a line between two projected points with Bresenham's algorithm.
    /// Without an explicit glyph the edge glyph follows the line direction.
    fn line(&mut self, a: Vec3, b: Vec3, glyph: Option<char>, color: Rgb) {
        let limit_x = self.cols as f32 * CLIP_MARGIN;
        let limit_y = self.rows as f32 * CLIP_MARGIN;
        if [a, b]
            .iter()
            .any(|p| p.x.abs() > limit_x || p.y.abs() > limit_y)
        {
            return;
        }

        let ch = glyph.unwrap_or_else(|| edge_glyph(b.x - a.x, b.y - a.y));
        let (mut x0, mut y0) = (a.x.floor() as i32, a.y.floor() as i32);
        let (x1, y1) = (b.x.floor() as i32, b.y.floor() as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let steps = dx.max(-dy).max(1) as f32;
        let mut err = dx + dy;
        let mut step = 0.0;

        loop {
            let depth = a.z + (b.z - a.z) * (step / steps).min(1.0);
            self.plot(x0, y0, depth, ch, color);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
            step += 1.0;
        }
    }

    fn draw_particles(&mut self, view: &SceneView<'_>, view_projection: &Mat4) {
        for layer in view.layers {
            let rotation =
                Quat::from_euler(EulerRot::XYZ, layer.rotation.x, layer.rotation.y, 0.0);
            let glyph = PARTICLE_CHARS[layer.index.min(PARTICLE_CHARS.len() - 1)];
            let tint = layer.color.scale(layer.opacity * PARTICLE_INTENSITY);
            for particle in &layer.particles {
                if let Some(p) = self.project(view_projection, rotation * particle.position) {
                    self.blend(p.x.floor() as i32, p.y.floor() as i32, glyph, tint);
                }
            }
        }
    }

    fn draw_trails(&mut self, view: &SceneView<'_>, view_projection: &Mat4) {
        for (trail, obj) in view.trails.iter().zip(view.objects) {
            let points: Vec<Vec3> = trail.points().copied().collect();
            let n = points.len() as f32;
            for (i, segment) in points.windows(2).enumerate() {
                let fade = (i + 1) as f32 / n * TRAIL_OPACITY;
                let projected = (
                    self.project(view_projection, segment[0]),
                    self.project(view_projection, segment[1]),
                );
                if let (Some(a), Some(b)) = projected {
                    self.line(a, b, Some(TRAIL_CHAR), obj.color.scale(fade));
                }
            }
        }
    }

    fn draw_meshes(&mut self, view: &SceneView<'_>, view_projection: &Mat4) {
        for obj in view.objects {
            let rotation =
                Quat::from_euler(EulerRot::XYZ, obj.rotation.x, obj.rotation.y, obj.rotation.z);
            let model = Mat4::from_rotation_translation(rotation, obj.position);
            let normal = rotation * Vec3::Y;
            let light = view
                .lights
                .iter()
                .fold(Rgb::BLACK, |acc, l| acc + l.contribution(normal));
            let color = (obj.color.tint(light) + obj.rendered_emissive(view.clamp_emissive))
                .scale(obj.opacity);

            let shape = obj.shape.index();
            let projected: Vec<Option<Vec3>> = self.wireframes[shape]
                .vertices
                .iter()
                .map(|v| self.project(view_projection, model.transform_point3(*v)))
                .collect();

            for e in 0..self.wireframes[shape].edges.len() {
                let [a, b] = self.wireframes[shape].edges[e];
                if let (Some(pa), Some(pb)) = (projected[a], projected[b]) {
                    self.line(pa, pb, None, color);
                }
            }
        }
    }
}

impl Surface for TerminalSurface {
    fn viewport(&self) -> Viewport {
        Self::viewport_for(self.cols, self.rows)
    }

    fn resize(&mut self, viewport: Viewport) {
        self.cols = viewport.width.round().max(0.0) as u16;
        self.rows = (viewport.height / CELL_ASPECT).round().max(0.0) as u16;
        self.cells = vec![Cell::EMPTY; self.cols as usize * self.rows as usize];
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

    fn present(&mut self, view: &SceneView<'_>) {
        if self.destroyed {
            return;
        }
        self.clear();
        let view_projection = view.camera.view_projection();

        self.draw_particles(view, &view_projection);
        self.draw_trails(view, &view_projection);
        self.draw_meshes(view, &view_projection);
        self.frames += 1;
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.clear();
    }
}

impl Widget for &TerminalSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.destroyed {
            return;
        }
        for y in 0..self.rows.min(area.height) {
            for x in 0..self.cols.min(area.width) {
                let cell = self.cells[y as usize * self.cols as usize + x as usize];
                if cell.ch == ' ' || cell.color.max_channel() < MIN_VISIBLE {
                    continue;
                }
                if let Some(target) = buf.cell_mut((area.x + x, area.y + y)) {
                    target.set_char(cell.ch).set_fg(cell.color.to_color());
                }
            }
        }
    }
}

/// Normalize a terminal cell position to pointer coordinates in
/// `-1.0..=1.0`, y pointing up.
pub fn pointer_from_cell(col: u16, row: u16, cols: u16, rows: u16) -> (f32, f32) {
    let x = (col as f32 + 0.5) / cols.max(1) as f32 * 2.0 - 1.0;
    let y = -((row as f32 + 0.5) / rows.max(1) as f32 * 2.0 - 1.0);
    (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

fn edge_glyph(dx: f32, dy: f32) -> char {
    // Screen rows are twice as tall as columns are wide.
    let dy = dy * CELL_ASPECT;
    if dy.abs() < dx.abs() * 0.5 {
        EDGE_HORIZONTAL
    } else if dx.abs() < dy.abs() * 0.5 {
        EDGE_VERTICAL
    } else if dx * dy < 0.0 {
        EDGE_RISING
    } else {
        EDGE_FALLING
    }
}
