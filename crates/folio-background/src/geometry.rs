//! Wireframe geometry for the decorative shapes, in local object space.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::scene::ShapeKind;

/// Segments around the circumference of round shapes.
const SEGMENTS: usize = 10;

/// A line-segment mesh.
#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[usize; 2]>,
}

impl Wireframe {
    /// Build the wireframe for `shape`.
    pub fn for_shape(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Box => cuboid(1.0),
            ShapeKind::Sphere => sphere(0.7, 5),
            ShapeKind::Cone => cone(0.5, 1.0),
            ShapeKind::Cylinder => cylinder(0.4, 1.0),
            ShapeKind::Torus => torus(0.5, 0.2, 6),
            ShapeKind::Ring => ring(0.3, 0.6),
        }
    }

    /// Wireframes for every shape, indexed by [`ShapeKind::index`].
    pub fn all() -> [Wireframe; 6] {
        ShapeKind::ALL.map(Wireframe::for_shape)
    }

    fn push(&mut self, v: Vec3) -> usize {
        self.vertices.push(v);
        self.vertices.len() - 1
    }

    fn link(&mut self, a: usize, b: usize) {
        self.edges.push([a, b]);
    }

    /// Add a horizontal circle and return the index of its first vertex.
    fn circle(&mut self, radius: f32, y: f32) -> usize {
        let start = self.vertices.len();
        for i in 0..SEGMENTS {
            let a = i as f32 / SEGMENTS as f32 * TAU;
            self.push(Vec3::new(radius * a.cos(), y, radius * a.sin()));
        }
        for i in 0..SEGMENTS {
            self.link(start + i, start + (i + 1) % SEGMENTS);
        }
        start
    }
}

fn cuboid(size: f32) -> Wireframe {
    let h = size / 2.0;
    let mut w = Wireframe::default();
    for i in 0..8 {
        let x = if i & 1 == 0 { -h } else { h };
        let y = if i & 2 == 0 { -h } else { h };
        let z = if i & 4 == 0 { -h } else { h };
        w.push(Vec3::new(x, y, z));
    }
    // Corners differing in exactly one bit share an edge.
    for a in 0..8usize {
        for bit in [1, 2, 4] {
            let b = a ^ bit;
            if a < b {
                w.link(a, b);
            }
        }
    }
    w
}

fn sphere(radius: f32, rings: usize) -> Wireframe {
    let mut w = Wireframe::default();
    let top = w.push(Vec3::new(0.0, radius, 0.0));
    let bottom = w.push(Vec3::new(0.0, -radius, 0.0));

    let mut starts = Vec::with_capacity(rings);
    for r in 1..=rings {
        let polar = r as f32 / (rings + 1) as f32 * std::f32::consts::PI;
        starts.push(w.circle(radius * polar.sin(), radius * polar.cos()));
    }

    // Meridians from pole to pole through every ring.
    for i in 0..SEGMENTS {
        let mut prev = top;
        for start in &starts {
            w.link(prev, start + i);
            prev = start + i;
        }
        w.link(prev, bottom);
    }
    w
}

fn cone(radius: f32, height: f32) -> Wireframe {
    let mut w = Wireframe::default();
    let apex = w.push(Vec3::new(0.0, height / 2.0, 0.0));
    let base = w.circle(radius, -height / 2.0);
    for i in 0..SEGMENTS {
        w.link(apex, base + i);
    }
    w
}

fn cylinder(radius: f32, height: f32) -> Wireframe {
    let mut w = Wireframe::default();
    let top = w.circle(radius, height / 2.0);
    let bottom = w.circle(radius, -height / 2.0);
    for i in 0..SEGMENTS {
        w.link(top + i, bottom + i);
    }
    w
}

fn torus(radius: f32, tube: f32, tube_segments: usize) -> Wireframe {
    let mut w = Wireframe::default();
    let mut starts = Vec::with_capacity(SEGMENTS);

    // One small circle around the tube per major segment.
    for i in 0..SEGMENTS {
        let major = i as f32 / SEGMENTS as f32 * TAU;
        let center = Vec3::new(radius * major.cos(), 0.0, radius * major.sin());
        let outward = center.normalize_or_zero();
        let start = w.vertices.len();
        for j in 0..tube_segments {
            let minor = j as f32 / tube_segments as f32 * TAU;
            w.push(center + outward * (tube * minor.cos()) + Vec3::Y * (tube * minor.sin()));
        }
        for j in 0..tube_segments {
            w.link(start + j, start + (j + 1) % tube_segments);
        }
        starts.push(start);
    }

    // Join neighbouring tube circles.
    for i in 0..SEGMENTS {
        let next = starts[(i + 1) % SEGMENTS];
        for j in 0..tube_segments {
            w.link(starts[i] + j, next + j);
        }
    }
    w
}

fn ring(inner: f32, outer: f32) -> Wireframe {
    let mut w = Wireframe::default();
    let a = w.circle(inner, 0.0);
    let b = w.circle(outer, 0.0);
    for i in 0..SEGMENTS {
        w.link(a + i, b + i);
    }
    // Rings lie in the XY plane, facing the camera at rest.
    for v in &mut w.vertices {
        *v = Vec3::new(v.x, v.z, 0.0);
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_reference_valid_vertices() {
        for shape in ShapeKind::ALL {
            let w = Wireframe::for_shape(shape);
            assert!(!w.edges.is_empty(), "{shape:?} has no edges");
            for [a, b] in &w.edges {
                assert!(*a < w.vertices.len() && *b < w.vertices.len());
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_cuboid_shape() {
        let w = Wireframe::for_shape(ShapeKind::Box);
        assert_eq!(w.vertices.len(), 8);
        assert_eq!(w.edges.len(), 12);
    }

    #[test]
    fn test_shapes_fit_unit_cube() {
        for shape in ShapeKind::ALL {
            let w = Wireframe::for_shape(shape);
            for v in &w.vertices {
                assert!(v.abs().max_element() <= 0.75, "{shape:?} vertex {v:?}");
            }
        }
    }

    #[test]
    fn test_all_indexed_by_shape() {
        let all = Wireframe::all();
        assert_eq!(all[ShapeKind::Box.index()].vertices.len(), 8);
        let ring = &all[ShapeKind::Ring.index()];
        assert!(ring.vertices.iter().all(|v| v.z == 0.0));
    }
}
