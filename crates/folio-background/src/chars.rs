//! Character constants for the terminal rasterizer.

/// Particle glyphs by layer, largest first.
pub const PARTICLE_CHARS: &[char] = &['•', '·', '.'];

/// Trail glyph.
pub const TRAIL_CHAR: char = '·';

/// Wireframe edge glyphs by screen direction.
pub const EDGE_HORIZONTAL: char = '─';
pub const EDGE_VERTICAL: char = '│';
pub const EDGE_RISING: char = '╱';
pub const EDGE_FALLING: char = '╲';
