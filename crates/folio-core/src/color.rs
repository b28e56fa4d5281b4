//! Floating point RGB color used by the scene and the terminal rasterizer.

use ratatui::style::Color;

/// Linear RGB color with channels nominally in `0.0..=1.0`.
///
/// Channels are not clamped on construction: additive blending and emissive
/// boosts may push them past 1.0 until [`Rgb::clamped`] is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Convert HSL to RGB. All three inputs are on a `0.0..=1.0` scale,
    /// with hue wrapping around the color wheel.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        if s == 0.0 {
            return Self::new(l, l, l);
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(1.0);

        Self {
            r: hue_to_rgb(p, q, h + 1.0 / 3.0),
            g: hue_to_rgb(p, q, h),
            b: hue_to_rgb(p, q, h - 1.0 / 3.0),
        }
    }

    /// Multiply every channel by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Add `amount` to every channel.
    pub fn offset(self, amount: f32) -> Self {
        Self::new(self.r + amount, self.g + amount, self.b + amount)
    }

    /// Channel-wise multiplication.
    pub fn tint(self, other: Rgb) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /// Clamp every channel into `0.0..=1.0`.
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Largest channel value.
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Convert to a terminal color, clamping out-of-range channels.
    pub fn to_color(self) -> Color {
        let c = self.clamped();
        Color::Rgb(
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        )
    }
}

impl std::ops::Add for Rgb {
    type Output = Rgb;

    fn add(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl std::ops::AddAssign for Rgb {
    fn add_assign(&mut self, rhs: Rgb) {
        *self = *self + rhs;
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(approx(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb::new(1.0, 0.0, 0.0)));
        assert!(approx(Rgb::from_hsl(1.0 / 3.0, 1.0, 0.5), Rgb::new(0.0, 1.0, 0.0)));
        assert!(approx(Rgb::from_hsl(2.0 / 3.0, 1.0, 0.5), Rgb::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_hsl_gray_and_wrap() {
        assert!(approx(Rgb::from_hsl(0.4, 0.0, 0.25), Rgb::new(0.25, 0.25, 0.25)));
        assert!(approx(Rgb::from_hsl(1.5, 1.0, 0.5), Rgb::from_hsl(0.5, 1.0, 0.5)));
    }

    #[test]
    fn test_from_hex() {
        assert!(approx(Rgb::from_hex(0x00ff00), Rgb::new(0.0, 1.0, 0.0)));
        assert!(approx(Rgb::from_hex(0x000000), Rgb::BLACK));
    }

    #[test]
    fn test_to_color_clamps() {
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_color(), Color::Rgb(255, 0, 128));
    }
}
