//! Color utility functions for the scene.

use ratatui::style::Color;

/// Sky gradient stops, top to bottom.
pub const SKY_STOPS: [(f32, Rgb); 3] = [
    (0.0, Rgb(0x1E, 0x12, 0x2D)),
    (0.4, Rgb(0x3F, 0x2F, 0x6A)),
    (1.0, Rgb(0x8F, 0x66, 0xFF)),
];

/// Mountain layer fills, back to front.
pub const MOUNTAIN_COLORS: [Rgb; 3] = [
    Rgb(0x43, 0x28, 0x79),
    Rgb(0x35, 0x20, 0x60),
    Rgb(0x20, 0x13, 0x39),
];

pub const GROUND_COLOR: Rgb = Rgb(0x15, 0x0D, 0x26);

/// Hue of the star and ball palette.
const PALETTE_HUE: f32 = 54.0;
/// Saturation of the star and ball palette.
const PALETTE_SATURATION: f32 = 0.96;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Mix `other` over `self` with the given opacity.
    pub fn blend(self, other: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * alpha).round() as u8;
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Yellow palette color for a lightness in percent.
pub fn palette_color(lightness: u8) -> Rgb {
    hsl_to_rgb(
        PALETTE_HUE,
        PALETTE_SATURATION,
        f32::from(lightness.min(100)) / 100.0,
    )
}

/// Color of a linear gradient at `t` in `0.0..=1.0`.
pub fn gradient_at(stops: &[(f32, Rgb)], t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let Some(&(_, first)) = stops.first() else {
        return Rgb::default();
    };

    let mut previous = (0.0, first);
    for &(offset, color) in stops {
        if t <= offset {
            let span = offset - previous.0;
            if span <= f32::EPSILON {
                return color;
            }
            return previous.1.blend(color, (t - previous.0) / span);
        }
        previous = (offset, color);
    }
    previous.1
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
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
