use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;


/// An 8-bit, straight alpha sRGB color.
///
/// This is the canonical representation of a color in the selector. The
/// [`Hsla`] and [`Cmyka`] views are computed on demand from it and never
/// stored, so there is always exactly one source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from integer channels, clamping each one into `0..=255`.
    pub fn clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: clamp_octet(r),
            g: clamp_octet(g),
            b: clamp_octet(b),
            a: clamp_octet(a),
        }
    }

    #[must_use]
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns the color with full opacity.
    #[must_use]
    #[inline]
    pub fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    #[inline]
    pub fn into_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Decompose into hue, saturation, lightness and alpha, all in `0.0..=1.0`.
    ///
    /// The hue is expressed in turns and is always `< 1.0`. Achromatic colors
    /// report a hue of `0.0`.
    pub fn to_hsla(self) -> Hsla {
        let r = octet_to_unit(self.r);
        let g = octet_to_unit(self.g);
        let b = octet_to_unit(self.b);

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let delta = max - min;
        let lightness = (max + min) * 0.5;
        let alpha = octet_to_unit(self.a);

        if delta <= f32::EPSILON {
            return Hsla {
                h: 0.0,
                s: 0.0,
                l: lightness,
                a: alpha,
            };
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs()).max(f32::EPSILON);
        let hue_sector = if (max - r).abs() <= f32::EPSILON {
            ((g - b) / delta).rem_euclid(6.0)
        } else if (max - g).abs() <= f32::EPSILON {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsla {
            h: (hue_sector / 6.0).rem_euclid(1.0),
            s: saturation.clamp(0.0, 1.0),
            l: lightness.clamp(0.0, 1.0),
            a: alpha,
        }
    }

    /// Recompose a color from an HSL view, clamping every component first.
    pub fn from_hsla(hsla: Hsla) -> Self {
        let h = hsla.h.rem_euclid(1.0) * 6.0;
        let s = hsla.s.clamp(0.0, 1.0);
        let l = hsla.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c * 0.5;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: unit_to_octet(r + m),
            g: unit_to_octet(g + m),
            b: unit_to_octet(b + m),
            a: unit_to_octet(hsla.a),
        }
    }

    /// Decompose into cyan, magenta, yellow, black and alpha, all in `0.0..=1.0`.
    pub fn to_cmyka(self) -> Cmyka {
        let r = octet_to_unit(self.r);
        let g = octet_to_unit(self.g);
        let b = octet_to_unit(self.b);
        let a = octet_to_unit(self.a);

        let max = r.max(g.max(b));
        // Pure black: every ink but K is undefined, report them as zero.
        if max <= f32::EPSILON {
            return Cmyka {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
                a,
            };
        }

        Cmyka {
            c: ((max - r) / max).clamp(0.0, 1.0),
            m: ((max - g) / max).clamp(0.0, 1.0),
            y: ((max - b) / max).clamp(0.0, 1.0),
            k: (1.0 - max).clamp(0.0, 1.0),
            a,
        }
    }

    /// Recompose a color from a CMYK view, clamping every component first.
    pub fn from_cmyka(cmyka: Cmyka) -> Self {
        let k = 1.0 - cmyka.k.clamp(0.0, 1.0);
        let ink = |v: f32| unit_to_octet((1.0 - v.clamp(0.0, 1.0)) * k);

        Self {
            r: ink(cmyka.c),
            g: ink(cmyka.m),
            b: ink(cmyka.y),
            a: unit_to_octet(cmyka.a),
        }
    }

    /// The integer gray level used to pick contrasting decorations.
    #[inline]
    pub fn gray(self) -> u8 {
        ((self.r as u32 * 11 + self.g as u32 * 16 + self.b as u32 * 5) / 32) as u8
    }

    /// White for dark colors and black for light ones.
    ///
    /// Indicators drawn on top of this color use it to stay visible.
    pub fn contrast(self) -> Color {
        if self.gray() < 128 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }

    /// Lossless `#rrggbbaa` representation.
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        crate::parse::parse_color(&text).map_err(serde::de::Error::custom)
    }
}

/// HSL view of a [`Color`].
///
/// Every component is in `0.0..=1.0`, the hue is measured in turns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

/// Create an [`Hsla`], wrapping the hue and clamping the other components.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Hsla {
    Hsla {
        h: h.rem_euclid(1.0),
        s: s.clamp(0.0, 1.0),
        l: l.clamp(0.0, 1.0),
        a: a.clamp(0.0, 1.0),
    }
}

impl From<Color> for Hsla {
    fn from(color: Color) -> Self {
        color.to_hsla()
    }
}

impl From<Hsla> for Color {
    fn from(hsla: Hsla) -> Self {
        Color::from_hsla(hsla)
    }
}

/// CMYK view of a [`Color`], every component in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyka {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
    pub a: f32,
}

/// Create a [`Cmyka`], clamping every component.
pub fn cmyka(c: f32, m: f32, y: f32, k: f32, a: f32) -> Cmyka {
    Cmyka {
        c: c.clamp(0.0, 1.0),
        m: m.clamp(0.0, 1.0),
        y: y.clamp(0.0, 1.0),
        k: k.clamp(0.0, 1.0),
        a: a.clamp(0.0, 1.0),
    }
}

impl From<Color> for Cmyka {
    fn from(color: Color) -> Self {
        color.to_cmyka()
    }
}

impl From<Cmyka> for Color {
    fn from(cmyka: Cmyka) -> Self {
        Color::from_cmyka(cmyka)
    }
}

#[inline]
pub(crate) fn clamp_octet(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[inline]
pub(crate) fn octet_to_unit(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
pub(crate) fn unit_to_octet(v: f32) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Map a unit float to the `0..=255` integer scale used by spin boxes.
#[inline]
pub(crate) fn unit_to_display(v: f32) -> i32 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as i32
}
