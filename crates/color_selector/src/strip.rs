//! Math for the one-dimensional gradient strips that sit next to each
//! channel control.
//!
//! A strip of `width` pixels spans the `0..=255` value range of its channel
//! from left to right. The host paints one column per [`samples`] entry and
//! marks [`indicator_x`].

use crate::{
    ChannelKind, Color,
    color::{clamp_octet, cmyka, hsla, unit_to_display},
};

/// Side of a checkerboard cell drawn behind alpha content, in pixels.
pub const CHECKER_SIZE: u32 = 7;

const CHECKER_DARK: Color = Color::rgb(96, 96, 96);
const CHECKER_LIGHT: Color = Color::rgb(160, 160, 160);

/// The channel value under pixel column `x` of a strip.
///
/// Columns outside the strip map outside `0..=255`, channel setters clamp.
pub fn pixel_to_value(x: i32, width: u32) -> i32 {
    if width <= 1 {
        return 0;
    }
    (255.0 * x as f32 / (width - 1) as f32 + 0.5) as i32
}

/// The column that marks the current value of `kind` for `color`.
pub fn indicator_x(kind: ChannelKind, color: Color, width: u32) -> i32 {
    if width <= 1 {
        return 0;
    }

    let span = (width - 1) as f32;
    let octet = |v: u8| (v as f32 * span / 255.0 + 0.5) as i32;
    let unit = |v: f32| (v.clamp(0.0, 1.0) * span + 0.5) as i32;

    match kind {
        ChannelKind::Red => octet(color.r),
        ChannelKind::Green => octet(color.g),
        ChannelKind::Blue => octet(color.b),
        ChannelKind::Alpha => octet(color.a),
        ChannelKind::Hue => unit(color.to_hsla().h),
        ChannelKind::Saturation => unit(color.to_hsla().s),
        ChannelKind::Lightness => unit(color.to_hsla().l),
        ChannelKind::Cyan => unit(color.to_cmyka().c),
        ChannelKind::Magenta => unit(color.to_cmyka().m),
        ChannelKind::Yellow => unit(color.to_cmyka().y),
        ChannelKind::Black => unit(color.to_cmyka().k),
    }
}

/// The color a strip for `kind` shows at position `t` in `0.0..=1.0`.
///
/// Color channels are sampled opaque. The hue strip is the fully saturated
/// spectrum, the other HSL and CMYK strips keep the remaining components of
/// `color`. The alpha strip keeps the RGB of `color`.
pub fn sample(kind: ChannelKind, color: Color, t: f32) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let octet = clamp_octet(unit_to_display(t));

    match kind {
        ChannelKind::Red => Color::rgb(octet, color.g, color.b),
        ChannelKind::Green => Color::rgb(color.r, octet, color.b),
        ChannelKind::Blue => Color::rgb(color.r, color.g, octet),
        ChannelKind::Alpha => color.with_alpha(octet),
        ChannelKind::Hue => Color::from_hsla(hsla(t, 1.0, 0.5, 1.0)),
        ChannelKind::Saturation => {
            let c = color.to_hsla();
            Color::from_hsla(hsla(c.h, t, c.l, 1.0))
        }
        ChannelKind::Lightness => {
            let c = color.to_hsla();
            Color::from_hsla(hsla(c.h, c.s, t, 1.0))
        }
        ChannelKind::Cyan => {
            let c = color.to_cmyka();
            Color::from_cmyka(cmyka(t, c.m, c.y, c.k, 1.0))
        }
        ChannelKind::Magenta => {
            let c = color.to_cmyka();
            Color::from_cmyka(cmyka(c.c, t, c.y, c.k, 1.0))
        }
        ChannelKind::Yellow => {
            let c = color.to_cmyka();
            Color::from_cmyka(cmyka(c.c, c.m, t, c.k, 1.0))
        }
        ChannelKind::Black => {
            let c = color.to_cmyka();
            Color::from_cmyka(cmyka(c.c, c.m, c.y, t, 1.0))
        }
    }
}

/// One sample per pixel column of a strip `width` pixels wide.
pub fn samples(kind: ChannelKind, color: Color, width: u32) -> Vec<Color> {
    let span = width.saturating_sub(1).max(1) as f32;
    (0..width)
        .map(|x| sample(kind, color, x as f32 / span))
        .collect()
}

/// The checkerboard color at pixel `(x, y)`.
pub fn checker_color(x: u32, y: u32) -> Color {
    if (x / CHECKER_SIZE + y / CHECKER_SIZE) & 1 == 1 {
        CHECKER_DARK
    } else {
        CHECKER_LIGHT
    }
}
