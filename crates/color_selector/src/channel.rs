use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One addressable scalar of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
    Cyan,
    Magenta,
    Yellow,
    Black,
    Alpha,
}

impl ChannelKind {
    /// Iterate every channel in declaration order.
    pub fn all() -> impl Iterator<Item = ChannelKind> {
        enum_iterator::all::<ChannelKind>()
    }

    /// The color family this channel belongs to, `None` for alpha which is
    /// shared by every family.
    pub fn family(self) -> Option<ColorFamily> {
        match self {
            Self::Red | Self::Green | Self::Blue => Some(ColorFamily::Rgb),
            Self::Hue | Self::Saturation | Self::Lightness => Some(ColorFamily::Hsl),
            Self::Cyan | Self::Magenta | Self::Yellow | Self::Black => Some(ColorFamily::Cmyk),
            Self::Alpha => None,
        }
    }

    /// The one letter label shown next to the channel controls.
    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
            Self::Hue => "H",
            Self::Saturation => "S",
            Self::Lightness => "L",
            Self::Cyan => "C",
            Self::Magenta => "M",
            Self::Yellow => "Y",
            Self::Black => "K",
            Self::Alpha => "A",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Black => "black",
            Self::Alpha => "alpha",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Rgb,
    Hsl,
    Cmyk,
}

impl ColorFamily {
    const RGB: [ChannelKind; 3] = [ChannelKind::Red, ChannelKind::Green, ChannelKind::Blue];
    const HSL: [ChannelKind; 3] = [
        ChannelKind::Hue,
        ChannelKind::Saturation,
        ChannelKind::Lightness,
    ];
    const CMYK: [ChannelKind; 4] = [
        ChannelKind::Cyan,
        ChannelKind::Magenta,
        ChannelKind::Yellow,
        ChannelKind::Black,
    ];

    /// The channels of this family, alpha excluded.
    pub fn channels(self) -> &'static [ChannelKind] {
        match self {
            Self::Rgb => &Self::RGB,
            Self::Hsl => &Self::HSL,
            Self::Cmyk => &Self::CMYK,
        }
    }
}

/// A tab of the selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Rgb,
    Hsl,
    Cmyk,
    Wheel,
}

impl ColorMode {
    pub fn all() -> impl Iterator<Item = ColorMode> {
        enum_iterator::all::<ColorMode>()
    }

    /// The channel family edited by this mode. The wheel edits HSL through
    /// pointer interaction rather than per-channel controls.
    pub fn family(self) -> Option<ColorFamily> {
        match self {
            Self::Rgb => Some(ColorFamily::Rgb),
            Self::Hsl => Some(ColorFamily::Hsl),
            Self::Cmyk => Some(ColorFamily::Cmyk),
            Self::Wheel => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Cmyk => "CMYK",
            Self::Wheel => "Wheel",
        }
    }

    /// The per-channel controls this mode shows, in display order.
    ///
    /// Alpha comes last and only when `alpha` is enabled.
    pub fn channels(self, alpha: bool) -> SmallVec<[ChannelSpec; 5]> {
        let mut specs: SmallVec<[ChannelSpec; 5]> = self
            .family()
            .map(ColorFamily::channels)
            .unwrap_or_default()
            .iter()
            .copied()
            .map(ChannelSpec::from)
            .collect();

        if alpha {
            specs.push(ChannelSpec::from(ChannelKind::Alpha));
        }
        specs
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A row of the data-driven channel table: which channel a control edits and
/// how it is labelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelSpec {
    pub kind: ChannelKind,
    pub label: &'static str,
}

impl From<ChannelKind> for ChannelSpec {
    fn from(kind: ChannelKind) -> Self {
        Self {
            kind,
            label: kind.label(),
        }
    }
}
