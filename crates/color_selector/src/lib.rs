//! Headless core of a color selector: the color model, its RGB/HSL/CMYK
//! views, hue wheel geometry and the state of the controls around them.
//!
//! Nothing here renders. A host UI forwards pointer positions and control
//! values in, subscribes to color changes and re-queries display values.

mod channel;
mod color;
mod config;
mod edit;
mod interaction;
mod model;
mod named;
mod parse;
mod selector;
pub mod strip;
mod wheel;

pub use channel::{ChannelKind, ChannelSpec, ColorFamily, ColorMode};
pub use color::{Cmyka, Color, Hsla, cmyka, hsla};
pub use config::{IndicatorStrategy, SelectorConfig};
pub use edit::HexEdit;
pub use interaction::{DragMode, WheelInteraction};
pub use model::{ColorModel, ColorObserver, Subscription};
pub use named::{color_names, named_color};
pub use parse::{ColorParseError, parse_color};
pub use selector::ColorSelector;
pub use wheel::{Barycentric, INNER_RADIUS_RATIO, WheelGeometry, signed_area};

/// Route `tracing` output of a test through the test harness, filtered by
/// `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
