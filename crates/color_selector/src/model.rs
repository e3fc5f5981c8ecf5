use std::fmt;

use crate::{
    ChannelKind, Cmyka, Color, Hsla,
    color::{clamp_octet, unit_to_display},
};

/// Receives the canonical color after every mutation of a [`ColorModel`].
pub trait ColorObserver {
    fn color_changed(&mut self, color: Color);
}

impl<F> ColorObserver for F
where
    F: FnMut(Color),
{
    fn color_changed(&mut self, color: Color) {
        self(color)
    }
}

/// Handle returned by [`ColorModel::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(usize);

/// The single source of truth for the selected color.
///
/// Every mutation goes through [`ColorModel::set_color`], which notifies each
/// observer exactly once, even when the color did not change.
#[derive(Default)]
pub struct ColorModel {
    color: Color,
    observers: Vec<(Subscription, Box<dyn ColorObserver>)>,
    next_id: usize,
}

impl fmt::Debug for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorModel")
            .field("color", &self.color)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ColorModel {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn subscribe(&mut self, observer: impl ColorObserver + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer, returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != len
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hsla(&self) -> Hsla {
        self.color.to_hsla()
    }

    pub fn cmyka(&self) -> Cmyka {
        self.color.to_cmyka()
    }

    pub fn set_color(&mut self, color: Color) {
        tracing::trace!("set color {}", color);
        self.color = color;
        self.notify();
    }

    pub fn set_hsla(&mut self, hsla: Hsla) {
        self.set_color(Color::from_hsla(hsla));
    }

    pub fn set_cmyka(&mut self, cmyka: Cmyka) {
        self.set_color(Color::from_cmyka(cmyka));
    }

    /// Set one channel from a `0..=255` control value.
    ///
    /// The value is clamped first. RGB and alpha are written as octets. HSL
    /// and CMYK channels decompose the current color, replace the one
    /// component with `value / 255` and recompose.
    pub fn set_channel(&mut self, kind: ChannelKind, value: i32) {
        let octet = clamp_octet(value);
        let unit = octet as f32 / 255.0;
        tracing::trace!("set channel {} to {}", kind, octet);

        let color = self.color;
        let next = match kind {
            ChannelKind::Red => Color { r: octet, ..color },
            ChannelKind::Green => Color { g: octet, ..color },
            ChannelKind::Blue => Color { b: octet, ..color },
            ChannelKind::Alpha => Color { a: octet, ..color },
            ChannelKind::Hue | ChannelKind::Saturation | ChannelKind::Lightness => {
                let mut hsla = color.to_hsla();
                match kind {
                    ChannelKind::Hue => hsla.h = unit,
                    ChannelKind::Saturation => hsla.s = unit,
                    _ => hsla.l = unit,
                }
                Color::from_hsla(hsla)
            }
            ChannelKind::Cyan | ChannelKind::Magenta | ChannelKind::Yellow | ChannelKind::Black => {
                let mut cmyka = color.to_cmyka();
                match kind {
                    ChannelKind::Cyan => cmyka.c = unit,
                    ChannelKind::Magenta => cmyka.m = unit,
                    ChannelKind::Yellow => cmyka.y = unit,
                    _ => cmyka.k = unit,
                }
                Color::from_cmyka(cmyka)
            }
        };

        self.set_color(next);
    }

    /// The `0..=255` value a control for `kind` displays for the current color.
    pub fn channel_value(&self, kind: ChannelKind) -> i32 {
        let color = self.color;
        match kind {
            ChannelKind::Red => color.r as i32,
            ChannelKind::Green => color.g as i32,
            ChannelKind::Blue => color.b as i32,
            ChannelKind::Alpha => color.a as i32,
            ChannelKind::Hue => unit_to_display(color.to_hsla().h),
            ChannelKind::Saturation => unit_to_display(color.to_hsla().s),
            ChannelKind::Lightness => unit_to_display(color.to_hsla().l),
            ChannelKind::Cyan => unit_to_display(color.to_cmyka().c),
            ChannelKind::Magenta => unit_to_display(color.to_cmyka().m),
            ChannelKind::Yellow => unit_to_display(color.to_cmyka().y),
            ChannelKind::Black => unit_to_display(color.to_cmyka().k),
        }
    }

    fn notify(&mut self) {
        let color = self.color;
        for (_, observer) in self.observers.iter_mut() {
            observer.color_changed(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::*;

    fn counted(model: &mut ColorModel) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        model.subscribe(move |_: Color| counter.set(counter.get() + 1));
        count
    }

    #[test]
    fn test_one_notification_per_call() {
        let mut model = ColorModel::new(Color::rgb(10, 20, 30));
        let count = counted(&mut model);

        model.set_color(Color::rgb(10, 20, 30));
        assert_eq!(count.get(), 1);

        model.set_channel(ChannelKind::Red, 10);
        assert_eq!(count.get(), 2);

        model.set_channel(ChannelKind::Hue, 128);
        model.set_channel(ChannelKind::Cyan, 0);
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_observer_receives_canonical_color() {
        let mut model = ColorModel::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        model.subscribe(move |color: Color| sink.borrow_mut().push(color));

        model.set_channel(ChannelKind::Green, 255);
        model.set_channel(ChannelKind::Alpha, 64);

        assert_eq!(
            *seen.borrow(),
            [Color::rgba(0, 255, 0, 255), Color::rgba(0, 255, 0, 64)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut model = ColorModel::default();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let subscription = model.subscribe(move |_: Color| counter.set(counter.get() + 1));

        model.set_color(Color::WHITE);
        assert!(model.unsubscribe(subscription));
        assert!(!model.unsubscribe(subscription));
        model.set_color(Color::BLACK);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_channel_values_are_clamped() {
        let mut model = ColorModel::new(Color::rgb(100, 100, 100));

        model.set_channel(ChannelKind::Red, 500);
        assert_eq!(model.color().r, 255);

        model.set_channel(ChannelKind::Red, -10);
        assert_eq!(model.color().r, 0);

        model.set_channel(ChannelKind::Lightness, 1000);
        assert_eq!(model.color(), Color::WHITE);
    }

    #[test]
    fn test_setting_own_value_is_idempotent() {
        let original = Color::rgba(12, 34, 56, 78);
        let mut model = ColorModel::new(original);

        for kind in [
            ChannelKind::Red,
            ChannelKind::Green,
            ChannelKind::Blue,
            ChannelKind::Alpha,
        ] {
            let value = model.channel_value(kind);
            model.set_channel(kind, value);
            assert_eq!(model.color(), original, "{kind}");
        }
    }

    #[test]
    fn test_hsl_channels() {
        let mut model = ColorModel::new(Color::rgb(255, 0, 0));
        assert_eq!(model.channel_value(ChannelKind::Hue), 0);
        assert_eq!(model.channel_value(ChannelKind::Saturation), 255);
        assert_eq!(model.channel_value(ChannelKind::Lightness), 128);

        // 85 / 255 is a third of a turn.
        model.set_channel(ChannelKind::Hue, 85);
        assert_eq!(model.color(), Color::rgb(0, 255, 0));

        model.set_channel(ChannelKind::Saturation, 0);
        assert_eq!(model.color(), Color::rgb(128, 128, 128));

        // Hue 255 is a full turn and lands back on red.
        let mut model = ColorModel::new(Color::rgb(0, 0, 255));
        model.set_channel(ChannelKind::Hue, 255);
        assert_eq!(model.color(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_cmyk_channels() {
        let mut model = ColorModel::new(Color::WHITE);
        model.set_channel(ChannelKind::Cyan, 255);
        assert_eq!(model.color(), Color::rgb(0, 255, 255));
        assert_eq!(model.channel_value(ChannelKind::Cyan), 255);
        assert_eq!(model.channel_value(ChannelKind::Black), 0);

        model.set_channel(ChannelKind::Black, 255);
        assert_eq!(model.color(), Color::BLACK);
        assert_eq!(model.channel_value(ChannelKind::Black), 255);
        assert_eq!(model.channel_value(ChannelKind::Cyan), 0);
    }

    #[test]
    fn test_alpha_is_kept_by_every_family() {
        let mut model = ColorModel::new(Color::rgba(200, 100, 50, 99));
        model.set_channel(ChannelKind::Lightness, 30);
        assert_eq!(model.color().a, 99);
        model.set_channel(ChannelKind::Magenta, 30);
        assert_eq!(model.color().a, 99);
    }
}
