use smallvec::SmallVec;

use crate::{
    ChannelKind, ChannelSpec, Color, ColorMode, ColorModel, ColorObserver, DragMode, HexEdit,
    IndicatorStrategy, SelectorConfig, Subscription, WheelInteraction, strip,
};

/// A complete color selector without any rendering.
///
/// Owns the [`ColorModel`] together with the state of every control that
/// displays it: the active tab, the hex text field and the hue wheel. Host
/// widgets forward their input here and re-query the display values after
/// each change notification.
#[derive(Debug)]
pub struct ColorSelector {
    config: SelectorConfig,
    modes: SmallVec<[ColorMode; 4]>,
    mode: ColorMode,
    model: ColorModel,
    edit: HexEdit,
    wheel: WheelInteraction,
}

impl Default for ColorSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl ColorSelector {
    pub fn new(config: SelectorConfig) -> Self {
        let modes = config.modes();
        let mode = modes.first().copied().unwrap_or_default();
        let color = config.initial_color;

        let mut wheel = WheelInteraction::default();
        wheel.sync_hue(color);

        Self {
            modes,
            mode,
            model: ColorModel::new(color),
            edit: HexEdit::new(color),
            wheel,
            config,
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    pub fn subscribe(&mut self, observer: impl ColorObserver + 'static) -> Subscription {
        self.model.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.model.unsubscribe(subscription)
    }

    /// The enabled tabs in display order.
    pub fn modes(&self) -> &[ColorMode] {
        &self.modes
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Switch the active tab.
    ///
    /// The current color is broadcast again so the controls of the new tab
    /// refresh. Returns `false` for disabled tabs and for the active one.
    pub fn set_mode(&mut self, mode: ColorMode) -> bool {
        if !self.modes.contains(&mode) {
            tracing::debug!("ignored disabled color mode {}", mode);
            return false;
        }
        if self.mode == mode {
            return false;
        }

        self.mode = mode;
        self.model.set_color(self.model.color());
        true
    }

    /// The per-channel controls of the active tab.
    pub fn channels(&self) -> SmallVec<[ChannelSpec; 5]> {
        self.mode.channels(self.config.alpha)
    }

    /// The value each control of the active tab displays.
    pub fn channel_values(&self) -> SmallVec<[(ChannelSpec, i32); 5]> {
        self.channels()
            .into_iter()
            .map(|spec| (spec, self.model.channel_value(spec.kind)))
            .collect()
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.model.color()
    }

    pub fn set_color(&mut self, color: Color) {
        self.model.set_color(color);
        self.sync_controls();
    }

    /// Apply a spin box or slider value.
    pub fn set_channel(&mut self, kind: ChannelKind, value: i32) {
        self.model.set_channel(kind, value);
        self.sync_controls();
    }

    /// Apply a click or drag at column `x` of the gradient strip of `kind`.
    pub fn set_channel_from_strip(&mut self, kind: ChannelKind, x: i32, width: u32) {
        self.set_channel(kind, strip::pixel_to_value(x, width));
    }

    /// The color the swatch button shows, `None` without a swatch.
    pub fn swatch(&self) -> Option<Color> {
        self.config.color_button.then(|| self.model.color())
    }

    /// The text the hex field displays, `None` without a hex field.
    pub fn text(&self) -> Option<&str> {
        self.config.color_edit.then(|| self.edit.text())
    }

    /// Commit the hex field, returns `true` when the color was replaced.
    ///
    /// Always `false` when the config has no hex field.
    pub fn commit_text(&mut self, text: &str) -> bool {
        if !self.config.color_edit {
            return false;
        }

        match self.edit.commit(text) {
            Some(color) => {
                self.set_color(color);
                true
            }
            None => false,
        }
    }

    pub fn wheel(&self) -> &WheelInteraction {
        &self.wheel
    }

    /// Lay the wheel out in a drawing surface of `width * height` pixels.
    pub fn wheel_layout(&mut self, width: f32, height: f32) {
        self.wheel.layout(width, height, self.model.color());
    }

    pub fn wheel_press(&mut self, x: f32, y: f32) -> DragMode {
        let mode = self.wheel.press(x, y, &mut self.model);
        self.sync_controls();
        mode
    }

    pub fn wheel_drag(&mut self, x: f32, y: f32) -> bool {
        let moved = self.wheel.drag(x, y, &mut self.model);
        self.sync_controls();
        moved
    }

    pub fn wheel_release(&mut self, x: f32, y: f32) {
        self.wheel.release(x, y, &mut self.model);
        self.sync_controls();
    }

    /// Where to draw the triangle indicator for the current color.
    pub fn wheel_indicator(&self) -> Option<(f32, f32)> {
        let hsla = self.model.hsla();
        let geometry = self.wheel.geometry();
        match self.config.wheel_indicator {
            IndicatorStrategy::Scan => geometry
                .nearest_interior_point(hsla.s, hsla.l)
                .map(|(x, y)| (x as f32, y as f32)),
            IndicatorStrategy::ClosedForm => geometry.sl_to_point(hsla.s, hsla.l),
        }
    }

    fn sync_controls(&mut self) {
        let color = self.model.color();
        self.edit.set_color(color);
        self.wheel.sync_hue(color);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    fn counted(selector: &mut ColorSelector) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        selector.subscribe(move |_: Color| counter.set(counter.get() + 1));
        count
    }

    fn labelled_values(selector: &ColorSelector) -> Vec<(&'static str, i32)> {
        selector
            .channel_values()
            .into_iter()
            .map(|(spec, value)| (spec.label, value))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let selector = ColorSelector::new(SelectorConfig {
            initial_color: Color::rgb(255, 0, 0),
            ..Default::default()
        });

        assert_eq!(selector.mode(), ColorMode::Rgb);
        assert_eq!(selector.text(), Some("#ff0000ff"));
        assert_eq!(
            labelled_values(&selector),
            [("R", 255), ("G", 0), ("B", 0), ("A", 255)]
        );
    }

    #[test]
    fn test_channel_edits_refresh_text() {
        let mut selector = ColorSelector::default();
        let count = counted(&mut selector);

        selector.set_channel(ChannelKind::Blue, 300);
        assert_eq!(selector.color(), Color::rgb(0, 0, 255));
        assert_eq!(selector.text(), Some("#0000ffff"));

        selector.set_channel(ChannelKind::Blue, 255);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_strip_click() {
        let mut selector = ColorSelector::default();
        selector.set_channel_from_strip(ChannelKind::Green, 50, 101);
        assert_eq!(selector.color(), Color::rgb(0, 128, 0));

        selector.set_channel_from_strip(ChannelKind::Green, -40, 101);
        assert_eq!(selector.color(), Color::BLACK);
    }

    #[test]
    fn test_commit_text() {
        let mut selector = ColorSelector::default();
        let count = counted(&mut selector);

        assert!(selector.commit_text("#FF0000FF"));
        assert_eq!(selector.color(), Color::rgb(255, 0, 0));
        assert_eq!(selector.text(), Some("#ff0000ff"));
        assert_eq!(count.get(), 1);

        assert!(!selector.commit_text("#ff00z"));
        assert!(!selector.commit_text("#ff0000ff"));
        assert_eq!(selector.color(), Color::rgb(255, 0, 0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_disabled_swatch_and_edit() {
        let mut selector = ColorSelector::new(SelectorConfig {
            color_button: false,
            color_edit: false,
            ..Default::default()
        });
        assert_eq!(selector.swatch(), None);
        assert_eq!(selector.text(), None);
        assert!(!selector.commit_text("#ff0000ff"));
        assert_eq!(selector.color(), Color::BLACK);

        let selector = ColorSelector::default();
        assert_eq!(selector.swatch(), Some(Color::BLACK));
    }

    #[test]
    fn test_set_mode() {
        crate::init_test_tracing();
        let mut selector = ColorSelector::new(SelectorConfig {
            cmyk_tab: false,
            alpha: false,
            initial_color: Color::rgb(255, 0, 0),
            ..Default::default()
        });
        let count = counted(&mut selector);

        assert!(!selector.set_mode(ColorMode::Cmyk));
        assert!(!selector.set_mode(ColorMode::Rgb));
        assert_eq!(count.get(), 0);

        assert!(selector.set_mode(ColorMode::Hsl));
        assert_eq!(count.get(), 1);
        assert_eq!(
            labelled_values(&selector),
            [("H", 0), ("S", 255), ("L", 128)]
        );

        assert!(selector.set_mode(ColorMode::Wheel));
        assert!(selector.channels().is_empty());
        assert_eq!(
            selector.modes(),
            [ColorMode::Rgb, ColorMode::Hsl, ColorMode::Wheel]
        );
    }

    #[test]
    fn test_wheel_drives_model_and_text() {
        let mut selector = ColorSelector::new(SelectorConfig {
            initial_color: Color::rgb(255, 0, 0),
            ..Default::default()
        });
        selector.wheel_layout(200.0, 200.0);

        let (x, y) = selector
            .wheel()
            .geometry()
            .angle_to_point(90.0, std::f32::consts::PI);
        assert_eq!(selector.wheel_press(x, y), DragMode::Hue);
        assert_eq!(selector.color(), Color::rgb(0, 255, 255));
        assert_eq!(selector.text(), Some("#00ffffff"));

        selector.wheel_release(x, y);
        assert!(!selector.wheel().is_dragging());
        assert!(!selector.wheel_drag(x, y));
    }

    #[test]
    fn test_ring_press_on_black_picks_triangle_hue() {
        let mut selector = ColorSelector::default();
        selector.wheel_layout(200.0, 200.0);

        let (x, y) = selector
            .wheel()
            .geometry()
            .angle_to_point(90.0, std::f32::consts::PI);
        selector.wheel_press(x, y);
        selector.wheel_release(x, y);
        assert_eq!(selector.color(), Color::BLACK);
        assert!((selector.wheel().geometry().hue() - 0.5).abs() < 1e-4);

        let [hue_vertex, _, _] = selector.wheel().geometry().vertices();
        let (cx, cy) = selector.wheel().geometry().center();
        let x = hue_vertex.0 + (cx - hue_vertex.0) * 0.05;
        let y = hue_vertex.1 + (cy - hue_vertex.1) * 0.05;
        assert_eq!(selector.wheel_press(x, y), DragMode::SaturationLightness);

        let hsla = selector.model().hsla();
        assert!((hsla.h - 0.5).abs() < 0.01, "{hsla:?}");
        assert!(hsla.s > 0.9, "{hsla:?}");
    }

    #[test]
    fn test_external_color_rotates_wheel() {
        let mut selector = ColorSelector::default();
        selector.wheel_layout(200.0, 200.0);
        selector.set_color(Color::rgb(0, 0, 255));
        assert!((selector.wheel().geometry().hue() - 2.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_wheel_indicator_strategies() {
        let color = Color::from_hsla(crate::hsla(0.1, 0.4, 0.5, 1.0));
        let mut scan = ColorSelector::new(SelectorConfig {
            initial_color: color,
            ..Default::default()
        });
        let mut closed_form = ColorSelector::new(SelectorConfig {
            initial_color: color,
            wheel_indicator: IndicatorStrategy::ClosedForm,
            ..Default::default()
        });

        assert_eq!(scan.wheel_indicator(), None);

        scan.wheel_layout(200.0, 200.0);
        closed_form.wheel_layout(200.0, 200.0);
        let (sx, sy) = scan.wheel_indicator().unwrap();
        let (cx, cy) = closed_form.wheel_indicator().unwrap();
        assert_eq!(sx.fract(), 0.0);
        assert!((sx - cx).hypot(sy - cy) <= 2.0, "{sx},{sy} vs {cx},{cy}");
    }
}
