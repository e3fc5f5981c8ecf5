use crate::{Color, ColorModel, WheelGeometry};

/// Which part of the wheel a pointer drag is editing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Idle,
    Hue,
    SaturationLightness,
}

/// Pointer state machine of the hue wheel.
///
/// A press on the ring starts a hue drag, a press inside the triangle starts
/// a saturation/lightness drag. The drag mode is kept until release, so
/// moves outside the region that started it keep updating the color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInteraction {
    geometry: WheelGeometry,
    mode: DragMode,
}

impl WheelInteraction {
    pub fn new(geometry: WheelGeometry) -> Self {
        Self {
            geometry,
            mode: DragMode::Idle,
        }
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.mode != DragMode::Idle
    }

    /// Recompute the geometry for new drawing bounds.
    pub fn layout(&mut self, width: f32, height: f32, color: Color) {
        let hue = self.followed_hue(color);
        self.geometry = WheelGeometry::from_bounds(width, height, hue);
    }

    /// Follow the hue of a color set from elsewhere.
    ///
    /// Ignored while the triangle is dragged, so the triangle does not turn
    /// under the pointer when the color becomes achromatic. Grays carry no
    /// hue, so they keep the one the wheel already shows.
    pub fn sync_hue(&mut self, color: Color) {
        let hue = self.followed_hue(color);
        self.geometry.set_hue(hue);
    }

    fn followed_hue(&self, color: Color) -> f32 {
        let hsla = color.to_hsla();
        if self.mode == DragMode::SaturationLightness || hsla.s <= 0.0 {
            self.geometry.hue()
        } else {
            hsla.h
        }
    }

    pub fn press(&mut self, x: f32, y: f32, model: &mut ColorModel) -> DragMode {
        let mode = if let Some(hue) = self.geometry.hit_ring(x, y) {
            self.apply_hue(hue, model);
            DragMode::Hue
        } else if let Some((s, l)) = self.geometry.hit_triangle(x, y) {
            self.apply_sl(s, l, model);
            DragMode::SaturationLightness
        } else {
            DragMode::Idle
        };

        self.set_mode(mode);
        mode
    }

    /// Continue the current drag, returns `false` when no drag is active.
    pub fn drag(&mut self, x: f32, y: f32, model: &mut ColorModel) -> bool {
        match self.mode {
            DragMode::Idle => false,
            DragMode::Hue => match self.geometry.hue_at(x, y) {
                Some(hue) => {
                    self.apply_hue(hue, model);
                    true
                }
                None => false,
            },
            DragMode::SaturationLightness => {
                if self.geometry.is_degenerate() {
                    return false;
                }
                // Outside the triangle the weights stay normalized, `to_sl`
                // clamps the result.
                let (s, l) = self.geometry.to_barycentric(x, y).to_sl();
                self.apply_sl(s, l, model);
                true
            }
        }
    }

    /// Apply the final pointer position and end the drag.
    pub fn release(&mut self, x: f32, y: f32, model: &mut ColorModel) {
        self.drag(x, y, model);
        self.set_mode(DragMode::Idle);
    }

    fn set_mode(&mut self, mode: DragMode) {
        if self.mode != mode {
            tracing::debug!("wheel drag {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn apply_hue(&mut self, hue: f32, model: &mut ColorModel) {
        let mut hsla = model.hsla();
        hsla.h = hue;
        self.geometry.set_hue(hue);
        model.set_hsla(hsla);
    }

    fn apply_sl(&mut self, s: f32, l: f32, model: &mut ColorModel) {
        let mut hsla = model.hsla();
        hsla.h = self.geometry.hue();
        hsla.s = s;
        hsla.l = l;
        model.set_hsla(hsla);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, f32::consts::PI, rc::Rc};

    use super::*;

    fn wheel(color: Color) -> (WheelInteraction, ColorModel) {
        let mut interaction = WheelInteraction::default();
        interaction.layout(200.0, 200.0, color);
        (interaction, ColorModel::new(color))
    }

    fn centroid(geometry: &WheelGeometry) -> (f32, f32) {
        let [a, b, c] = geometry.vertices();
        ((a.0 + b.0 + c.0) / 3.0, (a.1 + b.1 + c.1) / 3.0)
    }

    #[test]
    fn test_press_on_ring_sets_hue() {
        let (mut interaction, mut model) = wheel(Color::rgb(255, 0, 0));
        let (x, y) = interaction.geometry().angle_to_point(90.0, PI);

        assert_eq!(interaction.press(x, y, &mut model), DragMode::Hue);
        assert_eq!(model.color(), Color::rgb(0, 255, 255));
        assert!((interaction.geometry().hue() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_hue_drag_continues_outside_ring() {
        let (mut interaction, mut model) = wheel(Color::rgb(255, 0, 0));
        let (x, y) = interaction.geometry().angle_to_point(90.0, 0.0);
        interaction.press(x, y, &mut model);

        // Well outside the wheel, a quarter turn up.
        let (x, y) = interaction.geometry().angle_to_point(500.0, PI / 2.0);
        assert!(interaction.drag(x, y, &mut model));
        assert_eq!(interaction.mode(), DragMode::Hue);
        assert!((model.hsla().h - 0.25).abs() < 0.01, "{:?}", model.hsla());

        let (x, y) = interaction.geometry().center();
        interaction.release(x, y, &mut model);
        assert_eq!(interaction.mode(), DragMode::Idle);
    }

    #[test]
    fn test_press_in_triangle_sets_saturation_and_lightness() {
        let (mut interaction, mut model) = wheel(Color::rgb(0, 0, 255));
        let (x, y) = centroid(interaction.geometry());

        assert_eq!(
            interaction.press(x, y, &mut model),
            DragMode::SaturationLightness
        );
        let hsla = model.hsla();
        assert!((hsla.h - 2.0 / 3.0).abs() < 0.01, "{hsla:?}");
        assert!((hsla.s - 1.0 / 3.0).abs() < 0.01, "{hsla:?}");
        assert!((hsla.l - 0.5).abs() < 0.01, "{hsla:?}");
    }

    #[test]
    fn test_triangle_drag_clamps_outside_points() {
        let (mut interaction, mut model) = wheel(Color::rgb(0, 0, 255));
        let (x, y) = centroid(interaction.geometry());
        interaction.press(x, y, &mut model);

        let [hue_vertex, _, _] = interaction.geometry().vertices();
        assert!(interaction.drag(hue_vertex.0, hue_vertex.1, &mut model));
        assert_eq!(model.color(), Color::rgb(0, 0, 255));

        assert!(interaction.drag(-300.0, 900.0, &mut model));
        assert_eq!(interaction.mode(), DragMode::SaturationLightness);
        let hsla = model.hsla();
        assert!((0.0..=1.0).contains(&hsla.s) && (0.0..=1.0).contains(&hsla.l));
    }

    #[test]
    fn test_triangle_drag_keeps_hue_through_gray() {
        crate::init_test_tracing();
        let (mut interaction, mut model) = wheel(Color::rgb(0, 255, 0));
        let (x, y) = centroid(interaction.geometry());
        interaction.press(x, y, &mut model);

        let [hue_vertex, black_vertex, _] = interaction.geometry().vertices();
        interaction.drag(black_vertex.0, black_vertex.1, &mut model);
        assert_eq!(model.color(), Color::BLACK);

        // The host resyncs after each change, the triangle must not turn red.
        interaction.sync_hue(model.color());
        interaction.drag(hue_vertex.0, hue_vertex.1, &mut model);
        assert_eq!(model.color(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let (mut interaction, mut model) = wheel(Color::rgb(10, 20, 30));
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        model.subscribe(move |_: Color| counter.set(counter.get() + 1));

        assert_eq!(interaction.press(199.0, 0.0, &mut model), DragMode::Idle);
        assert!(!interaction.drag(100.0, 100.0, &mut model));
        interaction.release(100.0, 100.0, &mut model);

        assert_eq!(count.get(), 0);
        assert_eq!(model.color(), Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_ring_press_on_gray_keeps_hue() {
        let (mut interaction, mut model) = wheel(Color::BLACK);
        let (x, y) = interaction.geometry().angle_to_point(90.0, PI);
        assert_eq!(interaction.press(x, y, &mut model), DragMode::Hue);
        interaction.release(x, y, &mut model);

        // Black has no hue of its own, the ring choice must survive a resync.
        interaction.sync_hue(model.color());
        interaction.layout(200.0, 200.0, model.color());
        assert!((interaction.geometry().hue() - 0.5).abs() < 1e-4);

        let [hue_vertex, _, _] = interaction.geometry().vertices();
        let (cx, cy) = centroid(interaction.geometry());
        let x = hue_vertex.0 + (cx - hue_vertex.0) * 0.05;
        let y = hue_vertex.1 + (cy - hue_vertex.1) * 0.05;
        assert_eq!(
            interaction.press(x, y, &mut model),
            DragMode::SaturationLightness
        );
        let hsla = model.hsla();
        assert!((hsla.h - 0.5).abs() < 0.01, "{hsla:?}");
        assert!(hsla.s > 0.9, "{hsla:?}");
    }

    #[test]
    fn test_sync_hue_follows_model_when_idle() {
        let (mut interaction, _) = wheel(Color::rgb(255, 0, 0));
        interaction.sync_hue(Color::rgb(0, 0, 255));
        assert!((interaction.geometry().hue() - 2.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_layout_never_hits() {
        let mut interaction = WheelInteraction::default();
        let mut model = ColorModel::default();
        interaction.layout(0.0, 50.0, model.color());

        assert_eq!(interaction.press(0.0, 0.0, &mut model), DragMode::Idle);
        assert!(!interaction.is_dragging());
    }
}
