use std::f32::consts::TAU;

/// Ratio of the inner radius of the hue ring to its outer radius.
pub const INNER_RADIUS_RATIO: f32 = 0.75;

/// Geometry of a hue ring with an inscribed saturation/lightness triangle.
///
/// The wheel lives in the top-left `size * size` square of the drawing
/// surface. Pixel coordinates grow downward, angles are counter-clockwise
/// with `0` on the +X axis. The triangle vertices sit on the inner edge of
/// the ring:
///
/// - `v1` at the hue angle is the pure hue (`s = 1`, `l = 0.5`)
/// - `v2` at `+2π/3` is black (`s = 0`, `l = 0`)
/// - `v3` at `+4π/3` is white (`s = 0`, `l = 1`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    size: f32,
    hue: f32,
    center: (f32, f32),
    outer_radius: f32,
    inner_radius: f32,
    vertices: [(f32, f32); 3],
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Barycentric weights of a point against the wheel triangle.
///
/// `b1` weights the white vertex, `b2` the pure hue vertex and `b3` the
/// black vertex. The weights are normalized absolute sub-triangle areas, so
/// they are meaningful even when `inside` is false.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Barycentric {
    pub b1: f32,
    pub b2: f32,
    pub b3: f32,
    pub inside: bool,
}

impl Barycentric {
    /// Saturation and lightness for these weights, both clamped to `0..=1`.
    pub fn to_sl(self) -> (f32, f32) {
        let (s, l) = self.to_sl_unclamped();
        (s.clamp(0.0, 1.0), l.clamp(0.0, 1.0))
    }

    fn to_sl_unclamped(self) -> (f32, f32) {
        (self.b2, self.b2 * 0.5 + self.b1)
    }
}

impl WheelGeometry {
    /// Lay out a wheel of `size` pixels for the given hue in turns.
    pub fn new(size: f32, hue: f32) -> Self {
        let mut this = Self {
            size,
            hue: wrap_turns(hue),
            center: (0.0, 0.0),
            outer_radius: 0.0,
            inner_radius: 0.0,
            vertices: [(0.0, 0.0); 3],
        };
        this.layout();
        this
    }

    /// Lay out the wheel in the largest square that fits `width * height`.
    pub fn from_bounds(width: f32, height: f32, hue: f32) -> Self {
        Self::new(width.min(height), hue)
    }

    pub fn resize(&mut self, size: f32) {
        self.size = size;
        self.layout();
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.hue = wrap_turns(hue);
        self.layout();
    }

    fn layout(&mut self) {
        if self.is_degenerate() {
            self.center = (0.0, 0.0);
            self.outer_radius = 0.0;
            self.inner_radius = 0.0;
            self.vertices = [(0.0, 0.0); 3];
            return;
        }

        self.outer_radius = self.size / 2.0;
        self.inner_radius = self.outer_radius * INNER_RADIUS_RATIO;
        self.center = (self.outer_radius, self.outer_radius);

        let angle = self.hue * TAU;
        self.vertices = [
            self.angle_to_point(self.inner_radius, angle),
            self.angle_to_point(self.inner_radius, angle + TAU / 3.0),
            self.angle_to_point(self.inner_radius, angle + 2.0 * TAU / 3.0),
        ];
    }

    /// A zero, negative or non-finite size has no ring and no triangle.
    pub fn is_degenerate(&self) -> bool {
        !(self.size.is_finite() && self.size > 0.0)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    /// The pure hue, black and white vertices, in that order.
    pub fn vertices(&self) -> [(f32, f32); 3] {
        self.vertices
    }

    /// Polar to pixel coordinates around the wheel center.
    pub fn angle_to_point(&self, radius: f32, angle: f32) -> (f32, f32) {
        let (xc, yc) = self.center;
        let x = xc + radius * angle.cos();
        let y = yc + radius * angle.sin();
        (x, self.size - 1.0 - y)
    }

    /// Distance from the center and hue in turns of a pixel.
    fn polar(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.is_degenerate() || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let (xc, yc) = self.center;
        let dx = x - xc;
        let dy = (self.size - 1.0 - y) - yc;
        let radius = (dx * dx + dy * dy).sqrt();
        let hue = wrap_turns(dy.atan2(dx) / TAU);
        Some((radius, hue))
    }

    /// The hue under a pixel, wherever it lies.
    ///
    /// Used while dragging the hue, when the pointer may leave the ring.
    pub fn hue_at(&self, x: f32, y: f32) -> Option<f32> {
        self.polar(x, y).map(|(_, hue)| hue)
    }

    /// The hue under a pixel when it lies on the ring, `None` otherwise.
    pub fn hit_ring(&self, x: f32, y: f32) -> Option<f32> {
        let (radius, hue) = self.polar(x, y)?;
        (self.inner_radius..=self.outer_radius)
            .contains(&radius)
            .then_some(hue)
    }

    pub fn to_barycentric(&self, x: f32, y: f32) -> Barycentric {
        if self.is_degenerate() {
            return Barycentric::default();
        }

        let [v1, v2, v3] = self.vertices;
        let p = (x, y);
        let area21 = signed_area(v1, v2, p);
        let area22 = signed_area(v2, v3, p);
        let area23 = signed_area(v3, v1, p);

        let total = area21.abs() + area22.abs() + area23.abs();
        if !total.is_finite() || total <= f32::EPSILON {
            return Barycentric::default();
        }

        let negative = [area21 < 0.0, area22 < 0.0, area23 < 0.0];
        Barycentric {
            b1: area21.abs() / total,
            b2: area22.abs() / total,
            b3: area23.abs() / total,
            inside: negative[0] == negative[1] && negative[1] == negative[2],
        }
    }

    /// Saturation and lightness under a pixel inside the triangle.
    pub fn hit_triangle(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        let weights = self.to_barycentric(x, y);
        weights.inside.then(|| weights.to_sl())
    }

    /// The pixel inside the triangle whose saturation and lightness are the
    /// closest to the target, found by scanning the triangle bounds.
    pub fn nearest_interior_point(&self, s: f32, l: f32) -> Option<(i32, i32)> {
        if self.is_degenerate() {
            return None;
        }

        let [v1, v2, v3] = self.vertices;
        let xmin = v1.0.min(v2.0).min(v3.0).floor() as i32;
        let ymin = v1.1.min(v2.1).min(v3.1).floor() as i32;
        let xmax = (v1.0.max(v2.0).max(v3.0) + 0.9999) as i32;
        let ymax = (v1.1.max(v2.1).max(v3.1) + 0.9999) as i32;

        let mut best = None;
        let mut best_distance = f32::INFINITY;
        for y in ymin..=ymax {
            for x in xmin..=xmax {
                let weights = self.to_barycentric(x as f32, y as f32);
                if !weights.inside {
                    continue;
                }

                let (s1, l1) = weights.to_sl_unclamped();
                let distance = (s1 - s).hypot(l1 - l);
                if distance < best_distance {
                    best_distance = distance;
                    best = Some((x, y));
                }
            }
        }
        best
    }

    /// The exact point of the triangle for a saturation and lightness.
    ///
    /// Targets outside the triangle have their negative vertex weights
    /// dropped and the rest renormalized.
    pub fn sl_to_point(&self, s: f32, l: f32) -> Option<(f32, f32)> {
        if self.is_degenerate() || !s.is_finite() || !l.is_finite() {
            return None;
        }

        let hue_weight = s.clamp(0.0, 1.0);
        let white_weight = l.clamp(0.0, 1.0) - 0.5 * hue_weight;
        let black_weight = 1.0 - hue_weight - white_weight;

        let weights = [hue_weight, black_weight, white_weight].map(|w| w.max(0.0));
        let total: f32 = weights.iter().sum();
        if total <= f32::EPSILON {
            return None;
        }

        let (x, y) = self
            .vertices
            .iter()
            .zip(weights)
            .fold((0.0, 0.0), |(x, y), (v, w)| (x + v.0 * w, y + v.1 * w));
        Some((x / total, y / total))
    }

    /// The segment across the ring that marks the current hue.
    pub fn hue_marker(&self) -> Option<((f32, f32), (f32, f32))> {
        if self.is_degenerate() {
            return None;
        }

        let angle = self.hue * TAU;
        Some((
            self.angle_to_point(self.inner_radius, angle),
            self.angle_to_point(self.outer_radius, angle),
        ))
    }
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
pub fn signed_area(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    (b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1)
}

/// Reduce a hue to `0.0..1.0` turns.
fn wrap_turns(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let hue = hue.rem_euclid(1.0);
    if hue >= 1.0 { 0.0 } else { hue }
}
