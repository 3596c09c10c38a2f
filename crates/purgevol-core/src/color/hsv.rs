//! RGB to HSV conversion.

/// Below this chroma (or brightness) hue and saturation are treated as undefined.
const DEGENERATE_EPSILON: f64 = 0.001;

/// Hue in degrees, saturation and value in `[0, 1]`.
///
/// Hue is normally in `[0, 360)` but can be negative (down to −60) when red
/// is the dominant channel and blue exceeds green.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Project onto the chroma plane, scaled by saturation and value.
    ///
    /// ```text
    /// (x, y) = (cos h, sin h) · s · v
    /// ```
    pub fn chroma_point(&self) -> (f64, f64) {
        let h_rad = to_radians(self.h);
        let radius = self.s * self.v;
        (h_rad.cos() * radius, h_rad.sin() * radius)
    }
}

pub(crate) fn to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * std::f64::consts::PI
}

/// Convert a normalized RGB triplet to HSV.
///
/// When several channels share the maximum, red wins over green and green
/// over blue. The red branch uses a sign-preserving floating remainder, so
/// its hue is not wrapped into `[0, 360)`.
pub fn rgb_to_hsv(rgb: [f64; 3]) -> Hsv {
    let [r, g, b] = rgb;
    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    let h = if delta.abs() < DEGENERATE_EPSILON {
        0.0
    } else if c_max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if c_max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if c_max.abs() < DEGENERATE_EPSILON {
        0.0
    } else {
        delta / c_max
    };

    Hsv { h, s, v: c_max }
}
