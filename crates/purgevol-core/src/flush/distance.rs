//! Perceptual distance terms: hue/saturation distance, the luminance
//! asymmetry, and the law-of-cosines fusion that merges them.

use crate::color::Hsv;
use crate::color::hsv::to_radians;

/// Ceiling on [`delta_hs`].
pub const MAX_HS_DISTANCE: f64 = 1.2;

/// Purge scale for a full unit of hue/saturation distance.
pub const HS_FLUSH_SCALE: f64 = 230.0;

/// Purge scale when the destination is brighter (applied after the 0.7 power).
pub const BRIGHTEN_FLUSH_SCALE: f64 = 560.0;
pub const BRIGHTEN_EXPONENT: f64 = 0.7;

/// Purge scale when the destination is darker (linear).
pub const DARKEN_FLUSH_SCALE: f64 = 80.0;

/// Included angle between the chroma and luminance edges, in degrees.
pub const FUSION_ANGLE_DEGREES: f64 = 120.0;

/// Chroma-weighted hue distance between two colors.
///
/// Each color is placed on the plane at `(cos h, sin h) · s · v`; the result
/// is the Euclidean distance between the two points, capped at
/// [`MAX_HS_DISTANCE`].
pub fn delta_hs(from: Hsv, to: Hsv) -> f64 {
    let (x1, y1) = from.chroma_point();
    let (x2, y2) = to.chroma_point();
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt().min(MAX_HS_DISTANCE)
}

/// Result of [`luminance_adjustment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceAdjustment {
    /// Luminance contribution to the purge, before fusion.
    pub lumi_flush: f64,
    /// Hue/saturation distance, reduced when the destination is darker.
    pub hs_dist: f64,
}

/// Apply the brightening/darkening asymmetry.
///
/// Brightening is penalized with `(Δlum)^0.7 · 560`. Darkening costs only
/// `Δlum · 80`, and additionally caps `hs_dist` by `0.67·to.v + 0.33·from.v`.
pub fn luminance_adjustment(
    from_lum: f64,
    to_lum: f64,
    from: Hsv,
    to: Hsv,
    hs_dist: f64,
) -> LuminanceAdjustment {
    if to_lum >= from_lum {
        LuminanceAdjustment {
            lumi_flush: (to_lum - from_lum).powf(BRIGHTEN_EXPONENT) * BRIGHTEN_FLUSH_SCALE,
            hs_dist,
        }
    } else {
        let inter_v = 0.67 * to.v + 0.33 * from.v;
        LuminanceAdjustment {
            lumi_flush: (from_lum - to_lum) * DARKEN_FLUSH_SCALE,
            hs_dist: inter_v.min(hs_dist),
        }
    }
}

/// Third side of a triangle from two sides and their included angle.
///
/// ```text
/// c = sqrt(a² + b² − 2ab·cos θ)
/// ```
pub fn triangle_third_edge(edge_a: f64, edge_b: f64, degrees_ab: f64) -> f64 {
    (edge_a * edge_a + edge_b * edge_b
        - 2.0 * edge_a * edge_b * to_radians(degrees_ab).cos())
    .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hsv;

    const EPSILON: f64 = 1e-9;

    fn hsv(h: f64, s: f64, v: f64) -> Hsv {
        Hsv { h, s, v }
    }

    #[test]
    fn test_delta_hs_identical_is_zero() {
        let c = rgb_to_hsv([0.9, 0.2, 0.4]);
        assert!(delta_hs(c, c).abs() < EPSILON);
    }

    #[test]
    fn test_delta_hs_is_symmetric() {
        let a = rgb_to_hsv([0.1, 0.8, 0.3]);
        let b = rgb_to_hsv([0.7, 0.2, 0.9]);
        assert!((delta_hs(a, b) - delta_hs(b, a)).abs() < EPSILON);
    }

    #[test]
    fn test_delta_hs_negative_hue_matches_wrapped_hue() {
        // -30° and 330° land on the same chroma point.
        let a = delta_hs(hsv(-30.0, 1.0, 1.0), hsv(120.0, 0.5, 0.5));
        let b = delta_hs(hsv(330.0, 1.0, 1.0), hsv(120.0, 0.5, 0.5));
        assert!((a - b).abs() < EPSILON);
    }

    #[test]
    fn test_delta_hs_capped() {
        // Opposite saturated hues are 2.0 apart before the cap.
        let d = delta_hs(hsv(0.0, 1.0, 1.0), hsv(180.0, 1.0, 1.0));
        assert_eq!(d, MAX_HS_DISTANCE);
    }

    #[test]
    fn test_delta_hs_never_exceeds_cap() {
        for i in 0..24 {
            for j in 0..24 {
                for &sv in &[0.0, 0.25, 0.5, 1.0] {
                    let a = hsv(f64::from(i) * 15.0, sv, 1.0);
                    let b = hsv(f64::from(j) * 15.0 - 60.0, 1.0, sv);
                    assert!(delta_hs(a, b) <= MAX_HS_DISTANCE);
                }
            }
        }
    }

    #[test]
    fn test_brightening_leaves_hs_dist_untouched() {
        let from = hsv(0.0, 0.0, 0.2);
        let to = hsv(0.0, 0.0, 0.1);
        let adj = luminance_adjustment(0.2, 0.5, from, to, 0.9);
        assert_eq!(adj.hs_dist, 0.9);
        let expected = 0.3_f64.powf(0.7) * 560.0;
        assert!((adj.lumi_flush - expected).abs() < EPSILON);
    }

    #[test]
    fn test_equal_luminance_takes_brightening_branch() {
        let c = hsv(0.0, 0.0, 0.0);
        let adj = luminance_adjustment(0.4, 0.4, c, c, 1.1);
        assert_eq!(adj.lumi_flush, 0.0);
        assert_eq!(adj.hs_dist, 1.1);
    }

    #[test]
    fn test_darkening_caps_hs_dist_by_weighted_value() {
        let from = hsv(0.0, 1.0, 1.0);
        let to = hsv(120.0, 1.0, 0.2);
        let adj = luminance_adjustment(0.8, 0.3, from, to, 1.0);
        let inter_v = 0.67 * 0.2 + 0.33 * 1.0;
        assert!((adj.hs_dist - inter_v).abs() < EPSILON);
        assert!((adj.lumi_flush - 0.5 * 80.0).abs() < EPSILON);
    }

    #[test]
    fn test_darkening_keeps_smaller_hs_dist() {
        let from = hsv(0.0, 1.0, 1.0);
        let to = hsv(0.0, 1.0, 0.9);
        let adj = luminance_adjustment(0.8, 0.7, from, to, 0.05);
        assert_eq!(adj.hs_dist, 0.05);
    }

    #[test]
    fn test_brightening_is_monotonic() {
        let c = hsv(0.0, 0.0, 0.0);
        let mut previous = 0.0;
        for step in 1..=100 {
            let to_lum = 0.1 + f64::from(step) * 0.009;
            let adj = luminance_adjustment(0.1, to_lum, c, c, 0.0);
            assert!(adj.lumi_flush >= previous, "step {step}");
            previous = adj.lumi_flush;
        }
    }

    #[test]
    fn test_brightening_outweighs_darkening() {
        let c = hsv(0.0, 0.0, 0.5);
        let up = luminance_adjustment(0.3, 0.6, c, c, 0.0).lumi_flush;
        let down = luminance_adjustment(0.6, 0.3, c, c, 0.0).lumi_flush;
        assert!(up > down, "up={up} down={down}");
    }

    #[test]
    fn test_third_edge_at_120_degrees() {
        let edges: [f64; 8] = [0.0, 0.5, 1.0, 3.0, 17.25, 230.0, 276.0, 560.0];
        for &a in &edges {
            for &b in &edges {
                let expected = (a * a + b * b + a * b).sqrt();
                let got = triangle_third_edge(a, b, FUSION_ANGLE_DEGREES);
                assert!(
                    (got - expected).abs() <= 1e-9 * expected.max(1.0),
                    "a={a} b={b}: {got} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_third_edge_at_90_degrees_is_pythagorean() {
        assert!((triangle_third_edge(3.0, 4.0, 90.0) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_third_edge_with_zero_side() {
        assert!((triangle_third_edge(0.0, 7.0, FUSION_ANGLE_DEGREES) - 7.0).abs() < EPSILON);
        assert!((triangle_third_edge(7.0, 0.0, FUSION_ANGLE_DEGREES) - 7.0).abs() < EPSILON);
    }
}
