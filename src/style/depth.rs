use serde::{Deserialize, Serialize};

use crate::style::color::Color;
use crate::{MapError, Result};

/// Color used when no band matches, which only happens for NaN depths
const FALLBACK_COLOR: Color = Color::new(0x82, 0x04, 0x01);

/// One depth interval and the color it maps to
///
/// A band covers every depth less than or equal to its upper bound that no
/// earlier band in the scale claimed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthBand {
    pub upper_bound_km: f64,
    pub color: Color,
}

impl DepthBand {
    pub const fn new(upper_bound_km: f64, color: Color) -> Self {
        Self {
            upper_bound_km,
            color,
        }
    }
}

/// USGS-style depth bands, shallow yellow through deep dark red
const DEFAULT_BANDS: [DepthBand; 7] = [
    DepthBand::new(10.0, Color::new(0xe7, 0xe3, 0x4e)),
    DepthBand::new(30.0, Color::new(0xea, 0xbd, 0x3b)),
    DepthBand::new(50.0, Color::new(0xee, 0x9a, 0x3a)),
    DepthBand::new(70.0, Color::new(0xef, 0x7e, 0x32)),
    DepthBand::new(100.0, Color::new(0xde, 0x54, 0x2c)),
    DepthBand::new(150.0, Color::new(0xc0, 0x23, 0x23)),
    DepthBand::new(f64::INFINITY, Color::new(0x82, 0x04, 0x01)),
];

/// An ordered mapping from event depth to marker color
///
/// Bands are scanned shallow to deep and the first band whose upper bound
/// is at or above the depth wins. The final band is unbounded, so every
/// real depth classifies to exactly one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthScale {
    bands: Vec<DepthBand>,
}

impl DepthScale {
    /// Builds a scale, validating the band ordering
    ///
    /// Bounds must be strictly ascending and the last band must be
    /// unbounded; everything before it must be finite.
    pub fn new(bands: Vec<DepthBand>) -> Result<Self> {
        if bands.is_empty() {
            return Err(MapError::Style("depth scale needs at least one band".into()));
        }
        for pair in bands.windows(2) {
            if pair[1].upper_bound_km <= pair[0].upper_bound_km {
                return Err(MapError::Style(format!(
                    "depth bands must be strictly ascending: {} then {}",
                    pair[0].upper_bound_km, pair[1].upper_bound_km
                )));
            }
        }
        let last = bands[bands.len() - 1];
        if last.upper_bound_km != f64::INFINITY {
            return Err(MapError::Style(format!(
                "deepest band must be unbounded, got {}",
                last.upper_bound_km
            )));
        }
        for band in &bands[..bands.len() - 1] {
            if !band.upper_bound_km.is_finite() {
                return Err(MapError::Style(format!(
                    "band bound must be finite: {}",
                    band.upper_bound_km
                )));
            }
        }
        Ok(Self { bands })
    }

    /// Maps a depth in kilometers to its band color
    ///
    /// NaN depths cannot be ordered against any bound and classify to the
    /// fallback color instead.
    pub fn classify(&self, depth_km: f64) -> Color {
        if depth_km.is_nan() {
            return self.fallback_color();
        }
        for band in &self.bands {
            if depth_km <= band.upper_bound_km {
                return band.color;
            }
        }
        self.fallback_color()
    }

    /// Color for depths the scan cannot place, normally the deepest band
    pub fn fallback_color(&self) -> Color {
        self.bands.last().map(|band| band.color).unwrap_or(FALLBACK_COLOR)
    }

    pub fn bands(&self) -> &[DepthBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Legend labels derived from the band bounds, one per band
    ///
    /// The first band reads `≤bound`, interior bands `low-high`, and the
    /// unbounded band `>bound`.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.bands.len());
        let mut lower: Option<f64> = None;
        for band in &self.bands {
            let label = match lower {
                None => format!("≤{}", format_bound(band.upper_bound_km)),
                Some(prev) if band.upper_bound_km.is_infinite() => {
                    format!(">{}", format_bound(prev))
                }
                Some(prev) => format!(
                    "{}-{}",
                    format_bound(prev),
                    format_bound(band.upper_bound_km)
                ),
            };
            labels.push(label);
            lower = Some(band.upper_bound_km);
        }
        labels
    }
}

impl Default for DepthScale {
    fn default() -> Self {
        Self {
            bands: DEFAULT_BANDS.to_vec(),
        }
    }
}

fn format_bound(km: f64) -> String {
    if km.fract() == 0.0 {
        format!("{}", km as i64)
    } else {
        format!("{}", km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands_pass_validation() {
        assert!(DepthScale::new(DEFAULT_BANDS.to_vec()).is_ok());
    }

    #[test]
    fn test_classify_boundary_is_inclusive() {
        let scale = DepthScale::default();
        assert_eq!(scale.classify(10.0).to_hex(), "#e7e34e");
        assert_eq!(scale.classify(10.0001).to_hex(), "#eabd3b");
        assert_eq!(scale.classify(150.0).to_hex(), "#c02323");
        assert_eq!(scale.classify(150.0001).to_hex(), "#820401");
    }

    #[test]
    fn test_classify_expected_colors_per_band() {
        let scale = DepthScale::default();
        let cases = [
            (-10.0, "#e7e34e"),
            (0.0, "#e7e34e"),
            (25.0, "#eabd3b"),
            (45.0, "#ee9a3a"),
            (60.0, "#ef7e32"),
            (90.0, "#de542c"),
            (120.0, "#c02323"),
            (1000.0, "#820401"),
        ];
        for (depth, hex) in cases {
            assert_eq!(scale.classify(depth).to_hex(), hex, "depth {}", depth);
        }
    }

    #[test]
    fn test_classify_negative_depth_shares_shallow_band() {
        let scale = DepthScale::default();
        assert_eq!(scale.classify(-5.0), scale.classify(9.0));
    }

    #[test]
    fn test_classify_is_total() {
        let scale = DepthScale::default();
        let band_colors: Vec<Color> = scale.bands().iter().map(|band| band.color).collect();
        for depth in [
            f64::MIN,
            -700.0,
            -0.0,
            9.999,
            10.0,
            69.9,
            70.0,
            99.2,
            151.0,
            6371.0,
            f64::MAX,
            f64::INFINITY,
        ] {
            assert!(band_colors.contains(&scale.classify(depth)), "depth {}", depth);
        }
    }

    #[test]
    fn test_classify_deeper_never_maps_shallower() {
        let scale = DepthScale::default();
        let band_index = |depth: f64| {
            let color = scale.classify(depth);
            scale
                .bands()
                .iter()
                .position(|band| band.color == color)
                .unwrap()
        };
        let depths = [-8.0, 3.0, 12.0, 33.0, 55.0, 71.0, 101.0, 149.0, 151.0, 900.0];
        for pair in depths.windows(2) {
            assert!(band_index(pair[0]) <= band_index(pair[1]));
        }
    }

    #[test]
    fn test_classify_nan_uses_fallback() {
        let scale = DepthScale::default();
        assert_eq!(scale.classify(f64::NAN), scale.fallback_color());
        assert_eq!(scale.fallback_color().to_hex(), "#820401");
    }

    #[test]
    fn test_new_rejects_empty_scale() {
        assert!(DepthScale::new(Vec::new()).is_err());
    }

    #[test]
    fn test_new_rejects_unsorted_bands() {
        let bands = vec![
            DepthBand::new(30.0, Color::WHITE),
            DepthBand::new(10.0, Color::BLACK),
            DepthBand::new(f64::INFINITY, Color::BLACK),
        ];
        assert!(DepthScale::new(bands).is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_bounds() {
        let bands = vec![
            DepthBand::new(10.0, Color::WHITE),
            DepthBand::new(10.0, Color::BLACK),
            DepthBand::new(f64::INFINITY, Color::BLACK),
        ];
        assert!(DepthScale::new(bands).is_err());
    }

    #[test]
    fn test_new_rejects_nan_bound() {
        let bands = vec![
            DepthBand::new(f64::NAN, Color::WHITE),
            DepthBand::new(f64::INFINITY, Color::BLACK),
        ];
        assert!(DepthScale::new(bands).is_err());
    }

    #[test]
    fn test_new_requires_unbounded_terminal_band() {
        let bands = vec![
            DepthBand::new(10.0, Color::WHITE),
            DepthBand::new(30.0, Color::BLACK),
        ];
        assert!(DepthScale::new(bands).is_err());
    }

    #[test]
    fn test_labels_derive_from_bounds() {
        let scale = DepthScale::default();
        assert_eq!(
            scale.labels(),
            vec!["≤10", "10-30", "30-50", "50-70", "70-100", "100-150", ">150"]
        );
        assert_eq!(scale.labels().len(), scale.len());
    }

    #[test]
    fn test_labels_keep_fractional_bounds() {
        let bands = vec![
            DepthBand::new(2.5, Color::WHITE),
            DepthBand::new(f64::INFINITY, Color::BLACK),
        ];
        let scale = DepthScale::new(bands).unwrap();
        assert_eq!(scale.labels(), vec!["≤2.5", ">2.5"]);
    }
}
