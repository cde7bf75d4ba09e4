//! [§ 5.5 Overlapping Curves](https://www.w3.org/TR/css-backgrounds-3/#corner-overlap)
//!
//! "Corner curves must not overlap: When the sum of any two adjacent border
//! radii exceeds the size of the border box, UAs must proportionally reduce
//! the used values of all border radii until none of them overlap."
//!
//! Unlike `border-radius`, the reduction here is computed per axis: widths
//! only constrain horizontal semi-axes and heights only vertical ones.

use super::{BoxGeometry, FittedRadii, RadiusPair, ResolvedRadii};

/// Fit resolved radii to `geometry`.
///
/// - horizontal factor = min(1, width / (TL.x + TR.x), width / (BR.x + BL.x))
/// - vertical factor = min(1, height / (TL.y + BL.y), height / (TR.y + BR.y))
///
/// When neither factor is below 1 the raw magnitudes come back unscaled.
/// Otherwise every x is multiplied by the horizontal factor and every y by the
/// vertical factor.
#[must_use]
pub fn fit(radii: &ResolvedRadii, geometry: BoxGeometry) -> FittedRadii {
    // TODO: resolve `%` radii against the box (x against width, y against
    // height) instead of using the raw magnitude.
    let corners = *radii.corners();
    let raw = corners.map(|corner| RadiusPair::new(corner.x.value, corner.y.value));
    let [top_left, top_right, bottom_right, bottom_left] = raw;

    // A zero edge shared by two zero radii gives 0 / 0 = NaN, which
    // `f64::min` skips, so it never constrains the factor.
    let horizontal_factor = 1.0_f64
        .min(geometry.width / (top_left.x + top_right.x))
        .min(geometry.width / (bottom_right.x + bottom_left.x));
    let vertical_factor = 1.0_f64
        .min(geometry.height / (top_left.y + bottom_left.y))
        .min(geometry.height / (top_right.y + bottom_right.y));

    if horizontal_factor >= 1.0 && vertical_factor >= 1.0 {
        return FittedRadii {
            corners: raw,
            horizontal_factor,
            vertical_factor,
            scaled: false,
        };
    }

    FittedRadii {
        corners: raw.map(|pair| {
            RadiusPair::new(pair.x * horizontal_factor, pair.y * vertical_factor)
        }),
        horizontal_factor,
        vertical_factor,
        scaled: true,
    }
}
