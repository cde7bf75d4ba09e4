//! Length values and token splitting
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::error::ValueError;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths) and
/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// Units accepted after the magnitude of a radius token. Matching is ASCII
/// case-insensitive: "All CSS keywords and units are ASCII case-insensitive."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// "1px = 1/96th of 1in"
    #[strum(serialize = "px")]
    Px,
    /// "Equal to the computed value of the font-size property of the element"
    #[strum(serialize = "em")]
    Em,
    /// "Equal to the computed value of font-size on the root element"
    #[strum(serialize = "rem")]
    Rem,
    /// "Equal to the used x-height of the first available font"
    #[strum(serialize = "ex")]
    Ex,
    /// "Equal to the used advance measure of the '0' glyph"
    #[strum(serialize = "ch")]
    Ch,
    /// "1% of the width of the initial containing block"
    #[strum(serialize = "vw")]
    Vw,
    /// "1% of the height of the initial containing block"
    #[strum(serialize = "vh")]
    Vh,
    /// "the smaller of vw or vh"
    #[strum(serialize = "vmin")]
    Vmin,
    /// "the larger of vw or vh"
    #[strum(serialize = "vmax")]
    Vmax,
    /// "1cm = 96px/2.54"
    #[strum(serialize = "cm")]
    Cm,
    /// "1mm = 1/10th of 1cm"
    #[strum(serialize = "mm")]
    Mm,
    /// "1Q = 1/40th of 1cm"
    #[strum(serialize = "q")]
    Q,
    /// "1in = 2.54cm = 96px"
    #[strum(serialize = "in")]
    In,
    /// "1pt = 1/72th of 1in"
    #[strum(serialize = "pt")]
    Pt,
    /// "1pc = 1/6th of 1in"
    #[strum(serialize = "pc")]
    Pc,
    /// "a <number> immediately followed by a percent sign '%'"
    #[strum(serialize = "%")]
    #[serde(rename = "%")]
    Percent,
}

/// A magnitude and the unit it was written in, e.g. `10px` or `50%`.
///
/// The unit is carried along but not interpreted: fitting works on the raw
/// magnitude, so `10em` and `10px` both contribute `10`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthValue {
    /// The numeric part, as written.
    pub value: f64,
    /// The unit part.
    pub unit: LengthUnit,
}

impl LengthValue {
    /// Create a length from its parts.
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Shorthand for a pixel length.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }
}

impl fmt::Display for LengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for LengthValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_length(s)
    }
}

/// Split a raw property value into its whitespace-separated tokens.
///
/// Runs of whitespace and leading/trailing whitespace never produce empty
/// tokens.
#[must_use]
pub fn sanitize_tokens(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Parse a single radius token as a magnitude followed by a unit.
///
/// The token is cut after its leading run of ASCII digits. Both halves must be
/// non-empty and the second half must be a known unit, so `"10px"` and
/// `"50%"` parse while `"px"`, `"10"`, `"1.5px"` and `"-4px"` do not.
///
/// # Errors
///
/// Returns [`ValueError::InvalidLength`] when the token does not split into a
/// digit run and a unit, and [`ValueError::UnknownUnit`] when the unit is not
/// a CSS length or percentage unit.
pub fn parse_length(token: &str) -> Result<LengthValue, ValueError> {
    let digits = token.bytes().take_while(u8::is_ascii_digit).count();
    let (magnitude, unit) = token.split_at(digits);
    if magnitude.is_empty() || unit.is_empty() {
        return Err(ValueError::InvalidLength(token.to_string()));
    }

    let value = magnitude
        .parse::<f64>()
        .map_err(|_| ValueError::InvalidLength(token.to_string()))?;
    let unit = unit.parse::<LengthUnit>().map_err(|_| ValueError::UnknownUnit {
        token: token.to_string(),
        unit: unit.to_string(),
    })?;

    Ok(LengthValue { value, unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_length("10px"), Ok(LengthValue::px(10.0)));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(
            parse_length("50%"),
            Ok(LengthValue::new(50.0, LengthUnit::Percent))
        );
    }

    #[test]
    fn test_unit_is_case_insensitive() {
        assert_eq!(
            parse_length("3EM"),
            Ok(LengthValue::new(3.0, LengthUnit::Em))
        );
    }

    #[test]
    fn test_display_round_trips_token() {
        assert_eq!(LengthValue::px(12.0).to_string(), "12px");
        assert_eq!(LengthValue::new(5.0, LengthUnit::Percent).to_string(), "5%");
    }
}
