//! Reading radii from the shorthand and the per-corner longhands.

use notch_common::warning::warn_once;

use super::{Corner, CornerRadius, ResolvedRadii, Shorthand};
use crate::error::{PaintError, ValueError};
use crate::properties::{BORDER_RADIUS_REVERSE, StylePropertyMap};
use crate::values::{LengthValue, parse_length, sanitize_tokens};

/// Token index feeding each corner, by number of tokens in the side list.
///
/// Row `n - 1` is used for `n` tokens; columns follow [`Corner::ALL`].
const SIDE_INDICES: [[usize; 4]; 4] = [
    [0, 0, 0, 0],
    [0, 1, 0, 1],
    [0, 1, 2, 2],
    [0, 1, 2, 3],
];

/// Expand a side list of 1 to 4 length tokens to one value per corner.
///
/// | tokens | top-left | top-right | bottom-right | bottom-left |
/// |--------|----------|-----------|--------------|-------------|
/// | 1      | 1st      | 1st       | 1st          | 1st         |
/// | 2      | 1st      | 2nd       | 1st          | 2nd         |
/// | 3      | 1st      | 2nd       | 3rd          | 3rd         |
/// | 4      | 1st      | 2nd       | 3rd          | 4th         |
///
/// # Errors
///
/// Returns [`ValueError::NoValues`] for an empty list,
/// [`ValueError::TooManyValues`] for more than four tokens, and the parse
/// error of the first token that is not a length.
pub fn extract_sides(raw: &str) -> Result<[LengthValue; 4], ValueError> {
    let tokens = sanitize_tokens(raw);
    let indices = match tokens.len() {
        0 => return Err(ValueError::NoValues),
        count @ 1..=4 => SIDE_INDICES[count - 1],
        count => return Err(ValueError::TooManyValues { count }),
    };

    let values = tokens
        .into_iter()
        .map(parse_length)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(indices.map(|i| values[i]))
}

/// `<sides-x> [ / <sides-y> ]?` with the vertical list defaulting to the
/// horizontal one.
fn parse_shorthand(raw: &str) -> Result<[CornerRadius; 4], ValueError> {
    let axes: Vec<&str> = raw.split('/').collect();
    let (horizontal, vertical) = match axes.as_slice() {
        [both] => {
            let sides = extract_sides(both)?;
            (sides, sides)
        }
        [x, y] => (extract_sides(x)?, extract_sides(y)?),
        _ => return Err(ValueError::TooManyAxes { count: axes.len() }),
    };

    Ok(Corner::ALL.map(|corner| {
        CornerRadius::new(horizontal[corner.index()], vertical[corner.index()])
    }))
}

/// Read `--border-radius-reverse`.
///
/// Any problem (missing value, too many `/`, a bad side list) makes the whole
/// shorthand [`Shorthand::Absent`] so that longhands can still paint. Present
/// but malformed values are reported once on the warning channel.
#[must_use]
pub fn extract_shorthand(props: &StylePropertyMap) -> Shorthand {
    let raw = props.get(BORDER_RADIUS_REVERSE).unwrap_or_default();
    match parse_shorthand(raw) {
        Ok(corners) => Shorthand::Resolved(corners),
        Err(reason) => {
            if !raw.trim().is_empty() {
                warn_once(
                    "Paint",
                    &format!("ignoring {BORDER_RADIUS_REVERSE}: '{raw}' ({reason})"),
                );
            }
            Shorthand::Absent
        }
    }
}

/// Read the four per-corner longhands.
///
/// One token sets both semi-axes, two tokens set x then y. Any other count
/// leaves the corner unset so it can fall back to the shorthand; a longhand
/// never applies partially.
///
/// # Errors
///
/// Returns the parse error of a token that is not a length. Unlike a broken
/// shorthand, a broken longhand token aborts the paint.
pub fn extract_explicits(
    props: &StylePropertyMap,
) -> Result<[Option<CornerRadius>; 4], ValueError> {
    let mut explicits = [None; 4];

    for corner in Corner::ALL {
        let name = corner.property_name();
        let raw = props.get(name).unwrap_or_default();
        explicits[corner.index()] = match sanitize_tokens(raw).as_slice() {
            [] => None,
            [both] => Some(CornerRadius::circular(parse_length(both)?)),
            [x, y] => Some(CornerRadius::new(parse_length(x)?, parse_length(y)?)),
            tokens => {
                warn_once(
                    "Paint",
                    &format!(
                        "ignoring {name}: expected 1 or 2 values, found {}",
                        tokens.len()
                    ),
                );
                None
            }
        };
    }

    Ok(explicits)
}

/// Resolve a radius for every corner: longhand first, then shorthand.
///
/// # Errors
///
/// Returns [`PaintError::MissingParameters`] for the first corner neither
/// source covers, or [`PaintError::Value`] if a longhand token fails to parse.
pub fn compute_properties(props: &StylePropertyMap) -> Result<ResolvedRadii, PaintError> {
    let shorthand = extract_shorthand(props);
    let explicits = extract_explicits(props)?;

    let [top_left, top_right, bottom_right, bottom_left] = Corner::ALL.map(|corner| {
        explicits[corner.index()]
            .or_else(|| shorthand.get(corner))
            .ok_or(PaintError::MissingParameters { corner })
    });

    Ok(ResolvedRadii::new([
        top_left?,
        top_right?,
        bottom_right?,
        bottom_left?,
    ]))
}
