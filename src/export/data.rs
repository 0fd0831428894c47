//! Lossless structured serialization of patterns.

use crate::{Pattern, PatternError};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The canonical machine-readable projection of a [`Pattern`].
///
/// Serializes (via [`serde`]) to a JSON object with exactly the top-level keys
/// `width`, `height`, `pattern`, `colors`, and `color_list`. The projection is
/// lossless: converting back with `Pattern::try_from` reconstructs an
/// equivalent pattern.
///
/// # Examples
/// ```
/// # use pixette::{MaxSize, Pattern, PatternData, PixelGrid};
/// # use palette::Srgba;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pixels = [Srgba::new(255u8, 0, 0, 255)];
/// let pattern = Pattern::build(PixelGrid::new(&pixels, 1, 1)?, MaxSize::DEFAULT);
///
/// let data = PatternData::from(&pattern);
/// assert_eq!(data.color_list, ["#ff0000"]);
///
/// let restored = Pattern::try_from(&data)?;
/// assert_eq!(restored, pattern);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternData {
    /// Width of the pattern grid.
    pub width: u32,
    /// Height of the pattern grid.
    pub height: u32,
    /// Grid rows of cell values; `0` is transparent/empty, other values are
    /// 1-based palette indices.
    pub pattern: Vec<Vec<u32>>,
    /// Palette as a map from stringified 1-based index to `#rrggbb`.
    pub colors: BTreeMap<String, String>,
    /// Palette colors in the order their indices were assigned.
    pub color_list: Vec<String>,
}

impl PatternData {
    /// Serializes to a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns any [`serde_json`] serialization error.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Pattern> for PatternData {
    fn from(pattern: &Pattern) -> Self {
        let color_list = pattern
            .colors()
            .iter()
            .map(|&color| super::hex(color))
            .collect::<Vec<_>>();

        let colors = color_list
            .iter()
            .enumerate()
            .map(|(i, color)| ((i + 1).to_string(), color.clone()))
            .collect();

        Self {
            width: pattern.width(),
            height: pattern.height(),
            pattern: pattern.rows().map(<[u32]>::to_vec).collect(),
            colors,
            color_list,
        }
    }
}

impl TryFrom<&PatternData> for Pattern {
    type Error = PatternError;

    fn try_from(data: &PatternData) -> Result<Self, Self::Error> {
        let (width, height) = (data.width, data.height);
        let pattern = &data.pattern;

        if width == 0 || height == 0 {
            return Err(PatternError::EmptyImage);
        }

        let len = pattern.iter().map(Vec::len).sum::<usize>();
        if pattern.len() != height as usize
            || pattern.iter().any(|row| row.len() != width as usize)
        {
            return Err(PatternError::DimensionMismatch { len, width, height });
        }

        let colors = data
            .color_list
            .iter()
            .map(|hex| {
                hex.parse::<Srgb<u8>>()
                    .map_err(|_| PatternError::BadColor(hex.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cells = pattern.iter().flatten().copied().collect::<Vec<_>>();
        for &value in &cells {
            if value as usize > colors.len() {
                return Err(PatternError::BadCell { value, colors: colors.len() });
            }
        }

        Ok(Self { width, height, cells, colors })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{MaxSize, PixelGrid};
    use palette::Srgba;

    fn sample_pattern() -> Pattern {
        let pixels = [
            Srgba::new(255, 0, 0, 255),
            Srgba::new(0, 255, 0, 255),
            Srgba::new(0, 0, 0, 0),
            Srgba::new(255, 0, 0, 255),
        ];
        Pattern::build(
            PixelGrid::new(&pixels, 2, 2).unwrap(),
            MaxSize::try_from(2).unwrap(),
        )
    }

    #[test]
    fn data_projection_is_direct() {
        let data = PatternData::from(&sample_pattern());

        assert_eq!(data.width, 2);
        assert_eq!(data.height, 2);
        assert_eq!(data.pattern, [vec![1, 2], vec![0, 1]]);
        assert_eq!(data.color_list, ["#ff0000", "#00ff00"]);
        assert_eq!(data.colors.len(), 2);
        assert_eq!(data.colors["1"], "#ff0000");
        assert_eq!(data.colors["2"], "#00ff00");
    }

    #[test]
    fn round_trip_reconstructs_an_equivalent_pattern() {
        let pattern = sample_pattern();
        let data = PatternData::from(&pattern);

        let restored = Pattern::try_from(&data).unwrap();
        assert_eq!(restored, pattern);
    }

    #[test]
    fn json_round_trip() {
        let pattern = sample_pattern();
        let json = serde_json::to_string(&PatternData::from(&pattern)).unwrap();

        let data: PatternData = serde_json::from_str(&json).unwrap();
        assert_eq!(Pattern::try_from(&data).unwrap(), pattern);
    }

    #[test]
    fn json_has_exactly_the_expected_keys() {
        let json = serde_json::to_value(PatternData::from(&sample_pattern())).unwrap();
        let object = json.as_object().unwrap();

        let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(keys, ["color_list", "colors", "height", "pattern", "width"]);
    }

    #[test]
    fn reconstruction_rejects_malformed_data() {
        let good = PatternData::from(&sample_pattern());

        let mut zero = good.clone();
        zero.width = 0;
        assert!(matches!(
            Pattern::try_from(&zero),
            Err(PatternError::EmptyImage)
        ));

        let mut ragged = good.clone();
        ragged.pattern[1].push(0);
        assert!(matches!(
            Pattern::try_from(&ragged),
            Err(PatternError::DimensionMismatch { .. })
        ));

        let mut bad_color = good.clone();
        bad_color.color_list[0] = "#zzzzzz".into();
        assert!(matches!(
            Pattern::try_from(&bad_color),
            Err(PatternError::BadColor(_))
        ));

        let mut bad_cell = good;
        bad_cell.pattern[0][0] = 9;
        assert!(matches!(
            Pattern::try_from(&bad_cell),
            Err(PatternError::BadCell { value: 9, colors: 2 })
        ));
    }

    #[test]
    fn empty_palette_survives_the_round_trip() {
        let pixels = [Srgba::new(0, 0, 0, 0)];
        let pattern = Pattern::build(
            PixelGrid::new(&pixels, 1, 1).unwrap(),
            MaxSize::try_from(1).unwrap(),
        );

        let data = PatternData::from(&pattern);
        assert_eq!(data.pattern, [vec![0]]);
        assert!(data.colors.is_empty());
        assert!(data.color_list.is_empty());

        assert_eq!(Pattern::try_from(&data).unwrap(), pattern);
    }
}
