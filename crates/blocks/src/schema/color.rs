//! Notion color palette and hex-to-palette resolution.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the Notion API's named color tokens.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    DefaultBackground,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
}

/// Base palette with the canonical hex value used for nearest-color matching.
/// Iteration order is the tie-break order.
const PALETTE_HEX: [(Color, &str); 10] = [
    (Color::Default, "#37352F"),
    (Color::Gray, "#9B9A97"),
    (Color::Brown, "#64473A"),
    (Color::Orange, "#D9730D"),
    (Color::Yellow, "#DFAB01"),
    (Color::Green, "#0F7B6C"),
    (Color::Blue, "#0B6E99"),
    (Color::Purple, "#6940A5"),
    (Color::Pink, "#AD1A72"),
    (Color::Red, "#E03E3E"),
];

/// Canonical mappings for the default heading colors. These are checked
/// before any distance computation so legacy outputs stay stable.
const PREDEFINED_HEX: [(&str, Color); 6] = [
    ("#FF6F61", Color::Red),
    ("#F8B400", Color::Yellow),
    ("#4DB8FF", Color::Blue),
    ("#A3BE8C", Color::Green),
    ("#B48EAD", Color::Purple),
    ("#5E81AC", Color::Blue),
];

impl Color {
    /// All twenty palette tokens.
    pub const ALL: [Color; 20] = [
        Color::Default,
        Color::Gray,
        Color::Brown,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Pink,
        Color::Red,
        Color::DefaultBackground,
        Color::GrayBackground,
        Color::BrownBackground,
        Color::OrangeBackground,
        Color::YellowBackground,
        Color::GreenBackground,
        Color::BlueBackground,
        Color::PurpleBackground,
        Color::PinkBackground,
        Color::RedBackground,
    ];

    /// The wire name of this token.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Red => "red",
            Color::DefaultBackground => "default_background",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
            Color::RedBackground => "red_background",
        }
    }

    /// Returns true for the `_background` variants.
    pub fn is_background(self) -> bool {
        self.as_str().ends_with("_background")
    }

    /// Resolves a color token to a palette value.
    ///
    /// Palette names pass through unchanged. Anything else is read as a
    /// `#RRGGBB` hex string: first against the predefined heading-color
    /// table, then by Euclidean RGB distance to the base palette. Input that
    /// does not parse as hex resolves to [`Color::Default`].
    pub fn resolve(token: &str) -> Color {
        if let Ok(color) = token.parse() {
            return color;
        }

        if let Some((_, color)) = PREDEFINED_HEX.iter().find(|(hex, _)| *hex == token) {
            return *color;
        }

        let Some(target) = parse_hex(token) else {
            return Color::Default;
        };

        let mut closest = Color::Default;
        let mut min_distance = f64::INFINITY;
        for (color, hex) in PALETTE_HEX {
            let Some(candidate) = parse_hex(hex) else {
                continue;
            };
            let distance = rgb_distance(target, candidate);
            if distance < min_distance {
                min_distance = distance;
                closest = color;
            }
        }
        closest
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the palette token names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown Notion color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// Reads the three channels at byte offsets 1..3, 3..5, 5..7 (after `#`).
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    Some([channel(1..3)?, channel(3..5)?, channel(5..7)?])
}

fn rgb_distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (f64::from(*x) - f64::from(*y)).powi(2))
        .sum::<f64>()
        .sqrt()
}
