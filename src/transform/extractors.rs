//! Built-in scalar extractors for RGBA samples
//!
//! Any `FnMut(&T) -> f64` can drive [`crate::transform::reorder`]; these cover
//! the common color channels and HSL components so the command-line driver
//! can select one by name.

use crate::io::error::{SpectraError, unknown_variant};
use image::{Pixel, Rgba};
use std::fmt;
use std::str::FromStr;

/// Named mapping from an RGBA color to a real number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarExtractor {
    /// HSL hue in degrees, `[0, 360)`; 0 for grays
    Hue,
    /// HSL saturation, `[0, 1]`
    Saturation,
    /// HSL lightness, `[0, 1]`
    Brightness,
    /// Perceptual luma as computed by `image`, `[0, 255]`
    Luma,
    /// Red channel, `[0, 255]`
    Red,
    /// Green channel, `[0, 255]`
    Green,
    /// Blue channel, `[0, 255]`
    Blue,
}

const EXTRACTOR_NAMES: &[&str] = &[
    "hue",
    "saturation",
    "brightness",
    "luma",
    "red",
    "green",
    "blue",
];

impl ScalarExtractor {
    /// Every extractor in declaration order
    pub const ALL: [Self; 7] = [
        Self::Hue,
        Self::Saturation,
        Self::Brightness,
        Self::Luma,
        Self::Red,
        Self::Green,
        Self::Blue,
    ];

    /// Evaluate the extractor on one color
    pub fn extract(self, color: &Rgba<u8>) -> f64 {
        let [r, g, b, _] = color.0;
        match self {
            Self::Hue => hsl_hue(r, g, b),
            Self::Saturation => hsl_saturation(r, g, b),
            Self::Brightness => hsl_lightness(r, g, b),
            Self::Luma => f64::from(color.to_luma().0[0]),
            Self::Red => f64::from(r),
            Self::Green => f64::from(g),
            Self::Blue => f64::from(b),
        }
    }

    /// Borrowable closure form for passing to the reorderer
    pub fn as_fn(self) -> impl Fn(&Rgba<u8>) -> f64 {
        move |color| self.extract(color)
    }

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Brightness => "brightness",
            Self::Luma => "luma",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for ScalarExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarExtractor {
    type Err = SpectraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|extractor| extractor.name() == lowered)
            .ok_or_else(|| unknown_variant("extractor", s, EXTRACTOR_NAMES))
    }
}

fn normalized(r: u8, g: u8, b: u8) -> (f64, f64, f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (r, g, b, max, min)
}

fn hsl_hue(r: u8, g: u8, b: u8) -> f64 {
    if r == g && g == b {
        return 0.0;
    }
    let (r, g, b, max, min) = normalized(r, g, b);
    let delta = max - min;

    let sector = if (max - r).abs() < f64::EPSILON {
        (g - b) / delta
    } else if (max - g).abs() < f64::EPSILON {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let degrees = sector * 60.0;
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

fn hsl_lightness(r: u8, g: u8, b: u8) -> f64 {
    let (_, _, _, max, min) = normalized(r, g, b);
    (max + min) / 2.0
}

fn hsl_saturation(r: u8, g: u8, b: u8) -> f64 {
    if r == g && g == b {
        return 0.0;
    }
    let (_, _, _, max, min) = normalized(r, g, b);
    let lightness = (max + min) / 2.0;
    if lightness <= 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    }
}
