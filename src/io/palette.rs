//! Synthetic sample sources for the command-line driver and benchmarks

use crate::io::error::{SpectraError, unknown_variant};
use image::Rgba;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Generator of RGBA sample sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Independent uniformly random opaque colors
    Random,
    /// Evenly spaced fully saturated hues, shuffled
    HueSweep,
}

const PALETTE_NAMES: &[&str] = &["random", "hue-sweep"];

impl Palette {
    /// Generate `count` opaque colors
    pub fn generate<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> Vec<Rgba<u8>> {
        match self {
            Self::Random => (0..count)
                .map(|_| Rgba([rng.random(), rng.random(), rng.random(), u8::MAX]))
                .collect(),
            Self::HueSweep => {
                let mut colors: Vec<Rgba<u8>> = (0..count)
                    .map(|i| {
                        let hue = 360.0 * i as f64 / count as f64;
                        let [r, g, b] = saturated_hue(hue);
                        Rgba([r, g, b, u8::MAX])
                    })
                    .collect();
                colors.shuffle(rng);
                colors
            }
        }
    }

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::HueSweep => "hue-sweep",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = SpectraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "hue-sweep" | "huesweep" | "rainbow" => Ok(Self::HueSweep),
            _ => Err(unknown_variant("palette", s, PALETTE_NAMES)),
        }
    }
}

/// RGB for an HSL color with saturation 1 and lightness 0.5
pub fn saturated_hue(hue_degrees: f64) -> [u8; 3] {
    let sector = hue_degrees.rem_euclid(360.0) / 60.0;
    let rising = sector.rem_euclid(1.0);
    let falling = 1.0 - rising;

    let (r, g, b) = match sector as u32 {
        0 => (1.0, rising, 0.0),
        1 => (falling, 1.0, 0.0),
        2 => (0.0, 1.0, rising),
        3 => (0.0, falling, 1.0),
        4 => (rising, 0.0, 1.0),
        _ => (1.0, 0.0, falling),
    };

    [to_channel(r), to_channel(g), to_channel(b)]
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
