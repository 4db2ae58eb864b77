// WHY: evenly spaced hues keep the most distinct lengths maximally far apart on the wheel

use std::collections::BTreeMap;
use std::fmt;

use super::ranking::LengthRankMap;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form
    pub fn hex(&self) -> String {
        self.to_string()
    }

    /// Parse `#rrggbb` (either case)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color for `step` out of `num_steps` evenly spaced hues at full saturation and value.
///
/// `h = step / num_steps` is swept through six hue bands; channels are scaled to
/// `0..=255` by truncation, not rounding. Callers guarantee `num_steps > 0`; a zero
/// step count is treated as one step.
pub fn rainbow(num_steps: usize, step: usize) -> Rgb {
    let h = step as f64 / num_steps.max(1) as f64;
    let scaled = h * 6.0;
    let band = scaled.floor();
    let f = scaled - band;
    let q = 1.0 - f;

    let (r, g, b) = match (band as i64).rem_euclid(6) {
        0 => (1.0, f, 0.0),
        1 => (q, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, q, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, q),
    };

    Rgb::new(channel(r), channel(g), channel(b))
}

/// Scale a unit channel to a byte, truncating toward zero
fn channel(value: f64) -> u8 {
    (value * 255.0) as u8
}

/// Distinct sentence length -> assigned color
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorMap {
    colors: BTreeMap<usize, Rgb>,
}

impl ColorMap {
    /// Assign each ranked length its hue: rank `r` of `k` maps to `rainbow(k, r)`
    pub fn from_ranks(ranks: &LengthRankMap) -> Self {
        let k = ranks.distinct_count();
        let colors = ranks
            .iter()
            .map(|(length, rank)| (length, rainbow(k, rank)))
            .collect();

        Self { colors }
    }

    pub fn color(&self, length: usize) -> Option<Rgb> {
        self.colors.get(&length).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(length, color)` pairs in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Rgb)> + '_ {
        self.colors.iter().map(|(&length, &color)| (length, color))
    }
}
