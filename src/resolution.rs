// src/resolution.rs
use crate::numbers;
use crate::vocab::open_enum;
use serde::{Deserialize, Serialize};

pub const WIDTH_LABELS: &[&str] = &[
    "512", "768", "1024", "1280", "1536", "1920", "2048", "3840", "4096",
];

pub const HEIGHT_LABELS: &[&str] = &[
    "512", "768", "1024", "1080", "1536", "2048", "2160", "4096", "4320",
];

pub const DPI_LABELS: &[&str] = &[
    "72 (Web)",
    "150 (Draft Print)",
    "300 (Standard Print)",
    "600 (High Quality Print)",
];

/// Relative difference tolerated between the declared aspect ratio and
/// width / height before it is reported.
const ASPECT_TOLERANCE: f64 = 0.01;

/// Reads the leading run of ASCII digits, ignoring any unit or
/// parenthetical suffix: `"300 (Standard Print)"` gives 300.
pub fn parse_leading_number(label: &str) -> Option<u32> {
    let trimmed = label.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Width or height: a raw pixel count or a label such as `"4096"`.
/// Whole-valued floats like `4096.0` read as pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    #[serde(deserialize_with = "numbers::whole")]
    Pixels(u32),
    Label(String),
}

impl Dimension {
    pub fn pixels(&self) -> Option<u32> {
        match self {
            Dimension::Pixels(px) => Some(*px),
            Dimension::Label(label) => parse_leading_number(label),
        }
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Pixels(px)
    }
}

impl From<&str> for Dimension {
    fn from(label: &str) -> Self {
        Dimension::Label(label.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dpi {
    #[serde(deserialize_with = "numbers::whole")]
    Value(u32),
    Label(String),
}

impl Dpi {
    pub fn value(&self) -> Option<u32> {
        match self {
            Dpi::Value(dpi) => Some(*dpi),
            Dpi::Label(label) => parse_leading_number(label),
        }
    }
}

impl From<u32> for Dpi {
    fn from(dpi: u32) -> Self {
        Dpi::Value(dpi)
    }
}

impl From<&str> for Dpi {
    fn from(label: &str) -> Self {
        Dpi::Label(label.to_string())
    }
}

open_enum! {
    /// Declared aspect ratio, conventionally `digits:digits`.
    AspectRatio {
        Square => "1:1",
        Standard => "4:3",
        StandardPortrait => "3:4",
        Photo => "3:2",
        PhotoPortrait => "2:3",
        Widescreen => "16:9",
        Vertical => "9:16",
        Ultrawide => "21:9",
        Portrait => "4:5",
    }
}

impl AspectRatio {
    /// `(w, h)` when the value has the `digits:digits` shape with non-zero
    /// parts.
    pub fn ratio(&self) -> Option<(u32, u32)> {
        let (w, h) = self.as_str().split_once(':')?;
        let w: u32 = w.trim().parse().ok()?;
        let h: u32 = h.trim().parse().ok()?;
        (w > 0 && h > 0).then_some((w, h))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: Dimension,
    pub height: Dimension,
    pub aspect_ratio: AspectRatio,
    pub dpi: Dpi,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Resolution {
    /// Describes the disagreement when the declared aspect ratio does not
    /// match width / height. `None` when they agree or cannot be compared.
    pub fn aspect_ratio_mismatch(&self) -> Option<String> {
        let (rw, rh) = self.aspect_ratio.ratio()?;
        let width = self.width.pixels()?;
        let height = self.height.pixels()?;
        if height == 0 {
            return None;
        }

        let declared = rw as f64 / rh as f64;
        let actual = width as f64 / height as f64;
        if ((actual - declared) / declared).abs() <= ASPECT_TOLERANCE {
            return None;
        }

        Some(format!(
            "declared {} but {}x{} is {:.3}:1",
            self.aspect_ratio, width, height, actual
        ))
    }
}
