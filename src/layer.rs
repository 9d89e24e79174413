//! Map layer kinds and conversion directions.

use std::str::FromStr;

use crate::error::OffsetError;

/// Rendering layer a coordinate request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Roadmap,
    Satellite,
    Hybrid,
    Other,
}

impl LayerKind {
    /// Parse a map-type id such as `"roadmap"` or `"satellite"`.
    ///
    /// Ids are matched exactly, as the map reports them. Anything else
    /// (`"terrain"`, custom styles, `"Satellite"`, empty) maps to
    /// [`LayerKind::Other`], which is corrected like a roadmap.
    pub fn from_name(s: &str) -> Self {
        match s {
            "roadmap" => Self::Roadmap,
            "satellite" => Self::Satellite,
            "hybrid" => Self::Hybrid,
            _ => Self::Other,
        }
    }

    /// Whether tiles of this layer are drawn in GCJ-02.
    ///
    /// Satellite imagery is WGS-84-aligned. Hybrid layers overlay GCJ-02
    /// roads on that imagery; the imagery wins, so roads there stay offset.
    pub fn needs_correction(&self) -> bool {
        !matches!(self, Self::Satellite | Self::Hybrid)
    }
}

impl From<&str> for LayerKind {
    fn from(s: &str) -> Self {
        Self::from_name(s)
    }
}

/// Conversion direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Data coordinates -> tile coordinates (WGS-84 -> GCJ-02).
    ToGcj02,
    /// Tile coordinates -> data coordinates (GCJ-02 -> WGS-84).
    ToWgs84,
}

impl Direction {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "to_gcj02" | "gcj02" | "wgs84_to_gcj02" => Some(Self::ToGcj02),
            "to_wgs84" | "wgs84" | "gcj02_to_wgs84" => Some(Self::ToWgs84),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| OffsetError::UnknownDirection(s.to_string()))
    }
}
