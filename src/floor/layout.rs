//! Seat placement around a table.
//!
//! Placement is a pure function of the cluster geometry and the seat's index,
//! so a refreshed snapshot never moves a seat on the map.

use serde::{Deserialize, Serialize};

/// Seat icon footprint; radial placements are shifted by half of it so the
/// icon is centred on the circle.
pub const DEFAULT_SEAT_FOOTPRINT: f64 = 20.0;
/// Horizontal distance between neighbours in a row.
pub const DEFAULT_ROW_SPACING: f64 = 26.0;
/// Top row sits this far above the anchor.
pub const DEFAULT_ROW_ABOVE: f64 = 32.0;
/// Bottom row sits this far below the anchor.
pub const DEFAULT_ROW_BELOW: f64 = 58.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where a seat icon goes and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    /// Degrees, clockwise.
    pub rotation: f64,
}

/// How seats are arranged around a piece of furniture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryRule {
    /// Evenly spaced on a circle around the anchor, facing inwards.
    Radial {
        radius: f64,
        #[serde(default = "default_footprint")]
        footprint: f64,
    },
    /// Two facing rows; the top row holds `ceil(count / 2)` seats.
    Rows {
        #[serde(default = "default_spacing")]
        spacing: f64,
        #[serde(default = "default_above")]
        above: f64,
        #[serde(default = "default_below")]
        below: f64,
    },
}

fn default_footprint() -> f64 {
    DEFAULT_SEAT_FOOTPRINT
}

fn default_spacing() -> f64 {
    DEFAULT_ROW_SPACING
}

fn default_above() -> f64 {
    DEFAULT_ROW_ABOVE
}

fn default_below() -> f64 {
    DEFAULT_ROW_BELOW
}

impl GeometryRule {
    pub fn radial(radius: f64) -> Self {
        GeometryRule::Radial {
            radius,
            footprint: DEFAULT_SEAT_FOOTPRINT,
        }
    }

    pub fn rows() -> Self {
        GeometryRule::Rows {
            spacing: DEFAULT_ROW_SPACING,
            above: DEFAULT_ROW_ABOVE,
            below: DEFAULT_ROW_BELOW,
        }
    }

    /// Reason the rule cannot lay out seats, if any.
    pub(crate) fn invalid_reason(&self) -> Option<String> {
        match *self {
            GeometryRule::Radial { radius, footprint } => {
                if !(radius.is_finite() && radius > 0.0) {
                    Some(format!("radius must be positive, got {}", radius))
                } else if !(footprint.is_finite() && footprint >= 0.0) {
                    Some(format!("footprint must not be negative, got {}", footprint))
                } else {
                    None
                }
            }
            GeometryRule::Rows {
                spacing,
                above,
                below,
            } => {
                if !(spacing.is_finite() && spacing > 0.0) {
                    Some(format!("row spacing must be positive, got {}", spacing))
                } else if !(above.is_finite() && below.is_finite()) {
                    Some("row offsets must be finite".to_string())
                } else {
                    None
                }
            }
        }
    }
}

/// Anchor plus arrangement rule for one table cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterGeometry {
    pub anchor: Point,
    pub rule: GeometryRule,
}

/// Place the `index`-th of `count` seats of a cluster.
pub fn place(geometry: &ClusterGeometry, index: usize, count: usize) -> Placement {
    let anchor = geometry.anchor;

    match geometry.rule {
        GeometryRule::Radial { radius, footprint } => {
            let degrees = index as f64 * 360.0 / count as f64;
            let theta = degrees.to_radians();
            let half = footprint / 2.0;
            Placement {
                x: anchor.x + theta.cos() * radius - half,
                y: anchor.y + theta.sin() * radius - half,
                rotation: degrees + 90.0,
            }
        }
        GeometryRule::Rows {
            spacing,
            above,
            below,
        } => {
            let row_size = count.div_ceil(2);
            let top = index < row_size;
            let column = index % row_size;
            Placement {
                x: anchor.x + column as f64 * spacing,
                y: if top { anchor.y - above } else { anchor.y + below },
                rotation: if top { 0.0 } else { 180.0 },
            }
        }
    }
}
