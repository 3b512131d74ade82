//! Half-court diagram in court-units (tenths of a foot, hoop at the origin).
//!
//! The builder only produces shapes as data. Renderers turn each primitive
//! into a polyline with [`CourtPrimitive::outline`].

use std::f64::consts::PI;

use serde::Serialize;

/// Sweep of the three-point arc. Fitted by eye against the corner lines,
/// not derived from the 23'9" radius.
pub const THREE_POINT_ARC_DEGREES: (f64, f64) = (22.0, 158.0);

const HOOP_RADIUS: f64 = 7.5;
const RESTRICTED_RADIUS: f64 = 40.0;
const FREE_THROW_CENTER: (f64, f64) = (0.0, 142.5);
const FREE_THROW_RADIUS: f64 = 60.0;
const THREE_POINT_RADIUS: f64 = 237.5;
const CORNER_THREE_X: f64 = 220.0;
const CENTER_COURT: (f64, f64) = (0.0, 422.5);
const CENTER_OUTER_RADIUS: f64 = 60.0;
const CENTER_INNER_RADIUS: f64 = 20.0;
const BASELINE_Y: f64 = -47.5;

/// Points per full turn when sampling curved outlines.
const SEGMENTS_PER_TURN: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CourtPrimitive {
    Circle {
        center: (f64, f64),
        radius: f64,
    },
    /// `origin` is the lower-left corner. A zero width draws a vertical segment.
    Rectangle {
        origin: (f64, f64),
        width: f64,
        height: f64,
        filled: bool,
    },
    /// Swept counter-clockwise from `start_deg` to `end_deg`, wrapping past 360.
    Arc {
        center: (f64, f64),
        radius_x: f64,
        radius_y: f64,
        start_deg: f64,
        end_deg: f64,
        stroke: StrokeStyle,
    },
}

impl CourtPrimitive {
    fn arc(center: (f64, f64), radius: f64, start_deg: f64, end_deg: f64) -> Self {
        CourtPrimitive::Arc {
            center,
            radius_x: radius,
            radius_y: radius,
            start_deg,
            end_deg,
            stroke: StrokeStyle::Solid,
        }
    }

    fn outline_rect(origin: (f64, f64), width: f64, height: f64) -> Self {
        CourtPrimitive::Rectangle {
            origin,
            width,
            height,
            filled: false,
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, CourtPrimitive::Rectangle { filled: true, .. })
    }

    pub fn stroke(&self) -> StrokeStyle {
        match self {
            CourtPrimitive::Arc { stroke, .. } => *stroke,
            _ => StrokeStyle::Solid,
        }
    }

    /// Polyline tracing the primitive. Closed shapes repeat their first point.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        match *self {
            CourtPrimitive::Circle { center, radius } => {
                sample_ellipse(center, radius, radius, 0.0, 360.0)
            }
            CourtPrimitive::Rectangle {
                origin: (x, y),
                width,
                height,
                ..
            } => vec![
                (x, y),
                (x + width, y),
                (x + width, y + height),
                (x, y + height),
                (x, y),
            ],
            CourtPrimitive::Arc {
                center,
                radius_x,
                radius_y,
                start_deg,
                end_deg,
                ..
            } => sample_ellipse(center, radius_x, radius_y, start_deg, sweep(start_deg, end_deg)),
        }
    }
}

fn sweep(start_deg: f64, end_deg: f64) -> f64 {
    let sweep = (end_deg - start_deg).rem_euclid(360.0);
    if sweep == 0.0 {
        360.0
    } else {
        sweep
    }
}

fn sample_ellipse(
    (cx, cy): (f64, f64),
    radius_x: f64,
    radius_y: f64,
    start_deg: f64,
    sweep_deg: f64,
) -> Vec<(f64, f64)> {
    let steps = ((sweep_deg / 360.0) * SEGMENTS_PER_TURN as f64).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let theta = (start_deg + sweep_deg * i as f64 / steps as f64) * PI / 180.0;
            (cx + radius_x * theta.cos(), cy + radius_y * theta.sin())
        })
        .collect()
}

/// Ordered court diagram handed to the chart composer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourtScene {
    pub primitives: Vec<CourtPrimitive>,
    pub outer_lines: Option<CourtPrimitive>,
}

impl CourtScene {
    pub fn len(&self) -> usize {
        self.primitives.len() + usize::from(self.outer_lines.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Primitives in draw order, outer boundary last.
    pub fn iter(&self) -> impl Iterator<Item = &CourtPrimitive> {
        self.primitives.iter().chain(self.outer_lines.iter())
    }
}

pub fn build_court(include_outer_lines: bool) -> CourtScene {
    let hoop = CourtPrimitive::Circle {
        center: (0.0, 0.0),
        radius: HOOP_RADIUS,
    };
    let backboard = CourtPrimitive::Rectangle {
        origin: (-30.0, -8.5),
        width: 60.0,
        height: 1.0,
        filled: true,
    };

    // Paint: 16ft outer box, 12ft inner box, both 19ft deep from the baseline.
    let outer_box = CourtPrimitive::outline_rect((-80.0, BASELINE_Y), 160.0, 190.0);
    let inner_box = CourtPrimitive::outline_rect((-60.0, BASELINE_Y), 120.0, 190.0);

    let top_free_throw = CourtPrimitive::arc(FREE_THROW_CENTER, FREE_THROW_RADIUS, 0.0, 180.0);
    let bottom_free_throw = CourtPrimitive::Arc {
        center: FREE_THROW_CENTER,
        radius_x: FREE_THROW_RADIUS,
        radius_y: FREE_THROW_RADIUS,
        start_deg: 180.0,
        end_deg: 0.0,
        stroke: StrokeStyle::Dashed,
    };
    let restricted = CourtPrimitive::arc((0.0, 0.0), RESTRICTED_RADIUS, 0.0, 180.0);

    // Corner threes run 14ft from the baseline before the arc starts.
    let corner_three_a = CourtPrimitive::outline_rect((-CORNER_THREE_X, BASELINE_Y), 0.0, 140.0);
    let corner_three_b = CourtPrimitive::outline_rect((CORNER_THREE_X, BASELINE_Y), 0.0, 140.0);
    let (three_start, three_end) = THREE_POINT_ARC_DEGREES;
    let three_arc = CourtPrimitive::arc((0.0, 0.0), THREE_POINT_RADIUS, three_start, three_end);

    let center_outer_arc = CourtPrimitive::arc(CENTER_COURT, CENTER_OUTER_RADIUS, 180.0, 0.0);
    let center_inner_arc = CourtPrimitive::arc(CENTER_COURT, CENTER_INNER_RADIUS, 180.0, 0.0);

    let outer_lines = include_outer_lines
        .then(|| CourtPrimitive::outline_rect((-250.0, BASELINE_Y), 500.0, 470.0));

    CourtScene {
        primitives: vec![
            hoop,
            backboard,
            outer_box,
            inner_box,
            top_free_throw,
            bottom_free_throw,
            restricted,
            corner_three_a,
            corner_three_b,
            three_arc,
            center_outer_arc,
            center_inner_arc,
        ],
        outer_lines,
    }
}
