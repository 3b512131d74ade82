use serde::Serialize;
use tracing::debug;

use crate::court::{CourtPrimitive, CourtScene};
use crate::models::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Viewport {
    pub const HALF_COURT: Viewport = Viewport {
        x: (-300.0, 300.0),
        y: (-100.0, 500.0),
    };

    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (f64::from(point.x), f64::from(point.y));
        (self.x.0..=self.x.1).contains(&x) && (self.y.0..=self.y.1).contains(&y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerColor {
    Red,
    Green,
}

/// One outcome's scatter points. Points outside the viewport are counted in
/// `clipped` and left out of `points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub label: &'static str,
    pub color: MarkerColor,
    pub radius: u32,
    pub points: Vec<Point>,
    pub clipped: usize,
}

impl MarkerLayer {
    pub const RADIUS: u32 = 3;

    fn new(
        label: &'static str,
        color: MarkerColor,
        points: &[Point],
        viewport: &Viewport,
    ) -> Self {
        let visible: Vec<Point> = points
            .iter()
            .copied()
            .filter(|point| viewport.contains(*point))
            .collect();
        Self {
            label,
            color,
            radius: Self::RADIUS,
            clipped: points.len() - visible.len(),
            points: visible,
        }
    }
}

/// Court outlines, then missed markers, then made markers, then the caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableScene {
    pub title: String,
    pub viewport: Viewport,
    pub court: Vec<CourtPrimitive>,
    pub missed: MarkerLayer,
    pub made: MarkerLayer,
}

impl RenderableScene {
    pub fn marker_layers(&self) -> [&MarkerLayer; 2] {
        [&self.missed, &self.made]
    }
}

pub fn chart_title(player: &str) -> String {
    format!("Shot Chart for {player}")
}

pub fn compose_chart(
    scene: &CourtScene,
    made: &[Point],
    missed: &[Point],
    title: &str,
) -> RenderableScene {
    let viewport = Viewport::HALF_COURT;
    let missed = MarkerLayer::new("Missed", MarkerColor::Red, missed, &viewport);
    let made = MarkerLayer::new("Made", MarkerColor::Green, made, &viewport);

    debug!(
        title,
        made = made.points.len(),
        missed = missed.points.len(),
        clipped = made.clipped + missed.clipped,
        "composed shot chart"
    );

    RenderableScene {
        title: title.to_string(),
        viewport,
        court: scene.iter().cloned().collect(),
        missed,
        made,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::build_court;
    use crate::models::{EventType, ShotEvent};
    use crate::shots::{partition_shots, UnknownEventPolicy};

    #[test]
    fn layers_are_colored_by_outcome_in_draw_order() {
        let court = build_court(true);
        let scene = compose_chart(
            &court,
            &[Point::new(0, 0)],
            &[Point::new(10, 10)],
            &chart_title("X"),
        );

        assert_eq!(scene.title, "Shot Chart for X");
        assert_eq!(scene.court.len(), 13);
        let [first, second] = scene.marker_layers();
        assert_eq!(first.color, MarkerColor::Red);
        assert_eq!(first.points, vec![Point::new(10, 10)]);
        assert_eq!(second.color, MarkerColor::Green);
        assert_eq!(second.points, vec![Point::new(0, 0)]);
    }

    #[test]
    fn viewport_is_fixed_regardless_of_data() {
        let court = build_court(false);
        let empty = compose_chart(&court, &[], &[], "empty");
        let wide = compose_chart(&court, &[Point::new(-2000, 9000)], &[], "wide");
        assert_eq!(empty.viewport, Viewport::HALF_COURT);
        assert_eq!(wide.viewport, Viewport::HALF_COURT);
    }

    #[test]
    fn shots_outside_the_viewport_are_clipped_not_dropped_upstream() {
        let events = vec![
            ShotEvent {
                team_name: "Lakers".to_string(),
                player_name: "X".to_string(),
                event_type: EventType::MadeShot,
                loc_x: 400,
                loc_y: 10,
            },
            ShotEvent {
                team_name: "Lakers".to_string(),
                player_name: "X".to_string(),
                event_type: EventType::MadeShot,
                loc_x: 300,
                loc_y: 500,
            },
        ];
        let partition = partition_shots(&events, "X", UnknownEventPolicy::Skip).unwrap();
        assert_eq!(partition.made.len(), 2);

        let scene = compose_chart(&build_court(true), &partition.made, &partition.missed, "X");
        assert_eq!(scene.made.points, vec![Point::new(300, 500)]);
        assert_eq!(scene.made.clipped, 1);
        assert_eq!(scene.missed.clipped, 0);
    }

    #[test]
    fn inputs_are_left_untouched() {
        let court = build_court(true);
        let made = vec![Point::new(1, 2)];
        let before = court.clone();
        let _ = compose_chart(&court, &made, &[], "X");
        assert_eq!(court, before);
        assert_eq!(made, vec![Point::new(1, 2)]);
    }

    #[test]
    fn scene_serializes_for_external_renderers() {
        let scene = compose_chart(&build_court(false), &[Point::new(1, 2)], &[], "X");
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["court"][0]["kind"], "circle");
        assert_eq!(json["court"][5]["stroke"], "dashed");
        assert_eq!(json["made"]["color"], "green");
        assert_eq!(json["viewport"]["x"][0], -300.0);
    }
}
