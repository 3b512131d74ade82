use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::chart::{MarkerColor, RenderableScene};
use crate::court::StrokeStyle;
use crate::error::{Result, ShotChartError};

pub const CHART_SIZE: (u32, u32) = (1200, 1100);

const LINE_WIDTH: u32 = 2;
const DASH_LENGTH: f64 = 8.0;
const DASH_GAP: f64 = 6.0;

type DrawResult = std::result::Result<(), Box<dyn Error>>;

fn marker_color(color: MarkerColor) -> RGBColor {
    match color {
        MarkerColor::Red => RED,
        MarkerColor::Green => GREEN,
    }
}

/// Breaks a polyline into dash segments of `dash` length separated by `gap`.
pub fn dash_segments(points: &[(f64, f64)], dash: f64, gap: f64) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    let mut drawing = true;
    let mut remaining = dash;

    for pair in points.windows(2) {
        let (mut from, to) = (pair[0], pair[1]);
        let mut length = ((to.0 - from.0).powi(2) + (to.1 - from.1).powi(2)).sqrt();

        while length > 0.0 {
            if drawing && current.is_empty() {
                current.push(from);
            }
            let step = remaining.min(length);
            let t = step / length;
            let next = (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
            if drawing {
                current.push(next);
            }
            remaining -= step;
            length -= step;
            from = next;

            if remaining <= 0.0 {
                if drawing {
                    segments.push(std::mem::take(&mut current));
                }
                drawing = !drawing;
                remaining = if drawing { dash } else { gap };
            }
        }
    }

    if current.len() > 1 {
        segments.push(current);
    }
    segments
}

fn draw_scene<DB>(root: DrawingArea<DB, Shift>, scene: &RenderableScene) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_range, y_range) = (scene.viewport.x, scene.viewport.y);
    let mut chart = ChartBuilder::on(&root)
        .caption(&scene.title, ("sans-serif", 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    chart.configure_mesh().disable_mesh().draw()?;

    let line = BLACK.stroke_width(LINE_WIDTH);
    for primitive in &scene.court {
        let outline = primitive.outline();
        if primitive.is_filled() {
            chart.draw_series(std::iter::once(Polygon::new(outline, BLACK.filled())))?;
        } else if primitive.stroke() == StrokeStyle::Dashed {
            chart.draw_series(
                dash_segments(&outline, DASH_LENGTH, DASH_GAP)
                    .into_iter()
                    .map(|segment| PathElement::new(segment, line)),
            )?;
        } else {
            chart.draw_series(std::iter::once(PathElement::new(outline, line)))?;
        }
    }

    for layer in scene.marker_layers() {
        let style = marker_color(layer.color).filled();
        chart.draw_series(layer.points.iter().map(|point| {
            Circle::new((f64::from(point.x), f64::from(point.y)), layer.radius, style)
        }))?;
    }

    root.present()?;
    Ok(())
}

pub fn render_svg(scene: &RenderableScene, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_scene(root, scene).map_err(|err| ShotChartError::Render(err.to_string()))?;
    info!(path = %path.display(), title = %scene.title, "rendered shot chart");
    Ok(())
}

pub fn render_svg_string(scene: &RenderableScene) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, CHART_SIZE).into_drawing_area();
        draw_scene(root, scene).map_err(|err| ShotChartError::Render(err.to_string()))?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compose_chart;
    use crate::court::build_court;
    use crate::models::Point;

    fn assert_segment(actual: &[(f64, f64)], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a.0 - e.0).abs() < 1e-9 && (a.1 - e.1).abs() < 1e-9, "{a:?} != {e:?}");
        }
    }

    #[test]
    fn dashes_alternate_along_a_line() {
        let segments = dash_segments(&[(0.0, 0.0), (30.0, 0.0)], 8.0, 6.0);
        assert_eq!(segments.len(), 3);
        assert_segment(&segments[0], &[(0.0, 0.0), (8.0, 0.0)]);
        assert_segment(&segments[1], &[(14.0, 0.0), (22.0, 0.0)]);
        assert_segment(&segments[2], &[(28.0, 0.0), (30.0, 0.0)]);
    }

    #[test]
    fn dashes_continue_across_corners() {
        let segments = dash_segments(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)], 6.0, 2.0);
        assert_eq!(segments[0], vec![(0.0, 0.0), (4.0, 0.0), (4.0, 2.0)]);
    }

    #[test]
    fn renders_scene_to_svg() {
        let scene = compose_chart(
            &build_court(true),
            &[Point::new(0, 50)],
            &[Point::new(-120, 200), Point::new(400, 0)],
            "Shot Chart for X",
        );
        let svg = render_svg_string(&scene).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Shot Chart for X"));
        assert!(svg.matches("<circle").count() >= 2);
    }
}
