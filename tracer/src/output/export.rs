use crate::output::model::TraceModel;
use anyhow::{bail, Context};
use clap::ValueEnum;
use wavecore::DrawingArea;

/// Top and bottom stops of the background gradient.
const GRADIENT_TOP: &str = "#ff2d55";
const GRADIENT_BOTTOM: &str = "#000000";
const STROKE_WIDTH: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Svg,
}

pub fn render(model: &TraceModel, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(model).context("serializing trace to JSON")
        }
        Format::Csv => Ok(render_csv(model)),
        Format::Svg => match &model.area {
            Some(area) => Ok(render_svg(model, area)),
            None => bail!("SVG output needs area coordinates; drop --raw or pick json/csv"),
        },
    }
}

fn render_csv(model: &TraceModel) -> String {
    let rows: String = model
        .points
        .iter()
        .map(|point| format!("{},{}\n", point.x, point.y))
        .collect();
    format!("x,y\n{rows}")
}

fn render_svg(model: &TraceModel, area: &DrawingArea) -> String {
    let width = area.width;
    let height = area.height;
    let polyline = model
        .points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    out.push('\n');
    out.push_str(&format!(
        r#"  <defs><linearGradient id="background" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{GRADIENT_TOP}"/><stop offset="1" stop-color="{GRADIENT_BOTTOM}"/></linearGradient></defs>"#
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"  <rect width="{width}" height="{height}" fill="url(#background)"/>"#
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"  <polyline points="{polyline}" fill="none" stroke="white" stroke-opacity="0.8" stroke-width="{STROKE_WIDTH}" stroke-linecap="round" stroke-linejoin="round" stroke-miterlimit="10"/>"#
    ));
    out.push_str("\n</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::{Point, WaveParams};

    fn points() -> Vec<Point> {
        vec![Point::new(0.0, 25.0), Point::new(50.0, 0.0), Point::new(100.0, 25.0)]
    }

    fn model() -> TraceModel {
        TraceModel::normalized(WaveParams::default(), DrawingArea::new(100.0, 50.0), points())
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let csv = render(&model(), Format::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["x,y", "0,25", "50,0", "100,25"]);
    }

    #[test]
    fn json_round_trips_points() {
        let json = render(&model(), Format::Json).unwrap();
        let parsed: TraceModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.points, model().points);
        assert_eq!(parsed.area, model().area);
    }

    #[test]
    fn svg_strokes_polyline_over_gradient() {
        let svg = render(&model(), Format::Svg).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(svg.contains("0.000,25.000 50.000,0.000 100.000,25.000"));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains("url(#background)"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn raw_samples_cannot_be_drawn_as_svg() {
        let raw = TraceModel::raw(WaveParams::default(), points());
        let err = render(&raw, Format::Svg).unwrap_err();
        assert!(err.to_string().starts_with("SVG output needs area coordinates"));
    }

    #[test]
    fn raw_json_omits_area() {
        let raw = TraceModel::raw(WaveParams::default(), points());
        let json = render(&raw, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("area").is_none());
        assert_eq!(value["points"].as_array().unwrap().len(), 3);
        let parsed: TraceModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.area, None);
    }
}
