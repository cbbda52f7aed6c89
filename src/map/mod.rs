//! Map marker rendering.
//!
//! The dashboard only needs lat/lng/status per issue; how markers are drawn is
//! behind [`MapRenderer`]. Two adapters ship: GeoJSON for external map tools
//! and a plain text marker list for the terminal.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use civiclens_core::{Issue, Status};

use crate::error::{CliError, Result};

/// Fallback centre when there is nothing to show.
pub const DEFAULT_CENTER: (f64, f64) = (28.6139, 77.209);

/// Marker colour for a status.
#[must_use]
pub const fn marker_color(status: Status) -> &'static str {
    match status {
        Status::Pending => "#ef4444",
        Status::InProgress => "#f97316",
        Status::Resolved => "#22c55e",
    }
}

/// Mean position of the issues, or [`DEFAULT_CENTER`] when empty.
#[must_use]
pub fn map_center(issues: &[&Issue]) -> (f64, f64) {
    if issues.is_empty() {
        return DEFAULT_CENTER;
    }
    let n = issues.len() as f64;
    let (lat, lng) = issues
        .iter()
        .fold((0.0, 0.0), |(lat, lng), issue| (lat + issue.lat, lng + issue.lng));
    (lat / n, lng / n)
}

/// Output flavour for `civic map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapFormat {
    #[default]
    Text,
    #[value(name = "geojson")]
    GeoJson,
}

impl MapFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::GeoJson => "geojson",
        }
    }
}

impl fmt::Display for MapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "geojson" | "geo-json" | "json" => Ok(Self::GeoJson),
            other => Err(format!(
                "unknown map format '{other}' (expected text or geojson)"
            )),
        }
    }
}

/// Something that can place issue markers on a map.
pub trait MapRenderer {
    /// Draw one marker per issue.
    ///
    /// # Errors
    ///
    /// Returns `Map` (or an I/O error) when the markers cannot be drawn.
    fn render_markers(&mut self, issues: &[&Issue]) -> Result<()>;
}

/// Writes a GeoJSON `FeatureCollection`.
pub struct GeoJsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> GeoJsonRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// GeoJSON document for the issues. Coordinates are `[lng, lat]`.
#[must_use]
pub fn feature_collection(issues: &[&Issue]) -> Value {
    let (center_lat, center_lng) = map_center(issues);
    let features: Vec<Value> = issues
        .iter()
        .map(|issue| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [issue.lng, issue.lat],
                },
                "properties": {
                    "id": issue.id,
                    "title": issue.title,
                    "status": issue.status,
                    "priority": issue.priority,
                    "department": issue.department,
                    "marker-color": marker_color(issue.status),
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "center": [center_lng, center_lat],
        "features": features,
    })
}

impl<W: Write> MapRenderer for GeoJsonRenderer<W> {
    fn render_markers(&mut self, issues: &[&Issue]) -> Result<()> {
        let doc = feature_collection(issues);
        serde_json::to_writer_pretty(&mut self.out, &doc)?;
        writeln!(self.out)?;
        debug!(markers = issues.len(), "rendered geojson markers");
        Ok(())
    }
}

/// One line per marker.
pub struct TextMapRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextMapRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MapRenderer for TextMapRenderer<W> {
    fn render_markers(&mut self, issues: &[&Issue]) -> Result<()> {
        for issue in issues {
            if !issue.lat.is_finite() || !issue.lng.is_finite() {
                return Err(CliError::Map(format!(
                    "issue {} has no usable coordinates",
                    issue.id
                )));
            }
        }

        let (lat, lng) = map_center(issues);
        writeln!(self.out, "Map centre: {lat:.4}, {lng:.4}")?;
        for issue in issues {
            writeln!(
                self.out,
                "  {} {:<8} ({:.4}, {:.4}) {} [{}]",
                marker_color(issue.status),
                issue.id,
                issue.lat,
                issue.lng,
                issue.title,
                issue.status,
            )?;
        }
        debug!(markers = issues.len(), "rendered text markers");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civiclens_core::mock::sample_issues;

    fn all() -> Vec<&'static Issue> {
        sample_issues().iter().collect()
    }

    #[test]
    fn test_marker_colors() {
        assert_eq!(marker_color(Status::Pending), "#ef4444");
        assert_eq!(marker_color(Status::InProgress), "#f97316");
        assert_eq!(marker_color(Status::Resolved), "#22c55e");
    }

    #[test]
    fn test_center_of_empty_set_is_default() {
        assert_eq!(map_center(&[]), DEFAULT_CENTER);
    }

    #[test]
    fn test_center_is_mean() {
        let issues = all();
        let pair = [issues[0], issues[1]];
        let (lat, lng) = map_center(&pair);
        assert!((lat - (issues[0].lat + issues[1].lat) / 2.0).abs() < 1e-9);
        assert!((lng - (issues[0].lng + issues[1].lng) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_geojson_features() {
        let issues = all();
        let mut renderer = GeoJsonRenderer::new(Vec::new());
        renderer.render_markers(&issues).unwrap();
        let doc: Value = serde_json::from_slice(&renderer.into_inner()).unwrap();

        assert_eq!(doc["type"], "FeatureCollection");
        let features = doc["features"].as_array().unwrap();
        assert_eq!(features.len(), issues.len());
        let first = &features[0];
        assert_eq!(first["properties"]["id"], issues[0].id.as_str());
        assert_eq!(first["geometry"]["coordinates"][0], issues[0].lng);
        assert_eq!(
            first["properties"]["marker-color"],
            marker_color(issues[0].status)
        );
    }

    #[test]
    fn test_text_renderer_lists_every_marker() {
        let issues = all();
        let mut renderer = TextMapRenderer::new(Vec::new());
        renderer.render_markers(&issues).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.starts_with("Map centre: "));
        assert_eq!(text.lines().count(), issues.len() + 1);
        for issue in &issues {
            assert!(text.contains(&issue.id));
        }
    }

    #[test]
    fn test_text_renderer_rejects_nan() {
        let mut broken = sample_issues()[0].clone();
        broken.lat = f64::NAN;
        let mut renderer = TextMapRenderer::new(Vec::new());
        let err = renderer.render_markers(&[&broken]).unwrap_err();
        assert!(err.to_string().starts_with("Map unavailable: "));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("geojson".parse::<MapFormat>().unwrap(), MapFormat::GeoJson);
        assert_eq!("TEXT".parse::<MapFormat>().unwrap(), MapFormat::Text);
        assert!("svg".parse::<MapFormat>().is_err());
    }
}
