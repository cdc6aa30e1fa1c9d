//! Storm tracks to styled map segments
//!
//! Drawing is left to a [`PathRenderer`] implementation; this module only
//! decides what to draw. Each pair of consecutive observations becomes one
//! segment colored by the category at its starting point, so a track's
//! color changes as the storm strengthens or weakens.

use super::palette::Palette;
use crate::hurdat::{Category, Result, StormTrack, TrackRow};
use crate::properties::PropertyReader;
use serde::Serialize;

/// Line styling shared by every segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderStyle {
    /// Stroke width in pixels
    pub weight: f64,
    /// Stroke opacity in [0, 1]
    pub opacity: f64,
    /// Unit label appended to wind speeds in popups
    pub wind_unit: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let props = PropertyReader::new(None);
        RenderStyle {
            weight: props.get_f64("line.weight"),
            opacity: props.get_f64("line.opacity"),
            wind_unit: props.get_enum("wind.unit"),
        }
    }
}

/// One drawable piece of a storm track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSegment {
    pub storm_id: String,
    pub name: String,
    /// Ordered (lat, lon) points, two for a regular segment
    pub points: Vec<(f64, f64)>,
    /// Category at the segment's first point
    pub category: Category,
    /// Hex color for `category`
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    /// Short hover text (storm name)
    pub tooltip: String,
    /// Multi-line click text
    pub popup: String,
}

/// Draws segments onto some map surface
pub trait PathRenderer {
    fn draw_segment(&mut self, segment: &PathSegment) -> Result<()>;
}

/// Popup text for the observation a segment starts at
pub fn popup_text(row: &TrackRow, wind_unit: &str) -> String {
    let observation = &row.observation;
    format!(
        "Storm:    {}\nDate:     {}\nTime:     {}\nCategory: {}\nMax Wind: {}{}",
        observation.name,
        observation.date,
        observation.time,
        row.category,
        observation.max_wind,
        wind_unit
    )
}

fn segment(
    track: &StormTrack,
    start: &TrackRow,
    points: Vec<(f64, f64)>,
    palette: &Palette,
    style: &RenderStyle,
) -> PathSegment {
    PathSegment {
        storm_id: track.storm_id.clone(),
        name: track.name.clone(),
        points,
        category: start.category,
        color: palette.color(start.category).to_string(),
        weight: style.weight,
        opacity: style.opacity,
        tooltip: track.name.clone(),
        popup: popup_text(start, &style.wind_unit),
    }
}

/// Split one track into styled segments
///
/// A track with a single observation yields one single-point segment;
/// an empty track yields nothing.
pub fn track_segments(track: &StormTrack, palette: &Palette, style: &RenderStyle) -> Vec<PathSegment> {
    match track.rows.as_slice() {
        [] => Vec::new(),
        [only] => vec![segment(
            track,
            only,
            vec![only.observation.point()],
            palette,
            style,
        )],
        rows => rows
            .windows(2)
            .map(|pair| {
                let points = vec![pair[0].observation.point(), pair[1].observation.point()];
                segment(track, &pair[0], points, palette, style)
            })
            .collect(),
    }
}

/// Feed every segment of every track to `renderer`, in track order
///
/// Returns the number of segments drawn.
pub fn render_tracks<R: PathRenderer + ?Sized>(
    tracks: &[StormTrack],
    palette: &Palette,
    style: &RenderStyle,
    renderer: &mut R,
) -> Result<usize> {
    let mut drawn = 0;
    for track in tracks {
        for segment in track_segments(track, palette, style) {
            renderer.draw_segment(&segment)?;
            drawn += 1;
        }
    }
    log::info!("Rendered {} segments for {} storms", drawn, tracks.len());
    Ok(drawn)
}
