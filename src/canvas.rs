//! SVG canvas output for rendered fractals.

use crate::error::Result;
use crate::palette::hex;
use crate::sink::DrawSink;
use csscolorparser::Color;
use glam::DVec2;
use std::path::Path as FsPath;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};

/// Consecutive strokes sharing a colour.
#[derive(Clone, Debug)]
struct Run {
    color: String,
    segments: Vec<(DVec2, DVec2)>,
}

/// A [`DrawSink`] that accumulates strokes and renders them as an SVG document.
///
/// Segments are buffered by `line_to` and painted with the current stroke
/// colour when `stroke` is called, like a 2D canvas context.
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    stroke_width: f64,
    background: Option<String>,
    color: String,
    cursor: DVec2,
    pending: Vec<(DVec2, DVec2)>,
    runs: Vec<Run>,
}

impl SvgCanvas {
    /// An empty `width` x `height` canvas with 1px black strokes.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stroke_width: 1.0,
            background: None,
            color: "#000000".to_string(),
            cursor: DVec2::ZERO,
            pending: Vec::new(),
            runs: Vec::new(),
        }
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Number of `<path>` elements the document will contain.
    pub fn path_count(&self) -> usize {
        self.runs.len()
    }

    /// Builds the SVG document: background rect first, then one path per colour run.
    pub fn document(&self) -> Document {
        let (w, h) = (self.width as f32, self.height as f32);
        let mut document = Document::new()
            .set("width", w)
            .set("height", h)
            .set("viewBox", (0.0f32, 0.0f32, w, h));

        if let Some(background) = &self.background {
            document = document.add(
                Rectangle::new()
                    .set("width", w)
                    .set("height", h)
                    .set("fill", background.as_str()),
            );
        }

        for run in &self.runs {
            let mut data = Data::new();
            let mut last: Option<DVec2> = None;
            for (from, to) in &run.segments {
                if last != Some(*from) {
                    data = data.move_to((from.x as f32, from.y as f32));
                }
                data = data.line_to((to.x as f32, to.y as f32));
                last = Some(*to);
            }
            document = document.add(
                Path::new()
                    .set("fill", "none")
                    .set("stroke", run.color.as_str())
                    .set("stroke-width", self.stroke_width as f32)
                    .set("stroke-linecap", "round")
                    .set("d", data),
            );
        }
        document
    }

    pub fn to_svg_string(&self) -> String {
        self.document().to_string()
    }

    /// Writes the document to `path`.
    pub fn save(&self, path: impl AsRef<FsPath>) -> Result<()> {
        svg::save(path, &self.document())?;
        Ok(())
    }
}

impl DrawSink for SvgCanvas {
    fn move_to(&mut self, point: DVec2) {
        self.cursor = point;
    }

    fn line_to(&mut self, point: DVec2) {
        self.pending.push((self.cursor, point));
        self.cursor = point;
    }

    fn stroke(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let segments = std::mem::take(&mut self.pending);
        match self.runs.last_mut() {
            Some(run) if run.color == self.color => run.segments.extend(segments),
            _ => self.runs.push(Run {
                color: self.color.clone(),
                segments,
            }),
        }
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.color = hex(color);
    }

    fn clear(&mut self, color: &Color) {
        self.background = Some(hex(color));
        self.pending.clear();
        self.runs.clear();
    }

    fn dimensions(&self) -> Option<DVec2> {
        Some(DVec2::new(self.width, self.height))
    }
}
