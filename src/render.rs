use std::{fs::File, io::BufReader, path::Path};

use cairo::{Context, FontSlant, FontWeight, LineCap, LineJoin, SvgSurface};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    color::Color,
    error::Error,
    point::{Edge, Point},
    report::TrialResult,
};

/// Presentation settings for the SVG canvas.
///
/// Fields missing from a JSON config fall back to [CanvasConfig::default].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    /// Blank space kept around the unit square on every side
    pub margin: f64,
    pub point_color: Color,
    pub mst_edge_color: Color,
    pub tsp_edge_color: Color,
    pub point_radius: f64,
    pub line_width: f64,
    pub label_font_size: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.,
            height: 800.,
            margin: 20.,
            point_color: Color::GRAY,
            mst_edge_color: Color::RED,
            tsp_edge_color: Color::NAVY,
            point_radius: 3.,
            line_width: 2.,
            label_font_size: 12.,
        }
    }
}

impl CanvasConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Translate an x-coordinate in `[0, 1]` to the canvas.
    pub fn canvas_x(&self, x: f64) -> f64 {
        self.margin + x * (self.width - 2. * self.margin)
    }

    /// Translate a y-coordinate in `[0, 1]` to the canvas.
    pub fn canvas_y(&self, y: f64) -> f64 {
        self.margin + y * (self.height - 2. * self.margin)
    }
}

/// What to draw on top of the points.
#[derive(Debug, Clone, Copy)]
pub enum Drawing<'a> {
    Tree(&'a [Edge]),
    /// Closed cycle, last point repeating the first
    Cycle(&'a [Point]),
}

impl<'a> From<&'a TrialResult> for Drawing<'a> {
    fn from(result: &'a TrialResult) -> Self {
        match result {
            TrialResult::Edges(edges) => Drawing::Tree(edges),
            TrialResult::Cycle(cycle) => Drawing::Cycle(cycle),
        }
    }
}

/// Draw the points and the tree or cycle over them to an SVG file.
///
/// Cycle vertices are labelled with their position in the tour.
pub fn render_svg(
    path: &Path,
    points: &[Point],
    drawing: Drawing,
    config: &CanvasConfig,
) -> Result<(), Error> {
    let surf = SvgSurface::new(config.width, config.height, Some(path))?;
    {
        let ctx = Context::new(&surf)?;

        set_source(&ctx, Color::WHITE);
        ctx.rectangle(0., 0., config.width, config.height);
        ctx.fill()?;

        debug!("Draw points");
        set_source(&ctx, config.point_color);
        for point in points {
            let (x, y) = (config.canvas_x(point.x), config.canvas_y(point.y));
            ctx.new_sub_path();
            ctx.arc(x, y, config.point_radius, 0., std::f64::consts::TAU);
        }
        ctx.fill()?;

        ctx.set_line_cap(LineCap::Round);
        ctx.set_line_join(LineJoin::Round);
        ctx.set_line_width(config.line_width);
        match drawing {
            Drawing::Tree(edges) => {
                debug!("Draw tree");
                set_source(&ctx, config.mst_edge_color);
                for Edge(from, to) in edges {
                    ctx.move_to(config.canvas_x(from.x), config.canvas_y(from.y));
                    ctx.line_to(config.canvas_x(to.x), config.canvas_y(to.y));
                }
                ctx.stroke()?;
            }
            Drawing::Cycle(cycle) => {
                debug!("Draw cycle");
                set_source(&ctx, config.tsp_edge_color);
                if let Some(first) = cycle.first() {
                    ctx.move_to(config.canvas_x(first.x), config.canvas_y(first.y));
                }
                for next in cycle.iter().skip(1) {
                    ctx.line_to(config.canvas_x(next.x), config.canvas_y(next.y));
                }
                ctx.stroke()?;

                ctx.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal);
                ctx.set_font_size(config.label_font_size);
                // The closing point would repeat the label of the first
                for (i, point) in cycle.iter().take(cycle.len().saturating_sub(1)).enumerate() {
                    let label = i.to_string();
                    let extents = ctx.text_extents(&label)?;
                    ctx.move_to(
                        config.canvas_x(point.x) - extents.width() / 2.,
                        config.canvas_y(point.y) - config.point_radius - 1.,
                    );
                    ctx.show_text(&label)?;
                }
            }
        }
    }
    surf.finish();
    Ok(())
}

fn set_source(ctx: &Context, color: Color) {
    ctx.set_source_rgb(color[0], color[1], color[2]);
}
