use std::{fmt, io, ops, path};

use crate::{PolygonList, VertexExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    /// The final triangles
    ResultOnly,
    /// The bridged ring before clipping
    MajorSteps,
    /// Every fallback pass of the clipping loop
    AllSteps,
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, -self.context.view_y_max, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
    /// Every input vertex in svg space, in buffer order
    pub vertices: Vec<[f32; 2]>,
    pub rings: Vec<ops::Range<usize>>,
    /// Number of files written so far
    pub step: u32,
}

impl SvgContext {
    /// Reads the svg settings from the environment, returning `None` if svg output is disabled.
    pub fn new<P: PolygonList + ?Sized>(polygon: &P) -> Option<Self> {
        let output_path = super::env::svg::output_path()?;
        let output_level = super::env::svg::output_level();
        let show_labels = super::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        let mut vertices = Vec::with_capacity(polygon.vertex_count());
        let mut rings = Vec::with_capacity(polygon.ring_count());
        for ring in 0..polygon.ring_count() {
            let start = vertices.len();
            for index in 0..polygon.ring_len(ring) {
                let c = polygon.get_vertex(ring, index).coords();
                view_x_min = view_x_min.min(c.x() as f32);
                view_x_max = view_x_max.max(c.x() as f32);
                view_y_min = view_y_min.min(c.y() as f32);
                view_y_max = view_y_max.max(c.y() as f32);
                vertices.push(Self::point(c));
            }
            rings.push(start..vertices.len());
        }

        if view_x_min > view_x_max || view_y_min > view_y_max {
            return None;
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        if let Err(err) = std::fs::create_dir_all(&output_path) {
            log::warn!("cannot create svg output directory {}: {}", output_path.display(), err);
            return None;
        }

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
            vertices,
            rings,
            step: 0,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }

    /// Maps a y-up coordinate to svg's y-down space
    pub fn point(c: crate::math::Coords) -> [f32; 2] {
        [c.x() as f32, -(c.y() as f32)]
    }
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}
