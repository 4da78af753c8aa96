use crate::{List, PolygonList, TriangleWinding, TriangulationConfig, TriangulationError, VertexExt, emit::Emitter, linked::{NodeArena, NodeIdx}, math, zorder::CurveFrame};

#[cfg(feature = "debugging")]
use crate::debug;

/// One triangulation run: the node arena, the curve index (if enabled) and the output.
pub(crate) struct EarcutState<'c, L: List<u32>> {
    pub(crate) arena: NodeArena,
    pub(crate) frame: Option<CurveFrame>,
    pub(crate) emitter: Emitter<L>,
    pub(crate) config: &'c TriangulationConfig,
    /// Steps since the last emitted triangle or fresh ring
    pub(crate) stalled: usize,
    pub(crate) stall_limit: usize,
    #[cfg(feature = "debugging")]
    pub(crate) svg_context: Option<debug::svg::SvgContext>,
}

pub(crate) fn triangulate<P: PolygonList + ?Sized, L: List<u32>>(polygon: &P, config: &TriangulationConfig, output: L) -> Result<L, TriangulationError> {
    let vertex_count = polygon.vertex_count();
    if vertex_count > u32::MAX as usize {
        return Err(TriangulationError::TooManyVertices(vertex_count));
    }

    if polygon.ring_count() == 0 {
        return Ok(output);
    }

    let winding = config.winding.unwrap_or_else(|| outer_winding(polygon));
    let mut state = EarcutState {
        arena: NodeArena::with_capacity(vertex_count * 3 / 2),
        frame: None,
        emitter: Emitter::new(output, winding),
        config,
        stalled: 0,
        stall_limit: 0,
        #[cfg(feature = "debugging")]
        svg_context: debug::svg::SvgContext::new(polygon),
    };

    let outer = match state.arena.link_ring(polygon, 0, 0, true) {
        Some(outer) => outer,
        None => return Ok(state.emitter.finish()),
    };

    // Fewer than 3 usable vertices
    if state.arena.prev(outer) == state.arena.next(outer) {
        log::debug!("outer ring has fewer than 3 distinct vertices, nothing to triangulate");
        return Ok(state.emitter.finish());
    }

    let outer = if polygon.ring_count() > 1 {
        state.eliminate_holes(polygon, outer)
    } else {
        outer
    };

    #[cfg(feature = "debugging")]
    state.output_svg("bridged", outer, debug::svg::SvgOutputLevel::MajorSteps);

    if vertex_count > config.hash_threshold {
        state.frame = Some(CurveFrame::new(polygon));
    }

    state.earcut_linked(outer, Pass::Initial);

    #[cfg(feature = "debugging")]
    state.output_svg("result", outer, debug::svg::SvgOutputLevel::ResultOnly);

    Ok(state.emitter.finish())
}

/// The winding of the outer ring, counterclockwise for degenerate rings
pub(crate) fn outer_winding<P: PolygonList + ?Sized>(polygon: &P) -> TriangleWinding {
    let ring = (0..polygon.ring_len(0)).map(|index| polygon.get_vertex(0, index).coords());
    if math::ring_double_area(ring) < 0. {
        TriangleWinding::Clockwise
    } else {
        TriangleWinding::Counterclockwise
    }
}

/// How many fallbacks a clipping loop has already gone through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    /// Plain ear clipping
    Initial,
    /// Duplicate and collinear points have been removed
    Filtered,
    /// Local self-intersections have been cut off
    Cured,
}

impl<'c, L: List<u32>> EarcutState<'c, L> {
    pub(crate) fn emit(&mut self, a: NodeIdx, b: NodeIdx, c: NodeIdx) {
        self.stalled = 0;
        let (a, b, c) = (self.arena[a].vi, self.arena[b].vi, self.arena[c].vi);
        self.emitter.triangle(a, b, c);
    }
}

#[cfg(feature = "debugging")]
impl<'c, L: List<u32>> EarcutState<'c, L> {
    /// Writes the input rings, the triangles emitted so far and the ring at `ring` to a numbered svg file.
    pub(crate) fn output_svg(&mut self, name: &str, ring: NodeIdx, level: debug::svg::SvgOutputLevel) {
        let svg_context = match &self.svg_context {
            Some(svg_context) if svg_context.output_level >= level => svg_context,
            _ => return,
        };

        let mut svg = debug::svg::SvgOutput::new(svg_context);
        if let Err(err) = self.write_svg(&mut svg, ring) {
            log::warn!("cannot format svg '{}': {}", name, err);
            return;
        }

        let file_name = format!("{:03}_{}.svg", svg_context.step, name);
        if let Err(err) = svg.save(&file_name) {
            log::warn!("cannot write svg '{}': {}", file_name, err);
        }

        if let Some(svg_context) = &mut self.svg_context {
            svg_context.step += 1;
        }
    }

    fn write_svg(&self, svg: &mut debug::svg::SvgOutput<'_>, ring: NodeIdx) -> std::fmt::Result {
        use std::fmt::Write;
        use svg_fmt::*;

        let context = svg.context;

        for t in self.emitter.triangles() {
            let vs: Vec<[f32; 2]> = t.iter().map(|&vi| context.vertices[vi as usize]).collect();
            writeln!(svg, "{}",
                polygon(&vs)
                    .fill(Fill::Color(rgb(200, 230, 255)))
                    .stroke(Stroke::Color(blue(), context.percent(0.1)))
            )?;
        }

        for range in &context.rings {
            if range.len() > 2 {
                writeln!(svg, "{}",
                    polygon(&context.vertices[range.clone()])
                        .fill(Fill::None)
                        .stroke(Stroke::Color(rgb(255, 0, 255), context.percent(0.3)))
                )?;
            }
        }

        // Removed nodes keep their links, so only draw a ring which is still alive
        if self.arena.prev(ring) != ring && self.arena.next(self.arena.prev(ring)) == ring {
            for p in self.arena.iter_ring(ring) {
                let [x0, y0] = debug::svg::SvgContext::point(self.arena.c(p));
                let [x1, y1] = debug::svg::SvgContext::point(self.arena.c(self.arena.next(p)));
                writeln!(svg, "{}",
                    line_segment(x0, y0, x1, y1)
                        .color(green())
                        .width(context.percent(0.25))
                )?;
            }
        }

        for (vi, &[x, y]) in context.vertices.iter().enumerate() {
            writeln!(svg, "{}",
                debug::svg::circle(x, y, context.percent(0.5))
                    .fill(Fill::Color(black()))
            )?;
            if context.show_labels {
                writeln!(svg, "{}",
                    text(x, y, format!("{}", vi))
                        .color(black())
                        .align(Align::Right)
                        .size(context.percent(2.))
                )?;
            }
        }

        Ok(())
    }
}
