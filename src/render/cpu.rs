use std::{cell::RefCell, rc::Rc};

use crate::{
    foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Viewport},
    foundation::error::{GargantaError, GargantaResult},
    host::{PortalCanvas, VoidStyle},
    render::{blur::glow_blur_premul, composite, frame::FrameRGBA},
};

#[derive(Clone, Debug)]
enum CanvasOp {
    Void {
        path: BezPath,
        transform: Affine,
        style: VoidStyle,
    },
    Spark {
        rect: Rect,
        color: Rgba8,
        alpha: f32,
    },
}

struct Surface {
    width: u16,
    height: u16,
    ops: Vec<CanvasOp>,
    frame: FrameRGBA,
    presented: u64,
    interactive: bool,
}

impl Surface {
    fn new(viewport: Viewport) -> GargantaResult<Self> {
        let (width, height) = viewport.to_u16()?;
        Ok(Self {
            width,
            height,
            ops: Vec::new(),
            frame: FrameRGBA::transparent(u32::from(width), u32::from(height)),
            presented: 0,
            interactive: false,
        })
    }

    fn rasterize(&self) -> GargantaResult<Vec<u8>> {
        let (w, h) = (u32::from(self.width), u32::from(self.height));
        let mut base = vec![0u8; (w as usize) * (h as usize) * 4];

        for op in &self.ops {
            if let CanvasOp::Void {
                path,
                transform,
                style,
            } = op
            {
                if style.glow_blur > 0.0 && style.glow.a > 0 {
                    let halo = self.fill_pass(path, *transform, style.glow);
                    let halo = glow_blur_premul(&halo, w, h, style.glow_blur)?;
                    composite::over_in_place(&mut base, &halo)?;
                }
                let body = self.fill_pass(path, *transform, style.fill);
                composite::over_in_place(&mut base, &body)?;
            }
        }

        let sparks: Vec<(Rect, Rgba8)> = self
            .ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Spark { rect, color, alpha } => {
                    Some((*rect, color.with_alpha_scaled(*alpha)))
                }
                CanvasOp::Void { .. } => None,
            })
            .filter(|(_, c)| c.a > 0)
            .collect();
        if !sparks.is_empty() {
            let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            for (rect, c) in &sparks {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
                ctx.fill_rect(&rect_to_cpu(*rect));
            }
            let layer = self.finish(&mut ctx);
            composite::add_in_place(&mut base, &layer)?;
        }

        Ok(base)
    }

    fn fill_pass(&self, path: &BezPath, transform: Affine, color: Rgba8) -> Vec<u8> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_transform(affine_to_cpu(transform));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        ctx.fill_path(&bezpath_to_cpu(path));
        self.finish(&mut ctx)
    }

    fn finish(&self, ctx: &mut vello_cpu::RenderContext) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

/// Software [`PortalCanvas`] rasterizing with `vello_cpu`.
///
/// Clones share one surface, so a caller can keep a handle for readback after boxing the
/// canvas into [`HostLayers`](crate::host::HostLayers).
#[derive(Clone)]
pub struct CpuCanvas {
    surface: Rc<RefCell<Surface>>,
}

impl CpuCanvas {
    /// Fails for an empty viewport or one larger than the rasterizer supports.
    pub fn new(viewport: Viewport) -> GargantaResult<Self> {
        Ok(Self {
            surface: Rc::new(RefCell::new(Surface::new(viewport)?)),
        })
    }

    /// Last presented frame (premultiplied).
    pub fn frame(&self) -> FrameRGBA {
        self.surface.borrow().frame.clone()
    }

    pub fn presented(&self) -> u64 {
        self.surface.borrow().presented
    }

    pub fn is_interactive(&self) -> bool {
        self.surface.borrow().interactive
    }
}

impl std::fmt::Debug for CpuCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.surface.borrow();
        f.debug_struct("CpuCanvas")
            .field("width", &s.width)
            .field("height", &s.height)
            .field("pending_ops", &s.ops.len())
            .field("presented", &s.presented)
            .finish()
    }
}

impl PortalCanvas for CpuCanvas {
    fn resize(&mut self, viewport: Viewport) -> GargantaResult<()> {
        let mut s = self.surface.borrow_mut();
        let interactive = s.interactive;
        let presented = s.presented;
        *s = Surface::new(viewport)?;
        s.interactive = interactive;
        s.presented = presented;
        Ok(())
    }

    fn clear(&mut self) {
        let mut s = self.surface.borrow_mut();
        s.ops.clear();
        s.frame.data.fill(0);
    }

    fn fill_void(&mut self, path: &BezPath, transform: Affine, style: &VoidStyle) {
        self.surface.borrow_mut().ops.push(CanvasOp::Void {
            path: path.clone(),
            transform,
            style: *style,
        });
    }

    fn fill_spark(&mut self, rect: Rect, color: Rgba8, alpha: f32) {
        self.surface
            .borrow_mut()
            .ops
            .push(CanvasOp::Spark { rect, color, alpha });
    }

    fn present(&mut self) -> GargantaResult<()> {
        let mut s = self.surface.borrow_mut();
        let data = s.rasterize()?;
        if data.len() != s.frame.data.len() {
            return Err(GargantaError::render("rasterized frame size mismatch"));
        }
        s.frame.data = data;
        s.ops.clear();
        s.presented += 1;
        Ok(())
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.surface.borrow_mut().interactive = interactive;
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
