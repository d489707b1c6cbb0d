/// Rasterizer: executes paint commands on a tiny-skia canvas

use image::RgbaImage;
use log::{debug, trace};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::{LogoGeometry, Point};
use super::paint::{paint_commands, PaintCommand, Rgba};
use crate::{Error, Result};

/// Render the logo onto a fresh transparent `size × size` canvas.
pub fn render(size: u32) -> Result<RgbaImage> {
    if size == 0 {
        return Err(Error::InvalidSize {
            size,
            reason: "canvas must be at least 1px",
        });
    }

    let geometry = LogoGeometry::new(size);
    debug!(
        "rendering logo at {}px (radius {}, {} leaf vertices)",
        size,
        geometry.radius,
        geometry.leaf.len()
    );

    let pixmap = rasterize(size, &paint_commands(&geometry))?;
    to_rgba_image(&pixmap)
}

/// Execute `cmds` in order on a transparent canvas.
///
/// Commands whose path degenerates at this size (zero radius, collapsed
/// polygon) are skipped.
pub fn rasterize(size: u32, cmds: &[PaintCommand]) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| Error::Raster(format!("cannot allocate a {size}x{size} canvas")))?;

    for cmd in cmds {
        let mut paint = Paint::default();
        let Rgba(r, g, b, a) = cmd.rgba();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        match cmd {
            PaintCommand::FillCircle { center, radius, .. } => {
                match PathBuilder::from_circle(center.x as f32, center.y as f32, *radius as f32) {
                    Some(path) => pixmap.fill_path(
                        &path,
                        &paint,
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    ),
                    None => trace!("skipping degenerate circle r={}", radius),
                }
            }
            PaintCommand::FillPolygon { points, .. } => match build_path(points, true) {
                Some(path) => pixmap.fill_path(
                    &path,
                    &paint,
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                ),
                None => trace!("skipping degenerate polygon ({} points)", points.len()),
            },
            PaintCommand::StrokePolyline { points, width, .. } => {
                match build_path(points, false) {
                    Some(path) => {
                        let stroke = Stroke {
                            width: *width as f32,
                            line_cap: LineCap::Butt,
                            line_join: LineJoin::Round,
                            ..Stroke::default()
                        };
                        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                    }
                    None => trace!("skipping degenerate polyline ({} points)", points.len()),
                }
            }
        }
    }

    Ok(pixmap)
}

fn build_path(points: &[Point], close: bool) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

/// Copy a premultiplied tiny-skia canvas into a straight-alpha `RgbaImage`.
pub fn to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| Error::Raster("canvas buffer does not match its dimensions".into()))
}
