/// Paint command set and palette for the logo

use super::geometry::{LogoGeometry, Point};

/// Straight (non-premultiplied) 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 255)
    }
}

/// `#22C55E`
pub const GREEN_PRIMARY: Rgba = Rgba::opaque(0x22, 0xC5, 0x5E);
/// `#16A34A`. Part of the brand palette; the logo itself does not use it.
pub const GREEN_DARK: Rgba = Rgba::opaque(0x16, 0xA3, 0x4A);
/// `#FFFFFF`
pub const WHITE: Rgba = Rgba::opaque(0xFF, 0xFF, 0xFF);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillCircle {
        center: Point,
        radius: f64,
        rgba: Rgba,
    },
    FillPolygon {
        points: Vec<Point>,
        rgba: Rgba,
    },
    StrokePolyline {
        points: Vec<Point>,
        width: u32,
        rgba: Rgba,
    },
}

impl PaintCommand {
    pub fn rgba(&self) -> Rgba {
        match self {
            PaintCommand::FillCircle { rgba, .. }
            | PaintCommand::FillPolygon { rgba, .. }
            | PaintCommand::StrokePolyline { rgba, .. } => *rgba,
        }
    }
}

/// Lower the logo geometry to an ordered list of paint commands.
///
/// Order matters: later commands paint over earlier ones.
pub fn paint_commands(g: &LogoGeometry) -> Vec<PaintCommand> {
    let mut cmds = Vec::with_capacity(2 + 1 + 6 + 6);

    cmds.push(PaintCommand::FillCircle {
        center: g.disc_center(),
        radius: g.radius,
        rgba: GREEN_PRIMARY,
    });

    cmds.push(PaintCommand::FillPolygon {
        points: g.leaf.clone(),
        rgba: WHITE,
    });

    cmds.push(PaintCommand::StrokePolyline {
        points: vec![g.central_vein.from, g.central_vein.to],
        width: g.strokes.central_vein,
        rgba: GREEN_PRIMARY,
    });

    for (left, right) in &g.side_veins {
        for vein in [left, right] {
            cmds.push(PaintCommand::StrokePolyline {
                points: vec![vein.from, vein.to],
                width: g.strokes.side_vein,
                rgba: GREEN_PRIMARY,
            });
        }
    }

    for arrow in &g.arrows {
        cmds.push(PaintCommand::StrokePolyline {
            points: arrow.shaft.clone(),
            width: g.strokes.arrow,
            rgba: WHITE,
        });
        cmds.push(PaintCommand::FillPolygon {
            points: arrow.head.to_vec(),
            rgba: WHITE,
        });
    }

    cmds
}
