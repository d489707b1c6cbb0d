//! Parametric geometry of the logo
//!
//! Everything here is pure math over `f64`: no pixels are touched. All
//! coordinates derive from `center` and `radius`, which in turn derive from
//! the canvas size, so the design scales uniformly.

use std::f64::consts::PI;

/// Samples per leaf side; each side contributes `LEAF_STEPS + 1` vertices.
pub const LEAF_STEPS: usize = 50;

/// Points sampled along each recycle arrow shaft.
pub const ARROW_SAMPLES: usize = 20;

/// Base angles of the three arrows, in degrees.
pub const ARROW_ANGLES_DEG: [f64; 3] = [0.0, 120.0, 240.0];

/// Distance from the arrow tip to its trailing corners, in output pixels.
///
/// Not scaled by the canvas size.
pub const ARROWHEAD_LENGTH: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point by `degrees` about `pivot` (y axis points down, so
    /// positive angles turn clockwise on screen).
    pub fn rotated_about(self, pivot: Point, degrees: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// One curved recycle arrow: a shaft polyline capped by a triangular head.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    /// Base angle in degrees.
    pub base_angle: f64,
    pub shaft: Vec<Point>,
    /// Tip followed by the two trailing corners.
    pub head: [Point; 3],
}

/// Stroke widths in pixels, derived from the canvas size with integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeWidths {
    pub central_vein: u32,
    pub side_vein: u32,
    pub arrow: u32,
}

impl StrokeWidths {
    pub fn for_size(size: u32) -> Self {
        Self {
            central_vein: (size / 100).max(3),
            side_vein: (size / 150).max(2),
            arrow: (size / 80).max(4),
        }
    }
}

/// The complete vector description of the logo at one canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoGeometry {
    pub size: u32,
    pub center: f64,
    pub radius: f64,
    pub leaf_center: Point,
    pub leaf_width: f64,
    pub leaf_height: f64,
    /// Closed outline: left side for `t = 0..=1`, then right side for `t = 1..=0`.
    pub leaf: Vec<Point>,
    pub central_vein: Segment,
    /// Left/right pairs, innermost first.
    pub side_veins: Vec<(Segment, Segment)>,
    pub recycle_center: Point,
    pub arrow_radius: f64,
    pub arrows: Vec<Arrow>,
    pub strokes: StrokeWidths,
}

impl LogoGeometry {
    /// Compute the logo for a `size × size` canvas.
    ///
    /// `center` uses integer halving and `radius` is truncated to whole
    /// pixels, which keeps the disc aligned to the pixel grid.
    pub fn new(size: u32) -> Self {
        let center = f64::from(size / 2);
        let radius = (f64::from(size) * 0.45).floor();

        let leaf_center = Point::new(center, center - radius * 0.2);
        let leaf_width = radius * 0.6;
        let leaf_height = radius * 0.8;

        let leaf = leaf_outline(leaf_center, leaf_width, leaf_height);

        let central_vein = Segment {
            from: Point::new(leaf_center.x, leaf_center.y + leaf_height * 0.4),
            to: Point::new(leaf_center.x, leaf_center.y - leaf_height * 0.8),
        };

        let side_veins = (1..=3)
            .map(|k| {
                let offset = f64::from(k) * leaf_height * 0.2;
                let root = Point::new(leaf_center.x, leaf_center.y - offset);
                let tip_y = leaf_center.y - offset - leaf_height * 0.1;
                (
                    Segment {
                        from: root,
                        to: Point::new(leaf_center.x - leaf_width * 0.3, tip_y),
                    },
                    Segment {
                        from: root,
                        to: Point::new(leaf_center.x + leaf_width * 0.3, tip_y),
                    },
                )
            })
            .collect();

        let recycle_center = Point::new(center, center + radius * 0.4);
        let arrow_radius = radius * 0.25;
        let arrows = ARROW_ANGLES_DEG
            .iter()
            .map(|&angle| arrow(recycle_center, arrow_radius, angle))
            .collect();

        Self {
            size,
            center,
            radius,
            leaf_center,
            leaf_width,
            leaf_height,
            leaf,
            central_vein,
            side_veins,
            recycle_center,
            arrow_radius,
            arrows,
            strokes: StrokeWidths::for_size(size),
        }
    }

    pub fn disc_center(&self) -> Point {
        Point::new(self.center, self.center)
    }

    /// Left half of the leaf outline, ordered by ascending `t`.
    pub fn leaf_left(&self) -> &[Point] {
        &self.leaf[..=LEAF_STEPS]
    }

    /// Right half of the leaf outline, ordered by descending `t`.
    pub fn leaf_right(&self) -> &[Point] {
        &self.leaf[LEAF_STEPS + 1..]
    }
}

fn leaf_outline(leaf_center: Point, width: f64, height: f64) -> Vec<Point> {
    let side = |t: f64, dir: f64| {
        let x = leaf_center.x + dir * width * (1.0 - t) * (t * PI).sin();
        let y = leaf_center.y - height * t + height * 0.3 * (t * 2.0 * PI).sin();
        Point::new(x, y)
    };

    let mut points = Vec::with_capacity(2 * (LEAF_STEPS + 1));
    for i in 0..=LEAF_STEPS {
        points.push(side(i as f64 / LEAF_STEPS as f64, -1.0));
    }
    for i in (0..=LEAF_STEPS).rev() {
        points.push(side(i as f64 / LEAF_STEPS as f64, 1.0));
    }
    points
}

fn arrow(pivot: Point, arrow_radius: f64, base_angle: f64) -> Arrow {
    let base = base_angle.to_radians();
    let sweep = PI / 3.0;
    let last = (ARROW_SAMPLES - 1) as f64;

    let shaft = (0..ARROW_SAMPLES)
        .map(|i| {
            let t = i as f64 / last;
            let angle = base + t * sweep;
            let r = arrow_radius * 0.8 * (1.0 - t * 0.3);
            Point::new(pivot.x + r * angle.cos(), pivot.y + r * angle.sin())
        })
        .collect();

    let tip_angle = base + sweep;
    let tip = Point::new(
        pivot.x + arrow_radius * 0.6 * tip_angle.cos(),
        pivot.y + arrow_radius * 0.6 * tip_angle.sin(),
    );
    let corner = |delta: f64| {
        let a = tip_angle + delta;
        Point::new(
            tip.x - ARROWHEAD_LENGTH * a.cos(),
            tip.y - ARROWHEAD_LENGTH * a.sin(),
        )
    };

    Arrow {
        base_angle,
        shaft,
        head: [tip, corner(-PI / 6.0), corner(PI / 6.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-6
    }

    #[test]
    fn base_values_follow_integer_semantics() {
        let g = LogoGeometry::new(1024);
        assert_eq!(g.center, 512.0);
        assert_eq!(g.radius, 460.0);

        let g = LogoGeometry::new(15);
        assert_eq!(g.center, 7.0);
        assert_eq!(g.radius, 6.0);
    }

    #[test]
    fn leaf_has_two_sides_of_51_vertices() {
        let g = LogoGeometry::new(512);
        assert_eq!(g.leaf.len(), 102);
        assert_eq!(g.leaf_left().len(), LEAF_STEPS + 1);
        assert_eq!(g.leaf_right().len(), LEAF_STEPS + 1);
    }

    #[test]
    fn leaf_endpoints_sit_on_the_axis() {
        let g = LogoGeometry::new(512);
        // t = 0 and t = 1 both have zero horizontal extent
        assert!((g.leaf[0].x - g.center).abs() < EPS);
        assert!((g.leaf[LEAF_STEPS].x - g.center).abs() < EPS);
        assert!((g.leaf[0].y - g.leaf_center.y).abs() < EPS);
        assert!((g.leaf[LEAF_STEPS].y - (g.leaf_center.y - g.leaf_height)).abs() < 1e-6);
    }

    #[test]
    fn leaf_is_mirror_symmetric() {
        let g = LogoGeometry::new(777);
        let right: Vec<Point> = g.leaf_right().iter().rev().copied().collect();
        for (l, r) in g.leaf_left().iter().zip(&right) {
            assert!(((l.x - g.center) + (r.x - g.center)).abs() < 1e-9);
            assert!((l.y - r.y).abs() < 1e-9);
            assert!(l.x <= g.center + EPS);
        }
    }

    #[test]
    fn stroke_widths_have_floors() {
        assert_eq!(
            StrokeWidths::for_size(64),
            StrokeWidths {
                central_vein: 3,
                side_vein: 2,
                arrow: 4
            }
        );
        assert_eq!(
            StrokeWidths::for_size(1024),
            StrokeWidths {
                central_vein: 10,
                side_vein: 6,
                arrow: 12
            }
        );
    }

    #[test]
    fn central_vein_is_vertical() {
        let g = LogoGeometry::new(1024);
        assert_eq!(g.central_vein.from.x, g.central_vein.to.x);
        let len = g.central_vein.from.distance(g.central_vein.to);
        assert!((len - 1.2 * g.leaf_height).abs() < 1e-9);
    }

    #[test]
    fn side_veins_are_mirrored_pairs() {
        let g = LogoGeometry::new(1024);
        assert_eq!(g.side_veins.len(), 3);
        for (k, (left, right)) in g.side_veins.iter().enumerate() {
            let offset = (k + 1) as f64 * 0.2 * g.leaf_height;
            assert_eq!(left.from, right.from);
            assert!((left.from.y - (g.leaf_center.y - offset)).abs() < EPS);
            assert!((left.to.x - g.center + 0.3 * g.leaf_width).abs() < EPS);
            assert!((right.to.x - g.center - 0.3 * g.leaf_width).abs() < EPS);
            assert_eq!(left.to.y, right.to.y);
        }
    }

    #[test]
    fn arrow_shaft_spirals_inward() {
        let g = LogoGeometry::new(1024);
        let a = &g.arrows[0];
        assert_eq!(a.shaft.len(), ARROW_SAMPLES);
        let first = a.shaft[0].distance(g.recycle_center);
        let last = a.shaft[ARROW_SAMPLES - 1].distance(g.recycle_center);
        assert!((first - 0.8 * g.arrow_radius).abs() < 1e-9);
        assert!((last - 0.56 * g.arrow_radius).abs() < 1e-9);
    }

    #[test]
    fn arrowhead_corners_use_fixed_pixel_offset() {
        for size in [64, 1024] {
            let g = LogoGeometry::new(size);
            let [tip, a, b] = g.arrows[1].head;
            assert!((tip.distance(a) - ARROWHEAD_LENGTH).abs() < 1e-9);
            assert!((tip.distance(b) - ARROWHEAD_LENGTH).abs() < 1e-9);
            assert!((tip.distance(g.recycle_center) - 0.6 * g.arrow_radius).abs() < 1e-9);
        }
    }

    #[test]
    fn arrows_are_rotations_of_the_first() {
        let g = LogoGeometry::new(1024);
        let first = &g.arrows[0];
        for (i, other) in g.arrows.iter().enumerate() {
            let deg = 120.0 * i as f64;
            for (p, q) in first.shaft.iter().zip(&other.shaft) {
                assert!(close(p.rotated_about(g.recycle_center, deg), *q));
            }
            for (p, q) in first.head.iter().zip(&other.head) {
                assert!(close(p.rotated_about(g.recycle_center, deg), *q));
            }
        }
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let p = Point::new(2.0, 1.0).rotated_about(Point::new(1.0, 1.0), 90.0);
        assert!(close(p, Point::new(1.0, 2.0)));
    }
}
