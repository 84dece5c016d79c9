//! Fillet arc construction at a polyline corner

use kurbo::{Point, Vec2};

/// A fillet arc tangent to both segments of a corner.
///
/// Angles are in degrees, measured from the positive x-axis in a y-down
/// screen frame. The arc starts at `start_angle` and spans `sweep_angle`
/// with increasing angle, which is a clockwise turn on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerFillet {
    /// Center of the fillet circle
    pub center: Point,
    /// Where the arc meets the segment toward the first point
    pub tangent_in: Point,
    /// Where the arc meets the segment toward the last point
    pub tangent_out: Point,
    /// Degrees from +x to the ray from the center to the start tangent point
    pub start_angle: f64,
    /// Angular extent in degrees, the complement of the corner angle
    pub sweep_angle: f64,
}

impl CornerFillet {
    /// Radius of the fillet circle.
    pub fn radius(&self) -> f64 {
        (self.tangent_in - self.center).hypot()
    }

    /// Point on the arc at parameter `t` in `[0, 1]`.
    ///
    /// `t = 0` lies at `start_angle`; `t = 1` at the end of the sweep. The
    /// two endpoints are the tangent points.
    pub fn arc_point(&self, t: f64) -> Point {
        let angle = (self.start_angle + t * self.sweep_angle).to_radians();
        self.center + Vec2::new(angle.cos(), angle.sin()) * self.radius()
    }
}

/// Construct the arc of `radius` rounding the corner `a`-`b`-`c`.
///
/// The radius is expected positive. Returns `None` for a degenerate corner:
/// `a` or `c` coincides with `b`, or the three points are collinear, leaving
/// no usable bisector to place the center on.
pub fn fillet_corner(a: Point, b: Point, c: Point, radius: f64) -> Option<CornerFillet> {
    let nba = (a - b).normalize();
    let nbc = (c - b).normalize();

    // Interior angle at b; the clamp keeps acos in domain under rounding.
    let theta = nba.dot(nbc).clamp(-1.0, 1.0).acos();
    let bisector = ((nba + nbc) / 2.0).normalize();

    let half = theta / 2.0;
    let center = b + bisector * (radius / half.sin());
    let tangent_in = b + nba * (radius / half.tan());
    let tangent_out = b + nbc * (radius / half.tan());

    // NaN from a zero-length normalize or a fully open corner propagates
    // into the center; a near-zero theta overflows it to infinity instead.
    if !center.x.is_finite() || !center.y.is_finite() {
        return None;
    }

    // The turn direction (y-down frame) picks which tangent point the arc
    // starts from, so that a positive sweep passes through both of them.
    let start_ref = if nba.cross(nbc) < 0.0 {
        tangent_in
    } else {
        tangent_out
    };
    let dir = start_ref - center;

    Some(CornerFillet {
        center,
        tangent_in,
        tangent_out,
        start_angle: dir.y.atan2(dir.x).to_degrees(),
        sweep_angle: 180.0 - theta.to_degrees(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RADIUS: f64 = 100.0;

    fn right_angle_corner() -> (Point, Point, Point) {
        (
            Point::new(100.0, 100.0),
            Point::new(400.0, 400.0),
            Point::new(700.0, 100.0),
        )
    }

    fn sample_corners() -> Vec<(Point, Point, Point)> {
        vec![
            right_angle_corner(),
            (
                Point::new(0.0, 0.0),
                Point::new(200.0, 50.0),
                Point::new(150.0, 300.0),
            ),
            (
                Point::new(-120.0, 40.0),
                Point::new(30.0, -80.0),
                Point::new(250.0, 90.0),
            ),
            (
                Point::new(500.0, 10.0),
                Point::new(100.0, 20.0),
                Point::new(480.0, 300.0),
            ),
        ]
    }

    fn interior_angle(a: Point, b: Point, c: Point) -> f64 {
        (a - b)
            .normalize()
            .dot((c - b).normalize())
            .clamp(-1.0, 1.0)
            .acos()
    }

    #[test]
    fn right_angle_construction() {
        let (a, b, c) = right_angle_corner();
        let f = fillet_corner(a, b, c, RADIUS).expect("corner is not degenerate");

        // 45 degree half-angle: tangents 100 from b, center 100*sqrt(2).
        assert_relative_eq!((f.tangent_in - b).hypot(), 100.0, epsilon = 1e-9);
        assert_relative_eq!((f.tangent_out - b).hypot(), 100.0, epsilon = 1e-9);
        assert_relative_eq!((f.center - b).hypot(), 100.0 * 2f64.sqrt(), epsilon = 1e-9);

        // Bisector runs straight up the screen from b.
        assert_relative_eq!(f.center.x, 400.0, epsilon = 1e-9);
        assert!(f.center.y < b.y);

        assert_relative_eq!(f.sweep_angle, 90.0, epsilon = 1e-9);
        assert_relative_eq!(f.start_angle, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn tangent_setback_matches_radius_over_tan() {
        for (a, b, c) in sample_corners() {
            let f = fillet_corner(a, b, c, 40.0).expect("corner is not degenerate");
            let setback = 40.0 / (interior_angle(a, b, c) / 2.0).tan();
            assert_relative_eq!((f.tangent_in - b).hypot(), setback, epsilon = 1e-6);
            assert_relative_eq!((f.tangent_out - b).hypot(), setback, epsilon = 1e-6);
        }
    }

    #[test]
    fn tangent_points_lie_on_fillet_circle() {
        for (a, b, c) in sample_corners() {
            let f = fillet_corner(a, b, c, 40.0).expect("corner is not degenerate");
            assert_relative_eq!((f.tangent_in - f.center).hypot(), 40.0, epsilon = 1e-6);
            assert_relative_eq!((f.tangent_out - f.center).hypot(), 40.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn radii_are_perpendicular_to_segments() {
        for (a, b, c) in sample_corners() {
            let f = fillet_corner(a, b, c, 40.0).expect("corner is not degenerate");
            let in_dot = (f.tangent_in - f.center).dot((a - b).normalize());
            let out_dot = (f.tangent_out - f.center).dot((c - b).normalize());
            assert_relative_eq!(in_dot, 0.0, epsilon = 1e-6);
            assert_relative_eq!(out_dot, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn sweep_complements_interior_angle() {
        for (a, b, c) in sample_corners() {
            let f = fillet_corner(a, b, c, 40.0).expect("corner is not degenerate");
            let theta_deg = interior_angle(a, b, c).to_degrees();
            assert_relative_eq!(f.sweep_angle + theta_deg, 180.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn arc_endpoints_are_the_tangent_points() {
        for (a, b, c) in sample_corners() {
            let f = fillet_corner(a, b, c, 40.0).expect("corner is not degenerate");
            let start = f.arc_point(0.0);
            let end = f.arc_point(1.0);

            let forward = (start - f.tangent_out).hypot() < 1e-6
                && (end - f.tangent_in).hypot() < 1e-6;
            let backward = (start - f.tangent_in).hypot() < 1e-6
                && (end - f.tangent_out).hypot() < 1e-6;
            assert!(
                forward || backward,
                "arc endpoints {start:?}/{end:?} miss the tangent points"
            );
        }
    }

    #[test]
    fn swapping_endpoints_mirrors_the_construction() {
        for (a, b, c) in sample_corners() {
            let f = fillet_corner(a, b, c, 40.0).expect("corner is not degenerate");
            let g = fillet_corner(c, b, a, 40.0).expect("corner is not degenerate");

            assert_relative_eq!(f.center.x, g.center.x, epsilon = 1e-6);
            assert_relative_eq!(f.center.y, g.center.y, epsilon = 1e-6);
            assert_relative_eq!(f.tangent_in.x, g.tangent_out.x, epsilon = 1e-6);
            assert_relative_eq!(f.tangent_in.y, g.tangent_out.y, epsilon = 1e-6);
            assert_relative_eq!(f.tangent_out.x, g.tangent_in.x, epsilon = 1e-6);
            assert_relative_eq!(f.tangent_out.y, g.tangent_in.y, epsilon = 1e-6);
            assert_relative_eq!(f.sweep_angle, g.sweep_angle, epsilon = 1e-6);
        }
    }

    #[test]
    fn collinear_corner_is_degenerate() {
        let f = fillet_corner(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(200.0, 0.0),
            RADIUS,
        );
        assert!(f.is_none());
    }

    #[test]
    fn folded_back_corner_is_degenerate() {
        // a and c on the same ray out of b: interior angle zero.
        let f = fillet_corner(
            Point::new(300.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(500.0, 0.0),
            RADIUS,
        );
        assert!(f.is_none());
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let b = Point::new(400.0, 400.0);
        assert!(fillet_corner(b, b, Point::new(700.0, 100.0), RADIUS).is_none());
        assert!(fillet_corner(Point::new(100.0, 100.0), b, b, RADIUS).is_none());
    }
}
