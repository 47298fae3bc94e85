use std::f64::consts::PI;

/// Vertices of a star polygon centred on `(cx, cy)`.
///
/// Returns `2 * spikes` points alternating between the outer and inner
/// radius, starting straight up (canvas y grows downward) and winding
/// clockwise on screen.
pub fn star_vertices(cx: f64, cy: f64, outer: f64, inner: f64, spikes: u32) -> Vec<(f64, f64)> {
    let step = PI / f64::from(spikes);
    let mut angle = -PI / 2.0;
    let mut points = Vec::with_capacity(spikes as usize * 2);

    for i in 0..spikes * 2 {
        let radius = if i % 2 == 0 { outer } else { inner };
        let (sin, cos) = angle.sin_cos();
        points.push((cx + cos * radius, cy + sin * radius));
        angle += step;
    }

    points
}

/// Straight-line distance between two points
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_five_point_star_has_ten_vertices() {
        let pts = star_vertices(0.0, 0.0, 4.0, 1.6, 5);
        assert_eq!(pts.len(), 10);
    }

    #[test]
    fn test_first_vertex_points_up() {
        let pts = star_vertices(10.0, 20.0, 4.0, 1.6, 5);
        assert!(close(pts[0].0, 10.0));
        assert!(close(pts[0].1, 16.0));
    }

    #[test]
    fn test_radii_alternate() {
        let pts = star_vertices(3.0, -2.0, 5.0, 2.0, 5);
        for (i, p) in pts.iter().enumerate() {
            let r = distance(*p, (3.0, -2.0));
            let expected = if i % 2 == 0 { 5.0 } else { 2.0 };
            assert!(close(r, expected), "vertex {i} at radius {r}");
        }
    }

    #[test]
    fn test_second_vertex_is_rotated_by_step() {
        let pts = star_vertices(0.0, 0.0, 1.0, 1.0, 5);
        // -90deg + 36deg = -54deg
        let a = (-54.0_f64).to_radians();
        assert!(close(pts[1].0, a.cos()));
        assert!(close(pts[1].1, a.sin()));
    }

    #[test]
    fn test_distance() {
        assert!(close(distance((0.0, 0.0), (3.0, 4.0)), 5.0));
    }
}
