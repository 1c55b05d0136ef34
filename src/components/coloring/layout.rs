use std::f64::consts::PI;

use super::types::Point;

/// Positions of `n` entities evenly spaced on a circle.
///
/// Index 0 sits at angle 0 (to the right of `center`); angles grow towards
/// positive y, which is clockwise on screen.
pub fn circular_positions(n: usize, radius: f64, center: Point) -> Vec<Point> {
	(0..n)
		.map(|i| {
			let angle = 2.0 * PI * i as f64 / n as f64;
			Point::new(
				center.x + radius * angle.cos(),
				center.y + radius * angle.sin(),
			)
		})
		.collect()
}
