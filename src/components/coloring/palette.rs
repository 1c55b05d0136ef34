//! Evenly spaced display colors, one per color slot.

const SATURATION: f64 = 0.9;
const VALUE: f64 = 0.9;

/// Hue in degrees of the `idx`-th of `n` colors.
pub fn hue(idx: usize, n: usize) -> f64 {
	(360.0 * idx as f64 / n as f64) % 360.0
}

/// Converts an HSV color to a `#rrggbb` string.
pub fn hsv_to_hex(h: f64, s: f64, v: f64) -> String {
	let channel = |n: f64| {
		let k = (n + h / 60.0) % 6.0;
		let f = v - v * s * k.min(4.0 - k).min(1.0).max(0.0);
		(f * 255.0).round() as u8
	};
	format!("#{:02x}{:02x}{:02x}", channel(5.0), channel(3.0), channel(1.0))
}

/// `n` colors spread around the color wheel, starting at red.
pub fn generate(n: usize) -> Vec<String> {
	(0..n)
		.map(|i| hsv_to_hex(hue(i, n), SATURATION, VALUE))
		.collect()
}
