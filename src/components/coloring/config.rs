use serde::Deserialize;

use super::types::Point;

/// Names of the signatures and fields the instance is queried with.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Schema {
	pub vertex: String,
	pub color: String,
	pub coloring: String,
	pub color_field: String,
	pub adjacency_field: String,
}

impl Default for Schema {
	fn default() -> Self {
		Self {
			vertex: "Vertex".into(),
			color: "Color".into(),
			coloring: "Coloring".into(),
			color_field: "color".into(),
			adjacency_field: "adjacent".into(),
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum ButtonAction {
	ToggleColoring,
	ToggleView,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ButtonConfig {
	pub label: String,
	pub action: ButtonAction,
}

impl ButtonConfig {
	pub fn new(label: &str, action: ButtonAction) -> Self {
		Self {
			label: label.into(),
			action,
		}
	}
}

/// Top-level settings for a visualization.
///
/// The graph occupies the top `graph_width` x `graph_height` area of the
/// screen; buttons share the strip below it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisConfig {
	pub screen_width: f64,
	pub screen_height: f64,
	pub graph_width: f64,
	pub graph_height: f64,
	/// Start with the coloring applied instead of plain white nodes.
	pub initially_colored: bool,
	/// Draw one edge per undirected pair even if both directions are declared.
	pub dedup_edges: bool,
	pub show_grid: bool,
	pub buttons: Vec<ButtonConfig>,
	pub schema: Schema,
}

impl Default for VisConfig {
	fn default() -> Self {
		Self {
			screen_width: 500.0,
			screen_height: 600.0,
			graph_width: 500.0,
			graph_height: 500.0,
			initially_colored: false,
			dedup_edges: false,
			show_grid: true,
			buttons: vec![
				ButtonConfig::new("COLOR", ButtonAction::ToggleColoring),
				ButtonConfig::new("CONVERT", ButtonAction::ToggleView),
			],
			schema: Schema::default(),
		}
	}
}

/// Sizes derived once from a [`VisConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
	pub center: Point,
	pub node_radius: f64,
	pub edge_width: f64,
	pub graph_radius: f64,
	pub grid_origin: Point,
	pub cell_width: f64,
	pub cell_height: f64,
	pub button_width: f64,
	pub button_height: f64,
	pub button_spacing: f64,
	pub button_y: f64,
}

impl Geometry {
	pub fn new(config: &VisConfig, rows: usize) -> Self {
		let (gw, gh) = (config.graph_width, config.graph_height);
		let average = (gw + gh) / 2.0;
		let node_radius = 0.05 * average;
		let buttons = config.buttons.len().max(1) as f64;

		Self {
			center: Point::new(gw / 2.0, gh / 2.0),
			node_radius,
			edge_width: 0.01 * average,
			graph_radius: 0.9 * (average / 2.0) - node_radius,
			grid_origin: Point::new(gw * 0.05, gh * 0.05),
			cell_width: gw * 0.9 / 2.0,
			cell_height: gh * 0.9 / rows.max(1) as f64,
			button_width: config.screen_width / buttons * 0.9,
			button_height: (config.screen_height - gh) * 0.7,
			button_spacing: config.screen_width / (buttons + 1.0) * 0.1,
			button_y: gh,
		}
	}

	/// Left edge of the `idx`-th button in the row.
	pub fn button_x(&self, idx: usize) -> f64 {
		self.button_spacing + idx as f64 * (self.button_width + self.button_spacing)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_geometry() {
		let geometry = Geometry::new(&VisConfig::default(), 4);
		assert_eq!(geometry.center, Point::new(250.0, 250.0));
		assert!((geometry.node_radius - 25.0).abs() < 1e-9);
		assert!((geometry.edge_width - 5.0).abs() < 1e-9);
		assert!((geometry.graph_radius - 200.0).abs() < 1e-9);
		assert!((geometry.cell_width - 225.0).abs() < 1e-9);
		assert!((geometry.cell_height - 112.5).abs() < 1e-9);
		assert!((geometry.button_height - 70.0).abs() < 1e-9);
		assert!((geometry.button_y - 500.0).abs() < 1e-9);
	}

	#[test]
	fn test_buttons_evenly_spaced() {
		let geometry = Geometry::new(&VisConfig::default(), 1);
		let gap = geometry.button_x(1) - geometry.button_x(0);
		assert!((gap - (geometry.button_width + geometry.button_spacing)).abs() < 1e-9);
		assert!(geometry.button_x(1) + geometry.button_width < 500.0);
	}

	#[test]
	fn test_zero_rows_clamped() {
		let geometry = Geometry::new(&VisConfig::default(), 0);
		assert!(geometry.cell_height.is_finite());
	}

	#[test]
	fn test_config_from_json_uses_defaults() {
		let config: VisConfig =
			serde_json::from_str(r#"{"initially_colored": true, "dedup_edges": true}"#).unwrap();
		assert!(config.initially_colored);
		assert!(config.dedup_edges);
		assert_eq!(config.buttons.len(), 2);
		assert_eq!(config.schema.vertex, "Vertex");
	}
}
