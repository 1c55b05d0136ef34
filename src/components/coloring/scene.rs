use std::collections::{BTreeMap, HashSet};

use log::{debug, info};

use super::config::{Geometry, VisConfig};
use super::error::VisError;
use super::instance::{InstanceReader, InstanceSource};
use super::layout;
use super::palette;
use super::types::{
	BACKGROUND, ButtonWidget, GridLabel, GridRow, GridSlot, GridView, INK, Point, Scene,
	SceneEdge, SceneNode, UNCOLORED,
};

/// Hour-long slot labels starting at 8AM, e.g. `"9AM - 10AM"`.
pub fn generate_time_slots(n: usize) -> Vec<String> {
	fn clock(hour: usize) -> String {
		let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
		let hour_12 = if hour % 12 == 0 { 12 } else { hour % 12 };
		format!("{}{}", hour_12, suffix)
	}
	(0..n)
		.map(|i| format!("{} - {}", clock(8 + i), clock(9 + i)))
		.collect()
}

impl Scene {
	/// Shows or hides the coloring on every node and grid slot.
	pub fn set_colored(&mut self, colored: bool) {
		for node in &mut self.nodes {
			node.color = if colored {
				node.assigned_color.clone()
			} else {
				UNCOLORED.into()
			};
		}
		if let Some(grid) = &mut self.grid {
			for slot in grid.slots_mut() {
				if colored {
					slot.color = slot.assigned_color.clone();
					slot.label_color = INK.into();
				} else {
					slot.color = UNCOLORED.into();
					slot.label_color = BACKGROUND.into();
				}
			}
		}
	}
}

/// Turns a solved instance into a [`Scene`].
pub struct SceneBuilder<'a> {
	config: &'a VisConfig,
}

impl<'a> SceneBuilder<'a> {
	pub fn new(config: &'a VisConfig) -> Self {
		Self { config }
	}

	pub fn build<S: InstanceSource>(&self, reader: &InstanceReader<S>) -> Result<Scene, VisError> {
		let (vertex_count, color_count) = (reader.vertex_count(), reader.color_count());
		let geometry = Geometry::new(self.config, vertex_count);

		let palette = palette::generate(color_count);
		let assignment = reader.color_assignment()?;
		let slots = slot_per_vertex(&assignment, vertex_count, color_count)?;
		let assigned_colors: Vec<String> = slots
			.iter()
			.map(|slot| slot.map_or_else(|| UNCOLORED.to_string(), |c| palette[c].clone()))
			.collect();

		let positions =
			layout::circular_positions(vertex_count, geometry.graph_radius, geometry.center);
		let nodes = create_nodes(&positions, &assigned_colors, &geometry);
		let edges = create_edges(&nodes, &reader.adjacency()?, &geometry, self.config.dedup_edges)?;

		let grid = self
			.config
			.show_grid
			.then(|| create_grid(&slots, &assigned_colors, color_count, &geometry));
		let buttons = self.create_buttons(&geometry);

		let mut scene = Scene {
			palette,
			nodes,
			edges,
			grid,
			buttons,
		};
		scene.set_colored(self.config.initially_colored);

		info!(
			"Built scene: {} nodes, {} edges, {} colors",
			scene.nodes.len(),
			scene.edges.len(),
			color_count
		);
		Ok(scene)
	}

	fn create_buttons(&self, geometry: &Geometry) -> Vec<ButtonWidget> {
		self.config
			.buttons
			.iter()
			.enumerate()
			.map(|(idx, button)| ButtonWidget {
				label: button.label.clone(),
				action: button.action,
				origin: Point::new(geometry.button_x(idx), geometry.button_y),
				width: geometry.button_width,
				height: geometry.button_height,
				font_size: geometry.button_width / 5.5,
			})
			.collect()
	}
}

fn slot_per_vertex(
	assignment: &BTreeMap<usize, usize>,
	vertex_count: usize,
	color_count: usize,
) -> Result<Vec<Option<usize>>, VisError> {
	(0..vertex_count)
		.map(|vertex| match assignment.get(&vertex) {
			Some(&color) if color >= color_count => Err(VisError::ColorSlotOutOfRange {
				vertex,
				color,
				color_count,
			}),
			slot => Ok(slot.copied()),
		})
		.collect()
}

fn create_nodes(positions: &[Point], colors: &[String], geometry: &Geometry) -> Vec<SceneNode> {
	positions
		.iter()
		.zip(colors)
		.enumerate()
		.map(|(idx, (&center, color))| SceneNode {
			vertex: idx,
			center,
			radius: geometry.node_radius,
			border_width: geometry.edge_width,
			label: idx.to_string(),
			assigned_color: color.clone(),
			color: UNCOLORED.into(),
		})
		.collect()
}

fn create_edges(
	nodes: &[SceneNode],
	adjacency: &BTreeMap<usize, Vec<usize>>,
	geometry: &Geometry,
	dedup: bool,
) -> Result<Vec<SceneEdge>, VisError> {
	let mut seen = HashSet::new();
	let mut edges = Vec::new();

	for (&from, neighbors) in adjacency {
		for &to in neighbors {
			let (Some(a), Some(b)) = (nodes.get(from), nodes.get(to)) else {
				return Err(VisError::DanglingEdgeReference {
					from,
					to,
					vertex_count: nodes.len(),
				});
			};
			if dedup && !seen.insert((from.min(to), from.max(to))) {
				continue;
			}
			edges.push(SceneEdge {
				from,
				to,
				start: a.center,
				end: b.center,
				width: geometry.edge_width,
				color: INK,
			});
		}
	}
	debug!("Created {} edges (dedup: {})", edges.len(), dedup);
	Ok(edges)
}

fn create_grid(
	slots: &[Option<usize>],
	colors: &[String],
	color_count: usize,
	geometry: &Geometry,
) -> GridView {
	let time_slots = generate_time_slots(color_count);
	let font_size = geometry.cell_height / 2.5;

	let rows = slots
		.iter()
		.zip(colors)
		.enumerate()
		.map(|(vertex, (slot, color))| GridRow {
			course: GridLabel {
				text: format!("Course #{}", vertex),
				font_size,
			},
			slot: GridSlot {
				vertex,
				label: slot.map(|c| time_slots[c].clone()).unwrap_or_default(),
				font_size,
				assigned_color: color.clone(),
				color: UNCOLORED.into(),
				label_color: BACKGROUND.into(),
			},
		})
		.collect();

	GridView {
		origin: geometry.grid_origin,
		cell_width: geometry.cell_width,
		cell_height: geometry.cell_height,
		rows,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::coloring::config::Schema;
	use crate::components::coloring::instance::Instance;
	use crate::components::coloring::testing::{four_cycle, triangle};

	fn build(instance: &Instance, config: &VisConfig) -> Result<Scene, VisError> {
		let schema = Schema::default();
		SceneBuilder::new(config).build(&InstanceReader::new(instance, &schema))
	}

	#[test]
	fn test_time_slots() {
		assert_eq!(
			generate_time_slots(3),
			vec!["8AM - 9AM", "9AM - 10AM", "10AM - 11AM"]
		);
		let slots = generate_time_slots(5);
		assert_eq!(slots[3], "11AM - 12PM");
		assert_eq!(slots[4], "12PM - 1PM");
		assert_eq!(generate_time_slots(17)[16], "12AM - 1AM");
		assert!(generate_time_slots(0).is_empty());
	}

	#[test]
	fn test_triangle_edges_not_deduplicated() {
		let scene = build(&triangle(), &VisConfig::default()).unwrap();
		assert_eq!(scene.nodes.len(), 3);
		assert_eq!(scene.edges.len(), 6);
	}

	#[test]
	fn test_triangle_edges_deduplicated() {
		let config = VisConfig {
			dedup_edges: true,
			..VisConfig::default()
		};
		let scene = build(&triangle(), &config).unwrap();
		assert_eq!(scene.edges.len(), 3);
	}

	#[test]
	fn test_four_cycle_scene() {
		let scene = build(&four_cycle(), &VisConfig::default()).unwrap();
		assert_eq!(scene.palette, vec!["#e61717", "#17e6e6"]);
		assert_eq!(scene.nodes.len(), 4);
		assert_eq!(scene.edges.len(), 4);

		let center = Point::new(250.0, 250.0);
		for node in &scene.nodes {
			assert!((node.center.distance(&center) - 200.0).abs() < 1e-9);
			assert_eq!(node.label, node.vertex.to_string());
		}
		assert!((scene.nodes[1].center.y - 450.0).abs() < 1e-9);

		let assigned: Vec<_> = scene.nodes.iter().map(|n| n.assigned_color.as_str()).collect();
		assert_eq!(assigned, vec!["#e61717", "#17e6e6", "#e61717", "#17e6e6"]);

		let grid = scene.grid.as_ref().unwrap();
		assert_eq!(grid.rows.len(), 4);
		let labels: Vec<_> = grid.rows.iter().map(|r| r.slot.label.as_str()).collect();
		assert_eq!(labels, vec!["8AM - 9AM", "9AM - 10AM", "8AM - 9AM", "9AM - 10AM"]);
		assert_eq!(grid.rows[2].course.text, "Course #2");
		assert_eq!(grid.cell_origin(1, 0).x, grid.origin.x + grid.cell_width);

		assert_eq!(scene.buttons.len(), 2);
		assert_eq!(scene.buttons[0].label, "COLOR");
	}

	#[test]
	fn test_initially_uncolored() {
		let scene = build(&four_cycle(), &VisConfig::default()).unwrap();
		assert!(scene.nodes.iter().all(|n| n.color == UNCOLORED));
		let grid = scene.grid.unwrap();
		assert!(grid.rows.iter().all(|r| r.slot.label_color == BACKGROUND));
	}

	#[test]
	fn test_initially_colored() {
		let config = VisConfig {
			initially_colored: true,
			..VisConfig::default()
		};
		let scene = build(&four_cycle(), &config).unwrap();
		assert!(scene.nodes.iter().all(|n| n.color == n.assigned_color));
		let grid = scene.grid.unwrap();
		assert!(grid.rows.iter().all(|r| r.slot.label_color == INK));
	}

	#[test]
	fn test_grid_disabled() {
		let config = VisConfig {
			show_grid: false,
			..VisConfig::default()
		};
		assert!(build(&four_cycle(), &config).unwrap().grid.is_none());
	}

	#[test]
	fn test_dangling_edge() {
		let instance = four_cycle().with_tuple("adjacent", &["Vertex3", "Vertex9"]);
		let err = build(&instance, &VisConfig::default()).unwrap_err();
		assert_eq!(
			err,
			VisError::DanglingEdgeReference {
				from: 3,
				to: 9,
				vertex_count: 4
			}
		);
	}

	#[test]
	fn test_color_out_of_range() {
		let instance = four_cycle()
			.with_atoms("Vertex", ["Vertex4"])
			.with_tuple("color", &["Coloring0", "Vertex4", "Color5"]);
		let err = build(&instance, &VisConfig::default()).unwrap_err();
		assert!(matches!(err, VisError::ColorSlotOutOfRange { vertex: 4, color: 5, .. }));
	}

	#[test]
	fn test_unassigned_vertex_stays_uncolored() {
		let instance = four_cycle().with_atoms("Vertex", ["Vertex4"]);
		let scene = build(&instance, &VisConfig::default()).unwrap();
		assert_eq!(scene.nodes[4].assigned_color, UNCOLORED);
		assert_eq!(scene.grid.unwrap().rows[4].slot.label, "");
	}

	#[test]
	fn test_empty_instance() {
		let scene = build(&Instance::new(), &VisConfig::default()).unwrap();
		assert!(scene.nodes.is_empty());
		assert!(scene.edges.is_empty());
		assert!(scene.palette.is_empty());
		assert!(scene.grid.unwrap().rows.is_empty());
	}
}
