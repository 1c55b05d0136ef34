use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::stage::SceneItem;
use super::state::Visualization;
use super::types::{
	BACKGROUND, BUTTON_FILL, ButtonWidget, GridView, INK, Point, SceneEdge, SceneNode,
};

/// Drawing primitives the scene is rendered through.
pub trait Surface {
	fn clear(&self, width: f64, height: f64, color: &str);
	fn line(&self, start: Point, end: Point, width: f64, color: &str);
	fn circle(&self, center: Point, radius: f64, fill: &str, border: &str, border_width: f64);
	fn rect(&self, origin: Point, width: f64, height: f64, fill: &str, border: Option<&str>);
	/// Text centered on `at`.
	fn text(&self, text: &str, at: Point, size: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64, color: &str) {
		self.set_fill_style_str(color);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn line(&self, start: Point, end: Point, width: f64, color: &str) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(start.x, start.y);
		self.line_to(end.x, end.y);
		self.stroke();
	}

	fn circle(&self, center: Point, radius: f64, fill: &str, border: &str, border_width: f64) {
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
		self.set_stroke_style_str(border);
		self.set_line_width(border_width);
		self.stroke();
	}

	fn rect(&self, origin: Point, width: f64, height: f64, fill: &str, border: Option<&str>) {
		self.set_fill_style_str(fill);
		self.fill_rect(origin.x, origin.y, width, height);
		if let Some(border) = border {
			self.set_stroke_style_str(border);
			self.set_line_width(1.0);
			self.stroke_rect(origin.x, origin.y, width, height);
		}
	}

	fn text(&self, text: &str, at: Point, size: f64, color: &str) {
		self.set_fill_style_str(color);
		self.set_font(&format!("{}px sans-serif", size));
		self.set_text_align("center");
		self.set_text_baseline("middle");
		let _ = self.fill_text(text, at.x, at.y);
	}
}

/// Redraws every staged item.
pub fn render<S: Surface>(vis: &Visualization, surface: &S) {
	surface.clear(vis.width, vis.height, BACKGROUND);
	if vis.stage.is_empty() {
		return;
	}
	let scene = &vis.scene;

	for item in vis.stage.items() {
		match item {
			SceneItem::Edge(idx) => {
				if let Some(edge) = scene.edges.get(idx) {
					draw_edge(edge, surface);
				}
			}
			SceneItem::Node(idx) => {
				if let Some(node) = scene.nodes.get(idx) {
					draw_node(node, surface);
				}
			}
			SceneItem::Grid => {
				if let Some(grid) = &scene.grid {
					draw_grid(grid, surface);
				}
			}
			SceneItem::Button(idx) => {
				if let Some(button) = scene.buttons.get(idx) {
					draw_button(button, surface);
				}
			}
		}
	}
}

fn draw_edge<S: Surface>(edge: &SceneEdge, surface: &S) {
	surface.line(edge.start, edge.end, edge.width, edge.color);
}

fn draw_node<S: Surface>(node: &SceneNode, surface: &S) {
	surface.circle(node.center, node.radius, &node.color, INK, node.border_width);
	surface.text(&node.label, node.center, node.radius, INK);
}

fn draw_grid<S: Surface>(grid: &GridView, surface: &S) {
	let (w, h) = (grid.cell_width, grid.cell_height);
	let middle = |origin: Point| Point::new(origin.x + w / 2.0, origin.y + h / 2.0);

	for (row, cells) in grid.rows.iter().enumerate() {
		let course = grid.cell_origin(0, row);
		surface.text(&cells.course.text, middle(course), cells.course.font_size, INK);

		let slot = grid.cell_origin(1, row);
		surface.rect(slot, w, h, &cells.slot.color, Some(INK));
		surface.text(
			&cells.slot.label,
			middle(slot),
			cells.slot.font_size,
			&cells.slot.label_color,
		);
	}
}

fn draw_button<S: Surface>(button: &ButtonWidget, surface: &S) {
	surface.rect(button.origin, button.width, button.height, BUTTON_FILL, None);
	surface.text(&button.label, button.label_position(), button.font_size, INK);
}
