use super::config::ButtonAction;

pub const UNCOLORED: &str = "white";
pub const BACKGROUND: &str = "white";
pub const INK: &str = "black";
pub const BUTTON_FILL: &str = "grey";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	#[cfg(test)]
	pub fn distance(&self, other: &Point) -> f64 {
		((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
	}
}

/// A vertex drawn as a labelled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	pub vertex: usize,
	pub center: Point,
	pub radius: f64,
	pub border_width: f64,
	pub label: String,
	/// Palette color of the vertex's slot, or [`UNCOLORED`] if it has none.
	pub assigned_color: String,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
	pub from: usize,
	pub to: usize,
	pub start: Point,
	pub end: Point,
	pub width: f64,
	pub color: &'static str,
}

/// Left column of the schedule grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLabel {
	pub text: String,
	pub font_size: f64,
}

/// Right column of the schedule grid: the vertex's time slot.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSlot {
	pub vertex: usize,
	pub label: String,
	pub font_size: f64,
	pub assigned_color: String,
	pub color: String,
	pub label_color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridRow {
	pub course: GridLabel,
	pub slot: GridSlot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridView {
	pub origin: Point,
	pub cell_width: f64,
	pub cell_height: f64,
	pub rows: Vec<GridRow>,
}

impl GridView {
	/// Top-left corner of the cell at `column`, `row`.
	pub fn cell_origin(&self, column: usize, row: usize) -> Point {
		Point::new(
			self.origin.x + column as f64 * self.cell_width,
			self.origin.y + row as f64 * self.cell_height,
		)
	}

	pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut GridSlot> {
		self.rows.iter_mut().map(|row| &mut row.slot)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonWidget {
	pub label: String,
	pub action: ButtonAction,
	pub origin: Point,
	pub width: f64,
	pub height: f64,
	pub font_size: f64,
}

impl ButtonWidget {
	pub fn contains(&self, point: Point) -> bool {
		point.x >= self.origin.x
			&& point.x <= self.origin.x + self.width
			&& point.y >= self.origin.y
			&& point.y <= self.origin.y + self.height
	}

	pub fn label_position(&self) -> Point {
		Point::new(
			self.origin.x + self.width / 2.0,
			self.origin.y + self.height / 2.0,
		)
	}
}

/// Everything that can be drawn, built once per instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub palette: Vec<String>,
	pub nodes: Vec<SceneNode>,
	pub edges: Vec<SceneEdge>,
	pub grid: Option<GridView>,
	pub buttons: Vec<ButtonWidget>,
}
