//! Click-driven state machines that mutate an already built scene.

use log::debug;

use super::stage::{SceneItem, Stage};
use super::types::Scene;

/// Coloring shown or hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColoringToggle {
	colored: bool,
}

impl ColoringToggle {
	pub fn new(colored: bool) -> Self {
		Self { colored }
	}

	pub fn is_colored(&self) -> bool {
		self.colored
	}

	pub fn toggle(&mut self, scene: &mut Scene) -> bool {
		self.colored = !self.colored;
		scene.set_colored(self.colored);
		debug!("Coloring {}", if self.colored { "on" } else { "off" });
		self.colored
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
	Graph,
	Grid,
}

/// Swaps the graph objects and the schedule grid on the stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewToggle {
	view: View,
	graph_items: Vec<SceneItem>,
	grid_items: Vec<SceneItem>,
}

impl ViewToggle {
	pub fn new(scene: &Scene) -> Self {
		let graph_items = (0..scene.nodes.len())
			.map(SceneItem::Node)
			.chain((0..scene.edges.len()).map(SceneItem::Edge))
			.collect();
		let grid_items = scene.grid.iter().map(|_| SceneItem::Grid).collect();
		Self {
			view: View::Graph,
			graph_items,
			grid_items,
		}
	}

	pub fn view(&self) -> View {
		self.view
	}

	/// Items shown while in the graph view.
	pub fn graph_items(&self) -> &[SceneItem] {
		&self.graph_items
	}

	pub fn toggle(&mut self, stage: &mut Stage) -> View {
		let (hide, show, next) = match self.view {
			View::Graph => (&self.graph_items, &self.grid_items, View::Grid),
			View::Grid => (&self.grid_items, &self.graph_items, View::Graph),
		};
		for &item in hide {
			stage.remove(item);
		}
		for &item in show {
			stage.add(item);
		}
		self.view = next;
		debug!("Switched to {:?} view", self.view);
		self.view
	}
}
