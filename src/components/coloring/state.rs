use log::{debug, info};

use super::config::{ButtonAction, VisConfig};
use super::error::VisError;
use super::instance::{InstanceReader, InstanceSource};
use super::scene::SceneBuilder;
use super::stage::{SceneItem, Stage};
use super::toggle::{ColoringToggle, ViewToggle};
use super::types::{Point, Scene};

/// A built scene plus the interactive state layered on top of it.
pub struct Visualization {
	pub scene: Scene,
	pub stage: Stage,
	pub coloring: ColoringToggle,
	pub view: ViewToggle,
	pub width: f64,
	pub height: f64,
}

impl Visualization {
	/// Reads the instance and builds the scene. Nothing is staged unless the
	/// whole build succeeds.
	pub fn new<S: InstanceSource>(source: &S, config: &VisConfig) -> Result<Self, VisError> {
		let reader = InstanceReader::new(source, &config.schema);
		let scene = SceneBuilder::new(config).build(&reader)?;

		let view = ViewToggle::new(&scene);
		let mut stage = Stage::new();
		stage.extend(view.graph_items().iter().copied());
		stage.extend((0..scene.buttons.len()).map(SceneItem::Button));
		debug!("Initial stage holds {} items", stage.len());

		Ok(Self {
			scene,
			stage,
			coloring: ColoringToggle::new(config.initially_colored),
			view,
			width: config.screen_width,
			height: config.screen_height,
		})
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	pub fn apply(&mut self, action: ButtonAction) {
		info!("Button action: {:?}", action);
		match action {
			ButtonAction::ToggleColoring => {
				self.coloring.toggle(&mut self.scene);
			}
			ButtonAction::ToggleView => {
				self.view.toggle(&mut self.stage);
			}
		}
	}

	/// Dispatches a click at `point`, returning the action of the staged
	/// button under it, if any.
	pub fn click_at(&mut self, point: Point) -> Option<ButtonAction> {
		let action = self
			.scene
			.buttons
			.iter()
			.enumerate()
			.filter(|(idx, _)| self.stage.contains(SceneItem::Button(*idx)))
			.find(|(_, button)| button.contains(point))
			.map(|(_, button)| button.action)?;
		self.apply(action);
		Some(action)
	}
}
