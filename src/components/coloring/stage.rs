use std::collections::BTreeSet;

/// Handle to an object owned by the [`Scene`](super::types::Scene).
///
/// Variant order is draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SceneItem {
	Edge(usize),
	Node(usize),
	Grid,
	Button(usize),
}

/// The set of scene objects currently attached to the render target.
///
/// Items are handles, so detaching one never drops the object it points to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stage {
	items: BTreeSet<SceneItem>,
}

impl Stage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, item: SceneItem) {
		self.items.insert(item);
	}

	pub fn remove(&mut self, item: SceneItem) {
		self.items.remove(&item);
	}

	pub fn contains(&self, item: SceneItem) -> bool {
		self.items.contains(&item)
	}

	pub fn items(&self) -> impl Iterator<Item = SceneItem> + '_ {
		self.items.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl Extend<SceneItem> for Stage {
	fn extend<T: IntoIterator<Item = SceneItem>>(&mut self, iter: T) {
		self.items.extend(iter);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_add_is_idempotent() {
		let mut stage = Stage::new();
		stage.add(SceneItem::Node(0));
		stage.add(SceneItem::Node(0));
		assert_eq!(stage.len(), 1);
	}

	#[test]
	fn test_remove_missing_is_noop() {
		let mut stage = Stage::new();
		stage.remove(SceneItem::Grid);
		assert!(stage.is_empty());
	}

	#[test]
	fn test_draw_order() {
		let mut stage = Stage::new();
		stage.extend([
			SceneItem::Button(0),
			SceneItem::Node(1),
			SceneItem::Grid,
			SceneItem::Edge(3),
			SceneItem::Node(0),
		]);
		let order: Vec<_> = stage.items().collect();
		assert_eq!(
			order,
			vec![
				SceneItem::Edge(3),
				SceneItem::Node(0),
				SceneItem::Node(1),
				SceneItem::Grid,
				SceneItem::Button(0),
			]
		);
	}
}
