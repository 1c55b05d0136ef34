//! Instance fixtures shared by the unit tests.

use super::instance::Instance;

/// Three mutually adjacent vertices, both directions declared.
pub fn triangle() -> Instance {
	Instance::new()
		.with_atoms("Vertex", ["Vertex0", "Vertex1", "Vertex2"])
		.with_atoms("Color", ["Color0", "Color1", "Color2"])
		.with_atoms("Coloring", ["Coloring0"])
		.with_tuple("color", &["Coloring0", "Vertex0", "Color2"])
		.with_tuple("color", &["Coloring0", "Vertex1", "Color0"])
		.with_tuple("color", &["Coloring0", "Vertex2", "Color1"])
		.with_tuple("adjacent", &["Vertex0", "Vertex1"])
		.with_tuple("adjacent", &["Vertex1", "Vertex0"])
		.with_tuple("adjacent", &["Vertex1", "Vertex2"])
		.with_tuple("adjacent", &["Vertex2", "Vertex1"])
		.with_tuple("adjacent", &["Vertex2", "Vertex0"])
		.with_tuple("adjacent", &["Vertex0", "Vertex2"])
}

/// 4-cycle 0-1-2-3-0 declared in one direction, two-colored.
pub fn four_cycle() -> Instance {
	Instance::new()
		.with_atoms("Vertex", ["Vertex0", "Vertex1", "Vertex2", "Vertex3"])
		.with_atoms("Color", ["Color0", "Color1"])
		.with_atoms("Coloring", ["Coloring0"])
		.with_tuple("color", &["Coloring0", "Vertex0", "Color0"])
		.with_tuple("color", &["Coloring0", "Vertex1", "Color1"])
		.with_tuple("color", &["Coloring0", "Vertex2", "Color0"])
		.with_tuple("color", &["Coloring0", "Vertex3", "Color1"])
		.with_tuple("adjacent", &["Vertex0", "Vertex1"])
		.with_tuple("adjacent", &["Vertex1", "Vertex2"])
		.with_tuple("adjacent", &["Vertex2", "Vertex3"])
		.with_tuple("adjacent", &["Vertex3", "Vertex0"])
}
