//! Typed reads over a solved graph-coloring instance.

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};
use serde::Deserialize;

use super::config::Schema;
use super::error::VisError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Atom(String);

impl Atom {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn id(&self) -> &str {
		&self.0
	}

	/// Numeric suffix of the id, e.g. `Vertex12` -> 12.
	pub fn index(&self) -> Result<usize, VisError> {
		decode_index(&self.0)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tuple(Vec<Atom>);

impl Tuple {
	pub fn new(atoms: Vec<Atom>) -> Self {
		Self(atoms)
	}

	pub fn atoms(&self) -> &[Atom] {
		&self.0
	}
}

/// Read-only query surface of a solved instance.
pub trait InstanceSource {
	/// Atoms of `signature` in instance order; empty if it is not declared.
	fn atoms(&self, signature: &str) -> Vec<Atom>;

	/// Tuples of `field` whose first column is `atom`, with that column dropped.
	fn join(&self, atom: &Atom, field: &str) -> Result<Vec<Tuple>, VisError>;
}

pub fn decode_index(id: &str) -> Result<usize, VisError> {
	let digits = id.len() - id.trim_end_matches(|c: char| c.is_ascii_digit()).len();
	if digits == 0 {
		return Err(VisError::MalformedAtomId(id.into()));
	}
	id[id.len() - digits..]
		.parse()
		.map_err(|_| VisError::MalformedAtomId(id.into()))
}

/// In-memory instance, as exported to JSON by the solver front end.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Instance {
	signatures: HashMap<String, Vec<String>>,
	fields: HashMap<String, Vec<Vec<String>>>,
}

impl Instance {
	#[cfg(test)]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_json(json: &str) -> Result<Self, VisError> {
		Ok(serde_json::from_str(json)?)
	}

	#[cfg(test)]
	pub fn with_atoms<I, S>(mut self, signature: &str, ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.signatures
			.entry(signature.into())
			.or_default()
			.extend(ids.into_iter().map(Into::into));
		self
	}

	#[cfg(test)]
	pub fn with_tuple(mut self, field: &str, ids: &[&str]) -> Self {
		self.fields
			.entry(field.into())
			.or_default()
			.push(ids.iter().map(|id| id.to_string()).collect());
		self
	}
}

impl InstanceSource for Instance {
	fn atoms(&self, signature: &str) -> Vec<Atom> {
		self.signatures
			.get(signature)
			.map(|ids| ids.iter().map(Atom::new).collect())
			.unwrap_or_default()
	}

	fn join(&self, atom: &Atom, field: &str) -> Result<Vec<Tuple>, VisError> {
		let tuples = self
			.fields
			.get(field)
			.ok_or_else(|| VisError::UnknownField(field.into()))?;
		Ok(tuples
			.iter()
			.filter(|tuple| tuple.first().is_some_and(|first| first == atom.id()))
			.map(|tuple| Tuple::new(tuple[1..].iter().map(Atom::new).collect()))
			.collect())
	}
}

/// Extracts vertex, color and adjacency facts from an [`InstanceSource`].
pub struct InstanceReader<'a, S: InstanceSource> {
	source: &'a S,
	schema: &'a Schema,
}

impl<'a, S: InstanceSource> InstanceReader<'a, S> {
	pub fn new(source: &'a S, schema: &'a Schema) -> Self {
		Self { source, schema }
	}

	pub fn vertex_count(&self) -> usize {
		self.source.atoms(&self.schema.vertex).len()
	}

	pub fn color_count(&self) -> usize {
		self.source.atoms(&self.schema.color).len()
	}

	/// Color slot of every vertex in the first coloring.
	///
	/// Empty when the instance has no coloring. Pairs naming a vertex outside
	/// the vertex signature are skipped.
	pub fn color_assignment(&self) -> Result<BTreeMap<usize, usize>, VisError> {
		let mut assignment = BTreeMap::new();
		let Some(coloring) = self.source.atoms(&self.schema.coloring).into_iter().next() else {
			return Ok(assignment);
		};
		let vertex_count = self.vertex_count();

		for pair in self.source.join(&coloring, &self.schema.color_field)? {
			let [vertex, color] = pair.atoms() else {
				warn!("Skipping {}-ary color tuple", pair.atoms().len());
				continue;
			};
			let (vertex, color) = (vertex.index()?, color.index()?);
			if vertex >= vertex_count {
				warn!("Coloring names vertex {} of {}, skipping", vertex, vertex_count);
				continue;
			}
			assignment.insert(vertex, color);
		}
		debug!("Read color assignment for {} vertices", assignment.len());
		Ok(assignment)
	}

	#[cfg(test)]
	pub fn color_of(&self, vertex: usize) -> Result<Option<usize>, VisError> {
		Ok(self.color_assignment()?.get(&vertex).copied())
	}

	/// Neighbors of every vertex in traversal order, without de-duplication.
	pub fn adjacency(&self) -> Result<BTreeMap<usize, Vec<usize>>, VisError> {
		let mut adjacency = BTreeMap::new();
		for vertex in self.source.atoms(&self.schema.vertex) {
			let neighbors = self
				.source
				.join(&vertex, &self.schema.adjacency_field)?
				.iter()
				.filter_map(|tuple| tuple.atoms().first())
				.map(Atom::index)
				.collect::<Result<Vec<_>, _>>()?;
			let index = vertex.index()?;
			if adjacency.contains_key(&index) {
				warn!("Atom {} repeats vertex index {}, merging neighbors", vertex.id(), index);
			}
			adjacency.entry(index).or_insert_with(Vec::new).extend(neighbors);
		}
		Ok(adjacency)
	}
}
