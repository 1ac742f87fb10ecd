use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// A word in the active scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	/// Position in the dataset's node table. Used as the connectivity key.
	pub index: usize,
	pub x: f64,
	pub y: f64,
	/// Set once the node is drawn as the endpoint of an edge. Never cleared.
	pub has_link: bool,
}

/// A resolved link between two node indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	pub source: usize,
	pub target: usize,
	pub freq: u64,
}

/// Nodes and edges of one dataset with identifiers resolved to indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl Model {
	/// Resolve link endpoints against the node table.
	///
	/// Node indices follow table order. Positions start at the origin and
	/// are filled in by the simulation.
	pub fn resolve(data: &Dataset) -> Result<Self> {
		let mut by_id = HashMap::with_capacity(data.nodes.len());
		let mut nodes = Vec::with_capacity(data.nodes.len());

		for (index, row) in data.nodes.iter().enumerate() {
			if by_id.insert(row.id.as_str(), index).is_some() {
				return Err(Error::DuplicateNode { id: row.id.clone() });
			}
			nodes.push(Node {
				id: row.id.clone(),
				index,
				x: 0.0,
				y: 0.0,
				has_link: false,
			});
		}

		let lookup = |id: &str| {
			by_id
				.get(id)
				.copied()
				.ok_or_else(|| Error::UnknownNode { id: id.to_owned() })
		};
		let edges = data
			.links
			.iter()
			.map(|link| {
				Ok(Edge {
					source: lookup(&link.source)?,
					target: lookup(&link.target)?,
					freq: link.freq,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Self { nodes, edges })
	}

	/// Whether `edge` has `node` as either endpoint.
	pub fn touches(&self, edge: usize, node: usize) -> bool {
		self.edges
			.get(edge)
			.is_some_and(|e| e.source == node || e.target == node)
	}
}
