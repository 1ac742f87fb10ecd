use std::collections::HashSet;

use super::model::Edge;

/// Constant-time "are these two nodes linked?" lookup.
///
/// Pairs are stored in the direction they appear in the link table; the
/// query checks both orderings.
#[derive(Clone, Debug, Default)]
pub struct ConnectivityIndex {
	linked: HashSet<(usize, usize)>,
}

impl ConnectivityIndex {
	pub fn build(edges: &[Edge]) -> Self {
		Self {
			linked: edges.iter().map(|e| (e.source, e.target)).collect(),
		}
	}

	/// A node is always connected to itself.
	pub fn connected(&self, a: usize, b: usize) -> bool {
		a == b || self.linked.contains(&(a, b)) || self.linked.contains(&(b, a))
	}

	/// Number of distinct directed pairs recorded.
	pub fn len(&self) -> usize {
		self.linked.len()
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.linked.is_empty()
	}
}
