//! Click-to-highlight partition over nodes and edges.

use super::connectivity::ConnectivityIndex;
use super::model::Model;

/// Visual treatment of a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
	pub opacity: f64,
	pub font_size_px: u32,
	pub bold: bool,
	/// White outline so the word stays legible over crossing lines.
	pub halo: bool,
}

impl LabelStyle {
	pub const DEFAULT: Self = Self {
		opacity: 1.0,
		font_size_px: 16,
		bold: false,
		halo: false,
	};
	pub const CONNECTED: Self = Self {
		opacity: 1.0,
		font_size_px: 18,
		bold: true,
		halo: true,
	};
	pub const FADED: Self = Self {
		opacity: 0.5,
		font_size_px: 16,
		bold: false,
		halo: false,
	};
}

/// Visual treatment of an edge line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStyle {
	pub stroke: &'static str,
	pub width_px: u32,
}

impl LineStyle {
	pub const NEUTRAL: Self = Self {
		stroke: "#ccc",
		width_px: 1,
	};
	pub const HIGHLIGHTED: Self = Self {
		stroke: "#333",
		width_px: 2,
	};
}

/// Current selection and the partition it induces.
///
/// Starts with nothing selected; each [`Highlight::select`] rebuilds the
/// whole partition, so selecting the same node twice is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
	selected: Option<usize>,
	connected: Vec<bool>,
	edges: Vec<bool>,
}

impl Highlight {
	/// The "no selection" state.
	pub fn none() -> Self {
		Self::default()
	}

	pub fn select(node: usize, index: &ConnectivityIndex, model: &Model) -> Self {
		Self {
			selected: Some(node),
			connected: model
				.nodes
				.iter()
				.map(|other| index.connected(node, other.index))
				.collect(),
			edges: (0..model.edges.len())
				.map(|edge| model.touches(edge, node))
				.collect(),
		}
	}

	#[cfg(test)]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn is_connected(&self, node: usize) -> bool {
		self.connected.get(node).copied().unwrap_or(false)
	}

	pub fn label_style(&self, node: usize) -> LabelStyle {
		match self.selected {
			None => LabelStyle::DEFAULT,
			Some(_) if self.is_connected(node) => LabelStyle::CONNECTED,
			Some(_) => LabelStyle::FADED,
		}
	}

	pub fn line_style(&self, edge: usize) -> LineStyle {
		if self.edges.get(edge).copied().unwrap_or(false) {
			LineStyle::HIGHLIGHTED
		} else {
			LineStyle::NEUTRAL
		}
	}
}
