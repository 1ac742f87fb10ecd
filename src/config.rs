//! Compile-time settings: dataset locations, layout profiles and UI constants.

use crate::graph::{ForceConfig, Inset};

/// Engine step per animation frame, in seconds.
pub const TICK_SECONDS: f32 = 0.016;

/// Rows shown per page of the word table.
pub const TABLE_PAGE_SIZE: usize = 10;

/// Collision radius of the dense profile as a share of per-node spacing.
const DENSE_PACKING: f64 = 0.35;

/// Where a dataset's two tables live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetSource {
	pub key: &'static str,
	pub label: &'static str,
	pub nodes_url: &'static str,
	pub links_url: &'static str,
}

/// Datasets fetched at startup, in switcher order. The first is shown first.
pub const DATASETS: &[DatasetSource] = &[
	DatasetSource {
		key: "q105",
		label: "Question 105",
		nodes_url: "data/nodes105.csv",
		links_url: "data/links105.csv",
	},
	DatasetSource {
		key: "q110b",
		label: "Question 110b",
		nodes_url: "data/nodes110.csv",
		links_url: "data/links110.csv",
	},
];

/// Canvas size, clamping and forces for one scene.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutProfile {
	pub name: &'static str,
	pub width: f64,
	pub height: f64,
	/// Linked nodes are held inside this inset. `None` disables clamping.
	pub clamp: Option<Inset>,
	pub forces: ForceConfig,
}

impl LayoutProfile {
	pub fn compact() -> Self {
		Self {
			name: "compact",
			width: 800.0,
			height: 800.0,
			clamp: Some(Inset::default()),
			forces: ForceConfig::default(),
		}
	}

	pub fn wide() -> Self {
		Self {
			name: "wide",
			width: 1100.0,
			height: 650.0,
			clamp: Some(Inset::default()),
			forces: ForceConfig::default(),
		}
	}

	/// Large word lists. The collision radius shrinks with the area each
	/// node gets inside the inset, capped at 40.
	pub fn dense(nodes: usize) -> Self {
		let (width, height, inset) = (1100.0, 820.0, Inset::default());
		let area = (width - 2.0 * inset.x) * (height - 2.0 * inset.y);
		let spacing = (area / nodes.max(1) as f64).sqrt();
		Self {
			name: "dense",
			width,
			height,
			clamp: Some(inset),
			forces: ForceConfig {
				collision: Some((spacing * DENSE_PACKING).min(40.0)),
				axis: Some(1.0),
				..ForceConfig::default()
			},
		}
	}

	pub fn for_node_count(nodes: usize) -> Self {
		match nodes {
			0..=30 => Self::compact(),
			31..=80 => Self::wide(),
			_ => Self::dense(nodes),
		}
	}
}
