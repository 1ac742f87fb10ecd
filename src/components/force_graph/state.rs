use leptos::prelude::*;

use crate::graph::{Frame, FrameDiff, Highlight, Scene};

/// Identity of a rendered label. `scene` keeps keys from different datasets
/// apart so a switch never reuses an old element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelView {
	pub scene: u64,
	pub node: usize,
	pub word: String,
}

/// Identity of a rendered line, with its endpoint words for the class list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineView {
	pub scene: u64,
	pub edge: usize,
	pub source: String,
	pub target: String,
}

/// Reactive mirror of the active [`Scene`].
///
/// Membership lists change only when a tick's diff enters or exits
/// elements; positions flow through `frame` every tick.
#[derive(Clone, Copy)]
pub struct SceneSignals {
	pub generation: RwSignal<u64>,
	pub size: RwSignal<(f64, f64)>,
	pub frame: RwSignal<Frame>,
	pub labels: RwSignal<Vec<LabelView>>,
	pub lines: RwSignal<Vec<LineView>>,
	pub highlight: RwSignal<Highlight>,
	pub selected: RwSignal<Option<usize>>,
}

impl SceneSignals {
	pub fn new() -> Self {
		Self {
			generation: RwSignal::new(0),
			size: RwSignal::new((0.0, 0.0)),
			frame: RwSignal::new(Frame::default()),
			labels: RwSignal::new(Vec::new()),
			lines: RwSignal::new(Vec::new()),
			highlight: RwSignal::new(Highlight::none()),
			selected: RwSignal::new(None),
		}
	}

	/// Drop everything from the previous scene and size the surface for `scene`.
	pub fn reset(&self, scene: &Scene) {
		self.generation.update(|g| *g += 1);
		let profile = scene.profile();
		self.size.set((profile.width, profile.height));
		self.clear();
	}

	/// Empty every element list and return to "no selection".
	pub fn clear(&self) {
		self.frame.set(Frame::default());
		self.labels.set(Vec::new());
		self.lines.set(Vec::new());
		self.highlight.set(Highlight::none());
		self.selected.set(None);
	}

	/// Publish the result of one tick.
	pub fn sync(&self, scene: &Scene, diff: &FrameDiff) {
		let generation = self.generation.get_untracked();
		if !diff.entered_labels.is_empty() || !diff.exited_labels.is_empty() {
			self.labels.set(
				scene
					.label_keys()
					.into_iter()
					.map(|(node, word)| LabelView {
						scene: generation,
						node,
						word,
					})
					.collect(),
			);
		}
		if !diff.entered_lines.is_empty() || !diff.exited_lines.is_empty() {
			self.lines.set(
				scene
					.line_keys()
					.into_iter()
					.map(|(edge, source, target)| LineView {
						scene: generation,
						edge,
						source,
						target,
					})
					.collect(),
			);
		}
		self.frame.set(scene.frame().clone());
	}
}
