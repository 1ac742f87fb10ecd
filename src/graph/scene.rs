use log::{debug, info};

use super::connectivity::ConnectivityIndex;
use super::interaction::Highlight;
use super::model::Model;
use super::projector::{Frame, FrameDiff, FrameProjector};
use super::simulation::Simulation;
use crate::config::LayoutProfile;
use crate::dataset::Dataset;
use crate::error::Result;

/// Everything drawn for one dataset, from load until it is replaced.
pub struct Scene {
	key: String,
	profile: LayoutProfile,
	model: Model,
	index: ConnectivityIndex,
	simulation: Simulation,
	projector: FrameProjector,
	frame: Frame,
	highlight: Highlight,
}

impl Scene {
	/// Resolve `data` and start a fresh simulation, picking the layout
	/// profile from the dataset size.
	pub fn build(data: &Dataset) -> Result<Self> {
		Self::with_profile(data, LayoutProfile::for_node_count(data.nodes.len()))
	}

	pub fn with_profile(data: &Dataset, profile: LayoutProfile) -> Result<Self> {
		let mut model = Model::resolve(data)?;
		let index = ConnectivityIndex::build(&model.edges);
		let simulation = Simulation::new(
			&mut model,
			profile.forces.clone(),
			profile.width,
			profile.height,
		);
		let projector = FrameProjector::new(profile.width, profile.height, profile.clamp);
		info!(
			"scene {}: {} nodes, {} links ({} distinct pairs), {} layout ({}x{})",
			data.key,
			model.nodes.len(),
			model.edges.len(),
			index.len(),
			profile.name,
			profile.width,
			profile.height,
		);

		Ok(Self {
			key: data.key.clone(),
			profile,
			model,
			index,
			simulation,
			projector,
			frame: Frame::default(),
			highlight: Highlight::none(),
		})
	}

	/// Step the simulation once and reproject.
	///
	/// Returns the elements that entered or left this tick, or `None` once
	/// the simulation has converged.
	pub fn tick(&mut self, dt: f32) -> Option<FrameDiff> {
		if !self.simulation.is_running() {
			return None;
		}
		self.simulation.step(dt);
		self.simulation.read_positions(&mut self.model);
		let frame = self.projector.project(&mut self.model);
		if self.profile.clamp.is_some() {
			self.simulation.write_positions(&self.model);
		}

		let diff = self.frame.diff(&frame);
		if !diff.is_empty() {
			debug!(
				"scene {}: {} labels in, {} out; {} lines in, {} out",
				self.key,
				diff.entered_labels.len(),
				diff.exited_labels.len(),
				diff.entered_lines.len(),
				diff.exited_lines.len(),
			);
		}
		self.frame = frame;
		Some(diff)
	}

	/// Select `node` and recompute the highlight partition from scratch.
	pub fn select(&mut self, node: usize) -> &Highlight {
		self.highlight = Highlight::select(node, &self.index, &self.model);
		&self.highlight
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn profile(&self) -> &LayoutProfile {
		&self.profile
	}

	#[cfg(test)]
	pub fn model(&self) -> &Model {
		&self.model
	}

	pub fn frame(&self) -> &Frame {
		&self.frame
	}

	#[cfg(test)]
	pub fn highlight(&self) -> &Highlight {
		&self.highlight
	}

	pub fn is_running(&self) -> bool {
		self.simulation.is_running()
	}

	/// Node index and word of every currently labelled node.
	pub fn label_keys(&self) -> Vec<(usize, String)> {
		self.frame
			.labels
			.iter()
			.map(|l| (l.node, self.model.nodes[l.node].id.clone()))
			.collect()
	}

	/// Edge index with source and target words of every drawn line.
	pub fn line_keys(&self) -> Vec<(usize, String, String)> {
		self.frame
			.lines
			.iter()
			.filter_map(|l| self.model.edges.get(l.edge).map(|e| (l.edge, e)))
			.map(|(edge, e)| {
				(
					edge,
					self.model.nodes[e.source].id.clone(),
					self.model.nodes[e.target].id.clone(),
				)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::TICK_SECONDS;
	use crate::graph::interaction::LabelStyle;
	use crate::graph::model::tests::dataset;

	fn run_to_convergence(scene: &mut Scene) -> usize {
		let mut ticks = 0;
		while scene.tick(TICK_SECONDS).is_some() {
			ticks += 1;
		}
		ticks
	}

	#[test]
	fn chain_scenario_labels_every_linked_word() {
		let mut scene = Scene::build(&dataset(&["A", "B", "C"], &[("A", "B", 5), ("B", "C", 2)])).unwrap();
		let first = scene.tick(TICK_SECONDS).unwrap();
		assert_eq!(first.entered_labels, [0, 1, 2]);
		assert_eq!(first.entered_lines, [0, 1]);

		assert!(run_to_convergence(&mut scene) > 0);
		assert!(!scene.is_running());
		assert!(scene.model().nodes.iter().all(|n| n.has_link));
		assert_eq!(scene.tick(TICK_SECONDS), None);

		let h = scene.select(1).clone();
		assert_eq!(h.label_style(0), LabelStyle::CONNECTED);
		assert_eq!(h.label_style(2), LabelStyle::CONNECTED);
		assert_eq!(scene.highlight(), &h);
	}

	#[test]
	fn isolated_word_never_labelled() {
		let mut scene = Scene::build(&dataset(
			&["A", "B", "C", "D"],
			&[("A", "B", 1), ("B", "C", 1)],
		))
		.unwrap();
		while scene.tick(TICK_SECONDS).is_some() {
			assert!(scene.frame().label(3).is_none());
			assert!(scene.label_keys().iter().all(|(_, id)| id != "D"));
		}
		assert!(!scene.model().nodes[3].has_link);
	}

	#[test]
	fn clamped_profile_keeps_labels_inside() {
		let profile = LayoutProfile::wide();
		let inset = profile.clamp.unwrap();
		let mut scene = Scene::with_profile(
			&dataset(&["A", "B", "C"], &[("A", "B", 1), ("A", "C", 1)]),
			profile.clone(),
		)
		.unwrap();
		while scene.tick(TICK_SECONDS).is_some() {
			for l in &scene.frame().labels {
				assert!(l.x >= inset.x && l.x <= profile.width - inset.x);
				assert!(l.y >= inset.y && l.y <= profile.height - inset.y);
			}
		}
	}

	#[test]
	fn dense_ring_stays_on_the_surface() {
		let words: Vec<String> = (0..150).map(|i| format!("w{i}")).collect();
		let ids: Vec<&str> = words.iter().map(String::as_str).collect();
		let links: Vec<(&str, &str, u64)> = (0..ids.len())
			.map(|i| (ids[i], ids[(i + 1) % ids.len()], 1))
			.collect();
		let mut scene = Scene::build(&dataset(&ids, &links)).unwrap();
		assert_eq!(scene.profile().name, "dense");

		run_to_convergence(&mut scene);
		let profile = scene.profile().clone();
		let inset = profile.clamp.unwrap();
		let inside = |x: f64, y: f64| {
			(inset.x..=profile.width - inset.x).contains(&x)
				&& (inset.y..=profile.height - inset.y).contains(&y)
		};
		assert!(scene.model().nodes.iter().all(|n| n.x.is_finite() && n.y.is_finite()));
		let outside: Vec<_> = scene
			.model()
			.nodes
			.iter()
			.filter(|n| !inside(n.x, n.y))
			.map(|n| &n.id)
			.collect();
		assert!(outside.is_empty(), "off the surface: {outside:?}");
		assert_eq!(scene.frame().labels.len(), 150);
		assert!(scene.frame().labels.iter().all(|l| inside(l.x, l.y)));
	}

	#[test]
	fn line_keys_name_both_endpoints() {
		let mut scene = Scene::build(&dataset(&["cat", "dog"], &[("dog", "cat", 3)])).unwrap();
		assert!(scene.line_keys().is_empty());
		scene.tick(TICK_SECONDS);
		assert_eq!(scene.line_keys(), [(0, "dog".to_owned(), "cat".to_owned())]);
		assert_eq!(scene.key(), "test");
		assert_eq!(scene.profile().name, "compact");
	}

	#[test]
	fn replacement_scene_starts_from_an_empty_frame() {
		let mut old = Scene::build(&dataset(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 1)])).unwrap();
		old.tick(TICK_SECONDS);
		old.select(0);

		let mut new = Scene::build(&dataset(&["X", "Y"], &[("X", "Y", 1)])).unwrap();
		assert!(new.frame().labels.is_empty());
		assert_eq!(new.highlight().selected(), None);
		let first = new.tick(TICK_SECONDS).unwrap();
		assert_eq!(first.entered_labels, [0, 1]);
		assert!(first.exited_labels.is_empty());
		let words: Vec<_> = new.label_keys().into_iter().map(|(_, id)| id).collect();
		assert_eq!(words, ["X", "Y"]);
	}

	#[test]
	fn bad_reference_fails_the_build() {
		assert!(Scene::build(&dataset(&["A"], &[("A", "B", 1)])).is_err());
	}
}
