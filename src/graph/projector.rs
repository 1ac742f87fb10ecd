use std::collections::HashSet;

use super::model::Model;

/// Minimum distance kept between a label and the canvas edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inset {
	pub x: f64,
	pub y: f64,
}

impl Default for Inset {
	fn default() -> Self {
		Self { x: 50.0, y: 10.0 }
	}
}

/// On-screen endpoints of one edge. `edge` is the edge's position in the model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineGeom {
	pub edge: usize,
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

/// Anchor of a visible label.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelGeom {
	pub node: usize,
	pub x: f64,
	pub y: f64,
}

/// Desired visual element set after one tick.
///
/// `lines` holds one entry per edge in edge order; `labels` holds the
/// linked nodes in node order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	pub lines: Vec<LineGeom>,
	pub labels: Vec<LabelGeom>,
}

impl Frame {
	pub fn line(&self, edge: usize) -> Option<&LineGeom> {
		self.lines.get(edge)
	}

	pub fn label(&self, node: usize) -> Option<&LabelGeom> {
		self.labels
			.binary_search_by_key(&node, |l| l.node)
			.ok()
			.and_then(|i| self.labels.get(i))
	}

	/// Keys that appear in `next` but not in `self`, and the reverse.
	pub fn diff(&self, next: &Frame) -> FrameDiff {
		let (old_labels, new_labels) = (
			self.labels.iter().map(|l| l.node),
			next.labels.iter().map(|l| l.node),
		);
		let (old_lines, new_lines) = (
			self.lines.iter().map(|l| l.edge),
			next.lines.iter().map(|l| l.edge),
		);
		FrameDiff {
			entered_labels: missing_from(new_labels.clone(), old_labels.clone()),
			exited_labels: missing_from(old_labels, new_labels),
			entered_lines: missing_from(new_lines.clone(), old_lines.clone()),
			exited_lines: missing_from(old_lines, new_lines),
		}
	}
}

fn missing_from(
	keys: impl Iterator<Item = usize>,
	other: impl Iterator<Item = usize>,
) -> Vec<usize> {
	let other: HashSet<usize> = other.collect();
	keys.filter(|k| !other.contains(k)).collect()
}

/// Element keys that entered or left between two frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameDiff {
	pub entered_labels: Vec<usize>,
	pub exited_labels: Vec<usize>,
	pub entered_lines: Vec<usize>,
	pub exited_lines: Vec<usize>,
}

impl FrameDiff {
	/// True when the element sets are unchanged and only positions moved.
	pub fn is_empty(&self) -> bool {
		self.entered_labels.is_empty()
			&& self.exited_labels.is_empty()
			&& self.entered_lines.is_empty()
			&& self.exited_lines.is_empty()
	}
}

/// Projects simulated positions onto the drawing surface once per tick.
#[derive(Clone, Debug)]
pub struct FrameProjector {
	width: f64,
	height: f64,
	clamp: Option<Inset>,
}

impl FrameProjector {
	pub fn new(width: f64, height: f64, clamp: Option<Inset>) -> Self {
		Self {
			width,
			height,
			clamp,
		}
	}

	/// Update `model` for the current tick and return the elements to draw.
	///
	/// Lines use this tick's raw positions. Labelled nodes are then clamped
	/// in place, so the stored position (not just the label) stays inside
	/// the inset.
	pub fn project(&self, model: &mut Model) -> Frame {
		let mut lines = Vec::with_capacity(model.edges.len());
		for (edge, e) in model.edges.iter().enumerate() {
			let (src, tgt) = (&model.nodes[e.source], &model.nodes[e.target]);
			lines.push(LineGeom {
				edge,
				x1: src.x,
				y1: src.y,
				x2: tgt.x,
				y2: tgt.y,
			});
			model.nodes[e.source].has_link = true;
			model.nodes[e.target].has_link = true;
		}

		let labels = model
			.nodes
			.iter_mut()
			.filter(|n| n.has_link)
			.map(|n| {
				(n.x, n.y) = self.clamp_point(n.x, n.y);
				LabelGeom {
					node: n.index,
					x: n.x,
					y: n.y,
				}
			})
			.collect();

		Frame { lines, labels }
	}

	/// Clamp a point into the inset rectangle, or pass it through when
	/// clamping is disabled.
	pub fn clamp_point(&self, x: f64, y: f64) -> (f64, f64) {
		match self.clamp {
			Some(inset) => (
				x.min(self.width - inset.x).max(inset.x),
				y.min(self.height - inset.y).max(inset.y),
			),
			None => (x, y),
		}
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::graph::model::tests::dataset;

	fn model(ids: &[&str], links: &[(&str, &str, u64)]) -> Model {
		Model::resolve(&dataset(ids, links)).unwrap()
	}

	fn place(model: &mut Model, positions: &[(f64, f64)]) {
		for (node, &(x, y)) in model.nodes.iter_mut().zip(positions) {
			(node.x, node.y) = (x, y);
		}
	}

	#[test]
	fn isolated_node_never_gets_a_label() {
		let mut m = model(&["A", "B", "C", "D"], &[("A", "B", 1), ("B", "C", 1)]);
		let projector = FrameProjector::new(400.0, 300.0, Some(Inset::default()));
		for _ in 0..50 {
			let frame = projector.project(&mut m);
			assert!(frame.label(3).is_none());
			assert_eq!(frame.labels.len(), 3);
		}
		assert!(!m.nodes[3].has_link);
		assert!(m.nodes[..3].iter().all(|n| n.has_link));
	}

	#[test]
	fn lines_follow_raw_positions_and_labels_are_clamped() {
		let mut m = model(&["A", "B"], &[("A", "B", 1)]);
		place(&mut m, &[(-20.0, 5.0), (120.0, 80.0)]);
		let frame = FrameProjector::new(200.0, 100.0, Some(Inset::default())).project(&mut m);

		assert_eq!(
			frame.line(0),
			Some(&LineGeom {
				edge: 0,
				x1: -20.0,
				y1: 5.0,
				x2: 120.0,
				y2: 80.0,
			})
		);
		assert_eq!(frame.label(0).map(|l| (l.x, l.y)), Some((50.0, 10.0)));
		assert_eq!(frame.label(1).map(|l| (l.x, l.y)), Some((120.0, 80.0)));
		assert_eq!((m.nodes[0].x, m.nodes[0].y), (50.0, 10.0));
	}

	#[test]
	fn unclamped_profile_leaves_positions_alone() {
		let mut m = model(&["A", "B"], &[("A", "B", 1)]);
		place(&mut m, &[(-20.0, 500.0), (0.0, 0.0)]);
		let frame = FrameProjector::new(200.0, 100.0, None).project(&mut m);
		assert_eq!(frame.label(0).map(|l| (l.x, l.y)), Some((-20.0, 500.0)));
		assert_eq!(m.nodes[0].x, -20.0);
	}

	#[test]
	fn has_link_is_sticky() {
		let mut m = model(&["A", "B"], &[("A", "B", 1)]);
		let projector = FrameProjector::new(200.0, 100.0, None);
		projector.project(&mut m);
		m.edges.clear();
		let frame = projector.project(&mut m);
		assert!(frame.lines.is_empty());
		assert_eq!(frame.labels.len(), 2);
	}

	#[test]
	fn diff_reports_entered_and_exited_keys() {
		let mut m = model(&["A", "B", "C"], &[("A", "B", 1)]);
		let projector = FrameProjector::new(200.0, 100.0, None);
		let first = projector.project(&mut m);
		assert_eq!(
			Frame::default().diff(&first),
			FrameDiff {
				entered_labels: vec![0, 1],
				exited_labels: vec![],
				entered_lines: vec![0],
				exited_lines: vec![],
			}
		);
		assert!(first.diff(&projector.project(&mut m)).is_empty());
		let gone = first.diff(&Frame::default());
		assert_eq!(gone.exited_labels, [0, 1]);
		assert_eq!(gone.exited_lines, [0]);
	}

	proptest! {
		#[test]
		fn clamped_positions_stay_inside_inset(
			positions in prop::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 3),
			width in 100.0f64..1200.0,
			height in 20.0f64..900.0,
		) {
			let mut m = model(&["A", "B", "C"], &[("A", "B", 1), ("C", "A", 1)]);
			place(&mut m, &positions);
			let inset = Inset::default();
			FrameProjector::new(width, height, Some(inset)).project(&mut m);
			for n in &m.nodes {
				prop_assert!(n.x >= inset.x && n.x <= width - inset.x);
				prop_assert!(n.y >= inset.y && n.y <= height - inset.y);
			}
		}
	}
}
