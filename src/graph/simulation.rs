use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::model::Model;

/// Cooling stops once alpha drops below this.
pub const ALPHA_MIN: f64 = 0.001;

/// Per-step alpha decay that reaches [`ALPHA_MIN`] after 300 steps.
pub fn alpha_decay() -> f64 {
	1.0 - ALPHA_MIN.powf(1.0 / 300.0)
}

/// Named forces for one layout.
///
/// `charge` and `spring` are handed to the engine. The remaining forces are
/// position constraints applied after each engine step.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceConfig {
	/// Pairwise repulsion.
	pub charge: f32,
	/// Link spring stiffness inside the engine.
	pub spring: f32,
	/// Keep the node centroid on the canvas midpoint.
	pub center: bool,
	/// Minimum distance between node centres is twice this radius.
	pub collision: Option<f64>,
	/// Strength of the x/y springs toward the midpoint.
	pub axis: Option<f64>,
	/// Rest length that links relax toward.
	pub link_distance: f64,
	pub link_strength: f64,
}

impl Default for ForceConfig {
	fn default() -> Self {
		Self {
			charge: 850.0,
			spring: 0.05,
			center: true,
			collision: Some(30.0),
			axis: Some(0.75),
			link_distance: 5.0,
			link_strength: 0.5,
		}
	}
}

#[derive(Clone, Debug, Default)]
struct SimNode {
	index: usize,
}

/// Owned handle on the engine for one dataset.
///
/// Positions are mirrored in `positions` (indexed by node index) so the
/// constraints and the projector never see engine types.
pub struct Simulation {
	graph: ForceGraph<SimNode, ()>,
	forces: ForceConfig,
	center: (f64, f64),
	edges: Vec<(usize, usize)>,
	positions: Vec<(f64, f64)>,
	alpha: f64,
	steps: usize,
}

impl Simulation {
	/// Seed every node on a circle around the midpoint and start hot.
	pub fn new(model: &mut Model, forces: ForceConfig, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: forces.charge,
			force_spring: forces.spring,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let center = (width / 2.0, height / 2.0);
		let count = model.nodes.len().max(1) as f64;
		let mut ids = Vec::with_capacity(model.nodes.len());

		for node in &mut model.nodes {
			let angle = (node.index as f64) * 2.0 * PI / count;
			(node.x, node.y) = (
				center.0 + 100.0 * angle.cos(),
				center.1 + 100.0 * angle.sin(),
			);
			ids.push(graph.add_node(NodeData {
				x: node.x as f32,
				y: node.y as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: SimNode { index: node.index },
			}));
		}
		for edge in &model.edges {
			graph.add_edge(ids[edge.source], ids[edge.target], EdgeData::default());
		}

		Self {
			graph,
			forces,
			center,
			edges: model.edges.iter().map(|e| (e.source, e.target)).collect(),
			positions: model.nodes.iter().map(|n| (n.x, n.y)).collect(),
			alpha: 1.0,
			steps: 0,
		}
	}

	#[cfg(test)]
	pub fn steps(&self) -> usize {
		self.steps
	}

	pub fn is_running(&self) -> bool {
		self.alpha >= ALPHA_MIN
	}

	/// Advance the engine by `dt` seconds and apply the supplementary forces.
	///
	/// Does nothing once converged.
	pub fn step(&mut self, dt: f32) {
		if !self.is_running() {
			return;
		}
		self.graph.update(dt);
		self.pull();
		self.constrain();
		self.push();

		self.alpha += (0.0 - self.alpha) * alpha_decay();
		self.steps += 1;
		if !self.is_running() {
			debug!("simulation converged after {} steps", self.steps);
		}
	}

	/// Copy the current positions into the model.
	pub fn read_positions(&self, model: &mut Model) {
		for (node, &(x, y)) in model.nodes.iter_mut().zip(&self.positions) {
			(node.x, node.y) = (x, y);
		}
	}

	/// Adopt positions edited outside the engine, e.g. after clamping.
	pub fn write_positions(&mut self, model: &Model) {
		for (slot, node) in self.positions.iter_mut().zip(&model.nodes) {
			*slot = (node.x, node.y);
		}
		self.push();
	}

	fn pull(&mut self) {
		let positions = &mut self.positions;
		self.graph.visit_nodes(|node| {
			if let Some(slot) = positions.get_mut(node.data.user_data.index) {
				*slot = (node.x() as f64, node.y() as f64);
			}
		});
	}

	fn push(&mut self) {
		let positions = &self.positions;
		self.graph.visit_nodes_mut(|node| {
			if let Some(&(x, y)) = positions.get(node.data.user_data.index) {
				node.data.x = x as f32;
				node.data.y = y as f32;
			}
		});
	}

	fn constrain(&mut self) {
		let alpha = self.alpha;
		let (cx, cy) = self.center;
		let p = &mut self.positions;

		if self.forces.link_distance > 0.0 {
			let k = self.forces.link_strength * alpha * 0.5;
			for &(s, t) in &self.edges {
				let ((x1, y1), (x2, y2)) = (p[s], p[t]);
				let (dx, dy) = (x2 - x1, y2 - y1);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < 1e-9 {
					continue;
				}
				let shift = (dist - self.forces.link_distance) / dist * k;
				p[s] = (x1 + dx * shift, y1 + dy * shift);
				p[t] = (x2 - dx * shift, y2 - dy * shift);
			}
		}

		if let Some(strength) = self.forces.axis {
			for (x, y) in p.iter_mut() {
				*x += (cx - *x) * strength * alpha;
				*y += (cy - *y) * strength * alpha;
			}
		}

		if let Some(radius) = self.forces.collision {
			separate(p, 2.0 * radius);
		}

		if self.forces.center && !p.is_empty() {
			let n = p.len() as f64;
			let (sx, sy) = p
				.iter()
				.fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
			let (ox, oy) = (cx - sx / n, cy - sy / n);
			for (x, y) in p.iter_mut() {
				*x += ox;
				*y += oy;
			}
		}
	}
}

/// Push overlapping pairs apart until they are `min_dist` apart.
fn separate(p: &mut [(f64, f64)], min_dist: f64) {
	for i in 0..p.len() {
		for j in (i + 1)..p.len() {
			let ((x1, y1), (x2, y2)) = (p[i], p[j]);
			let (dx, dy) = (x2 - x1, y2 - y1);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist >= min_dist {
				continue;
			}
			// Coincident pairs split along an index-dependent direction.
			let (ux, uy) = if dist < 1e-9 {
				let angle = (i + j) as f64;
				(angle.cos(), angle.sin())
			} else {
				(dx / dist, dy / dist)
			};
			let push = (min_dist - dist) * 0.5;
			p[i] = (x1 - ux * push, y1 - uy * push);
			p[j] = (x2 + ux * push, y2 + uy * push);
		}
	}
}
