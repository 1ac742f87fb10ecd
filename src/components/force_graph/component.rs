use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;

use super::render;
use super::state::{LabelView, LineView, SceneSignals};
use crate::config::TICK_SECONDS;
use crate::dataset::Dataset;
use crate::graph::{LineGeom, Scene};

/// Ticks slower than one 60 Hz frame get logged.
const FRAME_BUDGET_MS: f64 = 16.0;

fn request_frame(cb: &Closure<dyn FnMut()>) {
	if let Some(window) = web_sys::window() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// Force-directed word network for one dataset at a time.
///
/// Switching `dataset` tears the scene down and starts a new simulation.
#[component]
pub fn WordGraph(#[prop(into)] dataset: Signal<Dataset>) -> impl IntoView {
	let signals = SceneSignals::new();
	let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let looping = Rc::new(Cell::new(false));

	let (scene_anim, animate_inner, looping_anim) =
		(scene.clone(), animate.clone(), looping.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		let mut running = false;
		if let Some(ref mut s) = *scene_anim.borrow_mut() {
			let started = js_sys::Date::now();
			if let Some(diff) = s.tick(TICK_SECONDS) {
				signals.sync(s, &diff);
				let took = js_sys::Date::now() - started;
				if took > FRAME_BUDGET_MS {
					warn!("scene {}: tick took {:.1}ms", s.key(), took);
				}
			}
			running = s.is_running();
		}
		looping_anim.set(running);
		if running {
			if let Some(ref cb) = *animate_inner.borrow() {
				request_frame(cb);
			}
		}
	}));

	let (scene_build, animate_start) = (scene.clone(), animate.clone());
	Effect::new(move |_| {
		let data = dataset.get();
		// Drop the previous scene before anything else sees it.
		scene_build.borrow_mut().take();
		match Scene::build(&data) {
			Ok(next) => {
				signals.reset(&next);
				*scene_build.borrow_mut() = Some(next);
			}
			Err(e) => {
				error!("cannot build scene {}: {}", data.key, e);
				signals.clear();
				return;
			}
		}
		if !looping.get() {
			looping.set(true);
			if let Some(ref cb) = *animate_start.borrow() {
				request_frame(cb);
			}
		}
	});

	let scene_select = scene.clone();
	Effect::new(move |_| {
		let Some(node) = signals.selected.get() else {
			return;
		};
		if let Some(ref mut s) = *scene_select.borrow_mut() {
			signals.highlight.set(s.select(node).clone());
		}
	});

	move || {
		let generation = signals.generation.get();
		let (width, height) = signals.size.get();
		view! {
			<svg
				class="word-graph"
				data-scene=generation.to_string()
				width=width.to_string()
				height=height.to_string()
				viewBox=format!("0 0 {} {}", width, height)
			>
				<g class="links">
					<For
						each=move || signals.lines.get()
						key=|l: &LineView| (l.scene, l.edge)
						children=move |l: LineView| {
							let edge = l.edge;
							let end = move |pick: fn(&LineGeom) -> f64| {
								move || signals.frame.with(|f| render::coord(f.line(edge).map_or(0.0, pick)))
							};
							view! {
								<line
									class=format!("{} {}", l.source, l.target)
									x1=end(|g| g.x1)
									y1=end(|g| g.y1)
									x2=end(|g| g.x2)
									y2=end(|g| g.y2)
									style=move || signals.highlight.with(|h| render::line_css(h.line_style(edge)))
								/>
							}
						}
					/>
				</g>
				<g class="labels">
					<For
						each=move || signals.labels.get()
						key=|l: &LabelView| (l.scene, l.node)
						children=move |l: LabelView| {
							let node = l.node;
							view! {
								<text
									x=move || signals.frame.with(|f| render::coord(f.label(node).map_or(0.0, |g| g.x)))
									y=move || signals.frame.with(|f| render::coord(f.label(node).map_or(0.0, |g| g.y)))
									dy="5"
									fill=render::label_fill(node)
									style=move || signals.highlight.with(|h| render::label_css(h.label_style(node)))
									on:click=move |_| signals.selected.set(Some(node))
								>
									{l.word}
								</text>
							}
						}
					/>
				</g>
			</svg>
		}
	}
}
