use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use crate::components::dataset_switcher::DatasetSwitcher;
use crate::components::force_graph::WordGraph;
use crate::components::word_table::WordTableView;
use crate::config::DATASETS;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::loader::load_all;

/// Loaded page: switcher, network and table over the same active dataset.
#[component]
fn Explorer(datasets: Vec<Dataset>) -> impl IntoView {
	let active = RwSignal::new(0usize);
	let choices: Vec<(String, String)> = datasets
		.iter()
		.map(|d| (d.key.clone(), d.label.clone()))
		.collect();
	let datasets = StoredValue::new(datasets);
	let dataset = Signal::derive(move || {
		let i = active.get();
		datasets.with_value(|all| all.get(i).cloned().unwrap_or_default())
	});
	let links = Signal::derive(move || dataset.with(|d| d.links.clone()));

	view! {
		<DatasetSwitcher choices=choices active=active />
		<div id="net">
			<WordGraph dataset=dataset />
		</div>
		<div id="table">
			<WordTableView links=links />
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let loaded = RwSignal::new(None::<Result<Vec<Dataset>, Error>>);

	spawn_local(async move {
		let result = load_all(DATASETS).await;
		if let Err(ref e) = result {
			error!("dataset load failed: {e}");
		}
		loaded.set(Some(result));
	});

	view! {
		<main class="word-network">
			<h1>"Word associations"</h1>
			<p class="subtitle">"Click a word to highlight the words it is linked to."</p>
			{move || match loaded.get() {
				None => view! { <p class="loading">"Loading datasets…"</p> }.into_any(),
				Some(Err(e)) => {
					view! {
						<div class="load-error">
							<h2>"Uh oh! Something went wrong!"</h2>
							<p>{e.to_string()}</p>
						</div>
					}
						.into_any()
				}
				Some(Ok(datasets)) => view! { <Explorer datasets=datasets /> }.into_any(),
			}}
		</main>
	}
}
