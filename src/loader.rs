//! Fetches the dataset CSV tables over HTTP.

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::DatasetSource;
use crate::dataset::Dataset;
use crate::error::{Error, Result};

fn fetch_error(url: &str, value: JsValue) -> Error {
	Error::Fetch {
		url: url.to_owned(),
		message: value
			.as_string()
			.unwrap_or_else(|| format!("{value:?}")),
	}
}

async fn fetch_text(url: &str) -> Result<String> {
	let window = web_sys::window().ok_or_else(|| Error::Fetch {
		url: url.to_owned(),
		message: "no window".into(),
	})?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| fetch_error(url, e))?
		.dyn_into()
		.map_err(|e| fetch_error(url, e))?;
	if !response.ok() {
		return Err(Error::Fetch {
			url: url.to_owned(),
			message: format!("HTTP {}", response.status()),
		});
	}
	let body = response.text().map_err(|e| fetch_error(url, e))?;
	let text = JsFuture::from(body).await.map_err(|e| fetch_error(url, e))?;
	text.as_string().ok_or_else(|| Error::Fetch {
		url: url.to_owned(),
		message: "response body is not text".into(),
	})
}

/// Fetch, parse and resolve one dataset.
pub async fn load_dataset(source: &DatasetSource) -> Result<Dataset> {
	let nodes = fetch_text(source.nodes_url).await?;
	let links = fetch_text(source.links_url).await?;
	let data = Dataset::load(source.key, source.label, &nodes, &links)?;
	info!(
		"loaded {}: {} nodes, {} links",
		data.key,
		data.nodes.len(),
		data.links.len()
	);
	Ok(data)
}

/// Fetch every dataset; any failure aborts the whole load.
pub async fn load_all(sources: &[DatasetSource]) -> Result<Vec<Dataset>> {
	let mut loaded = Vec::with_capacity(sources.len());
	for source in sources {
		loaded.push(load_dataset(source).await?);
	}
	Ok(loaded)
}
