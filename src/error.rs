//! Errors raised while loading and resolving word-association datasets.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while turning fetched tables into a drawable scene.
///
/// Kept `Clone` (string payloads only) so it can be stored in signals.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("failed to fetch {url}: {message}")]
	Fetch { url: String, message: String },

	#[error("malformed {table} table: {message}")]
	Csv { table: &'static str, message: String },

	#[error("link references unknown node `{id}`")]
	UnknownNode { id: String },

	#[error("node `{id}` appears more than once")]
	DuplicateNode { id: String },
}

impl Error {
	pub(crate) fn csv(table: &'static str, err: csv::Error) -> Self {
		Self::Csv {
			table,
			message: err.to_string(),
		}
	}
}
