//! Raw word-association tables as fetched from the data directory.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::graph::Model;

/// A row of the node table. Columns other than `id` are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WordNode {
	/// Word shown as the node label; referenced by links.
	pub id: String,
}

/// A row of the link table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WordLink {
	/// Source word id.
	pub source: String,
	/// Target word id.
	pub target: String,
	/// How often the association was given. Display only.
	pub freq: u64,
}

/// One switchable dataset: a node table and a link table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
	/// Stable key, also used as the switcher button id.
	pub key: String,
	/// Human readable name for the switcher.
	pub label: String,
	pub nodes: Vec<WordNode>,
	pub links: Vec<WordLink>,
}

impl Dataset {
	/// Parse both CSV tables of a dataset.
	pub fn from_csv(key: &str, label: &str, nodes_csv: &str, links_csv: &str) -> Result<Self> {
		Ok(Self {
			key: key.to_owned(),
			label: label.to_owned(),
			nodes: read_table("node", nodes_csv)?,
			links: read_table("link", links_csv)?,
		})
	}

	/// Parse both tables and check that every link names a known node.
	pub fn load(key: &str, label: &str, nodes_csv: &str, links_csv: &str) -> Result<Self> {
		let data = Self::from_csv(key, label, nodes_csv, links_csv)?;
		Model::resolve(&data)?;
		Ok(data)
	}
}

fn read_table<T: DeserializeOwned>(table: &'static str, text: &str) -> Result<Vec<T>> {
	csv::ReaderBuilder::new()
		.trim(csv::Trim::All)
		.from_reader(text.as_bytes())
		.deserialize()
		.collect::<std::result::Result<Vec<T>, _>>()
		.map_err(|e| Error::csv(table, e))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	const NODES: &str = "id,group\ncat,1\ndog,1\n bone ,2\n";
	const LINKS: &str = "source,target,freq\ncat,dog,12\ndog,bone,3\n";

	#[test]
	fn parses_both_tables() {
		let data = Dataset::from_csv("q105", "Question 105", NODES, LINKS).unwrap();
		assert_eq!(data.key, "q105");
		let ids: Vec<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["cat", "dog", "bone"]);
		assert_eq!(
			data.links[1],
			WordLink {
				source: "dog".into(),
				target: "bone".into(),
				freq: 3,
			}
		);
	}

	#[test]
	fn empty_tables_are_valid() {
		let data = Dataset::from_csv("k", "K", "id\n", "source,target,freq\n").unwrap();
		assert!(data.nodes.is_empty());
		assert!(data.links.is_empty());
	}

	#[test]
	fn dangling_link_fails_to_load() {
		let nodes = "id\ncat\n";
		let links = "source,target,freq\ncat,ghost,3\n";
		assert!(Dataset::from_csv("k", "K", nodes, links).is_ok());
		assert_eq!(
			Dataset::load("k", "K", nodes, links),
			Err(Error::UnknownNode { id: "ghost".into() })
		);
	}

	#[test]
	fn repeated_word_fails_to_load() {
		assert_eq!(
			Dataset::load("k", "K", "id\ncat\ncat\n", "source,target,freq\n"),
			Err(Error::DuplicateNode { id: "cat".into() })
		);
	}

	#[test]
	fn valid_dataset_loads() {
		let data = Dataset::load("q105", "Question 105", NODES, LINKS).unwrap();
		assert_eq!(data, Dataset::from_csv("q105", "Question 105", NODES, LINKS).unwrap());
	}

	#[rstest]
	#[case::missing_id("word\ncat\n", LINKS, "node")]
	#[case::missing_freq(NODES, "source,target\ncat,dog\n", "link")]
	#[case::non_numeric_freq(NODES, "source,target,freq\ncat,dog,often\n", "link")]
	fn malformed_tables_are_rejected(
		#[case] nodes: &str,
		#[case] links: &str,
		#[case] expected: &str,
	) {
		let err = Dataset::from_csv("k", "K", nodes, links).unwrap_err();
		match err {
			Error::Csv { table, .. } => assert_eq!(table, expected),
			other => panic!("expected csv error, got {other:?}"),
		}
	}
}
