//! Sortable, searchable, paginated view over a dataset's links.

use std::cmp::Ordering;

use crate::dataset::WordLink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
	Source,
	Target,
	Freq,
}

impl Column {
	pub const ALL: [Column; 3] = [Column::Source, Column::Target, Column::Freq];

	pub fn header(self) -> &'static str {
		match self {
			Column::Source => "Source word",
			Column::Target => "Target word",
			Column::Freq => "Frequency",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Asc,
	Desc,
}

impl Direction {
	fn flip(self) -> Self {
		match self {
			Direction::Asc => Direction::Desc,
			Direction::Desc => Direction::Asc,
		}
	}
}

/// One link as shown in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
	pub source: String,
	pub target: String,
	pub freq: u64,
}

impl TableRow {
	fn cmp_by(&self, other: &Self, column: Column) -> Ordering {
		match column {
			Column::Source => self.source.cmp(&other.source),
			Column::Target => self.target.cmp(&other.target),
			Column::Freq => self.freq.cmp(&other.freq),
		}
	}

	fn matches(&self, needle: &str) -> bool {
		needle.is_empty()
			|| self.source.to_lowercase().contains(needle)
			|| self.target.to_lowercase().contains(needle)
	}
}

/// Rows plus the current sort, search and page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordTable {
	rows: Vec<TableRow>,
	sort: (Column, Direction),
	filter: String,
	page: usize,
	page_size: usize,
}

impl WordTable {
	/// One row per link, in link order, sorted by frequency descending.
	pub fn from_links(links: &[WordLink], page_size: usize) -> Self {
		Self {
			rows: links
				.iter()
				.map(|l| TableRow {
					source: l.source.clone(),
					target: l.target.clone(),
					freq: l.freq,
				})
				.collect(),
			sort: (Column::Freq, Direction::Desc),
			filter: String::new(),
			page: 0,
			page_size: page_size.max(1),
		}
	}

	pub fn sort(&self) -> (Column, Direction) {
		self.sort
	}

	/// Sort by `column`; choosing the active column again reverses it.
	pub fn sort_by(&mut self, column: Column) {
		self.sort = match self.sort {
			(active, dir) if active == column => (column, dir.flip()),
			_ => (column, Direction::Asc),
		};
		self.page = 0;
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	/// Case-insensitive substring search over both words.
	pub fn set_filter(&mut self, filter: &str) {
		self.filter = filter.trim().to_lowercase();
		self.page = 0;
	}

	pub fn page(&self) -> usize {
		self.page
	}

	pub fn set_page(&mut self, page: usize) {
		self.page = page.min(self.page_count() - 1);
	}

	/// Always at least one, even when nothing matches.
	pub fn page_count(&self) -> usize {
		self.filtered_len().div_ceil(self.page_size).max(1)
	}

	pub fn total_len(&self) -> usize {
		self.rows.len()
	}

	pub fn filtered_len(&self) -> usize {
		self.rows.iter().filter(|r| r.matches(&self.filter)).count()
	}

	/// Every row that passes the filter, in sort order. Ties keep link order.
	pub fn sorted_rows(&self) -> Vec<&TableRow> {
		let (column, dir) = self.sort;
		let mut rows: Vec<_> = self
			.rows
			.iter()
			.filter(|r| r.matches(&self.filter))
			.collect();
		rows.sort_by(|a, b| match dir {
			Direction::Asc => a.cmp_by(b, column),
			Direction::Desc => b.cmp_by(a, column),
		});
		rows
	}

	/// Rows on the current page.
	pub fn visible_rows(&self) -> Vec<&TableRow> {
		self.sorted_rows()
			.into_iter()
			.skip(self.page * self.page_size)
			.take(self.page_size)
			.collect()
	}

	/// "Showing 1 to 10 of 42 entries".
	pub fn summary(&self) -> String {
		let shown = self.filtered_len();
		if shown == 0 {
			return "Showing 0 to 0 of 0 entries".to_owned();
		}
		let first = self.page * self.page_size + 1;
		let last = (first + self.page_size - 1).min(shown);
		let mut text = format!(
			"Showing {} to {} of {} entries",
			format_count(first as u64),
			format_count(last as u64),
			format_count(shown as u64),
		);
		if shown != self.total_len() {
			text.push_str(&format!(
				" (filtered from {} total entries)",
				format_count(self.total_len() as u64)
			));
		}
		text
	}
}

/// Thousands separators: `1234567` -> `"1,234,567"`.
pub fn format_count(n: u64) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}
