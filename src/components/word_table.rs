use leptos::prelude::*;

use crate::config::TABLE_PAGE_SIZE;
use crate::dataset::WordLink;
use crate::table::{Column, Direction, WordTable, format_count};

/// Accessible table of every link in the active dataset.
///
/// Rebuilt from scratch (sort, search and page reset) whenever `links` changes.
#[component]
pub fn WordTableView(#[prop(into)] links: Signal<Vec<WordLink>>) -> impl IntoView {
	let table = RwSignal::new(WordTable::from_links(&[], TABLE_PAGE_SIZE));

	Effect::new(move |_| {
		links.with(|links| table.set(WordTable::from_links(links, TABLE_PAGE_SIZE)));
	});

	let header = move |column: Column| {
		let marker = move || {
			table.with(|t| match t.sort() {
				(active, Direction::Asc) if active == column => " ▲",
				(active, Direction::Desc) if active == column => " ▼",
				_ => "",
			})
		};
		view! {
			<th>
				<button class="sort" on:click=move |_| table.update(|t| t.sort_by(column))>
					{column.header()}
					{marker}
				</button>
			</th>
		}
	};

	let rows = move || {
		table.with(|t| {
			t.visible_rows()
				.into_iter()
				.map(|row| {
					view! {
						<tr>
							<td>{row.source.clone()}</td>
							<td>{row.target.clone()}</td>
							<td>{format_count(row.freq)}</td>
						</tr>
					}
				})
				.collect_view()
		})
	};

	view! {
		<div class="word-table">
			<label class="search">
				"Search: "
				<input
					type="search"
					prop:value=move || table.with(|t| t.filter().to_owned())
					on:input=move |ev| {
						let value = event_target_value(&ev);
						table.update(|t| t.set_filter(&value));
					}
				/>
			</label>
			<table id="wordTable" class="table table-striped table-hover">
				<thead>
					<tr class="active">{Column::ALL.into_iter().map(header).collect_view()}</tr>
				</thead>
				<tbody>{rows}</tbody>
			</table>
			<div class="pager">
				<span class="summary">{move || table.with(|t| t.summary())}</span>
				<button
					disabled=move || table.with(|t| t.page() == 0)
					on:click=move |_| table.update(|t| t.set_page(t.page().saturating_sub(1)))
				>
					"Previous"
				</button>
				<span class="page">
					{move || table.with(|t| format!("{} / {}", t.page() + 1, t.page_count()))}
				</span>
				<button
					disabled=move || table.with(|t| t.page() + 1 >= t.page_count())
					on:click=move |_| table.update(|t| t.set_page(t.page() + 1))
				>
					"Next"
				</button>
			</div>
		</div>
	}
}
