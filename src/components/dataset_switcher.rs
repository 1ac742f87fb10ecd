use leptos::prelude::*;

/// One button per dataset; clicking selects it by position.
#[component]
pub fn DatasetSwitcher(
	/// `(key, label)` per dataset, in display order.
	choices: Vec<(String, String)>,
	active: RwSignal<usize>,
) -> impl IntoView {
	let buttons = choices
		.into_iter()
		.enumerate()
		.map(|(i, (key, label))| {
			view! {
				<button
					id=key
					class="dataset"
					class:active=move || active.get() == i
					on:click=move |_| active.set(i)
				>
					{label}
				</button>
			}
		})
		.collect_view();

	view! { <nav class="dataset-switcher">{buttons}</nav> }
}
