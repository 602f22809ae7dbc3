//! Leptos component wiring the schema board to the DOM.
//!
//! Renders the clickable schema pane on the left and the subgraph list plus
//! creation input on the right. All mutations go through the [`BoardState`]
//! signal inside discrete event handlers; nothing here suspends or runs
//! concurrently.
//!
//! The delete action uses one stable window `keydown` listener registered at
//! mount. The handler reads the live selection through the signal instead of
//! a captured snapshot, so it never goes stale, and the handle is released on
//! cleanup so no listener outlives the component.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use super::state::BoardState;

/// Interactive schema partitioning board.
///
/// The schema text is read once at mount and split into lines. Click a
/// subgraph entry to select or deselect it, click a schema line to toggle its
/// tag to the selected subgraph, and press Backspace to delete the selected
/// subgraph. Lines tagged with a deleted subgraph keep its color.
#[component]
pub fn SchemaBoard(#[prop(into)] schema: Signal<String>) -> impl IntoView {
	let seed_hue = js_sys::Math::random() * 360.0;
	let board = RwSignal::new(BoardState::new(&schema.get_untracked(), seed_hue));

	let input_ref = NodeRef::<leptos::html::Input>::new();
	let add_subgraph = move || {
		let Some(input) = input_ref.get() else {
			return;
		};
		let name = input.value();
		let added = board.try_update(|b| b.add_subgraph(&name)).unwrap_or(false);
		if added {
			input.set_value("");
		}
	};
	let on_input_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			add_subgraph();
		}
	};

	let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
		if ev.key() == "Backspace" {
			board.update(|b| b.remove_selected());
		}
	});
	on_cleanup(move || keydown.remove());

	view! {
		<div
			class="schema-pane"
			style="background: black; color: white; padding: 10px; border-radius: 10px; cursor: pointer; user-select: none;"
		>
			{move || {
				board.with(|b| {
					b.lines
						.iter()
						.enumerate()
						.map(|(idx, line)| {
							let style = line
								.assigned
								.as_ref()
								.map(|sg| format!("color: {};", sg.color.to_css()))
								.unwrap_or_default();
							let indent = line.text.starts_with("  ");
							let brace_gap = line.text == "}";
							let text = line.text.clone();
							view! {
								<div
									class="line"
									style=style
									on:click=move |_| board.update(|b| b.toggle_assignment(idx))
								>
									{indent.then(|| view! { <span>"\u{a0}\u{a0}"</span> })}
									{text}
									{brace_gap.then(|| view! { <div>"\u{a0}"</div> })}
								</div>
							}
						})
						.collect_view()
				})
			}}
		</div>
		<div class="subgraph-pane" style="padding: 10px; border-radius: 10px;">
			{move || {
				board.with(|b| {
					b.subgraphs
						.iter()
						.map(|sg| {
							let border = if b.is_selected(sg) {
								format!(" border: 1px solid {};", sg.color.to_css())
							} else {
								String::new()
							};
							let swatch = format!(
								"display: inline-block; position: absolute; top: 3px; margin-left: 5px; \
								 width: 15px; height: 15px; border-radius: 50%; background-color: {};",
								sg.color.to_css()
							);
							let name = sg.name.clone();
							let sg = sg.clone();
							view! {
								<div
									class="subgraph-entry"
									style=format!("position: relative; cursor: pointer; user-select: none;{border}")
									on:click=move |_| board.update(|b| b.toggle_select(&sg))
								>
									{name}
									"-subgraph"
									<span class="swatch" style=swatch>"\u{a0}"</span>
								</div>
							}
						})
						.collect_view()
				})
			}}
			<div class="subgraph-controls">
				<input node_ref=input_ref on:keydown=on_input_keydown />
				<button on:click=move |_| add_subgraph()>"+ subgraph"</button>
			</div>
		</div>
	}
}
