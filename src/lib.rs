//! subgraph-painter: browser UI for partitioning a schema into colored subgraphs.
//!
//! This crate renders a fixed GraphQL-like schema line by line and lets the
//! user create named, colored "subgraphs", then click lines to tag them with
//! the selected subgraph's color. Grouping is purely visual; no federation
//! logic is involved.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::schema_board::{BoardState, SchemaBoard, SchemaSource, DEFAULT_SCHEMA};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("subgraph-painter: logging initialized");
}

/// Load schema text from a script element with id="schema-data".
/// Expected format: JSON with { schema: "..." }
fn load_schema_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("schema-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SchemaSource>(&json_text) {
		Ok(source) => {
			info!(
				"subgraph-painter: loaded injected schema ({} lines)",
				source.schema.lines().count()
			);
			Some(source.schema)
		}
		Err(e) => {
			warn!("subgraph-painter: failed to parse schema data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the schema (injected or built-in) and renders the partitioning board.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let schema = load_schema_text().unwrap_or_else(|| DEFAULT_SCHEMA.to_owned());
	let schema_signal = Signal::derive(move || schema.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Schema Subgraph Painter" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div style="display: flex; width: 80%; justify-content: center;">
			<SchemaBoard schema=schema_signal />
		</div>
	}
}
