//! Board state: subgraph registry, line assignments, and selection.
//!
//! This is the interactive core, kept free of DOM types so the
//! selection/deletion rules can be unit tested on the host target. All
//! mutations go through `BoardState` methods; invalid input (blank names,
//! out-of-range indices, deleting with nothing selected) is a silent no-op,
//! matching the UI's no-error-feedback contract.

use std::sync::Arc;

use super::palette::{Color, SwatchGenerator};

/// A named color group created by the user.
#[derive(Clone, Debug)]
pub struct Subgraph {
	/// Display name, as typed. Guaranteed non-blank by [`BoardState::add_subgraph`].
	pub name: String,
	/// Swatch color, fixed at creation.
	pub color: Color,
}

/// Shared handle to a subgraph.
///
/// Assignment and selection compare handles by identity, not by name, so two
/// subgraphs with the same name stay distinguishable. A removed subgraph
/// stays alive for as long as any line still displays its tag; such lines
/// keep rendering the removed entry's color.
pub type SubgraphRef = Arc<Subgraph>;

/// One line of the displayed schema, independently taggable.
#[derive(Clone, Debug)]
pub struct Line {
	/// Original text, unmodified.
	pub text: String,
	/// The subgraph whose color this line displays, if any.
	pub assigned: Option<SubgraphRef>,
}

/// Complete interactive state for one schema board session.
///
/// Lines are created once from the schema text, in document order, and never
/// reordered or removed. Subgraphs and the selection change freely in
/// response to clicks and the delete key.
#[derive(Clone, Debug)]
pub struct BoardState {
	/// Schema lines in display order.
	pub lines: Vec<Line>,
	/// User-created subgraphs in creation order.
	pub subgraphs: Vec<SubgraphRef>,
	/// The subgraph targeted by the next line click, if any.
	pub selected: Option<SubgraphRef>,
	swatches: SwatchGenerator,
}

impl BoardState {
	/// Build the board from schema text, one line per `'\n'`-separated
	/// segment. Blank segments are kept so display order matches the source.
	pub fn new(schema: &str, seed_hue: f64) -> Self {
		Self {
			lines: schema
				.split('\n')
				.map(|text| Line {
					text: text.to_owned(),
					assigned: None,
				})
				.collect(),
			subgraphs: Vec::new(),
			selected: None,
			swatches: SwatchGenerator::new(seed_hue),
		}
	}

	/// Append a subgraph with a freshly generated swatch color.
	///
	/// Empty or whitespace-only names are silently ignored. Duplicate names
	/// are allowed; each call creates a distinct entry. Returns whether an
	/// entry was added, so the caller knows whether to clear its input box.
	pub fn add_subgraph(&mut self, name: &str) -> bool {
		if name.trim().is_empty() {
			return false;
		}
		let color = self.swatches.next_swatch();
		self.subgraphs.push(Arc::new(Subgraph {
			name: name.to_owned(),
			color,
		}));
		true
	}

	/// Remove the first entry identical to `subgraph`, clearing the selection
	/// if it pointed at that entry. No-op if the entry is not registered.
	/// Lines assigned to the removed subgraph keep their tag.
	pub fn remove(&mut self, subgraph: &SubgraphRef) {
		let Some(pos) = self
			.subgraphs
			.iter()
			.position(|sg| Arc::ptr_eq(sg, subgraph))
		else {
			return;
		};
		self.subgraphs.remove(pos);
		if self.is_selected(subgraph) {
			self.selected = None;
		}
	}

	/// Select `subgraph`, or deselect it if it is already selected.
	/// Selecting while a different subgraph is selected replaces the
	/// selection without further ceremony.
	pub fn toggle_select(&mut self, subgraph: &SubgraphRef) {
		if self.is_selected(subgraph) {
			self.selected = None;
		} else {
			self.selected = Some(subgraph.clone());
		}
	}

	/// Delete-key action: remove the currently selected subgraph. No-op when
	/// nothing is selected.
	pub fn remove_selected(&mut self) {
		if let Some(selected) = self.selected.clone() {
			self.remove(&selected);
		}
	}

	/// Toggle one line's assignment. An unassigned line takes the current
	/// selection (which may be none, leaving the line unassigned); an
	/// assigned line is cleared no matter which subgraph it held or what is
	/// selected. Out-of-range indices are ignored.
	pub fn toggle_assignment(&mut self, idx: usize) {
		let Some(line) = self.lines.get_mut(idx) else {
			return;
		};
		line.assigned = match line.assigned {
			None => self.selected.clone(),
			Some(_) => None,
		};
	}

	/// Whether `subgraph` is the current selection (by identity).
	pub fn is_selected(&self, subgraph: &SubgraphRef) -> bool {
		self.selected
			.as_ref()
			.is_some_and(|sel| Arc::ptr_eq(sel, subgraph))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SCHEMA: &str = "type Query {\n  packages: [Package!]!\n  hotels: [Hotel!]!\n}\n";

	fn board() -> BoardState {
		BoardState::new(SCHEMA, 210.0)
	}

	fn board_with(names: &[&str]) -> BoardState {
		let mut b = board();
		for name in names {
			assert!(b.add_subgraph(name));
		}
		b
	}

	#[test]
	fn splits_schema_into_lines_in_document_order() {
		let b = board();
		let texts: Vec<&str> = b.lines.iter().map(|l| l.text.as_str()).collect();
		assert_eq!(
			texts,
			["type Query {", "  packages: [Package!]!", "  hotels: [Hotel!]!", "}", ""]
		);
		assert!(b.lines.iter().all(|l| l.assigned.is_none()));
	}

	#[test]
	fn add_appends_and_keeps_prior_entries() {
		let mut b = board_with(&["inventory"]);
		let first = b.subgraphs[0].clone();

		assert!(b.add_subgraph("reviews"));
		assert_eq!(b.subgraphs.len(), 2);
		assert!(Arc::ptr_eq(&b.subgraphs[0], &first));
		assert_eq!(b.subgraphs[1].name, "reviews");
	}

	#[test]
	fn blank_names_are_rejected() {
		let mut b = board();
		assert!(!b.add_subgraph(""));
		assert!(!b.add_subgraph("   "));
		assert!(b.subgraphs.is_empty());
	}

	#[test]
	fn duplicate_names_create_distinct_entries() {
		let b = board_with(&["pricing", "pricing"]);
		assert_eq!(b.subgraphs.len(), 2);
		assert!(!Arc::ptr_eq(&b.subgraphs[0], &b.subgraphs[1]));
		assert_ne!(b.subgraphs[0].color, b.subgraphs[1].color);
	}

	#[test]
	fn selection_is_a_toggle() {
		let mut b = board_with(&["a"]);
		let sg = b.subgraphs[0].clone();

		b.toggle_select(&sg);
		assert!(b.is_selected(&sg));

		b.toggle_select(&sg);
		assert!(b.selected.is_none());
	}

	#[test]
	fn selecting_another_subgraph_replaces_selection() {
		let mut b = board_with(&["a", "b"]);
		let (a, bb) = (b.subgraphs[0].clone(), b.subgraphs[1].clone());

		b.toggle_select(&a);
		b.toggle_select(&bb);
		assert!(b.is_selected(&bb));
		assert!(!b.is_selected(&a));
	}

	#[test]
	fn toggle_with_no_selection_leaves_line_unassigned() {
		let mut b = board();
		b.toggle_assignment(0);
		assert!(b.lines[0].assigned.is_none());
	}

	#[test]
	fn toggle_assigns_selection_then_clears() {
		let mut b = board_with(&["a"]);
		let a = b.subgraphs[0].clone();
		b.toggle_select(&a);

		b.toggle_assignment(2);
		let assigned = b.lines[2].assigned.as_ref().unwrap();
		assert!(Arc::ptr_eq(assigned, &a));
		assert_eq!(assigned.name, "a");
		assert_eq!(assigned.color, a.color);

		b.toggle_assignment(2);
		assert!(b.lines[2].assigned.is_none());
	}

	#[test]
	fn toggling_twice_is_an_idempotent_pair() {
		let mut b = board_with(&["a"]);
		let a = b.subgraphs[0].clone();
		b.toggle_select(&a);

		// Unassigned -> assigned -> unassigned.
		b.toggle_assignment(1);
		b.toggle_assignment(1);
		assert!(b.lines[1].assigned.is_none());

		// Assigned -> cleared -> reassigned to the same selection.
		b.toggle_assignment(1);
		let before = b.lines[1].assigned.clone().unwrap();
		b.toggle_assignment(1);
		b.toggle_assignment(1);
		assert!(Arc::ptr_eq(b.lines[1].assigned.as_ref().unwrap(), &before));
	}

	#[test]
	fn assigned_line_clears_regardless_of_current_selection() {
		let mut b = board_with(&["a", "b"]);
		let (a, bb) = (b.subgraphs[0].clone(), b.subgraphs[1].clone());

		b.toggle_select(&a);
		b.toggle_assignment(0);
		b.toggle_select(&bb);

		b.toggle_assignment(0);
		assert!(b.lines[0].assigned.is_none());
	}

	#[test]
	fn removing_selected_clears_selection_but_not_assignments() {
		let mut b = board_with(&["a"]);
		let a = b.subgraphs[0].clone();
		b.toggle_select(&a);
		b.toggle_assignment(2);

		b.remove_selected();
		assert!(b.subgraphs.is_empty());
		assert!(b.selected.is_none());

		// Dangling tag is preserved: the line still reports the removed entry.
		let assigned = b.lines[2].assigned.as_ref().unwrap();
		assert!(Arc::ptr_eq(assigned, &a));
		assert_eq!(assigned.name, "a");
	}

	#[test]
	fn removing_non_selected_keeps_selection() {
		let mut b = board_with(&["a", "b"]);
		let (a, bb) = (b.subgraphs[0].clone(), b.subgraphs[1].clone());
		b.toggle_select(&a);

		b.remove(&bb);
		assert_eq!(b.subgraphs.len(), 1);
		assert!(b.is_selected(&a));
	}

	#[test]
	fn removing_an_unregistered_subgraph_is_a_noop() {
		let mut b = board_with(&["a"]);
		let a = b.subgraphs[0].clone();
		b.remove(&a);
		b.remove(&a);
		assert!(b.subgraphs.is_empty());
	}

	#[test]
	fn delete_key_with_no_selection_is_a_noop() {
		let mut b = board_with(&["a"]);
		b.remove_selected();
		assert_eq!(b.subgraphs.len(), 1);
	}

	#[test]
	fn out_of_range_toggle_is_ignored() {
		let mut b = board();
		let count = b.lines.len();
		b.toggle_assignment(count);
		b.toggle_assignment(usize::MAX);
		assert_eq!(b.lines.len(), count);
		assert!(b.lines.iter().all(|l| l.assigned.is_none()));
	}
}
