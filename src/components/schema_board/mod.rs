//! Interactive schema partitioning board.
//!
//! Displays schema text line by line and lets the user group lines into
//! named, colored subgraphs:
//! - Create a subgraph from the text input (Enter or the "+ subgraph" button)
//! - Click a subgraph entry to select/deselect it
//! - Click a schema line to toggle its tag to the selected subgraph
//! - Press Backspace to delete the selected subgraph
//!
//! State lives in [`BoardState`], which has no DOM dependencies and carries
//! all the selection/assignment rules; the Leptos component in [`component`]
//! only wires browser events to state methods.

mod component;
pub mod palette;
mod state;
mod types;

pub use component::SchemaBoard;
pub use palette::{Color, SwatchGenerator};
pub use state::{BoardState, Line, Subgraph, SubgraphRef};
pub use types::{SchemaSource, DEFAULT_SCHEMA};
