//! UI components.

pub mod schema_board;
