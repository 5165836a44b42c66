//! Drag-and-drop page builder.
//!
//! This module provides the interactive model behind the builder UI:
//!
//! - **Block catalog**: the section types available in the sidebar, each with
//!   a default markup template
//! - **Canvas**: the ordered sequence of placed blocks
//! - **Drag sessions**: new-block and reorder drags, with insertion points
//!   computed from pointer position and rendered block geometry
//! - **Undo/Redo**: bounded history for insert, delete, move and clear
//! - **Collaborators**: clipboard and confirmation prompts as traits

pub mod block_catalog;
pub mod canvas;
pub mod drag;
pub mod operations;
pub mod state;

pub use block_catalog::{BlockCatalogEntry, entries, get_block_catalog, lookup, lookup_template};
pub use canvas::Canvas;
pub use drag::{DragController, DragPayload, DragSession, DropAction, nearest_insertion_point};
pub use operations::{EditorCommand, EditorHistory, add_block, clear_canvas, delete_block, move_block};
pub use state::{Clipboard, Confirm, EditorState, Notice};
