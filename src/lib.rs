//! Block-based page builder.
//!
//! This crate models a drag-and-drop page builder: a catalog of page sections,
//! a canvas that orders placed sections, drag sessions that insert and reorder
//! them, and an exporter that turns the canvas into a standalone HTML page.
//!
//! The binary `rustypage` builds pages from the command line.

pub mod config;
pub mod editor;
pub mod error;
pub mod generator;
pub mod model;

pub use config::BuilderConfig;
pub use error::{EditorError, EditorResult};
