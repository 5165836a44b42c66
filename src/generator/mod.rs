//! HTML generation from the canvas model.
//!
//! - [`html`] – Export the canvas as a standalone document and render the
//!   builder view.

pub mod html;
