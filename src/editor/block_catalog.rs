//! Block catalog: the page sections that can be dragged onto the canvas.
//!
//! Each entry specifies the block type identifier, a human-readable display
//! name, a short description for the sidebar, and the default markup template
//! that is copied into the canvas when the block is dropped.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rustypage::editor::block_catalog::{get_block_catalog, lookup};
//!
//! let hero = lookup("hero").expect("hero is a built-in block");
//! let matches: Vec<_> = get_block_catalog()
//!     .values()
//!     .filter(|e| e.matches_query("nav"))
//!     .collect();
//! ```

use crate::model::{BlockTypeId, ContentTemplate};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// A single entry in the block catalog.
#[derive(Debug, Clone)]
pub struct BlockCatalogEntry {
    /// Block type identifier carried in drag payloads (e.g. `"hero"`).
    pub block_type: BlockTypeId,
    /// Human-readable name shown in the sidebar.
    pub display_name: String,
    /// Brief description of the section.
    pub description: String,
    /// Default markup placed on the canvas.
    pub template: ContentTemplate,
}

impl BlockCatalogEntry {
    /// Check if this entry matches a search query (case-insensitive substring
    /// match on block type, display name, or description).
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.block_type.as_str().to_lowercase().contains(&q)
            || self.display_name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
    }
}

fn entry(block_type: &str, display_name: &str, description: &str, template: &str) -> BlockCatalogEntry {
    BlockCatalogEntry {
        block_type: BlockTypeId::new(block_type),
        display_name: display_name.to_string(),
        description: description.to_string(),
        template: ContentTemplate(template.to_string()),
    }
}

/// Returns the catalog keyed by block type, in sidebar order.
///
/// Built on first access and read-only for the lifetime of the process.
pub fn get_block_catalog() -> &'static IndexMap<BlockTypeId, BlockCatalogEntry> {
    static CATALOG: Lazy<IndexMap<BlockTypeId, BlockCatalogEntry>> = Lazy::new(|| {
        build_catalog()
            .into_iter()
            .map(|e| (e.block_type.clone(), e))
            .collect()
    });
    &CATALOG
}

/// Catalog entries in sidebar order.
pub fn entries() -> impl Iterator<Item = &'static BlockCatalogEntry> {
    get_block_catalog().values()
}

/// Look up the catalog entry for a block type.
///
/// Unknown identifiers yield `None`; callers treat that as "nothing to drop".
pub fn lookup(block_type: &str) -> Option<&'static BlockCatalogEntry> {
    get_block_catalog().get(&BlockTypeId::new(block_type))
}

/// Look up just the default template for a block type.
pub fn lookup_template(block_type: &str) -> Option<&'static ContentTemplate> {
    lookup(block_type).map(|e| &e.template)
}

fn build_catalog() -> Vec<BlockCatalogEntry> {
    vec![
        entry(
            "header",
            "Header",
            "Site title with navigation links",
            r##"<header class="block-header">
    <div class="container">
        <div class="logo"><strong>Brand</strong></div>
        <nav>
            <a href="#">Home</a>
            <a href="#">About</a>
            <a href="#">Services</a>
            <a href="#">Contact</a>
        </nav>
    </div>
</header>"##,
        ),
        entry(
            "hero",
            "Hero",
            "Large headline with a call-to-action button",
            r##"<section class="block-hero">
    <div class="container">
        <h1>Welcome to Our Website</h1>
        <p>We build amazing digital experiences.</p>
        <button class="btn-cta">Get Started</button>
    </div>
</section>"##,
        ),
        entry(
            "features",
            "Features",
            "Three-column grid of feature highlights",
            r##"<section class="block-features">
    <div class="container">
        <div class="feature-grid">
            <div class="feature-item">
                <h3>Fast</h3>
                <p>Optimized for speed and performance.</p>
            </div>
            <div class="feature-item">
                <h3>Secure</h3>
                <p>Built with security best practices.</p>
            </div>
            <div class="feature-item">
                <h3>Reliable</h3>
                <p>Always available when you need it.</p>
            </div>
        </div>
    </div>
</section>"##,
        ),
        entry(
            "content",
            "Content",
            "Heading with a paragraph of body text",
            r##"<section class="block-content">
    <div class="container">
        <h2>About Us</h2>
        <p>Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.</p>
    </div>
</section>"##,
        ),
        entry(
            "footer",
            "Footer",
            "Copyright notice",
            r##"<footer class="block-footer">
    <div class="container">
        <p>&copy; 2024 Brand. All rights reserved.</p>
    </div>
</footer>"##,
        ),
    ]
}
