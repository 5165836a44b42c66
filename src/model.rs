use serde::{Deserialize, Serialize};
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// Block types
// ────────────────────────────────────────────────────────────────────────────

/// Identifier of a block type in the catalog (e.g. `"header"`, `"hero"`).
///
/// Drag payloads carry free-form strings, so the identifier is kept as text
/// and resolved against the catalog on drop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockTypeId(pub String);

impl BlockTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockTypeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Default markup fragment of a block type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTemplate(pub String);

impl ContentTemplate {
    pub fn markup(&self) -> &str {
        &self.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Placed blocks
// ────────────────────────────────────────────────────────────────────────────

/// Stable identity of a block on the canvas. Ids are never reused within a
/// canvas, so they survive reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One instance of a block type placed on the canvas.
///
/// Content is a copy of the catalog template taken at drop time and is not
/// edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub id: BlockId,
    pub block_type: BlockTypeId,
    pub content: ContentTemplate,
}

/// Where a block goes in the canvas sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertionPoint {
    /// Append after the last block.
    End,
    /// Insert directly before the given block.
    Before(BlockId),
}

// ────────────────────────────────────────────────────────────────────────────
// Geometry reported by the view
// ────────────────────────────────────────────────────────────────────────────

/// Vertical extent of a rendered block, in the same coordinate space as the
/// pointer position of drag events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRect {
    pub id: BlockId,
    pub top: f32,
    pub height: f32,
}

impl BlockRect {
    pub fn new(id: BlockId, top: f32, height: f32) -> Self {
        Self { id, top, height }
    }

    /// Vertical midpoint of the block.
    pub fn mid_y(&self) -> f32 {
        self.top + self.height / 2.0
    }
}
