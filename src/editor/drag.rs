//! Drag-and-drop session tracking.
//!
//! [`DragController`] holds at most one [`DragSession`] and turns pointer
//! positions into [`InsertionPoint`]s. It never mutates the canvas itself; a
//! successful drop yields a [`DropAction`] that the editor state applies.

use crate::error::{EditorError, EditorResult};
use crate::model::{BlockId, BlockRect, BlockTypeId, InsertionPoint};

/// Drag data key carrying a block type from the sidebar.
pub const TYPE_KEY: &str = "type";
/// Drag data key carrying the reorder marker.
pub const REORDER_KEY: &str = "text/plain";
/// Value of [`REORDER_KEY`] for blocks dragged within the canvas.
pub const REORDER_MARKER: &str = "reorder";

// ────────────────────────────────────────────────────────────────────────────
// Payload
// ────────────────────────────────────────────────────────────────────────────

/// Decoded drag data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A new block of this type, dragged from the sidebar.
    NewBlock(BlockTypeId),
    /// A block already on the canvas is being moved.
    Reorder,
}

impl DragPayload {
    /// Decode drag data given as `(key, value)` pairs.
    ///
    /// A non-empty `type` entry wins over the reorder marker, matching the
    /// order in which drop handlers inspect the data.
    pub fn from_pairs<'a, I>(pairs: I) -> EditorResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut reorder = false;
        for (key, value) in pairs {
            match key {
                TYPE_KEY if !value.is_empty() => {
                    return Ok(Self::NewBlock(BlockTypeId::new(value)));
                }
                REORDER_KEY if value == REORDER_MARKER => reorder = true,
                _ => {}
            }
        }
        if reorder {
            Ok(Self::Reorder)
        } else {
            Err(EditorError::MalformedPayload)
        }
    }

    /// The `(key, value)` pair a drag source sets for this payload.
    pub fn to_pair(&self) -> (&'static str, String) {
        match self {
            Self::NewBlock(t) => (TYPE_KEY, t.to_string()),
            Self::Reorder => (REORDER_KEY, REORDER_MARKER.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

/// What the user is currently dragging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    /// A new block of the given type, from the sidebar.
    DraggingNew(BlockTypeId),
    /// An existing canvas block.
    DraggingExisting(BlockId),
}

/// Canvas change requested by a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    Insert { block_type: BlockTypeId, at: InsertionPoint },
    Move { id: BlockId, to: InsertionPoint },
}

/// Find where a block dropped at pointer height `y` should go.
///
/// Among the blocks other than `exclude`, the target is the one whose vertical
/// midpoint lies below `y` and closest to it; the drop goes before that block.
/// With no such block the drop appends.
pub fn nearest_insertion_point(rects: &[BlockRect], y: f32, exclude: Option<BlockId>) -> InsertionPoint {
    let mut closest: Option<(f32, BlockId)> = None;
    for rect in rects.iter().filter(|r| Some(r.id) != exclude) {
        let offset = y - rect.mid_y();
        if offset < 0.0 && closest.is_none_or(|(best, _)| offset > best) {
            closest = Some((offset, rect.id));
        }
    }
    match closest {
        Some((_, id)) => InsertionPoint::Before(id),
        None => InsertionPoint::End,
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: DragSession,
    hover: Option<InsertionPoint>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_idle(&self) -> bool {
        self.session == DragSession::Idle
    }

    /// The canvas block being dragged, if any.
    pub fn dragged_block(&self) -> Option<BlockId> {
        match self.session {
            DragSession::DraggingExisting(id) => Some(id),
            _ => None,
        }
    }

    /// Insertion point computed by the last drag-over, for drop indicators.
    pub fn hover(&self) -> Option<InsertionPoint> {
        self.hover
    }

    /// Start dragging a new block from the sidebar.
    pub fn start_new(&mut self, block_type: BlockTypeId) {
        self.begin(DragSession::DraggingNew(block_type));
    }

    /// Start dragging a block that is already on the canvas.
    pub fn start_existing(&mut self, id: BlockId) {
        self.begin(DragSession::DraggingExisting(id));
    }

    fn begin(&mut self, session: DragSession) {
        if !self.is_idle() {
            tracing::debug!(previous = ?self.session, "drag started while another was active; abandoning it");
        }
        tracing::debug!(?session, "drag start");
        self.session = session;
        self.hover = None;
    }

    /// Pointer moved over the canvas. Returns the current insertion point, or
    /// `None` when no drag is active.
    pub fn drag_over(&mut self, y: f32, rects: &[BlockRect]) -> Option<InsertionPoint> {
        if self.is_idle() {
            return None;
        }
        let point = nearest_insertion_point(rects, y, self.dragged_block());
        self.hover = Some(point);
        Some(point)
    }

    /// Drop on the canvas. The session ends regardless of the outcome.
    ///
    /// Returns the action to apply, or an error describing why the drop is
    /// ignored. Block types are not validated here.
    pub fn drop(&mut self, payload: EditorResult<DragPayload>, y: f32, rects: &[BlockRect]) -> EditorResult<DropAction> {
        let session = self.end();
        match payload? {
            DragPayload::NewBlock(block_type) => Ok(DropAction::Insert {
                block_type,
                at: nearest_insertion_point(rects, y, None),
            }),
            DragPayload::Reorder => match session {
                DragSession::DraggingExisting(id) => Ok(DropAction::Move {
                    id,
                    to: nearest_insertion_point(rects, y, Some(id)),
                }),
                // A reorder marker without a canvas block being dragged.
                _ => Err(EditorError::MalformedPayload),
            },
        }
    }

    /// End the session without a drop (cancel), returning what was dragged.
    pub fn end(&mut self) -> DragSession {
        self.hover = None;
        let session = std::mem::take(&mut self.session);
        if session != DragSession::Idle {
            tracing::debug!(?session, "drag end");
        }
        session
    }
}
