//! Editor state management.
//!
//! [`EditorState`] owns the canvas and adds the interactive state around it:
//! the drag session, undo/redo history and dirty tracking. Every user input
//! event maps to one method, which runs to completion before the next event.

use crate::config::BuilderConfig;
use crate::error::{EditorError, EditorResult};
use crate::generator::html;
use crate::model::{BlockId, BlockRect, BlockTypeId, InsertionPoint};

use super::canvas::Canvas;
use super::drag::{DragController, DragPayload, DropAction};
use super::operations::{self, EditorCommand, EditorHistory};

// ────────────────────────────────────────────────────────────────────────────
// Collaborators
// ────────────────────────────────────────────────────────────────────────────

/// System clipboard used by export.
pub trait Clipboard {
    /// Write UTF-8 text, returning a diagnostic message on failure.
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Yes/no prompt gating destructive actions.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// User-visible outcome of an export to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The document was copied.
    Copied,
    /// The canvas had no blocks; nothing was copied.
    CanvasEmpty,
    /// The clipboard rejected the write.
    CopyFailed(String),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Copied => "HTML copied to clipboard!",
            Self::CanvasEmpty => "Canvas is empty!",
            Self::CopyFailed(_) => "Failed to copy HTML. Check logs.",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// EditorState — the top-level state for the builder
// ────────────────────────────────────────────────────────────────────────────

/// The complete state of the page builder.
///
/// # Example
///
/// ```rust,ignore
/// use rustypage::editor::EditorState;
///
/// let mut state = EditorState::default();
/// state.drag_start_new("hero".into());
/// state.drop([("type", "hero")], 0.0, &[]);
/// assert_eq!(state.canvas.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EditorState {
    pub config: BuilderConfig,
    /// Placed blocks.
    pub canvas: Canvas,
    /// Current drag session.
    pub drag: DragController,
    /// Undo/redo history.
    pub history: EditorHistory,
    /// Whether the canvas changed since the last successful export.
    pub dirty: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl EditorState {
    pub fn new(config: BuilderConfig) -> Self {
        let history = EditorHistory::new(config.history_depth);
        Self {
            config,
            canvas: Canvas::new(),
            drag: DragController::new(),
            history,
            dirty: false,
        }
    }

    fn record(&mut self, cmd: EditorCommand) {
        self.history.push(cmd);
        self.dirty = true;
    }

    /// Drag started on a sidebar item.
    pub fn drag_start_new(&mut self, block_type: BlockTypeId) {
        self.drag.start_new(block_type);
    }

    /// Drag started on a placed block.
    pub fn drag_start_existing(&mut self, id: BlockId) -> EditorResult<()> {
        if self.canvas.get(id).is_none() {
            return Err(EditorError::BlockNotFound(id));
        }
        self.drag.start_existing(id);
        Ok(())
    }

    /// Pointer moved over the canvas during a drag.
    pub fn drag_over(&mut self, y: f32, rects: &[BlockRect]) -> Option<InsertionPoint> {
        self.drag.drag_over(y, rects)
    }

    /// Drop on the canvas with the given drag data.
    ///
    /// Unknown block types and unrecognized payloads are ignored. Returns the
    /// id of the inserted or moved block when the canvas changed.
    pub fn drop<'a, I>(&mut self, pairs: I, y: f32, rects: &[BlockRect]) -> Option<BlockId>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let payload = DragPayload::from_pairs(pairs);
        let result = self
            .drag
            .drop(payload, y, rects)
            .and_then(|action| self.apply_drop(action));
        match result {
            Ok(Some(cmd)) => {
                let id = match &cmd {
                    EditorCommand::Insert { block, .. } => Some(block.id),
                    EditorCommand::Move { id, .. } => Some(*id),
                    _ => None,
                };
                self.record(cmd);
                id
            }
            Ok(None) => {
                tracing::debug!("drop left the order unchanged");
                None
            }
            Err(err) => {
                tracing::debug!(%err, "drop ignored");
                None
            }
        }
    }

    fn apply_drop(&mut self, action: DropAction) -> EditorResult<Option<EditorCommand>> {
        match action {
            DropAction::Insert { block_type, at } => {
                operations::add_block(&mut self.canvas, block_type.as_str(), at).map(Some)
            }
            DropAction::Move { id, to } => operations::move_block(&mut self.canvas, id, to),
        }
    }

    /// Drag ended without a drop on the canvas.
    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    /// Delete control clicked on a block.
    pub fn delete_block(&mut self, id: BlockId) -> EditorResult<()> {
        let cmd = operations::delete_block(&mut self.canvas, id)?;
        self.record(cmd);
        Ok(())
    }

    /// Clear the canvas after the user confirms. Returns whether the user
    /// confirmed; clearing an already empty canvas records nothing.
    pub fn clear(&mut self, confirm: &mut dyn Confirm) -> bool {
        if !confirm.confirm(&self.config.confirm_message) {
            return false;
        }
        if let Some(cmd) = operations::clear_canvas(&mut self.canvas) {
            self.record(cmd);
        }
        true
    }

    pub fn undo(&mut self) {
        if self.history.undo(&mut self.canvas) {
            self.dirty = true;
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo(&mut self.canvas) {
            self.dirty = true;
        }
    }

    /// Export the canvas as a standalone HTML document.
    pub fn export(&self) -> EditorResult<String> {
        html::export_document(&self.canvas, &self.config)
    }

    /// Export and hand the document to the clipboard.
    ///
    /// The clipboard is not touched when the canvas is empty. A failed write
    /// leaves the canvas as it was.
    pub fn export_to_clipboard(&mut self, clipboard: &mut dyn Clipboard) -> Notice {
        let document = match self.export() {
            Ok(d) => d,
            Err(_) => return Notice::CanvasEmpty,
        };
        match clipboard.write_text(&document) {
            Ok(()) => {
                self.dirty = false;
                Notice::Copied
            }
            Err(detail) => {
                tracing::warn!(error = %EditorError::clipboard(detail.clone()), "failed to copy");
                Notice::CopyFailed(detail)
            }
        }
    }

    /// Builder view markup for the current state.
    pub fn render_view(&self) -> String {
        html::render_canvas(&self.canvas, self.drag.dragged_block(), &self.config)
    }

    /// Export document for previewing; allowed on an empty canvas.
    pub fn preview(&self) -> String {
        html::preview_document(&self.canvas, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
        fail: Option<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), String> {
            self.writes.push(text.to_string());
            match &self.fail {
                Some(msg) => Err(msg.clone()),
                None => Ok(()),
            }
        }
    }

    fn rects_for(state: &EditorState) -> Vec<BlockRect> {
        state
            .canvas
            .ids()
            .into_iter()
            .enumerate()
            .map(|(i, id)| BlockRect::new(id, i as f32 * 100.0, 100.0))
            .collect()
    }

    fn add(state: &mut EditorState, block_type: &str) -> BlockId {
        state.drag_start_new(block_type.into());
        let rects = rects_for(state);
        state.drop([("type", block_type)], 1.0e6, &rects).unwrap()
    }

    #[test]
    fn test_editor_state_new() {
        let state = EditorState::default();
        assert!(!state.dirty);
        assert!(state.canvas.is_empty());
        assert!(state.drag.is_idle());
        assert!(!state.history.can_undo());
    }

    #[test]
    fn test_drop_new_block_marks_dirty() {
        let mut state = EditorState::default();
        add(&mut state, "hero");
        assert_eq!(state.canvas.block_types(), vec!["hero"]);
        assert!(state.dirty);
        assert!(state.drag.is_idle());
    }

    #[test]
    fn test_drop_unknown_type_is_ignored() {
        let mut state = EditorState::default();
        state.drag_start_new("nonexistent-widget".into());
        assert_eq!(state.drop([("type", "nonexistent-widget")], 0.0, &[]), None);
        assert!(state.canvas.is_empty());
        assert!(!state.dirty);
        assert!(!state.history.can_undo());
        assert!(state.drag.is_idle());
    }

    #[test]
    fn test_drop_malformed_payload_is_ignored() {
        let mut state = EditorState::default();
        add(&mut state, "hero");
        let before = state.canvas.ids();
        assert_eq!(state.drop([("text/html", "<b>hi</b>")], 0.0, &[]), None);
        assert_eq!(state.canvas.ids(), before);
    }

    #[test]
    fn test_reorder_by_drag() {
        let mut state = EditorState::default();
        let a = add(&mut state, "header");
        let b = add(&mut state, "hero");
        let c = add(&mut state, "footer");
        state.drag_start_existing(b).unwrap();
        let rects = rects_for(&state);
        assert_eq!(state.drag_over(10.0, &rects), Some(InsertionPoint::Before(a)));
        assert_eq!(state.drop([("text/plain", "reorder")], 10.0, &rects), Some(b));
        assert_eq!(state.canvas.ids(), vec![b, a, c]);
    }

    #[test]
    fn test_drop_into_own_slot_is_not_recorded() {
        let mut state = EditorState::default();
        let a = add(&mut state, "header");
        let b = add(&mut state, "hero");
        let c = add(&mut state, "footer");
        state.history.clear();
        state.dirty = false;

        state.drag_start_existing(b).unwrap();
        let rects = rects_for(&state);
        // Below the header's midpoint, above the footer's: still hero's slot.
        assert_eq!(state.drag_over(140.0, &rects), Some(InsertionPoint::Before(c)));
        assert_eq!(state.drop([("text/plain", "reorder")], 140.0, &rects), None);
        assert_eq!(state.canvas.ids(), vec![a, b, c]);
        assert!(!state.history.can_undo());
        assert!(!state.dirty);
        assert!(state.drag.is_idle());
    }

    #[test]
    fn test_noop_drop_keeps_redo() {
        let mut state = EditorState::default();
        add(&mut state, "header");
        let b = add(&mut state, "hero");
        state.undo();
        assert!(state.history.can_redo());

        let a = state.canvas.ids()[0];
        state.drag_start_existing(a).unwrap();
        let rects = rects_for(&state);
        assert_eq!(state.drop([("text/plain", "reorder")], 10.0, &rects), None);
        assert!(state.history.can_redo());
        state.redo();
        assert_eq!(state.canvas.ids(), vec![a, b]);
    }

    #[test]
    fn test_clear_empty_canvas_is_not_recorded() {
        let mut state = EditorState::default();
        assert!(state.clear(&mut |_: &str| true));
        assert!(!state.history.can_undo());
        assert!(!state.dirty);
    }

    #[test]
    fn test_drag_existing_unknown_block() {
        let mut state = EditorState::default();
        assert_eq!(
            state.drag_start_existing(BlockId(5)),
            Err(EditorError::BlockNotFound(BlockId(5)))
        );
        assert!(state.drag.is_idle());
    }

    #[test]
    fn test_cancel_drag_leaves_canvas() {
        let mut state = EditorState::default();
        let a = add(&mut state, "header");
        add(&mut state, "footer");
        let before = state.canvas.ids();
        state.drag_start_existing(a).unwrap();
        let rects = rects_for(&state);
        state.drag_over(250.0, &rects);
        state.drag_end();
        assert!(state.drag.is_idle());
        assert_eq!(state.canvas.ids(), before);
    }

    #[test]
    fn test_delete_block() {
        let mut state = EditorState::default();
        let a = add(&mut state, "header");
        let b = add(&mut state, "footer");
        state.delete_block(a).unwrap();
        assert_eq!(state.canvas.ids(), vec![b]);
        assert!(state.delete_block(a).is_err());
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut state = EditorState::default();
        add(&mut state, "header");
        let mut asked = Vec::new();
        let cleared = state.clear(&mut |msg: &str| {
            asked.push(msg.to_string());
            false
        });
        assert!(!cleared);
        assert_eq!(state.canvas.len(), 1);
        assert_eq!(asked, vec!["Are you sure you want to clear the canvas?".to_string()]);

        assert!(state.clear(&mut |_: &str| true));
        assert!(state.canvas.is_empty());
        assert!(state.render_view().contains("empty-state"));
    }

    #[test]
    fn test_undo_clear() {
        let mut state = EditorState::default();
        let a = add(&mut state, "header");
        state.clear(&mut |_: &str| true);
        state.undo();
        assert_eq!(state.canvas.ids(), vec![a]);
        state.redo();
        assert!(state.canvas.is_empty());
    }

    #[test]
    fn test_export_to_clipboard_empty() {
        let mut state = EditorState::default();
        let mut clipboard = RecordingClipboard::default();
        assert_eq!(state.export_to_clipboard(&mut clipboard), Notice::CanvasEmpty);
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn test_export_to_clipboard_success() {
        let mut state = EditorState::default();
        add(&mut state, "hero");
        let mut clipboard = RecordingClipboard::default();
        assert_eq!(state.export_to_clipboard(&mut clipboard), Notice::Copied);
        assert_eq!(clipboard.writes.len(), 1);
        assert!(clipboard.writes[0].contains("block-hero"));
        assert!(!state.dirty);
    }

    #[test]
    fn test_export_to_clipboard_failure_keeps_canvas() {
        let mut state = EditorState::default();
        let a = add(&mut state, "hero");
        let mut clipboard = RecordingClipboard {
            fail: Some("permission denied".to_string()),
            ..Default::default()
        };
        let notice = state.export_to_clipboard(&mut clipboard);
        assert_eq!(notice, Notice::CopyFailed("permission denied".to_string()));
        assert_eq!(notice.message(), "Failed to copy HTML. Check logs.");
        assert_eq!(state.canvas.ids(), vec![a]);
        assert!(state.dirty);
    }

    #[test]
    fn test_preview_allows_empty_canvas() {
        let mut state = EditorState::default();
        assert!(state.preview().contains("<body>\n</body>"));
        add(&mut state, "footer");
        assert_eq!(state.preview(), state.export().unwrap());
    }

    #[test]
    fn test_render_view_marks_dragged_block() {
        let mut state = EditorState::default();
        let a = add(&mut state, "hero");
        state.drag_start_existing(a).unwrap();
        assert!(state.render_view().contains("canvas-block dragging"));
        state.drag_end();
        assert!(!state.render_view().contains("dragging"));
    }
}
